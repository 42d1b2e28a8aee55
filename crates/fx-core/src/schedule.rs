//! Frame-loop bookkeeping shared by both animation components.
//!
//! A loop is either waiting for its next frame callback (`Scheduled`) or
//! not (`Idle`). Stimuli call [`FrameLoop::wake`]; the frame callback calls
//! [`FrameLoop::begin_frame`] on entry and [`FrameLoop::end_frame`] on exit.
//! Both `wake` and `end_frame` answer whether the host must request another
//! animation frame, so the host never tracks a frame handle as state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPolicy {
    /// Reschedules every frame for the lifetime of the page.
    Perpetual,
    /// Reschedules only until the animated value settles.
    UntilSettled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Idle,
    Scheduled,
}

#[derive(Debug, Clone, Copy)]
pub struct FrameLoop {
    policy: LoopPolicy,
    state: LoopState,
}

impl FrameLoop {
    pub fn new(policy: LoopPolicy) -> Self {
        Self {
            policy,
            state: LoopState::Idle,
        }
    }

    pub fn perpetual() -> Self {
        Self::new(LoopPolicy::Perpetual)
    }

    pub fn until_settled() -> Self {
        Self::new(LoopPolicy::UntilSettled)
    }

    #[inline]
    pub fn policy(&self) -> LoopPolicy {
        self.policy
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.state == LoopState::Scheduled
    }

    /// Stimulus arrived. Returns true when a frame must be requested,
    /// i.e. the loop was idle.
    pub fn wake(&mut self) -> bool {
        match self.state {
            LoopState::Scheduled => false,
            LoopState::Idle => {
                self.state = LoopState::Scheduled;
                true
            }
        }
    }

    /// Frame callback entered; the pending request has been consumed.
    #[inline]
    pub fn begin_frame(&mut self) {
        self.state = LoopState::Idle;
    }

    /// Frame callback finished. Returns true when another frame must be
    /// requested.
    pub fn end_frame(&mut self, settled: bool) -> bool {
        let again = match self.policy {
            LoopPolicy::Perpetual => true,
            LoopPolicy::UntilSettled => !settled,
        };
        if again {
            self.state = LoopState::Scheduled;
        }
        again
    }
}
