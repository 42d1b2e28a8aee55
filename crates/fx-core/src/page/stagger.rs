pub const CODE_LINE_BASE_DELAY: f64 = 0.5;
pub const CODE_LINE_STEP: f64 = 0.1;
pub const STAT_STEP: f64 = 0.1;

/// CSS `animation` shorthand for the i-th line of the hero code block.
pub fn code_line_animation(index: usize) -> String {
    format!(
        "fadeInUp 0.5s ease-out {}s forwards",
        CODE_LINE_BASE_DELAY + index as f64 * CODE_LINE_STEP
    )
}

pub fn stat_animation_delay(index: usize) -> String {
    format!("{}s", index as f64 * STAT_STEP)
}
