pub mod config;
pub mod constants;
pub mod damp;
pub mod page;
pub mod parallax;
pub mod schedule;
pub mod scroll;

pub use config::*;
pub use constants::*;
pub use damp::*;
pub use parallax::*;
pub use schedule::*;
pub use scroll::*;
