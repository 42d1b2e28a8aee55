//! One-shot page behaviours that share the document with the animation
//! loops. Only the decisions live here; the web crate owns the DOM calls.

pub mod anchor;
pub mod contact;
pub mod header;
pub mod nav;
pub mod reveal;
pub mod stagger;
pub mod typing;

pub use anchor::*;
pub use contact::*;
pub use header::*;
pub use nav::*;
pub use reveal::*;
pub use stagger::*;
pub use typing::*;
