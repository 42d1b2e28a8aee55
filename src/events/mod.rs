pub mod anchors;
pub mod form;
pub mod pointer;
pub mod scroll;

pub use anchors::wire_anchor_links;
pub use form::wire_contact_form;
pub use pointer::{wire_hover_defaults, wire_pointer_handlers};
pub use scroll::wire_page_scroll;
