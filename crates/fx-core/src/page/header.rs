// Navbar styling switches once the page scrolls past this offset (px)
pub const HEADER_SOLID_AFTER: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    pub backdrop_filter: &'static str,
    pub box_shadow: &'static str,
}

pub const HEADER_RESTING: HeaderStyle = HeaderStyle {
    backdrop_filter: "blur(10px)",
    box_shadow: "none",
};

pub const HEADER_SCROLLED: HeaderStyle = HeaderStyle {
    backdrop_filter: "blur(15px)",
    box_shadow: "0 2px 20px rgba(0,0,0,0.08)",
};

#[inline]
pub fn header_style(scroll_y: f64) -> HeaderStyle {
    if scroll_y > HEADER_SOLID_AFTER {
        HEADER_SCROLLED
    } else {
        HEADER_RESTING
    }
}
