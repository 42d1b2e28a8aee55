// A section becomes active this many px before its top reaches the viewport top
pub const NAV_ACTIVATION_LEAD: f64 = 200.0;

/// Id of the last section whose top (minus the lead) has been scrolled
/// past. Sections are given in document order as `(id, offset_top)`.
pub fn active_section<'a, I>(sections: I, scroll_y: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    sections
        .into_iter()
        .filter(|(_, top)| scroll_y >= top - NAV_ACTIVATION_LEAD)
        .last()
        .map(|(id, _)| id)
}

/// Whether a nav link href (`"#about"`) points at the active section.
#[inline]
pub fn nav_link_is_active(href: &str, active: Option<&str>) -> bool {
    let target = href.get(1..).unwrap_or("");
    target == active.unwrap_or("")
}
