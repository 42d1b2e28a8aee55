/// Selector to resolve for an in-page link, or `None` when the href points
/// at no element (`"#"`, empty fragment, or not a fragment at all).
pub fn anchor_selector(href: &str) -> Option<&str> {
    let frag = href.strip_prefix('#')?;
    if frag.trim().is_empty() {
        None
    } else {
        Some(href)
    }
}
