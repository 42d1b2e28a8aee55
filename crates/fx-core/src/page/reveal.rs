//! Scroll-reveal bookkeeping: which elements get baseline styles and how
//! much each one's transition is delayed when it scrolls into view.

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Elements observed directly.
pub const REVEAL_TARGETS: &str = ".about-text, .skill-category, .timeline-item, .project-card, .stat";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease-out, transform 0.6s ease-out";
pub const REVEAL_OFFSET_TARGET: &str = "translateY(30px)";
pub const REVEAL_OFFSET_CHILD: &str = "translateY(18px)";

pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_REVEAL: &str = "reveal";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// Generic section child, indexed by its `data-reveal-index`.
    SectionChild,
    ProjectCard,
    TimelineItem,
}

impl RevealKind {
    pub fn class_name(self) -> &'static str {
        match self {
            RevealKind::SectionChild => CLASS_REVEAL,
            RevealKind::ProjectCard => "project-card",
            RevealKind::TimelineItem => "timeline-item",
        }
    }

    /// Seconds of transition delay per index step.
    pub fn stagger(self) -> f64 {
        match self {
            RevealKind::SectionChild => 0.06,
            RevealKind::ProjectCard => 0.08,
            RevealKind::TimelineItem => 0.07,
        }
    }

    pub const ALL: [RevealKind; 3] = [
        RevealKind::SectionChild,
        RevealKind::ProjectCard,
        RevealKind::TimelineItem,
    ];
}

/// Kinds an element belongs to, given a class predicate. An element may
/// match several; each match rewrites the delay in this order, so the last
/// one wins.
pub fn reveal_kinds(has_class: impl Fn(&str) -> bool) -> impl Iterator<Item = RevealKind> {
    RevealKind::ALL
        .into_iter()
        .filter(move |k| has_class(k.class_name()))
}

/// `data-reveal-index` value; unparsable or missing reads as 0.
pub fn parse_reveal_index(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok()).unwrap_or(0)
}

pub fn transition_delay(kind: RevealKind, index: usize) -> String {
    format!("{}s", index as f64 * kind.stagger())
}

/// Baseline inline style, applied only where the element has none.
#[inline]
pub fn style_or_default<'a>(existing: &'a str, default: &'a str) -> &'a str {
    if existing.is_empty() {
        default
    } else {
        existing
    }
}
