// Element hooks the effects look for in the page markup.

// Inertial scroll
pub const SMOOTH_CONTENT_ID: &str = "smooth-content";
pub const SCROLL_EASE_ATTR: &str = "data-scroll-ease"; // on #smooth-content

// Cursor parallax
pub const SCENE_SELECTOR: &str = ".robotics-scene svg";
pub const TRACE_SELECTOR: &str = ".trace";
pub const LED_SELECTOR: &str = ".led";
pub const BLOB_SELECTOR: &str = ".blob";
pub const LED_PULSE_CLASS: &str = "pulse";
pub const PARALLAX_EASE_ATTR: &str = "data-parallax-ease"; // on <body>

// Page behaviours
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const SECTION_SELECTOR: &str = "section";
pub const REVEAL_SECTION_SELECTOR: &str = "section:not(.hero)";
pub const REVEAL_CONTAINER_SELECTOR: &str = ".container";
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const TYPING_SELECTOR: &str = ".typing";
pub const TYPING_TEXT_KEY: &str = "text"; // dataset key, i.e. data-text
pub const CONTACT_FORM_SELECTOR: &str = ".contact-form";
pub const CODE_LINE_SELECTOR: &str = ".code-block .code-line";
pub const STAT_SELECTOR: &str = ".stat";
pub const HOVER_SELECTOR: &str = ".btn, .project-card, .skill-tag, .contact-item";

// Nav link colors
pub const NAV_COLOR_IDLE: &str = "var(--text)";
pub const NAV_COLOR_ACTIVE: &str = "var(--accent)";

pub const WELCOME_MESSAGE: &str = "Welcome to my portfolio! Feel free to explore and get in touch.";
