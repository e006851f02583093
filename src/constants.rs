// DOM hooks the effects attach to. Pages opt in by using these classes.

pub const PARALLAX_SELECTOR: &str = "[data-speed]";
pub const SPEED_ATTR: &str = "data-speed";

pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const HERO_SECTION_SELECTOR: &str = ".hero-section";
pub const HERO_DECORATION_SELECTOR: &str = ".floating-yarn";
pub const FLOATING_SELECTOR: &str = ".floating-yarn, .floating-element";
pub const TILT_SELECTOR: &str = ".mock-image";
pub const CTA_SELECTOR: &str = ".cta-button";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Reveal groups: the first is hidden inline at startup, the second by the
// injected stylesheet. Both share one reveal set.
pub const SCROLL_REVEAL_SELECTOR: &str = ".gallery-item, .process-step, .feature";
pub const OBSERVED_REVEAL_SELECTOR: &str = ".text-content, .image-parallax, .mock-image";
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

// Per-page tuning overrides live on <body> as `data-fx-<key>`
pub const TUNING_ATTR_PREFIX: &str = "data-fx-";

pub const CTA_MESSAGE: &str = "Custom order form would open here! This is a demo.";
