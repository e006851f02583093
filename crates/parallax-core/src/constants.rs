// Default tuning for the page effects. All of these were tuned by eye and
// can be overridden per page through `Tuning`.

// Navbar gets the `scrolled` class strictly above this offset (px)
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

// Extra margin above/below the viewport inside which gated elements animate (px)
pub const NEAR_VIEWPORT_MARGIN: f64 = 300.0;

// Parallax factors per category
pub const BACKGROUND_FACTOR: f64 = 0.5;
pub const HERO_FACTOR: f64 = 0.8;
pub const CUSTOM_BACKGROUND_FACTOR: f64 = 0.3;
pub const CONTENT_DAMPING: f64 = 0.6;
pub const CONTENT_FACTOR: f64 = 0.15;

// Hero text fades out over this fraction of the viewport height
pub const HERO_FADE_FRACTION: f64 = 0.7;

// Content opacity: opaque above `FADE_END`, transparent below `FADE_START`
// (fractions of viewport height, measured from the scroll offset)
pub const CONTENT_FADE_END: f64 = 0.3;
pub const CONTENT_FADE_START: f64 = 0.85;

// Reveal
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.8;
pub const REVEAL_MIN_RATIO: f64 = 0.1;
pub const REVEAL_OFFSET_PX: f64 = 30.0;
pub const REVEAL_OBSERVED_OFFSET_PX: f64 = 20.0;
pub const REVEAL_THRESHOLDS: [f64; 3] = [0.0, 0.1, 0.5];
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -80px 0px";

// Hero decoration pointer follow
pub const HERO_FOLLOW_K: f32 = 0.05;
pub const HERO_FOLLOW_STEP_PX: f32 = 8.0;

// Hover tilt
pub const TILT_K: f32 = 0.1;
pub const TILT_SENSITIVITY: f32 = 15.0;
pub const TILT_HOVER_SCALE: f32 = 1.05;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;

// Floating decorations: duration and delay grow with the element index
pub const FLOAT_BASE_DURATION_MS: u32 = 4000;
pub const FLOAT_DURATION_STEP_MS: u32 = 800;
pub const FLOAT_DELAY_STEP_MS: u32 = 400;

// In-page anchors land this far below the target to clear the navbar (px)
pub const ANCHOR_SCROLL_OFFSET: f64 = 80.0;

// Page fade-in on load
pub const LOAD_FADE_DELAY_MS: i32 = 100;
