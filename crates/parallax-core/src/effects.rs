//! Per-element parallax calculators.
//!
//! Each tracked element gets a [`Category`] once, when it is registered, and
//! a speed factor read from its `data-speed` attribute. Per frame the
//! calculators map scroll offset + element geometry to an [`Effect`].

use crate::config::Tuning;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// `.parallax-bg`
    Background,
    /// `.hero-title` / `.hero-subtitle`
    HeroText,
    /// `.custom-bg`
    CustomBackground,
    /// Any other `[data-speed]` element
    Content,
}

impl Category {
    /// Classify from class membership. Earlier variants win when an element
    /// carries several marker classes.
    pub fn from_classes(has_class: impl Fn(&str) -> bool) -> Self {
        if has_class("parallax-bg") {
            Category::Background
        } else if has_class("hero-title") || has_class("hero-subtitle") {
            Category::HeroText
        } else if has_class("custom-bg") {
            Category::CustomBackground
        } else {
            Category::Content
        }
    }

    /// Background and hero text animate even when far from the viewport.
    #[inline]
    pub fn always_animated(self) -> bool {
        matches!(self, Category::Background | Category::HeroText)
    }
}

/// Document-relative geometry of one element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementGeometry {
    pub top: f64,
    pub height: f64,
}

/// Scroll sample shared by every element in one frame pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollFrame {
    pub scroll: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Effect {
    pub translate_y: f64,
    /// `None` leaves the element's opacity as it is.
    pub opacity: Option<f64>,
}

#[inline]
pub fn near_viewport(geom: ElementGeometry, frame: ScrollFrame, margin: f64) -> bool {
    geom.top < frame.scroll + frame.viewport_height + margin
        && geom.top + geom.height > frame.scroll - margin
}

#[inline]
pub fn hero_opacity(frame: ScrollFrame, tuning: &Tuning) -> f64 {
    let span = frame.viewport_height * tuning.hero_fade_fraction;
    // No viewport to fade across (e.g. inner_height unavailable)
    if span.is_nan() || span <= 0.0 {
        return 1.0;
    }
    (1.0 - frame.scroll / span).clamp(0.0, 1.0)
}

/// Opaque while the element top sits above `scroll + vh * fade_end`, fully
/// transparent below `scroll + vh * fade_start`, linear in between.
pub fn content_opacity(top: f64, frame: ScrollFrame, tuning: &Tuning) -> f64 {
    let fade_start = frame.scroll + frame.viewport_height * tuning.content_fade_start;
    let fade_end = frame.scroll + frame.viewport_height * tuning.content_fade_end;
    let opacity = if top > fade_start {
        0.0
    } else if top > fade_end {
        1.0 - (top - fade_end) / (fade_start - fade_end)
    } else {
        1.0
    };
    opacity.clamp(0.0, 1.0)
}

/// Compute the effect for one element, or `None` when the element is gated
/// out (far from the viewport) and its previous output should stay.
pub fn compute_effect(
    category: Category,
    speed: f64,
    geom: ElementGeometry,
    frame: ScrollFrame,
    tuning: &Tuning,
) -> Option<Effect> {
    if !category.always_animated() && !near_viewport(geom, frame, tuning.viewport_margin) {
        return None;
    }
    let s = frame.scroll;
    let effect = match category {
        Category::Background => Effect {
            translate_y: -(s * speed * tuning.background_factor),
            opacity: None,
        },
        Category::HeroText => Effect {
            translate_y: s * speed * tuning.hero_factor,
            opacity: Some(hero_opacity(frame, tuning)),
        },
        Category::CustomBackground => Effect {
            translate_y: -(s * speed * tuning.custom_background_factor),
            opacity: None,
        },
        Category::Content => {
            let element_mid = geom.top + geom.height / 2.0;
            let viewport_mid = s + frame.viewport_height / 2.0;
            let dist = element_mid - viewport_mid;
            Effect {
                translate_y: dist * speed * tuning.content_damping * tuning.content_factor,
                opacity: Some(content_opacity(geom.top, frame, tuning)),
            }
        }
    };
    Some(effect)
}

/// Strictly above the threshold; 100 is still "not scrolled".
#[inline]
pub fn navbar_scrolled(scroll: f64, tuning: &Tuning) -> bool {
    scroll > tuning.navbar_threshold
}

/// Parse a `data-speed` value. Malformed input yields NaN, which flows into
/// the transform and leaves the element visually still.
pub fn parse_speed(raw: Option<&str>) -> f64 {
    raw.and_then(|r| r.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
