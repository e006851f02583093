//! Per-page tuning of the effect constants.
//!
//! Every value defaults to the matching item in [`crate::constants`]. A page
//! can override individual values with `data-fx-<key>` attributes on its
//! `<body>`; the web front-end feeds those through [`Tuning::apply`].

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TuningError {
    #[error("unknown tuning key `{0}`")]
    UnknownKey(String),
    #[error("tuning key `{key}`: `{raw}` is not a number")]
    InvalidNumber { key: String, raw: String },
    #[error("tuning key `{key}`: {value} is out of range ({expected})")]
    OutOfRange {
        key: String,
        value: f64,
        expected: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tuning {
    pub navbar_threshold: f64,
    pub viewport_margin: f64,
    pub background_factor: f64,
    pub hero_factor: f64,
    pub hero_fade_fraction: f64,
    pub custom_background_factor: f64,
    pub content_damping: f64,
    pub content_factor: f64,
    pub content_fade_end: f64,
    pub content_fade_start: f64,
    pub reveal_fraction: f64,
    pub reveal_ratio: f64,
    pub reveal_offset: f64,
    pub hero_follow_k: f32,
    pub hero_follow_step: f32,
    pub tilt_k: f32,
    pub tilt_sensitivity: f32,
    pub tilt_hover_scale: f32,
    pub tilt_perspective: f32,
    pub anchor_offset: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            navbar_threshold: NAVBAR_SCROLL_THRESHOLD,
            viewport_margin: NEAR_VIEWPORT_MARGIN,
            background_factor: BACKGROUND_FACTOR,
            hero_factor: HERO_FACTOR,
            hero_fade_fraction: HERO_FADE_FRACTION,
            custom_background_factor: CUSTOM_BACKGROUND_FACTOR,
            content_damping: CONTENT_DAMPING,
            content_factor: CONTENT_FACTOR,
            content_fade_end: CONTENT_FADE_END,
            content_fade_start: CONTENT_FADE_START,
            reveal_fraction: REVEAL_VIEWPORT_FRACTION,
            reveal_ratio: REVEAL_MIN_RATIO,
            reveal_offset: REVEAL_OFFSET_PX,
            hero_follow_k: HERO_FOLLOW_K,
            hero_follow_step: HERO_FOLLOW_STEP_PX,
            tilt_k: TILT_K,
            tilt_sensitivity: TILT_SENSITIVITY,
            tilt_hover_scale: TILT_HOVER_SCALE,
            tilt_perspective: TILT_PERSPECTIVE_PX,
            anchor_offset: ANCHOR_SCROLL_OFFSET,
        }
    }
}

#[derive(Clone, Copy)]
enum Range {
    Any,
    Positive,
    NonNegative,
    Fraction,
    OpenUnit,
}

impl Range {
    fn check(self, v: f64) -> Result<(), &'static str> {
        let ok = match self {
            Range::Any => v.is_finite(),
            Range::Positive => v.is_finite() && v > 0.0,
            Range::NonNegative => v.is_finite() && v >= 0.0,
            Range::Fraction => (0.0..=1.0).contains(&v),
            Range::OpenUnit => v > 0.0 && v < 1.0,
        };
        if ok {
            return Ok(());
        }
        Err(match self {
            Range::Any => "finite",
            Range::Positive => "> 0",
            Range::NonNegative => ">= 0",
            Range::Fraction => "0..=1",
            Range::OpenUnit => "strictly between 0 and 1",
        })
    }
}

impl Tuning {
    /// Keys accepted by [`Tuning::apply`], in `data-fx-<key>` spelling.
    pub const KEYS: &'static [&'static str] = &[
        "navbar-threshold",
        "viewport-margin",
        "background-factor",
        "hero-factor",
        "hero-fade-fraction",
        "custom-background-factor",
        "content-damping",
        "content-factor",
        "content-fade-end",
        "content-fade-start",
        "reveal-fraction",
        "reveal-ratio",
        "reveal-offset",
        "hero-follow-k",
        "hero-follow-step",
        "tilt-k",
        "tilt-sensitivity",
        "tilt-hover-scale",
        "tilt-perspective",
        "anchor-offset",
    ];

    fn range_of(key: &str) -> Option<Range> {
        Some(match key {
            "navbar-threshold" | "background-factor" | "hero-factor" | "custom-background-factor"
            | "content-damping" | "content-factor" | "anchor-offset" | "hero-follow-step" => {
                Range::Any
            }
            "viewport-margin" | "reveal-offset" => Range::NonNegative,
            "hero-fade-fraction" | "tilt-sensitivity" | "tilt-hover-scale"
            | "tilt-perspective" => Range::Positive,
            "content-fade-end" | "content-fade-start" | "reveal-fraction" | "reveal-ratio" => {
                Range::Fraction
            }
            "hero-follow-k" | "tilt-k" => Range::OpenUnit,
            _ => return None,
        })
    }

    fn slot(&mut self, key: &str) -> Option<Slot<'_>> {
        Some(match key {
            "navbar-threshold" => Slot::F64(&mut self.navbar_threshold),
            "viewport-margin" => Slot::F64(&mut self.viewport_margin),
            "background-factor" => Slot::F64(&mut self.background_factor),
            "hero-factor" => Slot::F64(&mut self.hero_factor),
            "hero-fade-fraction" => Slot::F64(&mut self.hero_fade_fraction),
            "custom-background-factor" => Slot::F64(&mut self.custom_background_factor),
            "content-damping" => Slot::F64(&mut self.content_damping),
            "content-factor" => Slot::F64(&mut self.content_factor),
            "content-fade-end" => Slot::F64(&mut self.content_fade_end),
            "content-fade-start" => Slot::F64(&mut self.content_fade_start),
            "reveal-fraction" => Slot::F64(&mut self.reveal_fraction),
            "reveal-ratio" => Slot::F64(&mut self.reveal_ratio),
            "reveal-offset" => Slot::F64(&mut self.reveal_offset),
            "hero-follow-k" => Slot::F32(&mut self.hero_follow_k),
            "hero-follow-step" => Slot::F32(&mut self.hero_follow_step),
            "tilt-k" => Slot::F32(&mut self.tilt_k),
            "tilt-sensitivity" => Slot::F32(&mut self.tilt_sensitivity),
            "tilt-hover-scale" => Slot::F32(&mut self.tilt_hover_scale),
            "tilt-perspective" => Slot::F32(&mut self.tilt_perspective),
            "anchor-offset" => Slot::F64(&mut self.anchor_offset),
            _ => return None,
        })
    }

    /// Parse `raw` and store it under `key`. On error the current value is
    /// left untouched.
    pub fn apply(&mut self, key: &str, raw: &str) -> Result<(), TuningError> {
        let range = Self::range_of(key).ok_or_else(|| TuningError::UnknownKey(key.to_string()))?;
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| TuningError::InvalidNumber {
                key: key.to_string(),
                raw: raw.to_string(),
            })?;
        range.check(value).map_err(|expected| TuningError::OutOfRange {
            key: key.to_string(),
            value,
            expected,
        })?;

        // The fade window must stay non-empty after the update
        let (end, start) = match key {
            "content-fade-end" => (value, self.content_fade_start),
            "content-fade-start" => (self.content_fade_end, value),
            _ => (0.0, 1.0),
        };
        if end >= start {
            return Err(TuningError::OutOfRange {
                key: key.to_string(),
                value,
                expected: "content-fade-end < content-fade-start",
            });
        }

        match self.slot(key) {
            Some(Slot::F64(v)) => *v = value,
            Some(Slot::F32(v)) => *v = value as f32,
            None => return Err(TuningError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Apply every `(key, raw)` pair, collecting the rejected ones.
    pub fn with_overrides<'a, I>(overrides: I) -> (Self, Vec<TuningError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut tuning = Self::default();
        let errors = overrides
            .into_iter()
            .filter_map(|(k, v)| tuning.apply(k, v).err())
            .collect();
        (tuning, errors)
    }
}

enum Slot<'a> {
    F64(&'a mut f64),
    F32(&'a mut f32),
}
