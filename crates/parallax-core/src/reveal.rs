//! One-way reveal state for elements that fade in on scroll.

use crate::config::Tuning;
use crate::constants::REVEAL_THRESHOLDS;
use crate::effects::ScrollFrame;

/// Which hook wants an element revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTrigger {
    /// Intersection observer notification (primary path).
    Intersection,
    /// Per-frame position check (fallback for missed notifications).
    ScrollPosition,
}

impl RevealTrigger {
    /// Only observer reveals get the `visible` class. Its `!important` rule
    /// would pin parallax elements revealed by position in place.
    #[inline]
    pub fn marks_visible(self) -> bool {
        matches!(self, RevealTrigger::Intersection)
    }
}

/// Monotone visible flags, one per registered reveal element.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hidden element and return its index.
    pub fn register(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Mark `index` visible. Returns `true` only on the hidden -> visible
    /// transition; unknown indices and repeats are no-ops.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Indices still hidden.
    pub fn hidden(&self) -> impl Iterator<Item = usize> + '_ {
        self.revealed
            .iter()
            .enumerate()
            .filter(|(_, r)| !**r)
            .map(|(i, _)| i)
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }
}

/// Fallback check: the element's document-relative top has passed the
/// reveal line at `scroll + vh * reveal_fraction`.
#[inline]
pub fn reached_reveal_line(top: f64, frame: ScrollFrame, tuning: &Tuning) -> bool {
    top < frame.scroll + frame.viewport_height * tuning.reveal_fraction
}

/// Observer check: intersecting with more than `reveal_ratio` visible.
#[inline]
pub fn intersection_reveals(is_intersecting: bool, ratio: f64, tuning: &Tuning) -> bool {
    is_intersecting && ratio > tuning.reveal_ratio
}

/// Observer thresholds: the base set plus the tuned reveal ratio, sorted and
/// deduplicated, so a tuned ratio always gets a crossing of its own.
pub fn observer_thresholds(tuning: &Tuning) -> Vec<f64> {
    let mut thresholds: Vec<f64> = REVEAL_THRESHOLDS
        .iter()
        .copied()
        .chain(std::iter::once(tuning.reveal_ratio))
        .filter(|t| (0.0..=1.0).contains(t))
        .collect();
    thresholds.sort_by(f64::total_cmp);
    thresholds.dedup();
    thresholds
}
