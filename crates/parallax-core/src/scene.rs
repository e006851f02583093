//! Scroll-side animation controller.
//!
//! `ScrollScene` owns everything the scroll effects need between frames:
//! the dispatcher, the registry of tracked elements, the reveal flags and
//! the tuning. Reads and writes go through a [`Surface`], which the web
//! front-end implements over the DOM and tests implement in memory.

use crate::config::Tuning;
use crate::dispatch::ScrollDispatcher;
use crate::effects::{compute_effect, navbar_scrolled, Category, Effect, ElementGeometry, ScrollFrame};
use crate::reveal::{reached_reveal_line, RevealSet, RevealTrigger};

pub trait Surface {
    /// Document-relative geometry of tracked element `id` at `scroll`.
    fn element_geometry(&self, id: usize, scroll: f64) -> ElementGeometry;
    fn apply_effect(&mut self, id: usize, effect: &Effect);
    /// Document-relative top of reveal element `id` at `scroll`.
    fn reveal_top(&self, id: usize, scroll: f64) -> f64;
    /// Apply the visible state; add the marker class only when
    /// `trigger.marks_visible()`.
    fn show_revealed(&mut self, id: usize, trigger: RevealTrigger);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedElement {
    pub category: Category,
    pub speed: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollNotice {
    /// Request an animation frame and call [`ScrollScene::run_frame`] from it.
    pub schedule_frame: bool,
    pub navbar_scrolled: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub scroll: f64,
    pub updated: usize,
    pub skipped: usize,
    pub revealed: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ScrollScene {
    tuning: Tuning,
    dispatcher: ScrollDispatcher,
    tracked: Vec<TrackedElement>,
    reveals: RevealSet,
}

impl ScrollScene {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            tuning,
            ..Default::default()
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn tracked(&self) -> &[TrackedElement] {
        &self.tracked
    }

    pub fn reveals(&self) -> &RevealSet {
        &self.reveals
    }

    /// Register a parallax element; returns the id the surface must resolve.
    pub fn track(&mut self, category: Category, speed: f64) -> usize {
        if !speed.is_finite() {
            log::warn!(
                "[scroll] element {} ({:?}) has a non-numeric speed; it will not move",
                self.tracked.len(),
                category
            );
        }
        self.tracked.push(TrackedElement { category, speed });
        self.tracked.len() - 1
    }

    /// Register a reveal element (starts hidden).
    pub fn track_reveal(&mut self) -> usize {
        self.reveals.register()
    }

    pub fn on_scroll(&mut self, offset: f64) -> ScrollNotice {
        ScrollNotice {
            schedule_frame: self.dispatcher.notify(offset),
            navbar_scrolled: navbar_scrolled(offset, &self.tuning),
        }
    }

    /// Frame callback: render the newest offset once. Returns `None` when no
    /// frame was pending.
    pub fn run_frame<S: Surface>(&mut self, viewport_height: f64, surface: &mut S) -> Option<FrameReport> {
        let scroll = self.dispatcher.take_frame()?;
        Some(self.render(
            ScrollFrame {
                scroll,
                viewport_height,
            },
            surface,
        ))
    }

    /// One full pass over tracked and still-hidden reveal elements.
    pub fn render<S: Surface>(&mut self, frame: ScrollFrame, surface: &mut S) -> FrameReport {
        let mut report = FrameReport {
            scroll: frame.scroll,
            ..Default::default()
        };
        for (id, el) in self.tracked.iter().enumerate() {
            let geom = surface.element_geometry(id, frame.scroll);
            match compute_effect(el.category, el.speed, geom, frame, &self.tuning) {
                Some(effect) => {
                    surface.apply_effect(id, &effect);
                    report.updated += 1;
                }
                None => report.skipped += 1,
            }
        }

        let due: Vec<usize> = self
            .reveals
            .hidden()
            .filter(|&id| reached_reveal_line(surface.reveal_top(id, frame.scroll), frame, &self.tuning))
            .collect();
        for id in due {
            if self.reveal(id, RevealTrigger::ScrollPosition, surface) {
                report.revealed += 1;
            }
        }
        report
    }

    /// Reveal `id` through `surface` unless it is already visible.
    pub fn reveal<S: Surface>(&mut self, id: usize, trigger: RevealTrigger, surface: &mut S) -> bool {
        if !self.reveals.reveal(id) {
            return false;
        }
        surface.show_revealed(id, trigger);
        log::debug!("[reveal] element {} via {:?}", id, trigger);
        true
    }
}
