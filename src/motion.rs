use crate::constants::{HERO_DECORATION_SELECTOR, HERO_SECTION_SELECTOR, TILT_SELECTOR};
use crate::dom::{self, Listener};
use crate::events;
use crate::frame::AnimationLoop;
use parallax_core::css;
use parallax_core::{PointerFollow, Tilt, Tuning};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A frame loop plus the pointer listeners that feed it.
pub struct PointerAnimator {
    frames: AnimationLoop,
    listeners: Vec<Listener>,
}

impl PointerAnimator {
    /// Cancel the loop and detach the listeners; input after this point
    /// reaches nothing.
    pub fn shutdown(self) {
        log::debug!("[loop] cancelling (running={})", self.frames.is_running());
        self.frames.cancel();
        drop(self.listeners);
    }
}

/// Decorations in the hero drift toward the pointer, each one further than
/// the last. Not started when the page has no hero section.
pub fn start_hero_follow(document: &web::Document, tuning: &Tuning) -> Option<PointerAnimator> {
    let hero = dom::query_one(document, HERO_SECTION_SELECTOR)?;
    let decorations = dom::query_all(document, HERO_DECORATION_SELECTOR);
    let follow = Rc::new(RefCell::new(PointerFollow::new(tuning)));
    let listener = events::wire_hero_pointer(&hero, follow.clone());

    let frames = AnimationLoop::spawn("hero-follow", move || {
        let mut f = follow.borrow_mut();
        f.step();
        for (i, el) in decorations.iter().enumerate() {
            dom::set_style(el, "transform", &css::translate_2d(f.offset_for(i)));
        }
    });
    Some(PointerAnimator {
        frames,
        listeners: vec![listener],
    })
}

/// One loop drives the hover tilt of every `.mock-image`.
pub fn start_tilt(document: &web::Document, tuning: &Tuning) -> Option<PointerAnimator> {
    let images = dom::query_all(document, TILT_SELECTOR);
    if images.is_empty() {
        return None;
    }
    let tilts = Rc::new(RefCell::new(vec![Tilt::new(tuning); images.len()]));
    let listeners = events::wire_tilt_handlers(&images, tilts.clone());

    let perspective = tuning.tilt_perspective;
    let frames = AnimationLoop::spawn("tilt", move || {
        let mut tilts = tilts.borrow_mut();
        for (el, tilt) in images.iter().zip(tilts.iter_mut()) {
            let pose = tilt.step();
            dom::set_style(el, "transform", &css::tilt_transform(pose, perspective));
        }
    });
    Some(PointerAnimator { frames, listeners })
}
