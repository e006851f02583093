use crate::constants::{OBSERVED_REVEAL_SELECTOR, REVEAL_ID_ATTR, SCROLL_REVEAL_SELECTOR};
use crate::dom;
use crate::scroll::ScrollEffects;
use parallax_core::constants::REVEAL_ROOT_MARGIN;
use parallax_core::css;
use parallax_core::{intersection_reveals, observer_thresholds, RevealTrigger, ScrollScene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Register both reveal groups in `scene` and put the scroll-revealed group
/// into its hidden starting state. The observed group is hidden by the
/// injected stylesheet instead.
pub fn register(document: &web::Document, scene: &mut ScrollScene) -> Vec<web::HtmlElement> {
    let selector = format!("{}, {}", SCROLL_REVEAL_SELECTOR, OBSERVED_REVEAL_SELECTOR);
    let elements = dom::query_all(document, &selector);
    let hidden_transform = css::translate_y(scene.tuning().reveal_offset);
    for el in &elements {
        let id = scene.track_reveal();
        let _ = el.set_attribute(REVEAL_ID_ATTR, &id.to_string());
        if el.matches(SCROLL_REVEAL_SELECTOR).unwrap_or(false) {
            dom::set_style(el, "opacity", "0");
            dom::set_style(el, "transform", &hidden_transform);
            dom::set_style(el, "transition", css::REVEAL_TRANSITION);
        }
    }
    elements
}

pub fn show(el: &web::HtmlElement, trigger: RevealTrigger) {
    dom::set_style(el, "opacity", "1");
    dom::set_style(el, "transform", css::REVEALED_TRANSFORM);
    if trigger.marks_visible() {
        let _ = el.class_list().add_1(css::VISIBLE_CLASS);
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// The observer and the callback it calls, released together.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealObserver {
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Watch every reveal element with an IntersectionObserver. Returns `None`
/// when the browser has none; the per-frame check then does all the work.
pub fn observe(state: &Rc<RefCell<ScrollEffects>>) -> Option<RevealObserver> {
    let state_cb = state.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let mut st = state_cb.borrow_mut();
                if !intersection_reveals(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    st.scene.tuning(),
                ) {
                    continue;
                }
                let target = entry.target();
                let id = target
                    .get_attribute(REVEAL_ID_ATTR)
                    .and_then(|v| v.parse::<usize>().ok());
                if let Some(id) = id {
                    st.reveal(id, RevealTrigger::Intersection);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    let thresholds: js_sys::Array = observer_thresholds(state.borrow().scene.tuning())
        .into_iter()
        .map(JsValue::from_f64)
        .collect();
    init.set_threshold(&thresholds);
    init.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[reveal] no IntersectionObserver ({:?}); using scroll checks only", e);
                return None;
            }
        };
    for el in &state.borrow().surface.reveals {
        observer.observe(el);
    }
    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}
