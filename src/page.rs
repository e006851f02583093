use crate::constants::{ANCHOR_SELECTOR, CTA_MESSAGE, CTA_SELECTOR, FLOATING_SELECTOR};
use crate::dom;
use parallax_core::constants::LOAD_FADE_DELAY_MS;
use parallax_core::css;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Give each floating decoration a staggered CSS float animation.
pub fn start_floating(document: &web::Document) {
    let elements = dom::query_all(document, FLOATING_SELECTOR);
    for (i, el) in elements.iter().enumerate() {
        dom::set_style(el, "animation", &css::float_animation(i));
    }
}

/// Demo call-to-action: shows an informational alert.
pub fn wire_cta(document: &web::Document) {
    if let Some(cta) = dom::query_one(document, CTA_SELECTOR) {
        dom::add_click_listener(&cta, |_| {
            if let Some(w) = web::window() {
                let _ = w.alert_with_message(CTA_MESSAGE);
            }
        });
    }
}

/// In-page links scroll smoothly to their target, leaving `offset` px for
/// the fixed navbar. Links to unknown targets do nothing.
pub fn wire_anchor_scroll(document: &web::Document, offset: f64) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let link = anchor.clone();
        dom::add_click_listener(&anchor, move |ev| {
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(doc) = dom::window_document() else {
                return;
            };
            // A bare "#" is not a valid selector; query_one yields None for it
            let Some(target) = dom::query_one(&doc, &href) else {
                return;
            };
            if let Some(w) = web::window() {
                let opts = web::ScrollToOptions::new();
                opts.set_top(target.offset_top() as f64 - offset);
                opts.set_behavior(web::ScrollBehavior::Smooth);
                w.scroll_to_with_scroll_to_options(&opts);
            }
        });
    }
}

fn fade_in_body(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    dom::set_style(&body, "opacity", "0");
    dom::set_style(&body, "transition", css::BODY_FADE_TRANSITION);
    let Some(w) = web::window() else {
        return;
    };
    let reveal = Closure::once(move || dom::set_style(&body, "opacity", "1"));
    let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
        reveal.as_ref().unchecked_ref(),
        LOAD_FADE_DELAY_MS,
    );
    reveal.forget();
}

/// Fade the page in once it has finished loading. If loading already
/// completed before the module started, fade immediately.
pub fn wire_load_fade(window: &web::Window, document: &web::Document) {
    if document.ready_state() == "complete" {
        fade_in_body(document);
        return;
    }
    let doc = document.clone();
    let on_load = Closure::once(move || fade_in_body(&doc));
    let _ = window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
    on_load.forget();
}
