#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod motion;
mod page;
mod reveal;
mod scroll;
mod tuning;

use motion::PointerAnimator;
use reveal::RevealObserver;
use scroll::{ScrollEffects, ScrollWiring};

/// Everything started by `init`, kept so `stop_effects` can tear it down.
struct Effects {
    scroll: ScrollWiring,
    observer: Option<RevealObserver>,
    hero_follow: Option<PointerAnimator>,
    tilt: Option<PointerAnimator>,
}

impl Effects {
    fn shutdown(self) {
        self.scroll.detach();
        if let Some(o) = &self.observer {
            o.disconnect();
        }
        for animator in [self.hero_follow, self.tilt].into_iter().flatten() {
            animator.shutdown();
        }
    }
}

thread_local! {
    static EFFECTS: RefCell<Option<Effects>> = const { RefCell::new(None) };
}

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] already started; ignoring");
        return Ok(());
    }
    log::info!("parallax-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop every loop and listener started by `start`. Safe to call twice.
#[wasm_bindgen]
pub fn stop_effects() {
    let effects = EFFECTS.with(|e| e.borrow_mut().take());
    match effects {
        Some(fx) => {
            fx.shutdown();
            log::info!("[init] effects stopped");
        }
        None => log::debug!("[init] nothing to stop"),
    }
}

/// Resolves once the DOM is parsed (immediately if it already is).
async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        let _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("DOMContentLoaded: {:?}", e))?;
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom_ready(&document).await?;

    dom::inject_stylesheet(&document, &parallax_core::css::global_stylesheet());
    let tuning = tuning::read_tuning(&document);

    // Scroll effects: parallax, navbar flag, reveal (observer first, frame check as fallback)
    let scroll = ScrollWiring::install(
        &window,
        &document,
        ScrollEffects::build(&document, tuning.clone()),
    );
    let observer = reveal::observe(&scroll.state);

    // Free-running pointer animators
    let hero_follow = motion::start_hero_follow(&document, &tuning);
    let tilt = motion::start_tilt(&document, &tuning);

    page::start_floating(&document);
    page::wire_cta(&document);
    page::wire_anchor_scroll(&document, tuning.anchor_offset);
    page::wire_load_fade(&window, &document);

    EFFECTS.with(|e| {
        *e.borrow_mut() = Some(Effects {
            scroll,
            observer,
            hero_follow,
            tilt,
        })
    });
    log::info!("[init] effects running");
    Ok(())
}
