use crate::constants::{NAVBAR_SELECTOR, PARALLAX_SELECTOR, SPEED_ATTR};
use crate::dom;
use crate::frame::FrameRequest;
use crate::reveal;
use parallax_core::css;
use parallax_core::{
    parse_speed, Category, Effect, ElementGeometry, RevealTrigger, ScrollFrame, ScrollScene,
    Surface, Tuning,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The live elements behind the ids handed out by `ScrollScene`.
pub struct DomSurface {
    tracked: Vec<web::HtmlElement>,
    pub(crate) reveals: Vec<web::HtmlElement>,
}

impl Surface for DomSurface {
    fn element_geometry(&self, id: usize, scroll: f64) -> ElementGeometry {
        let rect = self.tracked[id].get_bounding_client_rect();
        ElementGeometry {
            top: rect.top() + scroll,
            height: rect.height(),
        }
    }

    fn apply_effect(&mut self, id: usize, effect: &Effect) {
        let el = &self.tracked[id];
        dom::set_style(el, "transform", &css::translate3d_y(effect.translate_y));
        if let Some(o) = effect.opacity {
            dom::set_style(el, "opacity", &css::opacity(o));
        }
    }

    fn reveal_top(&self, id: usize, scroll: f64) -> f64 {
        dom::document_top(&self.reveals[id], scroll)
    }

    fn show_revealed(&mut self, id: usize, trigger: RevealTrigger) {
        reveal::show(&self.reveals[id], trigger);
    }
}

pub struct ScrollEffects {
    pub scene: ScrollScene,
    pub surface: DomSurface,
}

impl ScrollEffects {
    /// Classify every `[data-speed]` element once and register the reveal
    /// elements. Membership is fixed from here on.
    pub fn build(document: &web::Document, tuning: Tuning) -> Self {
        let mut scene = ScrollScene::new(tuning);
        let tracked = dom::query_all(document, PARALLAX_SELECTOR);
        for el in &tracked {
            let classes = el.class_list();
            let category = Category::from_classes(|c| classes.contains(c));
            let speed = parse_speed(el.get_attribute(SPEED_ATTR).as_deref());
            scene.track(category, speed);
        }
        let reveals = reveal::register(document, &mut scene);
        log::info!(
            "[scroll] tracking {} parallax element(s), {} reveal element(s)",
            tracked.len(),
            reveals.len()
        );
        Self {
            scene,
            surface: DomSurface { tracked, reveals },
        }
    }

    pub fn render_now(&mut self, frame: ScrollFrame) {
        let report = self.scene.render(frame, &mut self.surface);
        log::debug!("[scroll] initial pass {:?}", report);
    }

    pub fn reveal(&mut self, id: usize, trigger: RevealTrigger) -> bool {
        self.scene.reveal(id, trigger, &mut self.surface)
    }
}

/// Scroll listener + debounced frame callback around shared `ScrollEffects`.
pub struct ScrollWiring {
    pub state: Rc<RefCell<ScrollEffects>>,
    frame: Rc<FrameRequest>,
    listener: Closure<dyn FnMut()>,
}

impl ScrollWiring {
    pub fn install(window: &web::Window, document: &web::Document, effects: ScrollEffects) -> Self {
        let state = Rc::new(RefCell::new(effects));

        let state_frame = state.clone();
        let frame = Rc::new(FrameRequest::new(move || {
            let Some(w) = web::window() else {
                return;
            };
            let (_, vh) = dom::viewport_size(&w);
            let mut st = state_frame.borrow_mut();
            let ScrollEffects { scene, surface } = &mut *st;
            if let Some(report) = scene.run_frame(vh, surface) {
                log::trace!("[scroll] frame {:?}", report);
            }
        }));

        let navbar = dom::query_one(document, NAVBAR_SELECTOR);
        let state_scroll = state.clone();
        let frame_scroll = frame.clone();
        let listener = Closure::wrap(Box::new(move || {
            let Some(w) = web::window() else {
                return;
            };
            let notice = state_scroll.borrow_mut().scene.on_scroll(dom::scroll_y(&w));
            if let Some(nav) = &navbar {
                let cl = nav.class_list();
                if notice.navbar_scrolled {
                    let _ = cl.add_1(css::SCROLLED_CLASS);
                } else {
                    let _ = cl.remove_1(css::SCROLLED_CLASS);
                }
            }
            if notice.schedule_frame {
                frame_scroll.request();
            }
        }) as Box<dyn FnMut()>);

        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            listener.as_ref().unchecked_ref(),
            &opts,
        );

        let (_, vh) = dom::viewport_size(window);
        state.borrow_mut().render_now(ScrollFrame {
            scroll: dom::scroll_y(window),
            viewport_height: vh,
        });

        Self {
            state,
            frame,
            listener,
        }
    }

    /// Remove the scroll listener and withdraw any pending frame.
    pub fn detach(&self) {
        if let Some(w) = web::window() {
            let _ = w.remove_event_listener_with_callback("scroll", self.listener.as_ref().unchecked_ref());
        }
        self.frame.cancel();
        log::info!("[scroll] detached");
    }
}
