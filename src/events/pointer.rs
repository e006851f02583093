use crate::dom::{self, Listener};
use glam::Vec2;
use parallax_core::{PointerFollow, Tilt};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Pointer moves over the hero section retarget the decoration follower.
pub fn wire_hero_pointer(hero: &web::HtmlElement, follow: Rc<RefCell<PointerFollow>>) -> Listener {
    Listener::mouse(hero, "mousemove", move |ev| {
        let Some(w) = web::window() else {
            return;
        };
        let (vw, vh) = dom::viewport_size(&w);
        follow
            .borrow_mut()
            .pointer_moved(client_pos(&ev), Vec2::new(vw as f32, vh as f32));
    })
}

/// Enter/move/leave for each tilt image; `tilts[i]` belongs to `images[i]`.
pub fn wire_tilt_handlers(images: &[web::HtmlElement], tilts: Rc<RefCell<Vec<Tilt>>>) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(images.len() * 3);
    for (i, image) in images.iter().enumerate() {
        let t_enter = tilts.clone();
        listeners.push(Listener::mouse(image, "mouseenter", move |_| {
            t_enter.borrow_mut()[i].enter();
        }));

        let t_move = tilts.clone();
        let el = image.clone();
        listeners.push(Listener::mouse(image, "mousemove", move |ev| {
            let rect = el.get_bounding_client_rect();
            let local = client_pos(&ev) - Vec2::new(rect.left() as f32, rect.top() as f32);
            let size = Vec2::new(rect.width() as f32, rect.height() as f32);
            t_move.borrow_mut()[i].pointer_moved(local, size);
        }));

        let t_leave = tilts.clone();
        listeners.push(Listener::mouse(image, "mouseleave", move |_| {
            t_leave.borrow_mut()[i].leave();
        }));
    }
    log::info!("[tilt] wired {} image(s)", images.len());
    listeners
}
