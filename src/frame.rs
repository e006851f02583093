use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}

fn cancel_frame(handle: Option<i32>) {
    if let (Some(h), Some(w)) = (handle, web::window()) {
        let _ = w.cancel_animation_frame(h);
    }
}

/// A requestAnimationFrame loop that calls `step` once per display refresh
/// until stopped.
///
/// `stop` lets the current frame finish and skips rescheduling; `start`
/// resumes a stopped loop. `cancel` also withdraws the frame already
/// requested and releases the callback, after which the loop cannot be
/// restarted. Call `cancel` from outside the loop's own `step`; inside a
/// frame it degrades to `stop`.
pub struct AnimationLoop {
    name: &'static str,
    running: Rc<Cell<bool>>,
    in_frame: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
    tick: FrameClosure,
}

impl AnimationLoop {
    pub fn new(name: &'static str, mut step: impl FnMut() + 'static) -> Self {
        let running = Rc::new(Cell::new(false));
        let in_frame = Rc::new(Cell::new(false));
        let handle = Rc::new(Cell::new(None));
        let tick: FrameClosure = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let running_tick = running.clone();
        let in_frame_tick = in_frame.clone();
        let handle_tick = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            if !running_tick.get() {
                return;
            }
            in_frame_tick.set(true);
            step();
            in_frame_tick.set(false);
            if running_tick.get() {
                if let Some(cb) = tick_clone.borrow().as_ref() {
                    handle_tick.set(request_frame(cb));
                }
            }
        }) as Box<dyn FnMut()>));

        Self {
            name,
            running,
            in_frame,
            handle,
            tick,
        }
    }

    /// Build and immediately start.
    pub fn spawn(name: &'static str, step: impl FnMut() + 'static) -> Self {
        let lp = Self::new(name, step);
        lp.start();
        lp
    }

    pub fn start(&self) {
        if self.running.get() {
            return;
        }
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            log::warn!("[loop] {} was cancelled and cannot restart", self.name);
            return;
        };
        self.running.set(true);
        if self.handle.get().is_none() {
            self.handle.set(request_frame(cb));
        }
        log::info!("[loop] {} started", self.name);
    }

    pub fn stop(&self) {
        if self.running.replace(false) {
            log::info!("[loop] {} stopped", self.name);
        }
    }

    pub fn cancel(&self) {
        self.stop();
        if self.in_frame.get() {
            return;
        }
        cancel_frame(self.handle.take());
        // Dropping the closure breaks its self-reference so it can be freed
        self.tick.borrow_mut().take();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A one-shot frame callback that can be re-requested any number of times,
/// with at most one request outstanding.
pub struct FrameRequest {
    handle: Rc<Cell<Option<i32>>>,
    cb: Closure<dyn FnMut()>,
}

impl FrameRequest {
    pub fn new(mut on_frame: impl FnMut() + 'static) -> Self {
        let handle = Rc::new(Cell::new(None));
        let handle_cb = handle.clone();
        let cb = Closure::wrap(Box::new(move || {
            handle_cb.set(None);
            on_frame();
        }) as Box<dyn FnMut()>);
        Self { handle, cb }
    }

    pub fn request(&self) {
        if self.handle.get().is_none() {
            self.handle.set(request_frame(&self.cb));
        }
    }

    pub fn cancel(&self) {
        cancel_frame(self.handle.take());
    }
}

impl Drop for FrameRequest {
    fn drop(&mut self) {
        self.cancel();
    }
}
