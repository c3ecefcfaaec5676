use crate::core::{FrameLoop, LoopRegistry};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Owned requestAnimationFrame loop.
///
/// The body returns `true` to request another frame. `start` is a no-op while
/// a frame is pending, so repeated hover events never stack loops. `stop`
/// cancels the pending frame; the body itself is kept so the loop can resume.
pub struct Ticker {
    name: &'static str,
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Ticker {
    pub fn new(name: &'static str, mut body: impl FnMut() -> bool + 'static) -> Rc<Self> {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let handle_tick = handle.clone();
        let tick_weak = Rc::downgrade(&tick);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            if !body() {
                return;
            }
            let Some(tick) = tick_weak.upgrade() else {
                return;
            };
            let next = tick.borrow().as_ref().and_then(request_frame);
            handle_tick.set(next);
        }) as Box<dyn FnMut()>));

        Rc::new(Self { name, handle, tick })
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }
}

impl FrameLoop for Ticker {
    fn start(&self) {
        if self.is_running() {
            return;
        }
        let next = self.tick.borrow().as_ref().and_then(request_frame);
        self.handle.set(next);
    }

    fn stop(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    /// Stop and drop the frame body; the ticker cannot be restarted.
    fn dispose(&self) {
        self.stop();
        self.tick.borrow_mut().take();
        log::debug!("[frame] {} disposed", self.name);
    }
}

fn request_frame(closure: &Closure<dyn FnMut()>) -> Option<i32> {
    let window = web::window()?;
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

/// Tickers owned by the page runtime; continuous tickers follow document
/// visibility and every ticker is disposed on page teardown.
pub type TickerRegistry = LoopRegistry<Ticker>;
