//! Cooperative animation-frame loop.
//!
//! `tick` runs once per frame with the frame timestamp and returns whether
//! another frame should be requested. Dropping the loop (or calling
//! [`FrameLoop::stop`]) cancels the pending frame and frees the callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::error::WidgetError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct FrameLoop {
    callback: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start<F>(mut tick: F) -> Result<Self, WidgetError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let win = window().ok_or_else(|| WidgetError::Dom("no window".into()))?;
        let f: FrameCallback = Rc::new(RefCell::new(None));
        let g = f.clone();
        let pending = Rc::new(Cell::new(None));
        let p = pending.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            p.set(None);
            if !tick(ts) {
                return;
            }
            if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
                p.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(cb) = g.borrow().as_ref() {
            pending.set(Some(win.request_animation_frame(cb.as_ref().unchecked_ref())?));
        }
        Ok(Self {
            callback: g,
            pending,
        })
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure <-> callback cycle
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
