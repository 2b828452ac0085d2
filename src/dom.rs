// Small DOM helpers shared by the widget views.
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, HtmlElement, HtmlInputElement, Window, window};

pub fn window_document() -> Result<(Window, Document), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    Ok((win, doc))
}

/// Creates `<tag id=.. style=..>`.
pub fn create(doc: &Document, tag: &str, id: &str, style: &str) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = doc.create_element(tag)?.dyn_into()?;
    if !id.is_empty() {
        el.set_id(id);
    }
    el.set_attribute("style", style)?;
    Ok(el)
}

pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn viewport_height(win: &Window) -> f64 {
    win.inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn set_visible(el: &HtmlElement, visible: bool) {
    let _ = el
        .style()
        .set_property("display", if visible { "flex" } else { "none" });
}

/// Creates a bare `<input type=..>`.
pub fn input(doc: &Document, kind: &str) -> Result<HtmlInputElement, JsValue> {
    let el: HtmlInputElement = doc.create_element("input")?.dyn_into()?;
    el.set_type(kind);
    Ok(el)
}

/// An event handler attached to a target. Dropping it detaches the handler
/// and frees the closure.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Registers `handler` for `event` on `target` until the returned
/// [`Listener`] is dropped.
pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Listener, JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    Ok(Listener {
        target: target.clone(),
        event,
        closure,
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn dropped_listener_stops_firing() {
        let (_, doc) = window_document().unwrap();
        let button = create(&doc, "button", "", "").unwrap();
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let listener = listen(&button, "click", move |_| counter.set(counter.get() + 1)).unwrap();
        button.click();
        assert_eq!(clicks.get(), 1);
        drop(listener);
        button.click();
        assert_eq!(clicks.get(), 1);
    }

    #[wasm_bindgen_test]
    fn input_has_requested_type() {
        let (_, doc) = window_document().unwrap();
        assert_eq!(input(&doc, "file").unwrap().type_(), "file");
    }
}
