// Transient toast notifications, stacked bottom-left and removed after a delay.
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, window};

use crate::error::WidgetError;

const TOAST_MS: i32 = 3_500;
const STACK_ID: &str = "hw-toasts";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Info,
    Destructive,
}

fn stack(doc: &Document) -> Result<web_sys::Element, JsValue> {
    if let Some(el) = doc.get_element_by_id(STACK_ID) {
        return Ok(el);
    }
    let div = doc.create_element("div")?;
    div.set_id(STACK_ID);
    div.set_attribute("style", "position:fixed; bottom:16px; left:16px; display:flex; flex-direction:column; gap:8px; z-index:100; font-family:system-ui, sans-serif;")?;
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&div)?;
    Ok(div)
}

pub fn toast(title: &str, description: &str, variant: Variant) -> Result<(), WidgetError> {
    let win = window().ok_or_else(|| WidgetError::Dom("no window".into()))?;
    let doc = win
        .document()
        .ok_or_else(|| WidgetError::Dom("no document".into()))?;
    let parent = stack(&doc)?;

    let item = doc.create_element("div")?;
    let bg = match variant {
        Variant::Info => "#1f2937",
        Variant::Destructive => "#b91c1c",
    };
    item.set_attribute(
        "style",
        &format!("background:{bg}; color:#fff; padding:10px 14px; border-radius:8px; min-width:220px; box-shadow:0 4px 16px rgba(0,0,0,0.35);"),
    )?;
    item.set_attribute("role", "status")?;

    let head = doc.create_element("div")?;
    head.set_attribute("style", "font-weight:600; margin-bottom:2px;")?;
    head.set_text_content(Some(title));
    let body = doc.create_element("div")?;
    body.set_attribute("style", "font-size:14px; opacity:0.9;")?;
    body.set_text_content(Some(description));
    item.append_child(&head)?;
    item.append_child(&body)?;
    parent.append_child(&item)?;

    let remove = Closure::once_into_js(move || item.remove());
    win.set_timeout_with_callback_and_timeout_and_arguments_0(remove.unchecked_ref(), TOAST_MS)?;
    Ok(())
}

/// Shows `err` as a destructive toast and logs it.
pub fn report(err: &WidgetError) {
    tracing::warn!(error = %err, "widget error");
    if let Err(e) = toast(err.title(), &err.to_string(), Variant::Destructive) {
        tracing::warn!(error = %e, "toast could not be shown");
    }
}
