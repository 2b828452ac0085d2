//! Browser view for Zhuyin practice: target character, composition area and
//! the on-screen keyboard. Clicking the composition clears it; physical keys
//! follow the Dachen layout.

use std::cell::RefCell;

use tracing::info;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};

use super::catalog::{Category, GRID_ROWS, catalog};
use super::session::{KeyOutcome, PracticeSession, Verdict};
use crate::dom::{Listener, create, input, listen, set_visible, window_document};
use crate::error::WidgetError;
use crate::notify;

const ROOT_ID: &str = "hw-zhuyin";

struct ZhuyinView {
    session: PracticeSession,
    root: HtmlElement,
    target_el: HtmlElement,
    composed_el: HtmlElement,
    verdict_el: HtmlElement,
    dialog: HtmlElement,
    dialog_input: HtmlInputElement,
    dialog_error: HtmlElement,
    dialog_open: bool,
    listeners: Vec<Listener>,
}

thread_local! {
    static ZHUYIN: RefCell<Option<ZhuyinView>> = RefCell::new(None);
}

fn with_view<R>(f: impl FnOnce(&mut ZhuyinView) -> R) -> Option<R> {
    ZHUYIN.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn verdict_text(session: &PracticeSession) -> String {
    match session.verdict() {
        Verdict::NoTarget => "Choose a character to practise".to_string(),
        Verdict::Unknown => "No reading on file for this character".to_string(),
        Verdict::Incomplete => String::new(),
        Verdict::Correct => "✓ Correct".to_string(),
        Verdict::Incorrect => "✗ Not quite, try again".to_string(),
    }
}

fn key_style(category: Category) -> &'static str {
    match category {
        Category::Consonant => "background:#1e3a8a;",
        Category::Medial => "background:#065f46;",
        Category::Final => "background:#7c2d12;",
        Category::Tone => "background:#4c1d95;",
    }
}

impl ZhuyinView {
    fn sync(&self) {
        let target = self
            .session
            .target()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "？".to_string());
        self.target_el.set_text_content(Some(&target));
        self.composed_el.set_text_content(Some(&self.session.display()));
        self.verdict_el
            .set_text_content(Some(&verdict_text(&self.session)));
    }

    fn open_dialog(&mut self) {
        self.dialog_open = true;
        self.dialog_input.set_value("");
        self.dialog_error.set_text_content(None);
        set_visible(&self.dialog, true);
        let _ = self.dialog_input.focus();
    }

    fn close_dialog(&mut self) {
        self.dialog_open = false;
        set_visible(&self.dialog, false);
    }

    fn submit_dialog(&mut self) {
        match self.session.select_target(&self.dialog_input.value()) {
            Ok(_) => {
                self.close_dialog();
                self.sync();
            }
            Err(e) => {
                self.dialog_error.set_text_content(Some(&e.to_string()));
                notify::report(&e);
            }
        }
    }

    fn key(&mut self, evt: &KeyboardEvent) {
        if self.dialog_open {
            match evt.key().as_str() {
                "Enter" => self.submit_dialog(),
                "Escape" => self.close_dialog(),
                _ => {}
            }
            return;
        }
        if evt.ctrl_key() || evt.meta_key() || evt.alt_key() {
            return;
        }
        if self.session.press_key(&evt.key()) != KeyOutcome::Ignored {
            evt.prevent_default();
            self.sync();
        }
    }
}

const KEY_STYLE: &str = "color:#fff; border:none; border-radius:6px; width:48px; height:48px; font-size:22px; cursor:pointer;";

/// Builds the practice widget into the page, replacing a running one.
pub fn start() -> Result<(), WidgetError> {
    stop();
    let (_win, doc) = window_document()?;
    let body = doc.body().ok_or_else(|| WidgetError::Dom("no body".into()))?;

    let root = create(&doc, "div", ROOT_ID, "display:flex; flex-direction:column; align-items:center; gap:16px; padding:24px; font-family:system-ui, sans-serif; color:#111;")?;

    let header = create(&doc, "div", "", "display:flex; align-items:center; gap:16px;")?;
    let target_el = create(&doc, "div", "", "font-size:72px; font-family:'Noto Serif TC', 'PMingLiU', serif;")?;
    let choose_btn = create(&doc, "button", "", "padding:8px 14px; border-radius:6px; cursor:pointer;")?;
    choose_btn.set_text_content(Some("Choose character"));
    header.append_child(&target_el)?;
    header.append_child(&choose_btn)?;
    root.append_child(&header)?;

    let composed_el = create(&doc, "div", "", "min-width:240px; min-height:56px; font-size:40px; text-align:center; border:2px dashed #9ca3af; border-radius:8px; padding:4px 12px; cursor:pointer;")?;
    composed_el.set_title("Click to clear");
    let verdict_el = create(&doc, "div", "", "min-height:24px; font-size:18px;")?;
    root.append_child(&composed_el)?;
    root.append_child(&verdict_el)?;

    let keyboard = create(&doc, "div", "", "display:flex; flex-direction:column; gap:6px;")?;
    let mut keys = Vec::new();
    for row in 0..GRID_ROWS {
        let row_el = create(&doc, "div", "", &format!("display:flex; gap:6px; margin-left:{}px;", row as u32 * 14))?;
        for sym in catalog().row(row) {
            let btn = create(&doc, "button", "", &format!("{}{}", KEY_STYLE, key_style(sym.category)))?;
            btn.set_text_content(Some(&sym.glyph.to_string()));
            btn.set_title(&format!("key: {}", sym.key));
            row_el.append_child(&btn)?;
            keys.push((btn, sym.glyph));
        }
        keyboard.append_child(&row_el)?;
    }
    root.append_child(&keyboard)?;

    // target dialog
    let dialog = create(&doc, "div", "", "position:fixed; top:50%; left:50%; transform:translate(-50%,-50%); background:#fff; border:1px solid #d1d5db; border-radius:10px; padding:20px; flex-direction:column; gap:12px; box-shadow:0 8px 32px rgba(0,0,0,0.25); z-index:50;")?;
    set_visible(&dialog, false);
    let title = create(&doc, "div", "", "font-size:18px; font-weight:600;")?;
    title.set_text_content(Some("Choose a Chinese character"));
    let dialog_input = input(&doc, "text")?;
    dialog_input.set_attribute("style", "font-size:32px; width:3em; text-align:center;")?;
    dialog_input.set_attribute("aria-label", "Target character")?;
    let dialog_error = create(&doc, "div", "", "color:#b91c1c; font-size:14px; min-height:18px;")?;
    let buttons = create(&doc, "div", "", "display:flex; gap:8px; justify-content:flex-end;")?;
    let cancel_btn = create(&doc, "button", "", "padding:6px 12px;")?;
    cancel_btn.set_text_content(Some("Cancel"));
    let ok_btn = create(&doc, "button", "", "padding:6px 12px;")?;
    ok_btn.set_text_content(Some("OK"));
    buttons.append_child(&cancel_btn)?;
    buttons.append_child(&ok_btn)?;
    dialog.append_child(&title)?;
    dialog.append_child(&dialog_input)?;
    dialog.append_child(&dialog_error)?;
    dialog.append_child(&buttons)?;
    root.append_child(&dialog)?;
    body.append_child(&root)?;

    let mut listeners = vec![
        listen(&doc, "keydown", |evt| {
            if let Some(evt) = evt.dyn_ref::<KeyboardEvent>() {
                with_view(|v| v.key(evt));
            }
        })?,
        listen(&composed_el, "click", |_| {
            with_view(|v| {
                v.session.clear();
                v.sync();
            });
        })?,
        listen(&choose_btn, "click", |_| {
            with_view(ZhuyinView::open_dialog);
        })?,
        listen(&ok_btn, "click", |_| {
            with_view(ZhuyinView::submit_dialog);
        })?,
        listen(&cancel_btn, "click", |_| {
            with_view(ZhuyinView::close_dialog);
        })?,
    ];
    for (btn, glyph) in keys {
        listeners.push(listen(&btn, "click", move |_| {
            with_view(|v| {
                v.session.click(glyph);
                v.sync();
            });
        })?);
    }

    let view = ZhuyinView {
        session: PracticeSession::new(),
        root,
        target_el,
        composed_el,
        verdict_el,
        dialog,
        dialog_input,
        dialog_error,
        dialog_open: false,
        listeners,
    };
    view.sync();
    ZHUYIN.with(|cell| cell.replace(Some(view)));

    info!("zhuyin practice started");
    Ok(())
}

/// Removes the practice widget and detaches all of its listeners.
pub fn stop() {
    let Some(mut view) = ZHUYIN.with(|cell| cell.borrow_mut().take()) else {
        return;
    };
    view.listeners.clear();
    view.root.remove();
    info!("zhuyin practice stopped");
}
