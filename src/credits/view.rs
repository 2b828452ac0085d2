//! Browser view for the credits roll.
//!
//! The view owns a [`CreditsRoll`] in a thread-local slot; every event
//! handler borrows it, applies one change and repaints. Every listener is
//! kept with the state so [`stop`] detaches them all.

use std::cell::RefCell;

use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, FileReader, HtmlElement, HtmlInputElement};

use super::roll::CreditsRoll;
use super::settings::{CreditsSettings, FONT_RANGE, OFFSET_RANGE, SPEED_RANGE};
use crate::dom::{Listener, create, input, listen, now_ms, set_visible, viewport_height, window_document};
use crate::error::WidgetError;
use crate::frame::FrameLoop;
use crate::notify::{self, Variant};

const ROOT_ID: &str = "hw-credits";

struct CreditsView {
    roll: CreditsRoll,
    root: HtmlElement,
    block: HtmlElement,
    content: HtmlElement,
    play_btn: HtmlElement,
    offset_label: HtmlElement,
    speed_label: HtmlElement,
    font_label: HtmlElement,
    duration_label: HtmlElement,
    frame: Option<FrameLoop>,
    listeners: Vec<Listener>,
}

thread_local! {
    static CREDITS: RefCell<Option<CreditsView>> = RefCell::new(None);
}

fn with_view<R>(f: impl FnOnce(&mut CreditsView) -> R) -> Option<R> {
    CREDITS.with(|cell| cell.borrow_mut().as_mut().map(f))
}

impl CreditsView {
    /// Re-renders the document and re-measures its height.
    fn refresh_content(&mut self) {
        self.content.set_inner_html(&self.roll.html());
        self.measure();
    }

    fn measure(&mut self) {
        let viewport_h = web_sys::window().map(|w| viewport_height(&w)).unwrap_or(0.0);
        self.roll
            .set_measurements(self.content.offset_height() as f64, viewport_h);
        debug!(duration = self.roll.duration_secs(), "credits measured");
    }

    fn paint(&mut self, now: f64) {
        let y = self.roll.frame(now);
        let _ = self
            .block
            .style()
            .set_property("transform", &format!("translateY({}px)", y));
    }

    fn sync_controls(&self) {
        self.play_btn
            .set_text_content(Some(if self.roll.is_playing() { "❚❚" } else { "▶" }));
        let s = self.roll.settings();
        self.offset_label
            .set_text_content(Some(&format!("{}%", s.start_offset_pct)));
        self.speed_label.set_text_content(Some(&format!("{}x", s.speed)));
        self.font_label
            .set_text_content(Some(&format!("{}px", s.font_size_px)));
        self.duration_label
            .set_text_content(Some(&format!("{:.1}s", self.roll.duration_secs())));
    }

    fn toggle(&mut self) {
        let now = now_ms();
        if self.roll.toggle(now) {
            match FrameLoop::start(tick) {
                Ok(frame) => self.frame = Some(frame),
                Err(e) => notify::report(&e),
            }
        } else {
            self.frame = None;
        }
        info!(playing = self.roll.is_playing(), "credits toggled");
        self.sync_controls();
    }

    fn reload(&mut self) {
        self.frame = None;
        self.roll.reload();
        self.paint(now_ms());
        self.sync_controls();
    }

    fn load(&mut self, name: &str, content: Option<String>) {
        match self.roll.finish_upload(name, content) {
            Ok(()) => {
                self.frame = None;
                self.refresh_content();
                self.paint(now_ms());
                self.sync_controls();
                if let Err(e) = notify::toast(
                    "File Uploaded",
                    &format!("Successfully loaded {}", name),
                    Variant::Info,
                ) {
                    warn!(error = %e, "upload toast could not be shown");
                }
            }
            Err(e) => notify::report(&e),
        }
    }
}

fn tick(ts: f64) -> bool {
    with_view(|view| {
        view.paint(ts);
        let playing = view.roll.is_playing();
        if !playing {
            view.sync_controls();
        }
        playing
    })
    .unwrap_or(false)
}

fn range(doc: &Document, min: &str, max: &str, step: &str, value: &str) -> Result<HtmlInputElement, JsValue> {
    let input = input(doc, "range")?;
    input.set_min(min);
    input.set_max(max);
    input.set_step(step);
    input.set_value(value);
    input.set_attribute("style", "flex:1;")?;
    Ok(input)
}

fn labelled_row(doc: &Document, dialog: &HtmlElement, title: &str, control: &HtmlElement) -> Result<HtmlElement, JsValue> {
    let row = create(doc, "label", "", "display:flex; flex-direction:column; gap:6px;")?;
    let caption = create(doc, "span", "", "")?;
    caption.set_text_content(Some(title));
    let line = create(doc, "div", "", "display:flex; align-items:center; gap:12px;")?;
    let value = create(doc, "span", "", "min-width:4ch;")?;
    line.append_child(control)?;
    line.append_child(&value)?;
    row.append_child(&caption)?;
    row.append_child(&line)?;
    dialog.append_child(&row)?;
    Ok(value)
}

const BUTTON_STYLE: &str = "background:rgba(255,255,255,0.2); color:#fff; border:none; border-radius:999px; width:40px; height:40px; font-size:16px; cursor:pointer;";

/// Builds the credits roll into the page. A running roll is torn down first.
pub fn start(config_json: &str) -> Result<(), WidgetError> {
    let settings = CreditsSettings::from_json(config_json)?;
    stop();
    let (win, doc) = window_document()?;
    let body = doc.body().ok_or_else(|| WidgetError::Dom("no body".into()))?;

    let root = create(&doc, "div", ROOT_ID, "position:fixed; inset:0; background:#000; color:#fff; display:flex; flex-direction:column; font-family:system-ui, sans-serif;")?;
    let viewport = create(&doc, "div", "", "flex:1; overflow:hidden; position:relative;")?;
    let block = create(&doc, "div", "", "position:absolute; width:100%; text-align:center; padding:0 16px; box-sizing:border-box;")?;
    let content = create(&doc, "div", "", "")?;
    let padding = create(&doc, "div", "", "height:96px;")?;
    block.append_child(&content)?;
    block.append_child(&padding)?;
    viewport.append_child(&block)?;
    root.append_child(&viewport)?;

    let controls = create(&doc, "div", "", "position:absolute; bottom:16px; right:16px; display:flex; gap:8px; z-index:10;")?;
    let play_btn = create(&doc, "button", "", BUTTON_STYLE)?;
    play_btn.set_attribute("aria-label", "Play or pause credits")?;
    let reload_btn = create(&doc, "button", "", BUTTON_STYLE)?;
    reload_btn.set_text_content(Some("↻"));
    reload_btn.set_attribute("aria-label", "Reload credits")?;
    let settings_btn = create(&doc, "button", "", BUTTON_STYLE)?;
    settings_btn.set_text_content(Some("⋮"));
    settings_btn.set_attribute("aria-label", "Open settings")?;
    controls.append_child(&play_btn)?;
    controls.append_child(&reload_btn)?;
    controls.append_child(&settings_btn)?;
    root.append_child(&controls)?;

    // settings dialog
    let dialog = create(&doc, "div", "", "position:absolute; top:50%; left:50%; transform:translate(-50%,-50%); background:#111827; border:1px solid #374151; border-radius:10px; padding:20px; min-width:320px; flex-direction:column; gap:18px; z-index:20;")?;
    set_visible(&dialog, false);
    let header = create(&doc, "div", "", "display:flex; justify-content:space-between; align-items:center; font-size:18px; font-weight:600;")?;
    header.set_text_content(Some("Settings"));
    let close_btn = create(&doc, "button", "", "background:none; border:none; color:#fff; font-size:18px; cursor:pointer;")?;
    close_btn.set_text_content(Some("✕"));
    header.append_child(&close_btn)?;
    dialog.append_child(&header)?;

    let offset_input = range(&doc, &OFFSET_RANGE.0.to_string(), &OFFSET_RANGE.1.to_string(), "1", &settings.start_offset_pct.to_string())?;
    offset_input.set_attribute("aria-label", "Starting position offset")?;
    let offset_label = labelled_row(&doc, &dialog, "Starting Position (Y-offset)", &offset_input)?;
    let speed_input = range(&doc, &SPEED_RANGE.0.to_string(), &SPEED_RANGE.1.to_string(), "0.1", &settings.speed.to_string())?;
    let speed_label = labelled_row(&doc, &dialog, "Scroll Speed", &speed_input)?;
    let font_input = range(&doc, &FONT_RANGE.0.to_string(), &FONT_RANGE.1.to_string(), "1", &settings.font_size_px.to_string())?;
    let font_label = labelled_row(&doc, &dialog, "Font Size", &font_input)?;
    let duration_row = create(&doc, "div", "", "display:flex; justify-content:space-between; color:#9ca3af;")?;
    duration_row.set_text_content(Some("Duration"));
    let duration_label = create(&doc, "span", "", "")?;
    duration_row.append_child(&duration_label)?;
    dialog.append_child(&duration_row)?;

    let upload = create(&doc, "label", "", "display:flex; align-items:center; gap:8px; cursor:pointer; background:#2563eb; padding:8px 16px; border-radius:6px;")?;
    upload.set_text_content(Some("Upload Markdown File"));
    let file_input = input(&doc, "file")?;
    file_input.set_accept(".md");
    file_input.set_attribute("style", "display:none;")?;
    file_input.set_attribute("aria-label", "Upload markdown file")?;
    upload.append_child(&file_input)?;
    dialog.append_child(&upload)?;
    root.append_child(&dialog)?;
    body.append_child(&root)?;

    let mut listeners = vec![
        listen(&win, "resize", |_| {
            with_view(|v| {
                if let Some(w) = web_sys::window() {
                    v.roll.set_viewport_height(viewport_height(&w));
                }
                v.paint(now_ms());
                v.sync_controls();
            });
        })?,
        listen(&play_btn, "click", |_| {
            with_view(CreditsView::toggle);
        })?,
        listen(&reload_btn, "click", |_| {
            with_view(CreditsView::reload);
        })?,
    ];
    {
        let dialog = dialog.clone();
        listeners.push(listen(&settings_btn, "click", move |_| set_visible(&dialog, true))?);
    }
    {
        let dialog = dialog.clone();
        listeners.push(listen(&close_btn, "click", move |_| set_visible(&dialog, false))?);
    }
    {
        let input = offset_input.clone();
        listeners.push(listen(&offset_input, "input", move |_| {
            if let Ok(pct) = input.value().parse::<u16>() {
                with_view(|v| {
                    v.roll.set_start_offset(pct);
                    v.paint(now_ms());
                    v.sync_controls();
                });
            }
        })?);
    }
    {
        let input = speed_input.clone();
        listeners.push(listen(&speed_input, "input", move |_| {
            if let Ok(speed) = input.value().parse::<f64>() {
                with_view(|v| {
                    v.roll.set_speed(speed, now_ms());
                    v.sync_controls();
                });
            }
        })?);
    }
    {
        let input = font_input.clone();
        listeners.push(listen(&font_input, "input", move |_| {
            if let Ok(px) = input.value().parse::<u8>() {
                with_view(|v| {
                    v.roll.set_font_size(px);
                    v.refresh_content();
                    v.paint(now_ms());
                    v.sync_controls();
                });
            }
        })?);
    }
    {
        let input = file_input.clone();
        listeners.push(listen(&file_input, "change", move |_| {
            if let Err(e) = read_selected(&input) {
                notify::report(&e);
            }
            input.set_value("");
        })?);
    }

    let mut view = CreditsView {
        roll: CreditsRoll::new(settings),
        root,
        block,
        content,
        play_btn,
        offset_label,
        speed_label,
        font_label,
        duration_label,
        frame: None,
        listeners,
    };
    view.refresh_content();
    view.paint(now_ms());
    view.sync_controls();
    CREDITS.with(|cell| cell.replace(Some(view)));

    info!("credits roll started");
    Ok(())
}

/// Validates the chosen file's name, then reads it as text.
fn read_selected(input: &HtmlInputElement) -> Result<(), WidgetError> {
    let Some(file) = input.files().and_then(|list| list.get(0)) else {
        return Ok(());
    };
    let name = file.name();
    if let Some(Err(e)) = with_view(|v| v.roll.begin_upload(&name)) {
        return Err(e);
    }

    let reader = FileReader::new()?;
    let onload = {
        let reader = reader.clone();
        let name = name.clone();
        Closure::once_into_js(move || {
            let content = reader.result().ok().and_then(|v| v.as_string());
            with_view(|v| v.load(&name, content));
        })
    };
    let onerror = {
        let name = name.clone();
        Closure::once_into_js(move || {
            notify::report(&WidgetError::UnreadableFile { name });
        })
    };
    reader.set_onload(Some(onload.unchecked_ref()));
    reader.set_onerror(Some(onerror.unchecked_ref()));
    reader.read_as_text(&file)?;
    debug!(file = %name, "reading credits file");
    Ok(())
}

/// Removes the credits roll, cancelling the frame loop and detaching every
/// listener.
pub fn stop() {
    let Some(mut view) = CREDITS.with(|cell| cell.borrow_mut().take()) else {
        return;
    };
    view.frame = None;
    view.listeners.clear();
    view.root.remove();
    info!("credits roll stopped");
}
