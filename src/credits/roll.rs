//! Credits roll state: the markdown document, settings, scroll clock and the
//! measured sizes the animation depends on. The DOM view owns one of these
//! and only forwards events and measurements.

use tracing::{debug, info};

use super::markdown;
use super::scroll::{ScrollClock, ScrollState, travel_px};
use super::settings::CreditsSettings;
use super::upload;
use crate::error::WidgetError;

pub const SAMPLE_MARKDOWN: &str = "# Cast
* John Smith as Hero
* Jane Doe as Heroine
* Bob Wilson as Villain

# Crew
* Director: James Cameron
* Producer: Steven Spielberg
* Writer: Christopher Nolan

# Special Thanks
* Coffee Machine
* Pizza Delivery
* Stack Overflow";

#[derive(Clone, Debug)]
pub struct CreditsRoll {
    markdown: String,
    settings: CreditsSettings,
    clock: ScrollClock,
    content_h: f64,
    viewport_h: f64,
}

impl CreditsRoll {
    pub fn new(settings: CreditsSettings) -> Self {
        Self {
            markdown: SAMPLE_MARKDOWN.to_string(),
            clock: ScrollClock::new(settings.speed),
            settings,
            content_h: 0.0,
            viewport_h: 0.0,
        }
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn settings(&self) -> &CreditsSettings {
        &self.settings
    }

    pub fn state(&self) -> ScrollState {
        self.clock.state()
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    pub fn html(&self) -> String {
        markdown::render(&self.markdown, self.settings.font_size_px as f64)
    }

    /// Replaces the document and rewinds to the start position.
    pub fn set_markdown(&mut self, text: String) {
        self.markdown = text;
        self.clock.reset();
    }

    /// First half of an upload: runs before the file is read.
    pub fn begin_upload(&self, name: &str) -> Result<(), WidgetError> {
        upload::check_extension(name)
    }

    /// Second half of an upload, with the reader's result.
    pub fn finish_upload(&mut self, name: &str, content: Option<String>) -> Result<(), WidgetError> {
        let text = upload::decode_text(name, content)?;
        info!(file = name, bytes = text.len(), "credits document loaded");
        self.set_markdown(text);
        Ok(())
    }

    pub fn set_measurements(&mut self, content_h: f64, viewport_h: f64) {
        self.content_h = content_h.max(0.0);
        self.viewport_h = viewport_h.max(0.0);
    }

    pub fn set_viewport_height(&mut self, viewport_h: f64) {
        self.viewport_h = viewport_h.max(0.0);
    }

    pub fn set_speed(&mut self, speed: f64, now: f64) {
        self.settings.set_speed(speed);
        self.clock.set_speed(self.settings.speed, now);
        debug!(speed = self.settings.speed, duration = self.duration_secs(), "speed changed");
    }

    pub fn set_font_size(&mut self, px: u8) {
        self.settings.set_font_size(px);
    }

    pub fn set_start_offset(&mut self, pct: u16) {
        self.settings.set_start_offset(pct);
    }

    pub fn duration_secs(&self) -> f64 {
        self.settings.duration_secs(self.content_h, self.viewport_h)
    }

    pub fn toggle(&mut self, now: f64) -> bool {
        self.clock.toggle(now)
    }

    pub fn reload(&mut self) {
        self.clock.reset();
    }

    /// Vertical translation (px) of the credits block at `now`.
    pub fn frame(&mut self, now: f64) -> f64 {
        let start = self.settings.start_offset_px(self.viewport_h);
        let offset = self.clock.tick(now, travel_px(self.content_h, start));
        start - offset
    }
}

impl Default for CreditsRoll {
    fn default() -> Self {
        Self::new(CreditsSettings::default())
    }
}
