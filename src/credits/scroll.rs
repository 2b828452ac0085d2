//! Scroll clock for the credits roll.
//!
//! Times are caller-supplied milliseconds (`performance.now()` in the
//! browser), so the model is deterministic under test. Distance accumulated
//! before the current play segment is banked on pause and on speed changes;
//! resuming never jumps.

use super::settings::PIXELS_PER_SECOND;

/// Padding below the content that must also scroll out of view.
pub const BOTTOM_PADDING_PX: f64 = 96.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollState {
    Idle,
    Playing,
    Paused,
    Finished,
}

#[derive(Clone, Debug)]
pub struct ScrollClock {
    state: ScrollState,
    speed: f64,
    /// Start of the current play segment.
    segment_start_ms: f64,
    banked_px: f64,
    banked_ms: f64,
}

impl ScrollClock {
    pub fn new(speed: f64) -> Self {
        Self {
            state: ScrollState::Idle,
            speed,
            segment_start_ms: 0.0,
            banked_px: 0.0,
            banked_ms: 0.0,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == ScrollState::Playing
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    fn segment_ms(&self, now: f64) -> f64 {
        if self.is_playing() {
            (now - self.segment_start_ms).max(0.0)
        } else {
            0.0
        }
    }

    /// Play time accumulated so far; frozen while paused.
    pub fn elapsed_ms(&self, now: f64) -> f64 {
        self.banked_ms + self.segment_ms(now)
    }

    /// Distance scrolled upward from the start position.
    pub fn offset_px(&self, now: f64) -> f64 {
        self.banked_px + self.segment_ms(now) / 1000.0 * PIXELS_PER_SECOND * self.speed
    }

    fn bank(&mut self, now: f64) {
        self.banked_px = self.offset_px(now);
        self.banked_ms = self.elapsed_ms(now);
        self.segment_start_ms = now;
    }

    pub fn start(&mut self, now: f64) {
        self.banked_px = 0.0;
        self.banked_ms = 0.0;
        self.segment_start_ms = now;
        self.state = ScrollState::Playing;
    }

    pub fn pause(&mut self, now: f64) {
        if self.is_playing() {
            self.bank(now);
            self.state = ScrollState::Paused;
        }
    }

    pub fn resume(&mut self, now: f64) {
        if self.state == ScrollState::Paused {
            self.segment_start_ms = now;
            self.state = ScrollState::Playing;
        }
    }

    /// Play/pause button semantics. Returns whether the clock is now playing.
    pub fn toggle(&mut self, now: f64) -> bool {
        match self.state {
            ScrollState::Idle | ScrollState::Finished => self.start(now),
            ScrollState::Playing => self.pause(now),
            ScrollState::Paused => self.resume(now),
        }
        self.is_playing()
    }

    /// Back to the start position, not playing.
    pub fn reset(&mut self) {
        self.state = ScrollState::Idle;
        self.banked_px = 0.0;
        self.banked_ms = 0.0;
    }

    /// Changes speed without moving the current position.
    pub fn set_speed(&mut self, speed: f64, now: f64) {
        if self.is_playing() {
            self.bank(now);
        }
        self.speed = speed;
    }

    /// Advances to `now`; once `travel_px` is covered the clock stops there.
    /// Returns the offset to draw.
    pub fn tick(&mut self, now: f64, travel_px: f64) -> f64 {
        let offset = self.offset_px(now);
        if self.is_playing() && offset >= travel_px {
            self.bank(now);
            self.banked_px = travel_px;
            self.state = ScrollState::Finished;
            return travel_px;
        }
        offset
    }
}

/// Distance from the start position until the last line has left the top.
pub fn travel_px(content_h: f64, start_offset_px: f64) -> f64 {
    start_offset_px + content_h + BOTTOM_PADDING_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn scrolls_100px_per_second_at_unit_speed() {
        let mut c = ScrollClock::new(1.0);
        c.start(1_000.0);
        assert!(close(c.offset_px(1_000.0), 0.0));
        assert!(close(c.offset_px(2_500.0), 150.0));
    }

    #[test]
    fn pause_captures_elapsed_and_resume_does_not_jump() {
        let mut c = ScrollClock::new(1.0);
        c.start(0.0);
        c.pause(2_000.0);
        assert_eq!(c.state(), ScrollState::Paused);
        assert!(close(c.elapsed_ms(10_000.0), 2_000.0));
        assert!(close(c.offset_px(10_000.0), 200.0));
        c.resume(10_000.0);
        assert!(close(c.offset_px(10_000.0), 200.0));
        assert!(close(c.offset_px(11_000.0), 300.0));
        assert!(close(c.elapsed_ms(11_000.0), 3_000.0));
    }

    #[test]
    fn toggle_cycles_states() {
        let mut c = ScrollClock::new(1.0);
        assert!(c.toggle(0.0));
        assert!(!c.toggle(500.0));
        assert!(c.toggle(900.0));
        assert!(close(c.offset_px(1_400.0), 100.0));
    }

    #[test]
    fn speed_change_is_continuous() {
        let mut c = ScrollClock::new(1.0);
        c.start(0.0);
        c.set_speed(2.0, 1_000.0);
        assert!(close(c.offset_px(1_000.0), 100.0));
        assert!(close(c.offset_px(2_000.0), 300.0));
    }

    #[test]
    fn finishes_at_travel_distance() {
        let mut c = ScrollClock::new(1.0);
        c.start(0.0);
        assert!(close(c.tick(1_000.0, 250.0), 100.0));
        assert!(close(c.tick(5_000.0, 250.0), 250.0));
        assert_eq!(c.state(), ScrollState::Finished);
        assert!(close(c.offset_px(9_000.0), 250.0));
        // play again restarts from the top
        assert!(c.toggle(9_000.0));
        assert!(close(c.offset_px(9_000.0), 0.0));
    }

    #[test]
    fn reset_returns_to_start() {
        let mut c = ScrollClock::new(1.0);
        c.start(0.0);
        c.reset();
        assert_eq!(c.state(), ScrollState::Idle);
        assert!(close(c.offset_px(5_000.0), 0.0));
        assert!(close(travel_px(500.0, 400.0), 996.0));
    }
}
