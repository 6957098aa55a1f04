//! Testimonial carousel rotation state machine.
//!
//! Owns the active slide index and the autoplay countdown. All index
//! arithmetic is modulo the slide count, so the index can never leave
//! `[0, slide_count)`. Manual transitions re-arm the countdown
//! synchronously, which is what guarantees a user action is never
//! followed by a stale near-term autoplay tick.

use serde::{Deserialize, Serialize};

use crate::schedule::IntervalTimer;

/// Autoplay period in host time units (milliseconds in the browser).
pub const CAROUSEL_INTERVAL: f64 = 4500.0;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CarouselController {
    pub slide_count: usize,
    pub active_index: usize,
    /// False only after [`CarouselController::stop`]; hover suspension
    /// keeps this true and only disarms the timer.
    pub autoplay_active: bool,
    autoplay: IntervalTimer,
}

impl CarouselController {
    /// `None` when there are no slides: the page section is absent and
    /// the controller must not schedule anything.
    pub fn new(slide_count: usize, now: f64) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }
        let mut autoplay = IntervalTimer::new(CAROUSEL_INTERVAL);
        autoplay.arm(now);
        Some(Self {
            slide_count,
            active_index: 0,
            autoplay_active: true,
            autoplay,
        })
    }

    /// Advance one slide. Used by both autoplay ticks and the next
    /// button; does not touch the countdown.
    pub fn next(&mut self) {
        self.active_index = (self.active_index + 1) % self.slide_count;
    }

    /// Step back one slide, wrapping to the last from the first.
    pub fn prev(&mut self) {
        self.active_index = (self.active_index + self.slide_count - 1) % self.slide_count;
    }

    /// Jump to slide `i` (taken modulo the slide count).
    pub fn go_to(&mut self, index: usize) {
        self.active_index = index % self.slide_count;
    }

    /// Next button pressed: transition, then restart the countdown so
    /// the following autoplay tick is a full interval away.
    pub fn manual_next(&mut self, now: f64) {
        self.next();
        self.rearm(now);
    }

    /// Previous button pressed.
    pub fn manual_prev(&mut self, now: f64) {
        self.prev();
        self.rearm(now);
    }

    /// Dot indicator pressed.
    pub fn manual_go_to(&mut self, index: usize, now: f64) {
        self.go_to(index);
        self.rearm(now);
    }

    /// Pointer entered the carousel: hold the countdown, keep the
    /// index where it is.
    pub fn hover_enter(&mut self) {
        if self.autoplay_active && self.autoplay.is_armed() {
            log::debug!("carousel autoplay suspended on hover");
            self.autoplay.disarm();
        }
    }

    /// Pointer left: a fresh full interval from `now`.
    pub fn hover_leave(&mut self, now: f64) {
        if self.autoplay_active {
            log::debug!("carousel autoplay resumed");
            self.autoplay.arm(now);
        }
    }

    /// Fire the autoplay ticks due at `now`. Returns how many slides
    /// were advanced; zero means nothing to re-render.
    pub fn poll(&mut self, now: f64) -> u32 {
        let ticks = self.autoplay.poll(now);
        for _ in 0..ticks {
            self.next();
        }
        if ticks > 0 {
            log::trace!("carousel autoplay advanced to {}", self.active_index);
        }
        ticks
    }

    /// Page teardown: cancel the timer for good. Manual transitions
    /// and hover events no longer re-arm it.
    pub fn stop(&mut self) {
        self.autoplay_active = false;
        self.autoplay.disarm();
    }

    /// Active markers for the slide/dot pair at each position; exactly
    /// one entry is true.
    pub fn active_flags(&self) -> Vec<bool> {
        (0..self.slide_count).map(|i| i == self.active_index).collect()
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active_index
    }

    fn rearm(&mut self, now: f64) {
        if self.autoplay_active {
            self.autoplay.arm(now);
        }
    }
}
