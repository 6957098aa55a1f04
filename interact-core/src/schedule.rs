//! Poll-driven timing primitives.
//!
//! The page runtime is single-threaded and event-driven: the host
//! hands in monotonically increasing timestamps (milliseconds from
//! `requestAnimationFrame`) and the primitives here decide what is due.
//! Cancel, restart and resume are plain field updates performed inside
//! the caller's event handler, so cancel-plus-reschedule is atomic:
//! no tick can fire in between.

use serde::{Deserialize, Serialize};

/// Repeating countdown with an absolute deadline.
///
/// Disarmed timers never fire. Re-arming always schedules a full
/// period from `now`, which is exactly the "manual action restarts the
/// countdown" rule the carousel needs.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct IntervalTimer {
    pub period: f64,
    pub deadline: Option<f64>,
}

impl IntervalTimer {
    /// Create a disarmed timer. A non-positive period never fires.
    pub fn new(period: f64) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer: next tick a full period after `now`.
    pub fn arm(&mut self, now: f64) {
        if self.period > 0.0 {
            self.deadline = Some(now + self.period);
        }
    }

    /// Drop the pending deadline. The index/state the timer was
    /// driving is untouched; callers re-arm to resume.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Count the ticks due at `now`, advancing the deadline past each.
    ///
    /// A host that was suspended for several periods gets the missed
    /// ticks back-to-back, matching interval-timer semantics.
    pub fn poll(&mut self, now: f64) -> u32 {
        if self.period <= 0.0 {
            return 0;
        }
        let mut ticks = 0;
        while let Some(deadline) = self.deadline {
            if now < deadline {
                break;
            }
            self.deadline = Some(deadline + self.period);
            ticks += 1;
        }
        ticks
    }
}

/// One-shot timeline for fixed-duration animations.
///
/// The start timestamp is captured on the first sample, so a timeline
/// can be constructed eagerly and only begins consuming time once the
/// owning animation is actually triggered.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FrameTimeline {
    pub duration: f64,
    pub started_at: Option<f64>,
}

impl FrameTimeline {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            started_at: None,
        }
    }

    /// Normalised progress in `[0, 1]` at `now`. The first call pins
    /// the start of the timeline.
    pub fn progress(&mut self, now: f64) -> f64 {
        let start = *self.started_at.get_or_insert(now);
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, now: f64) -> bool {
        match self.started_at {
            Some(start) => now - start >= self.duration,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disarmed_timer_never_ticks() {
        let mut timer = IntervalTimer::new(100.0);
        assert_eq!(timer.poll(1_000.0), 0);
    }

    #[test]
    fn arm_schedules_full_period_from_now() {
        let mut timer = IntervalTimer::new(100.0);
        timer.arm(50.0);
        assert_eq!(timer.poll(149.0), 0);
        assert_eq!(timer.poll(150.0), 1);
    }

    #[test]
    fn rearm_discards_pending_deadline() {
        let mut timer = IntervalTimer::new(100.0);
        timer.arm(0.0);
        timer.arm(90.0);
        // Old deadline at 100 must not fire.
        assert_eq!(timer.poll(100.0), 0);
        assert_eq!(timer.poll(190.0), 1);
    }

    #[test]
    fn missed_periods_are_recovered_as_multiple_ticks() {
        let mut timer = IntervalTimer::new(100.0);
        timer.arm(0.0);
        assert_eq!(timer.poll(350.0), 3);
        assert_eq!(timer.poll(399.0), 0);
    }

    #[test]
    fn zero_period_is_inert() {
        let mut timer = IntervalTimer::new(0.0);
        timer.arm(0.0);
        assert_eq!(timer.poll(10_000.0), 0);
    }

    #[test]
    fn timeline_pins_start_on_first_sample() {
        let mut timeline = FrameTimeline::new(200.0);
        assert_eq!(timeline.progress(500.0), 0.0);
        assert_eq!(timeline.progress(600.0), 0.5);
        assert_eq!(timeline.progress(900.0), 1.0);
        assert!(timeline.is_complete(700.0));
    }
}
