//! One-shot statistics counter animation.
//!
//! A group of numeric displays shares a single visibility region; the
//! first time that region is sufficiently visible, every counter in the
//! group ramps from zero to its authored value over a fixed duration
//! with an ease-out-cubic curve. The trigger is a one-time latch: later
//! visibility reports are ignored, so the animation can never replay.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::easing::ease_out_cubic;
use crate::format::display_value;
use crate::schedule::FrameTimeline;

/// Animation length in host time units (milliseconds in the browser).
pub const COUNTER_DURATION: f64 = 1600.0;
/// Intersection ratio that arms the group.
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.35;

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;

/// Scale carried by an authored value's trailing letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleSuffix {
    None,
    Thousand,
    Million,
}

impl ScaleSuffix {
    pub fn multiplier(self) -> f64 {
        match self {
            ScaleSuffix::None => 1.0,
            ScaleSuffix::Thousand => THOUSAND,
            ScaleSuffix::Million => MILLION,
        }
    }
}

/// Why an authored counter value was rejected by the strict parser.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CounterParseError {
    #[error("counter value is empty")]
    Empty,
    #[error("counter value {raw:?} is not of the form digits[.digits][k|K|m|M]")]
    Malformed { raw: String },
}

/// One numeric display, parsed once at construction and immutable
/// afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CounterSpec {
    /// Value string as authored in the page content.
    pub raw: String,
    /// Target magnitude after suffix scaling (`"5.2M"` -> 5_200_000).
    pub target: f64,
    pub suffix: ScaleSuffix,
    /// Authored with a decimal point, or non-integral once parsed.
    pub fractional: bool,
}

impl CounterSpec {
    /// Strict parser for `digits[,digits]*[.digits]?[k|K|m|M]?`.
    pub fn parse(raw: &str) -> Result<Self, CounterParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CounterParseError::Empty);
        }

        let (prefix, suffix) = match trimmed.chars().next_back() {
            Some('k' | 'K') => (&trimmed[..trimmed.len() - 1], ScaleSuffix::Thousand),
            Some('m' | 'M') => (&trimmed[..trimmed.len() - 1], ScaleSuffix::Million),
            _ => (trimmed, ScaleSuffix::None),
        };

        let malformed = || CounterParseError::Malformed {
            raw: trimmed.to_string(),
        };

        let shape_ok = prefix.chars().any(|c| c.is_ascii_digit())
            && prefix
                .chars()
                .all(|c| c.is_ascii_digit() || c == ',' || c == '.')
            && prefix.chars().filter(|&c| c == '.').count() <= 1;
        if !shape_ok {
            return Err(malformed());
        }

        let digits: String = prefix.chars().filter(|&c| c != ',').collect();
        let magnitude: f64 = digits.parse().map_err(|_| malformed())?;
        let target = magnitude * suffix.multiplier();

        Ok(Self {
            raw: trimmed.to_string(),
            target,
            suffix,
            fractional: trimmed.contains('.') || magnitude.fract() != 0.0,
        })
    }

    /// Degraded constructor used when wiring up a page: a value the
    /// strict parser rejects falls back to its longest leading float
    /// (or zero) with no suffix, so one bad value renders as a low
    /// number instead of aborting the whole group.
    pub fn from_raw(raw: &str) -> Self {
        match Self::parse(raw) {
            Ok(spec) => spec,
            Err(err) => {
                log::debug!("counter value {raw:?} rejected ({err}), degrading to leading float");
                let target = leading_float(raw);
                Self {
                    raw: raw.trim().to_string(),
                    target,
                    suffix: ScaleSuffix::None,
                    fractional: raw.contains('.') || target.fract() != 0.0,
                }
            }
        }
    }

    /// Render this spec at an intermediate animation value.
    pub fn display_at(&self, value: f64) -> String {
        display_value(self, value)
    }

    /// Render the exact target, used for the completion frame.
    pub fn final_display(&self) -> String {
        display_value(self, self.target)
    }
}

/// Longest leading `digits[.digits]` run of `raw`, or 0.0.
fn leading_float(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in trimmed.char_indices() {
        if c.is_ascii_digit() {
            seen_digit = true;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return 0.0;
    }
    trimmed[..end].parse().unwrap_or(0.0)
}

/// Rendered output of one animation frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CounterFrame {
    /// One formatted string per spec, in construction order.
    pub displays: Vec<String>,
    /// True once the exact targets have been rendered; the host can
    /// stop scheduling frames.
    pub done: bool,
}

/// All counters of one visibility region, with the shared trigger
/// latch and animation timeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CounterGroup {
    pub specs: Vec<CounterSpec>,
    pub triggered: bool,
    timeline: FrameTimeline,
}

impl CounterGroup {
    /// `None` for an empty group: nothing to observe, nothing to
    /// schedule.
    pub fn new(specs: Vec<CounterSpec>) -> Option<Self> {
        if specs.is_empty() {
            return None;
        }
        Some(Self {
            specs,
            triggered: false,
            timeline: FrameTimeline::new(COUNTER_DURATION),
        })
    }

    /// Build a group straight from authored value strings, degrading
    /// malformed entries instead of dropping them.
    pub fn from_raw_values<I, S>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(values.into_iter().map(|v| CounterSpec::from_raw(v.as_ref())).collect())
    }

    /// Visibility report for the containing region.
    ///
    /// Returns `true` exactly once, on the first report at or above
    /// the threshold; the latch is set before anything else happens so
    /// a second notification in the same batch is already ignored. On
    /// `true` the host should unobserve the region and start driving
    /// [`CounterGroup::frame`].
    pub fn handle_visibility(&mut self, ratio: f64) -> bool {
        if self.triggered || ratio < COUNTER_VISIBILITY_THRESHOLD {
            return false;
        }
        self.triggered = true;
        log::debug!("counter group triggered at ratio {ratio:.2}");
        true
    }

    /// Sample the animation at `now`. `None` until the group has been
    /// triggered. The first call pins the start of the ramp; the frame
    /// at full progress formats the exact targets.
    pub fn frame(&mut self, now: f64) -> Option<CounterFrame> {
        if !self.triggered {
            return None;
        }
        let progress = self.timeline.progress(now);
        let done = progress >= 1.0;
        let eased = ease_out_cubic(progress);
        let displays = self
            .specs
            .iter()
            .map(|spec| {
                if done {
                    spec.final_display()
                } else {
                    spec.display_at(spec.target * eased)
                }
            })
            .collect();
        Some(CounterFrame { displays, done })
    }
}
