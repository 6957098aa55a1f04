//! WebAssembly bindings for interact-core
//!
//! This module exposes the controllers to JavaScript via
//! `wasm-bindgen`. The page's glue script owns the
//! `IntersectionObserver`s and the `requestAnimationFrame` loop; it
//! forwards timestamps and intersection ratios here and applies the
//! render directives that come back.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::accordion::Accordion as RustAccordion;
use crate::carousel::{CarouselController as RustCarousel, CAROUSEL_INTERVAL};
use crate::counter::{
    CounterGroup as RustCounterGroup, COUNTER_DURATION, COUNTER_VISIBILITY_THRESHOLD,
};
use crate::reveal::{
    RevealOutcome as RustRevealOutcome, RevealSet as RustRevealSet,
    REVEAL_VISIBILITY_THRESHOLD,
};

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Outcome of a reveal visibility report, mirrored for JS consumers.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Revealed,
    AlreadyRevealed,
    Pending,
}

impl From<RustRevealOutcome> for RevealOutcome {
    fn from(outcome: RustRevealOutcome) -> Self {
        match outcome {
            RustRevealOutcome::Revealed => RevealOutcome::Revealed,
            RustRevealOutcome::AlreadyRevealed => RevealOutcome::AlreadyRevealed,
            RustRevealOutcome::Pending => RevealOutcome::Pending,
        }
    }
}

/// Statistics counter group (shared trigger latch + animation ramp).
#[wasm_bindgen]
pub struct CounterGroup {
    inner: RustCounterGroup,
}

#[wasm_bindgen]
impl CounterGroup {
    /// Build a group from the authored value strings. Errors only on
    /// an empty group; malformed values degrade to zero.
    #[wasm_bindgen(constructor)]
    pub fn new(raw_values: Vec<String>) -> Result<CounterGroup, JsValue> {
        RustCounterGroup::from_raw_values(raw_values)
            .map(|inner| CounterGroup { inner })
            .ok_or_else(|| to_js_error("counter group has no elements"))
    }

    /// Visibility report for the counter section. Returns true exactly
    /// once; the caller should then unobserve the section and start
    /// calling `frame` from its animation loop.
    #[wasm_bindgen]
    pub fn handle_visibility(&mut self, ratio: f64) -> bool {
        self.inner.handle_visibility(ratio)
    }

    /// Sample the animation at `now` (milliseconds). Returns
    /// `{ displays: string[], done: boolean }`, or null before the
    /// group has been triggered.
    #[wasm_bindgen]
    pub fn frame(&mut self, now: f64) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.frame(now)).map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn triggered(&self) -> bool {
        self.inner.triggered
    }

    #[wasm_bindgen(getter)]
    pub fn counter_count(&self) -> usize {
        self.inner.specs.len()
    }
}

/// Testimonial carousel (rotation index + autoplay countdown).
#[wasm_bindgen]
pub struct Carousel {
    inner: RustCarousel,
}

#[wasm_bindgen]
impl Carousel {
    /// Errors when the page has no slides; the caller skips wiring.
    #[wasm_bindgen(constructor)]
    pub fn new(slide_count: usize, now: f64) -> Result<Carousel, JsValue> {
        RustCarousel::new(slide_count, now)
            .map(|inner| Carousel { inner })
            .ok_or_else(|| to_js_error("carousel has no slides"))
    }

    #[wasm_bindgen]
    pub fn manual_next(&mut self, now: f64) {
        self.inner.manual_next(now);
    }

    #[wasm_bindgen]
    pub fn manual_prev(&mut self, now: f64) {
        self.inner.manual_prev(now);
    }

    #[wasm_bindgen]
    pub fn manual_go_to(&mut self, index: usize, now: f64) {
        self.inner.manual_go_to(index, now);
    }

    #[wasm_bindgen]
    pub fn hover_enter(&mut self) {
        self.inner.hover_enter();
    }

    #[wasm_bindgen]
    pub fn hover_leave(&mut self, now: f64) {
        self.inner.hover_leave(now);
    }

    /// Fire due autoplay ticks; returns how many slides advanced.
    #[wasm_bindgen]
    pub fn poll(&mut self, now: f64) -> u32 {
        self.inner.poll(now)
    }

    #[wasm_bindgen]
    pub fn stop(&mut self) {
        self.inner.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn active_index(&self) -> usize {
        self.inner.active_index
    }

    /// Per-position active markers for slides and dots alike.
    #[wasm_bindgen]
    pub fn active_flags(&self) -> Array {
        let flags = Array::new();
        for flag in self.inner.active_flags() {
            flags.push(&JsValue::from_bool(flag));
        }
        flags
    }
}

/// FAQ accordion (exclusive-open panel set).
#[wasm_bindgen]
pub struct Accordion {
    inner: RustAccordion,
}

#[wasm_bindgen]
impl Accordion {
    #[wasm_bindgen(constructor)]
    pub fn new(panel_count: usize) -> Result<Accordion, JsValue> {
        RustAccordion::new(panel_count)
            .map(|inner| Accordion { inner })
            .ok_or_else(|| to_js_error("accordion has no panels"))
    }

    /// Toggle a panel, passing its freshly measured content height.
    /// Returns `[{ index, open, target_height }]` for every panel.
    #[wasm_bindgen]
    pub fn toggle(&mut self, index: usize, measured_height: f64) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.toggle(index, measured_height))
            .map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn open_panel(&self) -> Option<usize> {
        self.inner.open_panel()
    }
}

/// Reveal-on-scroll latches.
#[wasm_bindgen]
pub struct RevealSet {
    inner: RustRevealSet,
}

#[wasm_bindgen]
impl RevealSet {
    #[wasm_bindgen(constructor)]
    pub fn new(element_count: usize) -> Result<RevealSet, JsValue> {
        RustRevealSet::new(element_count)
            .map(|inner| RevealSet { inner })
            .ok_or_else(|| to_js_error("reveal set has no elements"))
    }

    /// Visibility report for one element. On `Revealed` the caller
    /// applies the effect and unobserves the element.
    #[wasm_bindgen]
    pub fn report(&mut self, index: usize, ratio: f64) -> RevealOutcome {
        self.inner.report(index, ratio).into()
    }

    #[wasm_bindgen]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.inner.is_revealed(index)
    }

    #[wasm_bindgen(getter)]
    pub fn revealed_count(&self) -> usize {
        self.inner.revealed_count()
    }
}

/// Shared runtime constants so the JS glue and the core agree on
/// thresholds and durations.
#[wasm_bindgen]
pub fn counter_duration() -> f64 {
    COUNTER_DURATION
}

#[wasm_bindgen]
pub fn counter_visibility_threshold() -> f64 {
    COUNTER_VISIBILITY_THRESHOLD
}

#[wasm_bindgen]
pub fn carousel_interval() -> f64 {
    CAROUSEL_INTERVAL
}

#[wasm_bindgen]
pub fn reveal_visibility_threshold() -> f64 {
    REVEAL_VISIBILITY_THRESHOLD
}
