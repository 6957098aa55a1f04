//! Page runtime for the landing page
//!
//! WebAssembly bindings to interact-core for browser use. Where
//! `interact_core::wasm_bindings` exposes the controllers one by one,
//! this crate bundles them into a single [`PageRuntime`] the boot
//! script constructs once at page-ready time and drives from its
//! `IntersectionObserver` callbacks and animation-frame loop.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use interact_core::accordion::Accordion;
use interact_core::carousel::{CarouselController, CAROUSEL_INTERVAL};
use interact_core::counter::{
    CounterFrame, CounterGroup, COUNTER_DURATION, COUNTER_VISIBILITY_THRESHOLD,
};
use interact_core::reveal::{RevealOutcome, RevealSet, REVEAL_VISIBILITY_THRESHOLD};

/// Shared constants exposed to JavaScript
#[wasm_bindgen]
pub fn constants() -> JsValue {
    #[derive(Serialize)]
    struct Constants {
        counter_duration: f64,
        counter_visibility_threshold: f64,
        carousel_interval: f64,
        reveal_visibility_threshold: f64,
    }

    let c = Constants {
        counter_duration: COUNTER_DURATION,
        counter_visibility_threshold: COUNTER_VISIBILITY_THRESHOLD,
        carousel_interval: CAROUSEL_INTERVAL,
        reveal_visibility_threshold: REVEAL_VISIBILITY_THRESHOLD,
    };

    serde_wasm_bindgen::to_value(&c).unwrap_or(JsValue::NULL)
}

/// Everything one animation-frame callback needs to apply.
#[derive(Clone, Debug, Serialize)]
struct FrameReport {
    /// Counter displays for this frame, absent until the group has
    /// been triggered (or when the page has no counters).
    counters: Option<CounterFrame>,
    /// How many autoplay ticks fired; zero means the carousel needs no
    /// re-render.
    carousel_ticks: u32,
    carousel_active_index: Option<usize>,
}

/// All four page controllers behind one handle.
///
/// Sections missing from the page (no slides, no panels, no counters,
/// no reveal elements) leave their controller unwired; the matching
/// methods become no-ops, which is the page's degrade-silently policy.
#[wasm_bindgen]
pub struct PageRuntime {
    counters: Option<CounterGroup>,
    carousel: Option<CarouselController>,
    accordion: Option<Accordion>,
    reveals: Option<RevealSet>,
}

#[wasm_bindgen]
impl PageRuntime {
    /// Wire up whatever the page actually contains. `now` is the
    /// current animation-frame timestamp, used to arm the carousel
    /// autoplay countdown.
    #[wasm_bindgen(constructor)]
    pub fn new(
        counter_values: Vec<String>,
        slide_count: usize,
        panel_count: usize,
        reveal_count: usize,
        now: f64,
    ) -> PageRuntime {
        let runtime = PageRuntime {
            counters: CounterGroup::from_raw_values(counter_values),
            carousel: CarouselController::new(slide_count, now),
            accordion: Accordion::new(panel_count),
            reveals: RevealSet::new(reveal_count),
        };
        log::debug!(
            "page runtime wired: counters={} carousel={} accordion={} reveals={}",
            runtime.counters.is_some(),
            runtime.carousel.is_some(),
            runtime.accordion.is_some(),
            runtime.reveals.is_some(),
        );
        runtime
    }

    /// Visibility report for the counter section. True exactly once;
    /// the boot script then unobserves the section.
    #[wasm_bindgen]
    pub fn counter_visibility(&mut self, ratio: f64) -> bool {
        match &mut self.counters {
            Some(group) => group.handle_visibility(ratio),
            None => false,
        }
    }

    /// Visibility report for a reveal element. True when the element
    /// should be revealed and unobserved now.
    #[wasm_bindgen]
    pub fn reveal_visibility(&mut self, index: usize, ratio: f64) -> bool {
        match &mut self.reveals {
            Some(set) => set.report(index, ratio) == RevealOutcome::Revealed,
            None => false,
        }
    }

    /// One animation-frame step: sample the counter ramp and fire due
    /// autoplay ticks. Returns
    /// `{ counters, carousel_ticks, carousel_active_index }`.
    #[wasm_bindgen]
    pub fn frame(&mut self, now: f64) -> Result<JsValue, JsValue> {
        let report = FrameReport {
            counters: self.counters.as_mut().and_then(|group| group.frame(now)),
            carousel_ticks: self
                .carousel
                .as_mut()
                .map_or(0, |carousel| carousel.poll(now)),
            carousel_active_index: self.carousel.as_ref().map(|c| c.active_index),
        };
        serde_wasm_bindgen::to_value(&report).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    #[wasm_bindgen]
    pub fn carousel_next(&mut self, now: f64) {
        if let Some(carousel) = &mut self.carousel {
            carousel.manual_next(now);
        }
    }

    #[wasm_bindgen]
    pub fn carousel_prev(&mut self, now: f64) {
        if let Some(carousel) = &mut self.carousel {
            carousel.manual_prev(now);
        }
    }

    #[wasm_bindgen]
    pub fn carousel_go_to(&mut self, index: usize, now: f64) {
        if let Some(carousel) = &mut self.carousel {
            carousel.manual_go_to(index, now);
        }
    }

    #[wasm_bindgen]
    pub fn carousel_hover_enter(&mut self) {
        if let Some(carousel) = &mut self.carousel {
            carousel.hover_enter();
        }
    }

    #[wasm_bindgen]
    pub fn carousel_hover_leave(&mut self, now: f64) {
        if let Some(carousel) = &mut self.carousel {
            carousel.hover_leave(now);
        }
    }

    #[wasm_bindgen(getter)]
    pub fn carousel_active_index(&self) -> Option<usize> {
        self.carousel.as_ref().map(|c| c.active_index)
    }

    /// Toggle an accordion panel with its freshly measured content
    /// height; returns the render targets for every panel.
    #[wasm_bindgen]
    pub fn accordion_toggle(
        &mut self,
        index: usize,
        measured_height: f64,
    ) -> Result<JsValue, JsValue> {
        let targets = self
            .accordion
            .as_mut()
            .map(|accordion| accordion.toggle(index, measured_height))
            .unwrap_or_default();
        serde_wasm_bindgen::to_value(&targets).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Page teardown: cancel the autoplay timer.
    #[wasm_bindgen]
    pub fn stop(&mut self) {
        if let Some(carousel) = &mut self.carousel {
            carousel.stop();
        }
    }
}
