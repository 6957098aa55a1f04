//! Interaction core for the landing page
//!
//! This crate centralises the four stateful behaviors of the marketing
//! page front-end:
//!
//! 1. **Counter** – one-shot statistics counters that ramp from zero
//!    to their authored value the first time their section scrolls
//!    into view.
//! 2. **Carousel** – testimonial rotation with an autoplay countdown,
//!    manual overrides that restart it, and hover suspension.
//! 3. **Accordion** – the FAQ list with its exclusive-open policy.
//! 4. **Reveal** – per-element one-shot reveal-on-scroll latches.
//!
//! Everything here is pure state-machine code: the browser owns the
//! DOM, the `IntersectionObserver`s and the animation-frame loop, and
//! feeds this crate timestamps and visibility ratios. The controllers
//! answer with render directives (formatted strings, active flags,
//! panel heights) that the JS glue applies. That split keeps every
//! transition unit-testable without a rendering surface.
//!
//! The crate exposes WebAssembly bindings (via `wasm-bindgen`) when
//! the `wasm` feature is enabled; without it the pure Rust types can
//! be used by other Rust code directly.

pub mod accordion;
pub mod carousel;
pub mod counter;
pub mod easing;
pub mod format;
pub mod reveal;
pub mod schedule;

// Conditional bindings. Only compile the WASM API when the feature
// flag has been enabled.

#[cfg(feature = "wasm")]
pub mod wasm_bindings;
