//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Concrete adapters for the single configuration fetch, browser timers, and
//! scroll-reveal/smooth-anchor wiring, plus the bundle factory the entry layer
//! injects into the page runtime.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
pub mod config;
pub mod reveal;
pub mod scheduler;

pub use adapters::build_host_services;
pub use config::WebConfigService;
pub use reveal::WebRevealService;
pub use scheduler::BrowserScheduler;
