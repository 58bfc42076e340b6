//! Typed host-domain contracts shared by the page runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services: the single
//! configuration fetch, timer scheduling (with a deterministic virtual
//! implementation for tests), and scroll-reveal wiring. Concrete browser
//! adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod host;
pub mod reveal;
pub mod scheduler;

pub use config::{ConfigError, ConfigFuture, ConfigService, FixedConfigService};
pub use host::{HostServices, HostStrategy};
pub use reveal::{NoopRevealService, RevealService};
pub use scheduler::{Scheduler, TimerHandle, VirtualScheduler};
