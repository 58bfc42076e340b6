//! Host service bundle injected into the page runtime at the entry layer.

use std::rc::Rc;

use crate::{ConfigService, RevealService, Scheduler};

/// Stable host strategy selected for the current runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Test composition on the virtual scheduler and in-memory services.
    Test,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Test => "test",
        }
    }
}

/// Runtime-selected host service bundle.
///
/// All environment-specific service selection happens before this bundle
/// crosses into `page_runtime`, which keeps the runtime decoupled from browser
/// adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Single-fetch configuration service.
    pub config: Rc<dyn ConfigService>,
    /// Timer scheduler backing every page timer.
    pub scheduler: Rc<dyn Scheduler>,
    /// Scroll-reveal and smooth-anchor wiring service.
    pub reveal: Rc<dyn RevealService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}
