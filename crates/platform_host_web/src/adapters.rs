//! Concrete adapter factories for runtime wiring.

use std::rc::Rc;

use platform_host::{HostServices, HostStrategy};

use crate::{config::WebConfigService, reveal::WebRevealService, scheduler::BrowserScheduler};

/// Builds the browser host-service bundle injected at the entry layer.
pub fn build_host_services() -> HostServices {
    HostServices {
        config: Rc::new(WebConfigService),
        scheduler: Rc::new(BrowserScheduler),
        reveal: Rc::new(WebRevealService),
        host_strategy: HostStrategy::Browser,
    }
}
