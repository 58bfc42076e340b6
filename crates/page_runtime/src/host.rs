//! Host-side execution of reducer effects and the configuration load.

use std::rc::Rc;
use std::time::Duration;

use leptos::{logging, spawn_local, Callable, Callback};
use platform_host::{ConfigService, HostServices, RevealService, Scheduler};

use crate::reducer::{PageAction, RuntimeEffect};

/// Delay before the scroll animator attaches, letting the committed DOM settle.
pub const REVEAL_ATTACH_DELAY: Duration = Duration::from_millis(500);
/// Selector the scroll animator observes after each render.
pub const GRID_CARD_SELECTOR: &str = ".grid-part";
/// Static message shown in place of the grid when the configuration fails to
/// load. The underlying cause is logged, never shown.
pub const CONFIG_ERROR_MESSAGE: &str =
    "Failed to load configuration. Please check if config.json exists and is valid.";

#[derive(Clone)]
/// Host service bundle for page runtime side effects.
pub struct PageHostContext {
    services: HostServices,
}

impl PageHostContext {
    /// Wraps the injected host bundle.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured timer scheduler.
    pub fn scheduler(&self) -> Rc<dyn Scheduler> {
        self.services.scheduler.clone()
    }

    /// Returns the configured configuration fetch service.
    pub fn config_service(&self) -> Rc<dyn ConfigService> {
        self.services.config.clone()
    }

    /// Returns the configured reveal-animation service.
    pub fn reveal_service(&self) -> Rc<dyn RevealService> {
        self.services.reveal.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::AttachRevealAnimations => self.attach_reveal_animations(),
        }
    }

    fn attach_reveal_animations(&self) {
        let reveal = self.reveal_service();
        let _ = self.scheduler().delay(
            REVEAL_ATTACH_DELAY,
            Box::new(move || {
                if let Err(err) = reveal.observe_reveals(GRID_CARD_SELECTOR) {
                    logging::warn!("scroll reveal attach failed: {err}");
                }
            }),
        );
    }

    /// Performs the single configuration fetch and reports the outcome.
    ///
    /// The page reveals once the fetch settles, on success and failure alike.
    pub fn load_config(&self, dispatch: Callback<PageAction>) {
        let config_service = self.config_service();
        spawn_local(async move {
            match config_service.load_config().await {
                Ok(config) => dispatch.call(PageAction::ConfigLoaded { config }),
                Err(err) => {
                    logging::error!("config load failed: {err}");
                    dispatch.call(PageAction::ConfigFailed {
                        message: CONFIG_ERROR_MESSAGE.to_string(),
                    });
                }
            }
            dispatch.call(PageAction::Reveal);
        });
    }

    /// Binds smooth scrolling for in-page anchor links; called once at mount.
    pub fn bind_smooth_anchors(&self) {
        if let Err(err) = self.reveal_service().bind_smooth_anchors() {
            logging::warn!("smooth anchor binding failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use content_contract::SiteConfig;
    use platform_host::{
        FixedConfigService, HostServices, HostStrategy, NoopRevealService, VirtualScheduler,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reducer::{reduce_page, PagePhase, PageState};
    use crate::sequencer::{install_loading_sequence, LoadingTiming, LOADING_FACTS};

    fn test_host(scheduler: &VirtualScheduler, config: SiteConfig) -> PageHostContext {
        PageHostContext::new(HostServices {
            config: Rc::new(FixedConfigService::new(config)),
            scheduler: Rc::new(scheduler.clone()),
            reveal: Rc::new(NoopRevealService),
            host_strategy: HostStrategy::Test,
        })
    }

    #[test]
    fn test_composition_drives_a_full_load_to_reveal_pass() {
        let scheduler = VirtualScheduler::new();
        let document = SiteConfig {
            topic_title: "Water".to_string(),
            ..SiteConfig::default()
        };
        let host = test_host(&scheduler, document);
        assert_eq!(host.host_strategy_name(), "test");

        let state = Rc::new(RefCell::new(PageState::default()));

        let rotation_state = state.clone();
        let load_state = state.clone();
        let load_host = host.clone();
        install_loading_sequence(
            &host.scheduler(),
            LoadingTiming::default(),
            move || {
                reduce_page(
                    &mut rotation_state.borrow_mut(),
                    PageAction::AdvanceFact {
                        fact_count: LOADING_FACTS.len(),
                    },
                )
                .expect("advance");
            },
            move || {
                let service = load_host.config_service();
                let outcome = futures::executor::block_on(service.load_config());
                let mut page = load_state.borrow_mut();
                let config = outcome.expect("fixed config");
                let effects = reduce_page(&mut page, PageAction::ConfigLoaded { config })
                    .expect("load");
                for effect in effects {
                    load_host.run_runtime_effect(effect);
                }
                reduce_page(&mut page, PageAction::Reveal).expect("reveal");
            },
        );

        scheduler.advance(Duration::from_secs(9));

        {
            let page = state.borrow();
            assert_eq!(page.phase, PagePhase::Revealed);
            assert_eq!(page.fact_index, 2);
            assert_eq!(page.load_error, None);
            assert_eq!(
                page.config.as_ref().map(|config| config.topic_title.as_str()),
                Some("Water")
            );
        }

        // The reveal-attach delay queued by the effect fires against the noop
        // reveal service and drains the queue.
        assert_eq!(scheduler.pending(), 1);
        scheduler.advance(REVEAL_ATTACH_DELAY);
        assert_eq!(scheduler.pending(), 0);

        host.bind_smooth_anchors();
    }
}
