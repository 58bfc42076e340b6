//! Reducer actions, side-effect intents, and phase transitions for the page
//! runtime.

use content_contract::SiteConfig;
use thiserror::Error;

/// One-way page lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePhase {
    /// Loading surface visible, facts rotating.
    Loading,
    /// Main content surface visible; terminal, no re-entry.
    Revealed,
}

/// Reactive page state owned by the runtime provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    /// Current lifecycle phase.
    pub phase: PagePhase,
    /// Cursor into the loading fact list.
    pub fact_index: usize,
    /// Fetched configuration; write-once on load success.
    pub config: Option<SiteConfig>,
    /// User-facing load failure message replacing the grid content.
    pub load_error: Option<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            phase: PagePhase::Loading,
            fact_index: 0,
            config: None,
            load_error: None,
        }
    }
}

/// Actions accepted by [`reduce_page`] to mutate [`PageState`].
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    /// Advance the loading-fact cursor, wrapping at `fact_count`.
    AdvanceFact {
        /// Number of facts in the rotation.
        fact_count: usize,
    },
    /// Store the fetched configuration and trigger rendering.
    ConfigLoaded {
        /// Parsed configuration document.
        config: SiteConfig,
    },
    /// Record a terminal configuration load failure.
    ConfigFailed {
        /// User-facing message shown in place of the grid.
        message: String,
    },
    /// Transition from the loading surface to the revealed page.
    Reveal,
}

/// Side-effect intents emitted by the reducer and executed by the host context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEffect {
    /// Attach intersection-based reveal animations to the rendered grid cards.
    AttachRevealAnimations,
}

/// Errors surfaced by [`reduce_page`] for invalid transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageReducerError {
    /// `Reveal` was dispatched after the page had already been revealed.
    #[error("page already revealed")]
    AlreadyRevealed,
}

/// Applies `action` to `state`, returning the side-effect intents to execute.
pub fn reduce_page(
    state: &mut PageState,
    action: PageAction,
) -> Result<Vec<RuntimeEffect>, PageReducerError> {
    let mut effects = Vec::new();

    match action {
        PageAction::AdvanceFact { fact_count } => {
            if fact_count > 0 {
                state.fact_index = (state.fact_index + 1) % fact_count;
            }
        }
        PageAction::ConfigLoaded { config } => {
            state.load_error = None;
            state.config = Some(config);
            effects.push(RuntimeEffect::AttachRevealAnimations);
        }
        PageAction::ConfigFailed { message } => {
            state.config = None;
            state.load_error = Some(message);
        }
        PageAction::Reveal => {
            if state.phase == PagePhase::Revealed {
                return Err(PageReducerError::AlreadyRevealed);
            }
            state.phase = PagePhase::Revealed;
        }
    }

    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn advance_fact_wraps_at_the_fact_count() {
        let mut state = PageState::default();

        for expected in [1, 2, 0, 1] {
            let effects = reduce_page(&mut state, PageAction::AdvanceFact { fact_count: 3 })
                .expect("advance");
            assert!(effects.is_empty());
            assert_eq!(state.fact_index, expected);
        }
    }

    #[test]
    fn advance_fact_with_empty_list_is_a_no_op() {
        let mut state = PageState::default();

        reduce_page(&mut state, PageAction::AdvanceFact { fact_count: 0 }).expect("advance");

        assert_eq!(state.fact_index, 0);
    }

    #[test]
    fn config_loaded_stores_the_document_and_requests_reveal_animations() {
        let mut state = PageState::default();
        let config = SiteConfig {
            topic_title: "Water".to_string(),
            ..SiteConfig::default()
        };

        let effects = reduce_page(
            &mut state,
            PageAction::ConfigLoaded {
                config: config.clone(),
            },
        )
        .expect("load");

        assert_eq!(effects, vec![RuntimeEffect::AttachRevealAnimations]);
        assert_eq!(state.config, Some(config));
        assert_eq!(state.load_error, None);
    }

    #[test]
    fn config_failure_replaces_any_loaded_document() {
        let mut state = PageState::default();
        reduce_page(
            &mut state,
            PageAction::ConfigLoaded {
                config: SiteConfig::default(),
            },
        )
        .expect("load");

        let effects = reduce_page(
            &mut state,
            PageAction::ConfigFailed {
                message: "failed".to_string(),
            },
        )
        .expect("fail");

        assert!(effects.is_empty());
        assert_eq!(state.config, None);
        assert_eq!(state.load_error.as_deref(), Some("failed"));
    }

    #[test]
    fn reveal_is_one_way() {
        let mut state = PageState::default();

        reduce_page(&mut state, PageAction::Reveal).expect("first reveal");
        assert_eq!(state.phase, PagePhase::Revealed);

        assert_eq!(
            reduce_page(&mut state, PageAction::Reveal),
            Err(PageReducerError::AlreadyRevealed)
        );
        assert_eq!(state.phase, PagePhase::Revealed);
    }

    #[test]
    fn reveal_proceeds_after_a_load_failure() {
        let mut state = PageState::default();
        reduce_page(
            &mut state,
            PageAction::ConfigFailed {
                message: "failed".to_string(),
            },
        )
        .expect("fail");

        reduce_page(&mut state, PageAction::Reveal).expect("reveal");

        assert_eq!(state.phase, PagePhase::Revealed);
        assert!(state.load_error.is_some());
    }
}
