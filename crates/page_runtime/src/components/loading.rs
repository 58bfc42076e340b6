use leptos::*;

use crate::{runtime_context::use_page_runtime, sequencer::LOADING_FACTS};

/// Loading surface content: spinner plus the currently rotated fact.
#[component]
pub(super) fn LoadingScreen() -> impl IntoView {
    let runtime = use_page_runtime();
    let state = runtime.state;

    let fact = move || {
        LOADING_FACTS
            .get(state.get().fact_index)
            .copied()
            .unwrap_or_default()
    };

    view! {
        <div class="loading-inner">
            <div class="loading-spinner" aria-hidden="true"></div>
            <p class="fact-text">{fact}</p>
        </div>
    }
}
