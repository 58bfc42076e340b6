//! Page shell UI composition: loading surface, content surfaces, cursor glow.
//!
//! Components are the commit step for plans built by `content_contract`: every
//! rendering rule lives in the plan, and the views here only translate a plan
//! into nodes. Re-rendering replaces the committed subtree wholesale, so a
//! rebuilt plan never duplicates content.

mod citations;
mod cursor;
mod grid;
mod loading;

use content_contract::{build_page_plan, PagePlan};
use leptos::*;

use crate::{
    reducer::{PagePhase, PageState},
    runtime_context::use_page_runtime,
};

use self::{
    citations::CitationsSection, cursor::CursorGlow, grid::ContentGrid, loading::LoadingScreen,
};

pub use crate::runtime_context::{PageProvider, PageRuntimeContext};

/// Top-level page shell: cursor glow, loading surface, and the revealed
/// content surface.
#[component]
pub fn PageShell() -> impl IntoView {
    let runtime = use_page_runtime();
    let state = runtime.state;

    let revealed = move || state.get().phase == PagePhase::Revealed;
    let (plan, load_error) = grid_inputs(state);

    view! {
        <CursorGlow />

        <div class="loading-screen" class:hidden=revealed>
            <LoadingScreen />
        </div>

        <main class="main-content" class:visible=revealed>
            <header class="topic-header">
                <h1 class="topic-title">
                    {move || plan.get().map(|plan| plan.topic_title).unwrap_or_default()}
                </h1>
                <p class="topic-description">
                    {move || plan.get().map(|plan| plan.topic_description).unwrap_or_default()}
                </p>
            </header>

            {move || render_grid_section(plan.get(), load_error.get())}

            {move || {
                plan.get()
                    .map(|plan| view! { <CitationsSection plan=plan.citations /> })
            }}
        </main>
    }
}

/// Memoized grid inputs. The committed grid subtree tracks only these, so
/// phase and fact-cursor changes never rebuild it; a rebuilt grid would attach
/// a fresh LED cycler per title and orphan the previous one.
fn grid_inputs(state: RwSignal<PageState>) -> (Memo<Option<PagePlan>>, Memo<Option<String>>) {
    (
        create_memo(move |_| state.get().config.as_ref().map(build_page_plan)),
        create_memo(move |_| state.get().load_error.clone()),
    )
}

/// Commits the grid area: the error block wins over any stale plan, matching
/// the terminal-failure contract of the config load.
fn render_grid_section(plan: Option<PagePlan>, load_error: Option<String>) -> View {
    if let Some(message) = load_error {
        return view! { <ErrorBlock message /> }.into_view();
    }
    match plan {
        Some(plan) => view! { <ContentGrid plan /> }.into_view(),
        None => ().into_view(),
    }
}

#[component]
fn ErrorBlock(message: String) -> impl IntoView {
    view! {
        <div class="error-message">
            <h3>"Error"</h3>
            <p>{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use content_contract::SiteConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn grid_inputs_ignore_phase_and_fact_cursor_changes() {
        let runtime = create_runtime();
        let state = create_rw_signal(PageState::default());
        let (plan, load_error) = grid_inputs(state);

        let commits = Rc::new(Cell::new(0));
        let observed = commits.clone();
        create_effect(move |_| {
            let _ = (plan.get(), load_error.get());
            observed.set(observed.get() + 1);
        });
        assert_eq!(commits.get(), 1);

        state.update(|state| state.phase = PagePhase::Revealed);
        state.update(|state| state.fact_index = 3);
        assert_eq!(commits.get(), 1);

        state.update(|state| state.config = Some(SiteConfig::default()));
        assert_eq!(commits.get(), 2);

        state.update(|state| state.load_error = Some("failed".to_string()));
        assert_eq!(commits.get(), 3);

        runtime.dispose();
    }
}
