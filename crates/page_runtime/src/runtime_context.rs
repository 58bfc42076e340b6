//! Runtime provider and context wiring for the page shell.
//!
//! This module owns the reducer container, the runtime effect queue, and the
//! loading-sequence bootstrap. UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    host::PageHostContext,
    reducer::{reduce_page, PageAction, PageState, RuntimeEffect},
    sequencer::{self, LoadingTiming},
};

#[derive(Clone, Copy)]
/// Leptos context for reading page state and dispatching [`PageAction`] values.
pub struct PageRuntimeContext {
    /// Host service bundle for side effects and the configuration fetch.
    pub host: StoredValue<PageHostContext>,
    /// Reactive page state signal.
    pub state: RwSignal<PageState>,
    /// Queue of runtime effects emitted by the reducer.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<PageAction>,
}

fn install_effect_executor(runtime: PageRuntimeContext) {
    // Clear the queue before draining so nested dispatches enqueue a fresh
    // batch instead of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            runtime.host.get_value().run_runtime_effect(effect);
        }
    });
}

fn install_loading_orchestration(runtime: PageRuntimeContext, timing: LoadingTiming) {
    let scheduler = runtime.host.get_value().scheduler();
    let dispatch = runtime.dispatch;
    let host = runtime.host;

    sequencer::install_loading_sequence(
        &scheduler,
        timing,
        move || {
            dispatch.call(PageAction::AdvanceFact {
                fact_count: sequencer::LOADING_FACTS.len(),
            })
        },
        move || host.get_value().load_config(dispatch),
    );

    runtime.host.get_value().bind_smooth_anchors();
}

#[component]
/// Provides [`PageRuntimeContext`] to descendant components and starts the
/// loading sequence.
pub fn PageProvider(
    /// Injected browser host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(PageHostContext::new(host_services));
    let state = create_rw_signal(PageState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: PageAction| {
        let mut page = state.get_untracked();
        let previous = page.clone();

        match reduce_page(&mut page, action) {
            Ok(new_effects) => {
                if page != previous {
                    state.set(page);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("page reducer error: {err}"),
        }
    });

    let runtime = PageRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);

    install_effect_executor(runtime);
    install_loading_orchestration(runtime, LoadingTiming::default());

    children().into_view()
}

/// Returns the current [`PageRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`PageProvider`].
pub fn use_page_runtime() -> PageRuntimeContext {
    use_context::<PageRuntimeContext>().expect("PageRuntimeContext not provided")
}
