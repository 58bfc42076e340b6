//! Page runtime: reducer, loading sequencer, and shell components for the
//! config-driven content page.

pub mod components;
pub mod host;
pub mod reducer;
pub mod runtime_context;
pub mod sequencer;

pub use components::PageShell;
pub use host::PageHostContext;
pub use reducer::{
    reduce_page, PageAction, PagePhase, PageReducerError, PageState, RuntimeEffect,
};
pub use runtime_context::{use_page_runtime, PageProvider, PageRuntimeContext};
pub use sequencer::{install_loading_sequence, LoadingTiming, LOADING_FACTS};
