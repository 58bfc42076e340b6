//! Typed configuration contract and pure view-plan mapping for the content page.
//!
//! The configuration document is fetched once per page load and threaded through the
//! runtime as an immutable value. This crate owns its serde model plus the pure
//! `SiteConfig -> PagePlan` mapping; committing a plan to the live document is the
//! runtime's job, which keeps every rendering rule unit-testable without a DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod model;
pub mod plan;

pub use model::{GridPart, SiteConfig, DEFAULT_TITLE_COLOR};
pub use plan::{
    build_page_plan, led_color_at, led_step_interval, led_title_style, CitationPlan, CitationsPlan,
    GridCardPlan, ImagePlan, PagePlan, TitleStyle, CARD_REVEAL_STAGGER_MS,
    CITATION_REVEAL_STAGGER_MS, LED_CYCLE_MS,
};
