//! Pure mapping from a [`SiteConfig`] to a renderable page plan.
//!
//! Building a plan touches no DOM and no clock, so the filtering, precedence, and
//! stagger rules can be asserted directly. The same config always yields the same
//! plan, which is what makes re-rendering idempotent by construction.

use std::time::Duration;

use crate::model::{GridPart, SiteConfig, DEFAULT_TITLE_COLOR};

/// Per-card reveal stagger applied by the animation layer.
pub const CARD_REVEAL_STAGGER_MS: u32 = 200;
/// Per-citation reveal stagger applied by the animation layer.
pub const CITATION_REVEAL_STAGGER_MS: u32 = 100;
/// Total LED color cycle duration, divided evenly across the color count.
pub const LED_CYCLE_MS: u64 = 4000;

/// Complete render plan for one configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    /// Page headline.
    pub topic_title: String,
    /// Introductory paragraph.
    pub topic_description: String,
    /// Layout variant hook used when exactly one card is present.
    pub single_item: bool,
    /// Card plans in input order.
    pub cards: Vec<GridCardPlan>,
    /// Citations plan; empty entries hide the whole section.
    pub citations: CitationsPlan,
}

/// Render plan for one grid card.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCardPlan {
    /// Card title text.
    pub title: String,
    /// Resolved title styling after precedence rules.
    pub title_style: TitleStyle,
    /// Card body text.
    pub description: String,
    /// Bullet entries with `null`/empty entries already filtered out.
    pub bullets: Vec<String>,
    /// Optional lazily-loaded illustration.
    pub image: Option<ImagePlan>,
    /// Index-proportional reveal delay for the animation layer.
    pub reveal_delay_ms: u32,
}

/// Resolved title styling. Precedence: LED flag, then literal color, then the
/// fixed fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum TitleStyle {
    /// LED styling; a color cycler is attached only when `colors` is non-empty.
    Led {
        /// Shared LED color list from the configuration root.
        colors: Vec<String>,
    },
    /// Literal color applied once.
    Fixed {
        /// CSS color value.
        color: String,
    },
}

/// Plan for a card illustration.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePlan {
    /// Image URL.
    pub url: String,
    /// Alternative text; mirrors the card title.
    pub alt: String,
}

/// Plan for the citations section.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CitationsPlan {
    /// Non-blank citations in input order; empty means the section stays hidden.
    pub entries: Vec<CitationPlan>,
}

/// One rendered citation line.
#[derive(Debug, Clone, PartialEq)]
pub struct CitationPlan {
    /// Citation text.
    pub text: String,
    /// Index-proportional reveal delay for the animation layer.
    pub reveal_delay_ms: u32,
}

/// Builds the full render plan for `config`.
pub fn build_page_plan(config: &SiteConfig) -> PagePlan {
    let cards = config
        .grid_parts
        .iter()
        .enumerate()
        .map(|(index, part)| build_card_plan(config, part, index))
        .collect::<Vec<_>>();

    PagePlan {
        topic_title: config.topic_title.clone(),
        topic_description: config.topic_description.clone(),
        single_item: cards.len() == 1,
        cards,
        citations: build_citations_plan(&config.citations),
    }
}

fn build_card_plan(config: &SiteConfig, part: &GridPart, index: usize) -> GridCardPlan {
    let title_style = if part.led_text {
        TitleStyle::Led {
            colors: config.led_text_colors.clone(),
        }
    } else if let Some(color) = &part.text_color {
        TitleStyle::Fixed {
            color: color.clone(),
        }
    } else {
        TitleStyle::Fixed {
            color: DEFAULT_TITLE_COLOR.to_string(),
        }
    };

    GridCardPlan {
        title: part.title.clone(),
        title_style,
        description: part.description.clone(),
        bullets: part
            .bulletin
            .iter()
            .filter_map(|entry| entry.as_deref())
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect(),
        image: part.image_link.clone().map(|url| ImagePlan {
            url,
            alt: part.title.clone(),
        }),
        reveal_delay_ms: index as u32 * CARD_REVEAL_STAGGER_MS,
    }
}

fn build_citations_plan(citations: &[String]) -> CitationsPlan {
    CitationsPlan {
        entries: citations
            .iter()
            .enumerate()
            .filter(|(_, citation)| !citation.trim().is_empty())
            .map(|(index, citation)| CitationPlan {
                text: citation.clone(),
                reveal_delay_ms: index as u32 * CITATION_REVEAL_STAGGER_MS,
            })
            .collect(),
    }
}

/// Returns the per-step interval for an LED cycler over `color_count` colors.
pub fn led_step_interval(color_count: usize) -> Duration {
    Duration::from_millis(LED_CYCLE_MS / color_count.max(1) as u64)
}

/// Returns the LED color shown at `step`, wrapping over `colors`; `None` when
/// the list is empty. Step zero is the first color, shown immediately.
pub fn led_color_at(colors: &[String], step: usize) -> Option<&str> {
    if colors.is_empty() {
        None
    } else {
        Some(colors[step % colors.len()].as_str())
    }
}

/// Returns the inline style for one LED step: the color plus its matching glow.
pub fn led_title_style(color: &str) -> String {
    format!("color:{color};text-shadow:0 0 10px {color}, 0 0 20px {color};")
}
