//! Serde model for the fetched configuration document.
//!
//! Field renames follow the document's original key spelling. Every field carries a
//! default so a sparse or partially malformed document degrades to empty content
//! instead of a parse error; only structurally invalid JSON is rejected.

use serde::{Deserialize, Serialize};

/// Fallback title color applied when a card requests neither LED styling nor a
/// literal color.
pub const DEFAULT_TITLE_COLOR: &str = "#ffffff";

/// Root configuration document driving all page content.
///
/// Loaded once per page load and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page headline.
    #[serde(rename = "TopicTitle")]
    pub topic_title: String,
    /// Introductory paragraph under the headline.
    #[serde(rename = "TopicDescription")]
    pub topic_description: String,
    /// Topic cards, rendered independently and in order.
    #[serde(rename = "GridParts")]
    pub grid_parts: Vec<GridPart>,
    /// Source citations; an empty list hides the citations section entirely.
    #[serde(rename = "Citations")]
    pub citations: Vec<String>,
    /// Shared color list cycled by LED-styled card titles.
    #[serde(rename = "ledTextColors")]
    pub led_text_colors: Vec<String>,
}

/// One card-like content unit. No identity beyond its position in `GridParts`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridPart {
    /// Card title.
    #[serde(rename = "GridPartTitle")]
    pub title: String,
    /// Card body text.
    #[serde(rename = "GridPartDescription")]
    pub description: String,
    /// Bullet entries; `null` and empty entries are skipped silently.
    #[serde(rename = "GridPartBulletin")]
    pub bulletin: Vec<Option<String>>,
    /// Optional illustration URL, loaded lazily.
    #[serde(rename = "GridPartImageLink")]
    pub image_link: Option<String>,
    /// Requests LED color-cycling title styling.
    #[serde(rename = "LedText")]
    pub led_text: bool,
    /// Literal title color; ignored when `led_text` is set.
    #[serde(rename = "TextColor")]
    pub text_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn full_document_deserializes_with_original_key_spelling() {
        let config: SiteConfig = serde_json::from_str(
            r#"{
                "TopicTitle": "Water Depletion",
                "TopicDescription": "How Illinois draws down its water.",
                "GridParts": [
                    {
                        "GridPartTitle": "Lake Michigan",
                        "GridPartDescription": "Primary drinking water source.",
                        "GridPartBulletin": ["7 million residents served", null, ""],
                        "GridPartImageLink": "assets/lake.jpg",
                        "LedText": true
                    }
                ],
                "Citations": ["Illinois EPA, 2024"],
                "ledTextColors": ["red", "green", "blue"]
            }"#,
        )
        .expect("full document");

        assert_eq!(config.topic_title, "Water Depletion");
        assert_eq!(config.grid_parts.len(), 1);
        assert_eq!(config.grid_parts[0].bulletin.len(), 3);
        assert_eq!(
            config.grid_parts[0].image_link.as_deref(),
            Some("assets/lake.jpg")
        );
        assert!(config.grid_parts[0].led_text);
        assert_eq!(config.led_text_colors, vec!["red", "green", "blue"]);
    }

    #[test]
    fn missing_optional_fields_default_to_empty_content() {
        let config: SiteConfig = serde_json::from_str(r#"{"TopicTitle": "Sparse"}"#)
            .expect("sparse document");

        assert_eq!(config.topic_title, "Sparse");
        assert_eq!(config.topic_description, "");
        assert!(config.grid_parts.is_empty());
        assert!(config.citations.is_empty());
        assert!(config.led_text_colors.is_empty());
    }

    #[test]
    fn sparse_grid_part_defaults_every_optional_field() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"GridParts": [{"GridPartTitle": "Bare"}]}"#)
                .expect("bare grid part");

        let part = &config.grid_parts[0];
        assert_eq!(part.title, "Bare");
        assert!(part.bulletin.is_empty());
        assert_eq!(part.image_link, None);
        assert!(!part.led_text);
        assert_eq!(part.text_color, None);
    }
}
