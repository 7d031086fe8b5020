use serde::{Deserialize, Serialize};

/// Display title used when a record carries none.
pub const UNTITLED: &str = "Untitled";

/// Harmless anchor target used when a record carries no link.
pub const INERT_HREF: &str = "#";

/// One catalog entry describing a single game's metadata and links.
///
/// Every field is optional on the wire. An absent `tags` field deserializes
/// to the empty sequence, so the renderer and the filter index see the same
/// shape for tagless records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl GameRecord {
    /// Title to display, defaulting to "Untitled".
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }

    /// Description to display, defaulting to empty text.
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Target for the "play" action, inert when no link is supplied.
    pub fn play_href(&self) -> &str {
        self.link.as_deref().unwrap_or(INERT_HREF)
    }

    /// Target for the "source" action, inert when no repo URL is supplied.
    pub fn source_href(&self) -> &str {
        self.github_url.as_deref().unwrap_or(INERT_HREF)
    }

    /// Case-insensitive exact tag membership. `key` must already be folded
    /// to lowercase.
    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(key))
    }

    /// Folded tag list, used as queryable card metadata.
    pub fn folded_tags(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.to_lowercase()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_missing_optional_fields() {
        let json = r#"{}"#;
        let record: GameRecord = serde_json::from_str(json).unwrap();
        assert!(record.title.is_none());
        assert!(record.description.is_none());
        assert!(record.thumbnail.is_none());
        assert!(record.link.is_none());
        assert!(record.github_url.is_none());
        assert!(record.tags.is_empty());
    }

    #[test]
    fn display_defaults() {
        let record = GameRecord::default();
        assert_eq!(record.display_title(), "Untitled");
        assert_eq!(record.display_description(), "");
        assert_eq!(record.play_href(), "#");
        assert_eq!(record.source_href(), "#");
    }

    #[test]
    fn display_uses_supplied_values() {
        let json = r#"{
            "title": "Snake",
            "description": "Classic snake.",
            "link": "https://example.com/snake",
            "github_url": "https://github.com/example/snake"
        }"#;
        let record: GameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.display_title(), "Snake");
        assert_eq!(record.display_description(), "Classic snake.");
        assert_eq!(record.play_href(), "https://example.com/snake");
        assert_eq!(record.source_href(), "https://github.com/example/snake");
    }

    #[test]
    fn has_tag_folds_case_exactly() {
        let record = GameRecord {
            tags: vec!["Arcade".to_string(), "classic".to_string()],
            ..GameRecord::default()
        };
        assert!(record.has_tag("arcade"));
        assert!(record.has_tag("classic"));
        // Exact match after folding, never substring.
        assert!(!record.has_tag("arc"));
        assert!(!record.has_tag("classics"));
    }

    #[test]
    fn record_json_roundtrip() {
        let record = GameRecord {
            title: Some("Snake".to_string()),
            description: Some("Classic snake.".to_string()),
            thumbnail: Some("snake.png".to_string()),
            link: Some("https://example.com/snake".to_string()),
            github_url: Some("https://github.com/example/snake".to_string()),
            tags: vec!["arcade".to_string(), "classic".to_string()],
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: GameRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
