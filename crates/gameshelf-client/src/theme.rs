use serde::{Deserialize, Serialize};

use gameshelf_core::placeholder::PlaceholderStyle;

/// Client visual theme, loaded from JSON at compile time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub placeholder: PlaceholderStyle,
}

impl Theme {
    /// Load theme from embedded JSON, falling back to defaults.
    pub fn load() -> Self {
        let json = include_str!("../../../web/theme.json");
        serde_json::from_str(json).unwrap_or_default()
    }
}
