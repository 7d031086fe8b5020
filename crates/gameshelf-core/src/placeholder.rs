use serde::{Deserialize, Serialize};

/// Visual parameters for the generated fallback image.
///
/// Colors are CSS color strings so a theme file can override them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderStyle {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub text_color: String,
    pub font_size: u32,
}

impl Default for PlaceholderStyle {
    fn default() -> Self {
        Self {
            width: 320,
            height: 180,
            background: "#1a1a2e".to_string(),
            text_color: "#e5e5e5".to_string(),
            font_size: 20,
        }
    }
}

/// Build the fallback image for a card: a labeled rectangle rendered as an
/// inline SVG `data:` URI. Used both when a record has no thumbnail and when
/// its thumbnail fails to load.
pub fn placeholder_data_uri(label: &str, style: &PlaceholderStyle) -> String {
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" "#,
            r#"viewBox="0 0 {w} {h}">"#,
            r#"<rect width="{w}" height="{h}" fill="{bg}"/>"#,
            r#"<text x="50%" y="50%" fill="{fg}" font-family="sans-serif" "#,
            r#"font-size="{fs}" text-anchor="middle" dominant-baseline="middle">{label}</text>"#,
            r#"</svg>"#
        ),
        w = style.width,
        h = style.height,
        bg = escape_xml(&style.background),
        fg = escape_xml(&style.text_color),
        fs = style.font_size,
        label = escape_xml(label),
    );
    format!("data:image/svg+xml;charset=utf-8,{}", urlencoding::encode(&svg))
}

/// Escape text for embedding in SVG markup.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
