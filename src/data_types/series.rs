use crate::data_types::hex_color;
use gpui::Hsla;
use serde::{Deserialize, Serialize};

/// One line of a chart: the observation field it reads and its color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub key: String,
    /// `#rrggbb`
    pub color: String,
}

impl SeriesDescriptor {
    pub fn new(key: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            color: color.into(),
        }
    }

    pub fn label(&self) -> &'static str {
        series_label(&self.key)
    }

    /// Parsed color, or `fallback` when the hex string is malformed.
    pub fn resolve_color(&self, fallback: Hsla) -> Hsla {
        match hex_color::parse_hex_str(&self.color) {
            Ok(color) => color,
            Err(err) => {
                tracing::warn!(key = %self.key, "unusable series color: {err:#}");
                fallback
            }
        }
    }
}

/// Short tooltip label for a series key.
pub fn series_label(key: &str) -> &'static str {
    match key {
        "systolic" => "Sys",
        "diastolic" => "Dia",
        _ => "Val",
    }
}
