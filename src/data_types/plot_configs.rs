use crate::layout::ChartLayout;
use chrono_tz::Tz;
use eyre::{ensure, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Hex string <-> Hsla
pub mod hex_color {
    use eyre::{bail, Result, WrapErr};
    use gpui::Hsla;

    /// Parses `#rrggbb` or the `#rgb` shorthand.
    pub fn parse_hex_str(hex: &str) -> Result<Hsla> {
        let digits = hex.trim().trim_start_matches('#');
        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => bail!("expected a #rrggbb color, got {hex:?}"),
        };
        let value = u32::from_str_radix(&expanded, 16)
            .wrap_err_with(|| format!("invalid hex color {hex:?}"))?;
        Ok(gpui::rgb(value).into())
    }
}

/// Geometry and formatting knobs of a trend chart. Every field has a
/// default, so a JSON document only needs the values it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendChartConfig {
    /// Logical width of the coordinate system.
    pub width: f32,
    /// Logical height of the coordinate system.
    pub height: f32,
    pub padding: f32,
    /// Fraction of the raw value range added above and below the data.
    pub domain_padding_pct: f64,
    pub grid_fractions: Vec<f64>,
    pub line_width: f32,
    pub grid_line_width: f32,
    pub marker_radius: f32,
    /// Marker radius while hovered.
    pub marker_hover_radius: f32,
    pub hit_radius: f32,
    pub tooltip_offset: f32,
    pub placeholder_height: f32,
    /// Zone used for tooltip dates; the local zone when unset.
    pub time_zone: Option<Tz>,
}

impl Default for TrendChartConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 200.0,
            padding: 20.0,
            domain_padding_pct: 0.1,
            grid_fractions: vec![0.0, 0.25, 0.5, 0.75, 1.0],
            line_width: 3.0,
            grid_line_width: 1.0,
            marker_radius: 4.0,
            marker_hover_radius: 6.0,
            hit_radius: 15.0,
            tooltip_offset: 15.0,
            placeholder_height: 192.0,
            time_zone: None,
        }
    }
}

impl TrendChartConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).wrap_err("failed to parse trend chart config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_time_zone(mut self, zone: Tz) -> Self {
        self.time_zone = Some(zone);
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.padding >= 0.0, "padding must not be negative");
        ensure!(
            self.width > self.padding * 2.0,
            "width {} leaves no drawable area with padding {}",
            self.width,
            self.padding
        );
        ensure!(
            self.height > self.padding * 2.0,
            "height {} leaves no drawable area with padding {}",
            self.height,
            self.padding
        );
        ensure!(
            self.hit_radius >= self.marker_radius,
            "hit radius must cover the visible marker"
        );
        Ok(())
    }

    /// This config if it validates, otherwise the defaults (keeping the
    /// time zone). The draw path never sees an unusable layout.
    pub fn sanitized(&self) -> Cow<'_, Self> {
        match self.validate() {
            Ok(()) => Cow::Borrowed(self),
            Err(err) => {
                tracing::warn!("invalid trend chart config, using defaults: {err:#}");
                Cow::Owned(Self {
                    time_zone: self.time_zone,
                    ..Self::default()
                })
            }
        }
    }

    pub fn layout(&self) -> ChartLayout {
        ChartLayout::new(self.width, self.height, self.padding)
    }
}
