//! Chart Model
//!
//! `TrendChart` holds the inputs of one chart (observations, series and
//! configuration) and turns them into a [`ChartFrame`]: either the
//! insufficient-data placeholder or the full plot geometry in logical
//! coordinates. Building a frame is pure; the same inputs always produce the
//! same frame.

use crate::data_types::{Observation, SeriesDescriptor, TrendChartConfig, ValueDomain};
use crate::layout::ChartLayout;
use crate::theme::ChartTheme;
use crate::transform::PlotTransform;
use gpui::{Hsla, Point};

pub const PLACEHOLDER_MESSAGE: &str = "Not enough data to display chart";

/// Identity of a marker: which series, which sorted position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkerId {
    pub series: usize,
    pub rank: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub position: Point<f32>,
    pub value: i64,
    pub label: &'static str,
    pub timestamp: i64,
    pub color: Hsla,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub fraction: f64,
    pub y: f32,
}

/// Polyline of one series, split wherever an observation has no value.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesLine {
    pub key: String,
    pub color: Hsla,
    pub segments: Vec<Vec<Point<f32>>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotGeometry {
    pub layout: ChartLayout,
    pub domain: ValueDomain,
    /// Timestamps in the order they are plotted.
    pub timestamps: Vec<i64>,
    pub gridlines: Vec<GridLine>,
    pub lines: Vec<SeriesLine>,
    pub markers: Vec<Marker>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Placeholder {
    pub height: f32,
    pub message: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartFrame {
    Placeholder(Placeholder),
    Plot(PlotGeometry),
}

impl ChartFrame {
    pub fn plot(&self) -> Option<&PlotGeometry> {
        match self {
            Self::Plot(geometry) => Some(geometry),
            Self::Placeholder(_) => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

#[derive(Clone, Debug, Default)]
pub struct TrendChart {
    pub observations: Vec<Observation>,
    pub series: Vec<SeriesDescriptor>,
    pub config: TrendChartConfig,
    pub theme: ChartTheme,
}

impl TrendChart {
    pub fn new(observations: Vec<Observation>, series: Vec<SeriesDescriptor>) -> Self {
        Self {
            observations,
            series,
            ..Default::default()
        }
    }

    pub fn with_config(mut self, config: TrendChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Builds the frame for the current inputs.
    pub fn frame(&self) -> ChartFrame {
        let config = self.config.sanitized();
        if self.observations.len() < 2 {
            return ChartFrame::Placeholder(Placeholder {
                height: config.placeholder_height,
                message: PLACEHOLDER_MESSAGE,
            });
        }

        let mut sorted: Vec<&Observation> = self.observations.iter().collect();
        // Stable: equal timestamps keep their input order.
        sorted.sort_by_key(|o| o.timestamp);

        // values[series][rank]
        let values: Vec<Vec<Option<i64>>> = self
            .series
            .iter()
            .map(|s| sorted.iter().map(|o| o.value(&s.key)).collect())
            .collect();

        let domain = ValueDomain::from_values(
            values.iter().flatten().flatten().copied(),
            config.domain_padding_pct,
        );
        let layout = config.layout();
        let transform = PlotTransform::new(&layout, sorted.len(), domain);

        let gridlines = config
            .grid_fractions
            .iter()
            .map(|&fraction| GridLine {
                fraction,
                y: transform.y_for_value(domain.value_at(fraction)),
            })
            .collect();

        let mut lines = Vec::with_capacity(self.series.len());
        let mut markers = Vec::new();

        for (series_idx, (descriptor, series_values)) in
            self.series.iter().zip(&values).enumerate()
        {
            let color = descriptor.resolve_color(self.theme.default_series);
            let mut segments = Vec::new();
            let mut current: Vec<Point<f32>> = Vec::new();

            for (rank, value) in series_values.iter().enumerate() {
                let Some(value) = *value else {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                    continue;
                };

                let position = transform.data_to_logical(rank, value as f64);
                current.push(position);
                markers.push(Marker {
                    id: MarkerId {
                        series: series_idx,
                        rank,
                    },
                    position,
                    value,
                    label: descriptor.label(),
                    timestamp: sorted[rank].timestamp,
                    color,
                });
            }
            if !current.is_empty() {
                segments.push(current);
            }

            lines.push(SeriesLine {
                key: descriptor.key.clone(),
                color,
                segments,
            });
        }

        tracing::debug!(
            observations = sorted.len(),
            series = self.series.len(),
            markers = markers.len(),
            domain_min = domain.min,
            domain_max = domain.max,
            "built trend chart geometry"
        );

        ChartFrame::Plot(PlotGeometry {
            layout,
            domain,
            timestamps: sorted.iter().map(|o| o.timestamp).collect(),
            gridlines,
            lines,
            markers,
        })
    }
}
