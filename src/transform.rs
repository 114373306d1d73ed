//! Coordinate projection: data -> logical box -> screen.

use crate::data_types::ValueDomain;
use crate::layout::ChartLayout;
use crate::scales::ChartScale;
use crate::utils::PixelsExt;
use gpui::*;

/// Maps (rank, value) pairs into the logical box. Horizontal placement is by
/// rank in the sorted observations, not by elapsed time.
#[derive(Clone)]
pub struct PlotTransform {
    pub x_scale: ChartScale,
    pub y_scale: ChartScale,
}

impl PlotTransform {
    pub fn new(layout: &ChartLayout, count: usize, domain: ValueDomain) -> Self {
        let last_rank = count.saturating_sub(1) as f64;
        Self {
            x_scale: ChartScale::new_linear((0.0, last_rank), (layout.left(), layout.right())),
            // Inverted: larger values sit higher.
            y_scale: ChartScale::new_linear(
                (domain.min, domain.max),
                (layout.bottom(), layout.top()),
            ),
        }
    }

    pub fn x_for_rank(&self, rank: usize) -> f32 {
        self.x_scale.map(rank as f64)
    }

    pub fn y_for_value(&self, value: f64) -> f32 {
        self.y_scale.map(value)
    }

    pub fn data_to_logical(&self, rank: usize, value: f64) -> Point<f32> {
        Point::new(self.x_for_rank(rank), self.y_for_value(value))
    }
}

/// Stretches the logical box onto element bounds, each axis on its own
/// (no aspect ratio is preserved). Only positions scale; stroke widths and
/// radii are applied in screen pixels by the painters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub width: f32,
    pub height: f32,
}

impl ViewBox {
    pub fn new(layout: &ChartLayout) -> Self {
        Self {
            width: layout.width,
            height: layout.height,
        }
    }

    /// Position of `point` as fractions of the box, used for percentage layout.
    pub fn fraction(&self, point: Point<f32>) -> Point<f32> {
        Point::new(point.x / self.width, point.y / self.height)
    }

    pub fn to_screen(&self, point: Point<f32>, bounds: Bounds<Pixels>) -> Point<Pixels> {
        let f = self.fraction(point);
        Point::new(
            bounds.origin.x + px(f.x * bounds.size.width.as_f32()),
            bounds.origin.y + px(f.y * bounds.size.height.as_f32()),
        )
    }
}
