//! Logical coordinate system of a trend chart.
//!
//! Everything the chart computes lives in a fixed `width × height` box with
//! uniform padding on all four sides. The box is stretched onto the real
//! element bounds only at paint time, see [`crate::transform::ViewBox`].

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
}

impl ChartLayout {
    pub fn new(width: f32, height: f32, padding: f32) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    pub fn left(&self) -> f32 {
        self.padding
    }

    pub fn right(&self) -> f32 {
        self.width - self.padding
    }

    pub fn top(&self) -> f32 {
        self.padding
    }

    pub fn bottom(&self) -> f32 {
        self.height - self.padding
    }
}
