// Plot types module

pub mod grid;
pub mod line;

pub use grid::GridPlot;
pub use line::LinePlot;

use crate::transform::ViewBox;
use gpui::*;

/// Something that paints itself from logical geometry into element bounds.
pub trait PlotRenderer {
    fn render(&self, window: &mut Window, view_box: &ViewBox, bounds: Bounds<Pixels>);
}
