use super::PlotRenderer;
use crate::chart::SeriesLine;
use crate::transform::ViewBox;
use gpui::*;

/// Stroked polyline of one series.
pub struct LinePlot<'a> {
    pub line: &'a SeriesLine,
    pub line_width: f32,
}

impl<'a> LinePlot<'a> {
    pub fn new(line: &'a SeriesLine, line_width: f32) -> Self {
        Self { line, line_width }
    }
}

impl PlotRenderer for LinePlot<'_> {
    fn render(&self, window: &mut Window, view_box: &ViewBox, bounds: Bounds<Pixels>) {
        let mut builder = PathBuilder::stroke(px(self.line_width));
        let mut has_points = false;

        // Each segment starts with a fresh move_to so gaps stay open.
        for segment in &self.line.segments {
            if segment.len() < 2 {
                continue;
            }
            let mut points = segment.iter().map(|p| view_box.to_screen(*p, bounds));
            if let Some(first) = points.next() {
                builder.move_to(first);
                for point in points {
                    builder.line_to(point);
                }
                has_points = true;
            }
        }

        if !has_points {
            return;
        }
        if let Ok(path) = builder.build() {
            window.paint_path(path, self.line.color);
        }
    }
}
