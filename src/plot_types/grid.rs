use super::PlotRenderer;
use crate::chart::GridLine;
use crate::layout::ChartLayout;
use crate::transform::ViewBox;
use gpui::*;

/// Horizontal gridlines across the drawable width.
pub struct GridPlot<'a> {
    pub lines: &'a [GridLine],
    pub layout: ChartLayout,
    pub color: Hsla,
    pub line_width: f32,
}

impl PlotRenderer for GridPlot<'_> {
    fn render(&self, window: &mut Window, view_box: &ViewBox, bounds: Bounds<Pixels>) {
        if self.lines.is_empty() {
            return;
        }

        let mut builder = PathBuilder::stroke(px(self.line_width));
        for line in self.lines {
            let start = view_box.to_screen(Point::new(self.layout.left(), line.y), bounds);
            let end = view_box.to_screen(Point::new(self.layout.right(), line.y), bounds);
            builder.move_to(start);
            builder.line_to(end);
        }
        if let Ok(path) = builder.build() {
            window.paint_path(path, self.color);
        }
    }
}
