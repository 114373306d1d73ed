// Rendering functions for the trend chart

use crate::chart::{Marker, Placeholder, PlotGeometry};
use crate::data_types::{SelectedPoint, TrendChartConfig};
use crate::plot_types::{GridPlot, LinePlot, PlotRenderer};
use crate::theme::ChartTheme;
use crate::transform::ViewBox;
use gpui::prelude::*;
use gpui::*;

const MARKER_GROUP: &str = "trend-marker";
const TOOLTIP_WIDTH: f32 = 140.0;
const TOOLTIP_HEIGHT: f32 = 50.0;

/// Paints gridlines, then one polyline per series on top.
pub fn paint_plot(
    window: &mut Window,
    bounds: Bounds<Pixels>,
    geometry: &PlotGeometry,
    config: &TrendChartConfig,
    theme: &ChartTheme,
) {
    let view_box = ViewBox::new(&geometry.layout);

    GridPlot {
        lines: &geometry.gridlines,
        layout: geometry.layout,
        color: theme.grid_line,
        line_width: config.grid_line_width,
    }
    .render(window, &view_box, bounds);

    for line in &geometry.lines {
        LinePlot::new(line, config.line_width).render(window, &view_box, bounds);
    }
}

/// Interactive marker: a transparent hit zone centred on the point with the
/// visible dot inside. Positioned by fraction of the element so it follows
/// the stretched plot while keeping its pixel size.
pub fn marker_element(
    index: usize,
    marker: &Marker,
    view_box: &ViewBox,
    config: &TrendChartConfig,
    theme: &ChartTheme,
) -> Stateful<Div> {
    let f = view_box.fraction(marker.position);
    let hover_size = px(config.marker_hover_radius * 2.0);

    div()
        .id(("trend-marker", index))
        .group(MARKER_GROUP)
        .absolute()
        .left(DefiniteLength::Fraction(f.x))
        .top(DefiniteLength::Fraction(f.y))
        .ml(px(-config.hit_radius))
        .mt(px(-config.hit_radius))
        .size(px(config.hit_radius * 2.0))
        .rounded_full()
        .flex()
        .items_center()
        .justify_center()
        .cursor_pointer()
        .child(
            div()
                .size(px(config.marker_radius * 2.0))
                .rounded_full()
                .bg(theme.marker_fill)
                .border_2()
                .border_color(marker.color)
                .group_hover(MARKER_GROUP, move |s| s.size(hover_size)),
        )
}

/// Tooltip box with a downward arrow, anchored above the selected marker.
/// Has no listeners, so it never takes pointer events.
pub fn tooltip_element(
    selected: &SelectedPoint,
    view_box: &ViewBox,
    config: &TrendChartConfig,
    theme: &ChartTheme,
) -> AnyElement {
    let f = view_box.fraction(selected.position);
    let box_bottom = -config.tooltip_offset + 5.0;

    div()
        .absolute()
        .left(DefiniteLength::Fraction(f.x))
        .top(DefiniteLength::Fraction(f.y))
        .child(
            div()
                .absolute()
                .left(px(-TOOLTIP_WIDTH / 2.0))
                .top(px(box_bottom - TOOLTIP_HEIGHT))
                .w(px(TOOLTIP_WIDTH))
                .h(px(TOOLTIP_HEIGHT))
                .rounded(px(8.0))
                .bg(theme.tooltip_background)
                .shadow_md()
                .flex()
                .flex_col()
                .items_center()
                .justify_center()
                .child(
                    div()
                        .text_size(px(10.0))
                        .text_color(theme.tooltip_date_text)
                        .child(selected.date.clone()),
                )
                .child(
                    div()
                        .flex()
                        .items_end()
                        .gap_1()
                        .child(
                            div()
                                .text_size(px(16.0))
                                .font_weight(FontWeight::BOLD)
                                .text_color(theme.tooltip_value_text)
                                .child(selected.value.to_string()),
                        )
                        .child(
                            div()
                                .text_size(px(10.0))
                                .text_color(theme.tooltip_label_text)
                                .child(selected.label),
                        ),
                ),
        )
        .child(
            div()
                .absolute()
                .left(px(-6.0))
                .top(px(box_bottom - 4.0))
                .w(px(12.0))
                .text_size(px(12.0))
                .text_color(theme.tooltip_background)
                .child("▼"),
        )
        .into_any_element()
}

pub fn placeholder_element(placeholder: &Placeholder, theme: &ChartTheme) -> AnyElement {
    div()
        .w_full()
        .h(px(placeholder.height))
        .flex()
        .items_center()
        .justify_center()
        .rounded_lg()
        .bg(theme.placeholder_background)
        .text_color(theme.placeholder_text)
        .child(placeholder.message)
        .into_any_element()
}
