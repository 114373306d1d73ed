// TrendChartView implementation

use crate::chart::{ChartFrame, PlotGeometry, TrendChart};
use crate::data_types::{
    Observation, PointerEvent, SelectedPoint, SelectionState, SeriesDescriptor,
};
use crate::rendering::{marker_element, paint_plot, placeholder_element, tooltip_element};
use crate::transform::ViewBox;
use gpui::prelude::*;
use gpui::*;
use std::rc::Rc;

/// The GPUI view of one trend chart. Owns its own selection; two charts on
/// the same screen never share a tooltip.
pub struct TrendChartView {
    chart: TrendChart,
    selection: SelectionState,
}

impl TrendChartView {
    pub fn new(chart: TrendChart) -> Self {
        Self {
            chart,
            selection: SelectionState::default(),
        }
    }

    pub fn chart(&self) -> &TrendChart {
        &self.chart
    }

    pub fn selection(&self) -> Option<&SelectedPoint> {
        self.selection.selected()
    }

    /// Replaces the observations. Marker identities are by rank, so any
    /// selection would point at the wrong reading and is dropped.
    pub fn set_observations(&mut self, observations: Vec<Observation>, cx: &mut Context<Self>) {
        self.chart.observations = observations;
        self.selection.clear();
        cx.notify();
    }

    pub fn set_series(&mut self, series: Vec<SeriesDescriptor>, cx: &mut Context<Self>) {
        self.chart.series = series;
        self.selection.clear();
        cx.notify();
    }

    pub fn handle_pointer(&mut self, event: PointerEvent, cx: &mut Context<Self>) {
        if self.selection.apply(event) {
            cx.notify();
        }
    }

    fn render_plot(&self, geometry: PlotGeometry, cx: &mut Context<Self>) -> Stateful<Div> {
        let config = self.chart.config.sanitized().into_owned();
        let theme = self.chart.theme.clone();
        let view_box = ViewBox::new(&geometry.layout);
        let entity_id = cx.entity_id();
        let geometry = Rc::new(geometry);
        let zone = config.time_zone;

        let mut root = div()
            .id(("trend-chart", entity_id))
            .relative()
            .w_full()
            .h(px(config.height))
            .bg(theme.background)
            .on_hover(cx.listener(|this, hovered: &bool, _, cx| {
                if !*hovered {
                    this.handle_pointer(PointerEvent::Leave, cx);
                }
            }))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _: &MouseDownEvent, _, cx| {
                    this.handle_pointer(PointerEvent::BackgroundClick, cx);
                }),
            )
            .child({
                let geometry = geometry.clone();
                let config = config.clone();
                let theme = theme.clone();
                canvas(
                    |_, _, _| {},
                    move |bounds, (), window, _| {
                        paint_plot(window, bounds, &geometry, &config, &theme);
                    },
                )
                .size_full()
                .absolute()
            });

        for (index, marker) in geometry.markers.iter().enumerate() {
            let el = marker_element(index, marker, &view_box, &config, &theme)
                .on_hover({
                    let marker = marker.clone();
                    cx.listener(move |this, hovered: &bool, _, cx| {
                        if *hovered {
                            let point = SelectedPoint::from_marker(&marker, zone);
                            this.handle_pointer(PointerEvent::Enter(point), cx);
                        }
                    })
                })
                .on_mouse_down(MouseButton::Left, {
                    let marker = marker.clone();
                    cx.listener(move |this, _: &MouseDownEvent, _, cx| {
                        // Keep the container's background-click clear from running.
                        cx.stop_propagation();
                        let point = SelectedPoint::from_marker(&marker, zone);
                        this.handle_pointer(PointerEvent::Click(point), cx);
                    })
                });
            root = root.child(el);
        }

        // Last child, so nothing occludes it.
        if let Some(selected) = self.selection.selected() {
            root = root.child(tooltip_element(selected, &view_box, &config, &theme));
        }

        root
    }
}

impl Render for TrendChartView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        match self.chart.frame() {
            ChartFrame::Placeholder(placeholder) => {
                placeholder_element(&placeholder, &self.chart.theme)
            }
            ChartFrame::Plot(geometry) => self.render_plot(geometry, cx).into_any_element(),
        }
    }
}
