//! Trends board
//!
//! Downstream consumer of the chart: takes the full record list, shows it as
//! a plain history list or as one trend chart per panel.

use crate::chart::TrendChart;
use crate::chart_view::TrendChartView;
use crate::data_types::TrendChartConfig;
use crate::records::{history_records, HealthRecord, TrendPanel};
use crate::theme::ChartTheme;
use gpui::prelude::*;
use gpui::*;

pub const EMPTY_HISTORY_MESSAGE: &str = "No health records yet.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryView {
    #[default]
    Table,
    Chart,
}

struct PanelState {
    panel: TrendPanel,
    view: Entity<TrendChartView>,
}

pub struct TrendBoard {
    records: Vec<HealthRecord>,
    panels: Vec<PanelState>,
    mode: HistoryView,
    config: TrendChartConfig,
    theme: ChartTheme,
}

impl TrendBoard {
    pub fn new(panels: Vec<TrendPanel>, config: TrendChartConfig, cx: &mut Context<Self>) -> Self {
        let theme = ChartTheme::default();
        let panels = panels
            .into_iter()
            .map(|panel| {
                let panel_config = match panel.height {
                    Some(height) => config.clone().with_height(height),
                    None => config.clone(),
                };
                let chart = TrendChart::new(Vec::new(), panel.series.clone())
                    .with_config(panel_config)
                    .with_theme(theme.clone());
                let view = cx.new(|_| TrendChartView::new(chart));
                PanelState { panel, view }
            })
            .collect();

        Self {
            records: Vec::new(),
            panels,
            mode: HistoryView::default(),
            config,
            theme,
        }
    }

    pub fn mode(&self) -> HistoryView {
        self.mode
    }

    pub fn set_mode(&mut self, mode: HistoryView, cx: &mut Context<Self>) {
        if self.mode != mode {
            self.mode = mode;
            cx.notify();
        }
    }

    pub fn chart_views(&self) -> impl Iterator<Item = &Entity<TrendChartView>> {
        self.panels.iter().map(|p| &p.view)
    }

    /// Takes a fresh snapshot of the records and pushes each panel's subset
    /// into its chart.
    pub fn set_records(&mut self, records: Vec<HealthRecord>, cx: &mut Context<Self>) {
        for state in &self.panels {
            let observations = state.panel.observations(&records);
            tracing::debug!(
                panel = %state.panel.title,
                observations = observations.len(),
                "updating trend panel"
            );
            state
                .view
                .update(cx, |view, cx| view.set_observations(observations, cx));
        }
        self.records = records;
        cx.notify();
    }

    fn render_toggle(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let button = |label: &'static str, mode: HistoryView, active: bool| {
            div()
                .id(label)
                .px_3()
                .py_1()
                .rounded_lg()
                .text_sm()
                .font_weight(FontWeight::BOLD)
                .cursor_pointer()
                .when(active, |d| d.bg(gpui::white()).text_color(self.theme.accent))
                .when(!active, |d| d.text_color(self.theme.muted_text))
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(move |this, _: &MouseDownEvent, _, cx| this.set_mode(mode, cx)),
                )
                .child(label)
        };

        div()
            .flex()
            .gap_1()
            .p_1()
            .rounded_lg()
            .bg(self.theme.panel_border)
            .child(button("Table", HistoryView::Table, self.mode == HistoryView::Table))
            .child(button("Trends", HistoryView::Chart, self.mode == HistoryView::Chart))
    }

    fn render_table(&self) -> AnyElement {
        let zone = self.config.time_zone;
        div()
            .flex()
            .flex_col()
            .gap_1()
            .text_sm()
            .text_color(self.theme.title_text)
            .children(
                history_records(&self.records)
                    .into_iter()
                    .map(|r| div().child(r.history_line(zone))),
            )
            .into_any_element()
    }

    fn render_charts(&self) -> AnyElement {
        div()
            .flex()
            .flex_col()
            .gap_8()
            .children(self.panels.iter().map(|state| {
                div()
                    .p_4()
                    .rounded_2xl()
                    .bg(self.theme.panel_background)
                    .border_1()
                    .border_color(self.theme.panel_border)
                    .child(
                        div()
                            .mb_4()
                            .font_weight(FontWeight::BOLD)
                            .text_color(self.theme.title_text)
                            .child(state.panel.title.clone()),
                    )
                    .child(state.view.clone())
            }))
            .into_any_element()
    }
}

impl Render for TrendBoard {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let body = if history_records(&self.records).is_empty() {
            div()
                .p_12()
                .flex()
                .justify_center()
                .text_color(self.theme.muted_text)
                .child(EMPTY_HISTORY_MESSAGE)
                .into_any_element()
        } else {
            match self.mode {
                HistoryView::Table => self.render_table(),
                HistoryView::Chart => self.render_charts(),
            }
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_4()
            .p_6()
            .bg(gpui::white())
            .child(self.render_toggle(cx))
            .child(body)
    }
}
