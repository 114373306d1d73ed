//! pulse_trends: interactive health trend charts for GPUI

pub mod board;
pub mod chart;
pub mod chart_view;
pub mod data_types;
pub mod layout;
pub mod plot_types;
pub mod records;
pub mod rendering;
pub mod scales;
pub mod theme;
pub mod transform;
pub mod utils;

pub use board::{HistoryView, TrendBoard};
pub use chart::{ChartFrame, Marker, MarkerId, PlotGeometry, TrendChart};
pub use chart_view::TrendChartView;
pub use data_types::{
    FieldValue, Observation, PointerEvent, SelectedPoint, SelectionState, SeriesDescriptor,
    TrendChartConfig, ValueDomain,
};
pub use records::{HealthRecord, RecordType, TrendPanel};
