use crate::chart::{Marker, MarkerId};
use crate::utils::date_formatter::{format_timestamp, DateStyle};
use chrono_tz::Tz;
use gpui::Point;

/// The marker currently shown in the tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedPoint {
    pub marker: MarkerId,
    /// Logical coordinates of the marker centre.
    pub position: Point<f32>,
    pub value: i64,
    pub label: &'static str,
    pub date: String,
}

impl SelectedPoint {
    pub fn from_marker(marker: &Marker, zone: Option<Tz>) -> Self {
        Self {
            marker: marker.id,
            position: marker.position,
            value: marker.value,
            label: marker.label,
            date: format_timestamp(marker.timestamp, DateStyle::Tooltip, zone),
        }
    }
}

/// Pointer input as the chart sees it.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered a marker's hit zone.
    Enter(SelectedPoint),
    /// Marker clicked or tapped.
    Click(SelectedPoint),
    /// Pointer left the whole chart area.
    Leave,
    /// Click on the chart outside any marker.
    BackgroundClick,
}

/// Selection owned by a single chart instance.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected: Option<SelectedPoint>,
}

impl SelectionState {
    pub fn selected(&self) -> Option<&SelectedPoint> {
        self.selected.as_ref()
    }

    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Applies `event` and reports whether the visible selection changed.
    pub fn apply(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Enter(point) | PointerEvent::Click(point) => {
                if self.selected.as_ref() == Some(&point) {
                    return false;
                }
                tracing::trace!(
                    series = point.marker.series,
                    rank = point.marker.rank,
                    "point selected"
                );
                self.selected = Some(point);
                true
            }
            PointerEvent::Leave | PointerEvent::BackgroundClick => {
                let changed = self.clear();
                if changed {
                    tracing::trace!("selection cleared");
                }
                changed
            }
        }
    }
}
