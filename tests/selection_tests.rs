use chrono_tz::Tz;
use pulse_trends::chart::Marker;
use pulse_trends::utils::date_formatter::{format_timestamp, DateStyle};
use pulse_trends::{
    Observation, PointerEvent, SelectedPoint, SelectionState, SeriesDescriptor, TrendChart,
};

// 2024-01-15 09:30 UTC
const MORNING: i64 = 1_705_311_000_000;
const HOUR: i64 = 3_600_000;

fn markers() -> Vec<Marker> {
    let observations = vec![
        Observation::new(MORNING)
            .with_field("systolic", "120")
            .with_field("diastolic", "80"),
        Observation::new(MORNING + 10 * HOUR)
            .with_field("systolic", "135")
            .with_field("diastolic", "88"),
    ];
    let series = vec![
        SeriesDescriptor::new("systolic", "#f43f5e"),
        SeriesDescriptor::new("diastolic", "#fb7185"),
    ];
    let frame = TrendChart::new(observations, series).frame();
    frame.plot().unwrap().markers.clone()
}

fn point(marker: &Marker) -> SelectedPoint {
    SelectedPoint::from_marker(marker, Some(Tz::UTC))
}

#[test]
fn test_selected_point_contents() {
    let markers = markers();
    let sys = point(&markers[0]);
    assert_eq!(sys.value, 120);
    assert_eq!(sys.label, "Sys");
    assert_eq!(sys.date, "1/15/2024 09:30 AM");
    assert_eq!(sys.position, markers[0].position);

    let dia = point(&markers[3]);
    assert_eq!(dia.value, 88);
    assert_eq!(dia.label, "Dia");
    assert_eq!(dia.date, "1/15/2024 07:30 PM");
}

#[test]
fn test_hover_then_leave_clears() {
    let markers = markers();
    let mut state = SelectionState::default();

    assert!(state.apply(PointerEvent::Enter(point(&markers[0]))));
    assert_eq!(state.selected().map(|p| p.value), Some(120));

    assert!(state.apply(PointerEvent::Leave));
    assert!(state.selected().is_none());

    // Leaving again changes nothing.
    assert!(!state.apply(PointerEvent::Leave));
}

#[test]
fn test_new_selection_replaces_old() {
    let markers = markers();
    let mut state = SelectionState::default();

    state.apply(PointerEvent::Enter(point(&markers[0])));
    state.apply(PointerEvent::Click(point(&markers[2])));

    let selected = state.selected().unwrap();
    assert_eq!(selected.marker, markers[2].id);
    assert_eq!(selected.value, 80);
}

#[test]
fn test_reentering_same_marker_is_not_a_change() {
    let markers = markers();
    let mut state = SelectionState::default();

    assert!(state.apply(PointerEvent::Enter(point(&markers[1]))));
    assert!(!state.apply(PointerEvent::Click(point(&markers[1]))));
}

#[test]
fn test_background_click_clears() {
    let markers = markers();
    let mut state = SelectionState::default();

    state.apply(PointerEvent::Click(point(&markers[1])));
    assert!(state.apply(PointerEvent::BackgroundClick));
    assert!(state.selected().is_none());
}

#[test]
fn test_date_styles() {
    assert_eq!(
        format_timestamp(MORNING, DateStyle::Tooltip, Some(Tz::UTC)),
        "1/15/2024 09:30 AM"
    );
    assert_eq!(
        format_timestamp(MORNING, DateStyle::Compact, Some(Tz::UTC)),
        "Jan 15, 09:30 AM"
    );
    assert_eq!(
        format_timestamp(MORNING, DateStyle::Tooltip, Some(Tz::America__New_York)),
        "1/15/2024 04:30 AM"
    );
    assert_eq!(
        format_timestamp(i64::MAX, DateStyle::Tooltip, Some(Tz::UTC)),
        i64::MAX.to_string()
    );
}
