use gpui::{px, Bounds, Point, Size};
use pulse_trends::data_types::ValueDomain;
use pulse_trends::layout::ChartLayout;
use pulse_trends::scales::ChartScale;
use pulse_trends::transform::{PlotTransform, ViewBox};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn test_chart_scale_linear() {
    let scale = ChartScale::new_linear((0.0, 100.0), (0.0, 500.0));

    assert!(close(scale.map(0.0), 0.0));
    assert!(close(scale.map(50.0), 250.0));
    assert!(close(scale.map(100.0), 500.0));
}

#[test]
fn test_chart_scale_inverted_range() {
    let scale = ChartScale::new_linear((0.0, 10.0), (180.0, 20.0));
    assert!(close(scale.map(0.0), 180.0));
    assert!(close(scale.map(10.0), 20.0));
    assert!(close(scale.map(5.0), 100.0));
}

#[test]
fn test_rank_spacing() {
    let layout = ChartLayout::new(600.0, 200.0, 20.0);
    let transform = PlotTransform::new(&layout, 3, ValueDomain { min: 0.0, max: 100.0 });

    assert!(close(transform.x_for_rank(0), 20.0));
    // P + 0.5 * (W - 2P)
    assert!(close(transform.x_for_rank(1), 20.0 + 0.5 * 560.0));
    assert!(close(transform.x_for_rank(2), 580.0));
}

#[test]
fn test_value_mapping_is_inverted() {
    let layout = ChartLayout::new(600.0, 200.0, 20.0);
    let transform = PlotTransform::new(&layout, 2, ValueDomain { min: 40.0, max: 160.0 });

    assert!(close(transform.y_for_value(40.0), layout.bottom()));
    assert!(close(transform.y_for_value(160.0), layout.top()));
    assert!(transform.y_for_value(150.0) < transform.y_for_value(50.0));
}

#[test]
fn test_view_box_stretches_each_axis() {
    let view_box = ViewBox { width: 600.0, height: 200.0 };
    let bounds = Bounds::new(
        Point::new(px(10.0), px(5.0)),
        Size::new(px(300.0), px(400.0)),
    );

    let screen = view_box.to_screen(Point::new(300.0, 100.0), bounds);
    assert_eq!(screen.x, px(10.0 + 150.0));
    assert_eq!(screen.y, px(5.0 + 200.0));

    let corner = view_box.to_screen(Point::new(600.0, 200.0), bounds);
    assert_eq!(corner.x, px(310.0));
    assert_eq!(corner.y, px(405.0));
}

#[test]
fn test_view_box_fraction() {
    let view_box = ViewBox::new(&ChartLayout::new(600.0, 150.0, 20.0));
    let f = view_box.fraction(Point::new(150.0, 75.0));
    assert!(close(f.x, 0.25));
    assert!(close(f.y, 0.5));
}
