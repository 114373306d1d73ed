#[cfg(test)]
mod tests {
    use pulse_trends::scales::ChartScale;
    use pulse_trends::{FieldValue, Observation, SeriesDescriptor, TrendChart};

    #[test]
    fn test_scale_zero_domain() {
        let scale = ChartScale::new_linear((10.0, 10.0), (0.0, 100.0));

        let mapped = scale.map(10.0);
        assert!(!mapped.is_nan(), "Mapped value should not be NaN for zero domain");
        assert!(!mapped.is_infinite(), "Mapped value should not be Inf for zero domain");
        assert!(
            mapped >= 0.0 && mapped <= 100.0,
            "Mapped value {} should be within range [0, 100]",
            mapped
        );
    }

    #[test]
    fn test_malformed_fields_never_panic() {
        let observations = vec![
            Observation::new(1).with_field("a", f64::NAN),
            Observation::new(2).with_field("a", f64::NEG_INFINITY),
            Observation::new(3)
                .with_field("a", FieldValue::Other(serde_json::json!({"nested": 1}))),
            Observation::new(4).with_field("a", "   "),
            Observation::new(5).with_field("a", "42abc"),
        ];
        let frame =
            TrendChart::new(observations, vec![SeriesDescriptor::new("a", "not-a-color")]).frame();
        let plot = frame.plot().expect("five observations plot");

        assert_eq!(plot.markers.len(), 1);
        assert_eq!(plot.markers[0].value, 42);
        assert!(plot.markers[0].position.x.is_finite());
        assert!(plot.markers[0].position.y.is_finite());
    }

    #[test]
    fn test_extreme_values_stay_finite() {
        let observations = vec![
            Observation::new(i64::MIN).with_field("a", i64::MAX / 2),
            Observation::new(i64::MAX).with_field("a", -(i64::MAX / 2)),
        ];
        let frame =
            TrendChart::new(observations, vec![SeriesDescriptor::new("a", "#10b981")]).frame();
        let plot = frame.plot().unwrap();
        for marker in &plot.markers {
            assert!(marker.position.y.is_finite());
        }
    }

    #[test]
    fn test_no_series() {
        let observations = vec![Observation::new(1), Observation::new(2)];
        let frame = TrendChart::new(observations, vec![]).frame();
        let plot = frame.plot().unwrap();
        assert!(plot.lines.is_empty());
        assert!(plot.markers.is_empty());
    }
}
