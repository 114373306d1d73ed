use chrono_tz::Tz;
use pulse_trends::records::history_records;
use pulse_trends::{HealthRecord, RecordType, TrendChart, TrendPanel};

const T0: i64 = 1_705_311_000_000;

fn sample_records() -> Vec<HealthRecord> {
    let mut med = HealthRecord::new("m1", RecordType::Medicine, T0);
    med.medicine_name = Some("Metformin".into());
    med.dosage = Some("500mg".into());

    vec![
        HealthRecord::blood_pressure("b1", T0 + 2, "130", "85"),
        HealthRecord::sugar("s1", T0 + 1, "110", "Fasting"),
        HealthRecord::heart("p1", RecordType::Pulse, T0 + 3, "72"),
        HealthRecord::blood_pressure("b2", T0, "120", "80"),
        HealthRecord::heart("h1", RecordType::Heartrate, T0 + 4, "80"),
        med,
    ]
}

#[test]
fn test_panels_filter_by_type() {
    let records = sample_records();

    let bp = TrendPanel::blood_pressure().observations(&records);
    assert_eq!(bp.len(), 2);
    assert_eq!(bp[0].value("systolic"), Some(130));

    let sugar = TrendPanel::blood_sugar().observations(&records);
    assert_eq!(sugar.len(), 1);
    assert_eq!(sugar[0].value("sugarLevel"), Some(110));

    // Pulse and heart rate readings share one chart.
    let heart = TrendPanel::heart_rate().observations(&records);
    assert_eq!(heart.len(), 2);
    assert_eq!(TrendPanel::heart_rate().height, Some(150.0));
}

#[test]
fn test_medicine_is_never_charted() {
    let records = sample_records();
    let mut panel = TrendPanel::blood_pressure();
    panel.record_types.push(RecordType::Medicine);
    assert_eq!(panel.observations(&records).len(), 2);
    assert_eq!(history_records(&records).len(), 5);
}

#[test]
fn test_history_is_newest_first() {
    let mut records = sample_records();
    records.push(HealthRecord::sugar("s2", T0 + 4, "95", "Random"));

    let ids: Vec<&str> = history_records(&records)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, vec!["h1", "s2", "p1", "b1", "s1", "b2"]);
}

#[test]
fn test_panel_feeds_chart() {
    let records = sample_records();
    let panel = TrendPanel::blood_pressure();
    let frame = TrendChart::new(panel.observations(&records), panel.series.clone()).frame();
    let plot = frame.plot().unwrap();

    // b2 is older, so it comes first.
    assert_eq!(plot.timestamps, vec![T0, T0 + 2]);
    assert_eq!(plot.markers[0].value, 120);
    assert_eq!(plot.markers.len(), 4);
}

#[test]
fn test_record_json_round_trip_shape() {
    let json = r#"{
        "id": "abc",
        "type": "sugar",
        "date": "2024-01-15T09:30:00.000Z",
        "timestamp": 1705311000000,
        "sugarLevel": "140",
        "sugarType": "Post-Prandial"
    }"#;
    let record: HealthRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.kind, RecordType::Sugar);
    assert_eq!(record.sugar_level.as_deref(), Some("140"));
    assert_eq!(record.value_summary(), "140 mg/dL (PP)");
    assert_eq!(record.to_observation().value("sugarLevel"), Some(140));
}

#[test]
fn test_value_summaries() {
    let records = sample_records();
    assert_eq!(records[0].value_summary(), "130/85 mmHg");
    assert_eq!(records[1].value_summary(), "110 mg/dL (Fasting)");
    assert_eq!(records[2].value_summary(), "72 BPM");
    assert_eq!(records[5].value_summary(), "Metformin 500mg");
}

#[test]
fn test_history_line() {
    let record = HealthRecord::blood_pressure("b", T0, "120", "80");
    assert_eq!(record.history_line(Some(Tz::UTC)), "Jan 15, 09:30 AM  BP  120/80 mmHg");
}
