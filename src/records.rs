//! Health records as stored by the application, and the trend panels that
//! chart them.

use crate::data_types::{Observation, SeriesDescriptor};
use crate::utils::date_formatter::{format_timestamp, DateStyle};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Bp,
    Sugar,
    Pulse,
    Heartrate,
    Medicine,
}

impl RecordType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bp => "bp",
            Self::Sugar => "sugar",
            Self::Pulse => "pulse",
            Self::Heartrate => "heartrate",
            Self::Medicine => "medicine",
        }
    }
}

/// One stored reading. Values are kept as the text the user typed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecordType,
    /// Epoch milliseconds.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub systolic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diastolic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spo2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medicine_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

impl HealthRecord {
    pub fn new(id: impl Into<String>, kind: RecordType, timestamp: i64) -> Self {
        Self {
            id: id.into(),
            kind,
            timestamp,
            systolic: None,
            diastolic: None,
            sugar_level: None,
            sugar_type: None,
            bpm: None,
            spo2: None,
            medicine_name: None,
            dosage: None,
            frequency: None,
        }
    }

    pub fn blood_pressure(
        id: impl Into<String>,
        timestamp: i64,
        systolic: &str,
        diastolic: &str,
    ) -> Self {
        Self {
            systolic: Some(systolic.to_string()),
            diastolic: Some(diastolic.to_string()),
            ..Self::new(id, RecordType::Bp, timestamp)
        }
    }

    pub fn sugar(id: impl Into<String>, timestamp: i64, level: &str, sugar_type: &str) -> Self {
        Self {
            sugar_level: Some(level.to_string()),
            sugar_type: Some(sugar_type.to_string()),
            ..Self::new(id, RecordType::Sugar, timestamp)
        }
    }

    pub fn heart(id: impl Into<String>, kind: RecordType, timestamp: i64, bpm: &str) -> Self {
        Self {
            bpm: Some(bpm.to_string()),
            ..Self::new(id, kind, timestamp)
        }
    }

    /// Chartable fields of the record, keyed the way series refer to them.
    pub fn to_observation(&self) -> Observation {
        let fields = [
            ("systolic", &self.systolic),
            ("diastolic", &self.diastolic),
            ("sugarLevel", &self.sugar_level),
            ("bpm", &self.bpm),
            ("spo2", &self.spo2),
        ];
        fields
            .into_iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
            .fold(Observation::new(self.timestamp), |obs, (key, value)| {
                obs.with_field(key, value)
            })
    }

    /// One-line reading for the history list, e.g. `120/80 mmHg`.
    pub fn value_summary(&self) -> String {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        match self.kind {
            RecordType::Bp => format!("{}/{} mmHg", text(&self.systolic), text(&self.diastolic)),
            RecordType::Sugar => match self.sugar_type.as_deref() {
                Some("Post-Prandial") => format!("{} mg/dL (PP)", text(&self.sugar_level)),
                Some(t) => format!("{} mg/dL ({t})", text(&self.sugar_level)),
                None => format!("{} mg/dL", text(&self.sugar_level)),
            },
            RecordType::Pulse | RecordType::Heartrate => format!("{} BPM", text(&self.bpm)),
            RecordType::Medicine => {
                format!("{} {}", text(&self.medicine_name), text(&self.dosage))
                    .trim()
                    .to_string()
            }
        }
    }

    pub fn history_line(&self, zone: Option<Tz>) -> String {
        format!(
            "{}  {}  {}",
            format_timestamp(self.timestamp, DateStyle::Compact, zone),
            self.kind.as_str().to_uppercase(),
            self.value_summary()
        )
    }
}

/// A chart on the trends board: which record types feed it and how its
/// series look.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendPanel {
    pub title: String,
    pub record_types: Vec<RecordType>,
    pub series: Vec<SeriesDescriptor>,
    #[serde(default)]
    pub height: Option<f32>,
}

impl TrendPanel {
    pub fn blood_pressure() -> Self {
        Self {
            title: "Blood Pressure Trend".into(),
            record_types: vec![RecordType::Bp],
            series: vec![
                SeriesDescriptor::new("systolic", "#f43f5e"),
                SeriesDescriptor::new("diastolic", "#fb7185"),
            ],
            height: None,
        }
    }

    pub fn blood_sugar() -> Self {
        Self {
            title: "Blood Sugar Trend".into(),
            record_types: vec![RecordType::Sugar],
            series: vec![SeriesDescriptor::new("sugarLevel", "#f59e0b")],
            height: None,
        }
    }

    pub fn heart_rate() -> Self {
        Self {
            title: "Heart Rate Trend".into(),
            record_types: vec![RecordType::Pulse, RecordType::Heartrate],
            series: vec![SeriesDescriptor::new("bpm", "#10b981")],
            height: Some(150.0),
        }
    }

    pub fn defaults() -> Vec<Self> {
        vec![Self::blood_pressure(), Self::blood_sugar(), Self::heart_rate()]
    }

    pub fn accepts(&self, record: &HealthRecord) -> bool {
        record.kind != RecordType::Medicine && self.record_types.contains(&record.kind)
    }

    /// Observations for this panel, in record order.
    pub fn observations(&self, records: &[HealthRecord]) -> Vec<Observation> {
        records
            .iter()
            .filter(|r| self.accepts(r))
            .map(HealthRecord::to_observation)
            .collect()
    }
}

/// Records shown in the history: everything except medicines, newest first.
/// Equal timestamps keep their input order.
pub fn history_records(records: &[HealthRecord]) -> Vec<&HealthRecord> {
    let mut history: Vec<&HealthRecord> = records
        .iter()
        .filter(|r| r.kind != RecordType::Medicine)
        .collect();
    history.sort_by_key(|r| std::cmp::Reverse(r.timestamp));
    history
}
