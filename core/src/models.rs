use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ett punkt i sporet. None betyr "ingen data", ikke tallet null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPoint {
    pub time: DateTime<Utc>,
    pub latitude: Option<f64>,    // grader
    pub longitude: Option<f64>,   // grader
    pub altitude_m: Option<f64>,  // meter (WGS84-ellipsoide inntil korreksjon)
    pub altitude_gain_m: Option<f32>,
    pub altitude_loss_m: Option<f32>,
}

impl TrackPoint {
    pub fn new(time: DateTime<Utc>) -> Self {
        Self {
            time,
            latitude: None,
            longitude: None,
            altitude_m: None,
            altitude_gain_m: None,
            altitude_loss_m: None,
        }
    }

    pub fn has_location(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    pub fn has_altitude(&self) -> bool {
        self.altitude_m.is_some()
    }
}

/// Et spor (én økt) – enheten som eksporteres.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub points: Vec<TrackPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackFileFormat {
    Json,
    Csv,
}

impl TrackFileFormat {
    pub fn extension(self) -> &'static str {
        match self {
            TrackFileFormat::Json => "json",
            TrackFileFormat::Csv => "csv",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            TrackFileFormat::Json => "application/json",
            TrackFileFormat::Csv => "text/csv",
        }
    }
}

/// Eksportinnstillinger, persistert som JSON via storage.rs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    pub instant_export_after_workout: bool,
    pub export_directory: Option<String>,
    pub format: TrackFileFormat,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            instant_export_after_workout: false,
            export_directory: None,
            format: TrackFileFormat::Json,
        }
    }
}
