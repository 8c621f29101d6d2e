pub mod altitude_sum;
pub mod export;
pub mod geoid;
pub mod metrics;
pub mod models;
pub mod pressure;
pub mod storage;

pub use altitude_sum::{AltitudeSumManager, PressureSensor, StaticPressureSensor};
pub use export::{export_filename, export_track, list_files, post_workout_export, ExportError};
pub use geoid::{
    Egm2008CorrectionManager, GeoidError, GeoidLookup, StaticGeoidLookup, UnavailableGeoidLookup,
};
pub use metrics::Metrics;
pub use models::{ExportSettings, Track, TrackFileFormat, TrackPoint};
pub use pressure::{
    barometric_altitude_m, compute_changes_m, compute_changes_with_smoothing_m, AltitudeChange,
};
pub use storage::{load_settings, save_settings};
