// core/src/export.rs
use std::fs;
use std::path::{Path, PathBuf};

use log::{error, warn};
use thiserror::Error;

use crate::models::{ExportSettings, Track, TrackFileFormat};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("eksportkatalog kan ikke skrives til: {0}")]
    DirectoryNotWritable(PathBuf),
    #[error("json-serialisering feilet: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv-skriving feilet: {0}")]
    Csv(#[from] csv::Error),
    #[error("io-feil: {0}")]
    Io(#[from] std::io::Error),
}

/// Filnavn: sanert spornavn + id + endelse.
pub fn export_filename(track: &Track, format: TrackFileFormat) -> String {
    let mut name: String = track
        .name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    if name.is_empty() {
        name = "track".to_string();
    }
    format!("{}_{}.{}", name, track.id, format.extension())
}

/// Navn på alle vanlige filer i eksportkatalogen.
/// Feilet spørring gir tom liste med varsel, ikke feil.
pub fn list_files(directory: &Path) -> Vec<String> {
    let mut file_names = Vec::new();

    match fs::read_dir(directory) {
        Ok(entries) => {
            for entry in entries.flatten() {
                if entry.path().is_file() {
                    if let Some(name) = entry.file_name().to_str() {
                        file_names.push(name.to_string());
                    }
                }
            }
        }
        Err(e) => warn!("Katalogspørring feilet: {e}"),
    }

    file_names
}

/// Finn eksisterende fil med gitt navn i katalogen.
fn find_file(directory: &Path, filename: &str) -> Option<PathBuf> {
    list_files(directory)
        .iter()
        .find(|name| name.as_str() == filename)
        .map(|name| directory.join(name))
}

/// Skriv sporet til katalogen i ønsket format. Eksisterende fil med samme
/// navn gjenbrukes (trunkeres); ellers opprettes en ny. Halvskrevne filer
/// ryddes ved feil.
pub fn export_track(
    directory: &Path,
    track: &Track,
    format: TrackFileFormat,
) -> Result<PathBuf, ExportError> {
    let filename = export_filename(track, format);
    let path = find_file(directory, &filename).unwrap_or_else(|| directory.join(&filename));

    let result = match format {
        TrackFileFormat::Json => write_json(&path, track),
        TrackFileFormat::Csv => write_csv(&path, track),
    };

    match result {
        Ok(()) => Ok(path),
        Err(e) => {
            error!("Klarte ikke å eksportere spor {}: {e}", track.id);
            let _ = fs::remove_file(&path);
            Err(e)
        }
    }
}

fn write_json(path: &Path, track: &Track) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(track)?;
    fs::write(path, json)?;
    Ok(())
}

fn write_csv(path: &Path, track: &Track) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "time",
        "latitude",
        "longitude",
        "altitude_m",
        "altitude_gain_m",
        "altitude_loss_m",
    ])?;

    for point in &track.points {
        writer.write_record([
            point.time.to_rfc3339(),
            point.latitude.map(|v| v.to_string()).unwrap_or_default(),
            point.longitude.map(|v| v.to_string()).unwrap_or_default(),
            point.altitude_m.map(|v| v.to_string()).unwrap_or_default(),
            point.altitude_gain_m.map(|v| v.to_string()).unwrap_or_default(),
            point.altitude_loss_m.map(|v| v.to_string()).unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Instant-eksport etter økt, styrt av innstillingene.
/// Ok(None) = gaten er av; feil returneres til kalleren som selv
/// bestemmer hvordan de vises.
pub fn post_workout_export(
    settings: &ExportSettings,
    track: &Track,
) -> Result<Option<PathBuf>, ExportError> {
    if !settings.instant_export_after_workout {
        return Ok(None);
    }

    let directory = match &settings.export_directory {
        Some(d) => PathBuf::from(d),
        None => return Err(ExportError::DirectoryNotWritable(PathBuf::new())),
    };
    if !directory.is_dir() {
        return Err(ExportError::DirectoryNotWritable(directory));
    }

    export_track(&directory, track, settings.format).map(Some)
}
