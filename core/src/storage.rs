use crate::models::ExportSettings;
use std::error::Error;
use std::path::Path;

/// Leser inn eksportinnstillinger fra disk (JSON).
/// Hvis filen ikke finnes, returneres defaults.
pub fn load_settings(path: &str) -> Result<ExportSettings, Box<dyn Error>> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)?;
        let mut deserializer = serde_json::Deserializer::from_str(&contents);
        // serde_path_to_error gir JSON-stien i feilmeldingen
        let settings: ExportSettings = serde_path_to_error::deserialize(&mut deserializer)?;
        println!(
            "📂 Innstillinger lastet fra {} (instant_export={})",
            path, settings.instant_export_after_workout
        );
        Ok(settings)
    } else {
        println!(
            "⚠️ Fant ikke innstillinger på {}, returnerer default (instant_export=false)",
            path
        );
        Ok(ExportSettings::default())
    }
}

/// Lagrer innstillinger til disk som JSON (pretty-print).
pub fn save_settings(settings: &ExportSettings, path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json)?;
    println!(
        "✅ Innstillinger lagret til {} (instant_export={})",
        path, settings.instant_export_after_workout
    );
    Ok(())
}
