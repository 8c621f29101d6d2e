// core/src/pressure.rs

pub const PRESSURE_STANDARD_ATMOSPHERE_HPA: f32 = 1013.25; // hPa
pub const EXPONENTIAL_SMOOTHING: f32 = 0.3; // vekt på nyeste måling
pub const ALTITUDE_CHANGE_DIFF_M: f32 = 3.0; // minste aksepterte endring (m)

/// Akseptert høydeendring mellom to trykkverdier.
/// `altitude_gain_m` og `altitude_loss_m` er aldri negative; nøyaktig én av
/// dem er større enn null.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeChange {
    pub current_sensor_value_hpa: f32,
    pub altitude_gain_m: f32,
    pub altitude_loss_m: f32,
}

/// Internasjonal barometrisk formel mot standardatmosfæren (1013.25 hPa).
pub fn barometric_altitude_m(pressure_hpa: f32) -> f32 {
    44330.0 * (1.0 - (pressure_hpa / PRESSURE_STANDARD_ATMOSPHERE_HPA).powf(1.0 / 5.255))
}

/// Endring fra sist aksepterte trykk til nåværende.
/// Under terskelen regnes endringen som støy og gir None –
/// baseline flyttes ikke.
pub fn compute_changes_m(last_accepted_hpa: f32, current_hpa: f32) -> Option<AltitudeChange> {
    let last_m = barometric_altitude_m(last_accepted_hpa);
    let current_m = barometric_altitude_m(current_hpa);

    let diff_m = current_m - last_m;
    if diff_m.abs() < ALTITUDE_CHANGE_DIFF_M {
        return None;
    }

    Some(AltitudeChange {
        current_sensor_value_hpa: current_hpa,
        altitude_gain_m: if diff_m > 0.0 { diff_m } else { 0.0 },
        altitude_loss_m: if diff_m < 0.0 { diff_m.abs() } else { 0.0 },
    })
}

/// Glatter nyeste måling eksponentielt mot forrige sette verdi før
/// terskelsjekken. Det aksepterte trykket blir den glattede verdien.
pub fn compute_changes_with_smoothing_m(
    last_accepted_hpa: f32,
    last_seen_hpa: f32,
    current_hpa: f32,
) -> Option<AltitudeChange> {
    let next_hpa = EXPONENTIAL_SMOOTHING * current_hpa + (1.0 - EXPONENTIAL_SMOOTHING) * last_seen_hpa;
    compute_changes_m(last_accepted_hpa, next_hpa)
}
