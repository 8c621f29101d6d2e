// core/src/altitude_sum.rs
use log::{debug, trace, warn};

use crate::models::TrackPoint;
use crate::pressure;

/// Seam mot plattformens trykksensor. Prod-implementasjonen registrerer seg
/// hos OS-et; testene bruker StaticPressureSensor.
pub trait PressureSensor {
    /// Prøv å koble til. `false` betyr at barometer mangler –
    /// degradert modus, ikke feil.
    fn connect(&mut self) -> bool;
    fn disconnect(&mut self);
}

/// Fast svar – for tester uten ekte sensor.
pub struct StaticPressureSensor {
    pub available: bool,
}

impl PressureSensor for StaticPressureSensor {
    fn connect(&mut self) -> bool {
        self.available
    }

    fn disconnect(&mut self) {}
}

/// Estimerer høydemeter opp/ned fra en strøm av barometermålinger (hPa).
///
/// To-trinns buffer: `last_seen` er kortsiktig kandidat, `last_accepted` er
/// stabil baseline. Bare endringer som passerer støyterskelen i
/// pressure.rs flytter baseline og akkumuleres.
#[derive(Debug, Default)]
pub struct AltitudeSumManager {
    connected: bool,
    last_accepted_pressure_hpa: Option<f32>, // None = baseline udefinert
    last_seen_pressure_hpa: f32,
    altitude_gain_m: Option<f32>,
    altitude_loss_m: Option<f32>,
}

impl AltitudeSumManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kobler til sensoren; tilgjengelighet avgjør connected-tilstanden.
    /// Nullstiller alltid baseline og akkumulerte verdier.
    pub fn start(&mut self, sensor: &mut dyn PressureSensor) {
        self.connected = sensor.connect();
        if !self.connected {
            warn!("Ingen trykksensor tilgjengelig.");
        }

        self.last_accepted_pressure_hpa = None;
        self.reset();
    }

    /// Idempotent – trygg å kalle uten foregående start.
    pub fn stop(&mut self, sensor: &mut dyn PressureSensor) {
        debug!("Stop");
        sensor.disconnect();

        self.connected = false;
        self.reset();
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Testseam – tilsvarer utfallet av sensor-registreringen.
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Nullstiller akkumulerte verdier, men ikke connected eller baseline.
    pub fn reset(&mut self) {
        debug!("Reset");
        self.altitude_gain_m = None;
        self.altitude_loss_m = None;
    }

    pub fn altitude_gain_m(&self) -> Option<f32> {
        if self.connected {
            self.altitude_gain_m
        } else {
            None
        }
    }

    pub fn altitude_loss_m(&self) -> Option<f32> {
        if self.connected {
            self.altitude_loss_m
        } else {
            None
        }
    }

    pub fn set_altitude_gain_m(&mut self, altitude_gain_m: f32) {
        self.altitude_gain_m = Some(altitude_gain_m);
    }

    pub fn add_altitude_gain_m(&mut self, altitude_gain_m: f32) {
        self.altitude_gain_m = Some(self.altitude_gain_m.unwrap_or(0.0) + altitude_gain_m);
    }

    pub fn set_altitude_loss_m(&mut self, altitude_loss_m: f32) {
        self.altitude_loss_m = Some(altitude_loss_m);
    }

    pub fn add_altitude_loss_m(&mut self, altitude_loss_m: f32) {
        self.altitude_loss_m = Some(self.altitude_loss_m.unwrap_or(0.0) + altitude_loss_m);
    }

    /// Kopierer synlige (connected-gatede) verdier inn i punktet.
    pub fn fill(&self, track_point: &mut TrackPoint) {
        track_point.altitude_gain_m = self.altitude_gain_m();
        track_point.altitude_loss_m = self.altitude_loss_m();
    }

    /// Én måling inn. Første måling etter baseline-nullstilling seeder bare
    /// baseline og bidrar aldri til gain/loss.
    pub fn on_sensor_value(&mut self, value_hpa: f32) {
        if !self.connected {
            warn!("Ikke koblet til sensor, måling forkastes.");
            return;
        }

        let last_accepted_hpa = match self.last_accepted_pressure_hpa {
            None => {
                self.last_accepted_pressure_hpa = Some(value_hpa);
                self.last_seen_pressure_hpa = value_hpa;
                return;
            }
            Some(v) => v,
        };

        // Første reelle bidrag løfter begge fra unset til 0.0
        self.altitude_gain_m = Some(self.altitude_gain_m.unwrap_or(0.0));
        self.altitude_loss_m = Some(self.altitude_loss_m.unwrap_or(0.0));

        if let Some(change) = pressure::compute_changes_with_smoothing_m(
            last_accepted_hpa,
            self.last_seen_pressure_hpa,
            value_hpa,
        ) {
            self.altitude_gain_m = self.altitude_gain_m.map(|g| g + change.altitude_gain_m);
            self.altitude_loss_m = self.altitude_loss_m.map(|l| l + change.altitude_loss_m);

            self.last_accepted_pressure_hpa = Some(change.current_sensor_value_hpa);
        }

        self.last_seen_pressure_hpa = value_hpa;

        trace!(
            "høydemeter opp: {:?}, ned: {:?}",
            self.altitude_gain_m,
            self.altitude_loss_m
        );
    }
}
