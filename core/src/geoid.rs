// core/src/geoid.rs
use log::{debug, error};
use ordered_float::OrderedFloat;
use thiserror::Error;

use crate::metrics::{geoid_cache_hit_total, geoid_cache_miss_total, Metrics};
use crate::models::TrackPoint;

/// EGM2008-rutenettet har 2.5 bueminutters oppløsning.
pub const GRID_RESOLUTION_DEG: f64 = 2.5 / 60.0;

#[derive(Debug, Error)]
pub enum GeoidError {
    #[error("undulasjonsdata utilgjengelig: {0}")]
    Unavailable(String),
}

/// Seam mot undulasjonsdataene. Selve datalastingen er plattformens ansvar;
/// denne kjernen bryr seg bare om oppslagskontrakten.
pub trait GeoidLookup {
    /// Geoidehøyde N over WGS84-ellipsoiden (m) i gitt posisjon.
    fn undulation_m(&self, latitude: f64, longitude: f64) -> Result<f64, GeoidError>;
}

/// Fast undulasjon – for tester uten ekte EGM2008-data.
pub struct StaticGeoidLookup {
    pub undulation_m: f64,
}

impl GeoidLookup for StaticGeoidLookup {
    fn undulation_m(&self, _latitude: f64, _longitude: f64) -> Result<f64, GeoidError> {
        Ok(self.undulation_m)
    }
}

/// Oppslag som alltid feiler – for å teste feilbanen.
pub struct UnavailableGeoidLookup;

impl GeoidLookup for UnavailableGeoidLookup {
    fn undulation_m(&self, latitude: f64, longitude: f64) -> Result<f64, GeoidError> {
        Err(GeoidError::Unavailable(format!(
            "({latitude:.5}, {longitude:.5})"
        )))
    }
}

type GridCell = (OrderedFloat<f64>, OrderedFloat<f64>);

fn grid_cell(latitude: f64, longitude: f64) -> GridCell {
    (
        OrderedFloat((latitude / GRID_RESOLUTION_DEG).floor()),
        OrderedFloat((longitude / GRID_RESOLUTION_DEG).floor()),
    )
}

#[derive(Debug, Clone, Copy)]
struct Egm2008Correction {
    cell: GridCell,
    undulation_m: f64,
}

impl Egm2008Correction {
    fn can_correct(&self, latitude: f64, longitude: f64) -> bool {
        self.cell == grid_cell(latitude, longitude)
    }
}

/// Cache-and-delegate rundt geoide-oppslaget: siste celle gjenbrukes så
/// lenge posisjonen holder seg innenfor den.
#[derive(Debug, Default)]
pub struct Egm2008CorrectionManager {
    correction: Option<Egm2008Correction>,
}

impl Egm2008CorrectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Korriger ellipsoidehøyde til ortometrisk høyde (h - N), in place.
    /// Punkt uten posisjon eller høyde lar vi stå; oppslagsfeil logges og
    /// lar også punktet stå urørt.
    pub fn correct_altitude(
        &mut self,
        lookup: &dyn GeoidLookup,
        track_point: &mut TrackPoint,
        metrics: &Metrics,
    ) {
        let (latitude, longitude, altitude_m) = match (
            track_point.latitude,
            track_point.longitude,
            track_point.altitude_m,
        ) {
            (Some(lat), Some(lon), Some(alt)) => (lat, lon, alt),
            _ => {
                debug!("Ingen høydekorreksjon nødvendig.");
                return;
            }
        };

        let reusable = self
            .correction
            .filter(|c| c.can_correct(latitude, longitude));

        let correction = match reusable {
            Some(c) => {
                geoid_cache_hit_total(metrics).inc();
                c
            }
            None => {
                geoid_cache_miss_total(metrics).inc();
                match lookup.undulation_m(latitude, longitude) {
                    Ok(undulation_m) => {
                        let c = Egm2008Correction {
                            cell: grid_cell(latitude, longitude),
                            undulation_m,
                        };
                        self.correction = Some(c);
                        c
                    }
                    Err(e) => {
                        error!(
                            "Kunne ikke laste høydekorreksjon for ({latitude:.5}, {longitude:.5}): {e}"
                        );
                        return;
                    }
                }
            }
        };

        track_point.altitude_m = Some(altitude_m - correction.undulation_m);
    }
}
