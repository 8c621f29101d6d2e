// core/src/metrics.rs
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

/// Delt registry for hele crates tellerne.
pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

#[derive(Clone)]
pub struct Metrics {
    geoid_cache_hit_total: IntCounter,
    geoid_cache_miss_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let geoid_cache_hit_total = IntCounter::new(
            "geoid_cache_hit_total",
            "Treff i EGM2008-cellecachen",
        )
        .unwrap();
        let geoid_cache_miss_total = IntCounter::new(
            "geoid_cache_miss_total",
            "Bom i EGM2008-cellecachen (nytt oppslag)",
        )
        .unwrap();

        // Registrering kan feile ved duplikat (flere Metrics-instanser i test)
        let _ = REGISTRY.register(Box::new(geoid_cache_hit_total.clone()));
        let _ = REGISTRY.register(Box::new(geoid_cache_miss_total.clone()));

        Self {
            geoid_cache_hit_total,
            geoid_cache_miss_total,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

pub fn geoid_cache_hit_total(metrics: &Metrics) -> &IntCounter {
    &metrics.geoid_cache_hit_total
}

pub fn geoid_cache_miss_total(metrics: &Metrics) -> &IntCounter {
    &metrics.geoid_cache_miss_total
}

/// Tellerne i Prometheus tekstformat.
pub fn gather() -> String {
    let mut buf = Vec::new();
    let encoder = TextEncoder::new();
    if encoder.encode(&REGISTRY.gather(), &mut buf).is_err() {
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}
