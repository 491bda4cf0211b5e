//! Shared metric formulas and unit constants.

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Step length in meters for foot-based activities
pub const DEFAULT_STEP_LEN: f64 = 0.65;

/// Distance in km covered by `action` repetitions of `step_len_m` meters
pub fn distance_km(action: u32, step_len_m: f64) -> f64 {
    f64::from(action) * step_len_m / M_IN_KM
}

/// Mean speed in km/h
pub fn mean_speed_kmh(distance_km: f64, duration_h: f64) -> f64 {
    distance_km / duration_h
}
