//! Internal unit conversions.
//!
//! One internal unit (IU) is one nanometer. Millimeters are the
//! user-facing unit; conversion rounds half away from zero so that
//! round numbers of millimeters survive a round trip.

/// Internal units per millimeter.
pub const IU_PER_MM: f64 = 1_000_000.0;

/// Convert millimeters to internal units.
pub fn from_mm(mm: f64) -> i32 {
    (mm * IU_PER_MM).round() as i32
}

/// Convert internal units to millimeters.
pub fn to_mm(iu: i32) -> f64 {
    iu as f64 / IU_PER_MM
}
