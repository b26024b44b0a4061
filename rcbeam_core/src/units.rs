//! # Unit Conversions
//!
//! The engine stores every quantity in one canonical metric system:
//! lengths in millimeters, areas in mm², stresses in MPa, moments in N·mm.
//! Callers working in US customary units pass [`Unit::English`] to the
//! model constructors and accessors, which convert exactly once on ingress
//! and once on egress. Nothing inside the solvers ever sees a non-metric
//! value.
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::units::{self, Unit};
//!
//! let d = units::length_to_metric(18.0, Unit::English); // 18 in
//! assert!((d - 457.2).abs() < 1e-9); // mm
//! ```

use serde::{Deserialize, Serialize};

/// Millimeters per inch
const MM_PER_IN: f64 = 25.4;

/// Pounds-force per kilogram-force divisor and gravity, chained exactly as
/// the psi↔MPa conversion is defined: lb → kg (÷2.204), kg → N (×9.81),
/// in² → mm² (÷25.4²).
const LB_PER_KG: f64 = 2.204;
const GRAVITY: f64 = 9.81;

/// Unit system for values crossing the model boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    /// Millimeters, mm², MPa, N·mm (canonical)
    #[default]
    Metric,
    /// Inches, in², psi; moments reported in lb·ft
    English,
}

/// Convert pounds per square inch to megapascals.
pub fn psi_to_mpa(psi: f64) -> f64 {
    psi / LB_PER_KG * GRAVITY / MM_PER_IN.powi(2)
}

/// Convert megapascals to pounds per square inch.
pub fn mpa_to_psi(mpa: f64) -> f64 {
    mpa * LB_PER_KG / GRAVITY * MM_PER_IN.powi(2)
}

/// Convert millimeters to inches.
pub fn mm_to_in(mm: f64) -> f64 {
    mm / MM_PER_IN
}

/// Convert inches to millimeters.
pub fn in_to_mm(inches: f64) -> f64 {
    inches * MM_PER_IN
}

/// Convert square millimeters to square inches.
pub fn mm2_to_in2(area: f64) -> f64 {
    area / MM_PER_IN.powi(2)
}

/// Convert square inches to square millimeters.
pub fn in2_to_mm2(area: f64) -> f64 {
    area * MM_PER_IN.powi(2)
}

/// Convert a moment in N·mm to lb·ft.
pub fn nmm_to_lbft(moment: f64) -> f64 {
    moment * LB_PER_KG / GRAVITY / MM_PER_IN / 12.0
}

/// Convert a caller-supplied length to canonical millimeters.
pub fn length_to_metric(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Metric => value,
        Unit::English => in_to_mm(value),
    }
}

/// Convert a canonical millimeter length to the caller's unit.
pub fn length_from_metric(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Metric => value,
        Unit::English => mm_to_in(value),
    }
}

/// Convert a caller-supplied area to canonical mm².
pub fn area_to_metric(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Metric => value,
        Unit::English => in2_to_mm2(value),
    }
}

/// Convert a canonical mm² area to the caller's unit.
pub fn area_from_metric(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Metric => value,
        Unit::English => mm2_to_in2(value),
    }
}

/// Convert a caller-supplied stress to canonical MPa.
pub fn stress_to_metric(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Metric => value,
        Unit::English => psi_to_mpa(value),
    }
}

/// Convert a canonical MPa stress to the caller's unit.
pub fn stress_from_metric(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Metric => value,
        Unit::English => mpa_to_psi(value),
    }
}

/// Convert a canonical N·mm moment to the caller's unit (lb·ft for
/// [`Unit::English`]).
pub fn moment_from_metric(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Metric => value,
        Unit::English => nmm_to_lbft(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_roundtrip() {
        let mm = in_to_mm(12.0);
        assert_eq!(mm, 304.8);
        assert!((mm_to_in(mm) - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_area_roundtrip() {
        let mm2 = in2_to_mm2(4.0);
        assert!((mm2 - 2580.64).abs() < 1e-9);
        assert!((mm2_to_in2(mm2) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_stress_roundtrip() {
        let mpa = psi_to_mpa(3000.0);
        assert!((mpa_to_psi(mpa) - 3000.0).abs() < 1e-9);
        // 3000 psi concrete is on the order of 21 MPa
        assert!(mpa > 20.0 && mpa < 21.5);
    }

    #[test]
    fn test_metric_passthrough() {
        assert_eq!(length_to_metric(450.0, Unit::Metric), 450.0);
        assert_eq!(stress_from_metric(21.0, Unit::Metric), 21.0);
        assert_eq!(moment_from_metric(1.0e6, Unit::Metric), 1.0e6);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Unit::English).unwrap();
        let roundtrip: Unit = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Unit::English);
    }
}
