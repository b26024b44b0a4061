//! # Reinforcement Layers
//!
//! Longitudinal steel is modeled as lumped layers: a tension layer (total
//! area, positioned by the beam's effective depth) and an optional
//! compression layer (total area plus its depth d′ from the extreme
//! compression fiber). Areas and distances are stored in canonical metric
//! units; conversion happens only in the unit-aware constructors and
//! accessors.
//!
//! Computed stresses and strains are not stored here — they are outputs of
//! an analysis and live in its result record.

use serde::{Deserialize, Serialize};

use crate::units::{self, Unit};

/// Tension reinforcement layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelTension {
    /// Total steel area (mm²)
    area: f64,
}

impl SteelTension {
    /// Create a tension layer from a total area in the caller's unit.
    pub fn new(area: f64, unit: Unit) -> Self {
        Self {
            area: units::area_to_metric(area, unit),
        }
    }

    /// Total steel area in the requested unit.
    pub fn area(&self, unit: Unit) -> f64 {
        units::area_from_metric(self.area, unit)
    }
}

/// Compression reinforcement layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelCompression {
    /// Total steel area (mm²)
    area: f64,
    /// Distance from the extreme compression fiber to the layer centroid,
    /// d′ (mm)
    d_prime: f64,
}

impl SteelCompression {
    /// Create a compression layer from a total area and d′ in the caller's
    /// unit.
    pub fn new(area: f64, d_prime: f64, unit: Unit) -> Self {
        Self {
            area: units::area_to_metric(area, unit),
            d_prime: units::length_to_metric(d_prime, unit),
        }
    }

    /// Total steel area in the requested unit.
    pub fn area(&self, unit: Unit) -> f64 {
        units::area_from_metric(self.area, unit)
    }

    /// Depth to the layer centroid in the requested unit.
    pub fn d_prime(&self, unit: Unit) -> f64 {
        units::length_from_metric(self.d_prime, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tension_metric_storage() {
        let layer = SteelTension::new(4539.92, Unit::Metric);
        assert_eq!(layer.area(Unit::Metric), 4539.92);
    }

    #[test]
    fn test_tension_english_conversion() {
        // 2.0 in² in, same value back out, metric in between
        let layer = SteelTension::new(2.0, Unit::English);
        assert!((layer.area(Unit::Metric) - 1290.32).abs() < 1e-9);
        assert!((layer.area(Unit::English) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_compression_layer() {
        let layer = SteelCompression::new(1000.0, 60.0, Unit::Metric);
        assert_eq!(layer.area(Unit::Metric), 1000.0);
        assert_eq!(layer.d_prime(Unit::Metric), 60.0);
        assert!((layer.d_prime(Unit::English) - 60.0 / 25.4).abs() < 1e-12);
    }
}
