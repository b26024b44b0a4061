//! # Analysis Result Record
//!
//! Immutable output of one flexural analysis. Every stage output is
//! returned here directly — there are no cached scalars to read back from
//! the engine afterwards, so there is no ordering dependency between a
//! compute call and its getters.

use serde::{Deserialize, Serialize};

use crate::units::{self, Unit};

/// Result of one flexural analysis over a beam section.
///
/// All values are canonical metric: moments in N·mm, lengths in mm,
/// curvature in 1/mm, areas in mm². Use the unit-aware accessors for
/// display conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Resisting moment at the analyzed stage (N·mm)
    pub moment: f64,

    /// Section curvature at the analyzed stage (1/mm)
    pub curvature: f64,

    /// Neutral-axis depth kd from the extreme compression fiber (mm)
    pub kd: f64,

    /// Cracking moment Mcr (N·mm); set by the pre-crack analysis
    pub cracking_moment: Option<f64>,

    /// Minimum reinforcement area Asmin (mm²); set by the pre-crack
    /// analysis
    pub minimum_steel_area: Option<f64>,

    /// Balanced reinforcement area Asb (mm²); set by the balanced analysis
    pub balanced_steel_area: Option<f64>,
}

impl AnalysisResult {
    /// Moment in the requested unit (lb·ft for English).
    pub fn moment_in(&self, unit: Unit) -> f64 {
        units::moment_from_metric(self.moment, unit)
    }

    /// Neutral-axis depth in the requested unit.
    pub fn kd_in(&self, unit: Unit) -> f64 {
        units::length_from_metric(self.kd, unit)
    }

    /// Cracking moment in the requested unit, if this analysis produced
    /// one.
    pub fn cracking_moment_in(&self, unit: Unit) -> Option<f64> {
        self.cracking_moment
            .map(|m| units::moment_from_metric(m, unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_roundtrip() {
        let result = AnalysisResult {
            moment: 3.5e8,
            curvature: 1.1e-5,
            kd: 274.0,
            cracking_moment: None,
            minimum_steel_area: None,
            balanced_steel_area: Some(9100.0),
        };
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }

    #[test]
    fn test_unit_accessors() {
        let result = AnalysisResult {
            moment: 1.0e6,
            curvature: 0.0,
            kd: 254.0,
            cracking_moment: Some(2.0e6),
            minimum_steel_area: None,
            balanced_steel_area: None,
        };
        assert_eq!(result.moment_in(Unit::Metric), 1.0e6);
        assert_eq!(result.kd_in(Unit::English), 10.0);
        assert!(result.cracking_moment_in(Unit::English).unwrap() > 0.0);
    }
}
