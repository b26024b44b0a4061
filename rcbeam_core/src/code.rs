//! # Code Parameters
//!
//! Named configuration constants for the flexural solvers. These are the
//! quantities a design code fixes (steel modulus, ultimate concrete strain,
//! the β₁ rule) together with the numerical knobs of the engine (strip
//! count, iteration bound, equilibrium tolerance). Binding them to a value
//! object instead of module globals lets alternate code provisions be
//! substituted without touching solver logic.

use serde::{Deserialize, Serialize};

/// Configuration constants bound once at model construction.
///
/// The defaults reproduce ACI-style provisions in canonical metric units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeParameters {
    /// Modulus of elasticity of steel, Es (MPa)
    pub steel_modulus: f64,

    /// Ultimate (crushing) concrete strain, ⲉcu
    pub ultimate_concrete_strain: f64,

    /// Concrete compressive strength above which β₁ reduces (MPa)
    pub beta1_strength_threshold: f64,

    /// β₁ value at or below the strength threshold
    pub beta1_base: f64,

    /// β₁ reduction per MPa of fc′ above the threshold (0.05 per 7 MPa)
    pub beta1_slope: f64,

    /// Lower bound on β₁
    pub beta1_floor: f64,

    /// Number of equal-height strips for compression-block integration.
    /// More strips trade cost for accuracy.
    pub integration_strips: usize,

    /// Iteration bound shared by all equilibrium searches
    pub max_iterations: usize,

    /// Relative equilibrium tolerance (fraction of the search target)
    pub equilibrium_tolerance: f64,
}

impl Default for CodeParameters {
    fn default() -> Self {
        Self {
            steel_modulus: 200_000.0,
            ultimate_concrete_strain: 0.003,
            beta1_strength_threshold: 30.0,
            beta1_base: 0.85,
            beta1_slope: 0.05 / 7.0,
            beta1_floor: 0.65,
            integration_strips: 1000,
            max_iterations: 1000,
            equilibrium_tolerance: 0.01,
        }
    }
}

impl CodeParameters {
    /// Whitney stress-block depth factor β₁ for a given concrete strength.
    ///
    /// β₁ = base below the strength threshold, reduced linearly above it,
    /// floored.
    pub fn beta1(&self, fc_prime: f64) -> f64 {
        if fc_prime <= self.beta1_strength_threshold {
            self.beta1_base
        } else {
            let reduced =
                self.beta1_base - self.beta1_slope * (fc_prime - self.beta1_strength_threshold);
            reduced.max(self.beta1_floor)
        }
    }

    /// Steel yield strain ⲉy = fy/Es.
    pub fn yield_strain(&self, fy: f64) -> f64 {
        fy / self.steel_modulus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beta1_below_threshold() {
        let params = CodeParameters::default();
        assert_eq!(params.beta1(21.0), 0.85);
        assert_eq!(params.beta1(30.0), 0.85);
    }

    #[test]
    fn test_beta1_reduction() {
        let params = CodeParameters::default();
        // 37 MPa is 7 MPa above the threshold: one full 0.05 step down
        assert!((params.beta1(37.0) - 0.80).abs() < 1e-12);
    }

    #[test]
    fn test_beta1_floor() {
        let params = CodeParameters::default();
        assert_eq!(params.beta1(100.0), 0.65);
    }

    #[test]
    fn test_yield_strain() {
        let params = CodeParameters::default();
        assert!((params.yield_strain(300.0) - 0.0015).abs() < 1e-12);
    }
}
