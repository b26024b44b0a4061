//! # Beam Section Model
//!
//! [`BeamSection`] aggregates the cross-section geometry, the
//! reinforcement layers, and the material scalars the flexural solvers
//! read: fc′, fy, and the quantities derived from fc′ (secant modulus Ec,
//! modular ratio n, modulus of rupture fr, concrete strain index ⲉo).
//!
//! The derived scalars are recomputed atomically whenever fc′ changes — no
//! intermediate inconsistent state is ever observable. Values cross the
//! unit boundary only in the setters and getters; everything stored here
//! is canonical metric.

use serde::{Deserialize, Serialize};

use crate::code::CodeParameters;
use crate::errors::{RcError, RcResult};
use crate::section::Section;
use crate::steel::{SteelCompression, SteelTension};
use crate::units::{self, Unit};

/// A reinforced-concrete beam section ready for flexural analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSection {
    section: Section,
    steel_tension: Option<SteelTension>,
    steel_compression: Option<SteelCompression>,
    /// Effective depth d, extreme compression fiber to tension steel (mm)
    effective_depth: f64,
    /// Concrete compressive strength fc′ (MPa)
    fc_prime: f64,
    /// Steel yield strength fy (MPa)
    fy: f64,
    /// Concrete secant modulus Ec = 4700·√fc′ (MPa)
    ec: f64,
    /// Modular ratio n = Es/Ec
    modular_ratio: f64,
    /// Modulus of rupture fr = 0.6·√fc′ (MPa)
    fr: f64,
    /// Strain at peak parabolic concrete stress, ⲉo = 2·0.85·fc′/Ec
    concrete_strain_index: f64,
    params: CodeParameters,
}

impl BeamSection {
    /// Create a beam section with default code parameters. Material
    /// properties start unset and must be supplied before analysis.
    pub fn new(section: Section) -> Self {
        Self::with_parameters(section, CodeParameters::default())
    }

    /// Create a beam section bound to explicit code parameters.
    pub fn with_parameters(section: Section, params: CodeParameters) -> Self {
        Self {
            section,
            steel_tension: None,
            steel_compression: None,
            effective_depth: 0.0,
            fc_prime: 0.0,
            fy: 0.0,
            ec: 0.0,
            modular_ratio: 0.0,
            fr: 0.0,
            concrete_strain_index: 0.0,
            params,
        }
    }

    /// Set fc′ and recompute every derived scalar in one step.
    pub fn set_fc_prime(&mut self, fc_prime: f64, unit: Unit) {
        let fc = units::stress_to_metric(fc_prime, unit);
        let root = fc.sqrt();
        self.fc_prime = fc;
        self.ec = 4700.0 * root;
        self.modular_ratio = self.params.steel_modulus / self.ec;
        self.fr = 0.6 * root;
        self.concrete_strain_index = 2.0 * 0.85 * fc / self.ec;
    }

    /// Set the steel yield strength fy.
    pub fn set_fy(&mut self, fy: f64, unit: Unit) {
        self.fy = units::stress_to_metric(fy, unit);
    }

    /// Set the effective depth d.
    pub fn set_effective_depth(&mut self, d: f64, unit: Unit) {
        self.effective_depth = units::length_to_metric(d, unit);
    }

    /// Attach the tension reinforcement layer.
    pub fn set_steel_tension(&mut self, steel: SteelTension) {
        self.steel_tension = Some(steel);
    }

    /// Attach the compression reinforcement layer.
    pub fn set_steel_compression(&mut self, steel: SteelCompression) {
        self.steel_compression = Some(steel);
    }

    /// The cross-section geometry.
    pub fn section(&self) -> &Section {
        &self.section
    }

    /// The code parameters this section was constructed with.
    pub fn parameters(&self) -> &CodeParameters {
        &self.params
    }

    /// Tension reinforcement, if set.
    pub fn steel_tension(&self) -> Option<&SteelTension> {
        self.steel_tension.as_ref()
    }

    /// Compression reinforcement, if set.
    pub fn steel_compression(&self) -> Option<&SteelCompression> {
        self.steel_compression.as_ref()
    }

    /// Effective depth d in the requested unit.
    pub fn effective_depth(&self, unit: Unit) -> f64 {
        units::length_from_metric(self.effective_depth, unit)
    }

    /// Concrete compressive strength fc′ in the requested unit.
    pub fn fc_prime(&self, unit: Unit) -> f64 {
        units::stress_from_metric(self.fc_prime, unit)
    }

    /// Steel yield strength fy in the requested unit.
    pub fn fy(&self, unit: Unit) -> f64 {
        units::stress_from_metric(self.fy, unit)
    }

    /// Concrete secant modulus Ec in the requested unit.
    pub fn ec(&self, unit: Unit) -> f64 {
        units::stress_from_metric(self.ec, unit)
    }

    /// Steel elastic modulus Es in the requested unit.
    pub fn es(&self, unit: Unit) -> f64 {
        units::stress_from_metric(self.params.steel_modulus, unit)
    }

    /// Modulus of rupture fr in the requested unit.
    pub fn fr(&self, unit: Unit) -> f64 {
        units::stress_from_metric(self.fr, unit)
    }

    /// Modular ratio n = Es/Ec (dimensionless).
    pub fn modular_ratio(&self) -> f64 {
        self.modular_ratio
    }

    /// Concrete strain index ⲉo (dimensionless).
    pub fn concrete_strain_index(&self) -> f64 {
        self.concrete_strain_index
    }

    /// Confirm fc′ has been set, returning the canonical value.
    pub(crate) fn require_fc_prime(&self) -> RcResult<f64> {
        if self.fc_prime <= 0.0 {
            return Err(RcError::missing_property("fc_prime"));
        }
        Ok(self.fc_prime)
    }

    /// Confirm fy has been set, returning the canonical value.
    pub(crate) fn require_fy(&self) -> RcResult<f64> {
        if self.fy <= 0.0 {
            return Err(RcError::missing_property("fy"));
        }
        Ok(self.fy)
    }

    /// Confirm the effective depth has been set, returning the canonical
    /// value.
    pub(crate) fn require_effective_depth(&self) -> RcResult<f64> {
        if self.effective_depth <= 0.0 {
            return Err(RcError::missing_property("effective_depth"));
        }
        Ok(self.effective_depth)
    }

    /// Confirm tension reinforcement is present, returning its area (mm²).
    pub(crate) fn require_tension_area(&self) -> RcResult<f64> {
        match &self.steel_tension {
            Some(steel) if steel.area(Unit::Metric) > 0.0 => Ok(steel.area(Unit::Metric)),
            _ => Err(RcError::missing_property("steel_tension")),
        }
    }

    /// Compression layer as (area, d′) in canonical units, zeroed when the
    /// layer is absent.
    pub(crate) fn compression_layer(&self) -> (f64, f64) {
        match &self.steel_compression {
            Some(steel) => (steel.area(Unit::Metric), steel.d_prime(Unit::Metric)),
            None => (0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::section::Polygon;

    fn beam_300x450() -> BeamSection {
        let main = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 450.0),
            Point::new(300.0, 450.0),
            Point::new(300.0, 0.0),
        ])
        .unwrap();
        BeamSection::new(Section::new(main))
    }

    #[test]
    fn test_derived_scalars_follow_fc_prime() {
        let mut beam = beam_300x450();
        beam.set_fc_prime(21.0, Unit::Metric);

        let root = 21.0_f64.sqrt();
        assert!((beam.ec(Unit::Metric) - 4700.0 * root).abs() < 1e-9);
        assert!((beam.fr(Unit::Metric) - 0.6 * root).abs() < 1e-9);
        assert!((beam.modular_ratio() - 200_000.0 / (4700.0 * root)).abs() < 1e-9);
        assert!(
            (beam.concrete_strain_index() - 2.0 * 0.85 * 21.0 / (4700.0 * root)).abs() < 1e-12
        );

        // Changing fc′ moves every derived value together
        beam.set_fc_prime(28.0, Unit::Metric);
        assert!((beam.ec(Unit::Metric) - 4700.0 * 28.0_f64.sqrt()).abs() < 1e-9);
        assert!((beam.fr(Unit::Metric) - 0.6 * 28.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_unit_boundary_roundtrip() {
        let mut beam = beam_300x450();
        beam.set_fc_prime(3000.0, Unit::English);
        beam.set_effective_depth(16.0, Unit::English);

        assert!((beam.fc_prime(Unit::English) - 3000.0).abs() < 1e-9);
        assert!((beam.effective_depth(Unit::Metric) - 406.4).abs() < 1e-9);
    }

    #[test]
    fn test_missing_properties() {
        let beam = beam_300x450();
        assert_eq!(
            beam.require_fc_prime().unwrap_err().error_code(),
            "MISSING_PROPERTY"
        );
        assert!(beam.require_fy().is_err());
        assert!(beam.require_effective_depth().is_err());
        assert!(beam.require_tension_area().is_err());
    }

    #[test]
    fn test_compression_layer_defaults_to_zero() {
        let beam = beam_300x450();
        assert_eq!(beam.compression_layer(), (0.0, 0.0));
    }
}
