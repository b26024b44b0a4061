//! # Flexural Analysis Engine
//!
//! Iterative neutral-axis solvers for a reinforced-concrete beam section
//! under pure flexure. Three procedures are provided:
//!
//! 1. **Pre-crack** — uncracked transformed-section analysis: closed-form
//!    neutral axis, strip-integrated concrete resultants under a linear
//!    stress field pinned to the modulus of rupture at the tension face,
//!    cracking moment, and minimum reinforcement.
//! 2. **Nominal capacity** — equilibrium search on the compression-block
//!    depth under either the Whitney rectangular block or the Hognestad
//!    parabola.
//! 3. **Balanced condition** — closed-form neutral axis from simultaneous
//!    concrete crushing and steel yield, with the balanced steel area.
//!
//! The engine borrows the [`BeamSection`] read-only and carries no state
//! of its own across calls. Strain compatibility is linear in depth
//! throughout; steel stresses are capped at ±fy.

use crate::analysis::result::AnalysisResult;
use crate::analysis::solver::{self, SearchOptions};
use crate::analysis::StressDistribution;
use crate::beam_section::BeamSection;
use crate::code::CodeParameters;
use crate::errors::{RcError, RcResult};
use crate::units::Unit;

/// Fraction of the effective depth used as the initial trial and step for
/// the equilibrium searches
const SEED_FRACTION: f64 = 0.01;

/// Flexural analysis engine over a borrowed beam section.
pub struct BeamAnalyses<'a> {
    beam: &'a BeamSection,
}

impl<'a> BeamAnalyses<'a> {
    /// Create an engine for one beam section.
    pub fn new(beam: &'a BeamSection) -> Self {
        Self { beam }
    }

    fn params(&self) -> &CodeParameters {
        self.beam.parameters()
    }

    /// Steel stress from a strain, linear-elastic capped at ±fy.
    fn steel_stress(&self, strain: f64, fy: f64) -> f64 {
        (self.params().steel_modulus * strain).clamp(-fy, fy)
    }

    /// Compression-steel force As′·fs′ for a trial neutral-axis depth,
    /// zero when no compression layer is present.
    fn compression_steel_force(&self, kd: f64, fy: f64) -> f64 {
        let (area, d_prime) = self.beam.compression_layer();
        if area == 0.0 {
            return 0.0;
        }
        let strain = self.params().ultimate_concrete_strain * (kd - d_prime) / kd;
        area * self.steel_stress(strain, fy)
    }

    /// Whitney-block compression resultant for a block depth `a`:
    /// Cc = 0.85·fc′·(net area above the cut), with the resultant's depth
    /// below the top fiber.
    fn whitney_block(&self, a: f64, fc_prime: f64) -> RcResult<(f64, f64)> {
        let section = self.beam.section();
        let cut = section.top()? - a;
        let force = 0.85 * fc_prime * section.area_above_axis(cut)?;
        let centroid = section.centroid_above_axis(cut)?;
        Ok((force, centroid))
    }

    /// Hognestad-parabola compression resultant for a trial neutral-axis
    /// depth, by strip summation of fc(y)·width(y) over the compression
    /// zone, with the resultant's depth below the top fiber.
    fn parabolic_block(&self, kd: f64, fc_prime: f64) -> RcResult<(f64, f64)> {
        let params = self.params();
        let section = self.beam.section();
        let top = section.top()?;
        let eo = self.beam.concrete_strain_index();
        let ecu = params.ultimate_concrete_strain;

        let strips = params.integration_strips;
        let dy = kd / strips as f64;
        let mut force = 0.0;
        let mut first_moment = 0.0;

        for i in 0..strips {
            // Distance of the strip center above the neutral axis
            let y = (i as f64 + 0.5) * dy;
            let strain = ecu * y / kd;
            let ratio = strain / eo;
            let stress_factor = if ratio < 1.0 {
                2.0 * ratio - ratio * ratio
            } else {
                1.0
            };
            let width = section.effective_width(top - kd + y)?;
            let df = 0.85 * fc_prime * stress_factor * width * dy;
            force += df;
            first_moment += df * y;
        }

        if force <= 0.0 {
            return Err(RcError::division_by_zero(
                "parabolic compression block has zero resultant",
            ));
        }
        // Resultant depth below the top fiber
        Ok((force, kd - first_moment / force))
    }

    /// Strip-integrate a linear stress field over the depth range
    /// [z0, z1] below the top fiber, returning the resultant force and its
    /// depth below the top fiber.
    fn integrate_linear_field<F>(&self, z0: f64, z1: f64, stress_at: F) -> RcResult<(f64, f64)>
    where
        F: Fn(f64) -> f64,
    {
        let section = self.beam.section();
        let top = section.top()?;
        let strips = self.params().integration_strips;
        let dz = (z1 - z0) / strips as f64;
        let mut force = 0.0;
        let mut first_moment = 0.0;

        for i in 0..strips {
            let z = z0 + (i as f64 + 0.5) * dz;
            let df = stress_at(z) * section.effective_width(top - z)? * dz;
            force += df;
            first_moment += df * z;
        }

        if force <= 0.0 {
            return Err(RcError::division_by_zero(
                "stress resultant over an empty region",
            ));
        }
        Ok((force, first_moment / force))
    }

    /// Pre-crack (uncracked, transformed-area) analysis.
    ///
    /// Returns the cracking moment, the curvature and neutral-axis depth
    /// of the uncracked section, and the minimum reinforcement area that
    /// gives the cracked section a Whitney-block capacity matching the
    /// cracking moment.
    pub fn before_crack(&self) -> RcResult<AnalysisResult> {
        let fc_prime = self.beam.require_fc_prime()?;
        let fy = self.beam.require_fy()?;
        let d = self.beam.require_effective_depth()?;
        let as_tension = self.beam.require_tension_area()?;
        let (as_comp, d_prime) = self.beam.compression_layer();

        let section = self.beam.section();
        let h = section.height()?;
        let n = self.beam.modular_ratio();
        let ec = self.beam.ec(Unit::Metric);
        let fr = self.beam.fr(Unit::Metric);

        // Transformed-section neutral axis
        let ac = section.gross_area()?;
        let yc = section.net_centroid()?;
        let transformed_area = ac + (n - 1.0) * (as_tension + as_comp);
        let transformed_moment =
            ac * yc + (n - 1.0) * as_tension * d + (n - 1.0) * as_comp * d_prime;
        let kd = transformed_moment / transformed_area;

        // Linear stress field pinned to fr at the tension face
        let slope = fr / (h - kd);
        let fc_top = slope * kd;
        let strain_top = fc_top / ec;

        // Concrete resultants by strip integration of the triangular field
        let (cc, y_cc) = self.integrate_linear_field(0.0, kd, |z| fc_top * (kd - z) / kd)?;
        let (tc, y_tc) = self.integrate_linear_field(kd, h, |z| slope * (z - kd))?;

        // Transformed steel forces: (n−1) accounts for displaced concrete
        let cs = (n - 1.0) * as_comp * fc_top * (kd - d_prime) / kd;
        let ts = (n - 1.0) * as_tension * slope * (d - kd);

        // Moments about the combined compression resultant
        let compression = cc + cs;
        let y_compression = (cc * y_cc + cs * d_prime) / compression;
        let cracking_moment = tc * (y_tc - y_compression) + ts * (d - y_compression);

        // Minimum reinforcement: the Whitney block depth whose capacity
        // first reaches Mcr, and the steel area in equilibrium with it
        let opts = SearchOptions {
            solver: "minimum reinforcement",
            initial: h * 0.001,
            initial_step: h * 0.001,
            tolerance: self.params().equilibrium_tolerance * cracking_moment,
            upper_bound: h,
            max_iterations: self.params().max_iterations,
        };
        let a_min = solver::solve_monotone(
            |a| {
                let (force, centroid) = self.whitney_block(a, fc_prime)?;
                Ok(force * (d - centroid) - cracking_moment)
            },
            &opts,
        )?;
        let (cc_min, _) = self.whitney_block(a_min, fc_prime)?;
        let minimum_steel_area = cc_min / fy;

        Ok(AnalysisResult {
            moment: cracking_moment,
            curvature: strain_top / kd,
            kd,
            cracking_moment: Some(cracking_moment),
            minimum_steel_area: Some(minimum_steel_area),
            balanced_steel_area: None,
        })
    }

    /// Nominal moment capacity under the chosen stress-distribution law.
    ///
    /// Searches the compression-block depth (rectangular) or neutral-axis
    /// depth (parabolic) for equilibrium between the concrete compression
    /// resultant and the tension-steel force, with steel stresses from
    /// linear strain compatibility capped at fy.
    pub fn capacity(&self, distribution: StressDistribution) -> RcResult<AnalysisResult> {
        let fc_prime = self.beam.require_fc_prime()?;
        let fy = self.beam.require_fy()?;
        let d = self.beam.require_effective_depth()?;
        let as_tension = self.beam.require_tension_area()?;
        let (_, d_prime) = self.beam.compression_layer();

        let params = self.params();
        let ecu = params.ultimate_concrete_strain;
        let h = self.beam.section().height()?;

        let opts = SearchOptions {
            solver: match distribution {
                StressDistribution::Rectangular => "rectangular capacity",
                StressDistribution::Parabolic => "parabolic capacity",
            },
            initial: d * SEED_FRACTION,
            initial_step: d * SEED_FRACTION,
            tolerance: params.equilibrium_tolerance * as_tension,
            upper_bound: h,
            max_iterations: params.max_iterations,
        };

        // Steel area in equilibrium with the compression resultants at a
        // trial neutral-axis depth; unbounded once the tension steel loses
        // its lever arm.
        let demanded_area = |kd: f64, cc: f64| -> f64 {
            let fs = self.steel_stress(ecu * (d - kd) / kd, fy);
            if fs <= 0.0 {
                return f64::INFINITY;
            }
            (cc + self.compression_steel_force(kd, fy)) / fs
        };

        let (kd, cc, block_centroid) = match distribution {
            StressDistribution::Rectangular => {
                let beta1 = params.beta1(fc_prime);
                let a = solver::solve_monotone(
                    |a| {
                        let (cc, _) = self.whitney_block(a, fc_prime)?;
                        Ok(demanded_area(a / beta1, cc) - as_tension)
                    },
                    &opts,
                )?;
                let (cc, centroid) = self.whitney_block(a, fc_prime)?;
                (a / beta1, cc, centroid)
            }
            StressDistribution::Parabolic => {
                let kd = solver::solve_monotone(
                    |kd| {
                        let (cc, _) = self.parabolic_block(kd, fc_prime)?;
                        Ok(demanded_area(kd, cc) - as_tension)
                    },
                    &opts,
                )?;
                let (cc, centroid) = self.parabolic_block(kd, fc_prime)?;
                (kd, cc, centroid)
            }
        };

        let cs = self.compression_steel_force(kd, fy);
        let moment = cc * (d - block_centroid) + cs * (d - d_prime);

        Ok(AnalysisResult {
            moment,
            curvature: ecu / kd,
            kd,
            cracking_moment: None,
            minimum_steel_area: None,
            balanced_steel_area: None,
        })
    }

    /// Balanced-condition analysis: concrete crushing and steel yield
    /// occur simultaneously.
    ///
    /// The neutral axis follows directly from strain compatibility; the
    /// compression resultant uses the requested stress-distribution law.
    pub fn balanced(&self, distribution: StressDistribution) -> RcResult<AnalysisResult> {
        let fc_prime = self.beam.require_fc_prime()?;
        let fy = self.beam.require_fy()?;
        let d = self.beam.require_effective_depth()?;
        let (_, d_prime) = self.beam.compression_layer();

        let params = self.params();
        let ecu = params.ultimate_concrete_strain;
        let es = params.steel_modulus;

        let kd = ecu * es * d / (fy + ecu * es);

        let (cc, block_centroid) = match distribution {
            StressDistribution::Rectangular => {
                self.whitney_block(params.beta1(fc_prime) * kd, fc_prime)?
            }
            StressDistribution::Parabolic => self.parabolic_block(kd, fc_prime)?,
        };
        let cs = self.compression_steel_force(kd, fy);

        let balanced_steel_area = (cc + cs) / fy;
        let moment = cc * (d - block_centroid) + cs * (d - d_prime);

        Ok(AnalysisResult {
            moment,
            curvature: ecu / kd,
            kd,
            cracking_moment: None,
            minimum_steel_area: None,
            balanced_steel_area: Some(balanced_steel_area),
        })
    }
}
