//! # rcbeam_core - Reinforced-Concrete Beam Flexural Analysis Engine
//!
//! `rcbeam_core` computes the flexural behavior of a reinforced-concrete
//! beam cross-section: moment capacity, neutral-axis depth, curvature,
//! cracking moment, and minimum/balanced reinforcement, for an arbitrary
//! (possibly non-rectangular, possibly hollow) section polygon.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: each analysis borrows its inputs read-only and returns
//!   a fresh result record; nothing is cached between calls
//! - **Canonical units**: everything inside the solvers is metric
//!   (mm, mm², MPa, N·mm); conversion happens once at the model boundary
//! - **Rich errors**: structured error types, never silent NaN or zero
//! - **Bounded iteration**: every equilibrium search carries an explicit
//!   iteration bound and fails loudly on exceeding it
//!
//! ## Quick Start
//!
//! ```rust
//! use rcbeam_core::analysis::{BeamAnalyses, StressDistribution};
//! use rcbeam_core::beam_section::BeamSection;
//! use rcbeam_core::section::{Polygon, Section};
//! use rcbeam_core::steel::SteelTension;
//! use rcbeam_core::units::Unit;
//!
//! // 300x450 rectangular section
//! let main = Polygon::from_pairs(&[
//!     (0.0, 0.0),
//!     (0.0, 450.0),
//!     (300.0, 450.0),
//!     (300.0, 0.0),
//! ]).unwrap();
//!
//! let mut beam = BeamSection::new(Section::new(main));
//! beam.set_fc_prime(21.0, Unit::Metric);
//! beam.set_fy(275.0, Unit::Metric);
//! beam.set_effective_depth(400.0, Unit::Metric);
//! beam.set_steel_tension(SteelTension::new(4539.92, Unit::Metric));
//!
//! let result = BeamAnalyses::new(&beam)
//!     .capacity(StressDistribution::Rectangular)
//!     .unwrap();
//! assert!(result.kd < 400.0);
//! assert!(result.moment > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - polygon area/centroid/partial-region primitives
//! - [`section`] - polygon and hollow-section model
//! - [`steel`] - reinforcement layers
//! - [`beam_section`] - section + material aggregate
//! - [`analysis`] - the flexural solvers and their result record
//! - [`code`] - named code-provision constants
//! - [`units`] - unit-system conversion boundary
//! - [`errors`] - structured error types

pub mod analysis;
pub mod beam_section;
pub mod code;
pub mod errors;
pub mod geometry;
pub mod section;
pub mod steel;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use analysis::{AnalysisResult, BeamAnalyses, StressDistribution};
pub use beam_section::BeamSection;
pub use code::CodeParameters;
pub use errors::{RcError, RcResult};
pub use geometry::Point;
pub use section::{Polygon, Section};
pub use steel::{SteelCompression, SteelTension};
pub use units::Unit;
