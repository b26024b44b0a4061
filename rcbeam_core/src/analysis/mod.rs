//! # Flexural Analyses
//!
//! The analysis engine for a reinforced-concrete beam section. Each
//! analysis follows the pattern:
//!
//! - borrow a [`BeamSection`](crate::beam_section::BeamSection) read-only,
//! - run one bounded equilibrium search (or a closed form),
//! - return an immutable [`AnalysisResult`].
//!
//! No solver state survives between calls: running the same analysis twice
//! on unchanged inputs returns bit-identical results.
//!
//! ## Available analyses
//!
//! - [`BeamAnalyses::before_crack`] - uncracked transformed-section stage:
//!   cracking moment and minimum reinforcement
//! - [`BeamAnalyses::capacity`] - nominal moment capacity under a chosen
//!   stress-distribution law
//! - [`BeamAnalyses::balanced`] - balanced-condition neutral axis and
//!   steel area

pub mod flexure;
pub mod result;
mod solver;

use serde::{Deserialize, Serialize};

pub use flexure::BeamAnalyses;
pub use result::AnalysisResult;

/// Concrete stress-distribution law for capacity and balanced analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StressDistribution {
    /// Whitney equivalent rectangular stress block, depth β₁·kd
    #[default]
    Rectangular,
    /// Hognestad second-degree parabola, integrated numerically
    Parabolic,
}

impl StressDistribution {
    pub const ALL: [StressDistribution; 2] =
        [StressDistribution::Rectangular, StressDistribution::Parabolic];

    pub fn display_name(&self) -> &'static str {
        match self {
            StressDistribution::Rectangular => "Rectangular (Whitney)",
            StressDistribution::Parabolic => "Parabolic (Hognestad)",
        }
    }
}

impl std::fmt::Display for StressDistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
