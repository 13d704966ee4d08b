//! The particle analysis pipeline
//!
//! Sequences threshold estimation, binarization, morphological closing,
//! hole filling, labeling and shape description into a single run, and
//! renders the result for inspection.

mod analyze;
mod report;
mod visualize;

pub use analyze::{
    analyze_particles, Particle, ParticleAnalysis, ParticleAnalysisParams, ParticleAnalyzer,
};
pub use report::particle_table;
pub use visualize::{false_color, render_rgba};
