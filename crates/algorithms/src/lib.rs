//! # Partscan Algorithms
//!
//! Particle analysis algorithms for binary raster images.
//!
//! ## Available Algorithm Categories
//!
//! - **grayscale**: RGB band to gray intensity conversion
//! - **threshold**: Histogram, Otsu threshold estimation, binarization
//! - **morphology**: Dilation, erosion, closing over structuring elements
//! - **regions**: Flood fill, hole filling, connected-component labeling
//! - **shape**: Image moments, perimeter estimation, circularity
//! - **pipeline**: The full particle analysis pipeline plus visualization
//!   and reporting

pub mod grayscale;
mod maybe_rayon;
pub mod morphology;
pub mod pipeline;
pub mod regions;
pub mod shape;
pub mod threshold;

/// Background marker in binary and labeled rasters.
pub const BACKGROUND: i32 = 0;

/// Foreground marker in binary rasters prior to labeling.
pub const FOREGROUND: i32 = 1;

/// First label assigned by the connected-component labeler. Values 0 and 1
/// stay reserved for the background/foreground markers.
pub const FIRST_LABEL: i32 = 2;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::grayscale::grayscale;
    pub use crate::morphology::{
        closing, dilate, erode, Closing, Dilate, Erode, StructuringElement,
    };
    pub use crate::pipeline::{
        analyze_particles, false_color, particle_table, render_rgba, Particle, ParticleAnalysis,
        ParticleAnalysisParams, ParticleAnalyzer,
    };
    pub use crate::regions::{fill_holes, flood_fill, label_components, LabeledRegion};
    pub use crate::shape::{
        circularity, region_moments, region_perimeter, MomentStats, PERIMETER_CORRECTION,
    };
    pub use crate::threshold::{binarize, histogram, otsu_threshold, Binarize, OtsuThreshold};
    pub use crate::{BACKGROUND, FIRST_LABEL, FOREGROUND};
    pub use partscan_core::prelude::*;
}
