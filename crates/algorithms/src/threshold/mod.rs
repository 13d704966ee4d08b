//! Intensity thresholding
//!
//! Histogram statistics, Otsu's optimal threshold search with a
//! foreground polarity heuristic, and binarization of gray rasters.

mod binarize;
mod histogram;
mod otsu;

pub use binarize::{binarize, Binarize, BinarizeParams};
pub use histogram::{histogram, HISTOGRAM_BINS};
pub use otsu::{otsu_threshold, OtsuThreshold};
