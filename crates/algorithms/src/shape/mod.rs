//! Shape descriptors for labeled components
//!
//! Second-order image moments (centroid, orientation, eccentricity) and
//! a flood-fill perimeter estimate, combined into circularity.

mod moments;
mod perimeter;

pub use moments::{region_moments, MomentStats};
pub use perimeter::{circularity, region_perimeter, PERIMETER_CORRECTION};
