//! Connected-component labeling
//!
//! Row-major scan assigning a fresh label to every 4-connected
//! foreground blob, flood-filling labels into the raster in place.

use super::flood_fill::flood_fill;
use crate::{FIRST_LABEL, FOREGROUND};
use partscan_core::raster::{BoundingBox, Raster};
use partscan_core::{Error, Result};

/// One labeled connected component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledRegion {
    /// Label written into the raster (>= 2)
    pub label: i32,
    /// Extent of the component
    pub bbox: BoundingBox,
    /// First pixel of the component in raster scan order, as (x, y)
    pub seed: (usize, usize),
}

/// Label every 4-connected foreground component of a binary raster.
///
/// The raster is scanned row-major; each unlabeled foreground pixel
/// seeds a flood fill that stamps the next label (monotonically
/// increasing from [`FIRST_LABEL`]) over the component and tracks its
/// bounding box. Afterwards every pixel is either background or exactly
/// one label.
///
/// Components are returned in scan order of their seed pixel. Every
/// component receives its own label regardless of size; area-based
/// rejection is the pipeline's job and only affects which records are
/// kept, never the labeling itself.
///
/// Fails with [`Error::LabelCapacity`] instead of wrapping when the
/// label space is exhausted.
pub fn label_components(raster: &mut Raster<i32>) -> Result<Vec<LabeledRegion>> {
    let (rows, cols) = raster.shape();
    let mut next_label = FIRST_LABEL;
    let mut regions = Vec::new();

    for y in 0..rows {
        for x in 0..cols {
            if unsafe { raster.get_unchecked(y, x) } != FOREGROUND {
                continue;
            }
            if next_label == i32::MAX {
                return Err(Error::LabelCapacity { limit: i32::MAX });
            }
            // Seed matches FOREGROUND, so the fill cannot refuse it
            if let Some(bbox) = flood_fill(raster, x, y, FOREGROUND, next_label) {
                regions.push(LabeledRegion {
                    label: next_label,
                    bbox,
                    seed: (x, y),
                });
                next_label += 1;
            }
        }
    }

    Ok(regions)
}
