//! Border-seeded hole filling
//!
//! Background pixels enclosed by foreground (topological holes) become
//! foreground; background connected to the image border is left alone.

use super::flood_fill::flood_fill;
use crate::{BACKGROUND, FOREGROUND};
use partscan_core::raster::Raster;
use partscan_core::{Algorithm, Error, Result};

/// Temporary marker for border-connected background, distinct from both
/// binary values and from all labels.
const OUTSIDE_MARKER: i32 = -1;

/// Parameters for hole filling (none)
#[derive(Debug, Clone, Default)]
pub struct FillHolesParams;

/// Hole filling algorithm
#[derive(Debug, Clone, Default)]
pub struct FillHoles;

impl Algorithm for FillHoles {
    type Input = Raster<i32>;
    type Output = Raster<i32>;
    type Params = FillHolesParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "FillHoles"
    }

    fn description(&self) -> &'static str {
        "Fill background holes fully enclosed by foreground"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        let mut raster = input;
        fill_holes(&mut raster);
        Ok(raster)
    }
}

/// Fill interior background holes of a two-valued raster in place.
///
/// Three passes: (1) flood-fill background reachable from any border
/// pixel into a temporary marker, (2) flood-fill the background pixels
/// that remain (the enclosed holes) to foreground, (3) revert the marker
/// to background. Runs in O(border length + image area).
pub fn fill_holes(raster: &mut Raster<i32>) {
    let (rows, cols) = raster.shape();
    if rows == 0 || cols == 0 {
        return;
    }

    // Mark background reachable from outside
    for y in 0..rows {
        flood_fill(raster, 0, y, BACKGROUND, OUTSIDE_MARKER);
        flood_fill(raster, cols - 1, y, BACKGROUND, OUTSIDE_MARKER);
    }
    for x in 0..cols {
        flood_fill(raster, x, 0, BACKGROUND, OUTSIDE_MARKER);
        flood_fill(raster, x, rows - 1, BACKGROUND, OUTSIDE_MARKER);
    }

    // Remaining background is enclosed: turn it into foreground
    for y in 0..rows {
        for x in 0..cols {
            if unsafe { raster.get_unchecked(y, x) } == BACKGROUND {
                flood_fill(raster, x, y, BACKGROUND, FOREGROUND);
            }
        }
    }

    // Revert the marker
    for v in raster.data_mut().iter_mut() {
        if *v == OUTSIDE_MARKER {
            *v = BACKGROUND;
        }
    }
}
