//! Connected-region operations on binary and labeled rasters
//!
//! Queue-based 4-neighbor flood fill, border-seeded hole filling, and
//! connected-component labeling with live bounding-box tracking. All
//! expansion uses an explicit worklist; recursion would overflow the
//! stack on large regions.

mod fill_holes;
mod flood_fill;
mod label;

pub use fill_holes::{fill_holes, FillHoles, FillHolesParams};
pub use flood_fill::flood_fill;
pub use label::{label_components, LabeledRegion};

/// 4-connected neighbor offsets as (dx, dy)
pub(crate) const NEIGHBORS_4: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
