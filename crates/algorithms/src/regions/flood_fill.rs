//! Queue-based flood fill

use super::NEIGHBORS_4;
use partscan_core::raster::{BoundingBox, Raster};
use std::collections::VecDeque;

/// Flood-fill the 4-connected region of `target` values containing the
/// seed `(x, y)`, replacing them with `replacement`.
///
/// Expansion is breadth-first over an explicit queue. Every visited pixel
/// updates the returned bounding box. Returns `None` without touching the
/// raster when the seed is out of bounds, does not carry `target`, or
/// `target == replacement` (which would loop forever).
pub fn flood_fill(
    raster: &mut Raster<i32>,
    x: usize,
    y: usize,
    target: i32,
    replacement: i32,
) -> Option<BoundingBox> {
    if target == replacement {
        return None;
    }
    let (rows, cols) = raster.shape();
    if y >= rows || x >= cols {
        return None;
    }
    if unsafe { raster.get_unchecked(y, x) } != target {
        return None;
    }

    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    queue.push_back((x, y));
    unsafe { raster.set_unchecked(y, x, replacement) };
    let mut bbox = BoundingBox::at(x, y);

    while let Some((cx, cy)) = queue.pop_front() {
        for &(dx, dy) in &NEIGHBORS_4 {
            let nx = cx as isize + dx;
            let ny = cy as isize + dy;
            if nx < 0 || ny < 0 || nx >= cols as isize || ny >= rows as isize {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if unsafe { raster.get_unchecked(ny, nx) } == target {
                queue.push_back((nx, ny));
                unsafe { raster.set_unchecked(ny, nx, replacement) };
                bbox.update(nx, ny);
            }
        }
    }

    Some(bbox)
}
