//! Perimeter estimation and circularity
//!
//! The perimeter is a boundary-pixel count, not an arc length: a second
//! bounded flood fill walks the labeled region and counts every pixel
//! with an out-of-bounds or differently-labeled 4-neighbor. Grid-based
//! boundary counting overestimates smooth contours, which the empirical
//! correction factor compensates.

use crate::regions::NEIGHBORS_4;
use ndarray::Array2;
use partscan_core::raster::{BoundingBox, Raster};
use std::collections::VecDeque;
use std::f64::consts::PI;

/// Empirical correction factor for grid-based boundary counting.
/// Overridable through the pipeline parameters.
pub const PERIMETER_CORRECTION: f64 = 0.95;

/// Count the boundary pixels of the region carrying `label`, starting
/// the traversal at `seed` (given as (x, y), which must belong to the
/// region).
///
/// A pixel counts as boundary when any of its 4-neighbors is out of the
/// raster bounds or carries a different value. The traversal is a
/// breadth-first fill over a visited mask local to the bounding box; the
/// raster itself is not modified.
pub fn region_perimeter(
    raster: &Raster<i32>,
    seed: (usize, usize),
    label: i32,
    bbox: &BoundingBox,
) -> usize {
    let (rows, cols) = raster.shape();
    let (sx, sy) = seed;
    if sy >= rows || sx >= cols || unsafe { raster.get_unchecked(sy, sx) } != label {
        return 0;
    }

    let mut visited = Array2::<bool>::from_elem((bbox.height(), bbox.width()), false);
    let local = |x: usize, y: usize| (y - bbox.y1, x - bbox.x1);

    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    queue.push_back((sx, sy));
    visited[local(sx, sy)] = true;

    let mut perimeter = 0;
    while let Some((cx, cy)) = queue.pop_front() {
        let mut is_boundary = false;

        for &(dx, dy) in &NEIGHBORS_4 {
            let nx = cx as isize + dx;
            let ny = cy as isize + dy;
            if nx < 0 || ny < 0 || nx >= cols as isize || ny >= rows as isize {
                is_boundary = true;
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if unsafe { raster.get_unchecked(ny, nx) } != label {
                is_boundary = true;
            } else if !visited[local(nx, ny)] {
                visited[local(nx, ny)] = true;
                queue.push_back((nx, ny));
            }
        }

        if is_boundary {
            perimeter += 1;
        }
    }

    perimeter
}

/// Shape compactness `4 * pi * area / perimeter^2`; 1.0 for a perfect
/// circle, smaller for less compact shapes. Zero perimeter yields 0.
pub fn circularity(area: usize, perimeter: f64) -> f64 {
    if perimeter <= 0.0 {
        return 0.0;
    }
    4.0 * PI * area as f64 / (perimeter * perimeter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled_rect(width: usize, height: usize, x0: usize, y0: usize) -> (Raster<i32>, BoundingBox) {
        let mut raster: Raster<i32> = Raster::new(y0 + height + 2, x0 + width + 2);
        for y in y0..y0 + height {
            for x in x0..x0 + width {
                raster.set(y, x, 2).unwrap();
            }
        }
        let bbox = BoundingBox {
            x1: x0,
            x2: x0 + width - 1,
            y1: y0,
            y2: y0 + height - 1,
        };
        (raster, bbox)
    }

    #[test]
    fn test_perimeter_rectangle() {
        let (raster, bbox) = labeled_rect(10, 6, 3, 3);
        let p = region_perimeter(&raster, (3, 3), 2, &bbox);
        // Boundary pixels of a w x h rectangle: 2w + 2h - 4
        assert_eq!(p, 28);
    }

    #[test]
    fn test_perimeter_single_pixel() {
        let mut raster: Raster<i32> = Raster::new(5, 5);
        raster.set(2, 2, 2).unwrap();
        let bbox = BoundingBox::at(2, 2);
        assert_eq!(region_perimeter(&raster, (2, 2), 2, &bbox), 1);
    }

    #[test]
    fn test_perimeter_touching_border() {
        // A 2x2 block in the corner: every pixel has an out-of-bounds
        // or background neighbor
        let mut raster: Raster<i32> = Raster::new(4, 4);
        for y in 0..2 {
            for x in 0..2 {
                raster.set(y, x, 2).unwrap();
            }
        }
        let bbox = BoundingBox { x1: 0, x2: 1, y1: 0, y2: 1 };
        assert_eq!(region_perimeter(&raster, (0, 0), 2, &bbox), 4);
    }

    #[test]
    fn test_perimeter_adjacent_region_counts_as_boundary() {
        // Two touching regions with different labels: the shared edge is
        // boundary for both
        let mut raster: Raster<i32> = Raster::new(6, 6);
        for y in 1..5 {
            raster.set(y, 2, 2).unwrap();
            raster.set(y, 3, 3).unwrap();
        }
        let bbox = BoundingBox { x1: 2, x2: 2, y1: 1, y2: 4 };
        assert_eq!(region_perimeter(&raster, (2, 1), 2, &bbox), 4);
    }

    #[test]
    fn test_perimeter_bad_seed() {
        let raster: Raster<i32> = Raster::new(4, 4);
        let bbox = BoundingBox::at(1, 1);
        assert_eq!(region_perimeter(&raster, (1, 1), 2, &bbox), 0);
    }

    #[test]
    fn test_circularity_rectangle_below_one() {
        let (raster, bbox) = labeled_rect(20, 10, 3, 3);
        let p = region_perimeter(&raster, (3, 3), 2, &bbox) as f64;
        let c = circularity(200, p);
        assert!(c < 1.0, "rectangle circularity should be < 1, got {}", c);
    }

    #[test]
    fn test_circularity_disk_near_one() {
        // Rasterized disk of radius 10
        let mut raster: Raster<i32> = Raster::new(25, 25);
        let mut bbox: Option<BoundingBox> = None;
        let mut area = 0usize;
        let mut seed = None;
        for y in 0..25isize {
            for x in 0..25isize {
                let d2 = (x - 12) * (x - 12) + (y - 12) * (y - 12);
                if d2 <= 100 {
                    raster.set(y as usize, x as usize, 2).unwrap();
                    area += 1;
                    match bbox.as_mut() {
                        Some(b) => b.update(x as usize, y as usize),
                        None => {
                            bbox = Some(BoundingBox::at(x as usize, y as usize));
                            seed = Some((x as usize, y as usize));
                        }
                    }
                }
            }
        }

        let bbox = bbox.unwrap();
        let p = region_perimeter(&raster, seed.unwrap(), 2, &bbox) as f64;
        let c = circularity(area, p);
        // Boundary-pixel counting overshoots ideal arc length, so the
        // value lands somewhat above 1 for a disk; it must stay well
        // above any elongated shape and within discretization tolerance
        assert!(
            (c - 1.0).abs() < 0.5,
            "disk circularity should be near 1, got {}",
            c
        );

        let corrected = circularity(area, p * PERIMETER_CORRECTION);
        assert!(corrected > c);
    }

    #[test]
    fn test_circularity_zero_perimeter() {
        assert_eq!(circularity(10, 0.0), 0.0);
    }
}
