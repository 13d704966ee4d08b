//! Image moments over a labeled region
//!
//! Single pass over the bounding box accumulating first and second order
//! coordinate sums, from which centroid, central moments, orientation
//! and eccentricity follow.

use partscan_core::raster::{BoundingBox, Raster};

/// Moment-derived descriptors of one labeled region.
///
/// Eccentricity uses the ellipse-axis definition: major/minor axis
/// lengths are derived from the central moments and
/// `ecc = sqrt(1 - minor^2 / major^2)`, giving 0 for a circle and
/// approaching 1 for elongated shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentStats {
    /// Pixel count of the region
    pub area: usize,
    /// Center of mass as (x, y), real-valued
    pub centroid: (f64, f64),
    /// Central second moment in x
    pub mu20: f64,
    /// Central second moment in y
    pub mu02: f64,
    /// Mixed central second moment
    pub mu11: f64,
    /// Major axis angle in radians, in (-pi/2, pi/2]
    pub orientation: f64,
    /// Unitless elongation measure in [0, 1)
    pub eccentricity: f64,
}

impl MomentStats {
    /// All-zero descriptors for a degenerate (empty) region
    fn zero() -> Self {
        Self {
            area: 0,
            centroid: (0.0, 0.0),
            mu20: 0.0,
            mu02: 0.0,
            mu11: 0.0,
            orientation: 0.0,
            eccentricity: 0.0,
        }
    }
}

/// Compute moment descriptors for the pixels carrying `label` inside
/// `bbox`.
///
/// A region with no matching pixels short-circuits to all-zero stats;
/// no division by zero can occur.
pub fn region_moments(raster: &Raster<i32>, bbox: &BoundingBox, label: i32) -> MomentStats {
    let mut sum_x: i64 = 0;
    let mut sum_y: i64 = 0;
    let mut sum_x2: i64 = 0;
    let mut sum_y2: i64 = 0;
    let mut sum_xy: i64 = 0;
    let mut count: usize = 0;

    for y in bbox.y1..=bbox.y2 {
        for x in bbox.x1..=bbox.x2 {
            if unsafe { raster.get_unchecked(y, x) } != label {
                continue;
            }
            let (xi, yi) = (x as i64, y as i64);
            sum_x += xi;
            sum_y += yi;
            sum_x2 += xi * xi;
            sum_y2 += yi * yi;
            sum_xy += xi * yi;
            count += 1;
        }
    }

    if count == 0 {
        return MomentStats::zero();
    }

    let n = count as f64;
    let cx = sum_x as f64 / n;
    let cy = sum_y as f64 / n;

    let mu20 = sum_x2 as f64 / n - cx * cx;
    let mu02 = sum_y2 as f64 / n - cy * cy;
    let mu11 = sum_xy as f64 / n - cx * cy;

    let orientation = 0.5 * (2.0 * mu11).atan2(mu20 - mu02);

    let common = ((mu20 - mu02) * (mu20 - mu02) + 4.0 * mu11 * mu11).sqrt();
    let major_sq = 2.0 * (mu20 + mu02 + common);
    let minor_sq = (2.0 * (mu20 + mu02 - common)).max(0.0);
    let eccentricity = if major_sq > 0.0 {
        (1.0 - minor_sq / major_sq).max(0.0).sqrt()
    } else {
        0.0
    };

    MomentStats {
        area: count,
        centroid: (cx, cy),
        mu20,
        mu02,
        mu11,
        orientation,
        eccentricity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

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
    fn test_moments_rectangle_centroid() {
        let (raster, bbox) = labeled_rect(20, 10, 5, 10);
        let stats = region_moments(&raster, &bbox, 2);

        assert_eq!(stats.area, 200);
        assert!((stats.centroid.0 - 14.5).abs() < 1e-9);
        assert!((stats.centroid.1 - 14.5).abs() < 1e-9);
    }

    #[test]
    fn test_moments_wide_rectangle_orientation() {
        let (raster, bbox) = labeled_rect(20, 10, 2, 2);
        let stats = region_moments(&raster, &bbox, 2);

        // Major axis along x
        assert!(stats.orientation.abs() < 1e-6);
        assert!(stats.mu20 > stats.mu02);
    }

    #[test]
    fn test_moments_tall_rectangle_orientation() {
        let (raster, bbox) = labeled_rect(10, 20, 2, 2);
        let stats = region_moments(&raster, &bbox, 2);

        // Major axis along y
        assert!((stats.orientation.abs() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_moments_eccentricity_tracks_aspect_ratio() {
        let (r1, b1) = labeled_rect(10, 10, 2, 2);
        let (r2, b2) = labeled_rect(14, 10, 2, 2);
        let (r3, b3) = labeled_rect(20, 10, 2, 2);

        let square = region_moments(&r1, &b1, 2).eccentricity;
        let mild = region_moments(&r2, &b2, 2).eccentricity;
        let wide = region_moments(&r3, &b3, 2).eccentricity;

        assert!(square < 1e-3);
        assert!(mild > square);
        assert!(wide > mild);
        assert!(wide < 1.0);
    }

    #[test]
    fn test_moments_single_pixel() {
        let mut raster: Raster<i32> = Raster::new(5, 5);
        raster.set(2, 3, 2).unwrap();
        let bbox = BoundingBox::at(3, 2);

        let stats = region_moments(&raster, &bbox, 2);
        assert_eq!(stats.area, 1);
        assert_eq!(stats.centroid, (3.0, 2.0));
        assert_eq!(stats.eccentricity, 0.0);
        assert_eq!(stats.orientation, 0.0);
    }

    #[test]
    fn test_moments_empty_region() {
        let raster: Raster<i32> = Raster::new(5, 5);
        let bbox = BoundingBox::at(1, 1);

        let stats = region_moments(&raster, &bbox, 2);
        assert_eq!(stats.area, 0);
        assert_eq!(stats.centroid, (0.0, 0.0));
        assert_eq!(stats.eccentricity, 0.0);
    }
}
