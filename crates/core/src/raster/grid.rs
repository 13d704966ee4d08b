//! Main Raster type

use crate::error::{Error, Result};
use crate::raster::RasterElement;
use ndarray::{Array2, ArrayView2, ArrayViewMut2};

/// A 2D raster grid of pixel values.
///
/// `Raster<T>` stores values of type `T` in a row-major 2D grid. Gray
/// images use `u8` (intensity 0..=255); binary and labeled rasters use
/// `i32` (0 = background, 1 = foreground, labels from 2 upward).
///
/// # Type Parameters
///
/// - `T`: The pixel value type, must implement [`RasterElement`]
///
/// # Example
///
/// ```ignore
/// use partscan_core::Raster;
///
/// // Create a 100x100 raster filled with zeros
/// let mut raster: Raster<u8> = Raster::new(100, 100);
///
/// // Set a value
/// raster.set(10, 20, 42)?;
///
/// // Get a value
/// let value = raster.get(10, 20)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Raster<T: RasterElement> {
    /// Raster data stored in row-major order (row, col)
    data: Array2<T>,
}

impl<T: RasterElement> Raster<T> {
    /// Create a new raster filled with zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Create a new raster filled with a specific value
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), value),
        }
    }

    /// Create a raster from existing row-major data
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self { data: array })
    }

    /// Create a raster from an ndarray
    pub fn from_array(data: Array2<T>) -> Self {
        Self { data }
    }

    /// Create a zeroed raster of the same dimensions but a different pixel type
    pub fn with_same_shape<U: RasterElement>(&self) -> Raster<U> {
        Raster {
            data: Array2::zeros(self.data.dim()),
        }
    }

    /// Create a raster with the same dimensions, filled with a value
    pub fn like(&self, fill_value: T) -> Self {
        Self {
            data: Array2::from_elem(self.data.dim(), fill_value),
        }
    }

    // Dimensions

    /// Number of rows (image height)
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns (image width)
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the raster is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Get value at (row, col) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure row < self.rows() and col < self.cols()
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> T {
        unsafe { *self.data.uget((row, col)) }
    }

    /// Set value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Set value at (row, col) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure row < self.rows() and col < self.cols()
    pub unsafe fn set_unchecked(&mut self, row: usize, col: usize, value: T) {
        unsafe {
            *self.data.uget_mut((row, col)) = value;
        }
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }

    /// Get a mutable view of the underlying data
    pub fn view_mut(&mut self) -> ArrayViewMut2<'_, T> {
        self.data.view_mut()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    /// Get a mutable reference to the underlying array
    pub fn data_mut(&mut self) -> &mut Array2<T> {
        &mut self.data
    }

    /// Consume the raster and return the underlying array
    pub fn into_array(self) -> Array2<T> {
        self.data
    }

    /// Count pixels equal to a given value
    pub fn count_value(&self, value: T) -> usize {
        self.data.iter().filter(|&&v| v == value).count()
    }
}
