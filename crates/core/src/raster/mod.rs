//! Raster data structures and operations

mod bbox;
mod element;
mod grid;

pub use bbox::BoundingBox;
pub use element::RasterElement;
pub use grid::Raster;
