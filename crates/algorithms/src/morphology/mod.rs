//! Mathematical morphology for binary rasters
//!
//! Classical morphological operations over configurable structuring
//! elements:
//! - **Dilation**: grow foreground by the element footprint
//! - **Erosion**: shrink foreground to pixels fully covered by the element
//! - **Closing**: dilation then erosion (fills small gaps and notches
//!   without changing gross blob size)

mod closing;
mod dilate;
mod element;
mod erode;

pub use closing::{closing, Closing, ClosingParams};
pub use dilate::{dilate, Dilate, DilateParams};
pub use element::StructuringElement;
pub use erode::{erode, Erode, ErodeParams};
