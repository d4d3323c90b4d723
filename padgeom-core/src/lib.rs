//! Contour geometry for detector readout pad groups.
//!
//! Pad group footprints, sets of unit grid cells, are outlined by [`ContourBuilder`] as Manhattan
//! [`Polygon`]s, memoized per pad group type in a [`ContourCache`], then scaled to physical pad sizes and
//! placed by [`Segmentation`].

#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

// Organized modules
pub mod contour;
pub mod error;
pub mod geometry;
pub mod mapping;
pub mod segmentation;

pub use geometry::bbox;
pub use geometry::polygon;
pub use geometry::vertex;

// Re-export key types for external use
pub use contour::builder::{build_contour, ContourBuilder};
pub use contour::cache::{Contour, ContourCache};
pub use error::{ContourError, ErrorKind};
pub use mapping::catalog::Catalog;
pub use mapping::pad::{PadCell, PadGroup, PadGroupType, PadSize};
pub use polygon::{close, Polygon};
pub use segmentation::{build_segmentations, Segmentation, SegmentationDef};
pub use vertex::Vertex;

