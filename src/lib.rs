//! Polygonal prism zones.
//!
//! A [`zone::PolygonZone`] is a planar polygon extruded between a base
//! elevation and `base + height`. Zones answer "is this point inside" with a
//! closed z-range check followed by an even-odd point-in-polygon test on the
//! XY projection.

pub mod error;
pub mod math;
pub mod operations;
pub mod zone;

pub use error::{PolyzoneError, Result};
