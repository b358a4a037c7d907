use crate::error::{Result, ZoneError};
use crate::math::polygon_2d::{point_in_polygon_even_odd, signed_area};
use crate::math::{Point3, Vector2};

use super::ColShape;

/// A vertically extruded polygon: the prism between `base_z` and
/// `base_z + height` over a planar polygon.
///
/// Vertices are kept in the order given and may wind either way. The zone
/// never changes after construction.
#[derive(Debug, Clone)]
pub struct PolygonZone {
    vertices: Vec<Vector2>,
    base_z: f64,
    height: f64,
}

impl PolygonZone {
    /// Minimum number of vertices a zone polygon needs.
    pub const MIN_VERTICES: usize = 3;

    /// Creates a new zone.
    ///
    /// Collinear or repeated vertices are accepted. A negative `height` is
    /// accepted as well and produces a zone that contains nothing.
    ///
    /// # Errors
    ///
    /// Returns `ZoneError::InsufficientVertices` if fewer than 3 vertices are given.
    pub fn new(vertices: impl Into<Vec<Vector2>>, base_z: f64, height: f64) -> Result<Self> {
        let vertices = vertices.into();
        if vertices.len() < Self::MIN_VERTICES {
            return Err(ZoneError::InsufficientVertices {
                count: vertices.len(),
            }
            .into());
        }
        if height < 0.0 {
            tracing::warn!(height, "polygon zone has negative height and will contain no points");
        }
        tracing::debug!(
            vertices = vertices.len(),
            base_z,
            height,
            "created polygon zone"
        );
        Ok(Self {
            vertices,
            base_z,
            height,
        })
    }

    /// Returns the polygon vertices in traversal order.
    #[must_use]
    pub fn vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    /// Returns the lower bound of the vertical slab.
    #[must_use]
    pub fn base_z(&self) -> f64 {
        self.base_z
    }

    /// Returns the extent of the slab above `base_z`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the upper bound of the vertical slab.
    #[must_use]
    pub fn top_z(&self) -> f64 {
        self.base_z + self.height
    }

    /// Unsigned footprint area of the polygon. Self-intersecting polygons
    /// report the shoelace value, not the covered area.
    #[must_use]
    pub fn footprint_area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }

    /// Returns `true` if `point` lies inside the prism.
    ///
    /// The z range is closed on both ends. Inside that range the point is
    /// projected onto the XY plane and tested with [`Self::contains_2d`].
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        if point.z < self.base_z || point.z > self.top_z() {
            return false;
        }
        self.contains_2d(&Vector2::from_point3(point))
    }

    /// Even-odd test of `point` against the polygon footprint.
    ///
    /// Results for points exactly on an edge or vertex follow from the
    /// ray-casting comparisons and are not special-cased.
    #[must_use]
    pub fn contains_2d(&self, point: &Vector2) -> bool {
        point_in_polygon_even_odd(point, &self.vertices)
    }
}

impl ColShape for PolygonZone {
    fn contains(&self, point: &Point3) -> bool {
        PolygonZone::contains(self, point)
    }
}
