use crate::math::Point3;

/// A region of 3D space that can answer point containment queries.
///
/// Implementations must be pure: a query has no side effects and the same
/// point always yields the same answer.
pub trait ColShape: Send + Sync {
    /// Returns `true` if `point` lies inside the shape.
    fn contains(&self, point: &Point3) -> bool;
}
