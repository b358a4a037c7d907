pub mod polygon_2d;
pub mod vector2;

pub use vector2::Vector2;

/// 2D point type used for interop with `nalgebra`.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type. This is the host-side coordinate that zones are queried with.
pub type Point3 = nalgebra::Point3<f64>;

/// Per-axis tolerance used by [`Vector2`] equality.
///
/// Two vectors compare equal when both coordinate differences are strictly
/// below this value. The relation is not transitive.
pub const EQUALITY_TOLERANCE: f64 = 0.1;
