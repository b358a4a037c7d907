pub mod polygon;
pub mod shape;
pub mod store;

pub use polygon::PolygonZone;
pub use shape::ColShape;
pub use store::{ZoneId, ZoneRegistrar, ZoneStore};
