mod create_poly_zone;

pub use create_poly_zone::CreatePolyZone;
