use crate::error::{Result, ZoneError};
use crate::math::{Point3, Vector2};
use crate::zone::{PolygonZone, ZoneRegistrar};

/// Builds a [`PolygonZone`] and registers it with a host.
pub struct CreatePolyZone {
    points: Vec<Vector2>,
    base_z: f64,
    height: f64,
}

impl CreatePolyZone {
    /// Creates a new `CreatePolyZone` operation.
    #[must_use]
    pub fn new(points: Vec<Vector2>, base_z: f64, height: f64) -> Self {
        Self {
            points,
            base_z,
            height,
        }
    }

    /// Creates the operation from host 3D points, dropping their z coordinate.
    #[must_use]
    pub fn from_points3(points: &[Point3], base_z: f64, height: f64) -> Self {
        Self::new(points.iter().map(Vector2::from_point3).collect(), base_z, height)
    }

    /// Appends a vertex to the outline.
    #[must_use]
    pub fn with_point(mut self, point: Vector2) -> Self {
        self.points.push(point);
        self
    }

    /// Builds the zone without registering it.
    ///
    /// # Errors
    ///
    /// Returns `ZoneError::InsufficientVertices` if fewer than 3 points were given.
    pub fn build(&self) -> Result<PolygonZone> {
        if self.points.len() < PolygonZone::MIN_VERTICES {
            return Err(ZoneError::InsufficientVertices {
                count: self.points.len(),
            }
            .into());
        }
        PolygonZone::new(self.points.clone(), self.base_z, self.height)
    }

    /// Executes the operation, registering the zone with `registrar`.
    ///
    /// Nothing is registered when validation fails.
    ///
    /// # Errors
    ///
    /// Returns `ZoneError::InsufficientVertices` if fewer than 3 points were given.
    pub fn execute<R: ZoneRegistrar>(&self, registrar: &mut R) -> Result<R::Handle> {
        let zone = self.build()?;
        Ok(registrar.register_zone(zone))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolyzoneError;
    use crate::zone::ZoneStore;

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    /// Registrar that only records what it was given.
    #[derive(Default)]
    struct Recorder {
        zones: Vec<PolygonZone>,
    }

    impl ZoneRegistrar for Recorder {
        type Handle = usize;

        fn register_zone(&mut self, zone: PolygonZone) -> usize {
            self.zones.push(zone);
            self.zones.len() - 1
        }
    }

    #[test]
    fn registers_with_store() {
        let mut store = ZoneStore::new();
        let id = CreatePolyZone::new(vec![v(0.0, 0.0), v(4.0, 0.0), v(0.0, 4.0)], 0.0, 2.0)
            .execute(&mut store)
            .unwrap();
        assert!(store.contains(id, &Point3::new(1.0, 1.0, 1.0)).unwrap());
    }

    #[test]
    fn registers_with_custom_registrar() {
        let mut recorder = Recorder::default();
        let op = CreatePolyZone::new(Vec::new(), 1.0, 2.0)
            .with_point(v(0.0, 0.0))
            .with_point(v(1.0, 0.0))
            .with_point(v(1.0, 1.0));
        assert_eq!(op.execute(&mut recorder).unwrap(), 0);
        assert_eq!(op.execute(&mut recorder).unwrap(), 1);
        assert_eq!(recorder.zones.len(), 2);
    }

    #[test]
    fn too_few_points_registers_nothing() {
        let mut recorder = Recorder::default();
        let err = CreatePolyZone::new(vec![v(0.0, 0.0), v(1.0, 0.0)], 0.0, 1.0)
            .execute(&mut recorder)
            .unwrap_err();
        assert!(matches!(
            err,
            PolyzoneError::Zone(ZoneError::InsufficientVertices { count: 2 })
        ));
        assert!(recorder.zones.is_empty());
    }

    #[test]
    fn from_points3_drops_z() {
        let pts = [
            Point3::new(0.0, 0.0, 100.0),
            Point3::new(10.0, 0.0, -3.0),
            Point3::new(10.0, 10.0, 7.0),
        ];
        let zone = CreatePolyZone::from_points3(&pts, 0.0, 1.0).build().unwrap();
        assert_eq!(zone.vertices()[2], v(10.0, 10.0));
        assert!(zone.contains(&Point3::new(9.0, 1.0, 0.5)));
    }
}
