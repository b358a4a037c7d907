use slotmap::SlotMap;

use crate::error::ZoneError;
use crate::math::Point3;

use super::{ColShape, PolygonZone};

slotmap::new_key_type! {
    /// Unique identifier for a zone in a [`ZoneStore`].
    pub struct ZoneId;
}

/// Something that accepts newly built zones and hands back a handle.
///
/// Host simulations implement this to take ownership of zones created by
/// [`crate::operations::CreatePolyZone`].
pub trait ZoneRegistrar {
    /// Handle returned for a registered zone.
    type Handle;

    /// Takes ownership of `zone` and returns a handle to it.
    fn register_zone(&mut self, zone: PolygonZone) -> Self::Handle;
}

/// Arena that owns registered zones.
///
/// Zones are referenced by generational [`ZoneId`]s, so a stale id from a
/// removed zone never aliases a newer one. Point queries scan every zone.
#[derive(Debug, Default)]
pub struct ZoneStore {
    zones: SlotMap<ZoneId, PolygonZone>,
}

impl ZoneStore {
    /// Creates a new, empty zone store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns `true` if no zones are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Returns a reference to the zone, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `ZoneError::ZoneNotFound` if the id is unknown or was removed.
    pub fn zone(&self, id: ZoneId) -> Result<&PolygonZone, ZoneError> {
        self.zones.get(id).ok_or(ZoneError::ZoneNotFound)
    }

    /// Removes a zone and returns it.
    ///
    /// # Errors
    ///
    /// Returns `ZoneError::ZoneNotFound` if the id is unknown or was removed.
    pub fn remove(&mut self, id: ZoneId) -> Result<PolygonZone, ZoneError> {
        let zone = self.zones.remove(id).ok_or(ZoneError::ZoneNotFound)?;
        tracing::debug!(?id, "removed polygon zone");
        Ok(zone)
    }

    /// Iterates over all registered zones.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneId, &PolygonZone)> {
        self.zones.iter()
    }

    /// Returns `true` if the zone `id` contains `point`.
    ///
    /// # Errors
    ///
    /// Returns `ZoneError::ZoneNotFound` if the id is unknown or was removed.
    pub fn contains(&self, id: ZoneId, point: &Point3) -> Result<bool, ZoneError> {
        self.zone(id).map(|zone| ColShape::contains(zone, point))
    }

    /// Ids of every zone that contains `point`.
    pub fn zones_containing<'a>(&'a self, point: &'a Point3) -> impl Iterator<Item = ZoneId> + 'a {
        self.zones
            .iter()
            .filter(move |(_, zone)| ColShape::contains(*zone, point))
            .map(|(id, _)| {
                tracing::trace!(?id, "point inside zone");
                id
            })
    }
}

impl ZoneRegistrar for ZoneStore {
    type Handle = ZoneId;

    fn register_zone(&mut self, zone: PolygonZone) -> ZoneId {
        let id = self.zones.insert(zone);
        tracing::debug!(?id, "registered polygon zone");
        id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector2;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn square(min: f64, max: f64, base_z: f64, height: f64) -> PolygonZone {
        PolygonZone::new(
            vec![
                Vector2::new(min, min),
                Vector2::new(max, min),
                Vector2::new(max, max),
                Vector2::new(min, max),
            ],
            base_z,
            height,
        )
        .unwrap()
    }

    #[test]
    fn register_and_lookup() {
        let mut store = ZoneStore::new();
        assert!(store.is_empty());
        let id = store.register_zone(square(0.0, 10.0, 0.0, 5.0));
        assert_eq!(store.len(), 1);
        assert_eq!(store.zone(id).unwrap().vertices().len(), 4);
        assert!(store.contains(id, &p(5.0, 5.0, 2.0)).unwrap());
        assert!(!store.contains(id, &p(5.0, 5.0, 6.0)).unwrap());
    }

    #[test]
    fn removed_zone_is_not_found() {
        let mut store = ZoneStore::new();
        let id = store.register_zone(square(0.0, 10.0, 0.0, 5.0));
        store.remove(id).unwrap();
        assert_eq!(store.zone(id).unwrap_err(), ZoneError::ZoneNotFound);
        assert_eq!(store.remove(id).unwrap_err(), ZoneError::ZoneNotFound);
        assert!(store.contains(id, &p(5.0, 5.0, 2.0)).is_err());
    }

    #[test]
    fn stale_id_does_not_alias_new_zone() {
        let mut store = ZoneStore::new();
        let old = store.register_zone(square(0.0, 10.0, 0.0, 5.0));
        store.remove(old).unwrap();
        let new = store.register_zone(square(20.0, 30.0, 0.0, 5.0));
        assert_ne!(old, new);
        assert!(store.zone(old).is_err());
        assert!(store.zone(new).is_ok());
    }

    #[test]
    fn zones_containing_overlapping() {
        let mut store = ZoneStore::new();
        let big = store.register_zone(square(0.0, 10.0, 0.0, 5.0));
        let small = store.register_zone(square(4.0, 6.0, 0.0, 1.0));
        let far = store.register_zone(square(50.0, 60.0, 0.0, 5.0));

        let hits: Vec<ZoneId> = store.zones_containing(&p(5.0, 5.0, 0.5)).collect();
        assert_eq!(hits.len(), 2);
        assert!(hits.contains(&big) && hits.contains(&small));
        assert!(!hits.contains(&far));

        let high = p(5.0, 5.0, 3.0);
        let hits: Vec<ZoneId> = store.zones_containing(&high).collect();
        assert_eq!(hits, vec![big]);

        assert_eq!(store.zones_containing(&p(-5.0, 0.0, 0.0)).count(), 0);
    }

    #[test]
    fn iter_visits_every_zone() {
        let mut store = ZoneStore::new();
        store.register_zone(square(0.0, 1.0, 0.0, 1.0));
        store.register_zone(square(2.0, 3.0, 0.0, 1.0));
        assert_eq!(store.iter().count(), 2);
    }
}
