//! Registers a few polygon zones and reports which of them contain a set of
//! sample points.
//!
//! ```text
//! cargo run --example zone_check
//! RUST_LOG=polyzone=debug cargo run --example zone_check
//! ```

use polyzone::math::{Point3, Vector2};
use polyzone::operations::CreatePolyZone;
use polyzone::zone::ZoneStore;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> polyzone::Result<()> {
    // Default: WARN for everything, INFO for polyzone.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polyzone=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("zone_check=info".parse().unwrap_or_default())
        .add_directive("polyzone=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = ZoneStore::new();
    let plaza = CreatePolyZone::new(
        vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(40.0, 0.0),
            Vector2::new(40.0, 25.0),
            Vector2::new(0.0, 25.0),
        ],
        0.0,
        10.0,
    )
    .execute(&mut store)?;
    let ramp = CreatePolyZone::new(
        vec![
            Vector2::new(30.0, 10.0),
            Vector2::new(60.0, 10.0),
            Vector2::new(45.0, 40.0),
        ],
        5.0,
        20.0,
    )
    .execute(&mut store)?;
    tracing::info!(?plaza, ?ramp, zones = store.len(), "zones registered");

    let mut rng = StdRng::seed_from_u64(2024);
    let center = Vector2::new(35.0, 15.0);
    for z in [2.0, 8.0, 30.0] {
        let sample = center.around(6.0, &mut rng);
        let point = sample.to_vector3(z);
        let hits: Vec<_> = store.zones_containing(&point).collect();
        tracing::info!(point = %sample, z, ?hits, "query");
    }

    let origin = Point3::new(0.0, 0.0, 0.0);
    tracing::info!(inside = store.contains(plaza, &origin)?, "origin corner of plaza");
    Ok(())
}
