//! Benchmark support utilities for the greedy planner.
//!
//! Provides deterministic, clustered POI sets around a town centre so runs
//! are reproducible.

use geo::Coord;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ramble_core::PointOfInterest;
use ramble_core::distance::lat_lng;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Start location shared by every benchmark request.
pub const TOWN_CENTRE: Coord<f64> = lat_lng(54.4025, -1.7367);

/// Tags cycled through when labelling generated POIs.
const TAGS: [&str; 4] = ["history", "nature", "haunted", "arts"];

/// Number of cluster centres.
const CLUSTER_COUNT: usize = 5;

/// Half-width of each cluster in degrees (roughly 300 m of latitude).
const CLUSTER_SPREAD: f64 = 0.003;

/// Half-width of the area holding cluster centres in degrees.
const AREA_SPREAD: f64 = 0.02;

/// Generate `count` POIs grouped into a handful of clusters.
#[must_use]
pub fn generate_clustered_pois(count: usize, seed: u64) -> Vec<PointOfInterest> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let centres: Vec<Coord<f64>> = (0..CLUSTER_COUNT)
        .map(|_| offset(TOWN_CENTRE, &mut rng, AREA_SPREAD))
        .collect();

    (0..count)
        .map(|i| {
            #[expect(
                clippy::integer_division_remainder_used,
                reason = "Modulo for cyclic assignment is intentional"
            )]
            let (cluster_idx, tag_idx) = (i % CLUSTER_COUNT, i % TAGS.len());
            let centre = centres.get(cluster_idx).copied().unwrap_or(TOWN_CENTRE);
            let tag = TAGS.get(tag_idx).copied().unwrap_or("history");
            PointOfInterest::new(format!("poi-{i}"), format!("POI {i}"), offset(centre, &mut rng, CLUSTER_SPREAD))
                .with_tags([tag])
        })
        .collect()
}

#[expect(clippy::float_arithmetic, reason = "Required for coordinate offset")]
fn offset(centre: Coord<f64>, rng: &mut ChaCha8Rng, spread: f64) -> Coord<f64> {
    let dx: f64 = rng.gen_range(-spread..spread);
    let dy: f64 = rng.gen_range(-spread..spread);
    Coord {
        x: centre.x + dx,
        y: centre.y + dy,
    }
}
