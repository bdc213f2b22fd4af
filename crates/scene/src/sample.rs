//! Demo data shipped with the map: two regions and three cities.

use foundation::geo::LatLon;
use once_cell::sync::Lazy;

use crate::features::{MapData, PointCategory, PointFeature, RegionFeature};

static SAMPLE_DATA: Lazy<MapData> = Lazy::new(build_sample_data);

/// Process-wide sample data. Built on first use, read-only afterwards.
pub fn sample_data() -> &'static MapData {
    &SAMPLE_DATA
}

fn build_sample_data() -> MapData {
    MapData::new(
        vec![
            RegionFeature::new(
                "Region A",
                50_000,
                closed_ring(&[[-10.0, 30.0], [10.0, 30.0], [10.0, 50.0], [-10.0, 50.0]]),
            ),
            RegionFeature::new(
                "Region B",
                75_000,
                closed_ring(&[[20.0, 10.0], [40.0, 10.0], [40.0, 30.0], [20.0, 30.0]]),
            ),
        ],
        vec![
            PointFeature::new("City A", PointCategory::Capital, LatLon::new(40.0, 0.0)),
            PointFeature::new("City B", PointCategory::Major, LatLon::new(20.0, 30.0)),
            PointFeature::new("City C", PointCategory::Minor, LatLon::new(35.0, -5.0)),
        ],
    )
}

// Input is `[lon, lat]` pairs.
fn closed_ring(lon_lat: &[[f64; 2]]) -> Vec<LatLon> {
    let mut ring: Vec<LatLon> = lon_lat
        .iter()
        .map(|[lon, lat]| LatLon::from_lon_lat(*lon, *lat))
        .collect();
    if let Some(first) = ring.first().copied() {
        ring.push(first);
    }
    ring
}
