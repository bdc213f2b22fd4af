use serde::{Deserialize, Serialize};

pub const MAX_LATITUDE_DEG: f64 = 90.0;
pub const MAX_LONGITUDE_DEG: f64 = 180.0;

/// Geographic position in WGS84 degrees.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build from GeoJSON-ordered `[lon, lat]` coordinates.
    pub const fn from_lon_lat(lon: f64, lat: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    pub fn lat_in_range(&self) -> bool {
        (-MAX_LATITUDE_DEG..=MAX_LATITUDE_DEG).contains(&self.lat)
    }

    pub fn lon_in_range(&self) -> bool {
        (-MAX_LONGITUDE_DEG..=MAX_LONGITUDE_DEG).contains(&self.lon)
    }

    /// Planar distance in degrees. Good enough for hit tolerances at map scale.
    pub fn degree_distance(&self, other: LatLon) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}

/// Even-odd point-in-polygon test on a single ring.
///
/// The ring may or may not repeat its first vertex at the end.
pub fn ring_contains(ring: &[LatLon], p: LatLon) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[j];
        if (a.lat > p.lat) != (b.lat > p.lat) {
            let x = (b.lon - a.lon) * (p.lat - a.lat) / (b.lat - a.lat) + a.lon;
            if p.lon < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::{LatLon, ring_contains};

    fn square() -> Vec<LatLon> {
        vec![
            LatLon::from_lon_lat(-10.0, 30.0),
            LatLon::from_lon_lat(10.0, 30.0),
            LatLon::from_lon_lat(10.0, 50.0),
            LatLon::from_lon_lat(-10.0, 50.0),
            LatLon::from_lon_lat(-10.0, 30.0),
        ]
    }

    #[test]
    fn lon_lat_order_is_swapped_into_fields() {
        let p = LatLon::from_lon_lat(15.0, 35.0);
        assert_eq!(p.lat, 35.0);
        assert_eq!(p.lon, 15.0);
    }

    #[test]
    fn range_checks() {
        assert!(LatLon::new(90.0, -180.0).lat_in_range());
        assert!(LatLon::new(90.0, -180.0).lon_in_range());
        assert!(!LatLon::new(90.5, 0.0).lat_in_range());
        assert!(!LatLon::new(0.0, 181.0).lon_in_range());
        assert!(!LatLon::new(f64::NAN, 0.0).is_finite());
    }

    #[test]
    fn ring_edges_are_half_open() {
        let ring = square();
        // West and south edges count as inside, east and north do not.
        assert!(ring_contains(&ring, LatLon::new(40.0, -10.0)));
        assert!(!ring_contains(&ring, LatLon::new(40.0, 10.0)));
        assert!(ring_contains(&ring, LatLon::new(30.0, 0.0)));
        assert!(!ring_contains(&ring, LatLon::new(50.0, 0.0)));
    }

    #[test]
    fn ring_contains_interior_not_exterior() {
        let ring = square();
        assert!(ring_contains(&ring, LatLon::new(40.0, 0.0)));
        assert!(!ring_contains(&ring, LatLon::new(20.0, 0.0)));
        assert!(!ring_contains(&ring, LatLon::new(40.0, 11.0)));
    }

    #[test]
    fn degenerate_ring_contains_nothing() {
        let ring = vec![LatLon::new(0.0, 0.0), LatLon::new(1.0, 1.0)];
        assert!(!ring_contains(&ring, LatLon::new(0.5, 0.5)));
    }
}
