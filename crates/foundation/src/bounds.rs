use crate::geo::LatLon;

/// Axis-aligned bounds in `[lon, lat]` degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LonLatBounds {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl LonLatBounds {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        LonLatBounds { min, max }
    }

    /// Tight bounds around `points`, or `None` when empty.
    pub fn from_points(points: &[LatLon]) -> Option<Self> {
        let first = points.first()?;
        let mut b = Self::new([first.lon, first.lat], [first.lon, first.lat]);
        for p in &points[1..] {
            b.min[0] = b.min[0].min(p.lon);
            b.min[1] = b.min[1].min(p.lat);
            b.max[0] = b.max[0].max(p.lon);
            b.max[1] = b.max[1].max(p.lat);
        }
        Some(b)
    }

    pub fn contains(&self, p: LatLon) -> bool {
        p.lon >= self.min[0] && p.lon <= self.max[0] && p.lat >= self.min[1] && p.lat <= self.max[1]
    }
}

#[cfg(test)]
mod tests {
    use super::LonLatBounds;
    use crate::geo::LatLon;

    #[test]
    fn bounds_from_points() {
        let b = LonLatBounds::from_points(&[
            LatLon::from_lon_lat(20.0, 10.0),
            LatLon::from_lon_lat(40.0, 30.0),
            LatLon::from_lon_lat(25.0, 5.0),
        ])
        .unwrap();
        assert_eq!(b, LonLatBounds::new([20.0, 5.0], [40.0, 30.0]));
        assert!(b.contains(LatLon::new(20.0, 30.0)));
        assert!(!b.contains(LatLon::new(31.0, 30.0)));
    }

    #[test]
    fn empty_has_no_bounds() {
        assert!(LonLatBounds::from_points(&[]).is_none());
    }
}
