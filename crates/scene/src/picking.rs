use foundation::geo::LatLon;
use serde::Serialize;

use crate::features::{MapData, PointFeature, RegionFeature};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Region,
    Point,
}

/// Popup content for a clicked feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureInfo {
    pub kind: FeatureKind,
    pub title: String,
    pub detail: String,
}

impl FeatureInfo {
    pub fn for_region(region: &RegionFeature) -> Self {
        Self {
            kind: FeatureKind::Region,
            title: region.name.clone(),
            detail: format!("Population: {}", group_thousands(region.population)),
        }
    }

    pub fn for_point(point: &PointFeature) -> Self {
        Self {
            kind: FeatureKind::Point,
            title: point.name.clone(),
            detail: format!("Type: {}", point.category),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickOptions {
    /// Marker hit radius in degrees.
    pub tolerance_deg: f64,
    pub regions: bool,
    pub points: bool,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            tolerance_deg: 0.5,
            regions: true,
            points: true,
        }
    }
}

/// Resolve a click to at most one feature.
///
/// Ordering contract:
/// - Markers are drawn above regions, so any marker hit wins over any region hit.
/// - Among markers the closest wins; equal distances go to the lower index.
/// - Among regions the lower index wins.
pub fn pick(data: &MapData, at: LatLon, opts: PickOptions) -> Option<FeatureInfo> {
    if opts.points {
        if let Some(point) = nearest_point(data, at, opts.tolerance_deg) {
            return Some(FeatureInfo::for_point(point));
        }
    }
    if opts.regions {
        if let Some(region) = data.regions.iter().find(|r| r.contains(at)) {
            return Some(FeatureInfo::for_region(region));
        }
    }
    None
}

fn nearest_point(data: &MapData, at: LatLon, tolerance_deg: f64) -> Option<&PointFeature> {
    let mut best: Option<(f64, &PointFeature)> = None;
    for point in data.points.iter() {
        let d = point.position.degree_distance(at);
        if d > tolerance_deg {
            continue;
        }
        // Strict comparison keeps the earlier feature on ties.
        if best.is_none_or(|(bd, _)| d.total_cmp(&bd).is_lt()) {
            best = Some((d, point));
        }
    }
    best.map(|(_, p)| p)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
