use std::fmt;
use std::sync::Arc;

use foundation::bounds::LonLatBounds;
use foundation::geo::{LatLon, ring_contains};
use serde::Serialize;

/// Immutable, cheaply clonable collection of features.
///
/// Clones share the same backing slice; nothing hands out `&mut` access, so
/// once built a set stays exactly as it was for the life of the process.
#[derive(Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureSet<T> {
    features: Arc<[T]>,
}

impl<T> FeatureSet<T> {
    pub fn new(features: Vec<T>) -> Self {
        Self {
            features: features.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.features.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.features.get(index)
    }

    /// True when both handles point at the same backing data.
    pub fn shares_data_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.features, &other.features)
    }
}

impl<T> Clone for FeatureSet<T> {
    fn clone(&self) -> Self {
        Self {
            features: Arc::clone(&self.features),
        }
    }
}

impl<'a, T> IntoIterator for &'a FeatureSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Named polygon with a population attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionFeature {
    pub name: String,
    pub population: u64,
    /// Outer ring, closed (first vertex repeated at the end).
    pub ring: Vec<LatLon>,
}

impl RegionFeature {
    pub fn new(name: impl Into<String>, population: u64, ring: Vec<LatLon>) -> Self {
        Self {
            name: name.into(),
            population,
            ring,
        }
    }

    pub fn bounds(&self) -> Option<LonLatBounds> {
        LonLatBounds::from_points(&self.ring)
    }

    pub fn contains(&self, p: LatLon) -> bool {
        self.bounds().is_some_and(|b| b.contains(p)) && ring_contains(&self.ring, p)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum PointCategory {
    Capital,
    Major,
    Minor,
}

impl PointCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PointCategory::Capital => "Capital",
            PointCategory::Major => "Major",
            PointCategory::Minor => "Minor",
        }
    }
}

impl fmt::Display for PointCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named point of interest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointFeature {
    pub name: String,
    pub category: PointCategory,
    pub position: LatLon,
}

impl PointFeature {
    pub fn new(name: impl Into<String>, category: PointCategory, position: LatLon) -> Self {
        Self {
            name: name.into(),
            category,
            position,
        }
    }
}

/// All static data the map draws, one feature set per layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapData {
    pub regions: FeatureSet<RegionFeature>,
    pub points: FeatureSet<PointFeature>,
}

impl MapData {
    pub fn new(regions: Vec<RegionFeature>, points: Vec<PointFeature>) -> Self {
        Self {
            regions: FeatureSet::new(regions),
            points: FeatureSet::new(points),
        }
    }
}
