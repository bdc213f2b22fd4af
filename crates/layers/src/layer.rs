use std::fmt;
use std::str::FromStr;

use scene::MapData;
use scene::{FeatureSet, PointFeature, RegionFeature};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::symbology::{MarkerStyle, RegionStyle};

/// Toggleable map layer.
///
/// The derived `Ord` is the canonical draw order: regions below points.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LayerId {
    Regions,
    Points,
}

impl LayerId {
    /// Every layer, in canonical draw order.
    pub const ALL: [LayerId; 2] = [LayerId::Regions, LayerId::Points];

    pub fn as_str(self) -> &'static str {
        match self {
            LayerId::Regions => "regions",
            LayerId::Points => "points",
        }
    }

    /// Checkbox label on the toggle surface.
    pub fn label(self) -> &'static str {
        match self {
            LayerId::Regions => "Regions",
            LayerId::Points => "Points of Interest",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            LayerId::Regions => 1 << 0,
            LayerId::Points => 1 << 1,
        }
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown layer {0:?} (expected \"regions\" or \"points\")")]
pub struct LayerParseError(pub String);

impl FromStr for LayerId {
    type Err = LayerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regions" => Ok(LayerId::Regions),
            "points" => Ok(LayerId::Points),
            other => Err(LayerParseError(other.to_string())),
        }
    }
}

/// Set of active layers.
///
/// Ordering contract:
/// - Iteration always yields layers in canonical draw order, independent of
///   the order they were inserted in.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<LayerId>", into = "Vec<LayerId>")]
pub struct LayerSet {
    bits: u8,
}

impl LayerSet {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub const fn all() -> Self {
        Self {
            bits: LayerId::Regions.bit() | LayerId::Points.bit(),
        }
    }

    pub fn contains(&self, id: LayerId) -> bool {
        self.bits & id.bit() != 0
    }

    /// Returns `true` if the set changed.
    pub fn insert(&mut self, id: LayerId) -> bool {
        let before = self.bits;
        self.bits |= id.bit();
        before != self.bits
    }

    /// Returns `true` if the set changed.
    pub fn remove(&mut self, id: LayerId) -> bool {
        let before = self.bits;
        self.bits &= !id.bit();
        before != self.bits
    }

    /// Flips membership of `id` and returns whether it is now active.
    pub fn toggle(&mut self, id: LayerId) -> bool {
        self.bits ^= id.bit();
        self.contains(id)
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = LayerId> + '_ {
        LayerId::ALL.into_iter().filter(|id| self.contains(*id))
    }
}

impl FromIterator<LayerId> for LayerSet {
    fn from_iter<I: IntoIterator<Item = LayerId>>(iter: I) -> Self {
        let mut set = LayerSet::empty();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl From<Vec<LayerId>> for LayerSet {
    fn from(ids: Vec<LayerId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<LayerSet> for Vec<LayerId> {
    fn from(set: LayerSet) -> Self {
        set.iter().collect()
    }
}

/// One layer's worth of drawing: the layer's features plus its fixed style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layer", rename_all = "lowercase")]
pub enum DrawInstruction {
    Regions {
        style: RegionStyle,
        features: FeatureSet<RegionFeature>,
    },
    Points {
        style: MarkerStyle,
        features: FeatureSet<PointFeature>,
    },
}

impl DrawInstruction {
    pub fn layer(&self) -> LayerId {
        match self {
            DrawInstruction::Regions { .. } => LayerId::Regions,
            DrawInstruction::Points { .. } => LayerId::Points,
        }
    }

    pub fn feature_count(&self) -> usize {
        match self {
            DrawInstruction::Regions { features, .. } => features.len(),
            DrawInstruction::Points { features, .. } => features.len(),
        }
    }
}

pub trait Layer {
    fn id(&self) -> LayerId;
    fn draw(&self, data: &MapData) -> DrawInstruction;
}
