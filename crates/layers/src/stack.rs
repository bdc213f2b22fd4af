use scene::MapData;

use crate::layer::{DrawInstruction, Layer, LayerId, LayerSet};
use crate::points::PointsLayer;
use crate::regions::RegionsLayer;

/// Every layer the map knows about, with its fixed styling.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct LayerStack {
    pub regions: RegionsLayer,
    pub points: PointsLayer,
}

impl LayerStack {
    pub fn layer(&self, id: LayerId) -> &dyn Layer {
        match id {
            LayerId::Regions => &self.regions,
            LayerId::Points => &self.points,
        }
    }

    /// One instruction per active layer, in canonical draw order.
    pub fn draw_active(&self, active: &LayerSet, data: &MapData) -> Vec<DrawInstruction> {
        active.iter().map(|id| self.layer(id).draw(data)).collect()
    }
}
