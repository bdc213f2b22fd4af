use scene::MapData;

use crate::layer::{DrawInstruction, Layer, LayerId};
use crate::symbology::RegionStyle;

/// Filled polygons with an outline.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RegionsLayer {
    style: RegionStyle,
}

impl Layer for RegionsLayer {
    fn id(&self) -> LayerId {
        LayerId::Regions
    }

    fn draw(&self, data: &MapData) -> DrawInstruction {
        DrawInstruction::Regions {
            style: self.style,
            features: data.regions.clone(),
        }
    }
}
