use scene::MapData;

use crate::layer::{DrawInstruction, Layer, LayerId};
use crate::symbology::MarkerStyle;

/// Circle markers for points of interest.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PointsLayer {
    style: MarkerStyle,
}

impl Layer for PointsLayer {
    fn id(&self) -> LayerId {
        LayerId::Points
    }

    fn draw(&self, data: &MapData) -> DrawInstruction {
        DrawInstruction::Points {
            style: self.style,
            features: data.points.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PointsLayer;
    use crate::layer::{Layer, LayerId};
    use scene::sample::sample_data;

    #[test]
    fn draw_carries_every_point() {
        let instruction = PointsLayer::default().draw(sample_data());
        assert_eq!(instruction.layer(), LayerId::Points);
        assert_eq!(instruction.feature_count(), 3);
    }
}
