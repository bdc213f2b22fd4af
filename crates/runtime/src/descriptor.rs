use foundation::viewport::Viewport;
use layers::{DrawInstruction, LayerId};
use serde::Serialize;

/// What the render surface should draw, independent of any rendering library.
///
/// Built fresh by every update and never mutated afterwards; the fields are
/// only reachable through shared references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderDescriptor {
    instructions: Vec<DrawInstruction>,
    viewport: Viewport,
}

impl RenderDescriptor {
    pub fn new(instructions: Vec<DrawInstruction>, viewport: Viewport) -> Self {
        Self {
            instructions,
            viewport,
        }
    }

    /// Draw instructions, bottom layer first.
    pub fn instructions(&self) -> &[DrawInstruction] {
        &self.instructions
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn layers(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.instructions.iter().map(DrawInstruction::layer)
    }
}
