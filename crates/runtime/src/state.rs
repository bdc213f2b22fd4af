use foundation::viewport::{Viewport, ViewportEvent};
use layers::LayerSet;
use serde::{Deserialize, Serialize};

/// The one piece of shared mutable state: where the camera is and which
/// layers are switched on.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub viewport: Viewport,
    pub layers: LayerSet,
}

impl ViewState {
    pub fn new(viewport: Viewport, layers: LayerSet) -> Self {
        Self { viewport, layers }
    }
}

/// Startup state: default camera, every layer active.
impl Default for ViewState {
    fn default() -> Self {
        Self::new(Viewport::default(), LayerSet::all())
    }
}

/// Input for one update cycle.
///
/// `layers` is the toggle surface's new active set (absent = unchanged);
/// `viewport` is the render surface's camera event (absent = no interaction).
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewInput {
    #[serde(default)]
    pub layers: Option<LayerSet>,
    #[serde(default)]
    pub viewport: Option<ViewportEvent>,
}

impl ViewInput {
    pub fn layers(layers: LayerSet) -> Self {
        Self {
            layers: Some(layers),
            viewport: None,
        }
    }

    pub fn viewport(event: ViewportEvent) -> Self {
        Self {
            layers: None,
            viewport: Some(event),
        }
    }
}
