use foundation::geo::LatLon;
use foundation::viewport::{Viewport, ViewportEvent};
use layers::{LayerId, LayerSet, LayerStack};
use scene::MapData;
use scene::picking::{FeatureInfo, PickOptions, pick};
use scene::sample::sample_data;

use crate::descriptor::RenderDescriptor;
use crate::state::{ViewInput, ViewState};

/// Where an update cycle sits in the view-state machine.
///
/// `Interacting` only exists for the duration of a single update: every
/// update ends back in `Idle`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Interacting,
}

impl Phase {
    pub fn of(event: Option<&ViewportEvent>) -> Self {
        if event.is_some() {
            Phase::Interacting
        } else {
            Phase::Idle
        }
    }
}

/// Maps toggle input plus camera events to a render descriptor.
///
/// Holds only immutable data and styling. All view state is passed in and
/// handed back, so the controller itself is a pure function of its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewStateController {
    data: MapData,
    stack: LayerStack,
}

impl ViewStateController {
    pub fn new(data: MapData, stack: LayerStack) -> Self {
        Self { data, stack }
    }

    /// Controller over the built-in sample data with default styling.
    pub fn with_sample_data() -> Self {
        Self::new(sample_data().clone(), LayerStack::default())
    }

    /// Produce the descriptor for `active` and the viewport to persist.
    ///
    /// - With an `event`, the viewport is the event's, omitted fields taken
    ///   from `previous`. This is the only way the viewport ever changes.
    /// - Without one, `previous` comes back unchanged.
    pub fn update(
        &self,
        active: &LayerSet,
        event: Option<&ViewportEvent>,
        previous: &Viewport,
    ) -> (RenderDescriptor, Viewport) {
        let viewport = match event {
            Some(event) => event.resolve(previous),
            None => *previous,
        };
        let instructions = self.stack.draw_active(active, &self.data);
        (RenderDescriptor::new(instructions, viewport), viewport)
    }

    /// Read-modify-write over an explicit state value.
    ///
    /// Layer changes and camera events touch disjoint fields, so both apply
    /// when they arrive together.
    pub fn apply(&self, state: ViewState, input: &ViewInput) -> (RenderDescriptor, ViewState) {
        let layers = input.layers.unwrap_or(state.layers);
        let (descriptor, viewport) =
            self.update(&layers, input.viewport.as_ref(), &state.viewport);
        (descriptor, ViewState::new(viewport, layers))
    }

    /// Resolve a click among the active layers. Never changes view state.
    pub fn pick(
        &self,
        active: &LayerSet,
        at: LatLon,
        tolerance_deg: f64,
    ) -> Option<FeatureInfo> {
        let opts = PickOptions {
            tolerance_deg,
            regions: active.contains(LayerId::Regions),
            points: active.contains(LayerId::Points),
        };
        pick(&self.data, at, opts)
    }
}
