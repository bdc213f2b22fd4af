use foundation::geo::LatLon;
use foundation::viewport::ViewportEvent;
use layers::{LayerId, LayerSet};
use parking_lot::Mutex;
use scene::picking::FeatureInfo;
use tracing::debug;

use crate::controller::{Phase, ViewStateController};
use crate::cycle::UpdateCycle;
use crate::descriptor::RenderDescriptor;
use crate::state::{ViewInput, ViewState};

pub const DEFAULT_PICK_TOLERANCE_DEG: f64 = 0.5;

/// Descriptor produced by a store operation, tagged with the cycle it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub cycle: UpdateCycle,
    pub descriptor: RenderDescriptor,
}

#[derive(Debug)]
struct Slot {
    cycle: UpdateCycle,
    state: ViewState,
}

/// Composition-root owner of the shared view state.
///
/// Every operation takes the lock for its whole read-modify-write, so callers
/// on different threads (one per browser tab, say) never interleave cycles.
#[derive(Debug)]
pub struct MapStore {
    controller: ViewStateController,
    pick_tolerance_deg: f64,
    slot: Mutex<Slot>,
}

impl MapStore {
    pub fn new(controller: ViewStateController, initial: ViewState) -> Self {
        Self {
            controller,
            pick_tolerance_deg: DEFAULT_PICK_TOLERANCE_DEG,
            slot: Mutex::new(Slot {
                cycle: UpdateCycle::initial(),
                state: initial,
            }),
        }
    }

    pub fn with_pick_tolerance(mut self, tolerance_deg: f64) -> Self {
        self.pick_tolerance_deg = tolerance_deg;
        self
    }

    pub fn view_state(&self) -> ViewState {
        self.slot.lock().state
    }

    pub fn cycle(&self) -> UpdateCycle {
        self.slot.lock().cycle
    }

    /// Redraw the current state without starting a new cycle.
    pub fn current(&self) -> Rendered {
        let slot = self.slot.lock();
        let (descriptor, _) =
            self.controller.update(&slot.state.layers, None, &slot.state.viewport);
        Rendered {
            cycle: slot.cycle,
            descriptor,
        }
    }

    /// Run one update cycle.
    pub fn apply(&self, input: ViewInput) -> Rendered {
        let mut slot = self.slot.lock();
        self.run_cycle(&mut slot, &input)
    }

    pub fn set_layers(&self, layers: LayerSet) -> Rendered {
        self.apply(ViewInput::layers(layers))
    }

    pub fn viewport_changed(&self, event: ViewportEvent) -> Rendered {
        self.apply(ViewInput::viewport(event))
    }

    /// Flip a single checkbox. Returns whether the layer is now active.
    pub fn toggle_layer(&self, id: LayerId) -> (bool, Rendered) {
        let mut slot = self.slot.lock();
        let mut layers = slot.state.layers;
        let active = layers.toggle(id);
        debug!(layer = %id, active, "layer toggled");
        let rendered = self.run_cycle(&mut slot, &ViewInput::layers(layers));
        (active, rendered)
    }

    pub fn pick(&self, at: LatLon) -> Option<FeatureInfo> {
        let layers = self.slot.lock().state.layers;
        self.controller.pick(&layers, at, self.pick_tolerance_deg)
    }

    // Caller holds the lock for the whole cycle.
    fn run_cycle(&self, slot: &mut Slot, input: &ViewInput) -> Rendered {
        let (descriptor, next) = self.controller.apply(slot.state, input);
        let cycle = slot.cycle.next();
        debug!(
            cycle = cycle.index,
            phase = ?Phase::of(input.viewport.as_ref()),
            layers = next.layers.len(),
            zoom = next.viewport.zoom,
            "view state updated"
        );
        slot.state = next;
        slot.cycle = cycle;
        Rendered { cycle, descriptor }
    }
}

impl Default for MapStore {
    fn default() -> Self {
        Self::new(ViewStateController::with_sample_data(), ViewState::default())
    }
}
