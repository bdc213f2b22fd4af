use serde::Serialize;

/// Sequence number of a completed view-state update.
///
/// Index 0 is the startup state; every update cycle advances it by one, so a
/// render surface can drop descriptors older than the newest it has shown.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UpdateCycle {
    pub index: u64,
}

impl UpdateCycle {
    pub const fn initial() -> Self {
        Self { index: 0 }
    }

    /// Saturates at `u64::MAX`, so the index never goes backwards.
    pub fn next(self) -> Self {
        Self {
            index: self.index.saturating_add(1),
        }
    }
}
