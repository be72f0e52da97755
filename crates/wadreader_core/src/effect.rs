use crate::{DropSource, GestureId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the full acquire/resolve/decode pipeline for a classified drop.
    StartPipeline {
        gesture_id: GestureId,
        source: DropSource,
    },
    /// Start the 500ms elapsed-time ticker for a gesture.
    StartTicker { gesture_id: GestureId },
    /// Cancel the ticker. Emitted on every settlement path.
    CancelTicker,
    /// Hand the settled gesture's report to the presenter. Always ordered
    /// after the target has returned to Idle.
    PresentOutcome {
        gesture_id: GestureId,
        label: String,
    },
}
