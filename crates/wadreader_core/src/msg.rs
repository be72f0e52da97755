use crate::{DropPayload, GestureId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A drag entered the target; descriptors decide whether it is accepted.
    DragEntered { descriptors: Vec<String> },
    /// The drag left the target without dropping.
    DragLeft,
    /// A drop landed on the target.
    DropReceived { payload: DropPayload },
    /// Periodic elapsed-time report from the ticker for an in-flight gesture.
    TickerTick { gesture_id: GestureId, elapsed_ms: u64 },
    /// The pipeline settled (success or failure) for a gesture.
    PipelineSettled { gesture_id: GestureId },
    /// Fallback for placeholder wiring.
    NoOp,
}
