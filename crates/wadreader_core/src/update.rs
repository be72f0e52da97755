use crate::{source, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DragEntered { descriptors } => {
            // While Processing the target rejects new drags outright; this
            // gating is the only mutual exclusion over the target's state.
            if !state.is_processing() && source::is_classifiable(&descriptors) {
                state.enter_drag();
            }
            Vec::new()
        }
        Msg::DragLeft => {
            state.leave_drag();
            Vec::new()
        }
        Msg::DropReceived { payload } => {
            if state.is_processing() {
                return (state, Vec::new());
            }
            match source::classify(&payload) {
                Some(drop_source) => {
                    let gesture_id = state.begin_processing(drop_source.label().to_string());
                    vec![
                        Effect::StartTicker { gesture_id },
                        Effect::StartPipeline {
                            gesture_id,
                            source: drop_source,
                        },
                    ]
                }
                None => {
                    // Not a valid drop for this target; clear any drag highlight.
                    state.leave_drag();
                    Vec::new()
                }
            }
        }
        Msg::TickerTick {
            gesture_id,
            elapsed_ms,
        } => {
            state.record_tick(gesture_id, elapsed_ms);
            Vec::new()
        }
        Msg::PipelineSettled { gesture_id } => match state.finish_processing(gesture_id) {
            Some(label) => vec![
                Effect::CancelTicker,
                Effect::PresentOutcome { gesture_id, label },
            ],
            // Stale settlement for a gesture that is no longer in flight.
            None => Vec::new(),
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
