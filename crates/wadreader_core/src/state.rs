use crate::view_model::{self, AppViewModel, TargetView};

pub type GestureId = u64;

/// Visual/interaction state of the single drop target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetState {
    /// Accepting drags; no gesture in flight.
    #[default]
    Idle,
    /// A classifiable drag is hovering the target.
    DragActive,
    /// A drop was accepted and the pipeline is in flight. The target rejects
    /// further drags and drops until settlement.
    Processing {
        gesture_id: GestureId,
        label: String,
        /// Wall time reported by the ticker; `None` until the first tick.
        elapsed_ms: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    target: TargetState,
    next_gesture_id: GestureId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> &TargetState {
        &self.target
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.target, TargetState::Processing { .. })
    }

    pub fn view(&self) -> AppViewModel {
        let target = match &self.target {
            TargetState::Idle => TargetView::Idle,
            TargetState::DragActive => TargetView::DragActive,
            TargetState::Processing {
                label, elapsed_ms, ..
            } => TargetView::Busy {
                heading: view_model::busy_heading(label),
                wait_line: view_model::wait_line(*elapsed_ms),
            },
        };
        AppViewModel {
            target,
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it; the shell renders when true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn enter_drag(&mut self) {
        self.target = TargetState::DragActive;
        self.mark_dirty();
    }

    pub(crate) fn leave_drag(&mut self) {
        if self.target == TargetState::DragActive {
            self.target = TargetState::Idle;
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_processing(&mut self, label: String) -> GestureId {
        self.next_gesture_id += 1;
        let gesture_id = self.next_gesture_id;
        self.target = TargetState::Processing {
            gesture_id,
            label,
            elapsed_ms: None,
        };
        self.mark_dirty();
        gesture_id
    }

    pub(crate) fn record_tick(&mut self, gesture_id: GestureId, elapsed: u64) {
        if let TargetState::Processing {
            gesture_id: current,
            elapsed_ms,
            ..
        } = &mut self.target
        {
            if *current == gesture_id {
                *elapsed_ms = Some(elapsed);
                self.dirty = true;
            }
        }
    }

    /// Restores Idle after settlement; returns the gesture label when the
    /// settled gesture was the one in flight.
    pub(crate) fn finish_processing(&mut self, gesture_id: GestureId) -> Option<String> {
        if let TargetState::Processing {
            gesture_id: current,
            label,
            ..
        } = &self.target
        {
            if *current == gesture_id {
                let label = label.clone();
                self.target = TargetState::Idle;
                self.mark_dirty();
                return Some(label);
            }
        }
        None
    }
}
