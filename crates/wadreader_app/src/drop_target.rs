use std::sync::{mpsc, Arc};

use wadreader_core::{is_classifiable, update, AppState, AppViewModel, DropPayload, Msg, TargetState};
use wadreader_engine::WadDecoder;

use crate::effects::{DroppedFile, EffectRunner};
use crate::present::ResultPresenter;

/// One drop target: owns the state machine and runs its effects.
///
/// The platform shell forwards drag-and-drop events here and calls
/// [`DropTarget::pump`] from its event loop to move in-flight gestures along.
pub struct DropTarget {
    state: AppState,
    msg_rx: mpsc::Receiver<Msg>,
    runner: EffectRunner,
}

impl DropTarget {
    pub fn new(decoder: Arc<dyn WadDecoder>, presenter: Box<dyn ResultPresenter>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            state: AppState::new(),
            msg_rx,
            runner: EffectRunner::new(decoder, presenter, msg_tx),
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state.target(), TargetState::Idle)
    }

    /// Gating check for `dragover`: the drag must be classifiable and the
    /// target must not be busy with another gesture.
    pub fn accepts_drag(&self, descriptors: &[String]) -> bool {
        !self.state.is_processing() && is_classifiable(descriptors)
    }

    pub fn on_drag_enter(&mut self, descriptors: Vec<String>) {
        self.dispatch(Msg::DragEntered { descriptors });
    }

    pub fn on_drag_leave(&mut self) {
        self.dispatch(Msg::DragLeft);
    }

    /// Accepts a drop. For file drops the shell passes the first file's bytes
    /// alongside the payload; they are staged for the pipeline effect.
    pub fn on_drop(&mut self, payload: DropPayload, file: Option<DroppedFile>) {
        self.runner.stage_dropped_file(file);
        self.dispatch(Msg::DropReceived { payload });
    }

    /// Drains engine events and queued messages through the update function.
    /// Returns true when the view changed and should be re-rendered.
    pub fn pump(&mut self) -> bool {
        self.runner.pump_engine();
        loop {
            let msg = match self.msg_rx.try_recv() {
                Ok(msg) => msg,
                Err(_) => break,
            };
            self.dispatch(msg);
        }
        self.state.consume_dirty()
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);
    }
}
