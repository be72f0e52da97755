use std::collections::HashMap;
use std::sync::{mpsc, Arc};

use bytes::Bytes;
use wad_logging::{wad_debug, wad_info, wad_warn};
use wadreader_core::{DropSource, Effect, GestureId, Msg};
use wadreader_engine::{
    AcquireSource, EngineEvent, EngineHandle, PipelineOutcome, PipelineReport, WadDecoder,
};

use crate::present::ResultPresenter;
use crate::ticker::Ticker;

/// A dropped local file whose bytes the platform already holds in memory.
#[derive(Debug, Clone)]
pub struct DroppedFile {
    pub name: String,
    pub bytes: Bytes,
}

/// Executes core effects against the engine, the ticker, and the presenter.
pub struct EffectRunner {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
    ticker: Option<Ticker>,
    staged_file: Option<DroppedFile>,
    settled_reports: HashMap<GestureId, PipelineReport>,
    presenter: Box<dyn ResultPresenter>,
}

impl EffectRunner {
    pub fn new(
        decoder: Arc<dyn WadDecoder>,
        presenter: Box<dyn ResultPresenter>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        Self {
            engine: EngineHandle::new(decoder),
            msg_tx,
            ticker: None,
            staged_file: None,
            settled_reports: HashMap::new(),
            presenter,
        }
    }

    /// Stages the first dropped file's bytes for the next accepted gesture.
    pub fn stage_dropped_file(&mut self, file: Option<DroppedFile>) {
        self.staged_file = file;
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartTicker { gesture_id } => {
                    // Replacing the guard cancels any previous ticker.
                    self.ticker = Some(Ticker::spawn(gesture_id, self.msg_tx.clone()));
                }
                Effect::CancelTicker => {
                    self.ticker = None;
                }
                Effect::StartPipeline { gesture_id, source } => {
                    self.start_pipeline(gesture_id, source);
                }
                Effect::PresentOutcome { gesture_id, label } => {
                    match self.settled_reports.remove(&gesture_id) {
                        Some(report) => self.presenter.present(&report, &label),
                        None => wad_warn!("no report recorded for gesture {gesture_id}"),
                    }
                }
            }
        }
    }

    /// Drains engine events into messages for the state machine.
    pub fn pump_engine(&mut self) {
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::Progress(progress) => {
                    wad_debug!(
                        "gesture {} stage {:?} bytes {:?}",
                        progress.gesture_id,
                        progress.stage,
                        progress.bytes
                    );
                }
                EngineEvent::DropProcessed { gesture_id, report } => {
                    self.settled_reports.insert(gesture_id, report);
                    let _ = self.msg_tx.send(Msg::PipelineSettled { gesture_id });
                }
            }
        }
    }

    fn start_pipeline(&mut self, gesture_id: GestureId, source: DropSource) {
        let source = match source {
            DropSource::Link { uri, label } => {
                wad_info!("processing dropped link {uri} ({label})");
                AcquireSource::Link { url: uri }
            }
            DropSource::File { name, .. } => match self.staged_file.take() {
                Some(file) => {
                    wad_info!("processing dropped file {} ({} bytes)", name, file.bytes.len());
                    AcquireSource::File {
                        name: file.name,
                        bytes: file.bytes,
                    }
                }
                None => {
                    // The shell failed to stage the file's bytes; settle the
                    // gesture as a failure so the target still unwinds.
                    wad_warn!("dropped file {name} has no staged bytes");
                    self.settled_reports.insert(
                        gesture_id,
                        PipelineReport {
                            outcome: PipelineOutcome::Failure {
                                reason: "dropped file bytes were unavailable".to_string(),
                            },
                            elapsed_ms: 0,
                        },
                    );
                    let _ = self.msg_tx.send(Msg::PipelineSettled { gesture_id });
                    return;
                }
            },
        };
        self.engine.process_drop(gesture_id, source);
    }
}
