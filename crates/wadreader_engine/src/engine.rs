use std::sync::{mpsc, Arc};
use std::thread;

use crate::acquire::{ChannelProgressSink, ReqwestAcquirer};
use crate::pipeline::{self, WadDecoder};
use crate::{AcquireSource, EngineEvent, GestureId};

enum EngineCommand {
    ProcessDrop {
        gesture_id: GestureId,
        source: AcquireSource,
    },
}

/// Handle to the pipeline worker: commands in, events out. The worker thread
/// owns a tokio runtime; gestures execute as spawned tasks on it.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(decoder: Arc<dyn WadDecoder>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let acquirer = Arc::new(ReqwestAcquirer::new());

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let acquirer = acquirer.clone();
                let decoder = decoder.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(command, acquirer, decoder, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn process_drop(&self, gesture_id: GestureId, source: AcquireSource) {
        let _ = self.cmd_tx.send(EngineCommand::ProcessDrop { gesture_id, source });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    command: EngineCommand,
    acquirer: Arc<ReqwestAcquirer>,
    decoder: Arc<dyn WadDecoder>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::ProcessDrop { gesture_id, source } => {
            let sink = ChannelProgressSink::new(event_tx.clone());
            let report =
                pipeline::run(gesture_id, source, acquirer.as_ref(), decoder.as_ref(), &sink)
                    .await;
            let _ = event_tx.send(EngineEvent::DropProcessed { gesture_id, report });
        }
    }
}
