use std::time::Instant;

use bytes::Bytes;

use crate::acquire::{Acquirer, ProgressSink};
use crate::{
    container, AcquireSource, DecodeOutput, EngineEvent, GestureId, GestureProgress,
    PipelineOutcome, PipelineReport, Stage,
};

/// The external binary decoder: maps resolved WAD bytes to an image
/// collection plus optional self-reported timings, or rejects with a reason.
#[async_trait::async_trait]
pub trait WadDecoder: Send + Sync {
    async fn decode(&self, bytes: Bytes) -> Result<DecodeOutput, String>;
}

/// Runs one drop gesture end to end: acquire, resolve the container, decode.
///
/// Stages are awaited strictly in order; any stage's failure short-circuits
/// the rest and collapses into `PipelineOutcome::Failure`. `elapsed_ms`
/// brackets all three stages, so it includes network and archive overhead
/// and is always at least the decoder's own reported sub-timings.
pub async fn run(
    gesture_id: GestureId,
    source: AcquireSource,
    acquirer: &dyn Acquirer,
    decoder: &dyn WadDecoder,
    sink: &dyn ProgressSink,
) -> PipelineReport {
    let started = Instant::now();
    let outcome = run_stages(gesture_id, source, acquirer, decoder, sink).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    sink.emit(EngineEvent::Progress(GestureProgress {
        gesture_id,
        stage: Stage::Done,
        bytes: None,
    }));

    PipelineReport {
        outcome,
        elapsed_ms,
    }
}

async fn run_stages(
    gesture_id: GestureId,
    source: AcquireSource,
    acquirer: &dyn Acquirer,
    decoder: &dyn WadDecoder,
    sink: &dyn ProgressSink,
) -> PipelineOutcome {
    let payload = match acquirer.acquire(gesture_id, source, sink).await {
        Ok(payload) => payload,
        Err(err) => {
            return PipelineOutcome::Failure {
                reason: err.to_string(),
            }
        }
    };

    sink.emit(EngineEvent::Progress(GestureProgress {
        gesture_id,
        stage: Stage::Resolving,
        bytes: Some(payload.bytes.len() as u64),
    }));
    let asset = match container::resolve(payload).await {
        Ok(asset) => asset,
        Err(err) => {
            return PipelineOutcome::Failure {
                reason: err.to_string(),
            }
        }
    };

    sink.emit(EngineEvent::Progress(GestureProgress {
        gesture_id,
        stage: Stage::Decoding,
        bytes: Some(asset.bytes.len() as u64),
    }));
    match decoder.decode(asset.bytes).await {
        Ok(DecodeOutput {
            wad_images: Some(images),
            timings,
        }) => PipelineOutcome::Success { images, timings },
        // Boundary adapter: a resolved decode without an image collection
        // violates the decoder contract and is treated as a hard failure.
        Ok(DecodeOutput {
            wad_images: None, ..
        }) => PipelineOutcome::Failure {
            reason: "decoder returned a result without an image collection".to_string(),
        },
        Err(reason) => PipelineOutcome::Failure { reason },
    }
}
