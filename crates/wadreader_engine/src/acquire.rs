use futures_util::StreamExt;
use wad_logging::wad_debug;

use crate::{
    AcquireError, AcquireSource, EngineEvent, FailureKind, GestureId, GestureProgress,
    PayloadOrigin, RawPayload, Stage,
};

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Resolves a classified drop source into raw bytes: one GET for links, an
/// immediate read for local files.
#[async_trait::async_trait]
pub trait Acquirer: Send + Sync {
    async fn acquire(
        &self,
        gesture_id: GestureId,
        source: AcquireSource,
        sink: &dyn ProgressSink,
    ) -> Result<RawPayload, AcquireError>;
}

/// Single best-effort GET. No retry, no custom headers, and no independently
/// enforced timeout; latency is bounded only by the transport.
#[derive(Debug, Clone, Default)]
pub struct ReqwestAcquirer;

impl ReqwestAcquirer {
    pub fn new() -> Self {
        Self
    }

    fn build_client(&self) -> Result<reqwest::Client, AcquireError> {
        reqwest::Client::builder()
            .build()
            .map_err(|err| AcquireError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Acquirer for ReqwestAcquirer {
    async fn acquire(
        &self,
        gesture_id: GestureId,
        source: AcquireSource,
        sink: &dyn ProgressSink,
    ) -> Result<RawPayload, AcquireError> {
        match source {
            AcquireSource::File { name, bytes } => {
                // Local file bytes were already resolved by the shell.
                wad_debug!("acquired dropped file {name} ({} bytes)", bytes.len());
                sink.emit(EngineEvent::Progress(GestureProgress {
                    gesture_id,
                    stage: Stage::Acquiring,
                    bytes: Some(bytes.len() as u64),
                }));
                Ok(RawPayload {
                    bytes,
                    origin: PayloadOrigin::File,
                })
            }
            AcquireSource::Link { url } => {
                let parsed = reqwest::Url::parse(&url)
                    .map_err(|err| AcquireError::new(FailureKind::InvalidUrl, err.to_string()))?;
                let client = self.build_client()?;

                let response = client
                    .get(parsed)
                    .send()
                    .await
                    .map_err(|err| AcquireError::new(FailureKind::Network, err.to_string()))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(AcquireError::new(
                        FailureKind::HttpStatus(status.as_u16()),
                        format!("received non-success HTTP status code: {}", status.as_u16()),
                    ));
                }

                sink.emit(EngineEvent::Progress(GestureProgress {
                    gesture_id,
                    stage: Stage::Acquiring,
                    bytes: Some(0),
                }));

                let mut bytes = Vec::new();
                let mut stream = response.bytes_stream();
                while let Some(chunk) = stream.next().await {
                    let chunk = chunk
                        .map_err(|err| AcquireError::new(FailureKind::Network, err.to_string()))?;
                    bytes.extend_from_slice(&chunk);
                    sink.emit(EngineEvent::Progress(GestureProgress {
                        gesture_id,
                        stage: Stage::Acquiring,
                        bytes: Some(bytes.len() as u64),
                    }));
                }

                Ok(RawPayload {
                    bytes: bytes.into(),
                    origin: PayloadOrigin::Link,
                })
            }
        }
    }
}
