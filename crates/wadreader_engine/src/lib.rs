//! WAD reader engine: the asynchronous drop-to-display pipeline.
mod acquire;
mod container;
mod engine;
mod pipeline;
mod types;

pub use acquire::{Acquirer, ChannelProgressSink, ProgressSink, ReqwestAcquirer};
pub use container::{probe_archive, resolve, ArchiveProbe, ContainerError, WAD_EXTENSION};
pub use engine::EngineHandle;
pub use pipeline::{run, WadDecoder};
pub use types::{
    AcquireError, AcquireSource, AssetProvenance, DecodeOutput, DecodeTimings, EngineEvent,
    FailureKind, GestureId, GestureProgress, ImageCollection, NamedImage, PayloadOrigin,
    PipelineOutcome, PipelineReport, RawPayload, ResolvedAsset, Stage,
};
