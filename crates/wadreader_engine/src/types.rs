use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

pub type GestureId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Acquiring,
    Resolving,
    Decoding,
    Done,
}

/// The drop source as seen by the engine: either a URL to fetch or a local
/// file whose bytes the shell has already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireSource {
    Link { url: String },
    File { name: String, bytes: Bytes },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadOrigin {
    Link,
    File,
}

/// Raw bytes produced by acquisition. Created once, consumed once by the
/// container resolver, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPayload {
    pub bytes: Bytes,
    pub origin: PayloadOrigin,
}

/// Bytes believed to be in the target decodable format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub bytes: Bytes,
    pub provenance: AssetProvenance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetProvenance {
    /// Decompressed out of a container archive.
    ArchiveEntry { entry_name: String },
    /// The acquired bytes were not an archive and were passed through as-is.
    Passthrough,
}

/// A single decoded image, PNG-encoded and base64-wrapped for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedImage {
    pub name: String,
    #[serde(rename = "imageAsBase64EncodedPng")]
    pub png_base64: String,
}

/// The four named image groups a WAD can contribute.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageCollection {
    pub sprites: Vec<NamedImage>,
    pub flats: Vec<NamedImage>,
    pub textures: Vec<NamedImage>,
    #[serde(rename = "otherGraphics")]
    pub other_graphics: Vec<NamedImage>,
}

impl ImageCollection {
    /// True when all four groups are empty: a valid WAD that introduces no
    /// new graphics, distinct from a failure.
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
            && self.flats.is_empty()
            && self.textures.is_empty()
            && self.other_graphics.is_empty()
    }
}

/// Decoder-reported sub-phase durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeTimings {
    #[serde(rename = "timeToParseFile_in_ms")]
    pub parse_ms: u64,
    #[serde(rename = "timeToBuildImages_in_ms")]
    pub build_ms: u64,
}

/// What the injected decoder resolves with. `wad_images` may be absent when
/// the decoder violates its contract; the pipeline adapter turns that into a
/// failure rather than passing a malformed success along.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodeOutput {
    #[serde(rename = "wadImages")]
    pub wad_images: Option<ImageCollection>,
    #[serde(default)]
    pub timings: Option<DecodeTimings>,
}

/// Unified result of one drop gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    Success {
        images: ImageCollection,
        timings: Option<DecodeTimings>,
    },
    Failure {
        reason: String,
    },
}

/// Outcome plus observed wall time from just before acquisition to decode
/// settlement. Independent of the decoder's self-reported timings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub outcome: PipelineOutcome,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureProgress {
    pub gesture_id: GestureId,
    pub stage: Stage,
    pub bytes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Progress(GestureProgress),
    DropProcessed {
        gesture_id: GestureId,
        report: PipelineReport,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquireError {
    pub kind: FailureKind,
    pub message: String,
}

impl AcquireError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for AcquireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AcquireError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
