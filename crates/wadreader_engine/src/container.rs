use std::io::{Cursor, Read};

use bytes::Bytes;
use wad_logging::wad_debug;
use zip::ZipArchive;

use crate::{AssetProvenance, RawPayload, ResolvedAsset};

/// Target entry extension when unwrapping a container archive.
pub const WAD_EXTENSION: &str = "wad";

/// Explicit outcome of probing the payload as a container archive, so the
/// not-an-archive signal is structurally visible instead of an exception
/// being swallowed somewhere.
pub enum ArchiveProbe {
    Archive(Box<ZipArchive<Cursor<Bytes>>>),
    NotAnArchive,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContainerError {
    #[error("archive contains no entries with a .{extension} extension")]
    NoMatchingEntry { extension: String },
    #[error("failed to read archive entry {name}: {message}")]
    EntryRead { name: String, message: String },
    #[error("archive extraction task failed: {0}")]
    Task(String),
}

/// Attempts to interpret the bytes as a zip archive.
pub fn probe_archive(bytes: &Bytes) -> ArchiveProbe {
    match ZipArchive::new(Cursor::new(bytes.clone())) {
        Ok(archive) => ArchiveProbe::Archive(Box::new(archive)),
        Err(err) => {
            // Failing to parse is taken as evidence the payload was never an
            // archive, not as an error condition.
            wad_debug!("payload is not a zip archive ({err}); passing bytes through");
            ArchiveProbe::NotAnArchive
        }
    }
}

/// Resolves acquired bytes into a decodable asset.
///
/// If the payload is an archive, the first top-level entry with a `.wad`
/// extension (case-insensitive) is decompressed; an archive with no matching
/// entry is a terminal failure. A non-archive payload passes through
/// unchanged. Decompression may be CPU-bound, so it runs off the async
/// executor as a blocking task.
pub async fn resolve(payload: RawPayload) -> Result<ResolvedAsset, ContainerError> {
    tokio::task::spawn_blocking(move || resolve_blocking(payload))
        .await
        .map_err(|err| ContainerError::Task(err.to_string()))?
}

fn resolve_blocking(payload: RawPayload) -> Result<ResolvedAsset, ContainerError> {
    let mut archive = match probe_archive(&payload.bytes) {
        ArchiveProbe::Archive(archive) => archive,
        ArchiveProbe::NotAnArchive => {
            return Ok(ResolvedAsset {
                bytes: payload.bytes,
                provenance: AssetProvenance::Passthrough,
            });
        }
    };

    // Top-level scan only: a nested archive is just a non-matching entry.
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|err| {
            ContainerError::EntryRead {
                name: format!("#{index}"),
                message: err.to_string(),
            }
        })?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();
        if !has_wad_extension(&name) {
            continue;
        }

        wad_debug!("selected archive entry {name}");
        let mut data = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut data)
            .map_err(|err| ContainerError::EntryRead {
                name: name.clone(),
                message: err.to_string(),
            })?;
        return Ok(ResolvedAsset {
            bytes: data.into(),
            provenance: AssetProvenance::ArchiveEntry { entry_name: name },
        });
    }

    Err(ContainerError::NoMatchingEntry {
        extension: WAD_EXTENSION.to_string(),
    })
}

/// Case-insensitive match on the text after the final `.`.
fn has_wad_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(WAD_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_is_case_insensitive_and_final_dot_only() {
        assert!(has_wad_extension("LEVEL.WAD"));
        assert!(has_wad_extension("level.wad"));
        assert!(has_wad_extension("dir/level.Wad"));
        assert!(!has_wad_extension("level.wad.txt"));
        assert!(!has_wad_extension("readme.txt"));
        assert!(!has_wad_extension("wad"));
    }
}
