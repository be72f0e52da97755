mod drop_target;
mod effects;
mod present;
mod ticker;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use bytes::Bytes;
use wadreader_core::{DropPayload, TargetView, FILES_TYPE, URI_LIST_TYPE};
use wadreader_engine::{DecodeOutput, ImageCollection, WadDecoder};

use drop_target::DropTarget;
use effects::DroppedFile;
use present::ConsolePresenter;

/// Stand-in for the external binary decoder until one is wired in: checks the
/// WAD magic and reports an empty image collection.
struct PlaceholderDecoder;

#[async_trait::async_trait]
impl WadDecoder for PlaceholderDecoder {
    async fn decode(&self, bytes: Bytes) -> Result<DecodeOutput, String> {
        match bytes.get(..4) {
            Some(b"IWAD") | Some(b"PWAD") => Ok(DecodeOutput {
                wad_images: Some(ImageCollection::default()),
                timings: None,
            }),
            _ => Err("data does not start with a WAD magic number".to_string()),
        }
    }
}

fn main() {
    wad_logging::initialize();

    let Some(arg) = std::env::args().nth(1) else {
        eprintln!("usage: wadreader_app <url-or-path-to-wad-or-zip>");
        std::process::exit(2);
    };

    let (payload, file) = match build_gesture(&arg) {
        Ok(gesture) => gesture,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    };

    let mut target = DropTarget::new(Arc::new(PlaceholderDecoder), Box::new(ConsolePresenter));

    // Simulate one full drag-and-drop gesture.
    target.on_drag_enter(payload.descriptors.clone());
    target.on_drop(payload, file);

    while !target.is_idle() {
        if target.pump() {
            if let TargetView::Busy { heading, wait_line } = target.view().target {
                println!("{heading}");
                println!("{wait_line}");
            }
        }
        thread::sleep(Duration::from_millis(20));
    }
}

fn build_gesture(arg: &str) -> Result<(DropPayload, Option<DroppedFile>), String> {
    if arg.starts_with("http://") || arg.starts_with("https://") {
        let payload = DropPayload {
            descriptors: vec![URI_LIST_TYPE.to_string()],
            uri: Some(arg.to_string()),
            html_fragment: None,
            file_names: Vec::new(),
        };
        return Ok((payload, None));
    }

    let bytes = std::fs::read(arg).map_err(|err| format!("could not read {arg}: {err}"))?;
    let name = std::path::Path::new(arg)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| arg.to_string());
    let payload = DropPayload {
        descriptors: vec![FILES_TYPE.to_string()],
        uri: None,
        html_fragment: None,
        file_names: vec![name.clone()],
    };
    let file = DroppedFile {
        name,
        bytes: bytes.into(),
    };
    Ok((payload, Some(file)))
}
