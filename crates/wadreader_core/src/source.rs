use scraper::{Html, Selector};

/// Standard drag-and-drop descriptor for a list of URIs.
pub const URI_LIST_TYPE: &str = "text/uri-list";
/// Descriptor emitted by older browsers for a dragged link.
pub const URL_TYPE_LEGACY: &str = "Url";
/// Uppercase variant of the legacy link descriptor.
pub const URL_TYPE: &str = "URL";
/// Descriptor for an HTML fragment accompanying a dragged link.
pub const HTML_TYPE: &str = "text/html";
/// Descriptor present when local files are being dropped.
pub const FILES_TYPE: &str = "Files";

/// Event-supplied drop data, flattened out of the platform's data-transfer object.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DropPayload {
    /// The data-transfer type descriptors present on the event.
    pub descriptors: Vec<String>,
    /// The first dragged URI, when a link descriptor is present.
    pub uri: Option<String>,
    /// The HTML fragment accompanying a dragged link, if any.
    pub html_fragment: Option<String>,
    /// Names of the dropped files, in drop order.
    pub file_names: Vec<String>,
}

/// A classified drop: either a remote link or a local file reference.
///
/// The label is a human-readable identifier for the source and is always
/// non-empty. Display-time truncation is a view-model concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropSource {
    Link { uri: String, label: String },
    File { name: String, label: String },
}

impl DropSource {
    pub fn label(&self) -> &str {
        match self {
            DropSource::Link { label, .. } | DropSource::File { label, .. } => label,
        }
    }
}

/// True when the descriptors indicate a dragged hyperlink.
pub fn carries_link(descriptors: &[String]) -> bool {
    descriptors
        .iter()
        .any(|d| d == URI_LIST_TYPE || d == URL_TYPE_LEGACY || d == URL_TYPE)
}

/// True when the descriptors indicate dropped local files.
pub fn carries_files(descriptors: &[String]) -> bool {
    descriptors.iter().any(|d| d == FILES_TYPE)
}

/// Gating check for `dragenter`/`dragover`: either variant makes the drag valid.
pub fn is_classifiable(descriptors: &[String]) -> bool {
    carries_link(descriptors) || carries_files(descriptors)
}

/// Classifies a drop into a [`DropSource`], or `None` when the payload carries
/// neither a usable link nor a file.
///
/// The link branch is checked before the file branch. A drop carrying both
/// descriptors is ambiguous; link-first preserves the legacy ordering and is
/// not a documented guarantee.
pub fn classify(payload: &DropPayload) -> Option<DropSource> {
    if carries_link(&payload.descriptors) {
        if let Some(uri) = payload.uri.as_deref().filter(|u| !u.is_empty()) {
            let label = payload
                .html_fragment
                .as_deref()
                .and_then(anchor_label)
                .unwrap_or_else(|| uri.to_string());
            return Some(DropSource::Link {
                uri: uri.to_string(),
                label,
            });
        }
    }
    if carries_files(&payload.descriptors) {
        if let Some(name) = payload.file_names.first() {
            // Multi-file drops discard all but the first file.
            let label = if name.is_empty() {
                "unnamed file".to_string()
            } else {
                name.clone()
            };
            return Some(DropSource::File {
                name: name.clone(),
                label,
            });
        }
    }
    None
}

/// Extracts a label from a dragged-link HTML fragment.
///
/// Only accepted when the fragment contains exactly one anchor element whose
/// content is plain text. Anything else falls back to the raw URI.
fn anchor_label(html: &str) -> Option<String> {
    let fragment = Html::parse_fragment(html);
    let selector = Selector::parse("a").ok()?;
    let mut anchors = fragment.select(&selector);
    let anchor = anchors.next()?;
    if anchors.next().is_some() {
        return None;
    }
    let has_element_children = anchor.children().any(|child| child.value().is_element());
    if has_element_children {
        return None;
    }
    let text: String = anchor.text().collect::<String>().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
