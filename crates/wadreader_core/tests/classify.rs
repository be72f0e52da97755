use wadreader_core::{
    carries_files, carries_link, classify, is_classifiable, DropPayload, DropSource, FILES_TYPE,
    HTML_TYPE, URI_LIST_TYPE, URL_TYPE, URL_TYPE_LEGACY,
};

fn descriptors(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn link_payload(uri: &str, html: Option<&str>) -> DropPayload {
    let mut names = vec![URI_LIST_TYPE];
    if html.is_some() {
        names.push(HTML_TYPE);
    }
    DropPayload {
        descriptors: descriptors(&names),
        uri: Some(uri.to_string()),
        html_fragment: html.map(ToOwned::to_owned),
        file_names: Vec::new(),
    }
}

fn file_payload(names: &[&str]) -> DropPayload {
    DropPayload {
        descriptors: descriptors(&[FILES_TYPE]),
        uri: None,
        html_fragment: None,
        file_names: names.iter().map(|n| n.to_string()).collect(),
    }
}

#[test]
fn files_only_descriptor_classifies_as_file() {
    let payload = file_payload(&["doom2.wad"]);
    assert_eq!(
        classify(&payload),
        Some(DropSource::File {
            name: "doom2.wad".to_string(),
            label: "doom2.wad".to_string(),
        })
    );
}

#[test]
fn each_link_descriptor_classifies_as_link() {
    for descriptor in [URI_LIST_TYPE, URL_TYPE_LEGACY, URL_TYPE] {
        let payload = DropPayload {
            descriptors: descriptors(&[descriptor]),
            uri: Some("https://example.com/doom.wad".to_string()),
            html_fragment: None,
            file_names: Vec::new(),
        };
        assert!(carries_link(&payload.descriptors), "{descriptor}");
        assert_eq!(
            classify(&payload),
            Some(DropSource::Link {
                uri: "https://example.com/doom.wad".to_string(),
                label: "https://example.com/doom.wad".to_string(),
            })
        );
    }
}

#[test]
fn unrelated_descriptors_are_not_classifiable() {
    let payload = DropPayload {
        descriptors: descriptors(&["text/plain"]),
        ..DropPayload::default()
    };
    assert!(!is_classifiable(&payload.descriptors));
    assert!(!carries_files(&payload.descriptors));
    assert_eq!(classify(&payload), None);
}

#[test]
fn link_wins_when_both_descriptors_present() {
    // Link-first ordering is preserved legacy behavior, not a documented policy.
    let payload = DropPayload {
        descriptors: descriptors(&[URI_LIST_TYPE, FILES_TYPE]),
        uri: Some("https://example.com/a.wad".to_string()),
        html_fragment: None,
        file_names: vec!["local.wad".to_string()],
    };
    assert!(matches!(classify(&payload), Some(DropSource::Link { .. })));
}

#[test]
fn link_descriptor_without_uri_falls_back_to_file() {
    let payload = DropPayload {
        descriptors: descriptors(&[URI_LIST_TYPE, FILES_TYPE]),
        uri: None,
        html_fragment: None,
        file_names: vec!["local.wad".to_string()],
    };
    assert!(matches!(classify(&payload), Some(DropSource::File { .. })));
}

#[test]
fn anchor_text_preferred_over_raw_uri() {
    let payload = link_payload(
        "https://example.com/doom.wad",
        Some(r#"<a href="https://example.com/doom.wad">The original shareware WAD</a>"#),
    );
    let source = classify(&payload).unwrap();
    assert_eq!(source.label(), "The original shareware WAD");
}

#[test]
fn anchor_with_nested_elements_falls_back_to_uri() {
    let payload = link_payload(
        "https://example.com/doom.wad",
        Some(r#"<a href="x"><b>bold</b> label</a>"#),
    );
    assert_eq!(classify(&payload).unwrap().label(), "https://example.com/doom.wad");
}

#[test]
fn multiple_anchors_fall_back_to_uri() {
    let payload = link_payload(
        "https://example.com/doom.wad",
        Some(r#"<a href="x">one</a><a href="y">two</a>"#),
    );
    assert_eq!(classify(&payload).unwrap().label(), "https://example.com/doom.wad");
}

#[test]
fn multi_file_drop_keeps_only_first() {
    let payload = file_payload(&["first.wad", "second.wad", "third.zip"]);
    assert_eq!(
        classify(&payload),
        Some(DropSource::File {
            name: "first.wad".to_string(),
            label: "first.wad".to_string(),
        })
    );
}

#[test]
fn files_descriptor_without_files_is_not_classified() {
    let payload = DropPayload {
        descriptors: descriptors(&[FILES_TYPE]),
        ..DropPayload::default()
    };
    assert_eq!(classify(&payload), None);
}
