use std::sync::{Arc, Mutex};

use bytes::Bytes;
use wadreader_engine::{
    Acquirer, AcquireSource, EngineEvent, FailureKind, GestureProgress, PayloadOrigin,
    ProgressSink, ReqwestAcquirer, Stage,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct TestSink {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl TestSink {
    fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn take(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[tokio::test]
async fn link_source_fetches_bytes_and_emits_progress() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doom.wad"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"PWAD-bytes".to_vec(), "application/octet-stream"),
        )
        .mount(&server)
        .await;

    let acquirer = ReqwestAcquirer::new();
    let sink = TestSink::new();
    let url = format!("{}/doom.wad", server.uri());

    let payload = acquirer
        .acquire(1, AcquireSource::Link { url }, &sink)
        .await
        .expect("acquire ok");
    assert_eq!(payload.origin, PayloadOrigin::Link);
    assert_eq!(payload.bytes.as_ref(), b"PWAD-bytes");

    let stages = sink
        .take()
        .into_iter()
        .filter_map(|event| match event {
            EngineEvent::Progress(GestureProgress { stage, .. }) => Some(stage),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert!(stages.contains(&Stage::Acquiring));
}

#[tokio::test]
async fn non_success_status_fails_with_embedded_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.wad"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let acquirer = ReqwestAcquirer::new();
    let sink = TestSink::new();
    let url = format!("{}/missing.wad", server.uri());

    let err = acquirer
        .acquire(2, AcquireSource::Link { url }, &sink)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
    assert!(err.message.contains("404"), "message: {}", err.message);
}

#[tokio::test]
async fn unparseable_url_fails_without_network() {
    let acquirer = ReqwestAcquirer::new();
    let sink = TestSink::new();

    let err = acquirer
        .acquire(
            3,
            AcquireSource::Link {
                url: "not a url".to_string(),
            },
            &sink,
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn unreachable_host_propagates_network_failure() {
    // A pooled server (`MockServer::start`) keeps its listener alive after
    // drop; use a dedicated server so dropping it actually closes the port.
    let server = MockServer::builder().start().await;
    let url = format!("{}/gone.wad", server.uri());
    drop(server);

    let acquirer = ReqwestAcquirer::new();
    let sink = TestSink::new();

    let err = acquirer
        .acquire(4, AcquireSource::Link { url }, &sink)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[tokio::test]
async fn file_source_resolves_immediately() {
    let acquirer = ReqwestAcquirer::new();
    let sink = TestSink::new();

    let payload = acquirer
        .acquire(
            5,
            AcquireSource::File {
                name: "test.wad".to_string(),
                bytes: Bytes::from_static(b"IWAD"),
            },
            &sink,
        )
        .await
        .expect("acquire ok");
    assert_eq!(payload.origin, PayloadOrigin::File);
    assert_eq!(payload.bytes.as_ref(), b"IWAD");
}
