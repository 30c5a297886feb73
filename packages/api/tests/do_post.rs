//! Posting built hits through stubbed and local endpoints

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use axum::Router;
use axum::extract::{RawQuery, State};
use axum::routing::post;
use hitq::{CollectConfig, PostOutcome, QueryBuilder, RequestExecutor, Transport};
use hitq_client::prelude::{StatusCode, TransportError, TransportResponse, Url};

#[derive(Debug, Default)]
struct Recorder {
    status: Option<StatusCode>,
    urls: Mutex<Vec<String>>,
}

impl Transport for Recorder {
    fn post(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(TransportResponse::new(self.status.unwrap_or(StatusCode::OK), ""))
    }
}

fn stub_builder(status: StatusCode) -> (QueryBuilder, Arc<Recorder>) {
    let recorder = Arc::new(Recorder {
        status: Some(status),
        ..Recorder::default()
    });
    let config = CollectConfig::default()
        .with_endpoint(Url::parse("http://host/collect").unwrap());
    let executor = RequestExecutor::from_shared(config, recorder.clone());
    (QueryBuilder::with_executor(&executor), recorder)
}

#[test]
fn ok_status_posts_the_built_uri() {
    let (mut qb, recorder) = stub_builder(StatusCode::OK);
    qb.with_v1().with_tid("UA-1-1").with_t_as_page_view();

    let outcome = qb.do_post().unwrap();
    assert!(outcome.is_delivered());
    assert_eq!(
        recorder.urls.lock().unwrap().as_slice(),
        ["http://host/collect?v=1&tid=UA-1-1&t=pageview"]
    );
}

#[test]
fn conflict_is_post_failed_with_uri() {
    let (mut qb, _recorder) = stub_builder(StatusCode::CONFLICT);
    qb.with_v1();

    let err = qb.do_post().unwrap_err();
    assert!(err.is_post_failed());
    assert_eq!(err.status(), Some(StatusCode::CONFLICT));
    assert_eq!(
        err.to_string(),
        "the post failed for the URI http://host/collect?v=1 (http status: 409)"
    );
}

#[test]
fn posting_does_not_clear_the_hit() {
    let (mut qb, recorder) = stub_builder(StatusCode::OK);
    qb.with_v1();
    qb.do_post().unwrap();
    qb.with_tid("UA-1-1");
    qb.do_post().unwrap();

    assert_eq!(
        recorder.urls.lock().unwrap().as_slice(),
        ["http://host/collect?v=1", "http://host/collect?v=1&tid=UA-1-1"]
    );
}

#[test]
fn disabled_tracking_skips_the_transport() {
    let recorder = Arc::new(Recorder::default());
    let executor = RequestExecutor::from_shared(CollectConfig::disabled(), recorder.clone());
    let mut qb = QueryBuilder::with_executor(&executor);
    qb.with_v1();

    assert_eq!(qb.do_post().unwrap(), PostOutcome::Disabled);
    assert!(recorder.urls.lock().unwrap().is_empty());
}

#[test]
fn invalid_config_is_reported_on_post() {
    let recorder = Arc::new(Recorder::default());
    let config = CollectConfig::default()
        .with_endpoint(Url::parse("http://host/collect").unwrap())
        .with_timeout(Duration::from_secs(5));
    let executor = RequestExecutor::from_shared(config, recorder.clone());
    let mut qb = QueryBuilder::with_executor(&executor);
    qb.with_v1();

    assert!(qb.do_post().unwrap_err().is_config());
    assert!(recorder.urls.lock().unwrap().is_empty());
}

type Seen = Arc<Mutex<Vec<String>>>;

async fn collect(State(seen): State<Seen>, RawQuery(query): RawQuery) -> &'static str {
    seen.lock().unwrap().push(query.unwrap_or_default());
    ""
}

#[test]
fn delivers_to_a_local_collect_endpoint() {
    let _ = env_logger::builder().is_test(true).try_init();

    let seen: Seen = Arc::default();
    let state = Arc::clone(&seen);
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            let app = Router::new().route("/collect", post(collect)).with_state(state);
            axum::serve(listener, app).await.unwrap();
        });
    });

    let config = CollectConfig::default()
        .with_endpoint(Url::parse(&format!("http://{addr}/collect")).unwrap())
        .with_timeout(Duration::from_secs(5))
        .with_connect_timeout(Duration::from_secs(2));
    let mut qb = QueryBuilder::from_config(&config);
    qb.with_v1()
        .with_tid("UA-1-1")
        .with_cid("35009a79-1a05-49d7-b876-2b884d0f825b")
        .with_t_as_event()
        .with_ec("video play")
        .unwrap();

    assert_eq!(qb.do_post().unwrap().status(), Some(StatusCode::OK));
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        ["v=1&tid=UA-1-1&cid=35009a79-1a05-49d7-b876-2b884d0f825b&t=event&ec=video+play"]
    );
}
