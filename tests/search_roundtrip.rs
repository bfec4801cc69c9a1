//! End-to-end request tests against a one-shot fake search service.
//!
//! Each test binds a loopback `TcpListener` that takes exactly one connection.
//! Most answer with a canned status and body and hand the raw request back for
//! inspection; one holds the connection open without answering.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;
use std::time::Duration;

use tokio::sync::mpsc;

use phrasefind::args::search::{EXIT_OK, EXIT_REJECTED, run_search};
use phrasefind::logic::{SubmitAction, handle_commit, handle_completion};
use phrasefind::sources::{PageMetadata, SearchConfig, SearchError, submit_search};
use phrasefind::state::{
    AppState, FormState, Modal, ResultItem, SearchCompletion, SearchOutcome,
};

/// Raw request captured by the fake service.
struct Captured {
    /// Request line and headers, lower-cased.
    head: String,
    /// Request body, verbatim.
    body: String,
}

/// What: Serve one HTTP response on an ephemeral port.
///
/// Inputs:
/// - `status`: Status code to answer with.
/// - `body`: Response body.
///
/// Output:
/// - Endpoint URL and a handle yielding the captured request.
fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral");
    let addr = listener.local_addr().expect("local_addr");
    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .expect("read timeout");
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let header_end = loop {
            let n = stream.read(&mut chunk).expect("read");
            assert!(n > 0, "connection closed before headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let head = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
        let content_length = head
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        while buf.len() < header_end + content_length {
            let n = stream.read(&mut chunk).expect("read body");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let req_body = String::from_utf8_lossy(&buf[header_end..]).to_string();
        let resp = format!(
            "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(resp.as_bytes()).expect("write response");
        Captured {
            head,
            body: req_body,
        }
    });
    (format!("http://{addr}/api"), handle)
}

/// What: Accept one connection and never answer it.
///
/// Inputs:
/// - `hold`: How long the connection is kept open.
///
/// Output:
/// - Endpoint URL and the handle of the holding thread.
fn serve_silent(hold: Duration) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral");
    let addr = listener.local_addr().expect("local_addr");
    let handle = std::thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        std::thread::sleep(hold);
        drop(stream);
    });
    (format!("http://{addr}/api"), handle)
}

fn config(endpoint: String) -> SearchConfig {
    SearchConfig {
        endpoint,
        csrf: None,
        timeout: Some(Duration::from_secs(5)),
    }
}

/// What: Drive one commit through the controller, the transport and back.
///
/// Inputs:
/// - `app`: State whose `input` holds the phrase to submit.
/// - `cfg`: Request settings pointing at the fake service.
///
/// Output:
/// - Terminal form state.
async fn commit_and_complete(app: &mut AppState, cfg: &SearchConfig) -> FormState {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let action = handle_commit(app, &tx);
    assert!(matches!(action, SubmitAction::Dispatched(_)));
    assert!(app.input.is_empty(), "input must clear before completion");
    let q = rx.recv().await.expect("query dispatched");
    let outcome = submit_search(&cfg.client(), cfg, &q.text).await;
    handle_completion(
        app,
        SearchCompletion {
            id: q.id,
            phrase: q.text,
            outcome,
        },
    )
}

#[tokio::test]
/// What: The documented `report bug` round trip.
///
/// Inputs:
/// - Input `report bug`; service answers 200 with one match.
///
/// Output:
/// - POST body `search=report+bug`; label `report bug`; one row `a.go 3 0.5`.
async fn report_bug_renders_single_row() {
    let (url, server) = serve_once(200, r#"[{"Filename":"a.go","Count":3,"Spacing":0.5}]"#);
    let cfg = config(url);
    let mut app = AppState {
        input: "report bug".into(),
        ..AppState::default()
    };

    let state = commit_and_complete(&mut app, &cfg).await;
    let req = server.join().expect("server thread");

    assert_eq!(state, FormState::Success);
    assert!(req.head.starts_with("post /api "), "head: {}", req.head);
    assert!(req.head.contains("application/x-www-form-urlencoded"));
    assert_eq!(req.body, "search=report+bug");
    assert_eq!(app.view.phrase(), "report bug");
    assert_eq!(app.view.rows(), &[ResultItem::new("a.go", 3, 0.5)]);
    let row = &app.view.rows()[0];
    assert_eq!(
        (row.count.to_string(), row.proximity.to_string()),
        ("3".to_string(), "0.5".to_string())
    );
}

#[tokio::test]
/// What: An empty array clears the list but still shows the phrase.
async fn empty_array_clears_rows_and_updates_phrase() {
    let (url, server) = serve_once(200, "[]");
    let cfg = config(url);
    let mut app = AppState {
        input: "nothing here".into(),
        ..AppState::default()
    };
    app.view.render("before", vec![ResultItem::new("old.go", 2, 1.0)]);

    commit_and_complete(&mut app, &cfg).await;
    server.join().expect("server thread");

    assert!(app.view.is_empty());
    assert_eq!(app.view.phrase(), "nothing here");
}

#[tokio::test]
/// What: A 400 leaves the previous rows and label untouched.
///
/// Inputs:
/// - View already showing a result; service answers 400.
///
/// Output:
/// - View identical to before; "Incorrect data" alert.
async fn bad_request_preserves_previous_view() {
    let (url, server) = serve_once(400, "Bad Request");
    let cfg = config(url);
    let mut app = AppState {
        input: "the".into(),
        ..AppState::default()
    };
    app.view.render("before", vec![ResultItem::new("old.go", 2, 1.0)]);
    let before = app.view.clone();

    let state = commit_and_complete(&mut app, &cfg).await;
    server.join().expect("server thread");

    assert_eq!(state, FormState::ClientError);
    assert_eq!(app.view, before);
    assert_eq!(
        app.modal,
        Modal::Alert {
            message: "Incorrect data".into()
        }
    );
}

#[tokio::test]
/// What: A 500 is silent under strict parity and leaves the view alone.
async fn server_error_is_silent_under_parity() {
    let (url, server) = serve_once(500, "oops");
    let cfg = config(url);
    let mut app = AppState {
        input: "report bug".into(),
        strict_parity: true,
        ..AppState::default()
    };

    let state = commit_and_complete(&mut app, &cfg).await;
    server.join().expect("server thread");

    assert_eq!(state, FormState::Rejected);
    assert_eq!(app.modal, Modal::None);
    assert!(app.view.phrase().is_empty());
}

#[tokio::test]
/// What: CSRF header from page metadata travels with the request.
///
/// Inputs:
/// - Metadata page with `_csrf` and `_csrf_header`; attach enabled.
///
/// Output:
/// - Request carries `x-csrf-token: tok-42`.
async fn csrf_header_is_attached_when_configured() {
    let (url, server) = serve_once(200, "[]");
    let meta = PageMetadata::from_html(
        r#"<html><head><meta name="_csrf" content="tok-42"><meta name="_csrf_header" content="X-CSRF-TOKEN"></head></html>"#,
    );
    let cfg = SearchConfig::new(&url, &meta, true, 5);

    let outcome = submit_search(&cfg.client(), &cfg, "report bug").await;
    let req = server.join().expect("server thread");

    assert!(matches!(
        outcome,
        SearchOutcome::Success(ref v) if v.is_empty()
    ));
    assert!(req.head.contains("x-csrf-token: tok-42"), "head: {}", req.head);
}

#[tokio::test]
/// What: One-shot CLI search prints tab-separated rows in server order.
async fn cli_search_prints_rows() {
    let (url, server) = serve_once(
        200,
        r#"[{"Filename":"b.go","Count":1,"Spacing":2},{"Filename":"a.go","Count":3,"Spacing":0.5}]"#,
    );
    let cfg = config(url);
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = run_search("report bug", &cfg, &mut out, &mut err).await;
    server.join().expect("server thread");

    assert_eq!(code, EXIT_OK);
    assert_eq!(String::from_utf8_lossy(&out), "b.go\t1\t2\na.go\t3\t0.5\n");
    assert!(err.is_empty());
}

#[tokio::test]
async fn cli_search_reports_rejection() {
    let (url, server) = serve_once(400, "");
    let cfg = config(url);
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = run_search("report bug", &cfg, &mut out, &mut err).await;
    server.join().expect("server thread");

    assert_eq!(code, EXIT_REJECTED);
    assert!(out.is_empty());
    assert_eq!(String::from_utf8_lossy(&err).trim(), "Incorrect data");
}

#[tokio::test]
/// What: A service that never answers hits the request timeout.
///
/// Inputs:
/// - Connection accepted but left silent; 1 s timeout.
///
/// Output:
/// - Transport failure, surfaced as "Search service unreachable".
async fn silent_service_times_out_as_unreachable() {
    let (url, server) = serve_silent(Duration::from_secs(4));
    let cfg = SearchConfig {
        endpoint: url,
        csrf: None,
        timeout: Some(Duration::from_secs(1)),
    };
    let mut app = AppState {
        input: "report bug".into(),
        ..AppState::default()
    };

    let started = std::time::Instant::now();
    let (tx, mut rx) = mpsc::unbounded_channel();
    handle_commit(&mut app, &tx);
    let q = rx.recv().await.expect("query dispatched");
    let outcome = submit_search(&cfg.client(), &cfg, &q.text).await;
    assert!(started.elapsed() < Duration::from_secs(4));
    assert!(
        matches!(outcome, SearchOutcome::Failed(SearchError::Transport(_))),
        "got {outcome:?}"
    );

    let state = handle_completion(
        &mut app,
        SearchCompletion {
            id: q.id,
            phrase: q.text,
            outcome,
        },
    );
    server.join().expect("server thread");

    assert_eq!(state, FormState::Rejected);
    assert_eq!(
        app.modal,
        Modal::Alert {
            message: "Search service unreachable".into()
        }
    );
}
