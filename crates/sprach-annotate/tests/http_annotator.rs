//! `HttpAnnotator` against a local `tiny_http` stand-in for the service.

use std::io::Read;
use std::thread;

use pretty_assertions::assert_eq;
use sprach_config::AnnotatorConfig;
use sprach_core::{AnnotationError, Annotator, SentenceBuilder, TokenSpec};
use sprach_annotate::HttpAnnotator;

/// Serve exactly one request with the given status and body. Returns the
/// service URL and a handle yielding the request body that was received.
fn serve_once(status: u16, body: String) -> (String, thread::JoinHandle<String>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind");
    let port = server.server_addr().to_ip().expect("ip listener").port();
    let handle = thread::spawn(move || {
        let mut request = server.recv().expect("request");
        let mut received = String::new();
        request
            .as_reader()
            .read_to_string(&mut received)
            .expect("read body");
        let response = tiny_http::Response::from_string(body)
            .with_status_code(status)
            .with_header(
                tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
            );
        request.respond(response).expect("respond");
        received
    });
    (format!("http://127.0.0.1:{port}/annotate"), handle)
}

fn annotator(url: String) -> HttpAnnotator {
    HttpAnnotator::new(&AnnotatorConfig {
        url,
        timeout_secs: 5,
    })
    .unwrap()
}

#[test]
fn decodes_annotated_sentence() {
    let sentence = SentenceBuilder::new()
        .push(TokenSpec::new("Ich", "PRON").dep("sb").head(1))
        .push(TokenSpec::new("gehe", "VERB").lemma("gehen").dep("ROOT").feats("VerbForm=Fin"))
        .push(TokenSpec::punct(".").head(1))
        .build()
        .unwrap();
    let (url, handle) = serve_once(200, serde_json::to_string(&sentence).unwrap());

    let annotated = annotator(url).annotate("Ich gehe.").unwrap();
    assert_eq!(annotated, sentence);

    let request: serde_json::Value = serde_json::from_str(&handle.join().unwrap()).unwrap();
    assert_eq!(request, serde_json::json!({"text": "Ich gehe."}));
}

#[test]
fn error_status_is_reported() {
    let (url, handle) = serve_once(503, r#"{"detail":"model loading"}"#.to_string());
    let result = annotator(url).annotate("Hallo.");
    handle.join().unwrap();
    assert!(matches!(result, Err(AnnotationError::Status { status: 503, .. })));
}

#[test]
fn invariant_violation_is_a_decode_error() {
    // head 7 does not exist
    let body = r#"{"tokens":[{"index":0,"text":"Hallo","lemma":"hallo","pos":"INTJ",
        "is_alpha":true,"is_punct":false,"head":7,"subtree":[0]}]}"#;
    let (url, handle) = serve_once(200, body.to_string());
    let result = annotator(url).annotate("Hallo.");
    handle.join().unwrap();
    assert!(matches!(result, Err(AnnotationError::Decode(_))));
}

#[test]
fn unreachable_service_is_a_transport_error() {
    let port = {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind");
        server.server_addr().to_ip().expect("ip listener").port()
    };
    let result = annotator(format!("http://127.0.0.1:{port}/annotate")).annotate("Hallo.");
    assert!(matches!(result, Err(AnnotationError::Transport(_))));
}
