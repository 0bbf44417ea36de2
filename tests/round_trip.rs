//! End-to-end exchanges against a local echo server.
//!
//! Starts an axum server on a random port, then drives every wrapper over
//! real HTTP through `ReqwestClient`. The echo route reflects the method,
//! the relevant headers and the raw body back as JSON.

use axum::Router;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::routing::{any, get};
use serde_json::{Value, json};

use simple_http::request::{Error, RequestDescriptor, RequestInput, SimpleHttp};
use simple_http::transport::ReqwestClient;

async fn echo(method: Method, headers: HeaderMap, body: String) -> axum::Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    axum::Json(json!({
        "method": method.as_str(),
        "content_type": header("content-type"),
        "authorization": header("authorization"),
        "body": body,
    }))
}

fn app() -> Router {
    Router::new()
        .route("/echo", any(echo))
        .route("/text", get(|| async { "not json" }))
        .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "nope") }))
}

/// Starts the echo server and returns its port.
async fn start_server() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move { axum::serve(listener, app()).await });
    port
}

fn api() -> SimpleHttp {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    SimpleHttp::new(ReqwestClient::from_client(client))
}

fn input(descriptor: &RequestDescriptor) -> RequestInput {
    RequestInput::from_descriptor(descriptor).unwrap()
}

#[tokio::test]
async fn get_json_with_basic_auth_header() {
    let port = start_server().await;
    let descriptor = RequestDescriptor::new("127.0.0.1", port, "/echo")
        .with_credentials("u", "p")
        .with_auth_header(true);

    let echoed: Value = api().get_json(input(&descriptor)).await.unwrap();

    assert_eq!(echoed["method"], "GET");
    assert_eq!(echoed["authorization"], "Basic dTpw");
    assert_eq!(echoed["body"], "");
}

#[tokio::test]
async fn connection_level_auth_becomes_authorization_header() {
    let port = start_server().await;
    let descriptor = RequestDescriptor::new("127.0.0.1", port, "/echo").with_credentials("u", "p");

    let echoed: Value = api().get_json(input(&descriptor)).await.unwrap();

    assert_eq!(echoed["authorization"], "Basic dTpw");
}

#[tokio::test]
async fn bare_auth_pair_is_encoded_by_transport() {
    let port = start_server().await;
    let descriptor = RequestDescriptor::new("127.0.0.1", port, "/echo").with_auth("u:p");

    let echoed: Value = api().get_json(input(&descriptor)).await.unwrap();

    assert_eq!(echoed["authorization"], "Basic dTpw");
}

#[tokio::test]
async fn post_without_body_sends_empty_json_object() {
    let port = start_server().await;
    let descriptor = RequestDescriptor::new("127.0.0.1", port, "/echo")
        .with_content_type("application/json");

    let echoed: Value = api().post_json(input(&descriptor)).await.unwrap();

    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["content_type"], "application/json");
    assert_eq!(echoed["body"], "{}");
}

#[tokio::test]
async fn put_sends_form_encoded_body() {
    let port = start_server().await;
    let descriptor = RequestDescriptor::new("127.0.0.1", port, "/echo")
        .with_content_type("application/x-www-form-urlencoded");

    let result = api()
        .put(input(&descriptor).with_body(json!({"a": 1, "b": "x y"})))
        .await
        .unwrap();
    let echoed: Value = serde_json::from_str(&result.body).unwrap();

    assert_eq!(result.status_code, 200);
    assert_eq!(echoed["method"], "PUT");
    assert_eq!(echoed["body"], "a=1&b=x+y");
}

#[tokio::test]
async fn post_sends_xml_unmodified() {
    let port = start_server().await;
    let descriptor =
        RequestDescriptor::new("127.0.0.1", port, "/echo").with_content_type("text/xml");

    let echoed: Value = api()
        .post_json(input(&descriptor).with_body(json!("<a>1</a>")))
        .await
        .unwrap();

    assert_eq!(echoed["body"], "<a>1</a>");
}

#[tokio::test]
async fn get_json_on_text_response_is_parse_error() {
    let port = start_server().await;
    let descriptor = RequestDescriptor::new("127.0.0.1", port, "/text");

    let err = api()
        .get_json::<Value>(input(&descriptor))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.to_string().contains("not json"));
}

#[tokio::test]
async fn error_status_is_returned_as_result() {
    let port = start_server().await;
    let descriptor = RequestDescriptor::new("127.0.0.1", port, "/missing");

    let result = api().get(input(&descriptor)).await.unwrap();

    assert_eq!(result.status_code, 404);
    assert_eq!(result.body, "nope");
}
