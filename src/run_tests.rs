//! Tests for the run module.

use super::*;

use std::sync::Mutex;

use simple_http::config::Cli;
use simple_http::transport::{HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client that answers every request with one canned response.
struct CannedClient {
    status: u16,
    body: &'static str,
    requests: Mutex<Vec<HttpRequest>>,
}

impl CannedClient {
    fn new(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

impl HttpClient for CannedClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        Ok(HttpResponse::new(
            http::StatusCode::from_u16(self.status).unwrap(),
            http::HeaderMap::new(),
            self.body.as_bytes().to_vec(),
        ))
    }
}

fn config(args: &[&str]) -> ValidatedConfig {
    let mut full_args = vec!["simple-http", "--host", "localhost"];
    full_args.extend(args);
    ValidatedConfig::from_raw(&Cli::parse_from_iter(full_args), None).unwrap()
}

mod run_error {
    use super::*;

    #[test]
    fn request_error_displays_source() {
        let error = RunError::from(simple_http::request::Error::missing("host", "test"));

        assert!(error.to_string().starts_with("Request failed:"));
        assert!(error.to_string().contains("host"));
    }
}

mod execute_with {
    use super::*;

    #[tokio::test]
    async fn raw_response_is_returned_unchanged() {
        let api = SimpleHttp::new(CannedClient::new(200, "plain body"));

        let output = execute_with(&api, &config(&["get"])).await.unwrap();

        assert_eq!(output, "plain body");
        assert_eq!(api.client().last_request().method, http::Method::GET);
    }

    #[tokio::test]
    async fn error_status_still_returns_body() {
        let api = SimpleHttp::new(CannedClient::new(404, "missing"));

        let output = execute_with(&api, &config(&[])).await.unwrap();

        assert_eq!(output, "missing");
    }

    #[tokio::test]
    async fn json_flag_pretty_prints_response() {
        let api = SimpleHttp::new(CannedClient::new(200, r#"{"a":1}"#));

        let output = execute_with(&api, &config(&["--json"])).await.unwrap();

        assert_eq!(output, "{\n  \"a\": 1\n}");
    }

    #[tokio::test]
    async fn json_flag_with_invalid_body_fails() {
        let api = SimpleHttp::new(CannedClient::new(200, "oops"));

        let err = execute_with(&api, &config(&["--json"])).await.unwrap_err();

        assert!(matches!(
            err,
            RunError::Request(simple_http::request::Error::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn post_sends_configured_body() {
        let api = SimpleHttp::new(CannedClient::new(201, "{}"));
        let cfg = config(&[
            "post",
            "--content-type",
            "application/json",
            "--body",
            r#"{"name":"n"}"#,
        ]);

        execute_with(&api, &cfg).await.unwrap();

        let req = api.client().last_request();
        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.body.as_deref(), Some(br#"{"name":"n"}"#.as_slice()));
    }

    #[tokio::test]
    async fn put_json_uses_put() {
        let api = SimpleHttp::new(CannedClient::new(200, "[]"));

        execute_with(&api, &config(&["put", "--json"])).await.unwrap();

        assert_eq!(api.client().last_request().method, http::Method::PUT);
    }
}
