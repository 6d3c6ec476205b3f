use actix_web::{http::header, http::StatusCode, test, web, App};
use async_trait::async_trait;
use gist_common::{AppConfig, GistError, Result};
use gist_llm::{Summarizer, SummaryBackend, MOCK_SUMMARY_TEXT};
use gist_server::{configure, AppState};
use serde_json::{json, Value};
use std::sync::Arc;

/// Live-mode stand-in that always answers with the same text
struct FixedBackend(&'static str);

#[async_trait]
impl SummaryBackend for FixedBackend {
    fn model(&self) -> &str {
        "gemini-2.5-flash-lite"
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.0.to_string())
    }
}

/// Live-mode stand-in whose call always fails
struct FailingBackend;

#[async_trait]
impl SummaryBackend for FailingBackend {
    fn model(&self) -> &str {
        "gemini-2.5-flash-lite"
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(GistError::backend("Gemini API error 503 Service Unavailable"))
    }
}

fn mock_state() -> web::Data<Arc<AppState>> {
    let config = AppConfig {
        mock_mode: true,
        ..AppConfig::default()
    };
    web::Data::new(Arc::new(AppState::new(config).unwrap()))
}

fn state_with(backend: Arc<dyn SummaryBackend>) -> web::Data<Arc<AppState>> {
    let config = AppConfig {
        api_key: Some("test-key".to_string()),
        ..AppConfig::default()
    };
    web::Data::new(Arc::new(AppState::with_summarizer(
        config,
        Summarizer::new(backend),
    )))
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(App::new().app_data($state).configure(configure)).await
    };
}

#[actix_web::test]
async fn json_body_in_mock_mode() {
    let app = app!(mock_state());

    let req = test::TestRequest::post()
        .uri("/summarize?style=concise&max_words=50")
        .set_json(json!({"text": "Hello world. http://example.com/page"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["summary"], MOCK_SUMMARY_TEXT);
    assert_eq!(body["meta"]["mock"], true);
    assert_eq!(body["meta"]["style"], "concise");
    assert_eq!(body["meta"]["max_words"], 50);
    assert_eq!(body["meta"]["model"], "gemini-2.5-flash-lite");
}

#[actix_web::test]
async fn plain_text_body_uses_defaults() {
    let app = app!(mock_state());

    let req = test::TestRequest::post()
        .uri("/summarize")
        .insert_header((header::CONTENT_TYPE, "text/plain; charset=utf-8"))
        .set_payload("Some raw text\n\nacross lines.")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["meta"]["style"], "concise");
    assert_eq!(body["meta"]["max_words"], 120);
}

#[actix_web::test]
async fn empty_plain_text_is_422() {
    let app = app!(mock_state());

    let req = test::TestRequest::post()
        .uri("/summarize")
        .insert_header((header::CONTENT_TYPE, "text/plain"))
        .set_payload("")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Text cannot be empty.");
}

#[actix_web::test]
async fn invalid_style_is_422() {
    let app = app!(mock_state());

    let req = test::TestRequest::post()
        .uri("/summarize?style=invalid_value")
        .set_json(json!({"text": "Hello world."}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn encoded_style_labels_accepted() {
    let app = app!(mock_state());

    for (encoded, label) in [
        ("bullet%20points", "bullet points"),
        ("numbered+list", "numbered list"),
        ("tl%3Bdr", "tl;dr"),
    ] {
        let req = test::TestRequest::post()
            .uri(&format!("/summarize?style={}", encoded))
            .set_json(json!({"text": "Hello world."}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{label}");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["meta"]["style"], label);
    }
}

#[actix_web::test]
async fn max_words_boundaries() {
    let app = app!(mock_state());

    for (value, expected) in [
        ("19", StatusCode::UNPROCESSABLE_ENTITY),
        ("20", StatusCode::OK),
        ("400", StatusCode::OK),
        ("401", StatusCode::UNPROCESSABLE_ENTITY),
        ("abc", StatusCode::UNPROCESSABLE_ENTITY),
    ] {
        let req = test::TestRequest::post()
            .uri(&format!("/summarize?max_words={}", value))
            .set_json(json!({"text": "Hello world."}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected, "max_words={value}");
    }
}

#[actix_web::test]
async fn json_without_text_is_422() {
    let app = app!(mock_state());

    for payload in [r#"{"content": "x"}"#, r#"{"text": ""}"#, "{not json"] {
        let req = test::TestRequest::post()
            .uri("/summarize")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{payload}");
    }
}

#[actix_web::test]
async fn unsupported_content_type_is_422() {
    let app = app!(mock_state());

    let req = test::TestRequest::post()
        .uri("/summarize")
        .insert_header((header::CONTENT_TYPE, "text/html"))
        .set_payload("<p>hello</p>")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn empty_backend_output_is_500() {
    let app = app!(state_with(Arc::new(FixedBackend(""))));

    let req = test::TestRequest::post()
        .uri("/summarize?style=concise")
        .set_json(json!({"text": "Hello world."}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].as_str().unwrap().contains("Empty summary"));
}

#[actix_web::test]
async fn backend_failure_is_500() {
    let app = app!(state_with(Arc::new(FailingBackend)));

    let req = test::TestRequest::post()
        .uri("/summarize")
        .insert_header((header::CONTENT_TYPE, "text/plain"))
        .set_payload("Hello world.")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn live_backend_summary_is_trimmed() {
    let app = app!(state_with(Arc::new(FixedBackend("  1. First\n2. Second \n"))));

    let req = test::TestRequest::post()
        .uri("/summarize?style=numbered%20list&max_words=100")
        .set_json(json!({"text": "Hello world."}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["summary"], "1. First\n2. Second");
    assert_eq!(body["meta"]["mock"], false);
    assert_eq!(body["meta"]["style"], "numbered list");
}

#[actix_web::test]
async fn health_reports_backend() {
    let app = app!(mock_state());

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["mock"], true);
}

#[actix_web::test]
async fn health_echoes_configured_model() {
    let config = AppConfig {
        model: "gemini-2.5-pro".to_string(),
        mock_mode: true,
        ..AppConfig::default()
    };
    let app = app!(web::Data::new(Arc::new(AppState::new(config).unwrap())));

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["model"], "gemini-2.5-pro");
    assert_eq!(body["mock"], true);
    assert_eq!(body["service"], "gist");
}
