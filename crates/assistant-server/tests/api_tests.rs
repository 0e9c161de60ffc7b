//! Integration tests for the assistant HTTP API.

use assistant_server::{
    api::{create_router, AppState},
    build_command_router, Config,
};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use command_router::{FALLBACK_RESPONSE, GENERAL_ERROR_MSG};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config that never opens anything on the test host.
fn test_config() -> Config {
    let mut config = Config::default();
    config.launcher.enabled = false;
    config.assistant.user_name = "Tester".into();
    config
}

/// Web UI shipped with the crate.
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

fn create_test_app(config: &Config) -> Router {
    let router = build_command_router(config).unwrap();
    create_router(
        AppState::new(router, config.assistant.user_name.as_str()),
        STATIC_DIR,
    )
}

async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn voice_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/voice-command")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(&test_config());

    let (status, json) = send(
        app,
        Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_unknown_command_gets_fallback() {
    let app = create_test_app(&test_config());

    let (status, json) = send(app, voice_request(r#"{"command": "xyzzy nonsense"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["response"], FALLBACK_RESPONSE);
}

#[tokio::test]
async fn test_missing_command_is_treated_as_empty() {
    let app = create_test_app(&test_config());

    let (status, json) = send(app, voice_request("{}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["response"], FALLBACK_RESPONSE);
}

#[tokio::test]
async fn test_invalid_json_returns_general_error() {
    let app = create_test_app(&test_config());

    let (status, json) = send(app, voice_request("{not json")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["response"], GENERAL_ERROR_MSG);
}

#[tokio::test]
async fn test_canned_reply() {
    let app = create_test_app(&test_config());

    let (status, json) = send(app, voice_request(r#"{"command": "Who created you?"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["response"]
        .as_str()
        .unwrap()
        .contains("Ashish Vishwakarma"));
}

#[tokio::test]
async fn test_dice_roll() {
    let app = create_test_app(&test_config());

    let (_, json) = send(app, voice_request(r#"{"command": "roll a dice"}"#)).await;

    let reply = json["response"].as_str().unwrap();
    assert!(reply.starts_with("You rolled a "));
}

#[tokio::test]
async fn test_open_with_launcher_disabled() {
    let app = create_test_app(&test_config());

    let (_, json) = send(app, voice_request(r#"{"command": "open github"}"#)).await;

    assert_eq!(json["response"], "Opening Github.");
}

#[tokio::test]
async fn test_weather_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "london"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "London",
            "main": { "temp": 11.2 },
            "weather": [{ "description": "overcast clouds" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = test_config();
    config.weather.base_url = server.uri();
    config.weather.api_key = Some("test-key".into());
    let app = create_test_app(&config);

    let (status, json) = send(app, voice_request(r#"{"command": "Weather in London?"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["response"], "Weather in London: 11.2°C, Overcast clouds.");
}

#[tokio::test]
async fn test_weather_without_api_key() {
    let app = create_test_app(&test_config());

    let (status, json) = send(app, voice_request(r#"{"command": "weather"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["response"], "Error fetching weather data.");
}

#[tokio::test]
async fn test_timer_confirms_immediately() {
    let app = create_test_app(&test_config());

    let (status, json) = send(
        app,
        voice_request(r#"{"command": "set timer for 1 hour"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["response"], "Setting a timer for 1 hour(s).");
}

#[tokio::test]
async fn test_greeting_uses_query_or_configured_name() {
    let config = test_config();

    let (status, json) = send(
        create_test_app(&config),
        Request::builder()
            .uri("/v1/greeting?name=Ada")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["greeting"].as_str().unwrap().contains(", Ada!"));

    let (_, json) = send(
        create_test_app(&config),
        Request::builder()
            .uri("/v1/greeting")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert!(json["greeting"].as_str().unwrap().contains(", Tester!"));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = create_test_app(&test_config());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_index_page_is_served() {
    let app = create_test_app(&test_config());

    let (status, body) = get_text(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Panda Virtual Assistant"));
    assert!(body.contains("/script.js"));

    let (status, body) = get_text(app, "/script.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/voice-command"));
}

#[tokio::test]
async fn test_static_dir_is_configurable() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>custom ui</h1>").unwrap();

    let config = test_config();
    let router = build_command_router(&config).unwrap();
    let app = create_router(AppState::new(router, "Tester"), dir.path());

    let (status, body) = get_text(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<h1>custom ui</h1>");

    let (status, _) = get_text(app, "/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_routes_take_precedence_over_static_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("health"), "not the api").unwrap();

    let config = test_config();
    let router = build_command_router(&config).unwrap();
    let app = create_router(AppState::new(router, "Tester"), dir.path());

    let (status, body) = get_text(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"status\":\"ok\""));
}
