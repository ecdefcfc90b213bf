use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use homeval::domain::config::ApiConfig;
use homeval_server::Server;
use serde_json::{Value, json};
use std::fs;
use tempfile::{TempDir, tempdir};
use tower::ServiceExt;

const COLUMNS: &str = r#"{"data_columns":["total_sqft","bath","bhk","1st Phase JP Nagar","Electronic City","Rajaji Nagar"]}"#;
const MODEL: &str = r#"{"intercept":-20.0,"coefficients":[0.08,1.5,-1.2,25.0,-6.0,30.0]}"#;

fn artifacts() -> TempDir {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("columns.json"), COLUMNS).expect("write columns");
    fs::write(dir.path().join("model.json"), MODEL).expect("write model");
    dir
}

async fn app(dir: &TempDir) -> Router {
    let mut cfg = ApiConfig::default();
    cfg.valuation.artifacts_dir = dir.path().to_path_buf();

    Server::builder().config(cfg).build().await.expect("server builds").router()
}

async fn call(app: Router, request: Request<Body>) -> (StatusCode, header::HeaderMap, Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, headers, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .expect("request")
}

fn predict(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/predict_home_price")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn location_listing_is_stable_and_cross_origin() {
    let dir = artifacts();
    let app = app(&dir).await;

    let (status, headers, first) = call(app.clone(), get("/get_location_names")).await;
    let (_, _, second) = call(app, get("/get_location_names")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(first, json!({ "locations": ["1st Phase JP Nagar", "Electronic City", "Rajaji Nagar"] }));
    assert_eq!(first, second);
}

#[tokio::test]
async fn prediction_for_known_location_is_deterministic() {
    let dir = artifacts();
    let app = app(&dir).await;
    let body = json!({ "total_sqft": 1000, "location": "1st Phase JP Nagar", "bhk": 2, "bath": 2 });

    let (status, headers, first) = call(app.clone(), predict(body.clone())).await;
    let (_, _, second) = call(app, predict(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let price = first["estimated_price"].as_f64().expect("numeric price");
    assert!(price.is_finite() && price >= 0.0);
    assert_eq!(first, second);
}

#[tokio::test]
async fn string_form_values_are_accepted() {
    let dir = artifacts();
    let (status, _, body) = call(
        app(&dir).await,
        predict(json!({ "total_sqft": "1000", "location": "Rajaji Nagar", "bhk": "2", "bath": "2" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["estimated_price"].as_f64(), Some(90.6));
}

#[tokio::test]
async fn invalid_requests_are_client_errors() {
    let dir = artifacts();
    let app = app(&dir).await;

    for body in [
        json!({ "location": "Rajaji Nagar", "bhk": 2, "bath": 2 }),
        json!({ "total_sqft": 1000, "location": "Rajaji Nagar", "bhk": 1.5, "bath": 2 }),
        json!({ "total_sqft": 1000, "location": "Narnia", "bhk": 2, "bath": 2 }),
    ] {
        let (status, _, response) = call(app.clone(), predict(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert!(response["error"].is_string(), "body: {body}");
    }

    let broken = Request::builder()
        .method(Method::POST)
        .uri("/predict_home_price")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"total_sqft\": 10"))
        .expect("request");
    let (status, _, _) = call(app, broken).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn preflight_is_answered() {
    let dir = artifacts();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/predict_home_price")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .expect("request");

    let (status, headers, _) = call(app(&dir).await, request).await;

    assert!(status.is_success());
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn health_and_docs_are_served() {
    let dir = artifacts();
    let app = app(&dir).await;

    let (status, _, body) = call(app.clone(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "up");

    let response = app.oneshot(get("/api")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn build_fails_without_artifacts() {
    let dir = tempdir().expect("temp dir");
    let mut cfg = ApiConfig::default();
    cfg.valuation.artifacts_dir = dir.path().join("missing");

    let err = Server::builder().config(cfg).build().await.unwrap_err();
    assert!(err.to_string().contains("Platform bootstrap failed"));
}

#[tokio::test]
async fn build_fails_with_inconsistent_artifacts() {
    let dir = artifacts();
    fs::write(dir.path().join("model.json"), r#"{"intercept":0.0,"coefficients":[1.0]}"#)
        .expect("write model");
    let mut cfg = ApiConfig::default();
    cfg.valuation.artifacts_dir = dir.path().to_path_buf();

    assert!(Server::builder().config(cfg).build().await.is_err());
}
