use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::util::ServiceExt;

use football_stats_api::app;
use football_stats_api::config::Config;
use football_stats_api::shape::ProfileMode;
use football_stats_api::state::AppState;

fn fixture_payload() -> Value {
    let matches: Vec<Value> = (0..8)
        .map(|i| {
            json!({
                "date": format!("2026-02-0{}", i + 1),
                "opponent": format!("Team {}", i),
                "rating": 7.1,
                "minutesPlayed": 90,
                "isHome": i % 2 == 0
            })
        })
        .collect();

    json!({
        "id": 26169,
        "name": "Bukayo Saka",
        "positionDescription": {"label": "Right Winger"},
        "bio": {
            "age": 23,
            "country": "England",
            "height": "178 cm",
            "preferredFoot": "Left",
            "marketValue": "€130M"
        },
        "currentTeam": {"id": 9825, "name": "Arsenal"},
        "mainLeague": {
            "leagueName": "Premier League",
            "stats": [
                {"title": "Matches", "value": 30},
                {"title": "Goals", "value": 7},
                {"title": "Rating", "value": 7.42}
            ]
        },
        "marketValues": [
            {"value": "€100M"},
            {"value": "€120M", "isCurrent": true}
        ],
        "trophies": [{"name": "FA Cup", "count": 2}],
        "careerHistory": {
            "entries": [
                {"team": "Arsenal", "from": "2019", "to": "", "appearances": 200, "goals": 55}
            ]
        },
        "recentMatches": matches
    })
}

async fn start_upstream(payload: Value, status: StatusCode) -> (SocketAddr, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let handler = move || {
        let payload = payload.clone();
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            (status, Json(payload)).into_response()
        }
    };

    let app = Router::new().route("/playerData", get(handler));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, calls)
}

fn test_app(upstream: SocketAddr, mode: ProfileMode) -> Router {
    let config = Config {
        upstream_base_url: format!("http://{}", upstream),
        // Nothing listens here; the fallback credential is used.
        bootstrap_url: "http://127.0.0.1:1/".to_string(),
        image_base_url: "https://img.example.com".to_string(),
        cache_ttl: Duration::from_secs(60),
        mode,
    };
    app(Arc::new(AppState::new(&config).unwrap()))
}

async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response: Response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn missing_id_returns_400_without_calling_upstream() {
    let (upstream, calls) = start_upstream(fixture_payload(), StatusCode::OK).await;
    let router = test_app(upstream, ProfileMode::Profile);

    let (status, body) = get_json(&router, "/api/player").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("player id is required (?id=12345)"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_id_returns_400() {
    let (upstream, calls) = start_upstream(fixture_payload(), StatusCode::OK).await;
    let router = test_app(upstream, ProfileMode::Profile);

    let (status, _body) = get_json(&router, "/api/player?id=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn profile_mode_returns_shaped_body() {
    let (upstream, _calls) = start_upstream(fixture_payload(), StatusCode::OK).await;
    let router = test_app(upstream, ProfileMode::Profile);

    let (status, body) = get_json(&router, "/api/player?id=26169").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], json!("Bukayo Saka"));
    assert_eq!(body["team"], json!("Arsenal"));
    assert_eq!(body["marketValue"], json!("€120M"));
    assert_eq!(body["form"].as_array().unwrap().len(), 5);
    assert_eq!(body["form"][0]["opponent"], json!("Team 0"));
    // Raw-payload fields the curated shape does not carry.
    assert!(body.get("recentMatches").is_none());
}

#[tokio::test]
async fn card_mode_returns_card_body() {
    let (upstream, _calls) = start_upstream(fixture_payload(), StatusCode::OK).await;
    let router = test_app(upstream, ProfileMode::Card);

    let (status, body) = get_json(&router, "/api/player?id=26169").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["league"], json!("Premier League"));
    assert_eq!(body["marketValue"], json!("€130M"));
    assert_eq!(
        body["playerImage"],
        json!("https://img.example.com/playerimages/26169.png")
    );
    assert_eq!(body["seasonStatistics"]["goals"], json!(7));
    assert_eq!(body["seasonStatistics"]["assists"], json!(0));
    assert_eq!(body["form"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn raw_mode_passes_upstream_payload_through() {
    let payload = fixture_payload();
    let (upstream, _calls) = start_upstream(payload.clone(), StatusCode::OK).await;
    let router = test_app(upstream, ProfileMode::Raw);

    let (status, body) = get_json(&router, "/api/player?id=26169").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn upstream_error_returns_500_with_details() {
    let (upstream, _calls) =
        start_upstream(json!({"error": "boom"}), StatusCode::INTERNAL_SERVER_ERROR).await;
    let router = test_app(upstream, ProfileMode::Profile);

    let (status, body) = get_json(&router, "/api/player?id=26169").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert!(!message.is_empty());
    assert_eq!(body["details"], body["error"]);
}

#[tokio::test]
async fn repeated_requests_are_served_from_cache() {
    let (upstream, calls) = start_upstream(fixture_payload(), StatusCode::OK).await;
    let router = test_app(upstream, ProfileMode::Profile);

    let (_, first) = get_json(&router, "/api/player?id=26169").await;
    let (_, second) = get_json(&router, "/api/player?id=26169").await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(first, second);
}

#[tokio::test]
async fn health_returns_ok() {
    let (upstream, _calls) = start_upstream(fixture_payload(), StatusCode::OK).await;
    let router = test_app(upstream, ProfileMode::Profile);

    let (status, body) = get_json(&router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}
