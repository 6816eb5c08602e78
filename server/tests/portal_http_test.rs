//! HTTP integration tests for the portal.
//!
//! Each test builds the full application router against a stub upstream
//! account API served on an ephemeral port, then drives it through
//! `tower::ServiceExt::oneshot`. The stub counts gated calls so the tests
//! can assert that mask checks really suppress remote traffic.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::extract::Query;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use kw_server::api::{create_router, AppState};
use kw_server::config::Config;
use kw_server::eveapi::{EveClient, MemoryCache};

/// Call counters for the stub upstream.
#[derive(Clone, Default)]
struct StubCalls {
    key_info: Arc<AtomicUsize>,
    sheets: Arc<AtomicUsize>,
    status: Arc<AtomicUsize>,
}

/// Serve the stub account API on an ephemeral port.
///
/// Key behavior by keyID: "2000" grants nothing, "3000" grants Character
/// Sheet plus Character Information (which carries account status), any
/// other key grants Character Sheet only. Any vCode other than
/// "valid-vcode" is rejected with 403.
async fn spawn_stub(calls: StubCalls) -> String {
    let key_info = {
        let calls = calls.clone();
        move |Query(params): Query<HashMap<String, String>>| {
            let calls = calls.clone();
            async move {
                calls.key_info.fetch_add(1, Ordering::SeqCst);
                if params.get("vCode").map(String::as_str) != Some("valid-vcode") {
                    return (
                        StatusCode::FORBIDDEN,
                        Json(json!({"error": {"code": 203, "text": "Authentication failure."}})),
                    )
                        .into_response();
                }
                let mask: u64 = match params.get("keyID").map(String::as_str) {
                    Some("2000") => 0,
                    Some("3000") => (1 << 3) | (1 << 23),
                    _ => 1 << 3,
                };
                Json(json!({
                    "accessMask": mask,
                    "characters": [
                        {"characterID": 1, "characterName": "Kara Teinen"},
                        {"characterID": 2, "characterName": "Vex Arkanor"},
                    ],
                }))
                .into_response()
            }
        }
    };

    let sheet = {
        let calls = calls.clone();
        move |Query(params): Query<HashMap<String, String>>| {
            let calls = calls.clone();
            async move {
                calls.sheets.fetch_add(1, Ordering::SeqCst);
                let id: i64 = params["characterID"].parse().unwrap();
                let name = if id == 1 { "Kara Teinen" } else { "Vex Arkanor" };
                Json(json!({
                    "characterID": id,
                    "name": name,
                    "corporationID": 901,
                    "corporationName": "Deep Core Mining Inc.",
                    "balance": 44_519_000.25,
                    "allianceName": "Northern Accord",
                    "skills": [
                        {"typeID": 3300, "skillpoints": 1000, "level": 2},
                        {"typeID": 3301, "skillpoints": 2500, "level": 3},
                    ],
                }))
            }
        }
    };

    let status = {
        let calls = calls.clone();
        move || {
            let calls = calls.clone();
            async move {
                calls.status.fetch_add(1, Ordering::SeqCst);
                Json(json!({
                    "paidUntil": 1_356_998_460,
                    "createDate": 1_199_145_600,
                    "logonCount": 1234,
                    "logonMinutes": 56789,
                }))
            }
        }
    };

    let charinfo = |Query(params): Query<HashMap<String, String>>| async move {
        let id: i64 = params["characterID"].parse().unwrap();
        Json(json!({
            "characterID": id,
            "characterName": "Kara Teinen",
            "race": "Caldari",
            "bloodline": "Deteis",
            "corporation": "Deep Core Mining Inc.",
            "securityStatus": 2.5,
        }))
    };

    let corp = |Query(params): Query<HashMap<String, String>>| async move {
        let id: i64 = params["corporationID"].parse().unwrap();
        Json(json!({
            "corporationID": id,
            "corporationName": "Deep Core Mining Inc.",
            "ticker": "DCMI",
            "ceoName": "Aursa Kunivuri",
            "memberCount": 12,
            "taxRate": 0.11,
        }))
    };

    let tree = || async {
        Json(json!({
            "skillGroups": [
                {
                    "groupID": 255,
                    "groupName": "Gunnery",
                    "skills": [
                        {"typeID": 3300, "typeName": "Gunnery"},
                        {"typeID": 3301, "typeName": "Small Hybrid Turret"},
                    ],
                },
            ],
        }))
    };

    let router = Router::new()
        .route("/account/ApiKeyInfo", get(key_info))
        .route("/account/AccountStatus", get(status))
        .route("/char/CharacterSheet", get(sheet))
        .route("/eve/CharacterInfo", get(charinfo))
        .route("/corp/CorporationSheet", get(corp))
        .route("/eve/SkillTree", get(tree));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Build the full application against a fresh stub upstream.
async fn test_app() -> (Router, StubCalls) {
    let calls = StubCalls::default();
    let mut config = Config::default_for_test();
    config.api_base_url = spawn_stub(calls.clone()).await;

    let eve = EveClient::new(&config, Arc::new(MemoryCache::new())).unwrap();
    let state = AppState::new(config, eve).unwrap();
    (create_router(state), calls)
}

async fn send(app: &Router, request: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn submit_request(key_id: &str, vcode: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!(
            "key_id={key_id}&verification_code={vcode}"
        )))
        .unwrap()
}

/// Submit a valid credential and return the session cookie pair.
async fn login(app: &Router, key_id: &str) -> String {
    let response = send(app, submit_request(key_id, "valid-vcode")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/characters");

    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login should set the session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _calls) = test_app().await;
    let response = send(&app, get_request("/health", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_index_shows_credential_form() {
    let (app, _calls) = test_app().await;
    let response = send(&app, get_request("/", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Verification Code"));
}

#[tokio::test]
async fn test_empty_verification_code_makes_no_remote_call() {
    let (app, calls) = test_app().await;
    let response = send(&app, submit_request("123456", "")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers().get(header::SET_COOKIE).is_none(),
        "no session field may be written"
    );
    assert_eq!(calls.key_info.load(Ordering::SeqCst), 0);

    let body = body_string(response).await;
    assert!(body.contains("Please provide a Key and verification code"));
}

#[tokio::test]
async fn test_whitespace_input_counts_as_missing() {
    let (app, calls) = test_app().await;
    let response = send(&app, submit_request("%20%20", "%20")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(calls.key_info.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_rejected_credential_preserves_anonymous_state() {
    let (app, calls) = test_app().await;
    let response = send(&app, submit_request("123456", "wrong")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(calls.key_info.load(Ordering::SeqCst), 1);

    let body = body_string(response).await;
    assert!(body.contains("Invalid KeyID/vCode"));

    // Still Anonymous: the gated view redirects to the form.
    let response = send(&app, get_request("/characters", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_valid_key_establishes_session() {
    let (app, _calls) = test_app().await;
    let cookie = login(&app, "1000").await;

    // Returning to the form with a session redirects to the list.
    let response = send(&app, get_request("/", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/characters");
}

#[tokio::test]
async fn test_character_list_renders_summaries() {
    let (app, calls) = test_app().await;
    let cookie = login(&app, "1000").await;

    let response = send(&app, get_request("/characters", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(calls.sheets.load(Ordering::SeqCst), 2);

    let body = body_string(response).await;
    assert!(body.contains("Kara Teinen"));
    assert!(body.contains("Vex Arkanor"));
    assert!(body.contains("Deep Core Mining Inc."));
    assert!(body.contains("Northern Accord"));
    assert!(body.contains("3,500"), "skill points are grouped");
    assert!(body.contains("44,519,000 ISK"), "balance drops fractions");

    // Bit 3 alone: the access table marks only Character Sheet granted
    // and no status section is rendered.
    assert!(!body.contains("Paid until"));
    assert_eq!(calls.status.load(Ordering::SeqCst), 0);
    assert_eq!(body.matches("<td>Yes</td>").count(), 1);
}

#[tokio::test]
async fn test_character_list_serves_repeat_views_from_cache() {
    let (app, calls) = test_app().await;
    let cookie = login(&app, "1000").await;

    for _ in 0..3 {
        let response = send(&app, get_request("/characters", Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(
        calls.sheets.load(Ordering::SeqCst),
        2,
        "repeat views must be served by the cache handler"
    );
}

#[tokio::test]
async fn test_account_status_shown_when_granted() {
    let (app, calls) = test_app().await;
    let cookie = login(&app, "3000").await;

    let response = send(&app, get_request("/characters", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(calls.status.load(Ordering::SeqCst), 1);

    let body = body_string(response).await;
    assert!(body.contains("Paid until"));
    assert!(body.contains("2013-01-01 00:01:00"));
    assert!(body.contains("1,234"));
}

#[tokio::test]
async fn test_character_detail_renders_skills() {
    let (app, _calls) = test_app().await;
    let cookie = login(&app, "1000").await;

    let response = send(&app, get_request("/characters/1", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Small Hybrid Turret"));
    assert!(body.contains("[DCMI]"));
    assert!(body.contains("Caldari"));
    assert!(body.contains("2,500"));
}

#[tokio::test]
async fn test_character_detail_requires_sheet_grant() {
    let (app, calls) = test_app().await;
    let cookie = login(&app, "2000").await;

    let response = send(&app, get_request("/characters/1", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/characters");
    assert_eq!(calls.sheets.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_character_detail_requires_session() {
    let (app, _calls) = test_app().await;
    let response = send(&app, get_request("/characters/1", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_clear_is_idempotent() {
    let (app, _calls) = test_app().await;
    let cookie = login(&app, "1000").await;

    let response = send(&app, get_request("/clear", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    // Clearing again without any session behaves identically.
    let response = send(&app, get_request("/clear", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}
