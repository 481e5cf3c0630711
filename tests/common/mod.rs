//! Shared test infrastructure for HTTP-level tests.
//!
//! This module provides a stub platform backend served on an ephemeral
//! loopback port, plus a factory that spins up the frontend wired exactly
//! like `main`. Tests drive both over real sockets so the session cookie,
//! the CSRF round-trip, and the reqwest fetch path are all exercised.
//!
//! # Helpers
//! - `spawn_backend(mode)` - stub backend; `StubMode` picks its behavior
//! - `spawn_frontend(backend_url, chart)` - the app under test
//! - `sign_in()` - full GET + POST signin flow, returns the session cookie

#![allow(dead_code)]

use std::net::TcpListener;
use std::time::Duration;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpResponse, HttpServer, cookie::Key, web};
use serde_json::json;

use tutorboard::backend::BackendClient;
use tutorboard::config::AppConfig;
use tutorboard::handlers;
use tutorboard::render::charts::ChartStrategy;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const STUDENT_EMAIL: &str = "amaya@students.example";
pub const TUTOR_EMAIL: &str = "nuwan@tutors.example";
pub const TEST_PASSWORD: &str = "password123";

pub const STUDENT_NAME: &str = "Amaya Perera";
pub const TUTOR_NAME: &str = "Nuwan Fernando";

// ============================================================================
// STUB BACKEND
// ============================================================================

/// How the stub backend answers dashboard requests. Signin always works
/// so tests can obtain a session before provoking failures.
#[derive(Clone, Copy)]
pub enum StubMode {
    Healthy,
    /// 500 with a message envelope.
    Failing,
    /// success=true but the `trends` array is missing.
    MissingTrends,
    /// Answers after a delay longer than the client timeout.
    Slow,
}

/// Student fixture: a quiet week (all-zero trends) with one strong subject.
pub fn student_summary() -> serde_json::Value {
    json!({
        "overall": { "totalSessions": 12, "avgRating": 4.6 },
        "subjects": [
            { "subjectName": "Math", "totalSessions": 5, "avgRating": 4.6 }
        ],
        "peakTimes": [],
        "trends": [
            { "date": "2025-01-06", "sessionCount": 0 },
            { "date": "2025-01-07", "sessionCount": 0 },
            { "date": "2025-01-08", "sessionCount": 0 },
            { "date": "2025-01-09", "sessionCount": 0 },
            { "date": "2025-01-10", "sessionCount": 0 },
            { "date": "2025-01-11", "sessionCount": 0 },
            { "date": "2025-01-12", "sessionCount": 0 }
        ],
        "recommendations": []
    })
}

/// Tutor fixture: a busy week with revenue; no `recommendations` key at
/// all, which the decoder must default to empty.
pub fn tutor_summary() -> serde_json::Value {
    json!({
        "overall": { "totalSessions": 16, "avgRating": 4.2 },
        "subjects": [
            { "subjectName": "Physics", "totalSessions": 9, "totalRevenue": 12500, "avgRating": 4.7 },
            { "subjectName": "Chemistry", "totalSessions": 7, "totalRevenue": 8000, "avgRating": 2.8 }
        ],
        "peakTimes": [
            { "startTime": "18:00", "sessionCount": 6 },
            { "startTime": "20:00", "sessionCount": 4 }
        ],
        "trends": [
            { "date": "2025-01-06", "sessionCount": 2 },
            { "date": "2025-01-07", "sessionCount": 4 },
            { "date": "2025-01-08", "sessionCount": 0 },
            { "date": "2025-01-09", "sessionCount": 1 },
            { "date": "2025-01-10", "sessionCount": 3 },
            { "date": "2025-01-11", "sessionCount": 4 },
            { "date": "2025-01-12", "sessionCount": 2 }
        ]
    })
}

async fn stub_signin(body: web::Json<serde_json::Value>) -> HttpResponse {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    let identity = match (email, password) {
        (STUDENT_EMAIL, TEST_PASSWORD) => Some((11, "student", STUDENT_NAME)),
        (TUTOR_EMAIL, TEST_PASSWORD) => Some((31, "tutor", TUTOR_NAME)),
        _ => None,
    };

    match identity {
        Some((user_id, role, full_name)) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": { "userId": user_id, "role": role, "fullName": full_name }
        })),
        None => HttpResponse::Unauthorized().json(json!({
            "success": false,
            "message": "Invalid email or password"
        })),
    }
}

async fn stub_student_dashboard(mode: web::Data<StubMode>) -> HttpResponse {
    dashboard_response(*mode.get_ref(), student_summary()).await
}

async fn stub_tutor_dashboard(mode: web::Data<StubMode>) -> HttpResponse {
    dashboard_response(*mode.get_ref(), tutor_summary()).await
}

async fn dashboard_response(mode: StubMode, healthy: serde_json::Value) -> HttpResponse {
    match mode {
        StubMode::Healthy => HttpResponse::Ok().json(json!({ "success": true, "data": healthy })),
        StubMode::Failing => HttpResponse::InternalServerError().json(json!({
            "success": false,
            "message": "Server error"
        })),
        StubMode::MissingTrends => {
            let mut data = healthy;
            if let Some(obj) = data.as_object_mut() {
                obj.remove("trends");
            }
            HttpResponse::Ok().json(json!({ "success": true, "data": data }))
        }
        StubMode::Slow => {
            tokio::time::sleep(Duration::from_secs(4)).await;
            HttpResponse::Ok().json(json!({ "success": true, "data": healthy }))
        }
    }
}

/// Spawn the stub on an OS-assigned port; returns its base URL.
pub async fn spawn_backend(mode: StubMode) -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("Failed to bind stub port");
    let addr = listener.local_addr().expect("Failed to read stub addr");

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(mode))
            .route("/api/auth/signin", web::post().to(stub_signin))
            .route(
                "/api/student/dashboard/{id}",
                web::get().to(stub_student_dashboard),
            )
            .route(
                "/api/tutor/dashboard/{id}",
                web::get().to(stub_tutor_dashboard),
            )
    })
    .listen(listener)
    .expect("Failed to listen on stub port")
    .workers(1)
    .run();

    tokio::spawn(server);
    format!("http://{addr}/api")
}

// ============================================================================
// FRONTEND UNDER TEST
// ============================================================================

pub struct TestServer {
    pub base_url: String,
}

/// Spawn the frontend wired like `main`, pointed at `backend_url`.
pub async fn spawn_frontend(backend_url: &str, trend_chart: ChartStrategy) -> TestServer {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("Failed to bind frontend port");
    let addr = listener.local_addr().expect("Failed to read frontend addr");

    let config = AppConfig {
        bind_addr: addr.to_string(),
        backend_url: backend_url.to_string(),
        backend_timeout_secs: 2,
        trend_chart,
        currency_code: "LKR".to_string(),
    };
    let client = BackendClient::new(backend_url, Duration::from_secs(2));
    let secret_key = Key::generate();

    let server = HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(client.clone()))
            .configure(handlers::routes)
    })
    .listen(listener)
    .expect("Failed to listen on frontend port")
    .workers(1)
    .run();

    tokio::spawn(server);
    TestServer {
        base_url: format!("http://{addr}"),
    }
}

// ============================================================================
// HTTP HELPERS
// ============================================================================

/// Client that never follows redirects, so 303s stay observable.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build test client")
}

/// The full Set-Cookie line for the session cookie, if reissued.
pub fn set_cookie_line(resp: &reqwest::Response) -> Option<String> {
    resp.headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("id="))
        .map(str::to_string)
}

/// Just the `id=...` pair to send back on the next request.
pub fn session_cookie(resp: &reqwest::Response) -> Option<String> {
    set_cookie_line(resp).and_then(|line| line.split(';').next().map(str::to_string))
}

/// Pull the hidden csrf field out of rendered HTML.
pub fn csrf_token(html: &str) -> String {
    let re = regex::Regex::new(r#"name="csrf_token" value="([0-9a-f]+)""#)
        .expect("Failed to build csrf regex");
    re.captures(html)
        .map(|caps| caps[1].to_string())
        .expect("csrf token not found in page")
}

pub async fn get_with_cookie(
    http: &reqwest::Client,
    url: &str,
    cookie: &str,
) -> reqwest::Response {
    http.get(url)
        .header(reqwest::header::COOKIE, cookie)
        .send()
        .await
        .expect("GET failed")
}

/// Run the real signin flow; returns the session cookie for subsequent
/// requests (the POST reissues it with the identity inside).
pub async fn sign_in(http: &reqwest::Client, base_url: &str, email: &str) -> String {
    let resp = http
        .get(format!("{base_url}/signin"))
        .send()
        .await
        .expect("GET /signin failed");
    let cookie = session_cookie(&resp).expect("signin page set no session cookie");
    let html = resp.text().await.expect("Failed to read signin page");
    let token = csrf_token(&html);

    let body = serde_urlencoded::to_string([
        ("email", email),
        ("password", TEST_PASSWORD),
        ("csrf_token", token.as_str()),
    ])
    .expect("Failed to encode signin form");

    let resp = http
        .post(format!("{base_url}/signin"))
        .header(reqwest::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(reqwest::header::COOKIE, cookie.clone())
        .body(body)
        .send()
        .await
        .expect("POST /signin failed");
    assert_eq!(resp.status().as_u16(), 303, "signin should redirect");

    session_cookie(&resp).unwrap_or(cookie)
}
