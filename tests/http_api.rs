//! Drives the router end to end against a scratch database.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use chirpy::{AppState, Store, router};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

const SECRET: &str = "integration-secret";

struct TestApp {
    _dir: TempDir,
    app: Router,
}

impl TestApp {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Chirpy</h1>").unwrap();
        let store = Store::init(dir.path().join("database.json")).unwrap();
        let state = AppState::new(Arc::new(store), SECRET);
        let app = router(state, dir.path());
        Self { _dir: dir, app }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.app.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str) -> Response {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn json(&self, method: &str, uri: &str, body: Value, token: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

#[tokio::test]
async fn healthz_is_plain_ok() {
    let app = TestApp::new();
    let response = app.get("/api/healthz").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn chirps_create_list_and_fetch() {
    let app = TestApp::new();

    let response = app
        .json("POST", "/api/chirps", json!({"body": "hello"}), None)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, json!({"id": 1, "body": "hello"}));

    app.json("POST", "/api/chirps", json!({"body": "world"}), None)
        .await;

    let list = body_json(app.get("/api/chirps").await).await;
    assert_eq!(
        list,
        json!([{"id": 1, "body": "hello"}, {"id": 2, "body": "world"}])
    );

    let one = app.get("/api/chirps/1").await;
    assert_eq!(one.status(), StatusCode::OK);
    assert_eq!(body_json(one).await["body"], "hello");

    assert_eq!(app.get("/api/chirps/5").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get("/api/chirps/0").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get("/api/chirps/abc").await.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn long_chirp_is_rejected_and_not_stored() {
    let app = TestApp::new();
    let response = app
        .json("POST", "/api/chirps", json!({"body": "x".repeat(141)}), None)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": "Chirp is too long"}));

    assert_eq!(body_json(app.get("/api/chirps").await).await, json!([]));

    let response = app
        .json("POST", "/api/chirps", json!({"body": "x".repeat(140)}), None)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn chirp_profanity_is_masked() {
    let app = TestApp::new();
    let response = app
        .json("POST", "/api/chirps", json!({"body": "what a Kerfuffle today"}), None)
        .await;
    assert_eq!(body_json(response).await["body"], "what a **** today");
}

#[tokio::test]
async fn signup_login_and_update_flow() {
    let app = TestApp::new();
    let creds = json!({"email": "walt@example.com", "password": "04234"});

    let response = app.json("POST", "/api/users", creds.clone(), None).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let user = body_json(response).await;
    assert_eq!(user, json!({"id": 1, "email": "walt@example.com"}));

    let duplicate = app.json("POST", "/api/users", creds.clone(), None).await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let wrong = app
        .json(
            "POST",
            "/api/login",
            json!({"email": "walt@example.com", "password": "nope"}),
            None,
        )
        .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let unknown = app
        .json(
            "POST",
            "/api/login",
            json!({"email": "jesse@example.com", "password": "04234"}),
            None,
        )
        .await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);

    let login = app.json("POST", "/api/login", creds, None).await;
    assert_eq!(login.status(), StatusCode::OK);
    let login = body_json(login).await;
    assert_eq!(login["id"], 1);
    let token = login["token"].as_str().unwrap().to_string();

    let new_creds = json!({"email": "heisenberg@example.com", "password": "bluesky"});
    let unauthorized = app.json("PUT", "/api/users", new_creds.clone(), None).await;
    assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);

    let updated = app
        .json("PUT", "/api/users", new_creds.clone(), Some(&token))
        .await;
    assert_eq!(updated.status(), StatusCode::OK);
    assert_eq!(
        body_json(updated).await,
        json!({"id": 1, "email": "heisenberg@example.com"})
    );

    let relogin = app.json("POST", "/api/login", new_creds, None).await;
    assert_eq!(relogin.status(), StatusCode::OK);
}

#[tokio::test]
async fn invalid_signup_is_bad_request() {
    let app = TestApp::new();
    let response = app
        .json(
            "POST",
            "/api/users",
            json!({"email": "not-an-email", "password": "pw"}),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid email format");
}

#[tokio::test]
async fn fileserver_hits_are_counted_and_reset() {
    let app = TestApp::new();

    for _ in 0..2 {
        let response = app.get("/app/index.html").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<h1>Chirpy</h1>");
    }

    let metrics = body_text(app.get("/admin/metrics").await).await;
    assert!(metrics.contains("Chirpy has been visited 2 times!"));

    let reset = app.get("/api/reset").await;
    assert_eq!(body_text(reset).await, "Counter reset");

    let metrics = body_text(app.get("/admin/metrics").await).await;
    assert!(metrics.contains("visited 0 times"));
}
