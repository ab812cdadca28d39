//! Shared helpers for the HTTP integration tests
//!
//! Each test builds its own app over a fresh seeded `sqlite::memory:`
//! database and drives it with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cafe_server::auth::JwtConfig;
use cafe_server::{Config, ServerState, build_app};

pub const DEMO_PASSWORD: &str = "password123";
pub const GAMEZONE_ID: i64 = 1;
pub const CYBERKNIGHTS_ID: i64 = 2;
pub const TEST_SECRET: &str = "integration-test-secret-with-enough-entropy";

pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
}

pub async fn test_app() -> TestApp {
    test_app_with(|_| {}).await
}

/// Build the app with extra config tweaks applied on top of the test defaults
pub async fn test_app_with(tweak: impl FnOnce(&mut Config)) -> TestApp {
    let mut config = Config::with_overrides("sqlite::memory:", 0).unwrap();
    config.environment = "development".into();
    config.seed_demo_data = true;
    config.cors_origin = "http://localhost:3000".into();
    config.trust_proxy = false;
    config.jwt = JwtConfig {
        secret: TEST_SECRET.into(),
        expiration_hours: 168,
        issuer: "cafe-server".into(),
        audience: "cafe-owners".into(),
    };
    tweak(&mut config);

    let state = ServerState::initialize(&config).await.unwrap();
    TestApp {
        router: build_app(&state),
        state,
    }
}

/// Response status, headers and parsed JSON body
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// Numeric error code of an error envelope
    pub fn error_code(&self) -> u64 {
        self.body["code"].as_u64().unwrap()
    }

    /// `name=value` part of the Set-Cookie header
    pub fn session_cookie(&self) -> String {
        let set_cookie = self.headers[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> TestResponse {
        self.send(
            Request::get(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn json(&self, method: &str, uri: &str, body: Value) -> TestResponse {
        self.json_with_cookie(method, uri, body, None).await
    }

    pub async fn json_with_cookie(
        &self,
        method: &str,
        uri: &str,
        body: Value,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Log in as a demo owner and return the `session=...` cookie pair
    pub async fn login(&self, username: &str) -> String {
        let res = self
            .json(
                "POST",
                "/api/auth/login",
                serde_json::json!({ "username": username, "password": DEMO_PASSWORD }),
            )
            .await;
        assert_eq!(res.status, StatusCode::OK, "login failed: {}", res.body);
        res.session_cookie()
    }

    /// First upcoming slot of a café, as listed publicly
    pub async fn first_slot(&self, cafe_id: i64) -> Value {
        let res = self.get(&format!("/api/cafes/{cafe_id}/slots")).await;
        assert_eq!(res.status, StatusCode::OK);
        res.body[0].clone()
    }
}

pub fn booking_body(slot_id: i64, email: &str, num_pcs: i64) -> Value {
    serde_json::json!({
        "slot_id": slot_id,
        "user_name": "Asha Rao",
        "user_email": email,
        "gaming_handle": "ashaFrag",
        "num_pcs": num_pcs,
    })
}
