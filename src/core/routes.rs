// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Public endpoints
        .route("/register", post(crate::handlers::account::register_handler))
        .route("/login", post(crate::handlers::account::login_handler))
        .route("/areas", get(crate::handlers::directory::areas_handler))
        .route("/health", get(crate::handlers::health::health_handler))

        // Session endpoints (require bearer token)
        .route("/logout", post(crate::handlers::account::logout_handler))
        .route("/session", get(crate::handlers::account::session_handler))
        .route("/banks", get(crate::handlers::directory::banks_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::models::forms::{LoginForm, RegisterForm};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn create_test_router() -> (Router, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::from_toml("[server]\nport = 8080\n[logging]\n").unwrap();
        config.storage.users_path = temp_dir.path().join("user_data").join("users.csv");

        (build_router(Arc::new(AppState::new(config))), temp_dir)
    }

    fn form_request<T: serde::Serialize>(uri: &str, form: &T) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(serde_urlencoded::to_string(form).unwrap()))
            .unwrap()
    }

    fn bearer_request(method: &str, uri: &str, token: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap()
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_register_login_browse_logout() {
        let (router, _dir) = create_test_router();

        let registration = RegisterForm {
            name: "Amina".to_string(),
            age: "24".to_string(),
            blood_group: "A+".to_string(),
            username: "amina1".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
        };
        let (status, body) = send(&router, form_request("/register", &registration)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user"]["username"], "amina1");

        let (status, body) = send(&router, form_request("/register", &registration)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "username exists");

        let wrong = LoginForm {
            username: "amina1".to_string(),
            password: "wrong".to_string(),
        };
        let (status, body) = send(&router, form_request("/login", &wrong)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "invalid credentials");

        let login = LoginForm {
            username: "amina1".to_string(),
            password: "secret123".to_string(),
        };
        let (status, body) = send(&router, form_request("/login", &login)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Amina");
        let token = body["token"].as_str().unwrap().to_string();

        let (status, body) = send(&router, bearer_request("GET", "/banks?blood_group=O%2B", &token)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["count"].as_u64().unwrap() > 0);

        let (status, _) = send(&router, bearer_request("POST", "/logout", &token)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&router, bearer_request("GET", "/banks", &token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_register_with_missing_fields() {
        let (router, _dir) = create_test_router();

        let request = Request::builder()
            .method("POST")
            .uri("/register")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=Amina&username=amina1"))
            .unwrap();

        let (status, body) = send(&router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "missing field");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (router, _dir) = create_test_router();

        let request = Request::builder().uri("/dashboard").body(Body::empty()).unwrap();
        let (status, body) = send(&router, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }
}
