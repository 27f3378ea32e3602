// Router assembly
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, show_dashboard, show_settings};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    // Any path that is not the board falls through to the settings notice,
    // matching the original navigation behavior
    Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(show_dashboard))
        .route("/settings", get(show_settings))
        .fallback(show_settings)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::board_service::BoardService;
    use crate::application::clock::Clock;
    use crate::infrastructure::static_provider::StaticStatusProvider;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{DateTime, Local, TimeZone};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            Local.with_ymd_and_hms(2024, 1, 15, 10, 42, 7).unwrap()
        }
    }

    fn test_router() -> Router {
        let board_service =
            BoardService::new(Arc::new(StaticStatusProvider), Arc::new(FixedClock));
        build_router(Arc::new(AppState { board_service }))
    }

    async fn get(path: &str) -> (StatusCode, String) {
        let response = test_router()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_root_shows_three_cards_in_order() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);

        let user = body.find("User Service").unwrap();
        let payment = body.find("Payment Gateway").unwrap();
        let notification = body.find("Notification Hub").unwrap();
        assert!(user < payment && payment < notification);

        assert_eq!(body.matches("<div class=\"status-card\">").count(), 3);
        assert_eq!(body.matches("class=\"badge badge-healthy\"").count(), 3);
        assert!(body.contains("24ms"));
        assert!(body.contains("115ms"));
        assert!(body.contains("45ms"));
    }

    #[tokio::test]
    async fn test_root_shows_last_sync_label() {
        let (_, body) = get("/").await;
        assert!(body.contains("Last sync:"));
        assert!(body.contains("10:42:07 AM"));
    }

    #[tokio::test]
    async fn test_settings_shows_notice_and_no_cards() {
        let (status, body) = get("/settings").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("System Settings"));
        assert!(body.contains("Configuration options are locked in this environment."));
        assert!(!body.contains("class=\"status-card\""));
    }

    #[tokio::test]
    async fn test_unknown_path_falls_through_to_settings() {
        let (status, body) = get("/does-not-exist").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("System Settings"));
        assert!(!body.contains("class=\"status-card\""));
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get("/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }
}
