pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::quiz::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session API
        .route("/api/v1/session", get(handlers::handle_get_session))
        .route("/api/v1/session/events", post(handlers::handle_event))
        .route("/api/v1/session/reset", post(handlers::handle_reset))
        // Catalog API
        .route(
            "/api/v1/questions/general",
            get(handlers::handle_general_questions),
        )
        .route("/api/v1/professions", get(handlers::handle_professions))
        .route(
            "/api/v1/professions/:profession/questions",
            get(handlers::handle_profession_questions),
        )
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::insights::OfflineGateway;
    use crate::quiz::machine::{FlowConfig, QuizMachine};
    use crate::session::Session;

    fn app_with(flow: FlowConfig) -> Router {
        let session = Session::new(
            QuizMachine::new(flow),
            Arc::new(OfflineGateway),
            Duration::from_secs(30),
        );
        build_router(AppState { session })
    }

    fn app() -> Router {
        app_with(FlowConfig::default())
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn event(app: &Router, body: Value) -> (StatusCode, Value) {
        send(app, Method::POST, "/api/v1/session/events", Some(body)).await
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "compass-api");
    }

    #[tokio::test]
    async fn test_fresh_session_is_home() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/session", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["step"], "Home");
        assert_eq!(body["flow"]["task_page"], true);
    }

    #[tokio::test]
    async fn test_session_reports_machine_flow() {
        let app = app_with(FlowConfig {
            task_page: false,
            loading_results: true,
            ..FlowConfig::default()
        });
        let (_, body) = send(&app, Method::GET, "/api/v1/session", None).await;
        assert_eq!(body["flow"]["task_page"], false);
        assert_eq!(body["flow"]["loading_results"], true);

        let (status, body) = send(&app, Method::POST, "/api/v1/session/reset", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["flow"]["loading_results"], true);
    }

    #[tokio::test]
    async fn test_catalog_endpoints() {
        let app = app();
        let (status, general) = send(&app, Method::GET, "/api/v1/questions/general", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(general.as_array().unwrap().len(), 10);

        let (_, professions) = send(&app, Method::GET, "/api/v1/professions", None).await;
        let names: Vec<&str> = professions
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["profession"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Law", "Psychology", "Designing"]);

        let (status, questions) =
            send(&app, Method::GET, "/api/v1/professions/psychology/questions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(questions[0]["options"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_profession_is_not_found() {
        let (status, body) = send(
            &app(),
            Method::GET,
            "/api/v1/professions/medicine/questions",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, _) = send(&app(), Method::GET, "/api/v1/nowhere", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_details_is_bad_request() {
        let app = app();
        event(&app, json!({"type": "start_quiz"})).await;
        let (status, body) = event(
            &app,
            json!({"type": "submit_user_details", "details": {"name": "  "}}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "Please fill in your Name and Class details to proceed."
        );
    }

    #[tokio::test]
    async fn test_out_of_order_event_is_conflict() {
        let (status, body) = event(&app(), json!({"type": "submit_tasks"})).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "INVALID_EVENT");
    }

    #[tokio::test]
    async fn test_general_quiz_over_http() {
        let app = app();
        event(&app, json!({"type": "start_quiz"})).await;
        let (status, _) = event(
            &app,
            json!({
                "type": "submit_user_details",
                "details": {"name": "Kabir", "standard": "11", "stream": "Commerce"}
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let tags = [
            "Logical", "Logical", "Social", "Logical", "Creative", "Logical", "Practical",
            "Logical", "Social", "Logical",
        ];
        let mut last = Value::Null;
        for (index, tag) in tags.iter().enumerate() {
            let (status, body) = event(
                &app,
                json!({"type": "answer_general", "index": index, "archetype": tag}),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            last = body;
        }
        assert_eq!(last["state"]["step"], "ProfessionSelection");
        assert_eq!(last["state"]["final_archetype"], "Logical");
        assert_eq!(last["state"]["user_details"]["stream"], "Commerce");
    }

    #[tokio::test]
    async fn test_reset_endpoint_returns_home() {
        let app = app();
        event(&app, json!({"type": "start_quiz"})).await;
        let (status, body) = send(&app, Method::POST, "/api/v1/session/reset", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["step"], "Home");
    }
}
