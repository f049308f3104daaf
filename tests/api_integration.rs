//! Integration tests for the HTTP API
//!
//! Tests endpoints through the router with tower oneshot

use lightquest::core::{create_router, empty_descriptor, AppState};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_router() -> axum::Router {
    create_router(Arc::new(AppState::new(empty_descriptor(), Some(7))))
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn new_session(app: &axum::Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/session/new")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["session_id"].as_str().unwrap().to_string()
}

async fn post_action(app: &axum::Router, id: &str, action: Value) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/session/{}/action", id))
                .header("content-type", "application/json")
                .body(Body::from(action.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["animation_loaded"], false);
}

#[tokio::test]
async fn test_stages_endpoint() {
    let app = create_test_router();

    let response = app
        .oneshot(Request::builder().uri("/stages").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let stages = json.as_array().unwrap();
    assert_eq!(stages.len(), 7);
    assert_eq!(stages[0]["id"], "intro");
    assert_eq!(stages[6]["id"], "chatbot");
}

#[tokio::test]
async fn test_animation_endpoint_empty() {
    let app = create_test_router();

    let response = app
        .oneshot(Request::builder().uri("/animation").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({}));
}

#[tokio::test]
async fn test_new_session_has_defaults() {
    let app = create_test_router();
    let id = new_session(&app).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/session/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["action_count"], 0);
    assert_eq!(json["state"]["timer_running"], false);
    assert_eq!(json["state"]["tubes"], json!([true, true, true, true, true, true]));
    assert_eq!(json["state"]["chat_history"], json!([]));
}

#[tokio::test]
async fn test_session_not_found() {
    let app = create_test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/session/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("nonexistent"));
}

#[tokio::test]
async fn test_action_on_unknown_session() {
    let app = create_test_router();
    let response = post_action(&app, "missing", json!({"action": "start_timer"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_intro_action() {
    let app = create_test_router();
    let id = new_session(&app).await;

    let response = post_action(
        &app,
        &id,
        json!({"action": "submit_intro", "choice": "真空管過於脆弱，怕震動"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["verdict"]["outcome"], "PASS");
    assert_eq!(json["verdict"]["stage"], "intro");
    assert_eq!(json["banner"], "success");
}

#[tokio::test]
async fn test_toggle_updates_state() {
    let app = create_test_router();
    let id = new_session(&app).await;

    let response = post_action(&app, &id, json!({"action": "toggle_tube", "index": 0})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["state"]["tubes"], json!([false, true, true, true, true, true]));
    assert_eq!(json["state"]["tube_value"], 31);
}

#[tokio::test]
async fn test_toggle_out_of_range_rejected() {
    let app = create_test_router();
    let id = new_session(&app).await;

    let response = post_action(&app, &id, json!({"action": "toggle_tube", "index": 6})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Rejected request leaves the bank untouched
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/session/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["action_count"], 0);
    assert_eq!(json["state"]["tubes"], json!([true, true, true, true, true, true]));
}

#[tokio::test]
async fn test_seeded_burn_is_reproducible() {
    let app = create_test_router();
    let a = new_session(&app).await;
    let b = new_session(&app).await;

    let first = body_json(post_action(&app, &a, json!({"action": "burn_tube"})).await).await;
    let second = body_json(post_action(&app, &b, json!({"action": "burn_tube"})).await).await;

    assert_eq!(first["verdict"]["reason"], "V401_TUBE_BURNED");
    assert_eq!(
        first["verdict"]["measurement"],
        second["verdict"]["measurement"]
    );
}

#[tokio::test]
async fn test_finish_before_start_warns() {
    let app = create_test_router();
    let id = new_session(&app).await;

    let json = body_json(post_action(&app, &id, json!({"action": "finish_timer"})).await).await;
    assert_eq!(json["verdict"]["outcome"], "WARNING");
    assert_eq!(json["banner"], "warning");
}

#[tokio::test]
async fn test_chat_and_clear() {
    let app = create_test_router();
    let id = new_session(&app).await;

    let json = body_json(
        post_action(&app, &id, json!({"action": "ask_chat", "text": "電晶體"})).await,
    )
    .await;
    assert_eq!(json["state"]["chat_history"].as_array().unwrap().len(), 2);
    assert_eq!(json["state"]["chat_history"][0]["speaker"], "user");
    assert_eq!(json["state"]["chat_history"][1]["speaker"], "bot");

    let json = body_json(post_action(&app, &id, json!({"action": "clear_chat"})).await).await;
    assert_eq!(json["state"]["chat_history"], json!([]));
}

#[tokio::test]
async fn test_sessions_do_not_share_state() {
    let app = create_test_router();
    let a = new_session(&app).await;
    let b = new_session(&app).await;

    post_action(&app, &a, json!({"action": "toggle_tube", "index": 3})).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/session/{}", b))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["state"]["tubes"], json!([true, true, true, true, true, true]));
}

#[tokio::test]
async fn test_malformed_action_rejected() {
    let app = create_test_router();
    let id = new_session(&app).await;

    let response = post_action(&app, &id, json!({"action": "launch_rocket"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("Invalid arguments for action"));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/session/{}/action", id))
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_end_session() {
    let app = create_test_router();
    let id = new_session(&app).await;
    post_action(&app, &id, json!({"action": "burn_tube"})).await;

    let delete = |id: String| {
        let app = app.clone();
        async move {
            app.oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/session/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
        }
    };

    let response = delete(id.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["session_id"], id.as_str());
    assert_eq!(json["action_count"], 1);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/session/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(id.clone()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(body_json(response).await["sessions_active"], 0);
}

#[tokio::test]
async fn test_single_stage_endpoint() {
    let app = create_test_router();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/stages/punch_card")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], "punch_card");
    assert_eq!(json["expected"]["holes"], json!([2, 5, 7, 12]));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/stages/bonus")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Stage not found: bonus");
}
