//! Router tests driven through `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use greenhouse_core::TrackerBuilder;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use super::router;

async fn create_test_app() -> (TempDir, Router) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = TrackerBuilder::new()
        .with_data_path(Some(temp_dir.path().join("data.json")))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, router(tracker))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_data_defaults_to_empty_collections() {
    let (temp_dir, app) = create_test_app().await;
    std::fs::write(temp_dir.path().join("data.json"), r#"{"plants": [], "profiles": []}"#).unwrap();

    let (status, body) = send(&app, Method::GET, "/api/data", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"], json!([]));
    assert_eq!(body["taskAssignments"], json!({}));
}

#[tokio::test]
async fn test_post_data_merges_top_level_keys() {
    let (_temp_dir, app) = create_test_app().await;
    send(&app, Method::POST, "/api/profiles", Some(json!({"name": "Alice"}))).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/data",
        Some(json!({"plants": [{"id": 1, "name": "Basil"}]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (_, data) = send(&app, Method::GET, "/api/data", None).await;
    assert_eq!(data["plants"][0]["name"], "Basil");
    assert_eq!(data["profiles"][0]["name"], "Alice");
}

#[tokio::test]
async fn test_plant_routes() {
    let (_temp_dir, app) = create_test_app().await;

    let (status, plant) = send(
        &app,
        Method::POST,
        "/api/plants",
        Some(json!({"name": "Basil", "strain": "Genovese", "stage": "vegetative"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plant["stage"], "vegetative");
    assert_eq!(plant["categoryId"], Value::Null);
    let id = plant["id"].as_u64().unwrap();

    let (status, activity) = send(
        &app,
        Method::POST,
        &format!("/api/plants/{id}/activities"),
        Some(json!({"type": "water", "note": "", "caretaker": "Bob", "images": []})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(activity["type"], "water");
    assert_eq!(activity["caretaker"], "Bob");
    assert!(activity["timestamp"].as_str().unwrap().ends_with('Z'));

    let (status, fetched) = send(&app, Method::GET, &format!("/api/plants/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["activities"][0], activity);

    let (status, hints) = send(
        &app,
        Method::GET,
        &format!("/api/plants/{id}/recommendations"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hints, json!(["No feeding recorded yet."]));

    let (status, body) = send(&app, Method::DELETE, &format!("/api/plants/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, body) = send(&app, Method::GET, &format!("/api/plants/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Plant not found"}));
}

#[tokio::test]
async fn test_activity_for_unknown_plant_is_404() {
    let (_temp_dir, app) = create_test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/plants/42/activities",
        Some(json!({"type": "feed"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Plant not found"}));
}

#[tokio::test]
async fn test_empty_plant_name_is_400() {
    let (_temp_dir, app) = create_test_app().await;

    let (status, body) = send(&app, Method::POST, "/api/plants", Some(json!({"name": " "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn test_category_routes() {
    let (_temp_dir, app) = create_test_app().await;

    let (status, created) = send(&app, Method::POST, "/api/categories", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Unnamed");
    assert_eq!(created["wateringDays"], 3);
    assert_eq!(created["feedingDays"], 7);
    assert_eq!(created["color"], "#5a8a5e");
    let id = created["id"].as_u64().unwrap();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/categories/{id}"),
        Some(json!({"wateringDays": "4"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["wateringDays"], 4);

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/categories/{}", id + 1),
        Some(json!({"name": "Ghost"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, replaced) = send(
        &app,
        Method::PUT,
        "/api/categories",
        Some(json!([
            {"id": id, "name": "Herbs", "wateringDays": 2, "feedingDays": 10},
            {"name": "Fruiting"}
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced.as_array().unwrap().len(), 2);
    assert_eq!(replaced[0]["id"].as_u64(), Some(id));
    assert!(replaced[1]["id"].as_u64().is_some());

    let (status, body) = send(&app, Method::DELETE, &format!("/api/categories/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (_, listed) = send(&app, Method::GET, "/api/categories", None).await;
    assert_eq!(listed[0]["name"], "Fruiting");
}

#[tokio::test]
async fn test_task_assignments_merge() {
    let (_temp_dir, app) = create_test_app().await;

    send(
        &app,
        Method::PUT,
        "/api/task-assignments",
        Some(json!({"1:water:2024-01-04": 5, "1:feed:2024-01-08": 6})),
    )
    .await;
    let (status, merged) = send(
        &app,
        Method::PUT,
        "/api/task-assignments",
        Some(json!({"1:feed:2024-01-08": null})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        merged,
        json!({"1:water:2024-01-04": 5, "1:feed:2024-01-08": null})
    );

    let (_, fetched) = send(&app, Method::GET, "/api/task-assignments", None).await;
    assert_eq!(fetched, merged);
}

#[tokio::test]
async fn test_schedule_route() {
    let (_temp_dir, app) = create_test_app().await;
    send(&app, Method::POST, "/api/plants", Some(json!({"name": "Basil"}))).await;

    let (status, tasks) = send(&app, Method::GET, "/api/schedule?horizon=3", None).await;
    assert_eq!(status, StatusCode::OK);

    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["action"], "Water");
    assert_eq!(tasks[0]["caretaker"], "Unassigned");
    assert_eq!(tasks[1]["icon"], "fa-bottle-water");
}

#[tokio::test]
async fn test_upload_and_serve() {
    let (_temp_dir, app) = create_test_app().await;

    let boundary = "greenhouse-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"photos\"; filename=\"Leaf.PNG\"\r\n\
         Content-Type: image/png\r\n\r\n\
         png-bytes\r\n\
         --{boundary}--\r\n"
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let uploaded: Value = serde_json::from_slice(&bytes).unwrap();

    let file = &uploaded["files"][0];
    let filename = file["filename"].as_str().unwrap();
    assert!(filename.ends_with(".png"));
    assert_eq!(file["url"], format!("/uploads/{filename}"));
    assert_eq!(file["mimetype"], "image/png");
    assert_eq!(file["size"], 9);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/uploads/{filename}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"png-bytes");

    let (status, _) = send(&app, Method::GET, "/uploads/missing.png", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_headers_and_preflight() {
    let (_temp_dir, app) = create_test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/plants")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let response = app
        .oneshot(Request::builder().uri("/api/plants").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
