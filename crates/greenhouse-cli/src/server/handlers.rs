//! Route handlers for the REST API
//!
//! Request bodies deserialize straight into the core parameter types; every
//! handler delegates to the shared [`Tracker`](greenhouse_core::Tracker) and
//! maps failures through [`to_api_error`].

use axum::{
    body::Body,
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use greenhouse_core::{
    params::{
        CategoryInput, CreatePlant, CreateProfile, Id, LogActivity, ScheduleQuery, UpdateCategory,
    },
    store::{IncomingFile, UploadedFile},
    Activity, Category, DueTask, Plant, Profile, Snapshot, SnapshotPatch, TaskAssignments,
};
use log::debug;
use serde::Serialize;
use serde_json::{json, Value};

use super::{
    errors::{to_api_error, ApiError, ApiResult},
    AppState,
};

/// Multipart field carrying uploaded photos.
const UPLOAD_FIELD: &str = "photos";

fn success() -> Json<Value> {
    Json(json!({ "success": true }))
}

// ============================================================================
// Whole document
// ============================================================================

pub async fn get_data(State(state): State<AppState>) -> ApiResult<Json<Snapshot>> {
    let snapshot = state
        .tracker
        .snapshot()
        .await
        .map_err(|e| to_api_error("Failed to read data", e))?;
    Ok(Json(snapshot))
}

pub async fn post_data(
    State(state): State<AppState>,
    Json(patch): Json<SnapshotPatch>,
) -> ApiResult<Json<Value>> {
    state
        .tracker
        .merge_snapshot(patch)
        .await
        .map_err(|e| to_api_error("Failed to save data", e))?;
    Ok(success())
}

// ============================================================================
// Plants
// ============================================================================

pub async fn list_plants(State(state): State<AppState>) -> ApiResult<Json<Vec<Plant>>> {
    let plants = state
        .tracker
        .list_plants()
        .await
        .map_err(|e| to_api_error("Failed to get plants", e))?;
    Ok(Json(plants))
}

pub async fn create_plant(
    State(state): State<AppState>,
    Json(params): Json<CreatePlant>,
) -> ApiResult<Json<Plant>> {
    let plant = state
        .tracker
        .create_plant(&params)
        .await
        .map_err(|e| to_api_error("Failed to create plant", e))?;
    Ok(Json(plant))
}

pub async fn get_plant(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Plant>> {
    state
        .tracker
        .get_plant(&Id { id })
        .await
        .map_err(|e| to_api_error("Failed to get plant", e))?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Plant not found"))
}

pub async fn delete_plant(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Value>> {
    let removed = state
        .tracker
        .delete_plant_by_id(&Id { id })
        .await
        .map_err(|e| to_api_error("Failed to delete plant", e))?;
    debug!("Delete plant {id}: removed={removed}");
    Ok(success())
}

pub async fn log_activity(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(params): Json<LogActivity>,
) -> ApiResult<Json<Activity>> {
    let activity = state
        .tracker
        .log_activity(&Id { id }, &params)
        .await
        .map_err(|e| to_api_error("Failed to add activity", e))?;
    Ok(Json(activity))
}

pub async fn recommendations(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Vec<String>>> {
    let hints = state
        .tracker
        .recommendations(&Id { id })
        .await
        .map_err(|e| to_api_error("Failed to get recommendations", e))?;
    Ok(Json(hints))
}

// ============================================================================
// Profiles
// ============================================================================

pub async fn list_profiles(State(state): State<AppState>) -> ApiResult<Json<Vec<Profile>>> {
    let profiles = state
        .tracker
        .list_profiles()
        .await
        .map_err(|e| to_api_error("Failed to get profiles", e))?;
    Ok(Json(profiles))
}

pub async fn create_profile(
    State(state): State<AppState>,
    Json(params): Json<CreateProfile>,
) -> ApiResult<Json<Profile>> {
    let profile = state
        .tracker
        .create_profile(&params)
        .await
        .map_err(|e| to_api_error("Failed to create profile", e))?;
    Ok(Json(profile))
}

// ============================================================================
// Categories
// ============================================================================

pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    let categories = state
        .tracker
        .list_categories()
        .await
        .map_err(|e| to_api_error("Failed to get categories", e))?;
    Ok(Json(categories))
}

pub async fn create_category(
    State(state): State<AppState>,
    Json(params): Json<CategoryInput>,
) -> ApiResult<Json<Category>> {
    let category = state
        .tracker
        .create_category(&params)
        .await
        .map_err(|e| to_api_error("Failed to create category", e))?;
    Ok(Json(category))
}

pub async fn replace_categories(
    State(state): State<AppState>,
    Json(params): Json<Vec<CategoryInput>>,
) -> ApiResult<Json<Vec<Category>>> {
    let categories = state
        .tracker
        .replace_categories(params)
        .await
        .map_err(|e| to_api_error("Failed to update categories", e))?;
    Ok(Json(categories))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(params): Json<UpdateCategory>,
) -> ApiResult<Json<Category>> {
    let category = state
        .tracker
        .update_category(&Id { id }, &params)
        .await
        .map_err(|e| to_api_error("Failed to update category", e))?;
    Ok(Json(category))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Value>> {
    state
        .tracker
        .delete_category_by_id(&Id { id })
        .await
        .map_err(|e| to_api_error("Failed to delete category", e))?;
    Ok(success())
}

// ============================================================================
// Assignments and schedule
// ============================================================================

pub async fn get_task_assignments(
    State(state): State<AppState>,
) -> ApiResult<Json<TaskAssignments>> {
    let assignments = state
        .tracker
        .task_assignments()
        .await
        .map_err(|e| to_api_error("Failed to get task assignments", e))?;
    Ok(Json(assignments))
}

pub async fn put_task_assignments(
    State(state): State<AppState>,
    Json(changes): Json<TaskAssignments>,
) -> ApiResult<Json<TaskAssignments>> {
    let assignments = state
        .tracker
        .merge_task_assignments(changes)
        .await
        .map_err(|e| to_api_error("Failed to update task assignments", e))?;
    Ok(Json(assignments))
}

pub async fn schedule(
    State(state): State<AppState>,
    Query(query): Query<ScheduleQuery>,
) -> ApiResult<Json<Vec<DueTask>>> {
    let tasks = state
        .tracker
        .schedule(&query)
        .await
        .map_err(|e| to_api_error("Failed to get schedule", e))?;
    Ok(Json(tasks))
}

// ============================================================================
// Uploads
// ============================================================================

#[derive(Serialize)]
pub struct UploadResponse {
    pub files: Vec<UploadedFile>,
}

pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid upload: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let original_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid upload: {e}")))?;

        files.push(IncomingFile {
            original_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    let files = state
        .tracker
        .save_uploads(files)
        .await
        .map_err(|e| to_api_error("Failed to upload files", e))?;
    Ok(Json(UploadResponse { files }))
}

pub async fn serve_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> ApiResult<Response> {
    let file = state
        .tracker
        .open_upload(&filename)
        .await
        .map_err(|e| to_api_error("Failed to read upload", e))?
        .ok_or_else(|| ApiError::not_found("File not found"))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, file.mimetype)],
        Body::from(file.bytes),
    )
        .into_response())
}
