use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::path::Path;

use crate::domain::{DomainError, FacultyView};
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/api/faculty",
    responses(
        (status = 200, description = "Every faculty record with contact, teaching and publications"),
        (status = 404, description = "The faculty table is empty"),
        (status = 500, description = "The store could not be read")
    ),
    tag = "faculty"
)]
pub async fn list_faculty(State(state): State<AppState>) -> impl IntoResponse {
    let faculty = match state.faculty_repo.find_all().await {
        Ok(faculty) => faculty,
        Err(e) => {
            tracing::error!("Failed to read faculty: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    if faculty.is_empty() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": DomainError::NotFound.to_string() })),
        )
            .into_response();
    }

    if let Err(e) = write_mirror(&state.mirror_path, &faculty).await {
        tracing::warn!("Failed to write {:?}: {}", state.mirror_path, e);
    }

    (StatusCode::OK, Json(faculty)).into_response()
}

async fn write_mirror(path: &Path, faculty: &[FacultyView]) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    let body = serde_json::to_vec_pretty(faculty)?;
    tokio::fs::write(path, body).await
}
