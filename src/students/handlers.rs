use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, put},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    state::AppState,
    students::{
        dto::{CreateStudentRequest, StudentResponse, TargetStudentRequest},
        errors::ApiError,
        extractors::{JsonBody, OptionalJsonBody, StudentId},
        repo_types::NewStudent,
    },
};

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(list_students).post(create_student))
        .route("/user/", get(list_students).post(create_student))
        .route("/user/:id/approve", put(approve_student))
        .route("/user/:id", delete(archive_student))
        .route("/user/:id/", delete(archive_student))
}

#[instrument(skip(state))]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let rows = state.store.list().await?;
    debug!(count = rows.len(), "students listed");
    Ok(Json(rows.into_iter().map(StudentResponse::from).collect()))
}

#[instrument(skip(state, body))]
pub async fn create_student(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateStudentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let student = NewStudent {
        id: Uuid::new_v4(),
        name: body.name.unwrap_or_default(),
        email: body.email.unwrap_or_default(),
        created_at: OffsetDateTime::now_utc(),
    };
    state.store.insert(&student).await?;

    info!(student_id = %student.id, "student created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/user/{}/", student.id))],
    ))
}

#[instrument(skip(state, body))]
pub async fn approve_student(
    State(state): State<AppState>,
    StudentId(id): StudentId,
    OptionalJsonBody(body): OptionalJsonBody<TargetStudentRequest>,
) -> Result<StatusCode, ApiError> {
    check_body_id(id, body)?;
    let affected = state.store.approve(id, OffsetDateTime::now_utc()).await?;
    if affected == 0 {
        debug!(student_id = %id, "approve matched no student");
    } else {
        info!(student_id = %id, "student approved");
    }
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, body))]
pub async fn archive_student(
    State(state): State<AppState>,
    StudentId(id): StudentId,
    OptionalJsonBody(body): OptionalJsonBody<TargetStudentRequest>,
) -> Result<StatusCode, ApiError> {
    check_body_id(id, body)?;
    let affected = state.store.archive(id, OffsetDateTime::now_utc()).await?;
    if affected == 0 {
        debug!(student_id = %id, "archive matched no student");
    } else {
        info!(student_id = %id, "student archived");
    }
    Ok(StatusCode::NO_CONTENT)
}

fn check_body_id(path: Uuid, body: Option<TargetStudentRequest>) -> Result<(), ApiError> {
    match body.and_then(|b| b.id) {
        Some(body_id) if body_id != path => Err(ApiError::IdMismatch {
            path,
            body: body_id,
        }),
        _ => Ok(()),
    }
}
