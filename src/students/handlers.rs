use axum::Json;
use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use serde::Deserialize;
use std::sync::Arc;

use super::types::{Student, StudentPatch, check_grade};
use crate::api::error::ApiError;
use crate::storage::json_store::JsonStore;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub grade: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct GradeParams {
    pub last_name: Option<String>,
}

/// `GET /students` — the full collection, optionally filtered by grade.
pub async fn handle_list_students(
    Query(params): Query<ListParams>,
    Extension(store): Extension<Arc<JsonStore<Student>>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = store.load().await?;

    let students = match params.grade {
        None => students,
        Some(grade) => {
            check_grade(grade)?;
            students.into_iter().filter(|s| s.grade == grade).collect()
        }
    };

    Ok(Json(students))
}

/// `GET /students/:grade` — classmates of one grade, optionally narrowed to
/// a surname. The surname match is exact but case-insensitive, and the query
/// value is trimmed of surrounding whitespace first. An empty result is a
/// 200 with an empty array, never an error.
pub async fn handle_students_by_grade(
    Path(grade): Path<u8>,
    Query(params): Query<GradeParams>,
    Extension(store): Extension<Arc<JsonStore<Student>>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    check_grade(grade)?;

    let students = store.load().await?;
    let mut classmates: Vec<Student> =
        students.into_iter().filter(|s| s.grade == grade).collect();

    if let Some(last_name) = params.last_name {
        let needle = last_name.trim().to_lowercase();
        classmates.retain(|s| s.last_name.to_lowercase() == needle);
    }

    Ok(Json(classmates))
}

/// `POST /students` — appends a new record and persists the collection.
pub async fn handle_create_student(
    Extension(store): Extension<Arc<JsonStore<Student>>>,
    Json(student): Json<Student>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    student.validate()?;

    let mut students = store.load().await?;
    if students.iter().any(|s| s.student_id == student.student_id) {
        return Err(ApiError::Conflict {
            student_id: student.student_id,
        });
    }

    students.push(student.clone());
    store.save(&students).await?;

    tracing::debug!("created student {}", student.student_id);
    Ok((StatusCode::CREATED, Json(student)))
}

/// `PUT /students/:student_id` — overwrites one record wholesale.
///
/// The body's `student_id` must equal the path value; a mismatch is rejected
/// before anything is written.
pub async fn handle_replace_student(
    Path(student_id): Path<i64>,
    Extension(store): Extension<Arc<JsonStore<Student>>>,
    Json(student): Json<Student>,
) -> Result<Json<Student>, ApiError> {
    if student.student_id != student_id {
        return Err(ApiError::PathBodyMismatch {
            path_id: student_id,
            body_id: student.student_id,
        });
    }
    student.validate()?;

    let mut students = store.load().await?;
    let slot = students
        .iter_mut()
        .find(|s| s.student_id == student_id)
        .ok_or(ApiError::NotFound { student_id })?;

    *slot = student.clone();
    store.save(&students).await?;

    tracing::debug!("replaced student {}", student_id);
    Ok(Json(student))
}

/// `PATCH /students/:student_id` — merges only the supplied fields into the
/// existing record. `student_id` is never altered by the merge.
pub async fn handle_patch_student(
    Path(student_id): Path<i64>,
    Extension(store): Extension<Arc<JsonStore<Student>>>,
    Json(patch): Json<StudentPatch>,
) -> Result<Json<Student>, ApiError> {
    patch.validate()?;

    let mut students = store.load().await?;
    let slot = students
        .iter_mut()
        .find(|s| s.student_id == student_id)
        .ok_or(ApiError::NotFound { student_id })?;

    patch.apply(slot);
    let updated = slot.clone();
    store.save(&students).await?;

    tracing::debug!("patched student {}", student_id);
    Ok(Json(updated))
}

/// `DELETE /students/:student_id` — removes one record in place.
pub async fn handle_delete_student(
    Path(student_id): Path<i64>,
    Extension(store): Extension<Arc<JsonStore<Student>>>,
) -> Result<StatusCode, ApiError> {
    let mut students = store.load().await?;
    let index = students
        .iter()
        .position(|s| s.student_id == student_id)
        .ok_or(ApiError::NotFound { student_id })?;

    students.remove(index);
    store.save(&students).await?;

    tracing::debug!("deleted student {}", student_id);
    Ok(StatusCode::NO_CONTENT)
}
