//! API Error Surface Tests
//!
//! Validates the mapping from error kinds to HTTP status codes and the shape
//! of the JSON error body.

#[cfg(test)]
mod tests {
    use crate::api::error::ApiError;
    use crate::storage::json_store::StoreError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    async fn body_detail(err: ApiError) -> String {
        let response = err.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value["detail"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_status_codes_match_error_kinds() {
        let missing = StoreError::Missing {
            file: "students.json".to_string(),
        };
        assert_eq!(
            ApiError::Storage(missing).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Conflict { student_id: 1 }.status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::PathBodyMismatch {
                path_id: 1,
                body_id: 2
            }
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound { student_id: 1 }.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Validation("bad grade".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_error_body_has_detail_field() {
        let detail = body_detail(ApiError::NotFound { student_id: 7 }).await;
        assert!(
            detail.contains('7'),
            "Detail should name the missing id, got: {}",
            detail
        );
    }

    #[tokio::test]
    async fn test_missing_file_detail_names_the_file() {
        let err = ApiError::Storage(StoreError::Missing {
            file: "students.json".to_string(),
        });
        assert_eq!(body_detail(err).await, "students.json not found");
    }
}
