//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{MessageBody, MsgBody, EMPTY_STORE_NAME, INTERNAL_ERROR, UNKNOWN_STORE_ID};
use crate::application::ApplicationError;
use crate::domain::store::StoreError;

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 门店不存在 -> 400 `{"message":"Unknown store id"}`
    UnknownStoreId,
    /// 门店名称为空 -> 400 `{"msg":"name cannot be empty"}`
    EmptyStoreName,
    /// 非预期错误 -> 500，细节只写日志
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::UnknownStoreId => {
                tracing::warn!(error = UNKNOWN_STORE_ID, "Store not found");
                (
                    StatusCode::BAD_REQUEST,
                    Json(MessageBody {
                        message: UNKNOWN_STORE_ID,
                    }),
                )
                    .into_response()
            }
            ApiError::EmptyStoreName => {
                tracing::warn!(error = EMPTY_STORE_NAME, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    Json(MsgBody {
                        msg: EMPTY_STORE_NAME,
                    }),
                )
                    .into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody {
                        message: INTERNAL_ERROR,
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::Store(StoreError::NotFound(_)) => ApiError::UnknownStoreId,
            ApplicationError::Store(StoreError::EmptyName) => ApiError::EmptyStoreName,
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::RepositoryError;
    use crate::domain::store::StoreId;

    #[test]
    fn test_domain_errors_map_to_bad_request() {
        let not_found = ApiError::from(ApplicationError::from(StoreError::NotFound(StoreId::new(1))));
        assert!(matches!(not_found, ApiError::UnknownStoreId));
        assert_eq!(not_found.into_response().status(), StatusCode::BAD_REQUEST);

        let empty = ApiError::from(ApplicationError::from(StoreError::EmptyName));
        assert!(matches!(empty, ApiError::EmptyStoreName));
        assert_eq!(empty.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_repository_error_maps_to_internal() {
        let err = ApiError::from(ApplicationError::from(RepositoryError::DatabaseError(
            "locked".to_string(),
        )));
        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
