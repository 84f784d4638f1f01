use crate::domain::RegistryError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// ドメインのエラー分類をラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(RegistryError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            // 400 Bad Request - 入力不正・参照先なし
            RegistryError::PriceInvalid
            | RegistryError::DateInvalid
            | RegistryError::IdInvalid
            | RegistryError::NotFound
            | RegistryError::NoForeignKey => StatusCode::BAD_REQUEST,

            // 500 Internal Server Error - ストレージ障害
            RegistryError::FailedGet
            | RegistryError::FailedSave
            | RegistryError::FailedDelete
            | RegistryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self.0 {
            // 分類できない障害の詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            RegistryError::Storage(ref e) => {
                tracing::error!("Unclassified storage error: {}", e);
                "Internal Server Error".to_string()
            }
            ref err if status.is_server_error() => {
                tracing::error!("{}", err);
                err.to_string()
            }
            ref err => {
                tracing::warn!("Rejected request: {}", err);
                err.to_string()
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_bad_request() {
        for err in [
            RegistryError::PriceInvalid,
            RegistryError::DateInvalid,
            RegistryError::IdInvalid,
            RegistryError::NotFound,
            RegistryError::NoForeignKey,
        ] {
            assert_eq!(ApiError::from(err).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_storage_errors_map_to_internal_server_error() {
        for err in [
            RegistryError::FailedGet,
            RegistryError::FailedSave,
            RegistryError::FailedDelete,
            RegistryError::Storage("connection reset".into()),
        ] {
            assert_eq!(
                ApiError::from(err).status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }
}
