use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cupcakes_service::ServiceError;
use sea_orm::DbErr;
use serde_json::json;

/// Service failures mapped onto the wire contract: every error body is
/// `{"message": ...}`, validation and storage failures are 400s, a missing
/// record is a 404.
pub struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self(ServiceError::Db(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            ServiceError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ServiceError::NotFound => (StatusCode::NOT_FOUND, "Item not found".to_owned()),
            ServiceError::Db(err) => (StatusCode::BAD_REQUEST, format!("Invalid data : {err}")),
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}
