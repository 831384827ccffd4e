use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Reasons a timezone request can fail. Every error ends the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Body is not JSON of the expected shape.
    #[error("Invalid request payload")]
    MalformedRequest,
    /// Label is not in the catalog.
    #[error("Invalid timezone selection")]
    InvalidSelection,
    /// No usable `user_id` query parameter.
    #[error("User ID is required")]
    MissingParameter,
    /// Nothing saved for the user.
    #[error("User timezone not found")]
    UserNotFound,
    /// Stored identifier is not in the tz database.
    #[error("Invalid timezone")]
    InvalidTimezoneData,
}

impl ApiError {
    /// HTTP status for this error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest
            | ApiError::InvalidSelection
            | ApiError::MissingParameter => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidTimezoneData => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MalformedRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidSelection.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingParameter.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InvalidTimezoneData.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = ApiError::UserNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
