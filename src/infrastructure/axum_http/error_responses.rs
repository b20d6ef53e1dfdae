use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::application::usecases::dashboard::DashboardError;
use crate::application::usecases::savings::SavingsError;
use crate::application::usecases::subscriptions::SubscriptionError;
use crate::domain::value_objects::validation::FieldError;

#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

pub fn ok_response<T: Serialize>(data: T) -> Response {
    (
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            data,
        }),
    )
        .into_response()
}

pub fn created_response<T: Serialize>(data: T) -> Response {
    (
        StatusCode::CREATED,
        Json(SuccessResponse {
            success: true,
            data,
        }),
    )
        .into_response()
}

pub fn message_response(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(MessageResponse {
            success: true,
            message: message.to_string(),
        }),
    )
        .into_response()
}

fn error_response(status: StatusCode, message: String, errors: Option<Vec<FieldError>>) -> Response {
    (
        status,
        Json(ErrorResponse {
            success: false,
            message,
            errors,
        }),
    )
        .into_response()
}

impl IntoResponse for SubscriptionError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            SubscriptionError::Validation(errors) => {
                error_response(status, "Validation failed".to_string(), Some(errors))
            }
            other => error_response(status, other.to_string(), None),
        }
    }
}

impl IntoResponse for SavingsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            SavingsError::Validation(errors) => {
                error_response(status, "Validation failed".to_string(), Some(errors))
            }
            other => error_response(status, other.to_string(), None),
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        error_response(self.status_code(), self.to_string(), None)
    }
}
