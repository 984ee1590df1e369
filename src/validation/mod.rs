pub mod form_state;
pub mod project;

use axum::{
    Json, async_trait,
    extract::{FromRequest, FromRequestParts, Query},
    http::{Request, request::Parts},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::{db::models::api::ErrorDetail, error::AppError};

pub use form_state::ProjectFormState;
pub use project::{FieldError, FieldErrors, ProjectField, ValidationResult, validate_project};

/// JSON 提取器，解析失败时返回统一的错误响应
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<axum::body::Body>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            AppError::validation("Invalid JSON format")
        })?;

        Ok(JsonBody(value))
    }
}

/// 验证的查询参数提取器
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation("Invalid query parameters"))?;

        value
            .validate()
            .map_err(|errors| AppError::field_errors(error_details(&errors)))?;

        Ok(ValidatedQuery(value))
    }
}

pub fn error_details(errors: &ValidationErrors) -> Vec<ErrorDetail> {
    let mut details: Vec<ErrorDetail> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| ErrorDetail {
                field: Some(field.to_string()),
                code: error.code.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Validation failed for field: {}", field)),
            })
        })
        .collect();
    // HashMap 顺序不稳定
    details.sort_by(|a, b| a.field.cmp(&b.field));
    details
}
