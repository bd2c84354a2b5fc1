use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Request body extractor that reports bad JSON as `AppError::Validation`,
/// so clients get the usual `{code, message}` body instead of plain text.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => Err(AppError::Validation(
                "Expected request with `Content-Type: application/json`".into(),
            )),
            Err(rejection) => {
                tracing::debug!(%rejection, "Rejected request body");
                Err(AppError::Validation(rejection.body_text()))
            }
        }
    }
}
