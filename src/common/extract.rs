use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::common::response::ApiError;

/// JSON extractor that also runs the payload's field validations, so a
/// handler never sees an unvalidated body. Deserialization failures and
/// constraint violations both reject with a 400 and the error detail.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::UnprocessableBody(rejection.body_text()))?;
        payload.validate()?;
        Ok(ValidatedJson(payload))
    }
}
