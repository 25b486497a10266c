// src/presentation/http/extractors.rs
use crate::application::dto::Actor;
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// Header naming the user on whose behalf a write is made.
pub const ACTING_USER_HEADER: &str = "x-user-id";

#[derive(Debug, Clone)]
pub struct ActingUser(pub Actor);

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(ACTING_USER_HEADER)
            .ok_or_else(|| HttpError::unauthorized("missing X-User-Id header"))?
            .to_str()
            .map_err(|_| HttpError::unauthorized("X-User-Id header is not valid text"))?;

        Actor::new(raw.trim())
            .map(Self)
            .map_err(|err| HttpError::unauthorized(format!("invalid X-User-Id header: {err}")))
    }
}
