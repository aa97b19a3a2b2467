//! # Authentication Middleware
//!
//! JWT-based authentication. The `AuthenticatedUser` extractor rejects
//! requests without a bearer token (`401`) or with an invalid/expired one
//! (`403`); handlers receive the verified claims and filter every collection
//! access by `claims.user_id`.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::state::AppState;

/// Token lifetime: 7 days.
const TOKEN_TTL_DAYS: i64 = 7;

/// The claims carried in the JWT. Field names are camelCase on the wire to
/// stay compatible with previously issued tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: String,
    pub email: String,
    pub exp: usize,
}

/// Signs a token for a user with the standard 7-day expiry.
pub fn issue_token(
    user_id: &str,
    email: &str,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize;
    let claims = Claims {
        user_id: user_id.to_string(),
        email: email.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

/// An Axum extractor that provides the authenticated user's token claims.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Claims);

/// A custom rejection type for authentication failures, rendered with the
/// API's usual `{"message": ...}` body.
pub struct AuthError(StatusCode, String);

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "message": self.1 }))).into_response()
    }
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let bearer_header =
            Option::<TypedHeader<Authorization<Bearer>>>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    warn!("Unexpected error during header extraction: {}", e);
                    AuthError(
                        StatusCode::BAD_REQUEST,
                        "Invalid Authorization header format".to_string(),
                    )
                })?;

        let Some(TypedHeader(Authorization(bearer))) = bearer_header else {
            return Err(AuthError(
                StatusCode::UNAUTHORIZED,
                "Access token required".to_string(),
            ));
        };

        let token_data = decode::<Claims>(
            bearer.token(),
            &DecodingKey::from_secret(state.config.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|e| {
            warn!("JWT validation failed: {}", e);
            AuthError(
                StatusCode::FORBIDDEN,
                "Invalid or expired token".to_string(),
            )
        })?;

        Ok(AuthenticatedUser(token_data.claims))
    }
}
