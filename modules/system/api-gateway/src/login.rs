//! `POST /api/auth/login`: exchange credentials for a bearer token.

use std::sync::Arc;

use authn_resolver_sdk::{AuthNResolverClient, LoginError, LoginResult};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::problem::Problem;

pub const LOGIN_PATH: &str = "/api/auth/login";

/// Token type reported to clients; matches the header scheme.
const TOKEN_TYPE: &str = "Bearer";

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: &'static str,
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

impl From<LoginResult> for JwtResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            token: result.token.token.expose_secret().to_owned(),
            token_type: TOKEN_TYPE,
            id: result.profile.id,
            username: result.profile.username,
            first_name: result.profile.first_name,
            last_name: result.profile.last_name,
            admin: result.profile.admin,
        }
    }
}

pub async fn login(
    State(authn): State<Arc<dyn AuthNResolverClient>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "login body rejected");
            return Problem::bad_request(
                "Request body must be a JSON object with email and password",
            )
            .into_response();
        }
    };

    if req.email.trim().is_empty() {
        return Problem::bad_request("email must not be blank").into_response();
    }
    if req.password.trim().is_empty() {
        return Problem::bad_request("password must not be blank").into_response();
    }

    match authn.login(&req.email, &req.password).await {
        Ok(result) => Json(JwtResponse::from(result)).into_response(),
        Err(LoginError::InvalidCredentials) => {
            tracing::debug!(reason = "invalid_credentials", "login rejected");
            Problem::unauthorized("Bad credentials").into_response()
        }
        Err(LoginError::Internal(_)) => Problem::internal().into_response(),
    }
}
