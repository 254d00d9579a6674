use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use rcw_auth::error::AuthError;
use rcw_auth::models::{AuthResult, AuthTokens, SignUpRequest, SignUpResult, UserProfile};

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpBody {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct SignInBody {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserBody {
    pub access_token: String,
}

pub async fn sign_up(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SignUpBody>,
) -> Result<Json<SignUpResult>, ApiError> {
    let client_id = state.cognito_client_id().await?;
    let request = SignUpRequest {
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        password: body.password,
    };

    let result = state.identity.sign_up(&client_id, &request).await?;
    Ok(Json(result))
}

/// Returns only the issued tokens; a challenge instead of tokens is a 400.
pub async fn sign_in(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SignInBody>,
) -> Result<Json<AuthTokens>, ApiError> {
    let client_id = state.cognito_client_id().await?;

    match state
        .identity
        .initiate_auth(&client_id, &body.username, &body.password)
        .await?
    {
        AuthResult::Success(tokens) => Ok(Json(tokens)),
        AuthResult::Challenge { name } => {
            tracing::info!(username = %body.username, challenge = %name, "sign-in challenged");
            Err(AuthError::ChallengeRequired(name).into())
        }
    }
}

pub async fn get_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<GetUserBody>,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = state.identity.get_user(&body.access_token).await?;
    Ok(Json(profile))
}
