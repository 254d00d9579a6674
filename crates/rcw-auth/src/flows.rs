use std::collections::HashMap;

use aws_sdk_cognitoidentityprovider::Client;
use aws_sdk_cognitoidentityprovider::types::{AttributeType, AuthFlowType};
use tracing::info;

use crate::error::AuthError;
use crate::models::{
    AuthResult, AuthTokens, CodeDeliveryDetails, SignUpRequest, SignUpResult, UserAttribute,
    UserProfile,
};

/// Register a new user. The email is the username; first and last name are
/// stored as the `custom:firstName` / `custom:lastName` attributes.
pub async fn sign_up(
    client: &Client,
    user_pool_client_id: &str,
    request: &SignUpRequest,
) -> Result<SignUpResult, AuthError> {
    info!(email = %request.email, "signing up user");

    let resp = client
        .sign_up()
        .client_id(user_pool_client_id)
        .username(&request.email)
        .password(&request.password)
        .user_attributes(attribute("email", &request.email)?)
        .user_attributes(attribute("custom:firstName", &request.first_name)?)
        .user_attributes(attribute("custom:lastName", &request.last_name)?)
        .send()
        .await
        .map_err(|e| AuthError::from_service(e.into_service_error()))?;

    Ok(SignUpResult {
        user_confirmed: resp.user_confirmed(),
        user_sub: resp.user_sub().to_string(),
        code_delivery_details: resp.code_delivery_details().map(|d| CodeDeliveryDetails {
            destination: d.destination().map(str::to_string),
            delivery_medium: d.delivery_medium().map(|m| m.as_str().to_string()),
            attribute_name: d.attribute_name().map(str::to_string),
        }),
    })
}

/// Initiate username/password authentication with Cognito.
pub async fn initiate_auth(
    client: &Client,
    user_pool_client_id: &str,
    username: &str,
    password: &str,
) -> Result<AuthResult, AuthError> {
    info!(username = username, "initiating auth");

    let mut auth_params = HashMap::new();
    auth_params.insert("USERNAME".to_string(), username.to_string());
    auth_params.insert("PASSWORD".to_string(), password.to_string());

    let resp = client
        .initiate_auth()
        .auth_flow(AuthFlowType::UserPasswordAuth)
        .client_id(user_pool_client_id)
        .set_auth_parameters(Some(auth_params))
        .send()
        .await
        .map_err(|e| AuthError::from_service(e.into_service_error()))?;

    if let Some(result) = resp.authentication_result() {
        Ok(AuthResult::Success(AuthTokens {
            access_token: result.access_token().unwrap_or_default().to_string(),
            id_token: result.id_token().unwrap_or_default().to_string(),
            refresh_token: result.refresh_token().unwrap_or_default().to_string(),
            expires_in: result.expires_in(),
            token_type: result.token_type().unwrap_or("Bearer").to_string(),
        }))
    } else if let Some(challenge) = resp.challenge_name() {
        Ok(AuthResult::Challenge {
            name: challenge.as_str().to_string(),
        })
    } else {
        Err(AuthError::AuthFailed("unexpected response".to_string()))
    }
}

/// Fetch the attributes of the user owning `access_token`.
pub async fn get_user(client: &Client, access_token: &str) -> Result<UserProfile, AuthError> {
    let resp = client
        .get_user()
        .access_token(access_token)
        .send()
        .await
        .map_err(|e| AuthError::from_service(e.into_service_error()))?;

    info!(username = resp.username(), "fetched user");

    Ok(UserProfile {
        username: resp.username().to_string(),
        user_attributes: resp
            .user_attributes()
            .iter()
            .map(|a| UserAttribute {
                name: a.name().to_string(),
                value: a.value().unwrap_or_default().to_string(),
            })
            .collect(),
    })
}

fn attribute(name: &str, value: &str) -> Result<AttributeType, AuthError> {
    AttributeType::builder()
        .name(name)
        .value(value)
        .build()
        .map_err(|e| AuthError::Cognito(e.to_string()))
}
