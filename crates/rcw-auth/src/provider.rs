use std::future::Future;
use std::pin::Pin;

use aws_sdk_cognitoidentityprovider::Client;

use crate::error::AuthError;
use crate::flows;
use crate::models::{AuthResult, SignUpRequest, SignUpResult, UserProfile};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The user-pool operations the API consumes.
///
/// Methods return boxed futures for dyn compatibility.
pub trait IdentityProvider: Send + Sync {
    fn sign_up<'a>(
        &'a self,
        client_id: &'a str,
        request: &'a SignUpRequest,
    ) -> BoxFuture<'a, Result<SignUpResult, AuthError>>;

    fn initiate_auth<'a>(
        &'a self,
        client_id: &'a str,
        username: &'a str,
        password: &'a str,
    ) -> BoxFuture<'a, Result<AuthResult, AuthError>>;

    fn get_user<'a>(
        &'a self,
        access_token: &'a str,
    ) -> BoxFuture<'a, Result<UserProfile, AuthError>>;
}

/// `IdentityProvider` backed by a Cognito user pool.
pub struct CognitoProvider {
    client: Client,
}

impl CognitoProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl IdentityProvider for CognitoProvider {
    fn sign_up<'a>(
        &'a self,
        client_id: &'a str,
        request: &'a SignUpRequest,
    ) -> BoxFuture<'a, Result<SignUpResult, AuthError>> {
        Box::pin(flows::sign_up(&self.client, client_id, request))
    }

    fn initiate_auth<'a>(
        &'a self,
        client_id: &'a str,
        username: &'a str,
        password: &'a str,
    ) -> BoxFuture<'a, Result<AuthResult, AuthError>> {
        Box::pin(flows::initiate_auth(&self.client, client_id, username, password))
    }

    fn get_user<'a>(
        &'a self,
        access_token: &'a str,
    ) -> BoxFuture<'a, Result<UserProfile, AuthError>> {
        Box::pin(flows::get_user(&self.client, access_token))
    }
}
