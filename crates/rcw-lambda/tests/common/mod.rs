#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use rcw_auth::error::{AuthError, classify};
use rcw_auth::models::{
    AuthResult, AuthTokens, SignUpRequest, SignUpResult, UserAttribute, UserProfile,
};
use rcw_auth::provider::{BoxFuture as AuthFuture, IdentityProvider};
use rcw_core::models::transaction::CashTransaction;
use rcw_lambda::config::Config;
use rcw_lambda::state::AppState;
use rcw_params::source::{ParameterSource, StaticParameters};
use rcw_storage::error::StorageError;
use rcw_storage::page::{Page, PageRequest};
use rcw_storage::store::{BoxFuture as StoreFuture, RecordStore};
use serde_json::Value;
use tower::ServiceExt;

pub const CLIENT_ID: &str = "test-client-id";
pub const ORIGIN: &str = "http://localhost:3039";

/// Records kept in insertion order. Continuation tokens are offsets.
/// `unreadable` is reported as the skipped count of every page.
#[derive(Default)]
pub struct MemoryStore {
    pub records: Mutex<Vec<CashTransaction>>,
    pub unreadable: usize,
}

impl RecordStore for MemoryStore {
    fn put_transaction<'a>(
        &'a self,
        record: &'a CashTransaction,
    ) -> StoreFuture<'a, Result<(), StorageError>> {
        self.records.lock().unwrap().push(record.clone());
        Box::pin(async { Ok(()) })
    }

    fn scan_transactions<'a>(
        &'a self,
        request: &'a PageRequest,
    ) -> StoreFuture<'a, Result<Page<CashTransaction>, StorageError>> {
        let records = self.records.lock().unwrap().clone();
        let skipped = self.unreadable;
        let result = (|| -> Result<Page<CashTransaction>, StorageError> {
            let start = match &request.next_token {
                Some(token) => token
                    .parse::<usize>()
                    .map_err(|e| StorageError::InvalidToken(e.to_string()))?,
                None => 0,
            };
            let end = request
                .limit
                .map_or(records.len(), |l| (start + l as usize).min(records.len()));
            let start = start.min(end);
            Ok(Page {
                items: records[start..end].to_vec(),
                next_token: (end < records.len()).then(|| end.to_string()),
                skipped,
            })
        })();
        Box::pin(async move { result })
    }
}

/// Every call fails as if DynamoDB were unreachable.
pub struct UnavailableStore;

impl RecordStore for UnavailableStore {
    fn put_transaction<'a>(
        &'a self,
        _record: &'a CashTransaction,
    ) -> StoreFuture<'a, Result<(), StorageError>> {
        Box::pin(async { Err(StorageError::PutItem("dispatch failure".to_string())) })
    }

    fn scan_transactions<'a>(
        &'a self,
        _request: &'a PageRequest,
    ) -> StoreFuture<'a, Result<Page<CashTransaction>, StorageError>> {
        Box::pin(async { Err(StorageError::Scan("dispatch failure".to_string())) })
    }
}

/// A user pool holding email -> (password, first name). Users whose email
/// starts with `mfa` are always challenged.
#[derive(Default)]
pub struct FakeUserPool {
    pub users: Mutex<HashMap<String, (String, String)>>,
    pub client_ids_seen: Mutex<Vec<String>>,
}

impl FakeUserPool {
    pub fn with_user(email: &str, password: &str) -> Self {
        let pool = Self::default();
        pool.users.lock().unwrap().insert(
            email.to_string(),
            (password.to_string(), "Test".to_string()),
        );
        pool
    }

    fn rejected(code: &str, message: &str) -> AuthError {
        classify(Some(code), Some(message), String::new)
    }
}

impl IdentityProvider for FakeUserPool {
    fn sign_up<'a>(
        &'a self,
        client_id: &'a str,
        request: &'a SignUpRequest,
    ) -> AuthFuture<'a, Result<SignUpResult, AuthError>> {
        self.client_ids_seen.lock().unwrap().push(client_id.to_string());
        let mut users = self.users.lock().unwrap();
        let result = if users.contains_key(&request.email) {
            Err(Self::rejected(
                "UsernameExistsException",
                "An account with the given email already exists.",
            ))
        } else if request.password.len() < 8 {
            Err(Self::rejected(
                "InvalidPasswordException",
                "Password did not conform with policy: Password not long enough",
            ))
        } else {
            users.insert(
                request.email.clone(),
                (request.password.clone(), request.first_name.clone()),
            );
            Ok(SignUpResult {
                user_confirmed: false,
                user_sub: format!("sub-{}", request.email),
                code_delivery_details: None,
            })
        };
        Box::pin(async move { result })
    }

    fn initiate_auth<'a>(
        &'a self,
        client_id: &'a str,
        username: &'a str,
        password: &'a str,
    ) -> AuthFuture<'a, Result<AuthResult, AuthError>> {
        self.client_ids_seen.lock().unwrap().push(client_id.to_string());
        let users = self.users.lock().unwrap();
        let result = match users.get(username) {
            Some((stored, _)) if stored == password && username.starts_with("mfa") => {
                Ok(AuthResult::Challenge {
                    name: "SOFTWARE_TOKEN_MFA".to_string(),
                })
            }
            Some((stored, _)) if stored == password => Ok(AuthResult::Success(AuthTokens {
                access_token: format!("access-{username}"),
                id_token: format!("id-{username}"),
                refresh_token: format!("refresh-{username}"),
                expires_in: 3600,
                token_type: "Bearer".to_string(),
            })),
            _ => Err(Self::rejected(
                "NotAuthorizedException",
                "Incorrect username or password.",
            )),
        };
        Box::pin(async move { result })
    }

    fn get_user<'a>(
        &'a self,
        access_token: &'a str,
    ) -> AuthFuture<'a, Result<UserProfile, AuthError>> {
        let users = self.users.lock().unwrap();
        let result = access_token
            .strip_prefix("access-")
            .and_then(|email| users.get(email).map(|(_, first)| (email, first)))
            .map(|(email, first)| UserProfile {
                username: email.to_string(),
                user_attributes: vec![
                    UserAttribute {
                        name: "email".to_string(),
                        value: email.to_string(),
                    },
                    UserAttribute {
                        name: "custom:firstName".to_string(),
                        value: first.clone(),
                    },
                ],
            })
            .ok_or_else(|| Self::rejected("NotAuthorizedException", "Invalid Access Token"));
        Box::pin(async move { result })
    }
}

/// Every call fails as if Cognito were down.
pub struct UnavailableUserPool;

impl IdentityProvider for UnavailableUserPool {
    fn sign_up<'a>(
        &'a self,
        _client_id: &'a str,
        _request: &'a SignUpRequest,
    ) -> AuthFuture<'a, Result<SignUpResult, AuthError>> {
        Box::pin(async { Err(AuthError::Cognito("InternalErrorException".to_string())) })
    }

    fn initiate_auth<'a>(
        &'a self,
        _client_id: &'a str,
        _username: &'a str,
        _password: &'a str,
    ) -> AuthFuture<'a, Result<AuthResult, AuthError>> {
        Box::pin(async { Err(AuthError::Cognito("InternalErrorException".to_string())) })
    }

    fn get_user<'a>(
        &'a self,
        _access_token: &'a str,
    ) -> AuthFuture<'a, Result<UserProfile, AuthError>> {
        Box::pin(async { Err(AuthError::Cognito("InternalErrorException".to_string())) })
    }
}

pub fn config() -> Config {
    Config {
        table_name: "rcw-transactions-test".to_string(),
        environment: "test".to_string(),
        cognito_client_id: None,
    }
}

pub fn parameters() -> StaticParameters {
    StaticParameters::new().with("/rcw-client-backend-test/COGNITO_CLIENT_ID", CLIENT_ID)
}

pub fn state_with(
    store: Arc<dyn RecordStore>,
    identity: Arc<dyn IdentityProvider>,
    params: Arc<dyn ParameterSource>,
) -> AppState {
    AppState {
        store,
        identity,
        params,
        config: Arc::new(config()),
    }
}

pub fn app_with(
    store: Arc<dyn RecordStore>,
    identity: Arc<dyn IdentityProvider>,
) -> Router {
    rcw_lambda::app(state_with(store, identity, Arc::new(parameters())))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("origin", ORIGIN);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    send_request(app, builder.body(body).unwrap()).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    TestResponse {
        status,
        headers,
        body,
    }
}
