use aws_sdk_cognitoidentityprovider::error::ProvideErrorMetadata;
use rcw_core::error::format_err_chain;
use thiserror::Error;

/// Cognito error codes caused by the caller's input rather than the service.
const CLIENT_FAULT_CODES: &[&str] = &[
    "AliasExistsException",
    "CodeMismatchException",
    "ExpiredCodeException",
    "InvalidParameterException",
    "InvalidPasswordException",
    "NotAuthorizedException",
    "PasswordHistoryPolicyViolationException",
    "PasswordResetRequiredException",
    "UserLambdaValidationException",
    "UserNotConfirmedException",
    "UserNotFoundException",
    "UsernameExistsException",
];

#[derive(Debug, Error)]
pub enum AuthError {
    /// Cognito refused the request because of what the caller sent.
    #[error("{message}")]
    Rejected { code: String, message: String },

    #[error("authentication challenge required: {0}")]
    ChallengeRequired(String),

    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("Cognito error: {0}")]
    Cognito(String),
}

impl AuthError {
    /// Map an operation error from the SDK onto the client/backend split.
    pub fn from_service<E>(err: E) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error,
    {
        classify(err.code(), err.message(), || format_err_chain(&err))
    }

    /// True for faults caused by the caller's input rather than the backend.
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            Self::Rejected { .. } | Self::ChallengeRequired(_)
        )
    }
}

/// Classify a Cognito error by its code. Client-fault codes keep the
/// service's message; everything else becomes a backend fault carrying
/// `detail`.
pub fn classify(
    code: Option<&str>,
    message: Option<&str>,
    detail: impl FnOnce() -> String,
) -> AuthError {
    match code {
        Some(code) if CLIENT_FAULT_CODES.contains(&code) => AuthError::Rejected {
            code: code.to_string(),
            message: message.unwrap_or(code).to_string(),
        },
        _ => AuthError::Cognito(detail()),
    }
}
