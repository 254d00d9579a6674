//! SSM parameter path conventions.
//!
//! Pure string functions, no AWS SDK dependency. Every path embeds the
//! deployment environment name.

pub const DEFAULT_ENVIRONMENT: &str = "dev";

pub fn prefix(environment: &str) -> String {
    format!("/rcw-client-backend-{environment}/")
}

pub fn cognito_client_id(environment: &str) -> String {
    format!("{}COGNITO_CLIENT_ID", prefix(environment))
}
