use std::env;

use rcw_core::parameter_names::DEFAULT_ENVIRONMENT;

/// Process configuration, read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding transaction records (`TABLE_NAME`).
    pub table_name: String,
    /// Deployment tag embedded in SSM parameter paths (`ENVIRONMENT`).
    pub environment: String,
    /// Local override for the user-pool client id (`COGNITO_CLIENT_ID`).
    /// When unset the id is read from SSM on every auth request.
    pub cognito_client_id: Option<String>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let table_name = var("TABLE_NAME").ok_or_else(|| eyre::eyre!("TABLE_NAME must be set"))?;
        let environment = var("ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        Ok(Self {
            table_name,
            environment,
            cognito_client_id: var("COGNITO_CLIENT_ID"),
        })
    }
}
