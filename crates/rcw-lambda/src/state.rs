use std::sync::Arc;

use rcw_auth::provider::IdentityProvider;
use rcw_core::parameter_names;
use rcw_params::source::ParameterSource;
use rcw_storage::store::RecordStore;

use crate::config::Config;
use crate::error::ApiError;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub params: Arc<dyn ParameterSource>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Resolve the user-pool client id. Not cached: each call is a lookup.
    pub async fn cognito_client_id(&self) -> Result<String, ApiError> {
        let name = parameter_names::cognito_client_id(&self.config.environment);
        Ok(self.params.get(&name).await?)
    }
}
