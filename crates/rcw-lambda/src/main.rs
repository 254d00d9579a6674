use std::sync::Arc;

use rcw_auth::provider::CognitoProvider;
use rcw_core::parameter_names;
use rcw_lambda::config::Config;
use rcw_lambda::state::AppState;
use rcw_params::source::{ParameterSource, SsmParameters, StaticParameters};
use rcw_storage::store::DynamoStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;

    // Clients are built once per cold start and shared by every invocation.
    let dynamodb = rcw_storage::client::build_client().await;
    let cognito = rcw_auth::client::build_client().await;

    let params: Arc<dyn ParameterSource> = match &config.cognito_client_id {
        Some(client_id) => {
            tracing::warn!("COGNITO_CLIENT_ID set, skipping SSM lookup");
            Arc::new(StaticParameters::new().with(
                parameter_names::cognito_client_id(&config.environment),
                client_id.clone(),
            ))
        }
        None => Arc::new(SsmParameters::new(rcw_params::client::build_client().await)),
    };

    let store = DynamoStore::new(dynamodb, config.table_name.clone());
    tracing::info!(
        table = store.table(),
        environment = %config.environment,
        "starting rcw backend"
    );

    let state = AppState {
        store: Arc::new(store),
        identity: Arc::new(CognitoProvider::new(cognito)),
        params,
        config: Arc::new(config),
    };

    lambda_http::run(rcw_lambda::app(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
