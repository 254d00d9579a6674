use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use aws_sdk_ssm::Client;

use crate::error::ParamsError;
use crate::parameters;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Named configuration values resolved at request time.
///
/// Methods return boxed futures for dyn compatibility.
pub trait ParameterSource: Send + Sync {
    fn get<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<String, ParamsError>>;
}

/// `ParameterSource` backed by SSM Parameter Store. Every call is a round trip.
pub struct SsmParameters {
    client: Client,
}

impl SsmParameters {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ParameterSource for SsmParameters {
    fn get<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<String, ParamsError>> {
        Box::pin(async move {
            let value = parameters::get_parameter(&self.client, name).await?;
            tracing::debug!(name = name, "parameter resolved");
            Ok(value)
        })
    }
}

/// Fixed in-process parameters, for local runs without SSM.
#[derive(Debug, Clone, Default)]
pub struct StaticParameters {
    values: HashMap<String, String>,
}

impl StaticParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl ParameterSource for StaticParameters {
    fn get<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<String, ParamsError>> {
        let result = self
            .values
            .get(name)
            .cloned()
            .ok_or_else(|| ParamsError::NotFound {
                name: name.to_string(),
            });
        Box::pin(async move { result })
    }
}
