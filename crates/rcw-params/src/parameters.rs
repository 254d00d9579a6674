use aws_sdk_ssm::Client;

use crate::error::ParamsError;

/// Fetch a parameter value, decrypting `SecureString` parameters.
pub async fn get_parameter(client: &Client, name: &str) -> Result<String, ParamsError> {
    let resp = client
        .get_parameter()
        .name(name)
        .with_decryption(true)
        .send()
        .await
        .map_err(|e| {
            let not_found = e
                .as_service_error()
                .is_some_and(|err| err.is_parameter_not_found());
            if not_found {
                ParamsError::NotFound {
                    name: name.to_string(),
                }
            } else {
                ParamsError::get_parameter(&e)
            }
        })?;

    resp.parameter()
        .and_then(|p| p.value())
        .map(str::to_string)
        .ok_or_else(|| ParamsError::NotFound {
            name: name.to_string(),
        })
}
