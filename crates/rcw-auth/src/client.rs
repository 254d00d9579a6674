use aws_sdk_cognitoidentityprovider::Client;

/// Build a Cognito Identity Provider client from the default AWS config.
pub async fn build_client() -> Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    Client::new(&config)
}
