use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;

#[derive(Debug, PartialEq)]
pub enum EnvironmentError {
    MissingRegion,
    MissingCredentials,
    Credentials(String),
}

impl std::fmt::Display for EnvironmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvironmentError::MissingRegion => write!(f, "no AWS region could be resolved"),
            EnvironmentError::MissingCredentials => {
                write!(f, "no AWS credentials provider is configured")
            }
            EnvironmentError::Credentials(reason) => {
                write!(f, "failed to load AWS credentials: {}", reason)
            }
        }
    }
}

impl std::error::Error for EnvironmentError {}

/// Loads the ambient AWS configuration and resolves credentials up front,
/// so a missing environment fails here rather than on the first request.
pub async fn load() -> Result<SdkConfig, EnvironmentError> {
    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    validate(&config).await?;

    Ok(config)
}

pub async fn validate(config: &SdkConfig) -> Result<(), EnvironmentError> {
    if config.region().is_none() {
        return Err(EnvironmentError::MissingRegion);
    }

    let credentials_provider = config
        .credentials_provider()
        .ok_or(EnvironmentError::MissingCredentials)?;

    credentials_provider
        .provide_credentials()
        .await
        .map(|_| ())
        .map_err(|e| EnvironmentError::Credentials(e.to_string()))
}
