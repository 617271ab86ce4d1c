//! AWS identity error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwsError {
    #[error("no AWS credentials provider configured in this environment")]
    NoCredentials,

    #[error("failed to resolve AWS credentials: {0}")]
    Credentials(#[from] aws_credential_types::provider::error::CredentialsError),
}

pub type Result<T> = std::result::Result<T, AwsError>;
