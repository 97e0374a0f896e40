use gatekeeper_client::ClientError;
use thiserror::Error;

/// Failure of a public [`GateKeeper`](crate::GateKeeper) operation.
///
/// The message is prefixed with the operation that failed.
#[derive(Error, Debug)]
pub enum GateKeeperError {
    #[error("GateKeeper: apiKey is required")]
    MissingApiKey,
    #[error("GateKeeper.checkPhoneNumber failed: {0}")]
    CheckPhoneNumber(#[source] CheckError),
    #[error("GateKeeper.collectClientData failed: {0}")]
    CollectClientData(#[source] CollectionError),
}

impl GateKeeperError {
    /// The API client's error, if the check failed during submission.
    pub fn api_error(&self) -> Option<&ClientError> {
        match self {
            GateKeeperError::CheckPhoneNumber(CheckError::Api(e)) => Some(e),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GateKeeperError::MissingApiKey
                | GateKeeperError::CheckPhoneNumber(
                    CheckError::MissingPhoneNumber | CheckError::EmptyPhoneNumber
                )
        )
    }
}

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("GateKeeper.checkPhoneNumber: phoneNumber is required and must be a string")]
    MissingPhoneNumber,
    #[error("GateKeeper.checkPhoneNumber: phoneNumber cannot be empty")]
    EmptyPhoneNumber,
    #[error(transparent)]
    Collection(#[from] CollectionError),
    /// Already well-formed by the client; carried unchanged.
    #[error(transparent)]
    Api(#[from] ClientError),
}

/// Collection could not complete (a host implementation panicked).
#[derive(Error, Debug)]
#[error("{0}")]
pub struct CollectionError(pub(crate) String);
