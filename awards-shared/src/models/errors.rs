use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request parameters that failed validation before any store access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ValidationError {
    #[error("Missing movie Id")]
    MissingMovieId,

    #[error("Missing award Body")]
    MissingAwardBody,

    #[error("Invalid min awards")]
    InvalidMinAwards(String),
}

/// Failures while building or sending a query. Serialized into the body of a 500 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "name", content = "message")]
pub enum StoreError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Throughput exceeded: {0}")]
    Throttled(String),

    #[error("Query rejected: {0}")]
    Rejected(String),

    #[error("Connectivity failure: {0}")]
    Connectivity(String),

    #[error("Store error: {0}")]
    Service(String),
}

#[derive(Debug, Error)]
pub enum AwardLookupError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable {0} must be set")]
    MissingVar(String),
}
