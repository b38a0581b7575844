use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::query::QueryError;

use crate::models::errors::StoreError;

/// Classifies a failed Query call. Every class still surfaces as a 500 to the caller.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(err: SdkError<QueryError, R>) -> StoreError {
    match &err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            return StoreError::Connectivity(format!("{}", DisplayErrorContext(&err)));
        }
        SdkError::ConstructionFailure(_) => {
            return StoreError::InvalidQuery(format!("{}", DisplayErrorContext(&err)));
        }
        _ => {}
    }

    let service_error = err.into_service_error();
    let message = service_error
        .message()
        .map(String::from)
        .unwrap_or_else(|| format!("{}", DisplayErrorContext(&service_error)));

    match service_error {
        QueryError::ResourceNotFoundException(_) => StoreError::TableNotFound(message),
        QueryError::ProvisionedThroughputExceededException(_) | QueryError::RequestLimitExceeded(_) => {
            StoreError::Throttled(message)
        }
        ref other if other.code() == Some("ValidationException") => StoreError::Rejected(message),
        _ => StoreError::Service(message),
    }
}
