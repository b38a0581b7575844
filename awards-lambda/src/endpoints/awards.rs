use aws_sdk_dynamodb::types::AttributeValue;
use http::Response;
use lambda_http::{Body, Request};
use serde_json::json;
use awards_shared::database::query::AwardQuery;
use awards_shared::models::award::AwardRecord;
use awards_shared::models::errors::{AwardLookupError, StoreError};
use awards_shared::utilities::fields::dynamodb::{
    AWARD_BODY_FIELD, MIN_AWARDS_PLACEHOLDER, MOVIE_ID_FIELD, NUM_AWARDS_FIELD,
};
use awards_shared::utilities::logging::{log_error, log_info, log_info_with};
use awards_shared::utilities::responses::{not_found_response, server_error_response, success_response};
use crate::models::awards::{
    AwardQueryRequest, AwardsResponse, ErrorResponse, MessageResponse, ValidationMessage, NO_AWARDS_MESSAGE,
};
use crate::state::AppState;

pub async fn handler(event: Request, state: &AppState) -> Result<Response<Body>, lambda_http::Error> {
    match lookup_awards(&event, state).await {
        Ok(records) if records.is_empty() => {
            log_info("GetMovieAwards", "No matching awards");
            not_found_response(MessageResponse { message: NO_AWARDS_MESSAGE.to_string() })
        }
        Ok(records) => {
            log_info_with("GetMovieAwards", "Found awards", json!({ "count": records.len() }));
            success_response(AwardsResponse { data: records })
        }
        Err(AwardLookupError::Validation(err)) => {
            log_info("GetMovieAwards", &format!("Rejected request: {:?}", err));
            not_found_response(ValidationMessage::from(&err))
        }
        Err(AwardLookupError::Store(err)) => {
            log_error("GetMovieAwards", &err.to_string());
            server_error_response(ErrorResponse { error: err })
        }
    }
}

/// Validates the request, runs exactly one query and returns the rows in store order.
pub async fn lookup_awards(event: &Request, state: &AppState) -> Result<Vec<AwardRecord>, AwardLookupError> {
    let request = AwardQueryRequest::from_request(event)?;
    let query = build_query(&state.table_name, &request)?;
    let output = state.store.query(&query).await?;

    Ok(output.items.iter().map(AwardRecord::from_item).collect())
}

pub fn build_query(table_name: &str, request: &AwardQueryRequest) -> Result<AwardQuery, StoreError> {
    let mut builder = AwardQuery::builder(table_name)
        .key_equals(MOVIE_ID_FIELD, AttributeValue::N(request.movie_id.to_string()))
        .key_equals(AWARD_BODY_FIELD, AttributeValue::N(request.award_body.clone()));

    if let Some(min) = &request.min_awards {
        builder = builder.filter_at_least(NUM_AWARDS_FIELD, MIN_AWARDS_PLACEHOLDER, AttributeValue::N(min.clone()));
    }

    builder.build()
}
