// Request and response shapes for the award lookup endpoint only.

use lambda_http::Request;
use serde::{Deserialize, Serialize};
use awards_shared::models::award::AwardRecord;
use awards_shared::models::errors::{StoreError, ValidationError};
use awards_shared::utilities::fields::path::{AWARD_BODY_PARAM, MIN_AWARDS_PARAM, MOVIE_ID_PARAM};
use awards_shared::utilities::requests::path_parameter;

pub const NO_AWARDS_MESSAGE: &str = "No reviews found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardQueryRequest {
    pub movie_id: u64,
    pub award_body: String,
    /// Raw numeric text, bound to the store unchanged.
    pub min_awards: Option<String>,
}

impl AwardQueryRequest {
    /// Validates in order: movie id, award body, then the optional threshold.
    pub fn parse(
        movie_id: Option<&str>,
        award_body: Option<&str>,
        min_awards: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let movie_id = parse_movie_id(movie_id)?;
        let award_body = parse_award_body(award_body)?;
        let min_awards = parse_min_awards(min_awards)?;

        Ok(Self { movie_id, award_body, min_awards })
    }

    pub fn from_request(event: &Request) -> Result<Self, ValidationError> {
        Self::parse(
            path_parameter(event, MOVIE_ID_PARAM).as_deref(),
            path_parameter(event, AWARD_BODY_PARAM).as_deref(),
            path_parameter(event, MIN_AWARDS_PARAM).as_deref(),
        )
    }
}

fn parse_movie_id(raw: Option<&str>) -> Result<u64, ValidationError> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|id| *id > 0)
        .ok_or(ValidationError::MissingMovieId)
}

fn parse_award_body(raw: Option<&str>) -> Result<String, ValidationError> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .ok_or(ValidationError::MissingAwardBody)
}

fn parse_min_awards(raw: Option<&str>) -> Result<Option<String>, ValidationError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(|_| Some(s.to_string()))
            .ok_or_else(|| ValidationError::InvalidMinAwards(s.to_string())),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationMessage {
    #[serde(rename = "Message")]
    pub message: String,
}

impl From<&ValidationError> for ValidationMessage {
    fn from(err: &ValidationError) -> Self {
        ValidationMessage { message: err.to_string() }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AwardsResponse {
    pub data: Vec<AwardRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: StoreError,
}
