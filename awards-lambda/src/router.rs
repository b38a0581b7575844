use std::collections::HashMap;
use http::StatusCode;
use lambda_http::{Body, Request, Response};
use lambda_http::RequestExt;
use crate::endpoints::{awards, status};
use crate::models::awards::MessageResponse;
use crate::state::AppState;
use awards_shared::utilities::fields::path::{AWARD_BODY_PARAM, MIN_AWARDS_PARAM, MOVIE_ID_PARAM};
use awards_shared::utilities::responses::{success_response, response_with_code};

const GET: &str = "GET";

pub async fn handle_lambda(event: Request, state: &AppState) -> Result<Response<Body>, lambda_http::Error> {
    let raw_path = event.raw_http_path();
    let path = strip_stage_prefix(&raw_path).to_string();

    log::info!("Received request for path: {}", path);
    log::info!("Event: {:?}", event);

    match (event.method().as_str(), path.as_str()) {
        //Monitor
        (GET, "/status") => success_response(status::handle().await),

        //Awards
        (GET, _) if path.starts_with("/awards/") || path.starts_with("/movies/") => {
            let event = with_route_parameters(event, &path);
            awards::handler(event, state).await
        }

        //Not found
        _ => response_with_code(MessageResponse { message: "Not Found".to_string() }, StatusCode::NOT_FOUND),
    }
}

/// Removes a leading `/dev` or `/prod` stage, but only as a whole path segment.
pub fn strip_stage_prefix(raw_path: &str) -> &str {
    ["/dev", "/prod"]
        .iter()
        .find_map(|stage| {
            raw_path
                .strip_prefix(*stage)
                .filter(|rest| rest.is_empty() || rest.starts_with('/'))
        })
        .unwrap_or(raw_path)
}

/// Reads `awards/{awardBody}`, `movies/{movieId}` and `min/{min}` segment pairs from the path.
pub fn route_parameters(path: &str) -> HashMap<String, String> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    segments
        .chunks(2)
        .filter_map(|pair| match pair {
            ["awards", value] => Some((AWARD_BODY_PARAM, *value)),
            ["movies", value] => Some((MOVIE_ID_PARAM, *value)),
            ["min", value] => Some((MIN_AWARDS_PARAM, *value)),
            _ => None,
        })
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Parameters API Gateway already resolved win over those read from the raw path.
fn with_route_parameters(event: Request, path: &str) -> Request {
    let mut params = route_parameters(path);
    if let Some(gateway) = event.path_parameters_ref() {
        for name in [AWARD_BODY_PARAM, MOVIE_ID_PARAM, MIN_AWARDS_PARAM] {
            if let Some(value) = gateway.first(name) {
                params.insert(name.to_string(), value.to_string());
            }
        }
    }
    event.with_path_parameters(params)
}
