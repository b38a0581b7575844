use std::collections::HashMap;
use http::Method;
use lambda_http::{Body, Request, RequestExt, Response};
use serde_json::{json, Value};
use awards_lambda::router::handle_lambda;
use awards_lambda::state::AppState;
use awards_shared::database::memory_store::InMemoryAwardStore;
use awards_shared::models::errors::StoreError;
use awards_shared::utilities::test::{award_item, init_tracing, TEST_TABLE};

fn gateway_request(params: &[(&str, &str)]) -> Request {
    let params: HashMap<String, String> = params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    Request::from(http::Request::builder()
        .method(Method::GET)
        .uri("/dev/awards/")
        .body(Body::Empty)
        .unwrap())
        .with_raw_http_path("/dev/awards/")
        .with_path_parameters(params)
}

fn path_request(path: &str) -> Request {
    Request::from(http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::Empty)
        .unwrap())
        .with_raw_http_path(path)
}

fn seeded_state() -> AppState {
    AppState::new(TEST_TABLE, InMemoryAwardStore::new(TEST_TABLE, vec![
        award_item(1234, "2", 5),
        award_item(1234, "2", 2),
        award_item(1234, "7", 4),
        award_item(99, "2", 8),
    ]))
}

fn body_text(response: &Response<Body>) -> String {
    match response.body() {
        Body::Text(body) => body.clone(),
        _ => panic!("Response body is not text"),
    }
}

fn body_json(response: &Response<Body>) -> Value {
    serde_json::from_str(&body_text(response)).unwrap()
}

#[tokio::test]
async fn test_min_filter_keeps_only_qualifying_awards() {
    init_tracing();
    let state = seeded_state();

    let request = gateway_request(&[("movieId", "1234"), ("awardBody", "2"), ("min", "3")]);
    let response = handle_lambda(request, &state).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(
        body_json(&response),
        json!({"data": [{"awardBody": 2, "movieId": 1234, "numAwards": 5}]})
    );
}

#[tokio::test]
async fn test_decimal_min_filters_numerically() {
    let state = seeded_state();

    let request = gateway_request(&[("movieId", "1234"), ("awardBody", "2"), ("min", "2.5")]);
    let response = handle_lambda(request, &state).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        body_json(&response),
        json!({"data": [{"awardBody": 2, "movieId": 1234, "numAwards": 5}]})
    );
}

#[tokio::test]
async fn test_without_min_returns_every_key_match_in_store_order() {
    let state = seeded_state();

    let request = gateway_request(&[("movieId", "1234"), ("awardBody", "2")]);
    let response = handle_lambda(request, &state).await.unwrap();

    assert_eq!(response.status(), 200);
    let body = body_json(&response);
    let counts: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["numAwards"].as_i64().unwrap())
        .collect();
    assert_eq!(counts, vec![5, 2]);
}

#[tokio::test]
async fn test_non_numeric_movie_id() {
    let state = seeded_state();

    let response = handle_lambda(gateway_request(&[("movieId", "abc")]), &state).await.unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(body_json(&response), json!({"Message": "Missing movie Id"}));
}

#[tokio::test]
async fn test_missing_movie_id() {
    let state = seeded_state();

    let response = handle_lambda(gateway_request(&[("awardBody", "2")]), &state).await.unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(body_json(&response), json!({"Message": "Missing movie Id"}));
}

#[tokio::test]
async fn test_missing_award_body() {
    let state = seeded_state();

    let response = handle_lambda(gateway_request(&[("movieId", "1234")]), &state).await.unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(body_json(&response), json!({"Message": "Missing award Body"}));
}

#[tokio::test]
async fn test_invalid_min() {
    let state = seeded_state();

    let request = gateway_request(&[("movieId", "1234"), ("awardBody", "2"), ("min", "many")]);
    let response = handle_lambda(request, &state).await.unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(body_json(&response), json!({"Message": "Invalid min awards"}));
}

#[tokio::test]
async fn test_no_matches() {
    let state = seeded_state();

    let request = gateway_request(&[("movieId", "1234"), ("awardBody", "2"), ("min", "50")]);
    let response = handle_lambda(request, &state).await.unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(body_json(&response), json!({"message": "No reviews found"}));
}

#[tokio::test]
async fn test_connectivity_failure_is_server_error() {
    let state = AppState::new(
        TEST_TABLE,
        InMemoryAwardStore::failing(TEST_TABLE, StoreError::Connectivity("dispatch failure".into())),
    );

    let request = gateway_request(&[("movieId", "1234"), ("awardBody", "2")]);
    let response = handle_lambda(request, &state).await.unwrap();

    assert_eq!(response.status(), 500);
    let body = body_json(&response);
    assert_eq!(body["error"], json!({"name": "Connectivity", "message": "dispatch failure"}));
}

#[tokio::test]
async fn test_wrong_table_is_server_error() {
    let state = AppState::new("Elsewhere", InMemoryAwardStore::new(TEST_TABLE, vec![]));

    let request = gateway_request(&[("movieId", "1234"), ("awardBody", "2")]);
    let response = handle_lambda(request, &state).await.unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(body_json(&response)["error"]["name"], "TableNotFound");
}

#[tokio::test]
async fn test_repeated_request_is_byte_identical() {
    let state = seeded_state();

    let first = handle_lambda(gateway_request(&[("movieId", "1234"), ("awardBody", "2")]), &state).await.unwrap();
    let second = handle_lambda(gateway_request(&[("movieId", "1234"), ("awardBody", "2")]), &state).await.unwrap();

    assert_eq!(body_text(&first), body_text(&second));
}

#[tokio::test]
async fn test_parameters_read_from_raw_path() {
    let state = seeded_state();

    let response = handle_lambda(path_request("/prod/awards/2/movies/1234/min/3"), &state).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(body_json(&response)["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_raw_path_without_movie_id() {
    let state = seeded_state();

    let response = handle_lambda(path_request("/awards/2/movies"), &state).await.unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(body_json(&response), json!({"Message": "Missing movie Id"}));
}

#[tokio::test]
async fn test_stage_prefix_only_stripped_on_segment_boundary() {
    let state = seeded_state();

    let response = handle_lambda(path_request("/devawards/2/movies/1234"), &state).await.unwrap();
    assert_eq!(response.status(), 404);
    assert_eq!(body_json(&response), json!({"message": "Not Found"}));

    let response = handle_lambda(path_request("/dev/awards/2/movies/1234"), &state).await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_gateway_parameters_override_raw_path() {
    let state = seeded_state();

    let request = path_request("/awards/2/movies/99")
        .with_path_parameters(HashMap::from([("movieId".to_string(), "1234".to_string())]));
    let response = handle_lambda(request, &state).await.unwrap();

    assert_eq!(response.status(), 200);
    let body = body_json(&response);
    assert!(body["data"].as_array().unwrap().iter().all(|r| r["movieId"] == 1234));
}
