use http::StatusCode;
use lambda_http::{Response, Body};
use serde::Serialize;

pub const CONTENT_TYPE_JSON: &str = "application/json";

pub fn success_response<T: Serialize>(data: T) -> Result<Response<Body>, lambda_http::Error> {
    response_with_code(data, StatusCode::OK)
}

pub fn not_found_response<T: Serialize>(data: T) -> Result<Response<Body>, lambda_http::Error> {
    response_with_code(data, StatusCode::NOT_FOUND)
}

pub fn server_error_response<T: Serialize>(data: T) -> Result<Response<Body>, lambda_http::Error> {
    response_with_code(data, StatusCode::INTERNAL_SERVER_ERROR)
}

pub fn response_with_code<T: Serialize>(data: T, code: StatusCode) -> Result<Response<Body>, lambda_http::Error> {
    let body = serde_json::to_string(&data).map_err(|_| lambda_http::Error::from("Serialization error"))?;
    log::info!("Response Code:{}\nBody: {}", code, body);
    Response::builder()
        .status(code)
        .header("content-type", CONTENT_TYPE_JSON)
        .body(Body::Text(body))
        .map_err(|e| {
            log::error!("Failed to build response: {:?}", e);
            lambda_http::Error::from("Failed to construct HTTP response")
        })
}
