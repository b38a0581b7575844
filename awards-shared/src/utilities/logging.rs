use serde_json::{json, Value};
use log::{info, error};

/// Logs an informational event to CloudWatch in JSON format.
pub fn log_info(event: &str, message: &str) {
    info!("{}", json!({
        "event": event,
        "message": message
    }));
}

/// Logs an informational event with structured detail attached.
pub fn log_info_with(event: &str, message: &str, detail: Value) {
    info!("{}", json!({
        "event": event,
        "message": message,
        "detail": detail
    }));
}

/// Logs an error event to CloudWatch in JSON format.
pub fn log_error(event: &str, error_message: &str) {
    error!("{}", json!({
        "event": event,
        "error": error_message
    }));
}
