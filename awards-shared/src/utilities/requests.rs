use lambda_http::{Request, RequestExt};

/// Reads a path parameter, treating an empty value as absent.
pub fn path_parameter(event: &Request, name: &str) -> Option<String> {
    event
        .path_parameters_ref()
        .and_then(|params| params.first(name))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}
