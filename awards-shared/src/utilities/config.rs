use dotenv::dotenv;
use std::env;
use crate::models::errors::ConfigError;

pub const TABLE_NAME_VAR: &str = "REVIEWS_TABLE_NAME";
pub const REGION_VAR: &str = "REGION";
pub const ENDPOINT_VAR: &str = "DYNAMODB_ENDPOINT";

/// Initialize dotenv (only needs to be called once at startup)
pub fn init() {
    if dotenv().is_ok() {
        log::info!("Loaded .env file");
    } else {
        log::info!("No .env file loaded, using process environment");
    }
}

/// Settings injected by the deployment. Read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardConfig {
    pub table_name: String,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl AwardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            table_name: get_env_var(TABLE_NAME_VAR)?,
            region: get_optional_env_var(REGION_VAR),
            endpoint_url: get_optional_env_var(ENDPOINT_VAR),
        })
    }
}

/// Fetch a required environment variable by key
pub fn get_env_var(key: &str) -> Result<String, ConfigError> {
    get_optional_env_var(key).ok_or_else(|| ConfigError::MissingVar(key.to_string()))
}

pub fn get_optional_env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
