pub mod config;
pub mod fields;
pub mod logging;
pub mod requests;
pub mod responses;
