pub mod award_store;
pub mod client;
pub mod errors;
pub mod memory_store;
pub mod query;
