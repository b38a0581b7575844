pub mod endpoints;
pub mod models;
pub mod router;
pub mod state;
