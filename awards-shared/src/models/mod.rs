pub mod award;
pub mod errors;
