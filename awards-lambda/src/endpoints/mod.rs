pub mod awards;
pub mod status;
