pub mod constants;
pub mod error;
pub mod tank;
pub mod tuning;
