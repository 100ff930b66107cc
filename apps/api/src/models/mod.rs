pub mod insights;
pub mod quiz;
pub mod user;
