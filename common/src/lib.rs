// Shared code for the SCA lab stub binaries

pub mod config;
pub mod errors;
pub mod models;
pub mod telemetry;
