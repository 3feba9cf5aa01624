// Response models for the lab endpoints

use serde::{Deserialize, Serialize};

/// Banner served at the root path
pub const HOME_BANNER: &str = "Vulnerable Python App - SCA Testing Lab";

/// Line printed to stdout once at startup, before the listener binds
pub const STARTUP_WARNING: &str =
    "WARNING: This app contains known vulnerabilities for testing purposes only";

pub const RUNNING_STATUS: &str = "running";

pub const RUNNING_MESSAGE: &str =
    "This app has intentionally outdated dependencies for SCA scanning demonstration";

/// Health check payload. Both fields are fixed literals; nothing about the
/// request or process state flows into them. `status` serializes first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn running() -> Self {
        Self {
            status: RUNNING_STATUS.to_string(),
            message: RUNNING_MESSAGE.to_string(),
        }
    }
}
