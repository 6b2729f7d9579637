//! Response body of `GET /health`.

use serde::Serialize;

/// Overall service status: `healthy` when every check passes, else `degraded`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

impl HealthResponse {
    pub fn from_checks(checks: HealthChecks) -> Self {
        let status = if checks.all_ok() { "healthy" } else { "degraded" };

        Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            checks,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.checks.all_ok()
    }
}

/// Favorite source storage and lookup cache.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
    pub cache: CheckStatus,
}

impl HealthChecks {
    fn all_ok(&self) -> bool {
        self.database.is_ok() && self.cache.is_ok()
    }
}

/// Outcome of a single check, `ok` or `error`, with an optional note.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
