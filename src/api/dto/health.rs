//! Body of `GET /health`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckOutcome {
    Ok,
    Error,
}

/// Overall service status plus the camp store check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub storage: StorageCheck,
}

/// Result of counting camps in the configured store.
///
/// `camps` is present when the count succeeded, `message` when it failed.
#[derive(Debug, Serialize)]
pub struct StorageCheck {
    pub status: CheckOutcome,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub camps: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StorageCheck {
    pub fn reachable(camps: i64) -> Self {
        Self {
            status: CheckOutcome::Ok,
            camps: Some(camps),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: CheckOutcome::Error,
            camps: None,
            message: Some(message.into()),
        }
    }
}

impl HealthResponse {
    /// Degraded whenever the storage check failed.
    pub fn from_storage(storage: StorageCheck) -> Self {
        let status = match storage.status {
            CheckOutcome::Ok => ServiceStatus::Healthy,
            CheckOutcome::Error => ServiceStatus::Degraded,
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { storage },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reachable_store_reports_camp_count() {
        let response = HealthResponse::from_storage(StorageCheck::reachable(3));

        assert!(response.is_healthy());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "healthy");
        assert_eq!(value["checks"]["storage"], json!({ "status": "ok", "camps": 3 }));
    }

    #[test]
    fn test_failed_store_degrades_service() {
        let response = HealthResponse::from_storage(StorageCheck::failed("Database error"));

        assert!(!response.is_healthy());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "degraded");
        assert_eq!(
            value["checks"]["storage"],
            json!({ "status": "error", "message": "Database error" })
        );
    }
}
