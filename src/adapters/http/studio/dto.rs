//! HTTP DTOs for studio endpoints.

use serde::Serialize;

use crate::application::handlers::studio::StudioDescriptor;

/// Response for a successful studio access check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckAccessResponse {
    /// Always "ok" on success.
    pub status: &'static str,
    /// The studio the caller may manage.
    pub studio: StudioView,
}

impl CheckAccessResponse {
    pub fn ok(descriptor: StudioDescriptor) -> Self {
        Self {
            status: "ok",
            studio: StudioView {
                id: descriptor.id.to_string(),
                name: descriptor.name,
            },
        }
    }
}

/// Minimal studio descriptor returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct StudioView {
    pub id: String,
    pub name: String,
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::StudioId;

    #[test]
    fn check_access_response_serializes_status_ok() {
        let response = CheckAccessResponse::ok(StudioDescriptor {
            id: StudioId::new(),
            name: "Northside Studio".to_string(),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["studio"]["name"], "Northside Studio");
    }
}
