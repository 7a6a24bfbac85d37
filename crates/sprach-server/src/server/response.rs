//! Transport-independent HTTP response.

use serde::Serialize;
use sprach_core::responses::ErrorResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    /// JSON body; `None` for empty responses.
    pub body: Option<String>,
}

impl ApiResponse {
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status,
                body: Some(body),
            },
            Err(error) => {
                tracing::error!(%error, "failed to serialize response");
                Self::error(500, "Internal Server Error")
            }
        }
    }

    pub fn ok<T: Serialize>(value: &T) -> Self {
        Self::json(200, value)
    }

    pub fn error(status: u16, detail: impl Into<String>) -> Self {
        let body = serde_json::to_string(&ErrorResponse::new(detail))
            .unwrap_or_else(|_| r#"{"detail":"Internal Server Error"}"#.to_string());
        Self {
            status,
            body: Some(body),
        }
    }

    pub fn not_found() -> Self {
        Self::error(404, "Flashcard not found")
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::error(422, detail)
    }

    pub const fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }
}
