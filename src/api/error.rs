/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Network unreachable, connection reset, timeout
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("request failed"))]
    Status { status: u16, detail: Option<String> },

    /// The response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// Error detail reported by the backend, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Build a status error from a raw response body
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            detail: extract_detail(body),
        }
    }
}

/// Pull the `detail` field out of a FastAPI-style error body.
///
/// Falls back to the trimmed body when it is not JSON, and to `None` when it
/// is empty.
fn extract_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return Some(body.to_string());
    };

    match value.get("detail") {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(serde_json::Value::Null) | None => value
            .get("message")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string()),
        Some(other) => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_from_fastapi_body() {
        let err = ApiError::from_status(404, r#"{"detail":"Project not found"}"#);
        assert_eq!(err.detail(), Some("Project not found"));
        assert_eq!(err.to_string(), "HTTP 404: Project not found");
    }

    #[test]
    fn test_detail_from_plain_text() {
        let err = ApiError::from_status(502, "  upstream down \n");
        assert_eq!(err.detail(), Some("upstream down"));
    }

    #[test]
    fn test_empty_body_has_no_detail() {
        let err = ApiError::from_status(500, "");
        assert_eq!(err.detail(), None);
        assert_eq!(err.to_string(), "HTTP 500: request failed");
    }

    #[test]
    fn test_structured_detail_is_stringified() {
        let err = ApiError::from_status(422, r#"{"detail":[{"msg":"field required"}]}"#);
        assert_eq!(err.detail(), Some(r#"[{"msg":"field required"}]"#));
    }
}
