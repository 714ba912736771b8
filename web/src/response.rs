use serde::Serialize;
use utoipa::ToSchema;

/// Uniform success envelope; error responses carry
/// `{ success: false, error }` via `WebError`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiEnvelope<serde_json::Value> {
    /// Success with no payload, message only.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_envelope_shape() {
        let value = serde_json::to_value(ApiEnvelope::ok(vec![1, 2, 3])).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
        assert!(value.get("message").is_none());
    }

    #[test]
    fn test_message_envelope_omits_data() {
        let value = serde_json::to_value(ApiEnvelope::message("done")).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "done");
        assert!(value.get("data").is_none());
    }
}
