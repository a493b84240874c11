use serde::Serialize;
use serde_json::{json, Value};

/// Headers attached to every response.
pub const RESPONSE_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "*"),
    ("Access-Control-Allow-Methods", "*"),
];

/// Status-coded JSON result of a processor.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status_code: u16, body: Value) -> Self {
        Self { status_code, body }
    }

    /// Serialises `body` with the given status, or a 500 if it cannot be serialised.
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => Self::new(status_code, value),
            Err(e) => Self::internal_error(format!("Failed to serialize response: {e}")),
        }
    }

    pub fn ok<T: Serialize>(body: &T) -> Self {
        Self::json(200, body)
    }

    pub fn created<T: Serialize>(body: &T) -> Self {
        Self::json(201, body)
    }

    /// An error envelope: `{"message": ...}`.
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self::new(status_code, json!({ "message": message.into() }))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::error(400, message)
    }

    pub fn unauthorized() -> Self {
        Self::error(401, "Not authorised")
    }

    pub fn not_found() -> Self {
        Self::error(404, "Not found")
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::error(500, message)
    }

    /// True for 2xx statuses.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Renders the Lambda proxy integration shape, with the body as a JSON string.
    pub fn as_lambda_json(&self) -> Value {
        let headers: serde_json::Map<String, Value> = RESPONSE_HEADERS
            .iter()
            .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
            .collect();

        json!({
            "statusCode": self.status_code,
            "body": self.body.to_string(),
            "headers": headers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_range() {
        assert!(ApiResponse::ok(&json!({})).is_ok());
        assert!(ApiResponse::created(&json!({})).is_ok());
        assert!(!ApiResponse::not_found().is_ok());
        assert!(!ApiResponse::error(302, "moved").is_ok());
    }

    #[test]
    fn test_error_envelope() {
        let response = ApiResponse::unauthorized();
        assert_eq!(response.status_code, 401);
        assert_eq!(response.body, json!({"message": "Not authorised"}));
    }

    #[test]
    fn test_lambda_json_stringifies_body() {
        let response = ApiResponse::ok(&vec!["a", "b"]);

        let lambda = response.as_lambda_json();

        assert_eq!(lambda["statusCode"], 200);
        assert_eq!(lambda["body"], r#"["a","b"]"#);
        assert_eq!(lambda["headers"]["Content-Type"], "application/json");
        assert_eq!(lambda["headers"]["Access-Control-Allow-Origin"], "*");
        assert_eq!(lambda["headers"]["Access-Control-Allow-Methods"], "*");
    }
}
