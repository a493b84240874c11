use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::marketplace::ValidationError;

/// Claim carrying the caller's identity in the authorizer block.
pub const AUTH_CLAIM: &str = "cognito:username";

/// Inbound HTTP-style event, shaped like an API Gateway HTTP API event.
///
/// Only the parts the processors read are modelled; unknown fields are
/// ignored when deserialising a raw gateway event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEvent {
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub authorizer: Option<Authorizer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Authorizer {
    #[serde(default)]
    pub jwt: Option<JwtAuthorizer>,
}

/// Claims of a token already validated by the upstream authorizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JwtAuthorizer {
    #[serde(default)]
    pub claims: HashMap<String, serde_json::Value>,
}

impl ApiEvent {
    /// Creates an empty event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path parameter.
    pub fn with_path_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Sets the raw body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.is_base64_encoded = false;
        self
    }

    /// Sets the identity claim as the upstream authorizer would.
    pub fn with_auth_user(mut self, auth_user_id: impl Into<String>) -> Self {
        let context = self.request_context.get_or_insert_with(RequestContext::default);
        let authorizer = context.authorizer.get_or_insert_with(Authorizer::default);
        authorizer
            .jwt
            .get_or_insert_with(JwtAuthorizer::default)
            .claims
            .insert(
                AUTH_CLAIM.to_string(),
                serde_json::Value::String(auth_user_id.into()),
            );
        self
    }

    /// Returns the caller's identity, if the authorizer asserted one.
    pub fn auth_user_id(&self) -> Option<&str> {
        self.request_context
            .as_ref()?
            .authorizer
            .as_ref()?
            .jwt
            .as_ref()?
            .claims
            .get(AUTH_CLAIM)?
            .as_str()
            .filter(|id| !id.trim().is_empty())
    }

    /// Returns a path parameter by name.
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()?
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Returns a path parameter or a validation error naming it.
    pub fn require_path_parameter(&self, name: &'static str) -> Result<&str, ValidationError> {
        self.path_parameter(name)
            .ok_or(ValidationError::MissingPathParameter(name))
    }

    /// Deserialises the JSON body.
    pub fn json_body<T: DeserializeOwned>(&self) -> Result<T, ValidationError> {
        let raw = match self.body.as_deref() {
            Some(body) if !body.trim().is_empty() => body,
            _ => return Err(ValidationError::MissingBody),
        };

        if self.is_base64_encoded {
            let decoded = STANDARD
                .decode(raw.trim())
                .map_err(|e| ValidationError::MalformedBody(e.to_string()))?;
            serde_json::from_slice(&decoded)
                .map_err(|e| ValidationError::MalformedBody(e.to_string()))
        } else {
            serde_json::from_str(raw).map_err(|e| ValidationError::MalformedBody(e.to_string()))
        }
    }
}
