//! ApiKey - API Key Records and Requests

use serde::{Deserialize, Serialize};

use crate::constants::API_KEY_NAME_MAX_LEN;
use crate::error::{Error, Result};

/// A single API key as returned by the account API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiKeyRecord {
    /// Human-facing name, unique per account
    pub name: String,
    /// The key value sent with RPC requests
    pub token: String,
}

impl ApiKeyRecord {
    pub fn new(name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
        }
    }
}

/// A write operation against the API keys resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyRequest {
    /// Create a new key with the given name
    Create { name: String },
    /// Rename the key identified by `token`
    Update { token: String, name: String },
    /// Delete the key with the given name
    Delete { name: String },
}

impl ApiKeyRequest {
    /// Name of the key the request applies to
    pub fn name(&self) -> &str {
        match self {
            ApiKeyRequest::Create { name }
            | ApiKeyRequest::Update { name, .. }
            | ApiKeyRequest::Delete { name } => name,
        }
    }

    /// Short verb for log lines
    pub fn verb(&self) -> &'static str {
        match self {
            ApiKeyRequest::Create { .. } => "create",
            ApiKeyRequest::Update { .. } => "update",
            ApiKeyRequest::Delete { .. } => "delete",
        }
    }
}

/// Request body for create and update
#[derive(Debug, Serialize)]
pub struct ApiKeyPayload<'a> {
    pub name: &'a str,
}

/// Normalize and validate a user-entered key name
pub fn validate_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(Error::Invalid {
            message: "API key name is required".to_string(),
        });
    }
    if name.chars().count() > API_KEY_NAME_MAX_LEN {
        return Err(Error::Invalid {
            message: format!("API key name must be at most {API_KEY_NAME_MAX_LEN} characters"),
        });
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("  prod-key \n").expect("valid"), "prod-key");
    }

    #[test]
    fn test_validate_name_rejects_blank() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_name_length_limit() {
        let at_limit = "k".repeat(API_KEY_NAME_MAX_LEN);
        assert!(validate_name(&at_limit).is_ok());

        let over = "k".repeat(API_KEY_NAME_MAX_LEN + 1);
        assert!(validate_name(&over).is_err());
    }

    #[test]
    fn test_record_json_shape() {
        let json = r#"[{"name":"prod-key","token":"6d1f0c0e"},{"name":"dev","token":"aa"}]"#;
        let records: Vec<ApiKeyRecord> = serde_json::from_str(json).expect("decode");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], ApiKeyRecord::new("prod-key", "6d1f0c0e"));
    }

    #[test]
    fn test_request_name() {
        let update = ApiKeyRequest::Update {
            token: "t".to_string(),
            name: "renamed".to_string(),
        };
        assert_eq!(update.name(), "renamed");
        assert_eq!(update.verb(), "update");
    }
}
