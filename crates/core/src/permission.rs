//! Permission-error values published on the relay.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The document-store operation that was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreOperation {
    Create,
    Update,
    Delete,
    Get,
    List,
}

impl StoreOperation {
    /// Lowercase wire name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Get => "get",
            Self::List => "list",
        }
    }
}

/// An ephemeral record of a store operation rejected by the access-control
/// layer.
///
/// Constructed at the failure site, published once on the relay, and never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionError {
    /// The denied operation.
    pub operation: StoreOperation,
    /// Store path of the target, e.g. `contact_submissions/3f1a…`.
    pub path: String,
    /// The payload the operation carried, when it carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_resource_data: Option<Value>,
}

impl PermissionError {
    /// Create an error for an operation on a store path.
    #[must_use]
    pub fn new(operation: StoreOperation, path: impl Into<String>) -> Self {
        Self {
            operation,
            path: path.into(),
            request_resource_data: None,
        }
    }

    /// Attach the request payload that was denied.
    #[must_use]
    pub fn with_request_data(mut self, data: Value) -> Self {
        self.request_resource_data = Some(data);
        self
    }

    /// Human-readable remediation hint for the UI error surface.
    #[must_use]
    pub fn remediation_hint(&self) -> String {
        format!(
            "The {} operation on {} was denied. Check that your account holds the admin role and that storage rules allow this write.",
            self.operation.as_str(),
            self.path
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_camel_case() {
        let err = PermissionError::new(StoreOperation::Create, "donations/abc")
            .with_request_data(json!({"donorName": "Jane"}));
        let value = serde_json::to_value(&err).unwrap();

        assert_eq!(value["operation"], "create");
        assert_eq!(value["path"], "donations/abc");
        assert_eq!(value["requestResourceData"]["donorName"], "Jane");
    }

    #[test]
    fn test_request_data_omitted_when_absent() {
        let err = PermissionError::new(StoreOperation::Delete, "media/1");
        let value = serde_json::to_value(&err).unwrap();
        assert!(value.get("requestResourceData").is_none());
    }

    #[test]
    fn test_hint_names_operation_and_path() {
        let err = PermissionError::new(StoreOperation::Update, "page_content/about");
        let hint = err.remediation_hint();
        assert!(hint.contains("update"));
        assert!(hint.contains("page_content/about"));
    }
}
