use serde::{Deserialize, Serialize};

/// A named request arriving from the host engine.
///
/// No supported method takes arguments, so a call carries its name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCall {
    method: String,
}

impl MethodCall {
    /// Builds a call for the given method name.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }

    /// The method name. Handlers match it exactly and case-sensitively.
    pub fn method(&self) -> &str {
        &self.method
    }
}

/// Reply envelope sent back across the engine boundary.
///
/// `NotImplemented` is a capability signal, not an error: callers branch on
/// it instead of catching a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum MethodResponse {
    /// The request was served; carries the result string.
    Success(String),
    /// The method name is not supported on this channel.
    NotImplemented,
}

impl MethodResponse {
    /// True for the unsupported-request signal.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, MethodResponse::NotImplemented)
    }

    /// The success payload, if the request was served.
    pub fn value(&self) -> Option<&str> {
        match self {
            MethodResponse::Success(value) => Some(value),
            MethodResponse::NotImplemented => None,
        }
    }
}
