use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque description of the triggering request.
///
/// The handler accepts any event without validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct InvocationEvent(pub Value);

impl InvocationEvent {
    /// Borrow the raw event payload.
    pub fn payload(&self) -> &Value {
        &self.0
    }

    /// HTTP method of the triggering request, if the event carries one.
    ///
    /// Understands API Gateway REST (`httpMethod`), HTTP API
    /// (`requestContext.http.method`) and the plain `method` key.
    pub fn method(&self) -> Option<&str> {
        self.0
            .get("httpMethod")
            .or_else(|| self.0.pointer("/requestContext/http/method"))
            .or_else(|| self.0.get("method"))
            .and_then(Value::as_str)
    }

    /// Request path (`path`, or `rawPath` for API Gateway HTTP APIs).
    pub fn path(&self) -> Option<&str> {
        self.0
            .get("path")
            .or_else(|| self.0.get("rawPath"))
            .and_then(Value::as_str)
    }
}

impl From<Value> for InvocationEvent {
    fn from(value: Value) -> Self {
        InvocationEvent(value)
    }
}

/// Opaque platform execution context. Fields are only used in log lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    /// Platform request id (Lambda request id, `x-vercel-id`, ...).
    pub request_id: Option<String>,
    /// Name or ARN of the running function, when the platform exposes it.
    pub function_name: Option<String>,
}

impl InvocationContext {
    pub fn new(request_id: Option<String>, function_name: Option<String>) -> Self {
        InvocationContext {
            request_id,
            function_name,
        }
    }
}
