use http::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::error::HandlerError;

/// Response returned to the platform for one invocation.
///
/// Serializes to the API Gateway proxy shape:
/// `{"statusCode": 200, "body": "{\"message\":...}"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseEnvelope {
    /// HTTP status code.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON-encoded response body.
    pub body: String,
}

impl ResponseEnvelope {
    /// Builds a 200 envelope around an already-serialized body.
    pub fn ok(body: String) -> Self {
        ResponseEnvelope {
            status_code: 200,
            body,
        }
    }

    /// Converts the envelope into a plain HTTP response with a JSON
    /// content type, for platforms that expect one.
    pub fn into_http_response(self) -> Result<http::Response<String>, HandlerError> {
        let response = http::Response::builder()
            .status(self.status_code)
            .header(CONTENT_TYPE, "application/json")
            .body(self.body)?;
        Ok(response)
    }
}

/// Body schema: the provider's value under the `message` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageBody<T> {
    pub message: T,
}
