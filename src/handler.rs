//! Request handler: turns an invocation into a response envelope.
//!
//! Builds a value provider, reads it once, and returns the value as
//! `{"message": <value>}` with status 200. Failures are not recovered here;
//! they propagate to the hosting platform.

use tracing::debug;

use crate::encoding::to_body_string;
use crate::error::HandlerError;
use crate::models::envelope::{MessageBody, ResponseEnvelope};
use crate::models::invocation::{InvocationContext, InvocationEvent};
use crate::provider::{SharedValue, ValueProvider};

/// Handle one invocation with the default [`SharedValue`] provider.
pub fn handle(
    event: InvocationEvent,
    context: InvocationContext,
) -> Result<ResponseEnvelope, HandlerError> {
    handle_with(SharedValue::new, event, context)
}

/// Handle one invocation, constructing the provider with `make_provider`.
///
/// `make_provider` is called exactly once and the provider is dropped
/// before returning. Event and context are accepted without validation.
pub fn handle_with<P, F>(
    make_provider: F,
    event: InvocationEvent,
    context: InvocationContext,
) -> Result<ResponseEnvelope, HandlerError>
where
    P: ValueProvider,
    F: FnOnce() -> P,
{
    let provider = make_provider();
    let body = to_body_string(&MessageBody {
        message: provider.get_value(),
    })?;

    debug!(
        request_id = context.request_id.as_deref().unwrap_or("-"),
        function = context.function_name.as_deref().unwrap_or("-"),
        method = event.method().unwrap_or("-"),
        path = event.path().unwrap_or("-"),
        body_len = body.len(),
        "invocation handled"
    );

    Ok(ResponseEnvelope::ok(body))
}
