//! AWS Lambda entrypoint behind API Gateway (proxy integration).
//!
//! Returns the envelope as-is; API Gateway turns `statusCode`/`body`
//! into the HTTP response.

use lambda_runtime::{service_fn, Context, Error, LambdaEvent};
use serde_json::Value;
use shared_layer_api::config::SharedConfig;
use shared_layer_api::handler::handle_with;
use shared_layer_api::models::envelope::ResponseEnvelope;
use shared_layer_api::models::invocation::{InvocationContext, InvocationEvent};
use shared_layer_api::provider::SharedValue;
use shared_layer_api::telemetry::init_tracing;

fn invocation_context(ctx: &Context) -> InvocationContext {
    let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());
    InvocationContext::new(
        non_empty(&ctx.request_id),
        non_empty(&ctx.invoked_function_arn),
    )
}

async fn handle_request(
    config: &SharedConfig,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error> {
    let (payload, ctx) = event.into_parts();

    let envelope = handle_with(
        || SharedValue::from_config(config),
        InvocationEvent::from(payload),
        invocation_context(&ctx),
    )?;
    Ok(envelope)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = SharedConfig::from_env();
    let config = &config;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_request(config, event).await
    }))
    .await
}
