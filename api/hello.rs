use std::sync::OnceLock;

use serde_json::json;
use shared_layer_api::config::SharedConfig;
use shared_layer_api::handler::handle_with;
use shared_layer_api::models::invocation::{InvocationContext, InvocationEvent};
use shared_layer_api::provider::SharedValue;
use shared_layer_api::telemetry::init_tracing;
use vercel_runtime::{run, Body, Error, Request, Response};

static CONFIG: OnceLock<SharedConfig> = OnceLock::new();

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    run(handler).await
}

/// GET /api/hello: Return the shared layer's value as `{"message": ...}`.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    respond(CONFIG.get_or_init(SharedConfig::from_env), &req)
}

fn respond(config: &SharedConfig, req: &Request) -> Result<Response<Body>, Error> {
    let event = InvocationEvent::from(json!({
        "method": req.method().as_str(),
        "path": req.uri().path(),
    }));
    let context = InvocationContext::new(
        req.headers()
            .get("x-vercel-id")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        None,
    );

    let envelope = handle_with(|| SharedValue::from_config(config), event, context)?;

    Ok(envelope.into_http_response()?.map(Body::Text))
}
