use serde::{Deserialize, Serialize};
use tracing_error::ErrorLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use waybill::{ApiReply, CodedFault, ReplyContext};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u64,
    name: String,
}

fn main() -> Result<(), CodedFault> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(EnvFilter::from_default_env())
        .with(ErrorLayer::default())
        .init();

    // A body as it would arrive off the wire.
    let body = r#"{"code": 200, "message": "success", "data": {"id": 7, "name": "Ada"}}"#;
    let reply: ApiReply<User> = serde_json::from_str(body)
        .map_err(|e| CodedFault::new("reply.decode").caused_by(e))?;

    let ctx = ReplyContext::of(reply);

    if let Some(message) = ctx.message() {
        println!("message: {message}");
    }

    let greeting = ctx
        .ensure_code_eq(&200, |r| CodedFault::with_args("reply.rejected", [r.code]))?
        .ensure_data(|data| data.is_some(), |r| CodedFault::with_args("reply.empty", [r.code]))?
        .map(|r| ApiReply {
            code: r.code,
            message: r.message.clone(),
            data: r.data.as_ref().map(|user| format!("hello, {}", user.name)),
        });

    greeting.accept(|data| {
        if let Some(text) = data {
            println!("{text}");
        }
    });

    greeting.accept_if(
        |r| r.code == 200,
        |data| tracing::info!(?data, "Reply accepted"),
    );

    Ok(())
}
