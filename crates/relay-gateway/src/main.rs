//! Binary entrypoint for the relay gateway server.
use relay_gateway::run;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Default listen address can be overridden with RELAY_ADDR
    let addr = std::env::var("RELAY_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    run(&addr).await;
}
