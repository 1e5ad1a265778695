//! HTTP service command

use std::path::Path;

use receipt_points::api::ReceiptApi;
use receipt_points::config::ServiceConfig;
use receipt_points::server;

/// Start the receipt service
pub fn serve(
    config: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    workers: Option<usize>,
) -> anyhow::Result<()> {
    let config = ServiceConfig::load(config)?.with_overrides(host, port, workers);
    config.validate()?;

    println!("Starting receipt-points on http://{}", config.server.addr());
    println!("Press Ctrl+C to stop");

    server::tiny_http::serve(ReceiptApi::default(), &config.server)
}
