//! Check that the configured API token is accepted.
//!
//! ```bash
//! API_TOKEN=... cargo run --example check_token
//! ```

use finam_trade_api::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_dotenv()?;
    let logging = init_logging(&LogConfig::default())?;

    let client = TradeApiClient::builder(config.api_token.clone())
        .base_url(&config.api_url)
        .logger(logging.dispatch())
        .build()?;

    match client.tokens().check().await?.into_result() {
        Ok(token) => println!("Token accepted, id {}", token.id),
        Err(error) => println!("Token rejected: {error}"),
    }

    logging.shutdown();
    Ok(())
}
