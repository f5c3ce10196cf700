//! Print daily candles for one instrument.
//!
//! ```bash
//! API_TOKEN=... cargo run --example day_candles -- TQBR GAZP
//! ```

use chrono::{Duration, Utc};
use finam_trade_api::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let board = args.next().unwrap_or_else(|| "TQBR".to_string());
    let code = args.next().unwrap_or_else(|| "GAZP".to_string());

    let config = ClientConfig::from_dotenv()?;
    let logging = init_logging(&LogConfig::default().with_file("logs", "day_candles.log"))?;
    let client = TradeApiClient::builder(config.api_token.clone())
        .base_url(&config.api_url)
        .logger(logging.dispatch())
        .build()?;

    let to = Utc::now().date_naive();
    let from = to - Duration::days(20);
    let params = DayCandlesParams::new(&board, &code, DayTimeFrame::D1, from, to);

    match client.candles().day(&params).await?.into_result() {
        Ok(series) => {
            println!("{board}.{code}: {} candles", series.len());
            for c in &series {
                println!(
                    "{}  O {:>10}  H {:>10}  L {:>10}  C {:>10}  V {}",
                    c.time, c.open, c.high, c.low, c.close, c.volume
                );
            }
        }
        Err(error) => println!("Server error: {error}"),
    }

    logging.shutdown();
    Ok(())
}
