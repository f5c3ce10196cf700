//! Place a limit order and cancel it again.
//!
//! Needs `API_TOKEN` and `TRANSAQ_TOKEN` (the trading account id).
//!
//! ```bash
//! cargo run --example place_order -- SBER 1 250.5
//! ```

use finam_trade_api::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let code = args.next().unwrap_or_else(|| "SBER".to_string());
    let quantity: i64 = args.next().as_deref().unwrap_or("1").parse()?;
    let price: f64 = args.next().as_deref().unwrap_or("250.5").parse()?;

    let config = ClientConfig::from_dotenv()?;
    let logging = init_logging(&LogConfig::default().with_level("debug"))?;
    logging.install_global()?;
    let client = TradeApiClient::from_config(&config)?;
    let client_id = client
        .default_client_id()
        .ok_or("TRANSAQ_TOKEN is not set")?
        .to_string();

    let order = NewOrder::limit(&client_id, "TQBR", &code, BuySell::Buy, quantity, price)
        .with_condition(Condition::new(ConditionType::Bid, price))
        .with_valid_before(ValidBefore::till_end_session());

    tracing::info!(%code, quantity, price, "placing order");

    let placed = client.orders().place(&order).await?;
    println!("Placed: transaction {}", placed.transaction_id);

    let orders = client.orders().list(&OrdersParams::new(&client_id)).await?;
    if let Some(data) = orders.data() {
        for o in data.orders.iter().filter(|o| o.status == OrderStatus::Active) {
            println!(
                "Active: #{} {} {} x{} @ {}",
                o.transaction_id, o.buy_sell, o.security_code, o.quantity, o.price
            );
        }
    }

    let reply = client.orders().cancel(&client_id, placed.transaction_id).await?;
    println!("Cancel reply: {reply}");

    logging.shutdown();
    Ok(())
}
