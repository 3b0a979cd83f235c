use anyhow::Result;
use clap::Parser;

use secmaster_common::format_usd;
use secmaster_lookup::FmpClient;

/// Look up company name, description and current price for a ticker.
#[derive(Parser, Debug)]
#[command(name = "secmaster", version, about)]
struct Args {
    /// Ticker symbol, e.g. AAPL
    ticker: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let client = FmpClient::from_env()?;

    match client.fetch_company(&args.ticker).await {
        Ok(quote) => {
            println!("{} ({})", quote.name.as_deref().unwrap_or("N/A"), quote.ticker);
            match quote.price {
                Some(price) => println!("Price: {} {}", format_usd(price), quote.currency),
                None => println!("Price: unavailable"),
            }
            println!();
            println!(
                "{}",
                quote
                    .description
                    .as_deref()
                    .unwrap_or("No description available.")
            );
            Ok(())
        }
        Err(err) if err.user_correctable() => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
        Err(err) => Err(err.into()),
    }
}
