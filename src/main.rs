use std::env;

use dotenvy::dotenv;
use stockscope::analysis::analyze_stock;
use stockscope::config::AppConfig;
use stockscope::logging;
use stockscope::models::{TechnicalAnalysis, Timeframe};
use stockscope::services::{MarketDataProvider, SimulatedMarketDataProvider};
use tracing::info;

/// Usage: stockscope [SYMBOL] [TIMEFRAME] [--json]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = AppConfig::from_env()?;
    let args: Vec<String> = env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let mut positional = args.iter().filter(|a| !a.starts_with("--"));

    let symbol = positional.next().map(String::as_str).unwrap_or("AAPL");
    let timeframe: Timeframe = match positional.next() {
        Some(raw) => raw.parse()?,
        None => config.default_timeframe,
    };

    let mut market = match config.simulation_seed {
        Some(seed) => SimulatedMarketDataProvider::with_seed(seed),
        None => SimulatedMarketDataProvider::new(),
    };
    let history = market.historical_data(symbol, timeframe)?;
    info!(
        symbol = %symbol,
        timeframe = %timeframe,
        points = history.len(),
        "Loaded price history"
    );

    let analysis = analyze_stock(symbol, &history);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(symbol, timeframe, &analysis);
    }

    Ok(())
}

fn print_analysis(symbol: &str, timeframe: Timeframe, analysis: &TechnicalAnalysis) {
    println!("{} ({})", symbol, timeframe);
    println!("  Trend: {}", analysis.trend);
    println!("  RSI(14): {:.2}", analysis.rsi);
    println!(
        "  SMA 20/50/200: ${:.2} / ${:.2} / ${:.2}",
        analysis.moving_averages.sma20,
        analysis.moving_averages.sma50,
        analysis.moving_averages.sma200
    );
    println!("  Support: ${:.2}", analysis.support);
    println!("  Resistance: ${:.2}", analysis.resistance);
    println!("  Signals:");
    if analysis.signals.is_empty() {
        println!("    (none)");
    }
    for (i, signal) in analysis.signals.iter().enumerate() {
        println!(
            "    {}. [{} / {}] {} @ ${:.2}",
            i + 1,
            signal.signal_type,
            signal.strength,
            signal.indicator,
            signal.price
        );
        println!("       {}", signal.explanation);
    }
    println!("  Recommendation: {}", analysis.recommendation);
}
