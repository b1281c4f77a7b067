// src/bin/price_board.rs
// Terminal price board: polls /api/prices and renders the price table
use anyhow::{Context, Result};
use dolly_hotel::presentation::{build_price_table, PriceGroup};
use dolly_hotel::services::{start_polling, FeedState, HttpPriceSource, PriceFeed, PriceFeedOptions};
use dotenv::dotenv;
use reqwest::Client;
use std::env;
use std::sync::Arc;
use std::time::Duration;

// --- ANSI colors ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";

struct BoardArgs {
    category_id: Option<i32>,
    once: bool,
}

fn parse_args() -> Result<BoardArgs> {
    let mut args = BoardArgs {
        category_id: None,
        once: false,
    };

    for arg in env::args().skip(1) {
        if arg == "--once" {
            args.once = true;
        } else {
            let id = arg
                .parse()
                .with_context(|| format!("Expected a category id or --once, got '{}'", arg))?;
            args.category_id = Some(id);
        }
    }

    Ok(args)
}

async fn check_service_health(base_url: &str) -> bool {
    let url = format!("{}/health", base_url.trim_end_matches('/'));
    match Client::new().get(&url).timeout(Duration::from_secs(5)).send().await {
        Ok(resp) => resp.status().is_success(),
        Err(_) => false,
    }
}

fn print_header(base_url: &str, category_id: Option<i32>) {
    println!("{}╔══════════════════════════════════════════════════════════════╗{}", CYAN, RESET);
    println!("{}║   🏨  Dolly Hotel - Room Prices                               ║{}", CYAN, RESET);
    println!("{}╚══════════════════════════════════════════════════════════════╝{}", CYAN, RESET);
    match category_id {
        Some(id) => println!("{}Source: {} (category {}){}", BOLD, base_url, id, RESET),
        None => println!("{}Source: {}{}", BOLD, base_url, RESET),
    }
}

fn print_group(group: &PriceGroup) {
    println!("\n{}{}{}  {}({}){}", BOLD, group.category_title, RESET, CYAN, group.options_label, RESET);
    println!("──────────────────────────────────────────────────────────────────────────────");

    for card in &group.cards {
        let badge = if card.best_value {
            format!("{}★ Best Value{}", GREEN, RESET)
        } else if card.popular {
            format!("{}Popular{}", MAGENTA, RESET)
        } else {
            String::new()
        };

        println!(
            "{:<14} {:<20} {:>14} {:<9} {}",
            card.title, card.subtitle, card.amount, card.unit, badge
        );
        println!("    {}", card.features.join(" · "));
    }
}

fn render(state: &FeedState) {
    match state {
        FeedState::Loading => println!("\n{}Loading prices...{}", YELLOW, RESET),
        FeedState::Error(message) => {
            println!("\n{}❌ Failed to load prices: {}{}", RED, message, RESET);
        }
        FeedState::Empty => println!("\n{}No pricing information available.{}", YELLOW, RESET),
        FeedState::Ready(prices) => {
            for group in build_price_table(prices) {
                print_group(&group);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = parse_args()?;
    let base_url = env::var("PRICE_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let poll_seconds: u64 = env::var("PRICE_POLL_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(60);

    print_header(&base_url, args.category_id);

    if !check_service_health(&base_url).await {
        println!("{}⚠️  Service not reachable at {}; will keep retrying.{}", YELLOW, base_url, RESET);
    }

    let options = PriceFeedOptions {
        refresh_interval: Duration::from_secs(poll_seconds.max(1)),
        ..PriceFeedOptions::default()
    };
    let source = Arc::new(HttpPriceSource::new(&base_url, args.category_id));
    let feed = Arc::new(PriceFeed::new(source, options));

    if args.once {
        feed.refresh_with_retry().await;
        render(&feed.state().await);
        return Ok(());
    }

    let poller = start_polling(feed.clone());
    let mut shown = FeedState::Loading;
    render(&shown);

    let mut ticker = tokio::time::interval(Duration::from_millis(500));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let state = feed.state().await;
                if state != shown {
                    render(&state);
                    shown = state;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    poller.abort();
    println!("\n{}Bye.{}", GREEN, RESET);
    Ok(())
}
