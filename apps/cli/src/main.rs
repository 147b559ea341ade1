#![deny(warnings)]

//! Headless CLI: validates the curated catalog and runs investment
//! projections; optionally relays one question to the concierge.

use anyhow::{bail, Result};
use concierge::{advisor_prompt, ChatClient, ChatConfig, Conversation};
use estate_core::{validate_catalog, ZoneId};
use invest_engine::chart::value_polyline;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

struct Args {
    zone: String,
    amount: f64,
    years: u32,
    ask: Option<String>,
}

fn parse_args() -> Args {
    let mut args = Args {
        zone: "nordelta".to_string(),
        amount: 500_000.0,
        years: 10,
        ask: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--zone" => {
                if let Some(z) = it.next() {
                    args.zone = z;
                }
            }
            "--amount" => {
                if let Some(a) = it.next().and_then(|s| s.parse().ok()) {
                    args.amount = a;
                }
            }
            "--years" => {
                if let Some(y) = it.next().and_then(|s| s.parse().ok()) {
                    args.years = y;
                }
            }
            "--ask" => args.ask = it.next(),
            _ => {}
        }
    }
    args
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .init();

    let args = parse_args();
    info!(
        git_sha = env!("GIT_SHA"),
        build_date = env!("BUILD_DATE"),
        zone = %args.zone,
        amount = args.amount,
        years = args.years,
        "starting CLI"
    );

    let catalog = market_data::curated_catalog();
    validate_catalog(&catalog)?;
    println!(
        "Catalog OK | as of: {} | zones: {} | listings: {} | ticker entries: {}",
        catalog.as_of,
        catalog.zones.len(),
        catalog.properties.len(),
        catalog.ticker.len()
    );

    let zone_id = ZoneId(args.zone.clone());
    let Some(zone) = catalog.zone(&zone_id) else {
        bail!("unknown zone: {}", args.zone);
    };

    let projection = invest_engine::project(args.amount, args.years, zone)?;
    println!(
        "KPI | zone: {} | invested: ${:.0} | years: {} | future value: ${:.0} | rent: ${:.0} | return: ${:.0} | ROI: {:.1}%",
        zone.name,
        args.amount,
        args.years,
        projection.future_value,
        projection.total_rental_income,
        projection.total_return,
        projection.roi_pct_display()
    );
    for point in &projection.series {
        println!("  year {:>2} | ${:.0}", point.year, point.projected_value);
    }
    if let Some(points) = value_polyline(&projection.series, 400.0, 200.0) {
        info!(vertices = points.len(), "chart geometry derived");
    }

    if let Some(question) = args.ask {
        match ChatConfig::from_env() {
            Ok(config) => {
                let client = ChatClient::new(config, advisor_prompt(&catalog))?;
                let mut conversation = Conversation::opening();
                conversation.push_user(question);
                let reply = client.send(&conversation).await?;
                println!("Concierge | {reply}");
            }
            Err(err) => warn!(%err, "concierge unavailable"),
        }
    }

    Ok(())
}
