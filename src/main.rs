mod export;
mod fetch;
mod parser;
mod record;

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};

use record::OfferingRecord;

#[derive(Parser)]
#[command(name = "ipo_scraper", about = "IPO listing scraper for ipoji.com")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the listing page and save its visible text
    Fetch {
        /// Output text file
        #[arg(short, long, default_value = "ipo_page.txt")]
        out: PathBuf,
    },
    /// Parse a saved page-text file and export CSV
    Parse {
        /// Page-text file produced by 'fetch'
        #[arg(short, long)]
        input: PathBuf,
        /// Output CSV file
        #[arg(short, long, default_value = "ipo_data.csv")]
        out: PathBuf,
    },
    /// Fetch + parse + export in one pipeline
    Run {
        /// Output CSV file
        #[arg(short, long, default_value = "ipo_data.csv")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { out } => {
            let text = fetch::fetch_listing().await?;
            std::fs::write(&out, &text)?;
            println!("Saved page text to {}", out.display());
        }
        Commands::Parse { input, out } => {
            let text = std::fs::read_to_string(&input)?;
            parse_and_export(&text, &out)?;
        }
        Commands::Run { out } => {
            println!("Fetching IPO data from ipoji.com...");
            let text = fetch::fetch_listing().await?;
            parse_and_export(&text, &out)?;
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}

fn parse_and_export(text: &str, out: &Path) -> anyhow::Result<()> {
    let records = parser::parse_listing(text);
    if records.is_empty() {
        println!("No IPO data found.");
        return Ok(());
    }

    print_table(&records);
    export::write_csv(out, &records)?;
    print_summary(&records);
    println!("Data saved to {}", out.display());
    Ok(())
}

fn print_table(records: &[OfferingRecord]) {
    println!(
        "{:>3} | {:<24} | {:<9} | {:>6} | {:>8} | {:>8} | {:<10} | {:>9}",
        "#", "Company", "Price", "Lot", "Subs", "Premium", "Opens", "Per Lot"
    );
    println!("{}", "-".repeat(96));

    for (i, r) in records.iter().enumerate() {
        let price = match (r.offer_price_min, r.offer_price_max) {
            (Some(min), Some(max)) if min != max => format!("{}-{}", min, max),
            (Some(min), _) => min.to_string(),
            _ => "-".into(),
        };
        let lot = r.lot_size.map(|l| l.to_string()).unwrap_or_else(|| "-".into());
        let subs = r
            .subscription_times
            .map(|s| format!("{:.2}x", s))
            .unwrap_or_else(|| "-".into());
        let premium = r
            .expected_premium
            .map(|p| format!("{:.1}", p))
            .unwrap_or_else(|| "-".into());
        let opens = r
            .offer_start_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".into());
        let per_lot = r
            .investment_per_lot
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".into());

        println!(
            "{:>3} | {:<24} | {:<9} | {:>6} | {:>8} | {:>8} | {:<10} | {:>9}",
            i + 1,
            truncate(&r.company_name, 24),
            price,
            lot,
            subs,
            premium,
            opens,
            per_lot
        );
    }
}

fn print_summary(records: &[OfferingRecord]) {
    let with_subscription = records
        .iter()
        .filter(|r| r.subscription_times.is_some())
        .count();
    let with_premium = records
        .iter()
        .filter(|r| r.expected_premium.is_some())
        .count();
    let investments: Vec<u64> = records.iter().filter_map(|r| r.investment_per_lot).collect();
    let avg_investment = if investments.is_empty() {
        0.0
    } else {
        investments.iter().sum::<u64>() as f64 / investments.len() as f64
    };

    println!("\nTotal IPOs: {}", records.len());
    println!("With subscription data: {}", with_subscription);
    println!("With premium data: {}", with_premium);
    println!("Average investment per lot: ₹{:.0}", avg_investment);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
