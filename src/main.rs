mod error;
mod extract;
mod fetch;
mod input;
mod model;
mod pipeline;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

#[derive(Parser)]
#[command(name = "yc_profiles", about = "CSV-driven YC company profile scraper")]
struct Cli {
    /// CSV file with company name and YC profile URL columns
    #[arg(short, long, default_value = "input/companies.csv")]
    input: PathBuf,
    /// Output JSON file (overwritten on each run)
    #[arg(short, long, default_value = "out/companies.json")]
    output: PathBuf,
    /// Max concurrent page fetches
    #[arg(short, long, default_value_t = 8)]
    concurrency: usize,
    /// Max companies to scrape (default: all rows)
    #[arg(short = 'n', long)]
    limit: Option<usize>,
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

    let stats = pipeline::run(&cli.input, &cli.output, cli.concurrency, cli.limit).await?;
    println!(
        "Done: {} companies ({} ok, {} failed) -> {}",
        stats.total,
        stats.ok,
        stats.errors,
        cli.output.display()
    );

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Finished in {}", format_duration(elapsed));
    }

    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
