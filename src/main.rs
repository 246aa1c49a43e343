use anyhow::Result;
use clap::{CommandFactory, Parser};
use kattis_download::KattisScraperBuilder;

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG takes precedence over the -v flag.
    let default_level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if args.problems.is_empty() {
        Args::command().print_help()?;
        return Ok(());
    }

    let scraper = KattisScraperBuilder::default()
        .problems(args.problems)
        .write(args.write)
        .language(args.language)
        .out_dir(args.out_dir)
        .build()?;

    let records = scraper.scrape().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    }

    Ok(())
}
