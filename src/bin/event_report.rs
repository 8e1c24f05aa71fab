use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use geo_invite::adapters::storage::LocalStorage;
use geo_invite::core::{events, loader};
use geo_invite::utils::logger;
use geo_invite::InviteError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "event-report")]
#[command(about = "Print past, today's and upcoming events")]
struct Args {
    /// Path to event data
    #[arg(long, default_value = "events.txt")]
    file: PathBuf,

    /// Report as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    if let Err(e) = run(&args) {
        tracing::error!("event-report failed: {:#}", e);
        match e.downcast_ref::<InviteError>() {
            Some(invite_error) => {
                eprintln!("❌ {}", invite_error.user_friendly_message());
                eprintln!("💡 {}", invite_error.recovery_suggestion());
                std::process::exit(invite_error.exit_code());
            }
            None => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    tracing::info!("Building event report for {}", today);

    let events = loader::load_events(&LocalStorage::default(), &args.file)
        .with_context(|| format!("loading events from {}", args.file.display()))?;
    tracing::info!("Loaded {} events", events.len());

    if events.is_empty() {
        return Ok(());
    }

    println!("{}", events::report(&events, today).join("\n"));
    Ok(())
}
