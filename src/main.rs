use clap::Parser;
use geo_invite::utils::{logger, validation::Validate};
use geo_invite::{CliConfig, InviteEngine, InviteError, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting geo-invite");
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            tracing::error!(
                "geo-invite failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(config: &CliConfig) -> Result<String, InviteError> {
    let settings = config.resolve()?;
    settings.validate()?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let engine = InviteEngine::new(LocalStorage::default());
    engine.run(&settings, settings.format)
}
