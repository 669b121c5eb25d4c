use clap::Parser;
use joke_teller::utils::{logger, validation::Validate};
use joke_teller::{CliConfig, ConsoleReporter, GatewayRobot, HttpJokeApi, JokeEngine, JokeError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting joke-teller CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let source = HttpJokeApi::new(config.api_endpoint.clone());
    let robot = GatewayRobot::new(config.gateway.clone());
    let engine = JokeEngine::new(source, ConsoleReporter::new(), robot, config.serial.clone());

    match engine.run().await {
        Ok(()) => {
            tracing::info!("✅ Joke delivered");
        }
        // Recovered locally: fixed message, no further output, success exit.
        Err(e @ JokeError::ApiUnavailable { .. }) => {
            tracing::warn!("Joke API unavailable: {}", e);
            println!("{}", e.user_friendly_message());
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                joke_teller::utils::error::ErrorSeverity::Low => 0,
                joke_teller::utils::error::ErrorSeverity::Medium => 2,
                joke_teller::utils::error::ErrorSeverity::High => 1,
                joke_teller::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
