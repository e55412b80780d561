use anyhow::Context;
use clap::Parser;
use learning_patterns::utils::error::ErrorSeverity;
use learning_patterns::utils::{logger, validation::Validate};
use learning_patterns::{build_demo, CliConfig, DemoKind, DemoRunner, DemoSettings};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting learning-patterns CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Invalid arguments: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.list {
        for kind in DemoKind::ALL {
            println!("{:<16} {}", kind.cli_name(), kind.summary());
        }
        return Ok(());
    }

    let settings = match &config.config {
        Some(path) => DemoSettings::from_file(path)
            .with_context(|| format!("Failed to load settings from '{}'", path.display()))?,
        None => DemoSettings::default(),
    };

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let kind = config.selected_demo(&settings);
    let runner = DemoRunner::new(build_demo(kind, &settings));

    let outcome = {
        let mut out = io::stdout().lock();
        runner.run(&mut out)
    };

    if let Err(e) = outcome {
        tracing::error!(
            "{} demo failed: {} (Category: {:?}, Severity: {:?})",
            kind,
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    let linger = config.linger(&settings);
    if !linger.is_zero() {
        tracing::info!("Waiting {:?} before exit", linger);
        std::thread::sleep(linger);
    }

    Ok(())
}
