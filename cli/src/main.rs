//! CLI entrypoint for umweltzone
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use umweltzone_application::{ContentConfig, ContentLoader, ContentProvider, DiagnosticsSink};
use umweltzone_domain::Circuit;
use umweltzone_infrastructure::{
    ConfigError, ConfigLoader, DirectoryResourceBundle, FileConfig, JsonlDiagnosticsLog,
    Severity, TracingDiagnostics,
};
use umweltzone_presentation::{Cli, Command, ConsoleFormatter, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        println!("{}", ConfigLoader::describe_config_sources());
        return Ok(());
    }

    let mut file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).map_err(ConfigError::from)?
    };
    if let Some(root) = &cli.root {
        file_config.content.root = root.clone();
    }
    check_config(&file_config)?;

    let Some(command) = cli.command else {
        bail!("No command given. Use --help to list the commands.");
    };

    let content_config = file_config.to_content_config(cli.locale.clone())?;
    info!(
        "Reading content from {} with locale {}",
        file_config.content.root.display(),
        content_config.locale
    );

    // === Dependency Injection ===
    let bundle = Arc::new(DirectoryResourceBundle::new(&file_config.content.root));
    let loader = ContentLoader::from_bundle(bundle, &content_config)?
        .with_diagnostics(diagnostics_sink(&file_config));
    let provider = ContentProvider::new(loader, &content_config)?;

    run(&provider, &content_config, command, cli.output)
}

fn check_config(config: &FileConfig) -> Result<()> {
    let mut has_errors = false;
    for issue in config.validate() {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => {
                error!("{}", issue.message);
                has_errors = true;
            }
        }
    }
    if has_errors {
        bail!("Invalid configuration");
    }
    Ok(())
}

fn diagnostics_sink(config: &FileConfig) -> Arc<dyn DiagnosticsSink> {
    if let Some(path) = &config.diagnostics.jsonl_path
        && let Some(log) = JsonlDiagnosticsLog::new(path)
    {
        info!("Recording content errors to {}", log.path().display());
        return Arc::new(log);
    }
    Arc::new(TracingDiagnostics::new())
}

fn run(
    provider: &ContentProvider,
    config: &ContentConfig,
    command: Command,
    output: OutputFormat,
) -> Result<()> {
    match command {
        Command::Faqs => {
            let faqs = provider.get_faqs()?;
            match output {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_faqs(&faqs)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&faqs)),
            }
        }
        Command::Zones => {
            let zones = provider.get_low_emission_zones()?;
            match output {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_zones(&zones)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&zones)),
            }
        }
        Command::Zone { name } => {
            let zone = provider.get_zone(&name)?;
            match output {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_zone(&zone)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&zone)),
            }
        }
        Command::Circuits { names } => run_circuits(provider, config, &names, output)?,
    }
    Ok(())
}

/// Print the circuits of each zone. A zone whose dataset cannot be decoded
/// is reported and skipped; a missing dataset stops the command.
fn run_circuits(
    provider: &ContentProvider,
    config: &ContentConfig,
    names: &[String],
    output: OutputFormat,
) -> Result<()> {
    let pattern = config.date_pattern();
    let mut loaded = Vec::new();
    let mut failed = Vec::new();

    for name in names {
        let circuits = match provider.get_circuits(name) {
            Ok(circuits) => circuits,
            Err(e) if e.is_fatal() => return Err(e.into()),
            Err(e) => {
                eprintln!("{}", e);
                failed.push(name.as_str());
                continue;
            }
        };

        if output == OutputFormat::Text {
            println!(
                "{}",
                ConsoleFormatter::format_circuits(name, &circuits, &pattern)
            );
        }
        loaded.push((name.as_str(), circuits));
    }

    if output == OutputFormat::Json {
        let entries: Vec<(&str, &[Circuit])> = loaded
            .iter()
            .map(|(name, circuits)| (*name, circuits.as_slice()))
            .collect();
        println!("{}", ConsoleFormatter::format_circuits_json(&entries));
    }

    info!("{} zones resident in the circuit cache", provider.cached_zone_count());

    if !failed.is_empty() {
        bail!("Could not decode circuits of: {}", failed.join(", "));
    }
    Ok(())
}
