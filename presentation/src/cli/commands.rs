//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use umweltzone_domain::Locale;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for umweltzone
#[derive(Parser, Debug)]
#[command(name = "umweltzone")]
#[command(author, version, about = "Low emission zones in Germany - FAQs, zones and boundaries")]
#[command(long_about = r#"
Umweltzone reads the bundled low emission zone datasets: FAQs, the list of
zones, and the boundary circuits of each zone.

Datasets are read from <root>/<folder>/<name>.json, e.g. res/raw/zones_de.json.

Configuration files are loaded from (in priority order):
1. UMWELTZONE_* environment variables
2. --config <path>          Explicit config file
3. ./umweltzone.toml        Project-level config
4. ~/.config/umweltzone/config.toml   Global config

Example:
  umweltzone zones
  umweltzone --locale de_DE faqs
  umweltzone -o json circuits berlin stuttgart
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Locale tag, e.g. de_DE (defaults to config, then environment)
    #[arg(long, value_name = "TAG")]
    pub locale: Option<Locale>,

    /// Directory holding the resource folders
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the FAQs for the active locale
    Faqs,
    /// List all low emission zones
    Zones,
    /// Show the details of one zone
    Zone {
        /// Logical zone name, e.g. berlin
        name: String,
    },
    /// Show the boundary circuits of one or more zones
    Circuits {
        /// Logical zone names, e.g. berlin
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_circuits_with_options() {
        let cli = Cli::try_parse_from([
            "umweltzone",
            "--locale",
            "de_DE",
            "-o",
            "json",
            "-vv",
            "circuits",
            "berlin",
            "stuttgart",
        ])
        .unwrap();

        assert_eq!(cli.locale, Some(Locale::germany()));
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.command,
            Some(Command::Circuits {
                names: vec!["berlin".to_string(), "stuttgart".to_string()]
            })
        );
    }

    #[test]
    fn test_invalid_locale_is_rejected() {
        assert!(Cli::try_parse_from(["umweltzone", "--locale", "germany", "faqs"]).is_err());
    }

    #[test]
    fn test_circuits_requires_a_name() {
        assert!(Cli::try_parse_from(["umweltzone", "circuits"]).is_err());
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::try_parse_from(["umweltzone", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
