use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Fetch board game metadata from BoardGameGeek.
#[derive(Debug, Parser)]
#[command(name = "boardfetch", version)]
pub struct Cli {
    /// Configuration file (default: $BOARDFETCH_CONFIG or ./boardfetch.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up games by exact name
    Lookup {
        /// Game names, matched exactly against catalog titles
        #[arg(required = true)]
        names: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Look up every game listed in a CSV file
    Batch {
        /// CSV file with a "Board Games" header column
        input: PathBuf,

        /// Write records here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::parse_from(["boardfetch", "lookup", "Catan", "Ticket to Ride"]);
        match cli.command {
            Command::Lookup { names, format } => {
                assert_eq!(names, vec!["Catan", "Ticket to Ride"]);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_batch_with_options() {
        let cli = Cli::parse_from([
            "boardfetch",
            "batch",
            "games.csv",
            "--output",
            "out.csv",
            "--format",
            "csv",
            "--config",
            "custom.toml",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Command::Batch {
                input,
                output,
                format,
            } => {
                assert_eq!(input, PathBuf::from("games.csv"));
                assert_eq!(output, Some(PathBuf::from("out.csv")));
                assert_eq!(format, OutputFormat::Csv);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_help_about_comes_from_doc_comment() {
        let command = Cli::command();
        let about = command.get_about().map(ToString::to_string);
        assert_eq!(
            about.as_deref(),
            Some("Fetch board game metadata from BoardGameGeek.")
        );
    }

    #[test]
    fn test_lookup_requires_a_name() {
        assert!(Cli::try_parse_from(["boardfetch", "lookup"]).is_err());
    }
}
