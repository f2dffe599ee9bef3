use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "fixture-discovery")]
#[command(about = "Discover test fixtures from declared types and print the composed suite tree", long_about = None)]
pub struct Args {
    /// Only build fixtures whose type name contains this substring
    #[arg(long, value_name = "NAME")]
    pub filter: Option<String>,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref filter) = self.filter {
            if filter.trim().is_empty() {
                anyhow::bail!("Filter must not be empty");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_is_rejected() {
        let args = Args {
            filter: Some("  ".to_string()),
            output_file: None,
            format: OutputFormat::Text,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn missing_filter_is_fine() {
        let args = Args {
            filter: None,
            output_file: None,
            format: OutputFormat::Json,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());
    }
}
