#![deny(missing_docs)]

//! # Clientgen CLI
//!
//! Command Line Interface for the typed client generator.
//!
//! Supported Commands:
//! - `java`: Generates a Java client (sources, or a Maven project) from an API description.

use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;

mod error;
mod java;
mod manifest;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Typed API client generator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a Java client.
    Java(java::JavaArgs),
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn main() -> CliResult<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Java(args) => java::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_java_flags() {
        let cli = Cli::try_parse_from([
            "clientgen",
            "java",
            "api.yaml",
            "--out",
            "build",
            "-s",
            "--snippet",
            "a.java",
            "--snippet",
            "b.java",
            "--version",
            "2.0",
        ])
        .unwrap();
        let Commands::Java(args) = cli.command;
        assert!(args.sources_only);
        assert_eq!(args.out, std::path::PathBuf::from("build"));
        assert_eq!(args.snippets.len(), 2);
        assert_eq!(args.project_version.as_deref(), Some("2.0"));
    }
}
