//! Folio CLI
//!
//! Validates and builds the content collections of a portfolio/blog site.
//!
//! This is the binary entry point. The command implementations are in
//! `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Folio.
#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Typed content collections for a portfolio site"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Validate content and write the manifest and theme stylesheet
    Build {
        /// Output directory
        #[arg(short, long, default_value = "public")]
        output: std::path::PathBuf,
        /// Fail the build on the first invalid entry
        #[arg(long)]
        strict: bool,
        /// Override site host (e.g., https://example.com)
        #[arg(long)]
        host: Option<String>,
        /// Override site base path (e.g., /my-portfolio)
        #[arg(long)]
        base_path: Option<String>,
    },
    /// Validate configuration and every content entry
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    folio::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            output,
            strict,
            host,
            base_path,
        } => {
            folio::cmd::build::run(
                &cli.config,
                &output,
                strict,
                host.as_deref(),
                base_path.as_deref(),
            )?;
        }
        Commands::Check { strict } => {
            folio::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_build_command_parsing() {
        let args = ["folio", "build", "--output", "dist"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("config.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Build {
                output,
                strict,
                host,
                base_path,
            } => {
                assert_eq!(output, std::path::PathBuf::from("dist"));
                assert!(!strict);
                assert!(host.is_none());
                assert!(base_path.is_none());
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_strict_flag() {
        let args = ["folio", "build", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Build { strict, .. } => assert!(strict),
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_with_host_and_base_path() {
        let args = [
            "folio",
            "build",
            "--host",
            "https://example.com",
            "--base-path",
            "/portfolio",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Build {
                host, base_path, ..
            } => {
                assert_eq!(host.as_deref(), Some("https://example.com"));
                assert_eq!(base_path.as_deref(), Some("/portfolio"));
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["folio", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["folio", "-vvv", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["folio", "--config", "site.toml", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
