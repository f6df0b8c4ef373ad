// Command-line interface definitions and parsing for cdnmap

use crate::config::CliConfig;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Core Options
    /// Root directory to scan for image files
    #[arg(short = 'i', long, value_name = "DIR", help_heading = "Core Options")]
    pub input: String,

    /// Destination file for the JSON mapping (default: output.json)
    #[arg(short = 'o', long, value_name = "FILE", help_heading = "Core Options")]
    pub output: Option<String>,

    // URL & Key Construction
    /// CDN base URL prefix for generated links
    #[arg(short = 'u', long, value_name = "URL", help_heading = "URL & Key Construction")]
    pub url: Option<String>,

    /// Key prefix joined with an underscore (default: Celeste)
    #[arg(short = 'p', long, value_name = "PREFIX", help_heading = "URL & Key Construction")]
    pub prefix: Option<String>,

    /// URL path segment between base URL and file name (default: C)
    #[arg(
        long = "url-path",
        alias = "up",
        value_name = "SEGMENT",
        help_heading = "URL & Key Construction"
    )]
    pub url_path: Option<String>,

    // Output & Verbosity
    /// Overwrite an existing output file without prompting
    #[arg(short = 'y', long, help_heading = "Output & Verbosity")]
    pub yes: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Suppress informational output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed CLI arguments into a CliConfig for merging
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        base_url: cli.url.clone(),
        url_path: cli.url_path.clone(),
        prefix: cli.prefix.clone(),
        output: cli.output.clone(),
        verbose: cli.verbose,
        quiet: cli.quiet,
        assume_yes: cli.yes,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
