use clap::Parser;

use cdnmap::config::{CliConfig, Config};
use cdnmap::core::constants::defaults;
use cdnmap::logging;
use cdnmap::ui::{Cli, cli_to_config};
use cdnmap::{MappingGenerator, SafetyValidator, output};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    match run_cdnmap_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main mapping logic extracted from main() for testing
pub fn run_cdnmap_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    // Load and merge configuration (CLI takes precedence)
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);

    // Resolve the input to an absolute path and vet it before walking
    let input_dir = resolve_input_dir(&cli.input)?;
    let validator = match config.deny_paths_as_paths() {
        Some(deny_paths) => SafetyValidator::new(deny_paths),
        None => SafetyValidator::with_defaults(),
    };
    validator.validate(&input_dir).inspect_err(|e| {
        logging::log_error("Input path rejected", Some(e));
    })?;

    let base_url = config.base_url.as_deref().unwrap_or(defaults::BASE_URL);
    let url_path = config.url_path.as_deref().unwrap_or(defaults::URL_PATH);
    let prefix = config.prefix.as_deref().unwrap_or(defaults::KEY_PREFIX);
    let output_path = config.output.as_deref().unwrap_or(defaults::OUTPUT_FILE);

    logging::log_generator_info(base_url, url_path, prefix);
    logging::log_scan_start(&input_dir);

    let generator = MappingGenerator::new(base_url, url_path, prefix);
    let mapping = generator.generate(&input_dir).inspect_err(|e| {
        logging::log_error("Could not scan input directory", Some(e));
    })?;

    logging::log_scan_complete(mapping.len());
    for (key, url) in mapping.iter() {
        logging::log_record(key, url);
    }

    // Declining the overwrite prompt is a normal early exit, not an error
    let output_path = Path::new(output_path);
    if output_path.exists() && !cli_config.assume_yes && !confirm_overwrite(output_path)? {
        return Ok(0);
    }

    output::write_mapping(output_path, &mapping).inspect_err(|e| {
        logging::log_error("Could not write output file", Some(e));
    })?;

    if !cli_config.quiet {
        println!(
            "Wrote {} record(s) to {}",
            mapping.len(),
            output_path.display()
        );
    }

    Ok(0)
}

/// Load configuration from file or standard locations
pub fn load_and_merge_config(
    cli_config: &CliConfig,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Resolve the input argument to a canonical absolute path
fn resolve_input_dir(input: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    fs::canonicalize(input)
        .map_err(|e| format!("Could not resolve input path '{input}': {e}").into())
}

/// Run the overwrite prompt against the process stdin/stdout.
/// With no input available the read yields EOF, which declines.
fn confirm_overwrite(path: &Path) -> io::Result<bool> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    output::confirm_overwrite(path, &mut stdin.lock(), &mut stdout.lock())
}
