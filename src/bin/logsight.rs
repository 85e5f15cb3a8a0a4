use clap::Parser;
use logsight::config::{CliConfig, Config};
use logsight::reporting::logging;
use logsight::reporting::{HtmlDashboard, build_dashboard};
use logsight::server;
use logsight::ui::{Cli, cli_to_config};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_logsight_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main dashboard logic extracted from main() for testing
pub async fn run_logsight_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;
    config.validate()?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    match config.output_path.clone() {
        Some(output_path) => {
            write_dashboard(&config, &output_path)?;
            Ok(0)
        }
        None => {
            server::serve(config).await?;
            Ok(0)
        }
    }
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
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

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    Ok(config)
}

/// Render the dashboard once and write it to `output_path`
pub fn write_dashboard(config: &Config, output_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data = build_dashboard(config)?;
    HtmlDashboard::generate_dashboard(&data, output_path)?;
    println!("Dashboard written to {output_path}");
    Ok(())
}
