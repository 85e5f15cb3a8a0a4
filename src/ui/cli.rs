// Command-line interface definitions and parsing for logsight

use crate::config::CliConfig;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Input & Server
    /// Log file to analyse (default: assignment_prod.log)
    #[arg(long, value_name = "PATH", help_heading = "Input & Server")]
    pub log_file: Option<String>,

    /// Address to serve the dashboard on (default: 127.0.0.1:5000)
    #[arg(long, value_name = "ADDR", help_heading = "Input & Server")]
    pub addr: Option<String>,

    // Charts
    /// Chart width in pixels (default: 800)
    #[arg(long, value_name = "PX", help_heading = "Charts")]
    pub chart_width: Option<u32>,

    /// Chart height in pixels (default: 500)
    #[arg(long, value_name = "PX", help_heading = "Charts")]
    pub chart_height: Option<u32>,

    // Output & Verbosity
    /// Write the dashboard to an HTML file and exit instead of serving it
    #[arg(short = 'o', long, value_name = "PATH", help_heading = "Output & Verbosity")]
    pub output: Option<String>,

    /// Suppress log output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        log_file: cli.log_file.clone(),
        addr: cli.addr.clone(),
        chart_width: cli.chart_width,
        chart_height: cli.chart_height,
        output_path: cli.output.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
