//! logsight - turn an application log into a dashboard of charts
//!
//! The crate reads a plain-text log, extracts timestamped entries into
//! records, aggregates them and renders seven SVG charts into one HTML
//! page, served over HTTP or written to a file.
//!
//! - [`extraction`]: raw text to [`extraction::LogRecord`]s
//! - [`analysis`]: grouped statistics over the records
//! - [`reporting`]: chart drawing, the HTML page and logging helpers
//! - [`server`]: the axum router serving the page
//! - [`config`] and [`ui`]: configuration file and command line
//! - [`core`]: error type and constants

pub mod analysis;
pub mod config;
pub mod core;
pub mod extraction;
pub mod reporting;
pub mod server;
pub mod ui;

// Re-export commonly used items
pub use analysis::Aggregates;
pub use config::{CliConfig, Config};
pub use crate::core::{LogSightError, Result};
pub use extraction::{LogRecord, parse_log_file};
pub use reporting::{DashboardData, HtmlDashboard, build_dashboard};
