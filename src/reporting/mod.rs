//! Chart rendering and reporting
//!
//! This module draws the dashboard charts, assembles them into an HTML
//! page, and provides structured logging for the application.

pub mod canvas;
pub mod charts;
pub mod dashboard;
pub mod logging;

// Re-export commonly used items
pub use canvas::{ChartCanvas, ChartKind, EncodedChart};
pub use charts::render_charts;
pub use dashboard::{DashboardData, HtmlDashboard, build_dashboard};
