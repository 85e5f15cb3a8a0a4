/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal values shared between extraction,
/// analysis, rendering and configuration.
/// Log entry and record constants
pub mod records {
    /// Pattern for one log entry: microsecond timestamp, one space, rest of the line
    pub const ENTRY_PATTERN: &str = r"(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{6}) (.*)";
    /// Pattern for the action marker inside a message
    pub const ACTION_PATTERN: &str = r"action=([^ ]*)";
    /// chrono format matching the timestamp captured by `ENTRY_PATTERN`
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
    /// Earliest timestamp kept; older entries are dropped like unparsable ones
    pub const MIN_TIMESTAMP: &str = "1677-09-21T00:12:43.145225";
    /// Latest timestamp kept
    pub const MAX_TIMESTAMP: &str = "2262-04-11T23:47:16.854775";
    /// User assigned when a message has fewer than two tokens
    pub const UNKNOWN_USER: &str = "unknown";
    /// Action assigned when a message carries no action marker.
    ///
    /// This conflates "no action recorded" with an actual login action.
    /// Kept as-is because the dashboard's action breakdown depends on it.
    pub const FALLBACK_ACTION: &str = "login";
}

/// Calendar constants
pub mod calendar {
    /// Weekday names in dashboard order
    pub const WEEKDAYS: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
    /// Labels of the four equal-width hour bins
    pub const PERIODS: [&str; 4] = ["Early", "Morning", "Afternoon", "Night"];
}

/// Statistical estimation constants
pub mod stats {
    /// Number of evaluation points of the message length density curve
    pub const DENSITY_GRID_SIZE: usize = 200;
    /// Bandwidths beyond the data range covered by the density curve
    pub const DENSITY_CUT: f64 = 3.0;
    /// Number of evaluation points of each violin outline
    pub const VIOLIN_GRID_SIZE: usize = 100;
    /// Bandwidths beyond the data range covered by a violin
    pub const VIOLIN_CUT: f64 = 2.0;
    /// Whisker reach as a multiple of the interquartile range
    pub const WHISKER_IQR: f64 = 1.5;
    /// Relative widening applied to the outer edges of hour bins
    pub const BIN_EDGE_ADJUST: f64 = 0.001;
}

/// Configuration defaults
pub mod defaults {
    /// Log file read on every request, relative to the working directory
    pub const LOG_FILE: &str = "assignment_prod.log";
    /// Address the dashboard server binds to
    pub const ADDR: &str = "127.0.0.1:5000";
    /// Default chart width in pixels
    pub const CHART_WIDTH: u32 = 800;
    /// Default chart height in pixels
    pub const CHART_HEIGHT: u32 = 500;
    /// Largest accepted chart dimension in pixels
    pub const MAX_CHART_DIMENSION: u32 = 4000;
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".logsight.toml";
    /// Parent directories searched for the config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// HTTP constants
pub mod http {
    /// The only route served
    pub const DASHBOARD_ROUTE: &str = "/";
    /// MIME type of the embedded chart images
    pub const CHART_MIME: &str = "image/svg+xml";
}
