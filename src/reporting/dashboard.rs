use crate::analysis::{Aggregates, Summary};
use crate::config::Config;
use crate::core::error::Result;
use crate::extraction::parse_log_file;
use crate::reporting::canvas::EncodedChart;
use crate::reporting::charts::render_charts;
use crate::reporting::logging;
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Constants for dashboard styling and layout
mod dashboard_constants {
    /// Page title shown in the browser tab
    pub const PAGE_TITLE: &str = "Log Dashboard - logsight";

    /// Format for the first/last entry cards
    pub const SEEN_FORMAT: &str = "%Y-%m-%d %H:%M";

    /// Placeholder for cards with nothing to show
    pub const EMPTY_VALUE: &str = "-";
}

/// Everything needed to render one dashboard page
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// Totals shown in the stat cards
    pub summary: Summary,
    /// The seven charts, in display order
    pub charts: Vec<EncodedChart>,
    /// Log file the page was built from
    pub source: String,
    /// Timestamp when the dashboard was generated
    pub timestamp: String,
}

/// Read, extract, aggregate and render a fresh dashboard.
///
/// Nothing is cached: every call re-reads the log file.
pub fn build_dashboard(config: &Config) -> Result<DashboardData> {
    let started = Instant::now();
    let path = config.log_file_path();

    let records = parse_log_file(&path)?;
    if records.is_empty() {
        logging::log_warning(&format!("No log entries found in {}", path.display()));
    }
    let aggregates = Aggregates::from_records(&records);
    let charts = render_charts(&aggregates, config)?;

    logging::log_render_complete(records.len(), charts.len(), started.elapsed().as_millis());

    Ok(DashboardData {
        summary: aggregates.summary,
        charts,
        source: path.display().to_string(),
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}

/// HTML dashboard generator for log analysis results
pub struct HtmlDashboard;

impl HtmlDashboard {
    /// Generate and write an HTML dashboard to the specified path
    pub fn generate_dashboard<P: AsRef<Path>>(data: &DashboardData, output_path: P) -> Result<()> {
        fs::write(output_path, Self::render(data))?;
        Ok(())
    }

    /// Generate the complete HTML document
    pub fn render(data: &DashboardData) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>{}</style>
</head>
<body>
    {}
</body>
</html>"#,
            dashboard_constants::PAGE_TITLE,
            Self::generate_css(),
            Self::generate_body_content(data)
        )
    }

    fn generate_css() -> &'static str {
        r#"
        :root {
            --primary-color: #2563eb;
            --bg-color: #f8fafc;
            --card-bg: #ffffff;
            --border-color: #e2e8f0;
            --text-primary: #1e293b;
            --text-secondary: #64748b;
        }

        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background-color: var(--bg-color);
            color: var(--text-primary);
            line-height: 1.6;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 2rem;
        }

        .header {
            text-align: center;
            margin-bottom: 3rem;
            padding: 2rem;
            background: linear-gradient(135deg, var(--primary-color), #3b82f6);
            color: white;
            border-radius: 12px;
            box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
        }

        .header h1 {
            font-size: 2.5rem;
            margin-bottom: 0.5rem;
            font-weight: 700;
        }

        .header p {
            font-size: 1.1rem;
            opacity: 0.9;
        }

        .stats-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 1.5rem;
            margin-bottom: 3rem;
        }

        .stat-card {
            background: var(--card-bg);
            padding: 1.5rem;
            border-radius: 12px;
            border: 1px solid var(--border-color);
            box-shadow: 0 2px 4px -1px rgba(0, 0, 0, 0.06);
        }

        .stat-value {
            font-size: 1.5rem;
            font-weight: 700;
            margin-bottom: 0.5rem;
        }

        .stat-label {
            color: var(--text-secondary);
            font-size: 0.9rem;
            text-transform: uppercase;
            letter-spacing: 0.5px;
        }

        .chart-container {
            background: var(--card-bg);
            padding: 2rem;
            border-radius: 12px;
            border: 1px solid var(--border-color);
            margin-bottom: 2rem;
            box-shadow: 0 2px 4px -1px rgba(0, 0, 0, 0.06);
            text-align: center;
        }

        .chart-title {
            font-size: 1.25rem;
            font-weight: 600;
            margin-bottom: 1rem;
        }

        .chart-container img {
            max-width: 100%;
            height: auto;
        }

        @media (max-width: 768px) {
            .container { padding: 1rem; }
            .header h1 { font-size: 2rem; }
            .stats-grid { grid-template-columns: 1fr; }
            .chart-container { padding: 1rem; }
        }
        "#
    }

    fn generate_body_content(data: &DashboardData) -> String {
        format!(
            r#"
            <div class="container">
                {}
                {}
                {}
            </div>
            "#,
            Self::generate_header_section(&data.source, &data.timestamp),
            Self::generate_stats_section(&data.summary),
            Self::generate_charts_section(&data.charts)
        )
    }

    fn generate_header_section(source: &str, timestamp: &str) -> String {
        format!(
            r#"
            <div class="header">
                <h1>Log Analysis Dashboard</h1>
                <p>{} &middot; generated on {}</p>
            </div>
            "#,
            escape_html(source),
            escape_html(timestamp)
        )
    }

    fn generate_stats_section(summary: &Summary) -> String {
        format!(
            r#"
            <div class="stats-grid">
                {}
                {}
                {}
                {}
                {}
            </div>
            "#,
            Self::generate_stat_card(&summary.record_count.to_string(), "Log Entries"),
            Self::generate_stat_card(&summary.distinct_users.to_string(), "Users"),
            Self::generate_stat_card(&summary.distinct_actions.to_string(), "Action Types"),
            Self::generate_stat_card(&format_seen(summary.first_seen), "First Entry"),
            Self::generate_stat_card(&format_seen(summary.last_seen), "Last Entry"),
        )
    }

    fn generate_stat_card(value: &str, label: &str) -> String {
        format!(
            r#"<div class="stat-card">
                    <div class="stat-value">{}</div>
                    <div class="stat-label">{}</div>
                </div>"#,
            escape_html(value),
            escape_html(label)
        )
    }

    fn generate_charts_section(charts: &[EncodedChart]) -> String {
        charts
            .iter()
            .map(|chart| {
                format!(
                    r#"
                <div class="chart-container">
                    <div class="chart-title">{title}</div>
                    <img src="{}" alt="{title}">
                </div>"#,
                    chart.data_uri(),
                    title = escape_html(chart.title())
                )
            })
            .collect()
    }
}

fn format_seen(seen: Option<NaiveDateTime>) -> String {
    seen.map(|ts| ts.format(dashboard_constants::SEEN_FORMAT).to_string())
        .unwrap_or_else(|| dashboard_constants::EMPTY_VALUE.to_string())
}

/// Escape text for use inside HTML element content and attribute values
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LogSightError;
    use crate::reporting::canvas::ChartKind;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn create_test_dashboard_data() -> DashboardData {
        DashboardData {
            summary: Summary {
                record_count: 3,
                distinct_users: 2,
                distinct_actions: 2,
                first_seen: NaiveDateTime::parse_from_str(
                    "2024-01-01T10:00:00",
                    "%Y-%m-%dT%H:%M:%S",
                )
                .ok(),
                last_seen: NaiveDateTime::parse_from_str(
                    "2024-01-02T18:30:00",
                    "%Y-%m-%dT%H:%M:%S",
                )
                .ok(),
            },
            charts: ChartKind::ALL
                .iter()
                .map(|&kind| EncodedChart {
                    kind,
                    svg_base64: "PHN2Zy8+".to_string(),
                })
                .collect(),
            source: "assignment_prod.log".to_string(),
            timestamp: "2024-01-03 09:00:00".to_string(),
        }
    }

    fn config_for(path: &Path) -> Config {
        Config {
            log_file: Some(path.display().to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_render_embeds_every_chart() {
        let html = HtmlDashboard::render(&create_test_dashboard_data());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("<img").count(), 7);
        assert_eq!(
            html.matches("src=\"data:image/svg+xml;base64,PHN2Zy8+\"").count(),
            7
        );
        for kind in ChartKind::ALL {
            assert!(html.contains(kind.title()));
        }
    }

    #[test]
    fn test_render_keeps_chart_order() {
        let html = HtmlDashboard::render(&create_test_dashboard_data());

        let positions: Vec<usize> = ChartKind::ALL
            .iter()
            .map(|kind| html.find(kind.title()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_generate_stats_section() {
        let data = create_test_dashboard_data();
        let section = HtmlDashboard::generate_stats_section(&data.summary);

        assert!(section.contains("Log Entries"));
        assert!(section.contains(">3<"));
        assert!(section.contains("2024-01-01 10:00"));
        assert!(section.contains("2024-01-02 18:30"));
    }

    #[test]
    fn test_generate_stats_section_empty_summary() {
        let section = HtmlDashboard::generate_stats_section(&Summary::default());

        assert!(section.contains(">0<"));
        assert_eq!(section.matches(">-<").count(), 2);
    }

    #[test]
    fn test_generate_header_section_escapes_source() {
        let header = HtmlDashboard::generate_header_section("<logs>&co", "now");

        assert!(header.contains("&lt;logs&gt;&amp;co"));
        assert!(!header.contains("<logs>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_generate_dashboard_file_creation() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let temp_dir = TempDir::new()?;
        let output_path = temp_dir.path().join("dashboard.html");

        HtmlDashboard::generate_dashboard(&create_test_dashboard_data(), &output_path)?;

        let content = fs::read_to_string(&output_path)?;
        assert!(content.contains("Log Analysis Dashboard"));
        assert_eq!(content.matches("<img").count(), 7);
        Ok(())
    }

    #[test]
    fn test_generate_dashboard_unwritable_path() {
        let result = HtmlDashboard::generate_dashboard(
            &create_test_dashboard_data(),
            "/nonexistent/directory/dashboard.html",
        );

        assert!(matches!(result, Err(LogSightError::Io(_))));
    }

    #[test]
    fn test_build_dashboard_from_log_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "2024-01-01T10:00:00.000000 alice action=login").unwrap();
        writeln!(file, "2024-01-01T11:30:00.000000 bob action=upload file.txt").unwrap();
        writeln!(file, "garbage text").unwrap();
        writeln!(file, "2024-01-02T18:45:00.000000 alice action=upload big.bin").unwrap();
        file.flush().unwrap();

        let data = build_dashboard(&config_for(file.path())).unwrap();

        assert_eq!(data.summary.record_count, 3);
        assert_eq!(data.summary.distinct_users, 2);
        assert_eq!(data.summary.distinct_actions, 2);
        assert_eq!(data.charts.len(), 7);
        assert_eq!(data.source, file.path().display().to_string());
    }

    #[test]
    fn test_build_dashboard_empty_file() {
        let file = NamedTempFile::new().unwrap();

        let data = build_dashboard(&config_for(file.path())).unwrap();

        assert_eq!(data.summary.record_count, 0);
        assert_eq!(data.charts.len(), 7);
    }

    #[test]
    fn test_build_dashboard_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.log");

        let result = build_dashboard(&config_for(&missing));

        assert!(matches!(result, Err(LogSightError::Io(_))));
    }
}
