use base64::{Engine as _, engine::general_purpose::STANDARD};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::core::constants::http::CHART_MIME;
use crate::core::error::Result;

/// Drawing area handed to a chart body, below its title
pub type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// The seven dashboard charts, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    LengthByHour,
    MeanLengthByWeekday,
    ActionsByWeekday,
    Correlation,
    DailyTrend,
    LengthDensity,
    LengthByPeriod,
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        ChartKind::LengthByHour,
        ChartKind::MeanLengthByWeekday,
        ChartKind::ActionsByWeekday,
        ChartKind::Correlation,
        ChartKind::DailyTrend,
        ChartKind::LengthDensity,
        ChartKind::LengthByPeriod,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::LengthByHour => "Log Count Distribution by Hour",
            ChartKind::MeanLengthByWeekday => "Average Log Message Length by Weekday",
            ChartKind::ActionsByWeekday => "Action Types by Weekday",
            ChartKind::Correlation => "Correlation Matrix",
            ChartKind::DailyTrend => "Daily Log Count Trend",
            ChartKind::LengthDensity => "Density of Log Message Lengths",
            ChartKind::LengthByPeriod => "Message Length by Time Period",
        }
    }

    pub fn x_label(self) -> &'static str {
        match self {
            ChartKind::LengthByHour => "Hour",
            ChartKind::MeanLengthByWeekday | ChartKind::ActionsByWeekday => "Weekday",
            ChartKind::Correlation => "",
            ChartKind::DailyTrend => "Date",
            ChartKind::LengthDensity => "Log Message Length",
            ChartKind::LengthByPeriod => "Time Period",
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            ChartKind::LengthByHour | ChartKind::LengthByPeriod => "Log Message Length",
            ChartKind::MeanLengthByWeekday => "Average Log Message Length",
            ChartKind::ActionsByWeekday => "Count",
            ChartKind::Correlation => "",
            ChartKind::DailyTrend => "Log Count",
            ChartKind::LengthDensity => "Density",
        }
    }

    /// Pixel size given the configured base size; the grouped bar chart is wider.
    pub fn size(self, (width, height): (u32, u32)) -> (u32, u32) {
        match self {
            ChartKind::ActionsByWeekday => (width * 5 / 4, height * 6 / 5),
            _ => (width, height),
        }
    }
}

/// One rendered chart as a base64 SVG payload
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedChart {
    pub kind: ChartKind,
    pub svg_base64: String,
}

impl EncodedChart {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Self-contained `data:` URI usable as an `<img>` source
    pub fn data_uri(&self) -> String {
        format!("data:{CHART_MIME};base64,{}", self.svg_base64)
    }
}

/// Drawing context owned by exactly one chart.
///
/// The SVG buffer lives inside the canvas and the canvas is consumed by
/// `render`, so no drawing state outlives the chart it was created for.
pub struct ChartCanvas {
    kind: ChartKind,
    size: (u32, u32),
    svg: String,
}

impl ChartCanvas {
    pub fn new(kind: ChartKind, base_size: (u32, u32)) -> Self {
        Self {
            kind,
            size: kind.size(base_size),
            svg: String::new(),
        }
    }

    /// Fill the background, draw the title, run `draw` on the remaining
    /// area and encode the finished SVG.
    pub fn render<F>(mut self, draw: F) -> Result<EncodedChart>
    where
        F: FnOnce(&Area<'_>) -> Result<()>,
    {
        {
            let root = SVGBackend::with_string(&mut self.svg, self.size).into_drawing_area();
            root.fill(&WHITE)?;
            let body = root.titled(self.kind.title(), ("sans-serif", 20.0))?;
            draw(&body)?;
            root.present()?;
        }

        Ok(EncodedChart {
            kind: self.kind,
            svg_base64: STANDARD.encode(self.svg.as_bytes()),
        })
    }
}
