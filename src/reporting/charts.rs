//! Chart bodies for the dashboard.
//!
//! Categorical axes are drawn on plain `f64` coordinates with one unit per
//! category; tick labels are mapped back to category names.

use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::iter;
use std::ops::Range;

use crate::analysis::{ActionTable, Aggregates, CorrelationMatrix, HourGroup, PeriodGroup};
use crate::config::Config;
use crate::core::constants::calendar;
use crate::core::error::Result;
use crate::reporting::canvas::{Area, ChartCanvas, ChartKind, EncodedChart};

const BOX_FILL: RGBColor = RGBColor(76, 114, 176);
const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const PURPLE: RGBColor = RGBColor(128, 0, 128);
const MUTED: RGBColor = RGBColor(140, 140, 140);
const UNDEFINED_CELL: RGBColor = RGBColor(220, 220, 220);

/// Colours for one series per action type, cycled
const SERIES_PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// One colour per time period
const PERIOD_PALETTE: [RGBColor; 4] = [
    RGBColor(247, 112, 137),
    RGBColor(163, 143, 49),
    RGBColor(54, 173, 164),
    RGBColor(160, 145, 244),
];

/// Anchor colours of the viridis map at 0, 0.25, 0.5, 0.75 and 1
const VIRIDIS: [(f64, f64, f64); 5] = [
    (68.0, 1.0, 84.0),
    (59.0, 82.0, 139.0),
    (33.0, 145.0, 140.0),
    (94.0, 201.0, 98.0),
    (253.0, 231.0, 37.0),
];

/// Render the seven charts in display order.
pub fn render_charts(aggregates: &Aggregates, config: &Config) -> Result<Vec<EncodedChart>> {
    let size = config.chart_size();

    ChartKind::ALL
        .iter()
        .map(|&kind| {
            let canvas = ChartCanvas::new(kind, size);
            match kind {
                ChartKind::LengthByHour => {
                    canvas.render(|area| draw_length_by_hour(area, kind, &aggregates.length_by_hour))
                }
                ChartKind::MeanLengthByWeekday => canvas.render(|area| {
                    draw_mean_length_by_weekday(area, kind, &aggregates.mean_length_by_weekday)
                }),
                ChartKind::ActionsByWeekday => canvas
                    .render(|area| draw_actions_by_weekday(area, kind, &aggregates.action_counts)),
                ChartKind::Correlation => {
                    canvas.render(|area| draw_correlation(area, &aggregates.correlation))
                }
                ChartKind::DailyTrend => {
                    canvas.render(|area| draw_daily_trend(area, kind, &aggregates.daily_counts))
                }
                ChartKind::LengthDensity => {
                    canvas.render(|area| draw_length_density(area, kind, &aggregates.length_density))
                }
                ChartKind::LengthByPeriod => canvas
                    .render(|area| draw_length_by_period(area, kind, &aggregates.length_by_period)),
            }
        })
        .collect()
}

/// Range covering `lo..hi` with a 5% margin; degenerate spans are widened.
fn padded_range(lo: f64, hi: f64) -> Range<f64> {
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return 0.0..1.0;
    }
    if hi - lo < 1e-9 {
        return (lo - 1.0)..(hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad)..(hi + pad)
}

/// Range from zero to a little above `max`
fn count_range(max: f64) -> Range<f64> {
    if max.is_finite() && max > 0.0 {
        0.0..max * 1.1
    } else {
        0.0..1.0
    }
}

fn category_range(count: usize) -> Range<f64> {
    -0.5..(count.max(1) as f64 - 0.5)
}

/// Name of the category at an integral tick, empty between categories
fn category_label(x: f64, names: &[String]) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    names.get(index as usize).cloned().unwrap_or_default()
}

fn weekday_names() -> Vec<String> {
    calendar::WEEKDAYS.iter().map(|d| d.to_string()).collect()
}

fn note_style() -> TextStyle<'static> {
    ("sans-serif", 16.0)
        .into_font()
        .color(&MUTED)
        .pos(Pos::new(HPos::Center, VPos::Center))
}

fn centre(x: &Range<f64>, y: &Range<f64>) -> (f64, f64) {
    ((x.start + x.end) / 2.0, (y.start + y.end) / 2.0)
}

fn draw_length_by_hour(area: &Area<'_>, kind: ChartKind, groups: &[HourGroup]) -> Result<()> {
    let names: Vec<String> = groups.iter().map(|g| g.hour.to_string()).collect();
    let (lo, hi) = groups
        .iter()
        .map(|g| g.stats.extent())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| {
            (lo.min(a), hi.max(b))
        });
    let x_range = category_range(groups.len());
    let y_range = padded_range(lo, hi);

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    let label = |x: &f64| category_label(*x, &names);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(groups.len().max(1))
        .x_label_formatter(&label)
        .x_desc(kind.x_label())
        .y_desc(kind.y_label())
        .draw()?;

    if groups.is_empty() {
        chart.draw_series(iter::once(Text::new(
            "No data",
            centre(&x_range, &y_range),
            note_style(),
        )))?;
        return Ok(());
    }

    const HALF: f64 = 0.3;
    let positioned = || groups.iter().enumerate().map(|(i, g)| (i as f64, &g.stats));

    chart.draw_series(positioned().map(|(x, s)| {
        Rectangle::new([(x - HALF, s.q1), (x + HALF, s.q3)], BOX_FILL.mix(0.8).filled())
    }))?;
    chart.draw_series(positioned().map(|(x, s)| {
        Rectangle::new([(x - HALF, s.q1), (x + HALF, s.q3)], BLACK.stroke_width(1))
    }))?;
    chart.draw_series(positioned().flat_map(|(x, s)| {
        [
            vec![(x, s.q1), (x, s.whisker_low)],
            vec![(x, s.q3), (x, s.whisker_high)],
            vec![(x - HALF / 2.0, s.whisker_low), (x + HALF / 2.0, s.whisker_low)],
            vec![(x - HALF / 2.0, s.whisker_high), (x + HALF / 2.0, s.whisker_high)],
        ]
        .map(|points| PathElement::new(points, BLACK.stroke_width(1)))
    }))?;
    chart.draw_series(positioned().map(|(x, s)| {
        PathElement::new(
            vec![(x - HALF, s.median), (x + HALF, s.median)],
            BLACK.stroke_width(2),
        )
    }))?;
    chart.draw_series(positioned().flat_map(|(x, s)| {
        s.outliers
            .iter()
            .map(move |&v| Circle::new((x, v), 3, BLACK.stroke_width(1)))
    }))?;

    Ok(())
}

fn draw_mean_length_by_weekday(
    area: &Area<'_>,
    kind: ChartKind,
    means: &[Option<f64>; 7],
) -> Result<()> {
    let names = weekday_names();
    let max = means.iter().flatten().copied().fold(f64::NEG_INFINITY, f64::max);
    let x_range = category_range(names.len());
    let y_range = count_range(max);

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    let label = |x: &f64| category_label(*x, &names);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len())
        .x_label_formatter(&label)
        .x_desc(kind.x_label())
        .y_desc(kind.y_label())
        .draw()?;

    // Absent weekdays keep their slot with no bar
    chart.draw_series(means.iter().enumerate().filter_map(|(i, mean)| {
        let x = i as f64;
        mean.map(|m| Rectangle::new([(x - 0.4, 0.0), (x + 0.4, m)], SKY_BLUE.filled()))
    }))?;

    if means.iter().all(Option::is_none) {
        chart.draw_series(iter::once(Text::new(
            "No data",
            centre(&x_range, &y_range),
            note_style(),
        )))?;
    }

    Ok(())
}

fn draw_actions_by_weekday(area: &Area<'_>, kind: ChartKind, table: &ActionTable) -> Result<()> {
    let names = weekday_names();
    let x_range = category_range(names.len());
    let y_range = count_range(table.max_count() as f64);

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    let label = |x: &f64| category_label(*x, &names);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len())
        .x_label_formatter(&label)
        .x_desc(kind.x_label())
        .y_desc(kind.y_label())
        .draw()?;

    if table.actions.is_empty() {
        chart.draw_series(iter::once(Text::new(
            "No data",
            centre(&x_range, &y_range),
            note_style(),
        )))?;
        return Ok(());
    }

    let width = 0.8 / table.actions.len() as f64;
    for (column, (action, counts)) in table.actions.iter().zip(&table.counts).enumerate() {
        let color = SERIES_PALETTE[column % SERIES_PALETTE.len()];
        let offset = -0.4 + width * column as f64;
        chart
            .draw_series(counts.iter().enumerate().map(|(day, &count)| {
                let x0 = day as f64 + offset;
                Rectangle::new([(x0, 0.0), (x0 + width, count as f64)], color.filled())
            }))?
            .label(action.clone())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

/// Position of `value` between `lo` and `hi`, 0 when the range is empty
fn colour_scale(value: f64, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Colour at `t` in 0..=1 on the viridis map
fn viridis(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0) * (VIRIDIS.len() - 1) as f64;
    let lower = (t.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = t - lower as f64;
    let (a, b) = (VIRIDIS[lower], VIRIDIS[lower + 1]);
    let lerp = |x: f64, y: f64| (x + (y - x) * frac).round() as u8;
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

fn draw_correlation(area: &Area<'_>, matrix: &CorrelationMatrix) -> Result<()> {
    let names: Vec<String> = matrix.labels.iter().map(|l| l.to_string()).collect();
    // Row 0 is drawn at the top
    let row_names: Vec<String> = names.iter().rev().cloned().collect();

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(140)
        .build_cartesian_2d(-0.5..1.5, -0.5..1.5)?;

    let x_label = |x: &f64| category_label(*x, &names);
    let y_label = |y: &f64| category_label(*y, &row_names);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(2)
        .y_labels(2)
        .x_label_formatter(&x_label)
        .y_label_formatter(&y_label)
        .draw()?;

    let cells = || {
        matrix.cells.iter().enumerate().flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(move |(col, value)| (col as f64, (1 - row) as f64, *value))
        })
    };

    // The colour map spans the defined coefficients only
    let (lo, hi) = cells()
        .filter_map(|(_, _, value)| value)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let scale = |v: f64| colour_scale(v, lo, hi);

    chart.draw_series(cells().map(|(x, y, value)| {
        let fill = value.map_or(UNDEFINED_CELL, |v| viridis(scale(v)));
        Rectangle::new([(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)], fill.filled())
    }))?;
    chart.draw_series(cells().map(|(x, y, value)| {
        let (text, color) = match value {
            Some(v) if scale(v) > 0.6 => (format!("{v:.2}"), BLACK),
            Some(v) => (format!("{v:.2}"), WHITE),
            None => ("n/a".to_string(), BLACK),
        };
        let style = ("sans-serif", 18.0)
            .into_font()
            .color(&color)
            .pos(Pos::new(HPos::Center, VPos::Center));
        Text::new(text, (x, y), style)
    }))?;

    Ok(())
}

fn draw_daily_trend(
    area: &Area<'_>,
    kind: ChartKind,
    counts: &[(NaiveDate, usize)],
) -> Result<()> {
    let start = counts.first().map(|(day, _)| *day);
    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let x_range = if counts.len() > 1 {
        0.0..(counts.len() - 1) as f64
    } else {
        -1.0..1.0
    };
    let y_range = count_range(max as f64);

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    let label = |x: &f64| {
        let offset = x.round();
        match start {
            Some(day) if (x - offset).abs() < 1e-6 && offset >= 0.0 => (day
                + Duration::days(offset as i64))
            .format("%Y-%m-%d")
            .to_string(),
            _ => String::new(),
        }
    };
    chart
        .configure_mesh()
        .x_labels(counts.len().clamp(1, 8))
        .x_label_formatter(&label)
        .x_desc(kind.x_label())
        .y_desc(kind.y_label())
        .draw()?;

    if counts.is_empty() {
        chart.draw_series(iter::once(Text::new(
            "No data",
            centre(&x_range, &y_range),
            note_style(),
        )))?;
        return Ok(());
    }

    let points = || counts.iter().enumerate().map(|(i, (_, n))| (i as f64, *n as f64));
    chart.draw_series(LineSeries::new(points(), BOX_FILL.stroke_width(2)))?;

    Ok(())
}

fn draw_length_density(area: &Area<'_>, kind: ChartKind, curve: &[(f64, f64)]) -> Result<()> {
    let (lo, hi) = curve
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (x, _)| {
            (lo.min(*x), hi.max(*x))
        });
    let x_range = if curve.is_empty() {
        0.0..1.0
    } else {
        lo..hi
    };
    let y_range = count_range(curve.iter().map(|(_, d)| *d).fold(0.0, f64::max));

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(kind.x_label())
        .y_desc(kind.y_label())
        .draw()?;

    if curve.is_empty() {
        // Fewer than two distinct lengths: no bandwidth to estimate with
        chart.draw_series(iter::once(Text::new(
            "No data",
            centre(&x_range, &y_range),
            note_style(),
        )))?;
        return Ok(());
    }

    chart.draw_series(
        AreaSeries::new(curve.iter().copied(), 0.0, PURPLE.mix(0.3).filled())
            .border_style(PURPLE.stroke_width(2)),
    )?;

    Ok(())
}

fn draw_length_by_period(area: &Area<'_>, kind: ChartKind, groups: &[PeriodGroup]) -> Result<()> {
    let names: Vec<String> = groups.iter().map(|g| g.label.to_string()).collect();
    let (lo, hi) = groups
        .iter()
        .flat_map(|g| {
            g.lengths
                .iter()
                .copied()
                .chain(g.outline.iter().map(|(y, _)| *y))
        })
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let x_range = category_range(names.len());
    let y_range = padded_range(lo, hi);

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    let label = |x: &f64| category_label(*x, &names);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len().max(1))
        .x_label_formatter(&label)
        .x_desc(kind.x_label())
        .y_desc(kind.y_label())
        .draw()?;

    if groups.iter().all(|g| g.lengths.is_empty()) {
        chart.draw_series(iter::once(Text::new(
            "No data",
            centre(&x_range, &y_range),
            note_style(),
        )))?;
        return Ok(());
    }

    for (i, group) in groups.iter().enumerate() {
        let x = i as f64;
        let color = PERIOD_PALETTE[i % PERIOD_PALETTE.len()];
        let peak = group.outline.iter().map(|(_, d)| *d).fold(0.0, f64::max);

        if peak > 0.0 {
            let half_width = |d: f64| 0.4 * d / peak;
            let outline: Vec<(f64, f64)> = group
                .outline
                .iter()
                .map(|&(y, d)| (x + half_width(d), y))
                .chain(group.outline.iter().rev().map(|&(y, d)| (x - half_width(d), y)))
                .collect();
            chart.draw_series(iter::once(Polygon::new(outline, color.mix(0.8).filled())))?;
        } else {
            // No spread to estimate: mark each value with a line
            chart.draw_series(group.lengths.iter().map(|&v| {
                PathElement::new(vec![(x - 0.4, v), (x + 0.4, v)], color.stroke_width(2))
            }))?;
        }

        if let Some(ref stats) = group.stats {
            chart.draw_series(iter::once(PathElement::new(
                vec![(x, stats.whisker_low), (x, stats.whisker_high)],
                BLACK.stroke_width(1),
            )))?;
            chart.draw_series(iter::once(Rectangle::new(
                [(x - 0.03, stats.q1), (x + 0.03, stats.q3)],
                BLACK.filled(),
            )))?;
            chart.draw_series(iter::once(Circle::new(
                (x, stats.median),
                3,
                WHITE.filled(),
            )))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::{Extractor, RecordExtractor};
    use base64::{Engine as _, engine::general_purpose::STANDARD};

    fn render(text: &str) -> Vec<EncodedChart> {
        let records = Extractor::default().extract_records(text);
        let aggregates = Aggregates::from_records(&records);
        render_charts(&aggregates, &Config::default()).unwrap()
    }

    fn svg(chart: &EncodedChart) -> String {
        String::from_utf8(STANDARD.decode(&chart.svg_base64).unwrap()).unwrap()
    }

    #[test]
    fn test_render_charts_empty_records_yields_all_slots() {
        let charts = render("");

        assert_eq!(charts.len(), 7);
        let kinds: Vec<ChartKind> = charts.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, ChartKind::ALL.to_vec());
        assert!(svg(&charts[0]).contains("No data"));
        assert!(svg(&charts[3]).contains("n/a"));
    }

    #[test]
    fn test_render_charts_single_record() {
        let charts = render("2024-01-01T10:00:00.000000 alice action=login");

        assert_eq!(charts.len(), 7);
        assert!(charts.iter().all(|c| svg(c).contains("<svg")));
        // One record has no spread to estimate a density from
        assert!(svg(&charts[5]).contains("No data"));
    }

    #[test]
    fn test_render_charts_constant_lengths() {
        let charts = render(
            "2024-01-01T10:00:00.000000 same len\n\
             2024-01-02T10:00:00.000000 same len\n",
        );

        assert_eq!(charts.len(), 7);
        assert!(svg(&charts[3]).contains("n/a"));
    }

    #[test]
    fn test_render_charts_typical_log() {
        let text = "\
2024-01-01T01:00:00.000000 alice action=upload a.txt
2024-01-01T01:30:00.000000 bob action=delete b.txt
2024-01-01T09:00:00.000000 heartbeat
2024-01-03T12:00:00.000000 alice logged in and stayed a while
2024-01-06T22:15:00.000000 carol action=upload c.txt
";
        let charts = render(text);

        assert_eq!(charts.len(), 7);
        let actions = svg(&charts[2]);
        assert!(actions.contains("upload"));
        assert!(actions.contains("delete"));
        assert!(svg(&charts[1]).contains("Monday"));
        assert!(svg(&charts[4]).contains("2024-01-01"));
    }

    #[test]
    fn test_render_charts_respects_configured_size() {
        let aggregates = Aggregates::from_records(&[]);
        let config = Config {
            chart_width: Some(640),
            chart_height: Some(480),
            ..Default::default()
        };

        let charts = render_charts(&aggregates, &config).unwrap();

        assert!(svg(&charts[0]).contains("width=\"640\""));
        assert!(svg(&charts[2]).contains("width=\"800\""));
    }

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range(f64::INFINITY, f64::NEG_INFINITY), 0.0..1.0);
        assert_eq!(padded_range(5.0, 5.0), 4.0..6.0);
        let range = padded_range(0.0, 10.0);
        assert!(range.start < 0.0 && range.end > 10.0);
    }

    #[test]
    fn test_count_range() {
        assert_eq!(count_range(f64::NEG_INFINITY), 0.0..1.0);
        assert_eq!(count_range(0.0), 0.0..1.0);
        assert_eq!(count_range(10.0).start, 0.0);
    }

    #[test]
    fn test_category_label() {
        let names = weekday_names();
        assert_eq!(category_label(0.0, &names), "Monday");
        assert_eq!(category_label(6.0, &names), "Sunday");
        assert_eq!(category_label(0.5, &names), "");
        assert_eq!(category_label(-1.0, &names), "");
        assert_eq!(category_label(7.0, &names), "");
    }

    #[test]
    fn test_viridis_ends() {
        assert_eq!(viridis(0.0), RGBColor(68, 1, 84));
        assert_eq!(viridis(1.0), RGBColor(253, 231, 37));
        assert_eq!(viridis(0.5), RGBColor(33, 145, 140));
    }

    #[test]
    fn test_colour_scale_uses_data_range() {
        // Coefficients between 0.3 and 1 span the whole map
        assert_eq!(colour_scale(0.3, 0.3, 1.0), 0.0);
        assert_eq!(colour_scale(1.0, 0.3, 1.0), 1.0);
        assert_eq!(viridis(colour_scale(0.3, 0.3, 1.0)), RGBColor(68, 1, 84));
        assert!((colour_scale(0.65, 0.3, 1.0) - 0.5).abs() < 1e-12);
        // A single defined value sits at the dark end
        assert_eq!(colour_scale(1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_render_charts_heatmap_spans_full_map() {
        let text = "\
2024-01-01T01:00:00.000000 a b
2024-01-01T05:00:00.000000 a bcdef
2024-01-01T09:00:00.000000 a bc
2024-01-01T23:00:00.000000 a bcdefghij
";
        let charts = render(text);
        let heatmap = svg(&charts[3]);

        // Both ends of viridis appear however narrow the coefficients are
        assert!(heatmap.contains("#440154"));
        assert!(heatmap.contains("#FDE725"));
    }

    #[test]
    fn test_render_charts_daily_trend_has_no_markers() {
        let text = "2024-01-01T10:00:00.000000 alice\n\
                    2024-03-01T10:00:00.000000 bob\n";
        let charts = render(text);
        let trend = svg(&charts[4]);

        assert!(trend.contains("<polyline"));
        assert!(!trend.contains("<circle"));
    }

    #[test]
    fn test_render_charts_ignores_out_of_range_years() {
        let text = "1000-01-01T00:00:00.000000 ancient\n\
                    2024-01-01T10:00:00.000000 alice\n\
                    9999-12-31T23:59:59.000000 future\n";
        let charts = render(text);
        let trend = svg(&charts[4]);

        assert!(trend.contains("2024-01-01"));
        assert!(trend.len() < 100_000);
    }
}
