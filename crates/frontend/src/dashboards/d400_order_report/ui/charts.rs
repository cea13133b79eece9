//! Inline SVG charts of the order report
//!
//! Geometry is computed by plain functions; the components only draw.

use contracts::dashboards::d400_order_report::{RevenuePoint, SourceCount};
use leptos::prelude::*;

pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 260.0;
pub const CHART_PADDING: f64 = 36.0;

/// Rectangle of one bar in SVG coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bars spread evenly over the plot area, scaled to the largest count
pub fn bar_layout(data: &[SourceCount], width: f64, height: f64, padding: f64) -> Vec<Bar> {
    if data.is_empty() {
        return Vec::new();
    }
    let max = data.iter().map(|d| d.count).max().unwrap_or(0).max(1) as f64;
    let plot_width = (width - 2.0 * padding).max(0.0);
    let plot_height = (height - 2.0 * padding).max(0.0);
    let slot = plot_width / data.len() as f64;
    let bar_width = slot * 0.6;

    data.iter()
        .enumerate()
        .map(|(i, d)| {
            let bar_height = plot_height * d.count as f64 / max;
            Bar {
                label: d.source.clone(),
                value: d.count,
                x: padding + slot * i as f64 + (slot - bar_width) / 2.0,
                y: padding + plot_height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

/// Points of the revenue line; a single point is centered
pub fn line_layout(data: &[RevenuePoint], width: f64, height: f64, padding: f64) -> Vec<(f64, f64)> {
    if data.is_empty() {
        return Vec::new();
    }
    let max = data.iter().map(|p| p.revenue).fold(0.0, f64::max);
    let max = if max > 0.0 { max } else { 1.0 };
    let plot_width = (width - 2.0 * padding).max(0.0);
    let plot_height = (height - 2.0 * padding).max(0.0);
    let step = if data.len() > 1 {
        plot_width / (data.len() - 1) as f64
    } else {
        0.0
    };

    data.iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if data.len() > 1 {
                padding + step * i as f64
            } else {
                padding + plot_width / 2.0
            };
            let y = padding + plot_height - plot_height * p.revenue.max(0.0) / max;
            (x, y)
        })
        .collect()
}

/// `points` attribute of an SVG polyline
pub fn polyline_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn SourceBarChart(#[prop(into)] data: Signal<Vec<SourceCount>>) -> impl IntoView {
    let view_box = format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT);
    let baseline = CHART_HEIGHT - CHART_PADDING;

    view! {
        <svg class="chart chart--bar" viewBox=view_box preserveAspectRatio="xMidYMid meet">
            <line
                class="chart__axis"
                x1=CHART_PADDING
                y1=baseline
                x2={CHART_WIDTH - CHART_PADDING}
                y2=baseline
            />
            {move || {
                bar_layout(&data.get(), CHART_WIDTH, CHART_HEIGHT, CHART_PADDING)
                    .into_iter()
                    .map(|bar| {
                        let center = bar.x + bar.width / 2.0;
                        view! {
                            <g class="chart__bar">
                                <rect x=bar.x y=bar.y width=bar.width height=bar.height rx="4">
                                    <title>{format!("{}: {}", bar.label, bar.value)}</title>
                                </rect>
                                <text class="chart__value" x=center y={bar.y - 6.0} text-anchor="middle">
                                    {bar.value.to_string()}
                                </text>
                                <text class="chart__label" x=center y={baseline + 18.0} text-anchor="middle">
                                    {bar.label.clone()}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()
            }}
        </svg>
    }
}

#[component]
pub fn RevenueLineChart(#[prop(into)] data: Signal<Vec<RevenuePoint>>) -> impl IntoView {
    let view_box = format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT);
    let baseline = CHART_HEIGHT - CHART_PADDING;

    view! {
        <svg class="chart chart--line" viewBox=view_box preserveAspectRatio="xMidYMid meet">
            <line
                class="chart__axis"
                x1=CHART_PADDING
                y1=baseline
                x2={CHART_WIDTH - CHART_PADDING}
                y2=baseline
            />
            {move || {
                let series = data.get();
                let points = line_layout(&series, CHART_WIDTH, CHART_HEIGHT, CHART_PADDING);
                let line = polyline_points(&points);
                let dots = series
                    .iter()
                    .zip(points.iter())
                    .map(|(p, &(x, y))| {
                        let label = p.date.format("%b %-d").to_string();
                        view! {
                            <g class="chart__point">
                                <circle cx=x cy=y r="4">
                                    <title>{format!("{}: {:.2}", p.date, p.revenue)}</title>
                                </circle>
                                <text class="chart__label" x=x y={baseline + 18.0} text-anchor="middle">
                                    {label}
                                </text>
                            </g>
                        }
                    })
                    .collect_view();
                view! {
                    <polyline class="chart__line" fill="none" points=line />
                    {dots}
                }
            }}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn source(name: &str, count: usize) -> SourceCount {
        SourceCount {
            source: name.to_string(),
            count,
        }
    }

    fn point(day: u32, revenue: f64) -> RevenuePoint {
        RevenuePoint {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            revenue,
        }
    }

    #[test]
    fn test_bars_scale_to_largest_count() {
        let bars = bar_layout(&[source("Web", 4), source("App", 2)], 240.0, 120.0, 20.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].height, 80.0);
        assert_eq!(bars[0].y, 20.0);
        assert_eq!(bars[1].height, 40.0);
        assert_eq!(bars[1].y, 60.0);
        assert!(bars[0].x < bars[1].x);
    }

    #[test]
    fn test_empty_series() {
        assert!(bar_layout(&[], 240.0, 120.0, 20.0).is_empty());
        assert!(line_layout(&[], 240.0, 120.0, 20.0).is_empty());
        assert_eq!(polyline_points(&[]), "");
    }

    #[test]
    fn test_line_spans_plot_width() {
        let points = line_layout(&[point(1, 10.0), point(2, 5.0), point(3, 0.0)], 240.0, 120.0, 20.0);
        assert_eq!(points, vec![(20.0, 20.0), (120.0, 60.0), (220.0, 100.0)]);
        assert_eq!(polyline_points(&points[..2]), "20.0,20.0 120.0,60.0");
    }

    #[test]
    fn test_single_point_centered() {
        let points = line_layout(&[point(1, 3.0)], 240.0, 120.0, 20.0);
        assert_eq!(points, vec![(120.0, 20.0)]);
    }
}
