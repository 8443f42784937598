//! Bar charts over aggregated buckets.
//!
//! Bars are scaled to the largest value of the series. The untruncated
//! bucket key is kept as the bar tooltip.

use contracts::shared::kpi::format_number;
use contracts::shared::pipeline::{ChartPoint, SeriesRow};
use leptos::prelude::*;

/// Bar length in percent of `max`
fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

fn series_max(rows: &[SeriesRow]) -> f64 {
    rows.iter()
        .flat_map(|r| r.values.iter().copied())
        .fold(0.0, f64::max)
}

#[component]
fn EmptyChart() -> impl IntoView {
    view! { <div class="chart-panel__empty">"No data for the current filters"</div> }
}

/// Horizontal bar list, one bar per bucket
#[component]
pub fn ChartPanel(
    #[prop(into)]
    title: String,

    #[prop(into)]
    points: Signal<Vec<ChartPoint>>,

    /// Show each bar's share of the total next to its value
    #[prop(optional)]
    show_share: bool,
) -> impl IntoView {
    let body = move || {
        let points = points.get();
        if points.is_empty() {
            return view! { <EmptyChart /> }.into_any();
        }

        let max = points.iter().map(|p| p.value).fold(0.0, f64::max);
        let sum: f64 = points.iter().map(|p| p.value).sum();

        points
            .into_iter()
            .map(|point| {
                let width = format!("width: {:.1}%", bar_width(point.value, max));
                let value = if show_share && sum > 0.0 {
                    format!(
                        "{} ({:.1}%)",
                        format_number(point.value),
                        share_of(point.value, sum)
                    )
                } else {
                    format_number(point.value)
                };
                view! {
                    <div class="chart-bar" title=point.key>
                        <span class="chart-bar__label">{point.label}</span>
                        <div class="chart-bar__track">
                            <div class="chart-bar__fill" style=width></div>
                        </div>
                        <span class="chart-bar__value">{value}</span>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="chart-panel">
            <h3 class="chart-panel__title">{title}</h3>
            <div class="chart-panel__body">{body}</div>
        </div>
    }
}

/// Grouped bars per key, one bar per series (trend or stacked data)
#[component]
pub fn SeriesPanel(
    #[prop(into)]
    title: String,

    /// Legend, in the order of `SeriesRow::values`
    series: &'static [&'static str],

    #[prop(into)]
    rows: Signal<Vec<SeriesRow>>,
) -> impl IntoView {
    let body = move || {
        let rows = rows.get();
        if rows.is_empty() {
            return view! { <EmptyChart /> }.into_any();
        }

        let max = series_max(&rows);
        rows.into_iter()
            .map(|row| {
                let total: f64 = row.values.iter().sum();
                let bars = row
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &value)| {
                        let name = series.get(i).copied().unwrap_or_default();
                        let style = format!("width: {:.1}%", bar_width(value, max));
                        let tip = format!(
                            "{}: {} ({:.1}%)",
                            name,
                            format_number(value),
                            share_of(value, total)
                        );
                        view! {
                            <div
                                class=format!("series-bar series-bar--{}", i)
                                style=style
                                title=tip
                            ></div>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="series-row">
                        <span class="series-row__key">{row.key}</span>
                        <div class="series-row__bars">{bars}</div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="chart-panel chart-panel--series">
            <h3 class="chart-panel__title">{title}</h3>
            <div class="chart-panel__legend">
                {series.iter().enumerate().map(|(i, name)| view! {
                    <span class=format!("legend-item legend-item--{}", i)>{*name}</span>
                }).collect_view()}
            </div>
            <div class="chart-panel__body">{body}</div>
        </div>
    }
}

/// Percent of `value` within `total`, 0 for an empty total
fn share_of(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(5.0, 10.0), 50.0);
        assert_eq!(bar_width(10.0, 10.0), 100.0);
        assert_eq!(bar_width(3.0, 0.0), 0.0);
        assert_eq!(bar_width(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn test_series_max_and_share() {
        let rows = vec![
            SeriesRow {
                key: "2020".into(),
                values: vec![60.0, 120.0],
            },
            SeriesRow {
                key: "2021".into(),
                values: vec![100.0, 0.0],
            },
        ];
        assert_eq!(series_max(&rows), 120.0);
        assert_eq!(share_of(60.0, 180.0).round(), 33.0);
        assert_eq!(share_of(1.0, 0.0), 0.0);
    }
}
