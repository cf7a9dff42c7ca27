//! Chart Components
//!
//! Canvas-drawn line chart of the filtered timeline and a pie chart of the
//! aggregate distribution.

use leptos::*;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::series::ChartSeries;
use crate::state::{AggregateStats, GlobalState};

/// Series colors: cases (green), deaths (red), recovered (blue)
const SERIES_COLORS: [&str; 3] = ["#4CAF50", "#F44336", "#2196F3"];
const SERIES_NAMES: [&str; 3] = ["Cases", "Deaths", "Recovered"];

/// Historical trend line chart over the filtered timeline
#[component]
pub fn TrendChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let chart_series = state.chart_series;
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the projected series changes
    create_effect(move |_| {
        let series = chart_series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_trend(&canvas, &series);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />
            <ChartLegend />
        </div>
    }
}

/// Pie chart of the aggregate totals
#[component]
pub fn DistributionChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let stats = state.stats;
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let totals = stats.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_distribution(&canvas, &totals);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="400"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />
            <ChartLegend />
        </div>
    }
}

/// Legend naming the three series
#[component]
fn ChartLegend() -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {SERIES_NAMES
                .iter()
                .zip(SERIES_COLORS)
                .map(|(name, color)| view! {
                    <div class="flex items-center space-x-2">
                        <div
                            class="w-3 h-3 rounded-full"
                            style=format!("background-color: {}", color)
                        />
                        <span class="text-sm text-gray-300">{*name}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn format_tick(value: f64) -> String {
    (value.round() as u64).to_formatted_string(&Locale::en)
}

/// Draw the trend chart on canvas
fn draw_trend(canvas: &HtmlCanvasElement, series: &ChartSeries) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 80.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if series.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data for selected range", width / 2.0 - 80.0, height / 2.0);
        return;
    }

    // Cumulative counts, so the y axis starts at zero
    let y_max = series
        .cases
        .iter()
        .chain(&series.deaths)
        .chain(&series.recovered)
        .copied()
        .max()
        .unwrap_or(0) as f64;
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    // Grid lines and y-axis labels
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;

        ctx.set_stroke_style(&"#374151".into()); // gray-700
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max * (1.0 - i as f64 / 5.0);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format_tick(value), 5.0, y + 4.0);
    }

    // One x step per label; labels are evenly spaced like a category axis
    let step = chart_width / (series.len().max(2) - 1) as f64;

    for (values, color) in [
        (&series.cases, SERIES_COLORS[0]),
        (&series.deaths, SERIES_COLORS[1]),
        (&series.recovered, SERIES_COLORS[2]),
    ] {
        ctx.set_stroke_style(&color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        for (i, &value) in values.iter().enumerate() {
            let x = margin_left + i as f64 * step;
            let y = margin_top + (1.0 - value as f64 / y_max) * chart_height;

            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }

        ctx.stroke();
    }

    // X-axis labels: a handful of evenly sampled dates
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    let num_labels = (series.len() - 1).min(5).max(1);
    for i in 0..=num_labels {
        let idx = i * (series.len() - 1) / num_labels;
        let x = margin_left + idx as f64 * step;
        let _ = ctx.fill_text(&series.labels[idx], x - 30.0, height - 10.0);
    }
}

/// Draw the distribution pie on canvas
fn draw_distribution(canvas: &HtmlCanvasElement, stats: &AggregateStats) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#1f2937".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let total = stats.cases + stats.deaths + stats.recovered;
    if total == 0 {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
        return;
    }

    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;

    let mut start = -std::f64::consts::FRAC_PI_2;
    for (value, color) in [
        (stats.cases, SERIES_COLORS[0]),
        (stats.deaths, SERIES_COLORS[1]),
        (stats.recovered, SERIES_COLORS[2]),
    ] {
        if value == 0 {
            continue;
        }
        let sweep = value as f64 / total as f64 * std::f64::consts::TAU;

        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        ctx.move_to(center_x, center_y);
        let _ = ctx.arc(center_x, center_y, radius, start, start + sweep);
        ctx.close_path();
        ctx.fill();

        start += sweep;
    }
}
