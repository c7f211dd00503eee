//! Chart Component
//!
//! Number-of-jobs line chart drawn on an HTML5 canvas.

use leptos::*;
use salary_dashboard::presenter::chart::{BORDER_COLOR, FILL_COLOR, SERIES_LABEL};
use salary_dashboard::TimeSeries;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::use_global_state;

/// Line chart of the yearly series
#[component]
pub fn Chart() -> impl IntoView {
    let state = use_global_state();
    let canvas_ref = create_node_ref::<html::Canvas>();

    let series = create_memo(move |_| state.dashboard.with(|d| d.chart().clone()));

    // Redraw when the series changes or the canvas mounts
    create_effect(move |_| {
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &series);
        }
    });

    view! {
        <div class="relative bg-white rounded-lg shadow p-4 w-full">
            <div class="text-center font-medium mb-2">{move || series.get().title()}</div>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96"
            />

            // Legend
            <div class="flex justify-center items-center space-x-2 mt-2">
                <div
                    class="w-3 h-3 rounded-full"
                    style=format!("background-color: {}; border: 2px solid {}", FILL_COLOR, BORDER_COLOR)
                />
                <span class="text-sm text-gray-700">{SERIES_LABEL}</span>
            </div>
        </div>
    }
}

/// Draw the series on canvas
fn draw_chart(canvas: &HtmlCanvasElement, series: &TimeSeries) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let max = match series.value_range() {
        Some((_, max)) => max,
        None => {
            ctx.set_fill_style(&"#6b7280".into());
            ctx.set_font("16px sans-serif");
            let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
            return;
        }
    };

    // Y axis starts at zero
    let y_max = if max == 0 { 1.0 } else { max as f64 * 1.1 };

    // Horizontal grid lines (5 lines)
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&"#6b7280".into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let points = series.points();
    let n = points.len();
    let x_of = |i: usize| {
        if n == 1 {
            margin_left + chart_width / 2.0
        } else {
            margin_left + (i as f64 / (n - 1) as f64) * chart_width
        }
    };
    let y_of = |jobs: u64| margin_top + (1.0 - jobs as f64 / y_max) * chart_height;
    let baseline = margin_top + chart_height;

    // Filled area under the line
    ctx.set_fill_style(&format!("{}55", FILL_COLOR).into());
    ctx.begin_path();
    ctx.move_to(x_of(0), baseline);
    for (i, point) in points.iter().enumerate() {
        ctx.line_to(x_of(i), y_of(point.jobs));
    }
    ctx.line_to(x_of(n - 1), baseline);
    ctx.close_path();
    ctx.fill();

    // Line
    ctx.set_stroke_style(&BORDER_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x_of(i), y_of(point.jobs));
        } else {
            ctx.line_to(x_of(i), y_of(point.jobs));
        }
    }
    ctx.stroke();

    // Points and year labels
    for (i, point) in points.iter().enumerate() {
        let (x, y) = (x_of(i), y_of(point.jobs));

        ctx.set_fill_style(&FILL_COLOR.into());
        ctx.begin_path();
        let _ = ctx.arc(x, y, 4.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();

        ctx.set_fill_style(&"#374151".into());
        let _ = ctx.fill_text(&point.year.to_string(), x - 15.0, height - 10.0);
    }
}
