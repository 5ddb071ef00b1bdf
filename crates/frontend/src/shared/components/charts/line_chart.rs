use contracts::analytics::money::format_number_int;
use contracts::analytics::SalesSeries;
use leptos::prelude::*;

use super::geometry::{polyline_points, y_ticks, ChartScale};
use super::LINE_COLORS;

const PLOT_WIDTH: f64 = 710.0;
const PLOT_HEIGHT: f64 = 360.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_TOP: f64 = 20.0;

/// Multi-series line chart: one polyline per brand, x slots from the
/// canonical period sequence carried by the series.
#[component]
pub fn LineChart(#[prop(into)] series: Signal<SalesSeries>) -> impl IntoView {
    view! {
        <div class="chart chart--line">
            {move || {
                let series = series.get();
                let period_count = series.rows.len();
                let scale = ChartScale::new(series.max_value(), PLOT_WIDTH, PLOT_HEIGHT);

                let gridlines = y_ticks(&scale, 4)
                    .into_iter()
                    .map(|tick| {
                        let y = scale.y(tick);
                        view! {
                            <g>
                                <line x1="0" y1=y x2=PLOT_WIDTH y2=y class="chart__gridline" />
                                <text x="-10" y={y + 4.0} text-anchor="end" class="chart__tick">
                                    {format_number_int(tick)}
                                </text>
                            </g>
                        }
                    })
                    .collect_view();

                let x_labels = series
                    .rows
                    .iter()
                    .enumerate()
                    .map(|(i, row)| {
                        let x = scale.x(i, period_count);
                        view! {
                            <text x=x y={PLOT_HEIGHT + 24.0} text-anchor="middle" class="chart__tick">
                                {row.period.clone()}
                            </text>
                        }
                    })
                    .collect_view();

                let lines = series
                    .brands
                    .iter()
                    .enumerate()
                    .map(|(brand_idx, _)| {
                        let values: Vec<f64> = series
                            .rows
                            .iter()
                            .map(|row| row.values[brand_idx])
                            .collect();
                        let points = polyline_points(&values, &scale);
                        let color = LINE_COLORS[brand_idx % LINE_COLORS.len()];
                        view! {
                            <polyline
                                points=points
                                fill="none"
                                stroke=color
                                stroke-width="2"
                                stroke-linejoin="round"
                            />
                        }
                    })
                    .collect_view();

                let legend = series
                    .brands
                    .iter()
                    .enumerate()
                    .map(|(brand_idx, name)| {
                        let color = LINE_COLORS[brand_idx % LINE_COLORS.len()];
                        view! {
                            <span class="chart__legend-item">
                                <span
                                    class="chart__legend-swatch"
                                    style=format!("background: {};", color)
                                ></span>
                                {name.clone()}
                            </span>
                        }
                    })
                    .collect_view();

                view! {
                    <svg viewBox="0 0 800 440" class="chart__svg" role="img">
                        <g transform=format!("translate({},{})", MARGIN_LEFT, MARGIN_TOP)>
                            {gridlines}
                            {lines}
                            {x_labels}
                        </g>
                    </svg>
                    <div class="chart__legend">{legend}</div>
                }
            }}
        </div>
    }
}
