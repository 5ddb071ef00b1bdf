use contracts::analytics::money::format_number_int;
use contracts::analytics::TargetSummary;
use leptos::prelude::*;

use super::geometry::{y_ticks, ChartScale};
use super::{ACHIEVED_COLOR, TARGET_COLOR};

const PLOT_WIDTH: f64 = 710.0;
const PLOT_HEIGHT: f64 = 360.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_TOP: f64 = 20.0;

/// Grouped bar chart: one achieved/target pair per brand, in brand order.
#[component]
pub fn BarChart(#[prop(into)] summary: Signal<TargetSummary>) -> impl IntoView {
    view! {
        <div class="chart chart--bar">
            {move || {
                let summary = summary.get();
                let brand_count = summary.brands.len();
                let scale = ChartScale::new(summary.max_value(), PLOT_WIDTH, PLOT_HEIGHT);
                let slot = if brand_count > 0 {
                    PLOT_WIDTH / brand_count as f64
                } else {
                    PLOT_WIDTH
                };
                let bar_width = slot * 0.28;

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

                let groups = summary
                    .brands
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        let achieved = summary.achieved[i];
                        let target = summary.target[i];
                        let group_x = slot * i as f64;
                        let achieved_x = group_x + slot * 0.18;
                        let target_x = achieved_x + bar_width + slot * 0.06;
                        let achieved_y = scale.y(achieved);
                        let target_y = scale.y(target);
                        let label_x = group_x + slot / 2.0;

                        view! {
                            <g>
                                <rect
                                    x=achieved_x
                                    y=achieved_y
                                    width=bar_width
                                    height={PLOT_HEIGHT - achieved_y}
                                    fill=ACHIEVED_COLOR
                                />
                                <rect
                                    x=target_x
                                    y=target_y
                                    width=bar_width
                                    height={PLOT_HEIGHT - target_y}
                                    fill=TARGET_COLOR
                                />
                                <text
                                    x=label_x
                                    y={PLOT_HEIGHT + 24.0}
                                    text-anchor="middle"
                                    class="chart__tick"
                                >
                                    {name.clone()}
                                </text>
                            </g>
                        }
                    })
                    .collect_view();

                view! {
                    <svg viewBox="0 0 800 440" class="chart__svg" role="img">
                        <g transform=format!("translate({},{})", MARGIN_LEFT, MARGIN_TOP)>
                            {gridlines}
                            {groups}
                        </g>
                    </svg>
                    <div class="chart__legend">
                        <span class="chart__legend-item">
                            <span
                                class="chart__legend-swatch"
                                style=format!("background: {};", ACHIEVED_COLOR)
                            ></span>
                            "Achieved"
                        </span>
                        <span class="chart__legend-item">
                            <span
                                class="chart__legend-swatch"
                                style=format!("background: {};", TARGET_COLOR)
                            ></span>
                            "Target"
                        </span>
                    </div>
                }
            }}
        </div>
    }
}
