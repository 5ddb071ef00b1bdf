use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::charts::LineChart;
use crate::shared::components::ui::Select;
use contracts::analytics::{build_sales_series, Granularity};
use leptos::prelude::*;

/// Sales-performance dashboard: granularity selector plus the brand line
/// chart. Rows are re-derived from the brand list on every change; the
/// list itself is never touched.
#[component]
pub fn SalesPerformanceDashboard() -> impl IntoView {
    let ctx =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let series = Memo::new(move |_| {
        ctx.brands
            .with(|brands| build_sales_series(brands, ctx.granularity.get()))
    });

    let granularity_options: Vec<(String, String)> = Granularity::ALL
        .iter()
        .map(|g| (g.as_str().to_string(), g.title().to_string()))
        .collect();

    let on_granularity_change = move |code: String| {
        // Unknown codes keep the current selection
        if let Some(granularity) = Granularity::parse(&code) {
            ctx.granularity.set(granularity);
        }
    };

    view! {
        <section class="dashboard dashboard--sales">
            <div class="dashboard__header">
                <h2 class="dashboard__title">
                    {move || ctx.granularity.get().title()}
                    " Brand Sales Performance"
                </h2>
                <Select
                    value=Signal::derive(move || ctx.granularity.get().as_str().to_string())
                    options=Signal::derive(move || granularity_options.clone())
                    on_change=Callback::new(on_granularity_change)
                />
            </div>

            <LineChart series=series />
        </section>
    }
}
