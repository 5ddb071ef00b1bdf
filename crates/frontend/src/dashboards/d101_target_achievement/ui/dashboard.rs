use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::charts::BarChart;
use contracts::analytics::build_target_summary;
use leptos::prelude::*;

/// Achieved-vs-target dashboard: grouped bars per brand.
#[component]
pub fn TargetAchievementDashboard() -> impl IntoView {
    let ctx =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let summary = Memo::new(move |_| ctx.brands.with(|brands| build_target_summary(brands)));

    view! {
        <section class="dashboard dashboard--targets">
            <div class="dashboard__header">
                <h2 class="dashboard__title">"Achieved vs Targets"</h2>
            </div>

            <BarChart summary=summary />
        </section>
    }
}
