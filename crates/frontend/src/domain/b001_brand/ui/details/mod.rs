use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;
use contracts::domain::b001_brand::{Brand, PeriodSales};
use leptos::prelude::*;

/// Per-brand details view, keyed by brand name.
#[component]
pub fn BrandDetails(brand_name: String) -> impl IntoView {
    let ctx =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let go_back = move |_| {
        ctx.close_brand();
    };

    let name_for_lookup = brand_name.clone();
    let brand = Memo::new(move |_| {
        ctx.brands
            .get()
            .into_iter()
            .find(|b| b.brand_name == name_for_lookup)
    });

    view! {
        <div class="page brand-details-page">
            <div class="page__header">
                <Button variant="ghost" on_click=Callback::new(go_back)>
                    {icon("back")}
                    "All Brands"
                </Button>
            </div>

            {move || match brand.get() {
                Some(brand) => view! { <BrandDetailsBody brand=brand /> }.into_any(),
                None => view! {
                    <div class="empty-state">
                        <p>"Brand not found: " {brand_name.clone()}</p>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn BrandDetailsBody(brand: Brand) -> impl IntoView {
    let last_audit = brand
        .inventory_report
        .last_audit
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    let warehouses = brand.inventory_report.warehouses.clone().unwrap_or_default();
    let quarter_targets = brand
        .targets_and_achieved
        .quarter_wise
        .clone()
        .unwrap_or_default();

    view! {
        <div class="brand-details">
            <div class="brand-details__header">
                {brand.logo.clone().map(|src| view! {
                    <img class="brand-details__logo" src=src alt="" />
                })}
                <h1>{brand.brand_name.clone()}</h1>
                <Badge variant="primary">{brand.head_of_brand.clone()}</Badge>
            </div>

            <section class="brand-details__section">
                <h2>{icon("chart")} "Sales"</h2>
                <div class="brand-details__facts">
                    <p>"Total Sales: " <span>{brand.sales_details.total_sales.clone()}</span></p>
                    <p>"Top Product: " <span>{brand.sales_details.top_product.clone()}</span></p>
                    <p>"Growth Rate: " <span>{brand.sales_details.growth_rate.clone()}</span></p>
                </div>
                <div class="brand-details__breakdowns">
                    <BreakdownTable title="Monthly" entries=brand.sales_details.month_wise.clone() />
                    <BreakdownTable title="Quarterly" entries=brand.sales_details.quarter_wise.clone() />
                    <BreakdownTable title="Half-Yearly" entries=brand.sales_details.half_yearly.clone() />
                    <BreakdownTable title="Yearly" entries=brand.sales_details.yearly.clone() />
                </div>
            </section>

            <section class="brand-details__section">
                <h2>{icon("inventory")} "Inventory"</h2>
                <div class="brand-details__facts">
                    <p>"Total Stock: " <span>{brand.inventory_report.total_stock.clone()}</span></p>
                    <p>"Damaged Units: " <span>{brand.inventory_report.damaged_units.clone()}</span></p>
                    <p>"Last Audit: " <span>{last_audit}</span></p>
                </div>
                <ul class="brand-details__list">
                    {warehouses
                        .iter()
                        .map(|w| view! { <li>{w.clone()}</li> })
                        .collect_view()}
                </ul>
            </section>

            <section class="brand-details__section">
                <h2>"Operational Expenses"</h2>
                <div class="brand-details__facts">
                    <p>"Annual: " <span>{brand.operational_expenses.annual.clone()}</span></p>
                    <p>"Marketing: " <span>{brand.operational_expenses.marketing.clone().unwrap_or_else(|| "-".to_string())}</span></p>
                    <p>"R&D: " <span>{brand.operational_expenses.rnd.clone().unwrap_or_else(|| "-".to_string())}</span></p>
                    <p>"Logistics: " <span>{brand.operational_expenses.logistics.clone().unwrap_or_else(|| "-".to_string())}</span></p>
                </div>
            </section>

            <section class="brand-details__section">
                <h2>{icon("target")} "Targets & Achieved"</h2>
                <div class="brand-details__facts">
                    <p>
                        "Annual: "
                        <span>
                            {brand.targets_and_achieved.achieved.clone()}
                            " / "
                            {brand.targets_and_achieved.annual_target.clone()}
                        </span>
                    </p>
                </div>
                <Show when={
                    let has_quarters = !quarter_targets.is_empty();
                    move || has_quarters
                }>
                    <table class="breakdown-table">
                        <thead>
                            <tr>
                                <th>"Quarter"</th>
                                <th>"Achieved"</th>
                                <th>"Target"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {quarter_targets
                                .iter()
                                .map(|q| view! {
                                    <tr>
                                        <td>{q.quarter.clone()}</td>
                                        <td>{q.achieved.clone()}</td>
                                        <td>{q.target.clone()}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </Show>
            </section>
        </div>
    }
}

/// One per-period sales table; renders nothing when the brand has no
/// breakdown for this granularity.
#[component]
fn BreakdownTable(
    title: &'static str,
    entries: Option<Vec<PeriodSales>>,
) -> impl IntoView {
    entries.map(|entries| {
        view! {
            <div class="breakdown">
                <h3>{title}</h3>
                <table class="breakdown-table">
                    <thead>
                        <tr>
                            <th>"Period"</th>
                            <th>"Sales"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {entries
                            .iter()
                            .map(|e| view! {
                                <tr>
                                    <td>{e.period.clone()}</td>
                                    <td>{e.sales.clone()}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
    })
}
