use crate::dashboards::d100_sales_performance::ui::SalesPerformanceDashboard;
use crate::dashboards::d101_target_achievement::ui::TargetAchievementDashboard;
use crate::domain::b001_brand::ui::create::BrandCreate;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::{Modal, ModalService};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::hover_card::HoverCard;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;
use contracts::domain::b001_brand::Brand;
use leptos::prelude::*;

/// Home page: brand cards grid, the create-brand dialog, and both charts.
#[component]
pub fn BrandListPage() -> impl IntoView {
    let ctx =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let modal = use_context::<ModalService>().expect("ModalService not found in context");

    let open_create_dialog = move |_| {
        modal.show();
    };

    view! {
        <div class="page brand-list-page">
            <div class="page__header">
                <h1 class="page__title">"Brands"</h1>
                <Button on_click=Callback::new(open_create_dialog)>
                    {icon("plus")}
                    "Create Brand"
                </Button>
            </div>

            <Modal>
                <BrandCreate
                    on_saved=Callback::new(move |_| modal.hide())
                    on_cancel=Callback::new(move |_| modal.hide())
                />
            </Modal>

            <div class="brand-grid">
                <For
                    each=move || ctx.brands.get().into_iter().enumerate()
                    key=|(_, brand)| brand.id
                    children=move |(index, brand)| {
                        view! {
                            <BrandCard brand=brand delay_ms={(index as u32) * 80} />
                        }
                    }
                />
            </div>

            <SalesPerformanceDashboard />
            <TargetAchievementDashboard />
        </div>
    }
}

/// One brand card. The four metric rows each reveal their nested detail in
/// a hover panel; clicking anywhere else opens the details view.
#[component]
fn BrandCard(brand: Brand, delay_ms: u32) -> impl IntoView {
    let ctx =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let brand_name = brand.brand_name.clone();
    let open_details = move |_| {
        ctx.open_brand(&brand_name);
    };

    let logo = brand.logo.clone();
    let sales = brand.sales_details.clone();
    let inventory = brand.inventory_report.clone();
    let expenses = brand.operational_expenses.clone();
    let targets = brand.targets_and_achieved.clone();

    let quarter_sales = sales.quarter_wise.clone().unwrap_or_default();
    let warehouses = inventory.warehouses.clone().unwrap_or_default();
    let quarter_targets = targets.quarter_wise.clone().unwrap_or_default();
    let last_audit = inventory
        .last_audit
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());

    view! {
        <CardAnimated delay_ms=delay_ms>
            <div class="brand-card" on:click=open_details>
                <div class="brand-card__header">
                    {logo.map(|src| view! { <img class="brand-card__logo" src=src alt="" /> })}
                    <p class="brand-card__name">{brand.brand_name.clone()}</p>
                    <Badge variant="primary">{brand.head_of_brand.clone()}</Badge>
                </div>

                <div class="brand-card__metrics">
                    <HoverCard trigger={
                        let total_sales = sales.total_sales.clone();
                        move || view! {
                            <span class="brand-card__metric-label">"Total Sales:"</span>
                            <span>{total_sales.clone()}</span>
                        }.into_any()
                    }>
                        {
                            let top_product = sales.top_product.clone();
                            let growth_rate = sales.growth_rate.clone();
                            let quarter_sales = quarter_sales.clone();
                            move || view! {
                                <div class="hover-card__row">
                                    <p>"Top Product:"</p>
                                    <span>{top_product.clone()}</span>
                                </div>
                                <div class="hover-card__row">
                                    <p>"Growth Rate:"</p>
                                    <span>{growth_rate.clone()}</span>
                                </div>
                                <p class="hover-card__caption">"Quarter Wise Sales:"</p>
                                <ul class="hover-card__list">
                                    {quarter_sales
                                        .iter()
                                        .map(|q| view! {
                                            <li>{q.period.clone()} ": " {q.sales.clone()}</li>
                                        })
                                        .collect_view()}
                                </ul>
                            }.into_any()
                        }
                    </HoverCard>

                    <HoverCard trigger={
                        let total_stock = inventory.total_stock.clone();
                        move || view! {
                            <span class="brand-card__metric-label">"Total Stock:"</span>
                            <span>{total_stock.clone()}</span>
                        }.into_any()
                    }>
                        {
                            let warehouses = warehouses.clone();
                            let damaged_units = inventory.damaged_units.clone();
                            let last_audit = last_audit.clone();
                            move || view! {
                                <p class="hover-card__caption">"Warehouses:"</p>
                                <ul class="hover-card__list">
                                    {warehouses
                                        .iter()
                                        .map(|w| view! { <li>{w.clone()}</li> })
                                        .collect_view()}
                                </ul>
                                <div class="hover-card__row">
                                    <p>"Damaged Units:"</p>
                                    <span>{damaged_units.clone()}</span>
                                </div>
                                <div class="hover-card__row">
                                    <p>"Last Audit:"</p>
                                    <span>{last_audit.clone()}</span>
                                </div>
                            }.into_any()
                        }
                    </HoverCard>

                    <HoverCard trigger={
                        let annual = expenses.annual.clone();
                        move || view! {
                            <span class="brand-card__metric-label">"Annual Expenses:"</span>
                            <span>{annual.clone()}</span>
                        }.into_any()
                    }>
                        {
                            let marketing = expenses.marketing.clone().unwrap_or_else(|| "-".to_string());
                            let rnd = expenses.rnd.clone().unwrap_or_else(|| "-".to_string());
                            let logistics = expenses.logistics.clone().unwrap_or_else(|| "-".to_string());
                            move || view! {
                                <div class="hover-card__row">
                                    <p>"Marketing:"</p>
                                    <span>{marketing.clone()}</span>
                                </div>
                                <div class="hover-card__row">
                                    <p>"R&D:"</p>
                                    <span>{rnd.clone()}</span>
                                </div>
                                <div class="hover-card__row">
                                    <p>"Logistics:"</p>
                                    <span>{logistics.clone()}</span>
                                </div>
                            }.into_any()
                        }
                    </HoverCard>

                    <HoverCard trigger={
                        let achieved = targets.achieved.clone();
                        let annual_target = targets.annual_target.clone();
                        move || view! {
                            <span class="brand-card__metric-label">"Annual Targets:"</span>
                            <span>{achieved.clone()} " / " {annual_target.clone()}</span>
                        }.into_any()
                    }>
                        {
                            let quarter_targets = quarter_targets.clone();
                            move || view! {
                                <p class="hover-card__caption">"Quarter Wise Achieved/Targets:"</p>
                                <ul class="hover-card__list">
                                    {quarter_targets
                                        .iter()
                                        .map(|q| view! {
                                            <li>
                                                {q.quarter.clone()} ": "
                                                {q.achieved.clone()} " / " {q.target.clone()}
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                            }.into_any()
                        }
                    </HoverCard>
                </div>
            </div>
        </CardAnimated>
    }
}
