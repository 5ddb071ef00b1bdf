use super::view_model::BrandCreateViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Create-brand dialog body. Every input binds to the DTO through its
/// dotted form path, mirroring the record nesting.
#[component]
pub fn BrandCreate(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let ctx =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let vm = BrandCreateViewModel::new();

    view! {
        <div class="details-container brand-create">
            <div class="details-header">
                <h3>"Create New Brand"</h3>
                <p class="details-subtitle">"Fill in the details to create a new brand."</p>
            </div>

            <div class="details-form">
                <Input
                    label="Brand Name"
                    placeholder="Brand Name"
                    value=Signal::derive(move || vm.form.get().brand_name)
                    on_input=Callback::new(move |v| vm.set_field("brandName", v))
                />
                <Input
                    label="Total Sales"
                    placeholder="Total Sales"
                    value=Signal::derive(move || vm.form.get().sales_details.total_sales)
                    on_input=Callback::new(move |v| vm.set_field("salesDetails.totalSales", v))
                />
                <Input
                    label="Top Product"
                    placeholder="Top Product"
                    value=Signal::derive(move || vm.form.get().sales_details.top_product)
                    on_input=Callback::new(move |v| vm.set_field("salesDetails.topProduct", v))
                />
                <Input
                    label="Growth Rate"
                    placeholder="Growth Rate"
                    value=Signal::derive(move || vm.form.get().sales_details.growth_rate)
                    on_input=Callback::new(move |v| vm.set_field("salesDetails.growthRate", v))
                />
                <Input
                    label="Total Stock"
                    placeholder="Total Stock"
                    value=Signal::derive(move || vm.form.get().inventory_report.total_stock)
                    on_input=Callback::new(move |v| vm.set_field("inventoryReport.totalStock", v))
                />
                <Input
                    label="Annual Expenses"
                    placeholder="Annual Expenses"
                    value=Signal::derive(move || vm.form.get().operational_expenses.annual)
                    on_input=Callback::new(move |v| vm.set_field("operationalExpenses.annual", v))
                />
                <Input
                    label="Annual Target"
                    placeholder="Annual Target"
                    value=Signal::derive(move || vm.form.get().targets_and_achieved.annual_target)
                    on_input=Callback::new(move |v| {
                        vm.set_field("targetsAndAchieved.annualTarget", v)
                    })
                />
                <Input
                    label="Achieved"
                    placeholder="Achieved"
                    value=Signal::derive(move || vm.form.get().targets_and_achieved.achieved)
                    on_input=Callback::new(move |v| vm.set_field("targetsAndAchieved.achieved", v))
                />
                <Input
                    label="Head of Brand"
                    placeholder="Head of Brand"
                    value=Signal::derive(move || vm.form.get().head_of_brand)
                    on_input=Callback::new(move |v| vm.set_field("headOfBrand", v))
                />
            </div>

            <div class="details-actions">
                <Button
                    on_click=Callback::new(move |_| vm.submit_command(ctx, on_saved))
                    disabled=Signal::derive(move || !vm.is_form_valid())
                >
                    {icon("save")}
                    "Submit"
                </Button>
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| on_cancel.run(()))
                >
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
