use crate::domain::b001_brand::ui::details::BrandDetails;
use crate::domain::b001_brand::ui::list::BrandListPage;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

/// Top-level view switch: the dashboard page or a per-brand details view,
/// driven by the selected-brand signal (no router needed for two views).
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize URL integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell content=move || {
            match ctx.selected_brand.get() {
                Some(brand_name) => view! { <BrandDetails brand_name=brand_name /> }.into_any(),
                None => view! { <BrandListPage /> }.into_any(),
            }
        } />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <MainLayout />
    }
}
