use crate::layout::global_context::AppGlobalContext;
use crate::layout::ModalService;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

/// Root component: installs the shared view state and the dialog service,
/// then hands off to the view switch.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ModalService::new());

    view! {
        <AppRoutes />
    }
}
