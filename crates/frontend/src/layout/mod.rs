pub mod global_context;
pub mod modal_service;
pub mod top_header;

pub use modal_service::{Modal, ModalService};

use leptos::prelude::*;
use top_header::TopHeader;

/// Application frame: top bar above a single scrollable content region.
#[component]
pub fn Shell<C>(content: C) -> impl IntoView
where
    C: Fn() -> AnyView + Send + 'static,
{
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">
                {content()}
            </main>
        </div>
    }
}
