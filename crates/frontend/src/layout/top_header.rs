//! TopHeader component - application top bar with the product name and a
//! home shortcut that clears the current brand selection.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let go_home = move |_| {
        ctx.close_brand();
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand" on:click=go_home>
                {icon("chart")}
                <span class="top-header__title">"Retro"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__subtitle">"Brand Analytics"</span>
            </div>
        </div>
    }
}
