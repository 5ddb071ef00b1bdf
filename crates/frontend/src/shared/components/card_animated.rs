use leptos::prelude::*;
use thaw::Card;

/// Thaw card with the `card-appear` entrance animation from `layout.css`.
/// `delay_ms` staggers cards inside a grid.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles, appended after the animation rule
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let animation = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let full_style = if style.is_empty() {
        animation
    } else {
        format!("{} {}", animation, style)
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
