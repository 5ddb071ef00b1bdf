use leptos::prelude::*;

/// Small status pill, used for the head-of-brand tag on cards.
#[component]
pub fn Badge(
    /// "primary", "success" or "warning"; anything else renders neutral
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let classes = move || {
        let variant = variant.get().unwrap_or_default();
        let modifier = match variant.as_str() {
            "primary" => "badge--primary",
            "success" => "badge--success",
            "warning" => "badge--warning",
            _ => "badge--neutral",
        };
        format!("badge {}", modifier)
    };

    view! {
        <span class=classes>{children()}</span>
    }
}
