use leptos::prelude::*;

/// Push button. Variants map to the BEM modifier classes in `layout.css`.
#[component]
pub fn Button(
    /// "primary" (default), "secondary", or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = move || {
        let variant = variant.get().unwrap_or_default();
        let modifier = match variant.as_str() {
            "secondary" => "button--secondary",
            "ghost" => "button--ghost",
            _ => "button--primary",
        };
        format!("button {} {}", modifier, class.get().unwrap_or_default())
    };

    view! {
        <button
            class=classes
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
