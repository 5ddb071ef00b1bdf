use leptos::prelude::*;

/// Hover-reveal panel: the trigger row stays in normal flow, the panel
/// appears on mouseover and hides on mouseout.
#[component]
pub fn HoverCard(
    /// Always-visible trigger content
    #[prop(into)]
    trigger: ViewFn,
    /// Panel content shown while hovered
    children: ChildrenFn,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div
            class="hover-card"
            on:mouseenter=move |_| set_open.set(true)
            on:mouseleave=move |_| set_open.set(false)
        >
            <div class="hover-card__trigger">
                {trigger.run()}
            </div>
            <Show when=move || open.get()>
                <div class="hover-card__panel">
                    {children()}
                </div>
            </Show>
        </div>
    }
}
