use leptos::prelude::*;

/// Labeled dropdown over `(value, label)` pairs. The selected entry follows
/// `value` reactively, so external state changes are reflected in the control.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Currently selected value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler, receives the newly selected value
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options as (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let field_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || {
                label.get().map(|text| view! {
                    <label class="form__label" for=field_id>{text}</label>
                })
            }}
            <select
                id=field_id
                class=move || format!("form__select {}", class.get().unwrap_or_default())
                on:change=move |ev| {
                    if let Some(cb) = on_change {
                        cb.run(event_target_value(&ev));
                    }
                }
            >
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(code, text)| {
                            let selected = value.get() == code;
                            view! {
                                <option value=code selected=selected>{text}</option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
