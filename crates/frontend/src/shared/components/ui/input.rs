use leptos::prelude::*;

/// Labeled text input bound to external state.
///
/// The component never owns form data: `value` comes from the caller and
/// every keystroke is reported back through `on_input`.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current field value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler, receives the full field text
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// ID for the input element
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
            <input
                type="text"
                id=field_id
                class=move || format!("form__input {}", class.get().unwrap_or_default())
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                on:input=move |ev| {
                    if let Some(cb) = on_input {
                        cb.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
