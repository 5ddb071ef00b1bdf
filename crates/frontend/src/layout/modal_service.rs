use leptos::prelude::*;

/// Show/hide state for the create-brand dialog, provided once at the app
/// root so any component can open it.
#[derive(Clone, Copy)]
pub struct ModalService {
    open: RwSignal<bool>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    pub fn show(&self) {
        self.open.set(true);
    }

    pub fn hide(&self) {
        self.open.set(false);
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }
}

/// Overlay host for dialog content. Clicking the backdrop closes the
/// dialog; clicks inside the content area do not.
#[component]
pub fn Modal(children: ChildrenFn) -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    view! {
        <Show when=move || modal.is_open()>
            <div class="modal-overlay" on:click=move |_| modal.hide()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
