use crate::layout::global_context::AppGlobalContext;
use contracts::domain::b001_brand::BrandDto;
use leptos::prelude::*;

/// ViewModel for the create-brand form
#[derive(Clone, Copy)]
pub struct BrandCreateViewModel {
    pub form: RwSignal<BrandDto>,
}

impl BrandCreateViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(BrandDto::default()),
        }
    }

    /// Routes one input event into the DTO by its dotted form path.
    pub fn set_field(&self, path: &'static str, value: String) {
        self.form.update(|f| f.apply_path(path, value));
    }

    pub fn is_form_valid(&self) -> bool {
        !self.form.get().is_empty()
    }

    /// Appends the new brand to the in-memory list and resets the form.
    ///
    /// Duplicate brand names are rejected: the name is the display key for
    /// navigation and the chart series. Malformed numerics are accepted and
    /// later aggregate to zero, per the dashboard's silent-fallback policy.
    pub fn submit_command(&self, ctx: AppGlobalContext, on_saved: Callback<()>) {
        let dto = self.form.get();
        if dto.is_empty() {
            return;
        }
        if ctx.brands.with(|brands| dto.conflicts_with(brands)) {
            log::warn!("brand '{}' already exists, not appending", dto.brand_name.trim());
            return;
        }
        ctx.append_brand(dto.into_brand());
        self.form.set(BrandDto::default());
        on_saved.run(());
    }
}
