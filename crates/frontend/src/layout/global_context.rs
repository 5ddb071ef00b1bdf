use contracts::analytics::Granularity;
use contracts::domain::b001_brand::Brand;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::domain::b001_brand::fixture::seed_brands;

/// Application-wide view state.
///
/// The brand list is the only mutable resource in the app and it is only
/// ever read and appended-to on the UI thread; everything the charts show
/// is derived from it on render.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// In-memory brand list, seeded from the fixture. Append-only.
    pub brands: RwSignal<Vec<Brand>>,
    /// Time bucketing selected for the sales-performance chart
    pub granularity: RwSignal<Granularity>,
    /// Brand name of the currently opened details view
    pub selected_brand: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            brands: RwSignal::new(seed_brands()),
            granularity: RwSignal::new(Granularity::default()),
            selected_brand: RwSignal::new(None),
        }
    }

    /// Append-only insertion; there is no update or delete path.
    pub fn append_brand(&self, brand: Brand) {
        log::debug!("appending brand '{}'", brand.brand_name);
        self.brands.update(|list| list.push(brand));
    }

    pub fn open_brand(&self, brand_name: &str) {
        log::debug!("navigating to brand '{}'", brand_name);
        self.selected_brand.set(Some(brand_name.to_string()));
    }

    pub fn close_brand(&self) {
        self.selected_brand.set(None);
    }

    /// Syncs the selected brand with the `?brand=` query parameter so a
    /// details view survives a page reload.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(brand_name) = params.get("brand").cloned() {
            self.selected_brand.set(Some(brand_name));
        }

        let this = *self;
        Effect::new(move |_| {
            let desired = brand_query(this.selected_brand.get().as_deref());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            // Skip redundant replace_state calls
            if search_matches(&current_search, desired.as_deref()) {
                return;
            }

            let target = match desired {
                Some(query) => format!("?{}", query),
                // Dropping the query needs the bare pathname
                None => window()
                    .and_then(|w| w.location().pathname().ok())
                    .unwrap_or_else(|| "/".to_string()),
            };
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&target),
                    );
                }
            }
        });
    }
}

/// Query string for a selection, without the leading `?`.
fn brand_query(selected: Option<&str>) -> Option<String> {
    selected.map(|brand_name| {
        serde_qs::to_string(&HashMap::from([(
            "brand".to_string(),
            brand_name.to_string(),
        )]))
        .unwrap_or_default()
    })
}

/// Whether `location.search` already reflects the selection.
fn search_matches(current_search: &str, desired: Option<&str>) -> bool {
    current_search.trim_start_matches('?') == desired.unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_selection_produces_no_query() {
        assert_eq!(brand_query(None), None);
        assert_eq!(brand_query(Some("Velora")), Some("brand=Velora".to_string()));
    }

    #[test]
    fn clean_startup_needs_no_url_rewrite() {
        // Empty search with no selection is already in sync
        assert!(search_matches("", None));
        assert!(search_matches("?brand=Velora", Some("brand=Velora")));
    }

    #[test]
    fn stale_search_triggers_a_rewrite() {
        assert!(!search_matches("?brand=Velora", None));
        assert!(!search_matches("", Some("brand=Velora")));
        assert!(!search_matches("?brand=Velora", Some("brand=Sundial")));
    }
}
