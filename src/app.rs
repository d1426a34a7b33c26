use dioxus::prelude::*;
use storefront_core::CatalogClient;

use crate::context::get_catalog_endpoint;
use crate::pages::Storefront;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the catalog client context, then renders the
/// single storefront page. There is no routing; the catalog grid is the app.
#[component]
pub fn App() -> Element {
    // Provide the catalog client to all child components
    use_context_provider(|| CatalogClient::new(get_catalog_endpoint()));

    rsx! {
        style { {GLOBAL_STYLES} }
        Storefront {}
    }
}
