pub mod components;
pub mod registry;

use dioxus::document;
use dioxus::prelude::*;

use crate::config::MenuConfig;

/// Demo data shipped with the crate; served as a static asset.
const MENU_SOURCE: &str = "/assets/menu.json";

#[component]
pub fn App() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    use_effect(|| {
        tracing::info!("Dioxus App initialized successfully");
    });

    // The widget goes through the registry rather than being named directly,
    // so the demo exercises the same path a host application would.
    let sidebar = match MenuConfig::new(MENU_SOURCE) {
        Ok(config) => registry::instantiate(
            registry::DATA_MENU_TAG,
            config,
            Some(EventHandler::new(|message: String| {
                tracing::warn!(error = %message, "Sidebar menu failed to populate");
            })),
        ),
        Err(err) => {
            tracing::error!(error = %err, "Invalid sidebar configuration");
            None
        }
    };

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            {sidebar}

            main { class: "c-layout__main",
                h1 { "data-menu" }
                p { class: "c-layout__hint",
                    "Menu entries are loaded from {MENU_SOURCE}. Click a row to navigate."
                }
            }
        }
    }
}
