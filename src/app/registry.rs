//! Process-wide widget registry
//!
//! Widgets are instantiated through explicit factory functions registered
//! once at startup. Registration is idempotent: registering a tag that is
//! already present is a logged no-op, so loading the module twice cannot
//! abort startup with a duplicate-registration failure.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use dioxus::prelude::*;
use once_cell::sync::Lazy;

use crate::app::components::DataMenu;
use crate::config::MenuConfig;
use crate::shared::logging;

/// Factory building a widget element from its validated configuration.
pub type MenuFactory = fn(MenuConfig, Option<EventHandler<String>>) -> Element;

/// Tag under which the sidebar menu widget is registered.
pub const DATA_MENU_TAG: &str = "data-menu";

static REGISTRY: Lazy<DashMap<&'static str, MenuFactory>> = Lazy::new(DashMap::new);

/// Register a widget factory under a tag.
///
/// Returns `true` when the tag was newly registered, `false` when the tag was
/// already present (the existing factory is kept).
pub fn register(tag: &'static str, factory: MenuFactory) -> bool {
    let newly_registered = match REGISTRY.entry(tag) {
        Entry::Occupied(_) => false,
        Entry::Vacant(slot) => {
            slot.insert(factory);
            true
        }
    };
    logging::log_registration(tag, newly_registered);
    newly_registered
}

pub fn is_registered(tag: &str) -> bool {
    REGISTRY.contains_key(tag)
}

/// Build the widget registered under `tag`, or `None` for an unknown tag.
pub fn instantiate(
    tag: &str,
    config: MenuConfig,
    on_error: Option<EventHandler<String>>,
) -> Option<Element> {
    REGISTRY.get(tag).map(|factory| factory(config, on_error))
}

/// Register the crate's built-in widgets. Safe to call more than once.
pub fn register_builtins() {
    register(DATA_MENU_TAG, data_menu_factory);
}

fn data_menu_factory(config: MenuConfig, on_error: Option<EventHandler<String>>) -> Element {
    rsx! {
        DataMenu { config, on_error }
    }
}
