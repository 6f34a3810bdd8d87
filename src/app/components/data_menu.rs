//! Sidebar menu widget
//!
//! Fetches an ordered list of `{name, url}` entries from the configured JSON
//! source and renders one clickable row per entry. The visual contract is
//! fixed and carried entirely as inline style constants, so host stylesheets
//! cannot restyle the rows and the widget leaks no selectors into the page.

use dioxus::prelude::*;

use crate::config::MenuConfig;
use crate::shared::logging;
use crate::shared::services::MenuSource;

// Fixed visual contract
const MENU_WIDTH_PX: u32 = 200;
const ROW_PADDING_PX: u32 = 15;
const ROW_FONT_PX: u32 = 20;
const SEPARATOR_COLOR: &str = "rgb(45, 45, 45)";

fn container_style() -> String {
    format!(
        "height: 100vh; width: {MENU_WIDTH_PX}px; \
         border-right: 5px solid {SEPARATOR_COLOR}; \
         display: flex; flex-direction: column; margin: 0; padding: 0;"
    )
}

/// Inline style for row `index` of `total`. Every row except the first gets a
/// dashed top separator; the last row gets a solid bottom border; hovering
/// swaps in the highlight background.
fn row_style(index: usize, total: usize, hovered: bool) -> String {
    let mut style = format!(
        "padding: {ROW_PADDING_PX}px; font-size: {ROW_FONT_PX}px; cursor: pointer;"
    );
    if index > 0 {
        style.push_str(&format!(" border-top: 3px dashed {SEPARATOR_COLOR};"));
    }
    if index + 1 == total {
        style.push_str(&format!(" border-bottom: 3px solid {SEPARATOR_COLOR};"));
    }
    if hovered {
        style.push_str(&format!(" background-color: {SEPARATOR_COLOR}; color: white;"));
    }
    style
}

/// Full top-level navigation to a menu entry target (not a router
/// sub-navigation). Inert during server-side rendering.
#[cfg(target_arch = "wasm32")]
fn navigate(url: &str) {
    logging::log_navigation(url);
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(url) {
            tracing::warn!(target_url = url, "Navigation failed: {err:?}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn navigate(url: &str) {
    logging::log_navigation(url);
}

/// Sidebar menu component.
///
/// One fetch per instantiation, no update protocol. Rows attach in a single
/// render pass once the payload resolves; while the fetch is pending (or
/// forever, if it never resolves) the bare container is shown. Failures are
/// logged, surfaced through `on_error`, and leave the container empty - no
/// error UI is drawn inside the widget.
#[component]
pub fn DataMenu(
    config: MenuConfig,
    #[props(default)] on_error: Option<EventHandler<String>>,
) -> Element {
    let source_url = config.source_url().to_string();

    let entries = use_resource(move || {
        let url = source_url.clone();
        let handler = on_error;
        async move {
            match MenuSource::new(url.clone()).fetch_entries().await {
                Ok(list) => Some(list),
                Err(err) => {
                    logging::log_menu_fetch_error(&url, &err.to_string());
                    if let Some(handler) = handler {
                        handler.call(err.to_string());
                    }
                    None
                }
            }
        }
    });

    let rows = match &*entries.read() {
        Some(Some(list)) => list.clone(),
        // Pending or failed: bare container, no rows, no error indicator
        _ => Vec::new(),
    };
    let total = rows.len();

    rsx! {
        aside {
            style: container_style(),
            for (index, entry) in rows.into_iter().enumerate() {
                MenuRow {
                    key: "{index}",
                    index,
                    total,
                    name: entry.name,
                    url: entry.url,
                }
            }
        }
    }
}

#[component]
fn MenuRow(index: usize, total: usize, name: String, url: String) -> Element {
    let mut is_hovered = use_signal(|| false);
    let style = row_style(index, total, is_hovered());

    rsx! {
        div {
            style: style,
            onmouseenter: move |_| is_hovered.set(true),
            onmouseleave: move |_| is_hovered.set(false),
            onclick: move |_| navigate(&url),
            "{name}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_fixed_dimensions() {
        let style = container_style();
        assert!(style.contains("height: 100vh"));
        assert!(style.contains("width: 200px"));
        assert!(style.contains("border-right: 5px solid rgb(45, 45, 45)"));
        assert!(style.contains("flex-direction: column"));
    }

    #[test]
    fn test_first_row_has_no_top_separator() {
        let style = row_style(0, 3, false);
        assert!(!style.contains("border-top"));
        assert!(style.contains("padding: 15px"));
        assert!(style.contains("font-size: 20px"));
        assert!(style.contains("cursor: pointer"));
    }

    #[test]
    fn test_inner_rows_have_dashed_top_separator() {
        let style = row_style(1, 3, false);
        assert!(style.contains("border-top: 3px dashed rgb(45, 45, 45)"));
        assert!(!style.contains("border-bottom"));
    }

    #[test]
    fn test_last_row_has_solid_bottom_border() {
        let style = row_style(2, 3, false);
        assert!(style.contains("border-bottom: 3px solid rgb(45, 45, 45)"));
    }

    #[test]
    fn test_single_row_is_first_and_last() {
        let style = row_style(0, 1, false);
        assert!(!style.contains("border-top"));
        assert!(style.contains("border-bottom: 3px solid rgb(45, 45, 45)"));
    }

    #[test]
    fn test_hover_toggles_highlight() {
        assert!(!row_style(0, 2, false).contains("background-color"));
        assert!(row_style(0, 2, true).contains("background-color: rgb(45, 45, 45)"));
    }
}
