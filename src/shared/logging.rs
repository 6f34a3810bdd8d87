//! Structured logging module for data-menu
//!
//! Provides consistent, contextual logging across the widget lifecycle.
//! Uses structured fields so fetch and registration events stay greppable.

/// Log levels for different operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    MenuFetch,
    Registration,
    Navigation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::MenuFetch => "menu_fetch",
            LogOperation::Registration => "registration",
            LogOperation::Navigation => "navigation",
        }
    }
}

/// Log the start of a menu fetch
pub fn log_menu_fetch_start(source_url: &str) {
    tracing::debug!(
        operation = LogOperation::MenuFetch.as_str(),
        source_url = source_url,
        "Fetching menu entries"
    );
}

/// Log a completed menu fetch
pub fn log_menu_fetch_result(source_url: &str, entry_count: usize) {
    tracing::info!(
        operation = LogOperation::MenuFetch.as_str(),
        source_url = source_url,
        entry_count = entry_count,
        "Menu entries loaded"
    );
}

/// Log a failed menu fetch (the widget stays empty)
pub fn log_menu_fetch_error(source_url: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::MenuFetch.as_str(),
        source_url = source_url,
        error = error,
        "Menu failed to populate"
    );
}

/// Log a widget registration attempt
pub fn log_registration(tag: &str, newly_registered: bool) {
    if newly_registered {
        tracing::info!(
            operation = LogOperation::Registration.as_str(),
            tag = tag,
            "Widget registered"
        );
    } else {
        tracing::debug!(
            operation = LogOperation::Registration.as_str(),
            tag = tag,
            "Widget already registered - skipping"
        );
    }
}

/// Log a row click navigation
pub fn log_navigation(target_url: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        target_url = target_url,
        "Navigating to menu entry"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::MenuFetch.as_str(), "menu_fetch");
        assert_eq!(LogOperation::Registration.as_str(), "registration");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
    }
}
