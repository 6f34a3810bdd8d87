use crate::shared::errors::{MenuError, Result};

/// Typed widget configuration.
///
/// Replaces an implicit attribute read: the source URL is validated here, at
/// construction time, so a misconfigured widget fails immediately with a
/// descriptive error instead of surfacing later as an opaque network failure.
/// Construction is the only way to build one, so every instance holds a
/// usable source URL.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuConfig {
    source_url: String,
}

impl MenuConfig {
    pub fn new(source_url: impl Into<String>) -> Result<Self> {
        let source_url = source_url.into().trim().to_string();
        if source_url.is_empty() {
            return Err(MenuError::Config(
                "menu source URL must be a non-empty path or URL".to_string(),
            ));
        }
        Ok(Self { source_url })
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_url_accepted() {
        let config = MenuConfig::new("/menu.json").unwrap();
        assert_eq!(config.source_url(), "/menu.json");
    }

    #[test]
    fn test_url_is_trimmed() {
        let config = MenuConfig::new("  /assets/menu.json  ").unwrap();
        assert_eq!(config.source_url(), "/assets/menu.json");
    }

    #[test]
    fn test_empty_url_rejected() {
        let err = MenuConfig::new("").unwrap_err();
        assert!(matches!(err, MenuError::Config(_)));
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn test_whitespace_url_rejected() {
        let err = MenuConfig::new("   \t ").unwrap_err();
        assert!(matches!(err, MenuError::Config(_)));
    }
}
