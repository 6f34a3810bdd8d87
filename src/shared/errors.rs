use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MenuError::Config("menu source URL must be a non-empty path or URL".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: menu source URL must be a non-empty path or URL"
        );

        let err = MenuError::Fetch("HTTP 404: Not Found".to_string());
        assert_eq!(err.to_string(), "Fetch error: HTTP 404: Not Found");

        let err = MenuError::Decode("expected an array".to_string());
        assert_eq!(err.to_string(), "Decode error: expected an array");
    }
}
