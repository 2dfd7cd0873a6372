//! Backend location.
//!
//! The only setting is the base URL of the backend origin. Unset means an
//! empty base, which yields origin-relative paths such as `/posts`.

/// Environment variable holding the backend base URL.
pub const API_BASE_ENV: &str = "POSTS_API_BASE";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    /// Read the base URL from `POSTS_API_BASE`.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_BASE_ENV).ok())
    }

    pub fn from_value(base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        Self { base_url }
    }

    /// True when no origin was configured.
    pub fn is_relative(&self) -> bool {
        self.base_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_base_is_empty() {
        let config = ClientConfig::from_value(None);
        assert_eq!(config.base_url, "");
        assert!(config.is_relative());
    }

    #[test]
    fn base_is_trimmed() {
        let config = ClientConfig::from_value(Some("  http://localhost:3001 ".to_string()));
        assert_eq!(config.base_url, "http://localhost:3001");
        assert!(!config.is_relative());
    }
}
