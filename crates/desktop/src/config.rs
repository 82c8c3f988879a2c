//! Desktop client settings.

/// Environment variable overriding the currency prefix shown in the price column.
pub const CURRENCY_PREFIX_VAR: &str = "STOCKDESK_CURRENCY_PREFIX";

pub const DEFAULT_CURRENCY_PREFIX: &str = "R$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    /// Prefix rendered before every price, separated by one space.
    pub currency_prefix: String,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            currency_prefix: DEFAULT_CURRENCY_PREFIX.to_string(),
        }
    }
}

impl DesktopConfig {
    /// Read settings from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(prefix) = lookup(CURRENCY_PREFIX_VAR) {
            let prefix = prefix.trim();
            if !prefix.is_empty() {
                config.currency_prefix = prefix.to_string();
            }
        }
        config
    }

    pub fn with_currency_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.currency_prefix = prefix.into();
        self
    }
}
