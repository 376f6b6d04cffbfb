use serde::{Deserialize, Serialize};

/// Stores engine preferences loaded from `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub limits: LedgerLimits,
    #[serde(default = "Config::default_log_filter")]
    pub log_filter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Caller identity the shell starts with. Defaults to `local`.
    pub default_owner: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limits: LedgerLimits::default(),
            log_filter: Self::default_log_filter(),
            default_owner: None,
        }
    }
}

impl Config {
    pub fn default_log_filter() -> String {
        "budget_ledger=info".into()
    }

    pub fn resolve_default_owner(&self) -> String {
        self.default_owner
            .as_deref()
            .map(str::trim)
            .filter(|owner| !owner.is_empty())
            .unwrap_or("local")
            .to_string()
    }
}

/// Upper bounds, in characters, for caller-supplied text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerLimits {
    #[serde(default = "LedgerLimits::default_name_len")]
    pub max_account_name_len: usize,
    #[serde(default = "LedgerLimits::default_category_len")]
    pub max_category_len: usize,
    #[serde(default = "LedgerLimits::default_description_len")]
    pub max_description_len: usize,
}

impl LedgerLimits {
    fn default_name_len() -> usize {
        50
    }

    fn default_category_len() -> usize {
        50
    }

    fn default_description_len() -> usize {
        100
    }
}

impl Default for LedgerLimits {
    fn default() -> Self {
        Self {
            max_account_name_len: Self::default_name_len(),
            max_category_len: Self::default_category_len(),
            max_description_len: Self::default_description_len(),
        }
    }
}
