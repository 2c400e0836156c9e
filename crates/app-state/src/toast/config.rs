//! Toast queue configuration

use serde::{Deserialize, Serialize};

use super::{Result, ToastError};

/// Default maximum number of concurrently active toasts
pub const DEFAULT_MAX_TOASTS: usize = 3;

/// Default auto-dismiss delay in milliseconds
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

/// Toast queue configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToastConfig {
    /// Maximum number of active toasts; older ones are evicted
    pub max_toasts: usize,
    /// Auto-dismiss delay used when a toast does not specify one
    pub default_duration_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { max_toasts: DEFAULT_MAX_TOASTS, default_duration_ms: DEFAULT_TOAST_DURATION_MS }
    }
}

impl ToastConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set max active toasts (clamped to at least 1)
    pub fn with_max_toasts(mut self, max: usize) -> Self {
        self.max_toasts = max.max(1);
        self
    }

    /// Set the default auto-dismiss delay
    pub fn with_default_duration_ms(mut self, duration_ms: u64) -> Self {
        self.default_duration_ms = duration_ms;
        self
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ToastConfig = serde_json::from_str(json)?;
        if config.max_toasts == 0 {
            return Err(ToastError::InvalidConfig("maxToasts must be at least 1".to_string()));
        }
        Ok(config)
    }
}
