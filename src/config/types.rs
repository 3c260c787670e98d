use serde::{Deserialize, Serialize};

use crate::error::{CatFactsError, Result};

/// Default remote fact endpoint
pub const DEFAULT_ENDPOINT: &str = "https://catfact.ninja/fact";

/// Cat facts configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL answering GET with a JSON object holding a `fact` field
    pub endpoint: String,

    /// Hard limit on the remote request, in milliseconds
    pub timeout_ms: u64,

    /// Maximum content width of a speech bubble before wrapping
    pub max_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: 5000,
            max_width: 50,
        }
    }
}

impl Config {
    /// Reject values the provider or formatter cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(CatFactsError::Config("endpoint must not be empty".into()));
        }
        if self.timeout_ms == 0 {
            return Err(CatFactsError::Config(
                "timeout_ms must be greater than zero".into(),
            ));
        }
        if self.max_width == 0 {
            return Err(CatFactsError::Config(
                "max_width must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
