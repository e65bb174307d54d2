//! Generation configuration parameters

use serde::{Deserialize, Serialize};

use super::error::LlmError;

/// Total token budget shared by the prompt and the reply
pub const DEFAULT_MAX_LENGTH: usize = 1000;

/// Tokens kept free for the reply when a prompt has to be truncated
pub const DEFAULT_MIN_NEW_TOKENS: usize = 32;

/// Token budget for one greedy generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum length of prompt plus continuation, in tokens
    pub max_length: usize,
    /// Smallest continuation a truncated prompt must leave room for
    pub min_new_tokens: usize,
}

impl GenerationConfig {
    /// Create a new configuration with the specified total budget
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            ..Default::default()
        }
    }

    /// Set the reply reservation
    pub fn with_min_new_tokens(mut self, min_new_tokens: usize) -> Self {
        self.min_new_tokens = min_new_tokens;
        self
    }

    /// Largest prompt, in tokens, that still leaves `min_new_tokens` for the reply
    pub fn input_budget(&self) -> usize {
        self.max_length.saturating_sub(self.min_new_tokens)
    }

    /// Reject budgets that cannot produce any output
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.min_new_tokens == 0 {
            return Err(LlmError::InvalidRequest(
                "min_new_tokens must be at least 1".to_string(),
            ));
        }
        if self.min_new_tokens >= self.max_length {
            return Err(LlmError::InvalidRequest(format!(
                "min_new_tokens ({}) must be smaller than max_length ({})",
                self.min_new_tokens, self.max_length
            )));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            min_new_tokens: DEFAULT_MIN_NEW_TOKENS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = GenerationConfig::default();
        assert_eq!(config.max_length, 1000);
        assert_eq!(config.min_new_tokens, 32);
        assert_eq!(config.input_budget(), 968);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = GenerationConfig::new(512).with_min_new_tokens(64);

        assert_eq!(config.max_length, 512);
        assert_eq!(config.min_new_tokens, 64);
        assert_eq!(config.input_budget(), 448);
    }

    #[test]
    fn test_validate_rejects_unusable_budgets() {
        assert!(GenerationConfig::new(10).with_min_new_tokens(0).validate().is_err());
        assert!(GenerationConfig::new(10).with_min_new_tokens(10).validate().is_err());
        assert!(GenerationConfig::new(10).with_min_new_tokens(9).validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = GenerationConfig::new(1000);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"max_length\":1000"));
        assert!(json.contains("\"min_new_tokens\":32"));
    }
}
