//! Runtime configuration for the key pair generator.

use clap::Parser;

/// Bitcoin Key Pair Generator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Number of key pairs to generate
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Print only the address and WIF private key
    #[arg(short, long, default_value = "false")]
    pub short: bool,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidCount(
                "Count must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid count: {0}")]
    InvalidCount(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_config(count: usize) -> Config {
        Config {
            count,
            short: false,
        }
    }

    #[test]
    fn test_valid_count() {
        let config = make_test_config(1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_count() {
        let config = make_test_config(0);
        assert!(config.validate().is_err());
    }
}
