//! Runtime configuration
//!
//! [`Config`] fixes the dataset shape (value count and range) and the
//! animation frame rate for the lifetime of a run. It is parsed once from
//! positional command-line arguments and never mutated afterwards; every
//! regeneration draws from the same configuration.

use std::fmt;

/// Dataset shape and frame pacing, immutable per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of values to generate.
    pub count: usize,
    /// Inclusive lower bound for generated values.
    pub lower: u32,
    /// Inclusive upper bound for generated values.
    pub upper: u32,
    /// Animation ticks per second.
    pub frame_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            count: 60,
            lower: 1,
            upper: 100,
            frame_rate: 60,
        }
    }
}

impl Config {
    /// Parse positional overrides: `[count] [lower] [upper] [fps]`.
    ///
    /// Arguments are optional and fill in left to right; anything omitted
    /// keeps its default. The returned message is meant to be printed with
    /// the usage block.
    pub fn from_args(args: &[String]) -> Result<Config, String> {
        if args.len() > 4 {
            return Err(format!("expected at most 4 arguments, got {}", args.len()));
        }

        let mut config = Config::default();
        if let Some(raw) = args.get(0) {
            config.count = parse_field(raw, "count")?;
        }
        if let Some(raw) = args.get(1) {
            config.lower = parse_field(raw, "lower")?;
        }
        if let Some(raw) = args.get(2) {
            config.upper = parse_field(raw, "upper")?;
        }
        if let Some(raw) = args.get(3) {
            config.frame_rate = parse_field(raw, "fps")?;
            if config.frame_rate == 0 {
                return Err(String::from("fps must be at least 1"));
            }
        }
        Ok(config)
    }

    /// Check the dataset-shaping fields. Called by dataset generation, so
    /// an invalid configuration is caught before the UI starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::ZeroCount);
        }
        if self.upper < self.lower {
            return Err(ConfigError::EmptyRange {
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }
}

fn parse_field<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("invalid {}: '{}'", name, raw))
}

/// Configurations that cannot produce a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `count` is zero: nothing to sort or draw.
    ZeroCount,

    /// The value range is inverted (`upper < lower`).
    EmptyRange { lower: u32, upper: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCount => {
                write!(f, "value count must be at least 1")
            }
            ConfigError::EmptyRange { lower, upper } => {
                write!(
                    f,
                    "invalid value range: lower bound {} exceeds upper bound {}",
                    lower, upper
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_yields_defaults() {
        let config = Config::from_args(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.count, 60);
        assert_eq!(config.lower, 1);
        assert_eq!(config.upper, 100);
        assert_eq!(config.frame_rate, 60);
    }

    #[test]
    fn test_positional_overrides_fill_left_to_right() {
        let config = Config::from_args(&args(&["120"])).unwrap();
        assert_eq!(config.count, 120);
        assert_eq!(config.upper, 100);

        let config = Config::from_args(&args(&["30", "5", "50", "24"])).unwrap();
        assert_eq!(config.count, 30);
        assert_eq!(config.lower, 5);
        assert_eq!(config.upper, 50);
        assert_eq!(config.frame_rate, 24);
    }

    #[test]
    fn test_rejects_garbage_and_extra_args() {
        assert!(Config::from_args(&args(&["sixty"])).is_err());
        assert!(Config::from_args(&args(&["60", "-1"])).is_err());
        assert!(Config::from_args(&args(&["1", "2", "3", "4", "5"])).is_err());
        assert!(Config::from_args(&args(&["60", "1", "100", "0"])).is_err());
    }

    #[test]
    fn test_validate_catches_bad_shapes() {
        let zero = Config {
            count: 0,
            ..Config::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroCount));

        let inverted = Config {
            lower: 10,
            upper: 3,
            ..Config::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(ConfigError::EmptyRange { lower: 10, upper: 3 })
        );

        assert!(Config::default().validate().is_ok());

        // A single-value range is legal
        let flat = Config {
            lower: 7,
            upper: 7,
            ..Config::default()
        };
        assert!(flat.validate().is_ok());
    }
}
