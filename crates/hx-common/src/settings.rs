use thiserror::Error;

use crate::matching::{weights::MatchingWeights, DEFAULT_TOP_N};
use crate::validation::ValidationError;

/// Upper bound on `top_n` enforced at the API boundary.
pub const DEFAULT_MAX_TOP_N: i64 = 20;

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("invalid matching weights: {0}")]
    Weights(#[from] ValidationError),
    #[error("default top_n {default} must be within 1..={max}")]
    TopN { default: i64, max: i64 },
}

/// Runtime knobs for callers of the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    pub weights: MatchingWeights,
    pub default_top_n: i64,
    pub max_top_n: i64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            weights: MatchingWeights::default(),
            default_top_n: DEFAULT_TOP_N,
            max_top_n: DEFAULT_MAX_TOP_N,
        }
    }
}

impl EngineSettings {
    /// Reads `HX_WEIGHT_*`, `HX_DEFAULT_TOP_N` and `HX_MAX_TOP_N`.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineSettings::from_env`] over an arbitrary key lookup.
    ///
    /// Missing or unparsable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let float = |key: &str, fallback: f64| {
            lookup(key)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .unwrap_or(fallback)
        };
        let int = |key: &str, fallback: i64| {
            lookup(key)
                .and_then(|s| s.trim().parse::<i64>().ok())
                .unwrap_or(fallback)
        };

        let base = defaults.weights;
        let weights = MatchingWeights::new(
            float("HX_WEIGHT_SKILLS", base.skills()),
            float("HX_WEIGHT_EXPERIENCE", base.experience()),
            float("HX_WEIGHT_SALARY", base.salary()),
            float("HX_WEIGHT_LOCATION", base.location()),
            float("HX_WEIGHT_INDUSTRY", base.industry()),
        )?;

        let settings = Self {
            weights,
            default_top_n: int("HX_DEFAULT_TOP_N", defaults.default_top_n),
            max_top_n: int("HX_MAX_TOP_N", defaults.max_top_n),
        };

        if !(1..=settings.max_top_n).contains(&settings.default_top_n) {
            return Err(SettingsError::TopN {
                default: settings.default_top_n,
                max: settings.max_top_n,
            });
        }

        Ok(settings)
    }
}
