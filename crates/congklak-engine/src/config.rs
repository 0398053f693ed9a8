//! Move selector configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::eval::{EvalWeights, StoreDifference, Weighted};
use crate::search::{Minimax, MoveSelector};

/// Which evaluator the minimax selector searches with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Store difference only.
    Baseline,
    /// Weighted multi-term evaluation.
    #[default]
    Weighted,
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "baseline" => Ok(Algorithm::Baseline),
            "weighted" => Ok(Algorithm::Weighted),
            _ => Err(ConfigError::UnknownAlgorithm { name: s.to_string() }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Baseline => f.write_str("baseline"),
            Algorithm::Weighted => f.write_str("weighted"),
        }
    }
}

/// Settings for building a [`MoveSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    pub algorithm: Algorithm,
    pub depth: u8,
    pub threads: usize,
    /// Only used by [`Algorithm::Weighted`].
    pub weights: EvalWeights,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Weighted,
            depth: 4,
            threads: 1,
            weights: EvalWeights::default(),
        }
    }
}

impl SelectorConfig {
    /// Check the configuration for values no selector can use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(())
    }

    /// Build the configured selector.
    pub fn build(&self) -> Result<Box<dyn MoveSelector>, ConfigError> {
        self.validate()?;
        let selector: Box<dyn MoveSelector> = match self.algorithm {
            Algorithm::Baseline => {
                Box::new(Minimax::new(StoreDifference, self.depth).with_threads(self.threads))
            }
            Algorithm::Weighted => Box::new(
                Minimax::new(Weighted::new(self.weights), self.depth).with_threads(self.threads),
            ),
        };
        Ok(selector)
    }
}
