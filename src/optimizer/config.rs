use crate::errors::{ConfigError, SubpolishResult};
use serde::{Deserialize, Serialize};

/// Thresholds for the three optimizer passes.
///
/// Missing keys in a JSON config fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Gaps strictly between 0 and this many seconds are closed
    pub gap_threshold: f64,
    /// Segments with fewer words than this count as fragments
    pub short_fragment_words: usize,
    /// Merge budget when the current segment is CJK-dominant
    pub max_words_cjk: usize,
    /// Merge budget for everything else
    pub max_words_other: usize,
    /// CJK share of non-whitespace characters above which text is CJK-dominant
    pub cjk_ratio: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            gap_threshold: 1.0,
            short_fragment_words: 5,
            max_words_cjk: 25,
            max_words_other: 18,
            cjk_ratio: 0.5,
        }
    }
}

impl OptimizerConfig {
    pub fn from_json_str(json: &str) -> SubpolishResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gap_threshold.is_finite() || self.gap_threshold < 0.0 {
            return Err(ConfigError::new(format!(
                "gap_threshold must be a non-negative number of seconds, got {}",
                self.gap_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.cjk_ratio) {
            return Err(ConfigError::new(format!(
                "cjk_ratio must be within [0, 1], got {}",
                self.cjk_ratio
            )));
        }
        Ok(())
    }

    pub(crate) fn max_words(&self, cjk: bool) -> usize {
        if cjk {
            self.max_words_cjk
        } else {
            self.max_words_other
        }
    }
}
