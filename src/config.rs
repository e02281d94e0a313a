//! Search configuration.
//!
//! A `SearchConfig` is built once, validated, and then passed by
//! reference to everything that needs it. Nothing in the search reads
//! settings from anywhere else.

use crate::bonus::BonusConfig;
use crate::error::ArmorError;
use crate::item::GuardianClass;
use crate::report::ReportRegime;
use serde::{Deserialize, Serialize};

/// Immutable settings for one search.
///
/// # Examples
///
/// ```rust
/// use armorcalc::{GuardianClass, ReportRegime, SearchConfig};
/// use armorcalc::bonus::{BonusConfig, BonusPolicy};
///
/// let config = SearchConfig::new()
///     .with_selector(GuardianClass::Titan)
///     .with_bonus(BonusConfig::new(BonusPolicy::Paired).with_mods(5))
///     .with_regime(ReportRegime::bounded(8, 40));
///
/// assert!(config.validate().is_ok());
/// assert!(config.exotic_limit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Keep only items of this owner class.
    pub selector: Option<GuardianClass>,
    pub bonus: BonusConfig,
    pub regime: ReportRegime,
    /// Reject combinations with more than one exotic.
    pub exotic_limit: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            selector: None,
            bonus: BonusConfig::default(),
            regime: ReportRegime::default(),
            exotic_limit: true,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selector(mut self, selector: GuardianClass) -> Self {
        self.selector = Some(selector);
        self
    }

    pub fn with_bonus(mut self, bonus: BonusConfig) -> Self {
        self.bonus = bonus;
        self
    }

    pub fn with_regime(mut self, regime: ReportRegime) -> Self {
        self.regime = regime;
        self
    }

    pub fn with_exotic_limit(mut self, exotic_limit: bool) -> Self {
        self.exotic_limit = exotic_limit;
        self
    }

    /// Fail fast on out-of-range settings.
    pub fn validate(&self) -> Result<(), ArmorError> {
        self.bonus.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bonus::BonusPolicy;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.selector, None);
        assert_eq!(config.bonus.policy, BonusPolicy::Paired);
        assert_eq!(config.regime, ReportRegime::bounded(10, 38));
        assert!(config.exotic_limit);
    }

    #[test]
    fn test_validate_propagates_bonus_errors() {
        let config = SearchConfig::new().with_bonus(BonusConfig::default().with_powerful(9));
        assert!(matches!(
            config.validate(),
            Err(ArmorError::OutOfRange { setting: "powerful", .. })
        ));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = SearchConfig::new()
            .with_selector(GuardianClass::Hunter)
            .with_regime(ReportRegime::Legacy)
            .with_exotic_limit(false);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"hunter\""));
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
