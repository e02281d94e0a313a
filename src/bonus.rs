//! Tier bonus module.
//!
//! Bonuses are flat tier points added on top of the base tier of a
//! combination. They come from stat mods, powerful-friends mods and an
//! assumed full masterwork. Which of them count, and how, is decided by
//! a `BonusConfig` value fixed before the search starts.

use crate::error::ArmorError;
use serde::{Deserialize, Serialize};

/// Most stat mods a loadout can slot.
pub const MAX_MODS: u8 = 5;

/// Most powerful-friends mods a loadout can slot.
pub const MAX_POWERFUL: u8 = 2;

/// Tier points for a fully masterworked set.
pub const MASTERWORK_BONUS: u64 = 6;

/// Mobility the traction boost would add. The boost itself is disabled.
pub const TRACTION_MOBILITY_BONUS: u32 = 5;

/// How mod counts turn into tier points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BonusPolicy {
    /// One tier point per stat mod. Powerful-friends mods are not counted.
    Flat,
    /// One tier point per stat mod and one per powerful-friends mod.
    Single,
    /// One tier point per stat mod plus two per powerful-friends mod.
    #[default]
    Paired,
}

/// Bonus settings for a search.
///
/// # Examples
///
/// ```rust
/// use armorcalc::bonus::{BonusConfig, BonusPolicy};
///
/// let bonus = BonusConfig::new(BonusPolicy::Paired)
///     .with_mods(3)
///     .with_powerful(2)
///     .with_masterwork(true);
///
/// bonus.validate().unwrap();
/// let tier = bonus.apply(30);
/// assert_eq!(tier.total(), 30 + 3 + 4 + 6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusConfig {
    pub policy: BonusPolicy,
    /// Stat mods applied, `0..=MAX_MODS`.
    pub mods: u8,
    /// Powerful-friends mods applied, `0..=MAX_POWERFUL`.
    pub powerful: u8,
    /// Assume every piece is masterworked.
    pub masterwork: bool,
    /// Gate for the traction boost. Must stay off; `validate` rejects it.
    #[serde(default)]
    pub traction: bool,
}

impl BonusConfig {
    /// No mods, no masterwork, under the given policy.
    pub fn new(policy: BonusPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn with_mods(mut self, mods: u8) -> Self {
        self.mods = mods;
        self
    }

    pub fn with_powerful(mut self, powerful: u8) -> Self {
        self.powerful = powerful;
        self
    }

    pub fn with_masterwork(mut self, masterwork: bool) -> Self {
        self.masterwork = masterwork;
        self
    }

    /// Check counts against their bounds and that traction is off.
    pub fn validate(&self) -> Result<(), ArmorError> {
        if self.mods > MAX_MODS {
            return Err(ArmorError::OutOfRange {
                setting: "mods",
                value: u32::from(self.mods),
                max: u32::from(MAX_MODS),
            });
        }
        if self.powerful > MAX_POWERFUL {
            return Err(ArmorError::OutOfRange {
                setting: "powerful",
                value: u32::from(self.powerful),
                max: u32::from(MAX_POWERFUL),
            });
        }
        if self.traction {
            return Err(ArmorError::TractionDisabled);
        }
        Ok(())
    }

    /// Add the configured bonuses to a base tier.
    pub fn apply(&self, base: u64) -> TierBreakdown {
        let powerful = match self.policy {
            BonusPolicy::Flat => 0,
            BonusPolicy::Single => u64::from(self.powerful),
            BonusPolicy::Paired => 2 * u64::from(self.powerful),
        };
        TierBreakdown {
            base,
            mods: u64::from(self.mods),
            powerful,
            masterwork: if self.masterwork { MASTERWORK_BONUS } else { 0 },
        }
    }
}

/// A tier score split by where its points came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBreakdown {
    /// Sum of `stat / 10` over the six dimensions.
    pub base: u64,
    pub mods: u64,
    pub powerful: u64,
    pub masterwork: u64,
}

impl TierBreakdown {
    /// Adjusted tier.
    pub fn total(&self) -> u64 {
        self.base + self.mods + self.powerful + self.masterwork
    }
}

impl std::fmt::Display for TierBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "base {} + mods {} + powerful {} + masterwork {}",
            self.base, self.mods, self.powerful, self.masterwork
        )
    }
}
