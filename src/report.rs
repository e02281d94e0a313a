//! Reporting policy: which evaluated combinations are worth emitting.

use serde::{Deserialize, Serialize};

/// Overflow bound used when none is given.
pub const DEFAULT_MAX_OVERFLOW: u32 = 10;

/// Tier bound used when none is given.
pub const DEFAULT_MIN_TIER: u32 = 38;

/// Threshold regime for reporting a combination.
///
/// # Examples
///
/// ```rust
/// use armorcalc::ReportRegime;
///
/// let regime = ReportRegime::bounded(10, 38);
/// assert!(regime.should_report(38, 9));
/// assert!(!regime.should_report(38, 10));
/// assert!(!regime.should_report(37, 0));
///
/// // The legacy regime also accepts any tier of 40 or more.
/// assert!(ReportRegime::Legacy.should_report(40, 30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum ReportRegime {
    /// `(overflow <= 9 && tier >= 38) || tier >= 40`, fixed.
    Legacy,
    /// `overflow < max_overflow && tier >= min_tier`.
    Bounded { max_overflow: u32, min_tier: u32 },
}

impl ReportRegime {
    const LEGACY_MAX_OVERFLOW: u32 = 9;
    const LEGACY_MIN_TIER: u64 = 38;
    const LEGACY_HIGH_TIER: u64 = 40;

    pub fn bounded(max_overflow: u32, min_tier: u32) -> Self {
        ReportRegime::Bounded {
            max_overflow,
            min_tier,
        }
    }

    /// Whether a combination with this tier and overflow is reported.
    pub fn should_report(&self, tier: u64, overflow: u32) -> bool {
        match *self {
            ReportRegime::Legacy => {
                (overflow <= Self::LEGACY_MAX_OVERFLOW && tier >= Self::LEGACY_MIN_TIER)
                    || tier >= Self::LEGACY_HIGH_TIER
            }
            ReportRegime::Bounded {
                max_overflow,
                min_tier,
            } => overflow < max_overflow && tier >= u64::from(min_tier),
        }
    }
}

impl Default for ReportRegime {
    fn default() -> Self {
        ReportRegime::bounded(DEFAULT_MAX_OVERFLOW, DEFAULT_MIN_TIER)
    }
}
