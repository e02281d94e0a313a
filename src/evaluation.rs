//! Aggregation and stat evaluation.
//!
//! A combination's totals are split per dimension into tier points
//! (`stat / 10`) and a remainder (`stat % 10`). Remainders are points
//! that buy no tier; their sum is the overflow.

use crate::bonus::{BonusConfig, TierBreakdown};
use crate::item::Item;
use crate::stat::{Stat, StatTotals};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Points per tier in a single dimension.
pub const TIER_STEP: u64 = 10;

/// Remainders below this are "low".
pub const LOW_CUTOFF: u32 = 5;

/// Per-dimension remainder of a total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remainder {
    /// `stat % 10`, always in `0..=9`.
    pub val: u32,
    /// `val < 5`.
    pub low: bool,
}

impl Remainder {
    pub fn label(&self) -> &'static str {
        if self.low {
            "low"
        } else {
            "high"
        }
    }
}

/// Remainder of `stat` from the tier step.
///
/// # Examples
///
/// ```rust
/// use armorcalc::evaluation::modulus;
///
/// let r = modulus(23);
/// assert_eq!((r.val, r.low), (3, true));
///
/// let r = modulus(27);
/// assert_eq!((r.val, r.low), (7, false));
/// ```
pub fn modulus(stat: u64) -> Remainder {
    // Always below TIER_STEP, so the narrowing is lossless.
    let val = (stat % TIER_STEP) as u32;
    Remainder {
        val,
        low: val < LOW_CUTOFF,
    }
}

/// One remainder per stat dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainderSet([Remainder; 6]);

impl RemainderSet {
    /// Remainders of every dimension of `totals`.
    pub fn of(totals: &StatTotals) -> Self {
        Self(totals.to_array().map(modulus))
    }

    /// `(stat, remainder)` pairs in [`Stat::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, Remainder)> + '_ {
        Stat::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Index<Stat> for RemainderSet {
    type Output = Remainder;

    fn index(&self, stat: Stat) -> &Remainder {
        &self.0[stat.position()]
    }
}

/// Base tier: `Σ totals[d] / 10` over the six dimensions.
///
/// # Examples
///
/// ```rust
/// use armorcalc::evaluation::base_tier;
/// use armorcalc::StatTotals;
///
/// assert_eq!(base_tier(&StatTotals::new([23, 9, 31, 0, 0, 0])), 5);
/// ```
pub fn base_tier(totals: &StatTotals) -> u64 {
    totals.iter().map(|(_, value)| value / TIER_STEP).sum()
}

/// Overflow: sum of the six remainder values, in `0..=54`.
pub fn overflow(remainders: &RemainderSet) -> u32 {
    remainders.iter().map(|(_, r)| r.val).sum()
}

/// Sum each stat dimension over the four pieces.
///
/// Inputs are left untouched. Totals are widened to `u64`, so any four
/// pieces sum without overflow.
pub fn aggregate(helmet: &Item, gauntlets: &Item, chest: &Item, legs: &Item) -> StatTotals {
    StatTotals::from(helmet.stats) + gauntlets.stats + chest.stats + legs.stats
}

/// Derived values of one combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub remainders: RemainderSet,
    pub tier: TierBreakdown,
    pub overflow: u32,
}

impl Evaluation {
    /// Adjusted tier (base plus bonuses).
    pub fn tier(&self) -> u64 {
        self.tier.total()
    }
}

/// Evaluate a totals line under the given bonuses.
///
/// # Examples
///
/// ```rust
/// use armorcalc::bonus::BonusConfig;
/// use armorcalc::evaluation::evaluate;
/// use armorcalc::StatTotals;
///
/// let eval = evaluate(&StatTotals::new([40, 0, 0, 0, 0, 0]), &BonusConfig::default());
/// assert_eq!(eval.tier(), 4);
/// assert_eq!(eval.overflow, 0);
/// ```
pub fn evaluate(totals: &StatTotals, bonus: &BonusConfig) -> Evaluation {
    let remainders = RemainderSet::of(totals);
    Evaluation {
        remainders,
        tier: bonus.apply(base_tier(totals)),
        overflow: overflow(&remainders),
    }
}

/// `Mob: 23 (3,low) | Res: ...` line for a totals record.
pub fn summary(totals: &StatTotals, remainders: &RemainderSet) -> String {
    remainders
        .iter()
        .map(|(stat, r)| {
            format!(
                "{}: {} ({},{})",
                stat.short_name(),
                totals[stat],
                r.val,
                r.label()
            )
        })
        .collect::<Vec<_>>()
        .join(" | ")
}
