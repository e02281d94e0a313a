//! Stat dimension module.
//!
//! Provides the `Stat` enum naming the six armor stat dimensions and
//! `StatLine`, one non-negative value per dimension.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, IndexMut};

/// One of the six armor stat dimensions.
///
/// # Examples
///
/// ```rust
/// use armorcalc::Stat;
///
/// assert_eq!(Stat::ALL.len(), 6);
/// assert_eq!(Stat::Recovery.as_str(), "recovery");
/// assert_eq!(Stat::Recovery.short_name(), "Rec");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Mobility,
    Resilience,
    Recovery,
    Discipline,
    Intellect,
    Strength,
}

impl Stat {
    /// All dimensions, in display order.
    pub const ALL: [Stat; 6] = [
        Stat::Mobility,
        Stat::Resilience,
        Stat::Recovery,
        Stat::Discipline,
        Stat::Intellect,
        Stat::Strength,
    ];

    /// Lowercase field name of this dimension.
    pub fn as_str(self) -> &'static str {
        match self {
            Stat::Mobility => "mobility",
            Stat::Resilience => "resilience",
            Stat::Recovery => "recovery",
            Stat::Discipline => "discipline",
            Stat::Intellect => "intellect",
            Stat::Strength => "strength",
        }
    }

    /// Three-letter label used in summaries.
    pub fn short_name(self) -> &'static str {
        match self {
            Stat::Mobility => "Mob",
            Stat::Resilience => "Res",
            Stat::Recovery => "Rec",
            Stat::Discipline => "Dis",
            Stat::Intellect => "Int",
            Stat::Strength => "Str",
        }
    }

    /// Position of this dimension in [`Stat::ALL`].
    pub(crate) fn position(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Six stat values, one per [`Stat`].
///
/// Serializes as six flat fields (`mobility`, `resilience`, ...) so it
/// can be flattened into an item record.
///
/// # Examples
///
/// ```rust
/// use armorcalc::{Stat, StatLine};
///
/// let helm = StatLine::new([10, 2, 20, 6, 2, 12]);
///
/// assert_eq!(helm[Stat::Mobility], 10);
/// assert_eq!(helm.get(Stat::Recovery), 20);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatLine {
    pub mobility: u32,
    pub resilience: u32,
    pub recovery: u32,
    pub discipline: u32,
    pub intellect: u32,
    pub strength: u32,
}

impl StatLine {
    /// Build a line from values in [`Stat::ALL`] order.
    pub fn new(values: [u32; 6]) -> Self {
        let [mobility, resilience, recovery, discipline, intellect, strength] = values;
        Self {
            mobility,
            resilience,
            recovery,
            discipline,
            intellect,
            strength,
        }
    }

    /// Value of a single dimension.
    pub fn get(&self, stat: Stat) -> u32 {
        self[stat]
    }

    /// `(stat, value)` pairs in [`Stat::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        Stat::ALL.into_iter().map(move |stat| (stat, self[stat]))
    }

    /// Values in [`Stat::ALL`] order.
    pub fn to_array(&self) -> [u32; 6] {
        [
            self.mobility,
            self.resilience,
            self.recovery,
            self.discipline,
            self.intellect,
            self.strength,
        ]
    }
}

impl Index<Stat> for StatLine {
    type Output = u32;

    fn index(&self, stat: Stat) -> &u32 {
        match stat {
            Stat::Mobility => &self.mobility,
            Stat::Resilience => &self.resilience,
            Stat::Recovery => &self.recovery,
            Stat::Discipline => &self.discipline,
            Stat::Intellect => &self.intellect,
            Stat::Strength => &self.strength,
        }
    }
}

impl IndexMut<Stat> for StatLine {
    fn index_mut(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::Mobility => &mut self.mobility,
            Stat::Resilience => &mut self.resilience,
            Stat::Recovery => &mut self.recovery,
            Stat::Discipline => &mut self.discipline,
            Stat::Intellect => &mut self.intellect,
            Stat::Strength => &mut self.strength,
        }
    }
}

/// Per-dimension sums of several stat lines.
///
/// Totals are `u64`, so summing any four `u32` pieces cannot overflow.
///
/// # Examples
///
/// ```rust
/// use armorcalc::{Stat, StatLine, StatTotals};
///
/// let helm = StatLine::new([10, 2, 20, 6, 2, 12]);
/// let arms = StatLine::new([2, 10, 12, 16, 2, 2]);
/// let total = StatTotals::from(helm) + arms;
///
/// assert_eq!(total[Stat::Mobility], 12);
/// assert_eq!(total[Stat::Recovery], 32);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatTotals {
    pub mobility: u64,
    pub resilience: u64,
    pub recovery: u64,
    pub discipline: u64,
    pub intellect: u64,
    pub strength: u64,
}

impl StatTotals {
    /// Build totals from values in [`Stat::ALL`] order.
    pub fn new(values: [u64; 6]) -> Self {
        let [mobility, resilience, recovery, discipline, intellect, strength] = values;
        Self {
            mobility,
            resilience,
            recovery,
            discipline,
            intellect,
            strength,
        }
    }

    /// `(stat, value)` pairs in [`Stat::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u64)> + '_ {
        Stat::ALL.into_iter().map(move |stat| (stat, self[stat]))
    }

    /// Values in [`Stat::ALL`] order.
    pub fn to_array(&self) -> [u64; 6] {
        [
            self.mobility,
            self.resilience,
            self.recovery,
            self.discipline,
            self.intellect,
            self.strength,
        ]
    }
}

impl From<StatLine> for StatTotals {
    fn from(line: StatLine) -> Self {
        Self::new(line.to_array().map(u64::from))
    }
}

impl Index<Stat> for StatTotals {
    type Output = u64;

    fn index(&self, stat: Stat) -> &u64 {
        match stat {
            Stat::Mobility => &self.mobility,
            Stat::Resilience => &self.resilience,
            Stat::Recovery => &self.recovery,
            Stat::Discipline => &self.discipline,
            Stat::Intellect => &self.intellect,
            Stat::Strength => &self.strength,
        }
    }
}

impl IndexMut<Stat> for StatTotals {
    fn index_mut(&mut self, stat: Stat) -> &mut u64 {
        match stat {
            Stat::Mobility => &mut self.mobility,
            Stat::Resilience => &mut self.resilience,
            Stat::Recovery => &mut self.recovery,
            Stat::Discipline => &mut self.discipline,
            Stat::Intellect => &mut self.intellect,
            Stat::Strength => &mut self.strength,
        }
    }
}

impl Add<StatLine> for StatTotals {
    type Output = StatTotals;

    /// Plain per-dimension integer addition.
    fn add(self, rhs: StatLine) -> StatTotals {
        let mut out = self;
        for stat in Stat::ALL {
            out[stat] += u64::from(rhs[stat]);
        }
        out
    }
}
