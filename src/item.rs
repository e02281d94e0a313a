//! Armor items and the attributes used to route them.
//!
//! An `Item` is built once from an input row and never changes for the
//! rest of a run. Its category stays the raw text from the table; the
//! classifier decides what that text means.

use crate::error::ArmorError;
use crate::stat::StatLine;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Rarity tag of items restricted to one per loadout.
pub const EXOTIC: &str = "Exotic";

/// One piece of armor.
///
/// Serializes with the field names `name`, `type`, `rarity`, `guardian`
/// followed by the six stat fields.
///
/// # Examples
///
/// ```rust
/// use armorcalc::{Item, StatLine};
///
/// let gloves = Item::new("Wormgod Caress", "Gauntlets", "Exotic", StatLine::new([2, 2, 10, 20, 10, 20]))
///     .with_guardian("Titan");
///
/// assert!(gloves.is_exotic());
/// assert_eq!(gloves.stats.strength, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub rarity: String,
    /// Owner-class affinity. Empty when the table has no such column.
    #[serde(default)]
    pub guardian: String,
    #[serde(flatten)]
    pub stats: StatLine,
}

impl Item {
    /// Create an item with no owner-class affinity.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        rarity: impl Into<String>,
        stats: StatLine,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            rarity: rarity.into(),
            guardian: String::new(),
            stats,
        }
    }

    /// Set the owner-class affinity.
    pub fn with_guardian(mut self, guardian: impl Into<String>) -> Self {
        self.guardian = guardian.into();
        self
    }

    /// Whether this item carries the exotic rarity tag.
    pub fn is_exotic(&self) -> bool {
        self.rarity.trim().eq_ignore_ascii_case(EXOTIC)
    }
}

/// Where an item's category routes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Head,
    Hands,
    Chest,
    Legs,
    /// Class items and other slots that never join a combination.
    NonWearable,
}

impl Slot {
    /// Route a raw category string.
    ///
    /// Returns `None` for anything that is neither a wearable slot nor a
    /// known non-wearable slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use armorcalc::Slot;
    ///
    /// assert_eq!(Slot::from_category("Chest Armor"), Some(Slot::Chest));
    /// assert_eq!(Slot::from_category("Hunter Cloak"), Some(Slot::NonWearable));
    /// assert_eq!(Slot::from_category("Ghost Shell"), None);
    /// ```
    pub fn from_category(category: &str) -> Option<Self> {
        match category.trim() {
            "Helmet" => Some(Slot::Head),
            "Gauntlets" => Some(Slot::Hands),
            "Chest Armor" => Some(Slot::Chest),
            "Leg Armor" => Some(Slot::Legs),
            "Titan Mark" | "Hunter Cloak" | "Warlock Bond" => Some(Slot::NonWearable),
            _ => None,
        }
    }
}

/// The three owner classes an inventory can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardianClass {
    Titan,
    Hunter,
    Warlock,
}

impl GuardianClass {
    pub const ALL: [GuardianClass; 3] = [
        GuardianClass::Titan,
        GuardianClass::Hunter,
        GuardianClass::Warlock,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GuardianClass::Titan => "titan",
            GuardianClass::Hunter => "hunter",
            GuardianClass::Warlock => "warlock",
        }
    }

    /// Case-insensitive match against an item's owner-class text.
    pub fn matches(self, guardian: &str) -> bool {
        guardian.trim().eq_ignore_ascii_case(self.as_str())
    }
}

impl FromStr for GuardianClass {
    type Err = ArmorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        GuardianClass::ALL
            .into_iter()
            .find(|class| class.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ArmorError::InvalidClass(s.to_string()))
    }
}

impl std::fmt::Display for GuardianClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_routing() {
        assert_eq!(Slot::from_category("Helmet"), Some(Slot::Head));
        assert_eq!(Slot::from_category("Gauntlets"), Some(Slot::Hands));
        assert_eq!(Slot::from_category("Leg Armor"), Some(Slot::Legs));
        assert_eq!(Slot::from_category(" Titan Mark "), Some(Slot::NonWearable));
        assert_eq!(Slot::from_category("Warlock Bond"), Some(Slot::NonWearable));
        assert_eq!(Slot::from_category("helmet"), None);
        assert_eq!(Slot::from_category(""), None);
    }

    #[test]
    fn test_guardian_class_parse() {
        assert_eq!("Titan".parse::<GuardianClass>().unwrap(), GuardianClass::Titan);
        assert_eq!("WARLOCK".parse::<GuardianClass>().unwrap(), GuardianClass::Warlock);
        let err = "exo".parse::<GuardianClass>().unwrap_err();
        assert!(matches!(err, ArmorError::InvalidClass(ref s) if s == "exo"));
    }

    #[test]
    fn test_guardian_class_matches() {
        assert!(GuardianClass::Hunter.matches("Hunter"));
        assert!(GuardianClass::Hunter.matches("hunter"));
        assert!(!GuardianClass::Hunter.matches("Titan"));
        assert!(!GuardianClass::Hunter.matches(""));
    }

    #[test]
    fn test_exotic_tag() {
        let stats = StatLine::default();
        assert!(Item::new("a", "Helmet", "Exotic", stats).is_exotic());
        assert!(Item::new("a", "Helmet", "exotic", stats).is_exotic());
        assert!(!Item::new("a", "Helmet", "Legendary", stats).is_exotic());
    }

    #[test]
    fn test_item_serializes_like_input_row() {
        let item = Item::new("Mask", "Helmet", "Legendary", StatLine::new([1, 2, 3, 4, 5, 6]))
            .with_guardian("Warlock");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "Helmet");
        assert_eq!(json["guardian"], "Warlock");
        assert_eq!(json["intellect"], 5);
    }
}
