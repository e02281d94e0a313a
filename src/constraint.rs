//! Loadout constraint: at most one exotic piece per combination.

use crate::item::Item;

/// Most exotic pieces a single loadout may wear.
pub const MAX_EXOTICS: usize = 1;

/// Whether a four-piece tuple is a legal loadout.
///
/// Rejects the tuple when more than [`MAX_EXOTICS`] pieces carry the
/// exotic rarity tag.
///
/// # Examples
///
/// ```rust
/// use armorcalc::{is_admissible, Item, StatLine};
///
/// let exotic = Item::new("a", "Helmet", "Exotic", StatLine::default());
/// let legendary = Item::new("b", "Helmet", "Legendary", StatLine::default());
///
/// assert!(is_admissible(&exotic, &legendary, &legendary, &legendary));
/// assert!(!is_admissible(&exotic, &exotic, &legendary, &legendary));
/// ```
pub fn is_admissible(helmet: &Item, gauntlets: &Item, chest: &Item, legs: &Item) -> bool {
    let exotics = [helmet, gauntlets, chest, legs]
        .into_iter()
        .filter(|item| item.is_exotic())
        .count();
    exotics <= MAX_EXOTICS
}
