//! Inventory classification.
//!
//! Splits a flat item list into the four wearable buckets, optionally
//! keeping only one owner class. Bucket order is input order and
//! duplicates are kept.

use crate::error::ArmorError;
use crate::item::{GuardianClass, Item, Slot};
use serde::Serialize;

/// Items grouped by wearable slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {
    pub helmets: Vec<Item>,
    pub gauntlets: Vec<Item>,
    pub chests: Vec<Item>,
    pub legs: Vec<Item>,
    /// Items skipped because their owner class did not match.
    pub filtered_out: usize,
    /// Items dropped because their slot is not wearable.
    pub non_wearable: usize,
}

impl Inventory {
    /// Number of items placed in a bucket.
    pub fn wearable_count(&self) -> usize {
        self.helmets.len() + self.gauntlets.len() + self.chests.len() + self.legs.len()
    }

    /// Number of four-piece tuples an exhaustive search will visit.
    pub fn combination_count(&self) -> usize {
        self.helmets.len() * self.gauntlets.len() * self.chests.len() * self.legs.len()
    }
}

/// Classify items into slot buckets.
///
/// When `selector` is set, items whose owner class does not match
/// (case-insensitively) are skipped before their category is looked at.
///
/// # Errors
///
/// Returns [`ArmorError::UnknownCategory`] for the first kept item whose
/// category is neither wearable nor a known non-wearable slot. No
/// partially classified inventory is returned.
///
/// # Examples
///
/// ```rust
/// use armorcalc::{classify, GuardianClass, Item, StatLine};
///
/// let items = vec![
///     Item::new("Helm", "Helmet", "Legendary", StatLine::default()).with_guardian("Titan"),
///     Item::new("Cloak", "Hunter Cloak", "Legendary", StatLine::default()).with_guardian("Hunter"),
///     Item::new("Mark", "Titan Mark", "Legendary", StatLine::default()).with_guardian("Titan"),
/// ];
///
/// let inventory = classify(items, Some(GuardianClass::Titan)).unwrap();
/// assert_eq!(inventory.helmets.len(), 1);
/// assert_eq!(inventory.filtered_out, 1);
/// assert_eq!(inventory.non_wearable, 1);
/// ```
pub fn classify(
    items: impl IntoIterator<Item = Item>,
    selector: Option<GuardianClass>,
) -> Result<Inventory, ArmorError> {
    let mut inventory = Inventory::default();

    for item in items {
        if let Some(class) = selector {
            if !class.matches(&item.guardian) {
                tracing::debug!(
                    item = %item.name,
                    guardian = %item.guardian,
                    "skipping item of another class"
                );
                inventory.filtered_out += 1;
                continue;
            }
        }

        match Slot::from_category(&item.category) {
            Some(Slot::Head) => inventory.helmets.push(item),
            Some(Slot::Hands) => inventory.gauntlets.push(item),
            Some(Slot::Chest) => inventory.chests.push(item),
            Some(Slot::Legs) => inventory.legs.push(item),
            Some(Slot::NonWearable) => {
                tracing::debug!(
                    item = %item.name,
                    category = %item.category,
                    "dropping non-wearable item"
                );
                inventory.non_wearable += 1;
            }
            None => {
                return Err(ArmorError::UnknownCategory {
                    item: item.name,
                    category: item.category,
                })
            }
        }
    }

    tracing::info!(
        helmets = inventory.helmets.len(),
        gauntlets = inventory.gauntlets.len(),
        chests = inventory.chests.len(),
        legs = inventory.legs.len(),
        "classified inventory"
    );

    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat::StatLine;

    fn piece(name: &str, category: &str, guardian: &str) -> Item {
        Item::new(name, category, "Legendary", StatLine::default()).with_guardian(guardian)
    }

    #[test]
    fn test_classify_routes_by_category() {
        let items = vec![
            piece("h", "Helmet", "Titan"),
            piece("g", "Gauntlets", "Titan"),
            piece("c", "Chest Armor", "Titan"),
            piece("l", "Leg Armor", "Titan"),
        ];
        let inv = classify(items, None).unwrap();
        assert_eq!(inv.helmets[0].name, "h");
        assert_eq!(inv.gauntlets[0].name, "g");
        assert_eq!(inv.chests[0].name, "c");
        assert_eq!(inv.legs[0].name, "l");
        assert_eq!(inv.combination_count(), 1);
    }

    #[test]
    fn test_classify_keeps_order_and_duplicates() {
        let items = vec![
            piece("first", "Helmet", "Hunter"),
            piece("twin", "Helmet", "Hunter"),
            piece("twin", "Helmet", "Hunter"),
        ];
        let inv = classify(items, None).unwrap();
        let names: Vec<_> = inv.helmets.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["first", "twin", "twin"]);
    }

    #[test]
    fn test_classify_selector_is_case_insensitive() {
        let items = vec![
            piece("a", "Helmet", "WARLOCK"),
            piece("b", "Helmet", "warlock"),
            piece("c", "Helmet", "Titan"),
        ];
        let inv = classify(items, Some(GuardianClass::Warlock)).unwrap();
        assert_eq!(inv.helmets.len(), 2);
        assert_eq!(inv.filtered_out, 1);
    }

    #[test]
    fn test_classify_unknown_category_fails() {
        let items = vec![piece("h", "Helmet", "Titan"), piece("x", "Ghost", "Titan")];
        let err = classify(items, None).unwrap_err();
        match err {
            ArmorError::UnknownCategory { item, category } => {
                assert_eq!(item, "x");
                assert_eq!(category, "Ghost");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_classify_filter_runs_before_category_check() {
        let items = vec![piece("h", "Helmet", "Titan"), piece("x", "Ghost", "Hunter")];
        let inv = classify(items, Some(GuardianClass::Titan)).unwrap();
        assert_eq!(inv.helmets.len(), 1);
        assert_eq!(inv.filtered_out, 1);
    }

    #[test]
    fn test_classify_accounts_for_every_item() {
        let items = vec![
            piece("h", "Helmet", "Titan"),
            piece("h2", "Helmet", "Hunter"),
            piece("m", "Titan Mark", "Titan"),
            piece("b", "Warlock Bond", "Warlock"),
            piece("l", "Leg Armor", "Titan"),
            piece("c", "Chest Armor", "Warlock"),
        ];
        let total = items.len();
        let inv = classify(items, Some(GuardianClass::Titan)).unwrap();
        assert_eq!(inv.wearable_count() + inv.filtered_out + inv.non_wearable, total);
        assert_eq!(inv.wearable_count(), 2);
        assert_eq!(inv.non_wearable, 1);
        assert_eq!(inv.filtered_out, 3);
    }

    #[test]
    fn test_classify_empty() {
        let inv = classify(Vec::<Item>::new(), None).unwrap();
        assert_eq!(inv, Inventory::default());
        assert_eq!(inv.combination_count(), 0);
    }
}
