//! Search driver.
//!
//! Visits every helmet × gauntlets × chest × legs tuple of an
//! [`Inventory`] in bucket order, and for each one runs the exotic
//! constraint, aggregation, evaluation and reporting policy.

use crate::config::SearchConfig;
use crate::constraint::is_admissible;
use crate::error::ArmorError;
use crate::evaluation::{aggregate, evaluate, summary, Evaluation};
use crate::inventory::Inventory;
use crate::item::Item;
use crate::stat::StatTotals;
use serde::Serialize;

/// One evaluated four-piece combination.
///
/// Borrows its pieces from the inventory and owns everything derived
/// from them. A fresh record is built for every tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combination<'a> {
    pub totals: StatTotals,
    pub helmet: &'a Item,
    pub gauntlets: &'a Item,
    pub chest: &'a Item,
    pub legs: &'a Item,
    pub evaluation: Evaluation,
}

impl<'a> Combination<'a> {
    /// Aggregate and evaluate a tuple.
    pub fn evaluate(
        helmet: &'a Item,
        gauntlets: &'a Item,
        chest: &'a Item,
        legs: &'a Item,
        config: &SearchConfig,
    ) -> Self {
        let totals = aggregate(helmet, gauntlets, chest, legs);
        Self {
            totals,
            helmet,
            gauntlets,
            chest,
            legs,
            evaluation: evaluate(&totals, &config.bonus),
        }
    }

    /// Adjusted tier.
    pub fn tier(&self) -> u64 {
        self.evaluation.tier()
    }

    pub fn overflow(&self) -> u32 {
        self.evaluation.overflow
    }

    /// `Mob: v (r,low) | ... | Str: v (r,high)` line for the totals.
    pub fn summary(&self) -> String {
        summary(&self.totals, &self.evaluation.remainders)
    }

    /// The four pieces, head to legs.
    pub fn pieces(&self) -> [&'a Item; 4] {
        [self.helmet, self.gauntlets, self.chest, self.legs]
    }
}

/// Counters for a finished search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchSummary {
    /// Tuples visited.
    pub examined: usize,
    /// Tuples vetoed by the exotic constraint.
    pub rejected: usize,
    /// Tuples handed to the caller.
    pub reported: usize,
}

/// Exhaustive search over a classified inventory.
///
/// # Examples
///
/// ```rust
/// use armorcalc::{classify, Item, ReportRegime, Search, SearchConfig, StatLine};
///
/// let items = ["Helmet", "Gauntlets", "Chest Armor", "Leg Armor"]
///     .into_iter()
///     .map(|slot| Item::new(slot, slot, "Legendary", StatLine::new([10, 0, 0, 0, 0, 0])))
///     .collect::<Vec<_>>();
/// let inventory = classify(items, None).unwrap();
///
/// let config = SearchConfig::new().with_regime(ReportRegime::bounded(1, 4));
/// let search = Search::new(&inventory, &config).unwrap();
///
/// let found = search.collect();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].tier(), 4);
/// assert_eq!(found[0].overflow(), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    inventory: &'a Inventory,
    config: &'a SearchConfig,
}

impl<'a> Search<'a> {
    /// Validate `config` and prepare a search.
    pub fn new(inventory: &'a Inventory, config: &'a SearchConfig) -> Result<Self, ArmorError> {
        config.validate()?;
        Ok(Self { inventory, config })
    }

    /// Run the search, passing each reported combination to `emit` in
    /// nested-loop order (helmet outermost, legs innermost).
    pub fn run<F>(&self, mut emit: F) -> SearchSummary
    where
        F: FnMut(Combination<'a>),
    {
        let inv = self.inventory;
        let config = self.config;
        let mut stats = SearchSummary::default();

        for helmet in &inv.helmets {
            for gauntlets in &inv.gauntlets {
                for chest in &inv.chests {
                    for legs in &inv.legs {
                        stats.examined += 1;

                        if config.exotic_limit && !is_admissible(helmet, gauntlets, chest, legs) {
                            stats.rejected += 1;
                            continue;
                        }

                        let combination =
                            Combination::evaluate(helmet, gauntlets, chest, legs, config);
                        if config
                            .regime
                            .should_report(combination.tier(), combination.overflow())
                        {
                            stats.reported += 1;
                            emit(combination);
                        }
                    }
                }
            }
        }

        tracing::info!(
            examined = stats.examined,
            rejected = stats.rejected,
            reported = stats.reported,
            "search finished"
        );

        stats
    }

    /// Run the search and collect every reported combination.
    pub fn collect(&self) -> Vec<Combination<'a>> {
        let mut found = Vec::new();
        self.run(|combination| found.push(combination));
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bonus::{BonusConfig, BonusPolicy};
    use crate::inventory::classify;
    use crate::report::ReportRegime;
    use crate::stat::StatLine;

    fn piece(name: &str, category: &str, rarity: &str, stats: [u32; 6]) -> Item {
        Item::new(name, category, rarity, StatLine::new(stats))
    }

    fn report_everything() -> SearchConfig {
        SearchConfig::new().with_regime(ReportRegime::bounded(u32::MAX, 0))
    }

    #[test]
    fn test_search_visits_full_cross_product() {
        let mut items = Vec::new();
        for (slot, n) in [("Helmet", 2), ("Gauntlets", 3), ("Chest Armor", 1), ("Leg Armor", 4)] {
            for i in 0..n {
                items.push(piece(&format!("{slot}{i}"), slot, "Legendary", [0; 6]));
            }
        }
        let inv = classify(items, None).unwrap();
        let config = report_everything();
        let summary = Search::new(&inv, &config).unwrap().run(|_| {});
        assert_eq!(summary.examined, 24);
        assert_eq!(summary.reported, 24);
        assert_eq!(summary.rejected, 0);
    }

    #[test]
    fn test_search_order_is_nested_loop_order() {
        let items = vec![
            piece("h0", "Helmet", "Legendary", [0; 6]),
            piece("h1", "Helmet", "Legendary", [0; 6]),
            piece("g0", "Gauntlets", "Legendary", [0; 6]),
            piece("c0", "Chest Armor", "Legendary", [0; 6]),
            piece("l0", "Leg Armor", "Legendary", [0; 6]),
            piece("l1", "Leg Armor", "Legendary", [0; 6]),
        ];
        let inv = classify(items, None).unwrap();
        let config = report_everything();
        let found = Search::new(&inv, &config).unwrap().collect();
        let order: Vec<_> = found
            .iter()
            .map(|c| format!("{}-{}", c.helmet.name, c.legs.name))
            .collect();
        assert_eq!(order, vec!["h0-l0", "h0-l1", "h1-l0", "h1-l1"]);
    }

    #[test]
    fn test_search_rejects_double_exotics() {
        let items = vec![
            piece("eh", "Helmet", "Exotic", [0; 6]),
            piece("lh", "Helmet", "Legendary", [0; 6]),
            piece("eg", "Gauntlets", "Exotic", [0; 6]),
            piece("c", "Chest Armor", "Legendary", [0; 6]),
            piece("l", "Leg Armor", "Legendary", [0; 6]),
        ];
        let inv = classify(items, None).unwrap();

        let config = report_everything();
        let summary = Search::new(&inv, &config).unwrap().run(|_| {});
        assert_eq!(summary.examined, 2);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.reported, 1);

        let config = report_everything().with_exotic_limit(false);
        let summary = Search::new(&inv, &config).unwrap().run(|_| {});
        assert_eq!(summary.rejected, 0);
        assert_eq!(summary.reported, 2);
    }

    #[test]
    fn test_search_applies_threshold() {
        let items = vec![
            piece("h", "Helmet", "Legendary", [10, 10, 10, 10, 10, 10]),
            piece("g", "Gauntlets", "Legendary", [10, 10, 10, 10, 10, 10]),
            piece("c", "Chest Armor", "Legendary", [10, 10, 10, 10, 10, 10]),
            piece("l", "Leg Armor", "Legendary", [2, 10, 10, 10, 10, 10]),
            piece("l2", "Leg Armor", "Legendary", [10, 10, 10, 10, 10, 10]),
        ];
        let inv = classify(items, None).unwrap();
        // l: tier 23, overflow 2. l2: tier 24, overflow 0.
        let config = SearchConfig::new().with_regime(ReportRegime::bounded(1, 24));
        let found = Search::new(&inv, &config).unwrap().collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].legs.name, "l2");
    }

    #[test]
    fn test_search_rejects_invalid_config() {
        let inv = Inventory::default();
        let config =
            SearchConfig::new().with_bonus(BonusConfig::new(BonusPolicy::Flat).with_mods(6));
        assert!(matches!(
            Search::new(&inv, &config),
            Err(ArmorError::OutOfRange { setting: "mods", .. })
        ));
    }

    #[test]
    fn test_combination_does_not_touch_pieces() {
        let h = piece("h", "Helmet", "Legendary", [15, 0, 0, 0, 0, 0]);
        let g = piece("g", "Gauntlets", "Legendary", [0; 6]);
        let c = piece("c", "Chest Armor", "Legendary", [0; 6]);
        let l = piece("l", "Leg Armor", "Legendary", [5, 0, 0, 0, 0, 0]);
        let combination = Combination::evaluate(&h, &g, &c, &l, &SearchConfig::default());
        assert_eq!(combination.totals.mobility, 20);
        assert_eq!(combination.pieces()[3].stats.mobility, 5);
        assert_eq!(l.name, "l");
    }

    #[test]
    fn test_empty_bucket_yields_nothing() {
        let items = vec![
            piece("h", "Helmet", "Legendary", [0; 6]),
            piece("g", "Gauntlets", "Legendary", [0; 6]),
            piece("c", "Chest Armor", "Legendary", [0; 6]),
        ];
        let inv = classify(items, None).unwrap();
        let config = report_everything();
        let summary = Search::new(&inv, &config).unwrap().run(|_| {});
        assert_eq!(summary, SearchSummary::default());
    }
}
