//! # armorcalc - Exhaustive Armor Set Search
//!
//! Evaluates every helmet × gauntlets × chest × legs combination in an
//! inventory and reports the ones with a high stat tier and little
//! wasted stat investment.
//!
//! ## Core Concepts
//!
//! ### Pipeline
//!
//! ```text
//! [Item rows] → classify → [Inventory] → Search
//!     per tuple: exotic constraint → aggregate → evaluate → report policy
//! ```
//!
//! 1. **Classification** splits items into four slot buckets, optionally
//!    keeping a single owner class
//! 2. **Aggregation** sums the six stat dimensions of the four pieces
//! 3. **Evaluation** computes the base tier (`Σ stat / 10`), bonus tier
//!    points and the overflow (`Σ stat % 10`)
//! 4. **Reporting** keeps combinations inside the configured bounds
//!
//! ### Tier and Overflow
//!
//! - **Tier**: one point per full 10 in each dimension, plus mod and
//!   masterwork bonuses
//! - **Overflow**: points that do not complete a tier, `0..=54`
//!
//! ## Example
//!
//! ```rust
//! use armorcalc::*;
//!
//! let items = vec![
//!     Item::new("Helm", "Helmet", "Legendary", StatLine::new([10, 0, 0, 0, 0, 0])),
//!     Item::new("Grips", "Gauntlets", "Legendary", StatLine::new([10, 0, 0, 0, 0, 0])),
//!     Item::new("Plate", "Chest Armor", "Legendary", StatLine::new([10, 0, 0, 0, 0, 0])),
//!     Item::new("Greaves", "Leg Armor", "Legendary", StatLine::new([10, 0, 0, 0, 0, 0])),
//! ];
//!
//! let inventory = classify(items, None).unwrap();
//! let config = SearchConfig::new().with_regime(ReportRegime::bounded(1, 4));
//!
//! let found = Search::new(&inventory, &config).unwrap().collect();
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].totals.mobility, 40);
//! ```
//!
//! ## Modules
//!
//! - [`stat`] - Stat dimensions and stat lines
//! - [`item`] - Items, slots and owner classes
//! - [`inventory`] - Classification into slot buckets
//! - [`constraint`] - One-exotic loadout rule
//! - [`evaluation`] - Aggregation, remainders, tier and overflow
//! - [`bonus`] - Mod and masterwork tier bonuses
//! - [`report`] - Reporting thresholds
//! - [`config`] - Search configuration
//! - [`search`] - Exhaustive search driver
//! - [`loader`] - CSV input
//! - [`render`] - Text output
//! - [`error`] - Error types

pub mod bonus;
pub mod config;
pub mod constraint;
pub mod error;
pub mod evaluation;
pub mod inventory;
pub mod item;
pub mod loader;
pub mod render;
pub mod report;
pub mod search;
pub mod stat;

// Re-export main types for convenience
pub use config::SearchConfig;
pub use constraint::is_admissible;
pub use error::ArmorError;
pub use evaluation::{Evaluation, Remainder, RemainderSet};
pub use inventory::{classify, Inventory};
pub use item::{GuardianClass, Item, Slot, EXOTIC};
pub use report::ReportRegime;
pub use search::{Combination, Search, SearchSummary};
pub use stat::{Stat, StatLine, StatTotals};

pub use bonus::{BonusConfig, BonusPolicy, TierBreakdown};
pub use loader::{load_items, load_items_from_path, HeaderDialect};
