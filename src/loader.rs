//! CSV inventory loader.
//!
//! Reads an armor table into [`Item`]s in row order. Three header
//! naming schemes are understood; see [`HeaderDialect`].

use crate::error::ArmorError;
use crate::item::Item;
use crate::stat::{Stat, StatLine};
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Header naming scheme of an input table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderDialect {
    /// `name,type,rarity,guardian,mobility,...`
    Short,
    /// `Name,Type,Tier,Equippable,Mobility (Base),...`
    Base,
    /// `Name,Type,Tier,Equippable,Mobility,...`
    Display,
}

/// Non-stat fields of an item row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Category,
    Rarity,
    Guardian,
}

impl HeaderDialect {
    fn field(self, field: Field) -> &'static str {
        match (self, field) {
            (HeaderDialect::Short, Field::Name) => "name",
            (HeaderDialect::Short, Field::Category) => "type",
            (HeaderDialect::Short, Field::Rarity) => "rarity",
            (HeaderDialect::Short, Field::Guardian) => "guardian",
            (_, Field::Name) => "Name",
            (_, Field::Category) => "Type",
            (_, Field::Rarity) => "Tier",
            (_, Field::Guardian) => "Equippable",
        }
    }

    fn stat(self, stat: Stat) -> &'static str {
        match (self, stat) {
            (HeaderDialect::Short, stat) => stat.as_str(),
            (HeaderDialect::Base, Stat::Mobility) => "Mobility (Base)",
            (HeaderDialect::Base, Stat::Resilience) => "Resilience (Base)",
            (HeaderDialect::Base, Stat::Recovery) => "Recovery (Base)",
            (HeaderDialect::Base, Stat::Discipline) => "Discipline (Base)",
            (HeaderDialect::Base, Stat::Intellect) => "Intellect (Base)",
            (HeaderDialect::Base, Stat::Strength) => "Strength (Base)",
            (HeaderDialect::Display, Stat::Mobility) => "Mobility",
            (HeaderDialect::Display, Stat::Resilience) => "Resilience",
            (HeaderDialect::Display, Stat::Recovery) => "Recovery",
            (HeaderDialect::Display, Stat::Discipline) => "Discipline",
            (HeaderDialect::Display, Stat::Intellect) => "Intellect",
            (HeaderDialect::Display, Stat::Strength) => "Strength",
        }
    }

    /// Pick a dialect from a header row.
    ///
    /// Base-stat columns win over display columns, since exports that
    /// carry both list the display totals including mods.
    pub fn detect(headers: &StringRecord) -> Option<Self> {
        let has = |name: &str| headers.iter().any(|h| h.trim() == name);
        [HeaderDialect::Base, HeaderDialect::Short, HeaderDialect::Display]
            .into_iter()
            .find(|dialect| has(dialect.stat(Stat::Mobility)))
    }
}

/// Column positions resolved from a header row.
struct Columns {
    name: usize,
    category: usize,
    rarity: usize,
    guardian: Option<usize>,
    stats: [usize; 6],
}

impl Columns {
    fn resolve(headers: &StringRecord, dialect: HeaderDialect) -> Result<Self, ArmorError> {
        let find = |column: &str| headers.iter().position(|h| h.trim() == column);
        let require =
            |column: &'static str| find(column).ok_or(ArmorError::MissingColumn { column });

        let mut stats = [0; 6];
        for stat in Stat::ALL {
            stats[stat.position()] = require(dialect.stat(stat))?;
        }

        Ok(Self {
            name: require(dialect.field(Field::Name))?,
            category: require(dialect.field(Field::Category))?,
            rarity: require(dialect.field(Field::Rarity))?,
            guardian: find(dialect.field(Field::Guardian)),
            stats,
        })
    }
}

/// Read items from CSV text.
///
/// With `dialect` unset the header row decides.
///
/// # Errors
///
/// Fails on unreadable CSV, an unrecognised header row, a missing
/// required column, or a stat cell that is not a non-negative integer.
///
/// # Examples
///
/// ```rust
/// use armorcalc::loader::load_items;
///
/// let table = "name,type,rarity,guardian,mobility,resilience,recovery,discipline,intellect,strength\n\
///              Helm,Helmet,Legendary,Titan,10,2,20,6,2,12\n";
/// let items = load_items(table.as_bytes(), None).unwrap();
/// assert_eq!(items[0].stats.recovery, 20);
/// ```
pub fn load_items<R: Read>(
    reader: R,
    dialect: Option<HeaderDialect>,
) -> Result<Vec<Item>, ArmorError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let dialect = match dialect {
        Some(dialect) => dialect,
        None => HeaderDialect::detect(&headers).ok_or(ArmorError::UnknownDialect)?,
    };
    let columns = Columns::resolve(&headers, dialect)?;
    tracing::debug!(?dialect, "reading inventory table");

    let mut items = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        items.push(parse_row(&record, &columns, dialect, index + 1)?);
    }

    Ok(items)
}

/// Read items from a CSV file.
pub fn load_items_from_path(
    path: impl AsRef<Path>,
    dialect: Option<HeaderDialect>,
) -> Result<Vec<Item>, ArmorError> {
    let file = std::fs::File::open(path)?;
    load_items(file, dialect)
}

fn parse_row(
    record: &StringRecord,
    columns: &Columns,
    dialect: HeaderDialect,
    row: usize,
) -> Result<Item, ArmorError> {
    let cell = |index: usize| record.get(index).unwrap_or("");

    let mut stats = StatLine::default();
    for stat in Stat::ALL {
        let raw = cell(columns.stats[stat.position()]);
        stats[stat] = raw.parse::<u32>().map_err(|_| ArmorError::InvalidValue {
            row,
            column: dialect.stat(stat),
            value: raw.to_string(),
        })?;
    }

    let mut item = Item::new(
        cell(columns.name),
        cell(columns.category),
        cell(columns.rarity),
        stats,
    );
    if let Some(guardian) = columns.guardian {
        item.guardian = cell(guardian).to_string();
    }
    Ok(item)
}
