//! Text rendering of reported combinations.

use crate::error::ArmorError;
use crate::item::Item;
use crate::search::Combination;
use serde::Serialize;
use std::io::Write;

const SEPARATOR: &str = "***";

/// Write one combination as a report block.
///
/// The block lists the totals summary, tier, optional tier breakdown and
/// overflow, then each piece as tab-indented JSON.
pub fn write_report<W: Write>(
    out: &mut W,
    combination: &Combination<'_>,
    breakdown: bool,
) -> Result<(), ArmorError> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Totals -- {}", combination.summary())?;
    writeln!(out, "Tier: T({})", combination.tier())?;
    if breakdown {
        writeln!(out, "Breakdown: {}", combination.evaluation.tier)?;
    }
    writeln!(out, "Overflow: {}", combination.overflow())?;

    let labels = ["Helm", "Gauntlets", "Chest", "Legs"];
    for (label, item) in labels.into_iter().zip(combination.pieces()) {
        writeln!(out, "{label}:\n{}", to_tab_json(item)?)?;
    }
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

fn to_tab_json(item: &Item) -> Result<String, ArmorError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    item.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
