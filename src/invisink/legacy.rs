//! Plain-text `id=duration` grammar used before the codec existed.
//!
//! ```text
//! entries := entry ("|" entry)*
//! entry   := <integer id> "=" <decimal duration>
//! ```
//!
//! Parsing is tolerant: an entry that does not split on `=` or whose halves do
//! not parse is dropped on its own and the rest of the list survives. The same
//! grammar is still used for the exercise map inside current-format payloads.

use crate::model::ExerciseId;
use log::trace;
use std::collections::BTreeMap;

pub const ENTRY_SEPARATOR: char = '|';
pub const PAIR_SEPARATOR: char = '=';

/// Parse a single `id=duration` entry.
pub fn parse_entry(entry: &str) -> Option<(ExerciseId, f64)> {
    let (id, duration) = entry.split_once(PAIR_SEPARATOR)?;
    let id = id.parse::<ExerciseId>().ok()?;
    let duration = duration.parse::<f64>().ok()?;
    Some((id, duration))
}

/// Parse a full entry list, skipping malformed entries.
pub fn parse(text: &str) -> BTreeMap<ExerciseId, f64> {
    let mut out = BTreeMap::new();
    for entry in text.split(ENTRY_SEPARATOR) {
        match parse_entry(entry) {
            Some((id, duration)) => {
                out.insert(id, duration);
            }
            None if entry.is_empty() => {}
            None => trace!("event=legacy_entry_skipped module=legacy entry={:?}", entry),
        }
    }
    out
}

/// Render entries in ascending id order.
pub fn format<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a ExerciseId, &'a f64)>,
{
    entries
        .into_iter()
        .map(|(id, duration)| format!("{}{}{}", id, PAIR_SEPARATOR, duration))
        .collect::<Vec<_>>()
        .join(&ENTRY_SEPARATOR.to_string())
}
