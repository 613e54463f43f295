//! JavaScript object-literal rendering.
//!
//! Entries are ordered by the integer value of their AS number. Keys that
//! aren't plain decimal digits go last, in table order.

use crate::error::Result;
use crate::models::AsMap;
use itertools::Itertools;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Ordering key for an AS number.
///
/// Numeric keys compare by value without parsing into a fixed-width integer:
/// leading zeros are dropped, then the shorter digit string is the smaller
/// number, then digits compare lexicographically. Variant order puts every
/// numeric key before [`SortKey::NonNumeric`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey<'a> {
    Numeric { len: usize, digits: &'a str },
    NonNumeric,
}

pub fn numeric_sort_key(as_number: &str) -> SortKey<'_> {
    if as_number.is_empty() || !as_number.bytes().all(|b| b.is_ascii_digit()) {
        return SortKey::NonNumeric;
    }
    let digits = as_number.trim_start_matches('0');
    SortKey::Numeric {
        len: digits.len(),
        digits,
    }
}

/// Backslash-escape double quotes. Nothing else is touched.
pub fn escape_js_string(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Render `as_map` as `const <identifier> = { ... };`.
///
/// One `"<as_number>": "<org_name>"` line per entry, comma-separated, four
/// spaces of indent, no trailing comma and no trailing newline.
pub fn render_snippet(as_map: &AsMap, identifier: &str) -> String {
    let lines = as_map
        .iter()
        .sorted_by(|a, b| numeric_sort_key(&a.as_number).cmp(&numeric_sort_key(&b.as_number)))
        .map(|entry| {
            format!(
                "    \"{}\": \"{}\"",
                entry.as_number,
                escape_js_string(&entry.org_name)
            )
        })
        .join(",\n");

    let mut js = format!("const {identifier} = {{\n");
    if !lines.is_empty() {
        js.push_str(&lines);
        js.push('\n');
    }
    js.push_str("};");
    js
}

/// Write the snippet to `path` as UTF-8, replacing any existing file.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display(), bytes = snippet.len()))]
pub async fn write_snippet(path: impl AsRef<Path>, snippet: &str) -> Result<()> {
    fs::write(path.as_ref(), snippet).await?;
    info!("Wrote JavaScript snippet");
    Ok(())
}
