//! Extraction of the AS assignment table from the documentation markup.
//!
//! The page is located in three steps:
//!
//! 1. The first `<h2>` whose text contains the configured phrase
//!    (`"Autonomous Systems"` by default)
//! 2. The first table after that heading matching the [`TableMatcher`]
//! 3. Every `<tr>` of the table's `<tbody>`, reading the first `<p>` of the
//!    first two `<td>` cells as AS number and organization name
//!
//! Rows that don't fit (fewer than two cells, a cell without a paragraph,
//! blank text) are skipped silently. Only a missing heading or table is an
//! error.

pub mod dom;

use crate::error::{AppError, Result};
use crate::models::{AsEntry, AsMap};
use dom::DocumentTree;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument};

static H2: Lazy<Selector> = Lazy::new(|| Selector::parse("h2").expect("valid selector"));
static TBODY: Lazy<Selector> = Lazy::new(|| Selector::parse("tbody").expect("valid selector"));
static TR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("valid selector"));
static TD: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("valid selector"));
static P: Lazy<Selector> = Lazy::new(|| Selector::parse("p").expect("valid selector"));

/// Predicate identifying the data table, as a CSS selector.
///
/// The Sphinx theme renders the assignment table as
/// `<table class="docutils align-default">`; if the upstream markup changes,
/// pass a different selector on the command line.
#[derive(Debug, Clone)]
pub struct TableMatcher {
    source: String,
    selector: Selector,
}

impl TableMatcher {
    pub fn parse(selector: &str) -> Result<Self> {
        let compiled = Selector::parse(selector).map_err(|e| AppError::InvalidSelector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            source: selector.to_string(),
            selector: compiled,
        })
    }

    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        self.selector.matches(element)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Where to look for the table.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Phrase the section heading must contain.
    pub heading_phrase: String,
    pub table: TableMatcher,
}

/// Parse `html` and build the AS map from the assignment table.
///
/// # Errors
///
/// - [`AppError::SectionNotFound`] if no `<h2>` contains the heading phrase
/// - [`AppError::TableNotFound`] if no matching table follows that heading
///
/// An empty map is not an error here; the caller decides what to do with it.
#[instrument(level = "info", skip_all, fields(heading = %config.heading_phrase, table = %config.table.as_str()))]
pub fn extract_as_map(html: &str, config: &ExtractConfig) -> Result<AsMap> {
    let document = Html::parse_document(html);

    let heading = document
        .find_first(|el| H2.matches(el) && element_text(el).contains(&config.heading_phrase))
        .ok_or_else(|| AppError::SectionNotFound {
            phrase: config.heading_phrase.clone(),
        })?;
    debug!(text = %element_text(&heading).trim(), "Found section heading");

    let table = document
        .find_next_after(heading, |el| config.table.matches(el))
        .ok_or_else(|| AppError::TableNotFound {
            selector: config.table.as_str().to_string(),
        })?;

    let mut as_map = AsMap::new();
    let Some(tbody) = table.select(&TBODY).next() else {
        debug!("Table has no tbody");
        return Ok(as_map);
    };

    let mut skipped = 0usize;
    for row in tbody.select(&TR) {
        match row_entry(row) {
            Some(AsEntry {
                as_number,
                org_name,
            }) => {
                if let Some(previous) = as_map.get(&as_number) {
                    debug!(%as_number, %previous, "Duplicate AS number; keeping later row");
                }
                as_map.insert(as_number, org_name);
            }
            None => skipped += 1,
        }
    }

    info!(entries = as_map.len(), skipped, "Parsed AS table");
    Ok(as_map)
}

/// Read one table row, or `None` if it doesn't carry a complete entry.
fn row_entry(row: ElementRef<'_>) -> Option<AsEntry> {
    let mut cells = row.select(&TD);
    let as_number = paragraph_text(cells.next()?)?;
    let org_name = paragraph_text(cells.next()?)?;

    if as_number.is_empty() || org_name.is_empty() {
        return None;
    }
    Some(AsEntry {
        as_number,
        org_name,
    })
}

/// Trimmed text of the first `<p>` inside `cell`.
fn paragraph_text(cell: ElementRef<'_>) -> Option<String> {
    cell.select(&P)
        .next()
        .map(|p| element_text(&p).trim().to_string())
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect()
}
