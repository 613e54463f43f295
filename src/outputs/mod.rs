//! Output generation for the scraped AS map.
//!
//! # Submodules
//!
//! - [`js`]: Renders the map as a JavaScript object literal and writes it out
//!
//! # Output Format
//!
//! ```text
//! const asNameMap = {
//!     "1": "Org One",
//!     "64512": "Org Two"
//! };
//! ```
//!
//! The snippet is meant to be pasted into the extension's source, so there is
//! no trailing newline and no `export`.

pub mod js;
