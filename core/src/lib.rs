//! Canonical option tables and typed lookups for raw process arguments.
//!
//! This crate turns an argument list into an [`OptionTable`] and answers
//! typed questions about it:
//!
//! - [`OptionTable::parse`] — normalizes `-name`, `--name` and
//!   `-name=value` tokens into canonical `-name` keys. Positional tokens are
//!   skipped and the last occurrence of a name wins.
//! - [`OptionTable::get_bool`] — boolean lookup with the `-noname`
//!   negation convention. An explicit `-name` always beats `-noname`.
//! - [`OptionTable::get_str`] and [`OptionTable::get_int`] — string and
//!   integer lookups with caller-supplied defaults.
//! - [`OptionTable::merge`] and [`ConfigFile`] — fold options from other
//!   tables or a `name=value` file in without overriding the command line.
//!
//! Parsing and lookups never fail. Absent options fall back to the caller's
//! default and unparseable integers read as `0`.
//!
//! # Example
//!
//! ```
//! use argmap_core::OptionTable;
//!
//! let table = OptionTable::parse(["-Nata", "-noNata", "--port=8333", "data.bin"]);
//!
//! assert!(table.get_bool("-Nata", false));
//! assert_eq!(table.get_int("-port", 0), 8333);
//! assert_eq!(table.get_str("-datadir", "~/.argmap"), "~/.argmap");
//! ```

mod coerce;
mod config;
mod error;
mod lookup;
mod merge;
mod table;

pub use coerce::{canonical_name, is_truthy, negation_of, parse_int, split_token};
pub use config::ConfigFile;
pub use error::{ConfigError, Result};
pub use merge::MergePolicy;
pub use table::{OptionTable, parse};
