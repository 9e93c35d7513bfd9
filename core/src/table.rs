//! The raw option table produced by one parse.
//!
//! An [`OptionTable`] maps canonical option names (always `-name`) to the
//! raw string value given on the command line. It is built in one pass over
//! the argument list and then queried through typed accessors such as
//! [`OptionTable::get_bool`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coerce::{canonical_name, split_token};

/// Canonical option name → raw value mapping.
///
/// Keys are unique. When a name appears more than once in the input the
/// later occurrence replaces the earlier value. Serializes as a plain map
/// ordered by name.
///
/// # Examples
///
/// ```
/// use argmap_core::OptionTable;
///
/// let table = OptionTable::parse(["-Nata=11", "--bar", "input.txt"]);
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get_int("-Nata", 0), 11);
/// assert!(table.contains("-bar"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionTable {
    entries: BTreeMap<String, String>,
}

impl OptionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses raw argument tokens into a new table.
    ///
    /// The program name must already be stripped. Tokens that do not start
    /// with `-` are positional and skipped. Nothing in the input is
    /// rejected; malformed tokens such as `-=x` are stored as given.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        let mut positional = 0usize;

        for arg in args {
            match split_token(arg.as_ref()) {
                Some((name, value)) => {
                    table.entries.insert(name, value);
                }
                None => positional += 1,
            }
        }

        debug!(
            options = table.entries.len(),
            positional, "Parsed argument list"
        );
        table
    }

    /// Parses the arguments of the current process, skipping the program name.
    pub fn from_env() -> Self {
        Self::parse(std::env::args().skip(1))
    }

    /// Returns `true` if `name` was given, with or without a value.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&canonical_name(name))
    }

    /// Returns the raw value stored for `name`.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.entries.get(&canonical_name(name)).map(String::as_str)
    }

    /// Sets `name` to `value` unless it is already present.
    ///
    /// Returns `true` if the value was stored. Used by applications to
    /// derive defaults from other options without clobbering anything the
    /// user passed explicitly.
    ///
    /// # Examples
    ///
    /// ```
    /// use argmap_core::OptionTable;
    ///
    /// let mut table = OptionTable::parse(["-listen=0"]);
    /// assert!(!table.soft_set("-listen", "1"));
    /// assert!(table.soft_set("-port", "8333"));
    /// assert_eq!(table.get_str("-listen", ""), "0");
    /// assert_eq!(table.get_int("-port", 0), 8333);
    /// ```
    pub fn soft_set(&mut self, name: &str, value: &str) -> bool {
        let key = canonical_name(name);
        if self.entries.contains_key(&key) {
            return false;
        }
        debug!(name = %key, value, "Soft-set option");
        self.entries.insert(key, value.to_string());
        true
    }

    /// Boolean form of [`soft_set`](Self::soft_set), storing `"1"` or `"0"`.
    pub fn soft_set_bool(&mut self, name: &str, value: bool) -> bool {
        self.soft_set(name, if value { "1" } else { "0" })
    }

    /// Number of distinct options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no options were given.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, raw value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn entry_map(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub(crate) fn entry_map_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.entries
    }
}

/// Parses raw argument tokens into an [`OptionTable`].
///
/// Shorthand for [`OptionTable::parse`].
pub fn parse<I, S>(args: I) -> OptionTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    OptionTable::parse(args)
}
