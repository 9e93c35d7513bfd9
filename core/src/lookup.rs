//! Typed accessors over an [`OptionTable`].
//!
//! None of these return errors. An absent option yields the caller's
//! default; a present option is coerced with the rules in
//! [`coerce`](crate::coerce).

use crate::OptionTable;
use crate::coerce::{is_truthy, negation_of, parse_int};

impl OptionTable {
    /// Looks up `name` as a boolean, honoring the `-noX` negation flag.
    ///
    /// - If `name` is present, its own value decides (only `"0"` is false).
    ///   The positive flag wins over `-noname` whenever both are given,
    ///   regardless of order.
    /// - Otherwise, if `-noname` is present, the result is the inverse of
    ///   its value: `-noX` and `-noX=1` give `false`, `-noX=0` gives `true`.
    /// - Otherwise `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// use argmap_core::OptionTable;
    ///
    /// let table = OptionTable::parse(["-noNata", "-Nata"]);
    /// assert!(table.get_bool("-Nata", false));
    ///
    /// let table = OptionTable::parse(["-noNata"]);
    /// assert!(!table.get_bool("-Nata", true));
    ///
    /// let table = OptionTable::parse(["-noNata=0"]);
    /// assert!(table.get_bool("-Nata", false));
    /// ```
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        if let Some(value) = self.raw(name) {
            return is_truthy(value);
        }
        match self.raw(&negation_of(name)) {
            Some(negated) => !is_truthy(negated),
            None => default,
        }
    }

    /// Looks up `name` as a string.
    ///
    /// Returns the stored value verbatim, which is empty for a bare flag or
    /// `-name=`. `-noname` has no effect here.
    ///
    /// # Examples
    ///
    /// ```
    /// use argmap_core::OptionTable;
    ///
    /// let table = OptionTable::parse(["--Nata=verbose", "-bar"]);
    /// assert_eq!(table.get_str("-Nata", ""), "verbose");
    /// assert_eq!(table.get_str("-bar", "eleven"), "");
    /// assert_eq!(table.get_str("-baz", "eleven"), "eleven");
    /// ```
    pub fn get_str<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.raw(name).unwrap_or(default)
    }

    /// Looks up `name` as a base-10 integer.
    ///
    /// A present option whose value is not an integer (including a bare
    /// flag) yields `0`, not `default`. `-noname` has no effect here.
    ///
    /// # Examples
    ///
    /// ```
    /// use argmap_core::OptionTable;
    ///
    /// let table = OptionTable::parse(["-Nata=11", "-bar=NotANumber"]);
    /// assert_eq!(table.get_int("-Nata", 0), 11);
    /// assert_eq!(table.get_int("-bar", 11), 0);
    /// assert_eq!(table.get_int("-baz", 11), 11);
    /// ```
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        self.raw(name).map(parse_int).unwrap_or(default)
    }
}
