//! Table merging with configurable conflict resolution.
//!
//! Options can come from more than one place (the command line, a
//! configuration file, application-derived defaults). [`OptionTable::merge`]
//! folds one table into another using a [`MergePolicy`] to decide which side
//! keeps a name both define.
//!
//! # Example
//!
//! ```
//! use argmap_core::{MergePolicy, OptionTable};
//!
//! let mut cli = OptionTable::parse(["-port=18333"]);
//! let file = OptionTable::parse(["-port=8333", "-daemon"]);
//!
//! let adopted = cli.merge(&file, MergePolicy::KeepExisting);
//! assert_eq!(adopted, 1);
//! assert_eq!(cli.get_int("-port", 0), 18333);
//! assert!(cli.get_bool("-daemon", false));
//! ```

use tracing::debug;

use crate::OptionTable;

/// Merge behavior for names present in both tables.
///
/// # Examples
///
/// ```
/// use argmap_core::{MergePolicy, OptionTable};
///
/// let incoming = OptionTable::parse(["-x=new"]);
///
/// let mut keep = OptionTable::parse(["-x=old"]);
/// keep.merge(&incoming, MergePolicy::KeepExisting);
/// assert_eq!(keep.get_str("-x", ""), "old");
///
/// let mut overwrite = OptionTable::parse(["-x=old"]);
/// overwrite.merge(&incoming, MergePolicy::Overwrite);
/// assert_eq!(overwrite.get_str("-x", ""), "new");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Values already in the table win (configuration-file semantics).
    #[default]
    KeepExisting,
    /// Incoming values win, extending last-wins across tables.
    Overwrite,
}

impl OptionTable {
    /// Merges `other` into `self`, returning how many entries were adopted.
    ///
    /// Only the names themselves are compared. A `-noX` entry from one side
    /// and an `-X` entry from the other are both kept; the boolean accessor
    /// then resolves them with its usual positive-wins rule.
    pub fn merge(&mut self, other: &OptionTable, policy: MergePolicy) -> usize {
        let mut adopted = 0;
        let entries = self.entry_map_mut();

        for (name, value) in other.entry_map() {
            let take = match policy {
                MergePolicy::KeepExisting => !entries.contains_key(name),
                MergePolicy::Overwrite => entries.get(name) != Some(value),
            };
            if take {
                entries.insert(name.clone(), value.clone());
                adopted += 1;
            }
        }

        debug!(?policy, adopted, "Merged option tables");
        adopted
    }
}
