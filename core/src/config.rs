//! Options read from a configuration file.
//!
//! The file holds one option per line in the same `name=value` form used on
//! the command line, minus the leading dash:
//!
//! ```text
//! # comments and blank lines are skipped
//! rpcuser=alice
//! port = 8333
//! nolisten
//! ```
//!
//! File entries never override options given on the command line; see
//! [`OptionTable::merge_config_file`].

use std::path::Path;

use tracing::debug;

use crate::coerce::canonical_name;
use crate::error::{ConfigError, Result};
use crate::{MergePolicy, OptionTable};

/// Reader for `name=value` configuration files.
pub struct ConfigFile;

impl ConfigFile {
    /// Parses configuration text into an [`OptionTable`].
    ///
    /// Whitespace around names and values is trimmed. A line without `=` is
    /// a flag with an empty value. Repeated names follow last-wins.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidLine`](ConfigError::InvalidLine) for a line whose
    /// name is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use argmap_core::ConfigFile;
    ///
    /// let table = ConfigFile::parse("# node\nport = 8333\nnolisten\n").unwrap();
    /// assert_eq!(table.get_int("-port", 0), 8333);
    /// assert!(!table.get_bool("-listen", true));
    ///
    /// assert!(ConfigFile::parse("=orphan").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<OptionTable> {
        let mut table = OptionTable::new();
        let entries = table.entry_map_mut();

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (name, value) = match line.split_once('=') {
                Some((name, value)) => (name.trim(), value.trim()),
                None => (line, ""),
            };
            if name.trim_start_matches('-').is_empty() {
                return Err(ConfigError::InvalidLine {
                    line: index + 1,
                    content: raw_line.to_string(),
                });
            }

            entries.insert(canonical_name(name), value.to_string());
        }

        Ok(table)
    }

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](ConfigError::Io) if the file cannot be read, or
    /// [`InvalidLine`](ConfigError::InvalidLine) if a line is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<OptionTable> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&text)?;
        debug!(path = %path.display(), options = table.len(), "Loaded config file");
        Ok(table)
    }
}

impl OptionTable {
    /// Merges options from the configuration file at `path`.
    ///
    /// Names already present (from the command line) keep their values.
    /// Returns the number of entries adopted from the file. A file that does
    /// not exist is not an error and adopts nothing.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`] for unreadable or malformed files.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use argmap_core::OptionTable;
    ///
    /// let mut table = OptionTable::from_env();
    /// table.merge_config_file("node.conf").unwrap();
    /// let port = table.get_int("-port", 8333);
    /// ```
    pub fn merge_config_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, skipping");
            return Ok(0);
        }
        let file = ConfigFile::load(path)?;
        Ok(self.merge(&file, MergePolicy::KeepExisting))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let table = ConfigFile::parse("\n# header\n   \n  # indented\nfoo=1\n").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get_str("-foo", ""), "1");
    }

    #[test]
    fn test_parse_trims_and_keeps_inner_equals() {
        let table = ConfigFile::parse("  url =  http://x/?a=b  \n").unwrap();
        assert_eq!(table.get_str("-url", ""), "http://x/?a=b");
    }

    #[test]
    fn test_parse_accepts_dashed_names() {
        let table = ConfigFile::parse("-a=1\n--b=2\n").unwrap();
        assert_eq!(table.get_int("-a", 0), 1);
        assert_eq!(table.get_int("-b", 0), 2);
    }

    #[test]
    fn test_parse_last_wins() {
        let table = ConfigFile::parse("x=1\nx=2\n").unwrap();
        assert_eq!(table.get_int("-x", 0), 2);
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        let err = ConfigFile::parse("ok=1\n = 3\n").unwrap_err();
        match err {
            ConfigError::InvalidLine { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
        assert!(ConfigFile::parse("--=x").is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigFile::load(dir.path().join("absent.conf")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_merge_config_file_command_line_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port=8333\ndaemon=1\nnolisten").unwrap();

        let mut table = OptionTable::parse(["-port=18333", "-listen"]);
        let adopted = table.merge_config_file(file.path()).unwrap();

        assert_eq!(adopted, 2);
        assert_eq!(table.get_int("-port", 0), 18333);
        assert!(table.get_bool("-daemon", false));
        assert!(table.get_bool("-listen", false));
    }

    #[test]
    fn test_merge_config_file_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = OptionTable::parse(["-a"]);
        assert_eq!(table.merge_config_file(dir.path().join("nope.conf")).unwrap(), 0);
        assert_eq!(table.len(), 1);
    }
}
