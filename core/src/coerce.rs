//! Token normalization and value coercion rules.
//!
//! Every rule that turns a raw string into something typed lives here as a
//! pure function, so the table and accessor code never re-implement them.

/// Splits a raw argument token into its canonical name and raw value.
///
/// Returns `None` for tokens that do not start with `-` (positional
/// arguments). One or two leading dashes are stripped and the name is
/// re-prefixed with a single `-`. Everything after the first `=` is the
/// value; without `=` the value is empty.
///
/// # Examples
///
/// ```
/// use argmap_core::split_token;
///
/// assert_eq!(split_token("--Nata=11"), Some(("-Nata".to_string(), "11".to_string())));
/// assert_eq!(split_token("-Nata"), Some(("-Nata".to_string(), String::new())));
/// assert_eq!(split_token("positional"), None);
/// ```
pub fn split_token(token: &str) -> Option<(String, String)> {
    let rest = token.strip_prefix('-')?;
    let rest = rest.strip_prefix('-').unwrap_or(rest);

    let (name, value) = match rest.split_once('=') {
        Some((name, value)) => (name, value),
        None => (rest, ""),
    };

    Some((format!("-{name}"), value.to_string()))
}

/// Canonicalizes an option name given by a caller.
///
/// Lookup names are normally written as `-name`; `--name` and bare `name`
/// resolve to the same key.
///
/// # Examples
///
/// ```
/// use argmap_core::canonical_name;
///
/// assert_eq!(canonical_name("-Nata"), "-Nata");
/// assert_eq!(canonical_name("--Nata"), "-Nata");
/// assert_eq!(canonical_name("Nata"), "-Nata");
/// ```
pub fn canonical_name(name: &str) -> String {
    let bare = name
        .strip_prefix("--")
        .or_else(|| name.strip_prefix('-'))
        .unwrap_or(name);
    format!("-{bare}")
}

/// Returns the negation flag paired with `name` (`-X` → `-noX`).
///
/// # Examples
///
/// ```
/// use argmap_core::negation_of;
///
/// assert_eq!(negation_of("-Nata"), "-noNata");
/// assert_eq!(negation_of("--listen"), "-nolisten");
/// ```
pub fn negation_of(name: &str) -> String {
    let canonical = canonical_name(name);
    format!("-no{}", &canonical[1..])
}

/// Interprets a raw value as a boolean.
///
/// Only the exact string `"0"` is false. A bare flag (empty value), `"1"`,
/// and any other text are true.
pub fn is_truthy(value: &str) -> bool {
    value != "0"
}

/// Interprets a raw value as a base-10 integer.
///
/// Accepts an optional sign followed by one or more ASCII digits and nothing
/// else. Empty input, surrounding whitespace, trailing garbage and values
/// outside the `i64` range all yield `0`.
///
/// # Examples
///
/// ```
/// use argmap_core::parse_int;
///
/// assert_eq!(parse_int("12"), 12);
/// assert_eq!(parse_int("-7"), -7);
/// assert_eq!(parse_int("NaN"), 0);
/// assert_eq!(parse_int("12abc"), 0);
/// ```
pub fn parse_int(value: &str) -> i64 {
    let digits = value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
        .unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    value.parse().unwrap_or(0)
}
