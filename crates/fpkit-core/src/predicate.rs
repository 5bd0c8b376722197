//! Predicate builders for string-like elements.
//!
//! Each builder returns a closure usable with [`crate::seq::filter`] or
//! [`crate::seq::Sequence::filter`].

use regex::Regex;

use crate::error::Result;

/// Matches values ending with `suffix`.
pub fn ends_with<S: AsRef<str>>(suffix: impl Into<String>) -> impl Fn(&S) -> bool + Clone {
    let suffix = suffix.into();
    move |value: &S| value.as_ref().ends_with(suffix.as_str())
}

/// Matches values starting with `prefix`.
pub fn starts_with<S: AsRef<str>>(prefix: impl Into<String>) -> impl Fn(&S) -> bool + Clone {
    let prefix = prefix.into();
    move |value: &S| value.as_ref().starts_with(prefix.as_str())
}

/// Extension of a file name: the text after the final `.`.
///
/// Only the last `/`-separated component is inspected, so directory names
/// never contribute. A name with no `.`, or whose only `.` is the leading
/// one (`.gitignore`), has no extension.
pub fn extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(0) | None => None,
        Some(pos) => Some(&name[pos + 1..]),
    }
}

/// Matches file names whose extension equals `ext`. A leading `.` on `ext`
/// is ignored, so `"swift"` and `".swift"` are equivalent.
pub fn has_extension<S: AsRef<str>>(ext: impl Into<String>) -> impl Fn(&S) -> bool + Clone {
    let ext: String = ext.into();
    let ext = ext.strip_prefix('.').map(str::to_owned).unwrap_or(ext);
    move |value: &S| extension(value.as_ref()) == Some(ext.as_str())
}

/// Matches file names with no extension.
pub fn has_no_extension<S: AsRef<str>>() -> impl Fn(&S) -> bool + Clone {
    |value: &S| extension(value.as_ref()).is_none()
}

/// Matches values containing a match for the regular expression `pattern`.
pub fn matches<S: AsRef<str>>(pattern: &str) -> Result<impl Fn(&S) -> bool + Clone + use<S>> {
    let re = Regex::new(pattern)?;
    Ok(move |value: &S| re.is_match(value.as_ref()))
}

/// Negates `pred`.
pub fn not<T, P>(pred: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |value: &T| !pred(value)
}

/// Matches when both `p` and `q` match. `q` is skipped once `p` fails.
pub fn all_of<T, P, Q>(p: P, q: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value: &T| p(value) && q(value)
}

/// Matches when either `p` or `q` matches.
pub fn any_of<T, P, Q>(p: P, q: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value: &T| p(value) || q(value)
}
