//! Compiled patterns for recovering test titles from JavaScript sources.
//!
//! The `regex` crate has no backreferences, so a quoted string that may
//! use single, double, or backtick quotes is expressed as three capture
//! alternatives; `quoted_capture` returns whichever one matched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `describe('title', ...)` in any quote style
pub static DESCRIBE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"describe\s*\(\s*(?:'([^']*)'|"([^"]*)"|`([^`]*)`)"#).unwrap()
});

/// `it('title', ...)` or `test('title', ...)` in any quote style
pub static IT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\b(?:it|test)\s*\(\s*(?:'([^']*)'|"([^"]*)"|`([^`]*)`)"#).unwrap()
});

/// Nightwatch scenario entry: a quoted object key bound to a function
/// taking the browser session, e.g. `'user can log in': function (browser) {`.
/// Requiring the `browser` parameter keeps quoted lifecycle helpers such
/// as `'setup': function (done)` out of the inventory.
pub static E2E_SCENARIO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:'([^']+)'|"([^"]+)")\s*:\s*function\s*\(\s*browser\b"#).unwrap()
});

/// First non-empty capture group of a quote-alternation match
pub fn quoted_capture<'t>(caps: &Captures<'t>) -> Option<&'t str> {
    (1..caps.len()).find_map(|i| caps.get(i)).map(|m| m.as_str())
}
