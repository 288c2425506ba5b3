//! ID prefix constants.
//!
//! Generated keys look like `prg-a3f8b2c1`: a three-letter prefix, a dash, and
//! eight lowercase hex characters produced by the database.

pub const PREFIX_PROGRAM: &str = "prg";
pub const PREFIX_DAY: &str = "day";
pub const PREFIX_SECTION: &str = "sec";
pub const PREFIX_COMPONENT: &str = "cmp";
pub const PREFIX_EXERCISE: &str = "exr";
pub const PREFIX_EXERCISE_LOG: &str = "log";
pub const PREFIX_COMPLETION: &str = "wcp";

/// Every prefix, in parent-to-child order.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_PROGRAM,
    PREFIX_DAY,
    PREFIX_SECTION,
    PREFIX_COMPONENT,
    PREFIX_EXERCISE,
    PREFIX_EXERCISE_LOG,
    PREFIX_COMPLETION,
];

/// Check whether `id` carries the given prefix and a hex suffix.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|hex| !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
