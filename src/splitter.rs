//! Record splitter for directory exports.
//!
//! A directory export is a sequence of attribute blocks, one per entry,
//! separated by one or more empty lines:
//! ```text
//! uid: alice
//! cn: Alice A
//! mail: alice@example.com
//!
//! uid: bob
//! cn: Bob B
//! ```
//!
//! Only truly empty lines separate records. A line holding nothing but
//! spaces or tabs stays inside its block. A leading byte order mark is
//! dropped before splitting.

use regex::Regex;
use std::sync::LazyLock;

static RE_RECORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\r?\n){2,}").expect("valid record separator regex"));

/// Split raw export text into trimmed, non-empty record blobs.
///
/// Blobs borrow from `raw` and keep their order of appearance.
pub fn split_records(raw: &str) -> Vec<&str> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    RE_RECORD_SEPARATOR
        .split(raw)
        .map(str::trim)
        .filter(|blob| !blob.is_empty())
        .collect()
}
