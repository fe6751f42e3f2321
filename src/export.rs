//! Directory export to CSV conversion.
//!
//! [`convert`] turns export text into the CSV payload in memory.
//! [`export_users`] wraps it with the file I/O: one read, one write, and
//! a diagnostic for the outcome.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::Level;

use crate::diagnostics::Diagnostics;
use crate::error::ExportError;
use crate::record::{MatchPolicy, NULL_MARKER, UserRecord};
use crate::splitter::split_records;

/// Output file written when no override is given, relative to the
/// current working directory.
pub const DEFAULT_OUTPUT: &str = "users.csv";

/// Settings for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub output: PathBuf,
    pub match_policy: MatchPolicy,
    pub null_marker: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            match_policy: MatchPolicy::default(),
            null_marker: NULL_MARKER.to_string(),
        }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
}

/// Convert export text into CSV rows joined by `\n`.
///
/// Returns `(payload, record_count)`. One row per non-empty record, in
/// input order, no header and no trailing newline.
pub fn convert(raw: &str, options: &ExportOptions) -> (String, usize) {
    let rows: Vec<String> = split_records(raw)
        .into_iter()
        .map(|blob| {
            UserRecord::extract(blob, options.match_policy).format_row(&options.null_marker)
        })
        .collect();
    let count = rows.len();
    (rows.join("\n"), count)
}

/// Read `input`, convert it, and write the CSV to `options.output`.
///
/// A read failure leaves the output untouched. The output is replaced
/// atomically, so a failed write never leaves a partial file.
pub fn export_users(
    input: &Path,
    options: &ExportOptions,
    diagnostics: &dyn Diagnostics,
) -> Result<ExportSummary, ExportError> {
    diagnostics.log(
        Level::DEBUG,
        &format!(
            "Converting {} -> {} (match mode: {})",
            input.display(),
            options.output.display(),
            options.match_policy
        ),
    );

    let raw = match fs::read_to_string(input) {
        Ok(content) => content,
        Err(source) => {
            let err = ExportError::Read {
                path: input.to_path_buf(),
                source,
            };
            diagnostics.log(Level::ERROR, &err.to_string());
            return Err(err);
        }
    };

    let (payload, records) = convert(&raw, options);
    diagnostics.log(Level::DEBUG, &format!("Converted {records} records"));

    if let Err(source) = write_atomic(&options.output, payload.as_bytes()) {
        let err = ExportError::Write {
            path: options.output.clone(),
            source,
        };
        diagnostics.log(Level::ERROR, &err.to_string());
        return Err(err);
    }

    diagnostics.log(
        Level::INFO,
        &format!("Successfully exported {}", options.output.display()),
    );

    Ok(ExportSummary {
        input: input.to_path_buf(),
        output: options.output.clone(),
        records,
    })
}

/// Write `bytes` to a temporary sibling of `path`, then rename it into place.
fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_sibling(path);
    let result = fs::File::create(&tmp_path)
        .and_then(|mut file| {
            file.write_all(bytes)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&tmp_path, path));

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(DEFAULT_OUTPUT));
    name.push(format!(".tmp-{}", std::process::id()));
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_two_records() {
        let raw = "uid: alice\ncn: Alice A\nmail: alice@example.com\n\n\
                   uid: bob\ncn: Bob B\nmail: bob@example.com\n";
        let (payload, count) = convert(raw, &ExportOptions::default());
        assert_eq!(count, 2);
        assert_eq!(
            payload,
            "alice, Alice A, alice@example.com\nbob, Bob B, bob@example.com"
        );
    }

    #[test]
    fn test_convert_empty_input() {
        let (payload, count) = convert("", &ExportOptions::default());
        assert_eq!(count, 0);
        assert!(payload.is_empty());
    }

    #[test]
    fn test_convert_uses_configured_marker() {
        let options = ExportOptions {
            null_marker: String::new(),
            ..ExportOptions::default()
        };
        let (payload, _) = convert("uid: carol\n\ncn: Dan", &options);
        assert_eq!(payload, "carol, , \n, Dan, ");
    }

    #[test]
    fn test_convert_anchored_policy() {
        let options = ExportOptions {
            match_policy: MatchPolicy::Anchored,
            ..ExportOptions::default()
        };
        let (payload, _) = convert("uid: erin\nemail: uid9@x.com\nmail: erin@x.com", &options);
        assert_eq!(payload, "erin, null, erin@x.com");
    }

    #[test]
    fn test_default_options() {
        let options = ExportOptions::default();
        assert_eq!(options.output, PathBuf::from("users.csv"));
        assert_eq!(options.match_policy, MatchPolicy::Substring);
        assert_eq!(options.null_marker, "null");
    }

    #[test]
    fn test_temp_sibling_stays_in_same_directory() {
        let tmp = temp_sibling(Path::new("out/users.csv"));
        assert_eq!(tmp.parent(), Some(Path::new("out")));
        let name = tmp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("users.csv.tmp-"), "Got: {}", name);
    }
}
