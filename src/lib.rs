//! # ldif2csv
//!
//! Converts an LDAP directory export into a flat users CSV.
//!
//! ## Overview
//!
//! A directory export is a text file of attribute blocks separated by empty
//! lines. Conversion runs in two steps:
//! - **Split**: the text is cut into record blobs at every run of empty lines
//! - **Extract**: each blob yields `uid`, `cn` and `mail`, formatted as one
//!   `uid, displayName, email` row
//!
//! Rows are joined with newlines, without a header.
//!
//! ## Example
//!
//! ```
//! use ldif2csv::{ExportOptions, convert};
//!
//! let export = "uid: alice\ncn: Alice A\nmail: alice@example.com\n\n\
//!               uid: bob\ncn: Bob B\n";
//!
//! let (csv, records) = convert(export, &ExportOptions::default());
//!
//! assert_eq!(records, 2);
//! assert_eq!(csv, "alice, Alice A, alice@example.com\nbob, Bob B, null");
//! ```

pub mod diagnostics;
pub mod error;
pub mod export;
pub mod logging;
pub mod record;
pub mod splitter;

pub use diagnostics::{Diagnostics, RecordingDiagnostics, TracingDiagnostics};
pub use error::{ExportError, ParseMatchPolicyError};
pub use export::{DEFAULT_OUTPUT, ExportOptions, ExportSummary, convert, export_users};
pub use logging::init_logging;
pub use record::{Attribute, MatchPolicy, NULL_MARKER, UserRecord};
pub use splitter::split_records;
