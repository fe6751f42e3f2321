//! CLI tool to export users from an LDAP directory export into a CSV file.
//!
//! Usage:
//!   ldif2csv -f <export.ldif>
//!   ldif2csv -f <export.ldif> -o <users.csv>

use clap::Parser;
use ldif2csv::{
    DEFAULT_OUTPUT, ExportOptions, MatchPolicy, NULL_MARKER, TracingDiagnostics, export_users,
    init_logging,
};
use std::path::PathBuf;
use std::process;
use tracing::debug;

/// Export the users in an LDAP directory export to a CSV file.
///
/// Each record becomes one `uid, displayName, email` row.
#[derive(Parser)]
#[command(name = "ldif2csv", version)]
struct Cli {
    /// The file containing the LDAP users
    #[arg(short, long)]
    file: PathBuf,

    /// Where to write the CSV
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// How attribute lines are recognized: substring or anchored
    #[arg(long, default_value_t = MatchPolicy::Substring)]
    match_mode: MatchPolicy,

    /// Text written for missing attributes
    #[arg(long, default_value = NULL_MARKER)]
    null_marker: String,

    /// Log paths and record counts
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ExportOptions {
        output: cli.output,
        match_policy: cli.match_mode,
        null_marker: cli.null_marker,
    };

    match export_users(&cli.file, &options, &TracingDiagnostics) {
        Ok(summary) => debug!(
            input = %summary.input.display(),
            output = %summary.output.display(),
            records = summary.records,
            "export finished"
        ),
        // Already reported through the diagnostics sink.
        Err(_) => process::exit(1),
    }
}
