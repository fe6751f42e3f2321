//! User records and field extraction.
//!
//! Each record blob is scanned line by line for the three attributes the
//! CSV carries: `uid`, `cn` (display name) and `mail`. Every line is tested
//! against every attribute, and a later match overwrites an earlier one.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseMatchPolicyError;

/// Placeholder written for an attribute the record never carried.
pub const NULL_MARKER: &str = "null";

/// An attribute copied into the CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Uid,
    DisplayName,
    Email,
}

impl Attribute {
    /// All attributes, in CSV column order.
    pub const ALL: [Attribute; 3] = [Attribute::Uid, Attribute::DisplayName, Attribute::Email];

    /// The directory attribute name.
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::Uid => "uid",
            Attribute::DisplayName => "cn",
            Attribute::Email => "mail",
        }
    }
}

/// How attribute lines are recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// A line matches when it contains the key anywhere. The value is the
    /// line with the first `"<key>: "` removed, wherever it occurs.
    ///
    /// This means `email: uid123@x.com` also sets `uid`.
    #[default]
    Substring,
    /// A line matches when the text before its first colon is exactly the
    /// key. The value is everything after that colon, trimmed.
    Anchored,
}

impl MatchPolicy {
    /// Value carried by `line` for `attr`, if the line matches.
    pub fn match_line(&self, line: &str, attr: Attribute) -> Option<String> {
        let key = attr.key();
        match self {
            MatchPolicy::Substring => {
                if !line.contains(key) {
                    return None;
                }
                Some(line.replacen(&format!("{key}: "), "", 1))
            }
            MatchPolicy::Anchored => {
                let (name, value) = line.split_once(':')?;
                (name.trim() == key).then(|| value.trim().to_string())
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MatchPolicy::Substring => "substring",
            MatchPolicy::Anchored => "anchored",
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchPolicy {
    type Err = ParseMatchPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(MatchPolicy::Substring),
            "anchored" => Ok(MatchPolicy::Anchored),
            other => Err(ParseMatchPolicyError(other.to_string())),
        }
    }
}

/// The attributes extracted from one record blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    pub uid: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl UserRecord {
    /// Extract a record from a blob. Never fails; unmatched attributes
    /// stay `None`.
    pub fn extract(blob: &str, policy: MatchPolicy) -> Self {
        let mut record = UserRecord::default();
        for line in blob.lines() {
            for attr in Attribute::ALL {
                if let Some(value) = policy.match_line(line, attr) {
                    *record.slot_mut(attr) = Some(value);
                }
            }
        }
        record
    }

    pub fn get(&self, attr: Attribute) -> Option<&str> {
        match attr {
            Attribute::Uid => self.uid.as_deref(),
            Attribute::DisplayName => self.display_name.as_deref(),
            Attribute::Email => self.email.as_deref(),
        }
    }

    fn slot_mut(&mut self, attr: Attribute) -> &mut Option<String> {
        match attr {
            Attribute::Uid => &mut self.uid,
            Attribute::DisplayName => &mut self.display_name,
            Attribute::Email => &mut self.email,
        }
    }

    /// Format as `uid, displayName, email`, writing `null_marker` for
    /// missing attributes. Values are not quoted or escaped.
    pub fn format_row(&self, null_marker: &str) -> String {
        Attribute::ALL
            .iter()
            .map(|&attr| self.get(attr).unwrap_or(null_marker))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Format with the default [`NULL_MARKER`].
    pub fn to_row(&self) -> String {
        self.format_row(NULL_MARKER)
    }
}
