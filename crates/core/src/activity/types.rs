//! Activity logger option and result types.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::today;
use crate::vault::DocumentRef;

/// A column of the file statistics table.
///
/// Only `created` and `modified` are counted; any other name is kept so the
/// column still appears, but its cells stay empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatKind {
    Created,
    Modified,
    Other(String),
}

impl StatKind {
    pub fn as_str(&self) -> &str {
        match self {
            StatKind::Created => "created",
            StatKind::Modified => "modified",
            StatKind::Other(name) => name,
        }
    }

    /// The default columns: created then modified.
    pub fn defaults() -> Vec<StatKind> {
        vec![StatKind::Created, StatKind::Modified]
    }
}

impl From<&str> for StatKind {
    fn from(s: &str) -> Self {
        match s {
            "created" => StatKind::Created,
            "modified" => StatKind::Modified,
            other => StatKind::Other(other.to_string()),
        }
    }
}

impl From<String> for StatKind {
    fn from(s: String) -> Self {
        StatKind::from(s.as_str())
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`ActivityLogger::insert_activity_log`](super::ActivityLogger::insert_activity_log).
#[derive(Debug, Clone)]
pub struct ActivityLogOptions {
    /// Append links to files created on the reference dates.
    pub insert_created: bool,
    /// Append links to files modified on the reference dates, minus those
    /// already listed as created.
    pub insert_modified: bool,
    /// Reference dates, in output order.
    pub dates: Vec<NaiveDate>,
    /// Target document. `None` turns the call into a no-op.
    pub document: Option<DocumentRef>,
    /// Emit `[[path]]` wiki links instead of bare paths.
    pub make_link: bool,
    /// Put a `## Created` / `## Modified` heading above each list.
    pub section_headers: bool,
}

impl Default for ActivityLogOptions {
    fn default() -> Self {
        Self {
            insert_created: false,
            insert_modified: false,
            dates: vec![today()],
            document: None,
            make_link: true,
            section_headers: false,
        }
    }
}

/// Options for [`ActivityLogger::insert_file_stats`](super::ActivityLogger::insert_file_stats).
#[derive(Debug, Clone)]
pub struct FileStatsOptions {
    /// Table columns after the date column.
    pub stats: Vec<StatKind>,
    /// One row per date, in this order.
    pub dates: Vec<NaiveDate>,
    /// Target document. `None` turns the call into a no-op.
    pub document: Option<DocumentRef>,
    /// Ignore `dates` and emit a row for every day with any vault activity.
    pub all_time: bool,
}

impl Default for FileStatsOptions {
    fn default() -> Self {
        Self {
            stats: StatKind::defaults(),
            dates: vec![today()],
            document: None,
            all_time: false,
        }
    }
}

/// What an insert operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum InsertOutcome {
    /// No target document was given; the vault was not touched.
    Skipped,
    /// The document was rewritten. Counts are link entries for activity
    /// logs, and summed table cells for file stats.
    Written { created: usize, modified: usize },
}
