//! Activity logger implementation.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::vault::{FileRecord, Vault, VaultResult};

use super::markdown::{
    append_links_to_content, append_table_to_content, file_stat_header, format_stat_row,
    link_entry, stat_table,
};
use super::types::{ActivityLogOptions, FileStatsOptions, InsertOutcome, StatKind};

/// Appends vault activity to documents.
///
/// Every call re-enumerates the vault; nothing is cached between calls.
pub struct ActivityLogger<V> {
    vault: V,
}

impl<V: Vault> ActivityLogger<V> {
    pub fn new(vault: V) -> Self {
        Self { vault }
    }

    pub fn vault(&self) -> &V {
        &self.vault
    }

    pub fn into_inner(self) -> V {
        self.vault
    }

    /// Link entries for files created on `date`, in vault enumeration order.
    pub fn links_created_on(&self, date: NaiveDate, make_link: bool) -> VaultResult<Vec<String>> {
        self.links_matching(date, make_link, FileRecord::created_on)
    }

    /// Link entries for files last modified on `date`, in vault enumeration order.
    pub fn links_modified_on(&self, date: NaiveDate, make_link: bool) -> VaultResult<Vec<String>> {
        self.links_matching(date, make_link, FileRecord::modified_on)
    }

    fn links_matching(
        &self,
        date: NaiveDate,
        make_link: bool,
        predicate: fn(&FileRecord, NaiveDate) -> bool,
    ) -> VaultResult<Vec<String>> {
        Ok(self
            .vault
            .list_files()?
            .iter()
            .filter(|f| predicate(f, date))
            .map(|f| link_entry(&f.path, make_link))
            .collect())
    }

    /// Append created and/or modified link lists to the target document.
    ///
    /// Modified links that also appear among the created links are dropped.
    /// Duplicates within the modified list (a file touched on several of the
    /// reference dates) are kept. The document is written back even when
    /// neither list was requested.
    pub fn insert_activity_log(&self, options: &ActivityLogOptions) -> VaultResult<InsertOutcome> {
        let Some(document) = options.document.as_ref() else {
            debug!("no target document, skipping activity log");
            return Ok(InsertOutcome::Skipped);
        };

        let mut content = self.vault.read_text(document)?;

        let mut created_links = Vec::new();
        if options.insert_created {
            for date in &options.dates {
                created_links.extend(self.links_created_on(*date, options.make_link)?);
            }
            info!(
                count = created_links.len(),
                dates = ?options.dates,
                "files found created on these date(s)"
            );
            content = append_links_to_content(
                &content,
                &created_links,
                section_header(options, "Created"),
            );
        }

        let mut modified_count = 0;
        if options.insert_modified {
            let already_created: HashSet<&str> =
                created_links.iter().map(String::as_str).collect();

            let mut modified_links = Vec::new();
            for date in &options.dates {
                modified_links.extend(
                    self.links_modified_on(*date, options.make_link)?
                        .into_iter()
                        .filter(|link| !already_created.contains(link.as_str())),
                );
            }
            info!(
                count = modified_links.len(),
                dates = ?options.dates,
                "files found modified on these date(s)"
            );
            modified_count = modified_links.len();
            content = append_links_to_content(
                &content,
                &modified_links,
                section_header(options, "Modified"),
            );
        }

        self.vault.write_text(document, &content)?;
        info!(document = %document, "activity log written");

        Ok(InsertOutcome::Written { created: created_links.len(), modified: modified_count })
    }

    /// Two-line Markdown header for a stats table with the given columns.
    pub fn file_stat_header(kinds: &[StatKind]) -> String {
        file_stat_header(kinds)
    }

    /// One stats row: `|YYYY-MM-DD|<count>|...|`, empty cells for unknown kinds.
    pub fn file_stat_row(&self, date: NaiveDate, kinds: &[StatKind]) -> VaultResult<String> {
        let cells = self.stat_cells(date, kinds)?;
        Ok(format_stat_row(date, &cells))
    }

    fn stat_cells(&self, date: NaiveDate, kinds: &[StatKind]) -> VaultResult<Vec<Option<usize>>> {
        kinds
            .iter()
            .map(|kind| match kind {
                StatKind::Created => self.links_created_on(date, true).map(|l| Some(l.len())),
                StatKind::Modified => self.links_modified_on(date, true).map(|l| Some(l.len())),
                StatKind::Other(_) => Ok(None),
            })
            .collect()
    }

    /// Every calendar day on which some file was created or modified, ascending.
    pub fn active_days(&self) -> VaultResult<Vec<NaiveDate>> {
        let days: BTreeSet<NaiveDate> = self
            .vault
            .list_files()?
            .iter()
            .flat_map(|f| [f.created.date_naive(), f.modified.date_naive()])
            .collect();
        Ok(days.into_iter().collect())
    }

    /// Append a created/modified count table to the target document.
    ///
    /// One row per reference date, in the given order. With `all_time`, the
    /// rows cover [`active_days`](Self::active_days) instead.
    pub fn insert_file_stats(&self, options: &FileStatsOptions) -> VaultResult<InsertOutcome> {
        let Some(document) = options.document.as_ref() else {
            debug!("no target document, skipping file stats");
            return Ok(InsertOutcome::Skipped);
        };

        let content = self.vault.read_text(document)?;

        let dates = if options.all_time { self.active_days()? } else { options.dates.clone() };

        let header = file_stat_header(&options.stats);
        debug!(%header, "generated file stats header");

        let mut created = 0;
        let mut modified = 0;
        let mut rows = Vec::with_capacity(dates.len());
        for date in &dates {
            let cells = self.stat_cells(*date, &options.stats)?;
            for (kind, cell) in options.stats.iter().zip(&cells) {
                match kind {
                    StatKind::Created => created += cell.unwrap_or(0),
                    StatKind::Modified => modified += cell.unwrap_or(0),
                    StatKind::Other(_) => {}
                }
            }
            let row = format_stat_row(*date, &cells);
            debug!(%date, %row, "generated file stats row");
            rows.push(row);
        }

        let table = stat_table(&header, &rows);
        let content = append_table_to_content(&content, &table);

        self.vault.write_text(document, &content)?;
        info!(document = %document, rows = rows.len(), "file stats written");

        Ok(InsertOutcome::Written { created, modified })
    }
}

fn section_header<'a>(options: &ActivityLogOptions, name: &'a str) -> Option<&'a str> {
    options.section_headers.then_some(name)
}
