//! Markdown fragments produced by the activity logger.

use chrono::NaiveDate;

use super::types::StatKind;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a vault path as a link entry: `[[path]]`, or the bare path.
pub fn link_entry(path: &str, make_link: bool) -> String {
    if make_link { format!("[[{path}]]") } else { path.to_string() }
}

/// Append a link list to `content`.
///
/// The list is separated from the existing text by two newlines and ends with
/// a newline. An empty list still appends the separator. With a `header`, a
/// `## header` line precedes the links.
pub fn append_links_to_content(
    content: &str,
    links: &[String],
    header: Option<&str>,
) -> String {
    let mut out = String::from(content);
    out.push_str("\n\n");
    if let Some(header) = header {
        out.push_str("## ");
        out.push_str(header);
        out.push('\n');
    }
    out.push_str(&links.join("\n"));
    out.push('\n');
    out
}

/// Two-line table header: column names, then a dash separator row.
pub fn file_stat_header(kinds: &[StatKind]) -> String {
    let names: Vec<&str> = kinds.iter().map(StatKind::as_str).collect();
    let dashes = vec!["----------"; kinds.len()];
    format!("| Date |{}|\n|-------|{}|", names.join(" | "), dashes.join("|"))
}

/// One table row; `None` cells render empty.
pub fn format_stat_row(date: NaiveDate, cells: &[Option<usize>]) -> String {
    let mut row = format!("|{}|", date.format(DATE_FORMAT));
    for cell in cells {
        if let Some(count) = cell {
            row.push_str(&count.to_string());
        }
        row.push('|');
    }
    row
}

/// Header followed by the rows, newline separated.
pub fn stat_table(header: &str, rows: &[String]) -> String {
    format!("{header}\n{}", rows.join("\n"))
}

/// Append a stats table to `content` after two newlines.
pub fn append_table_to_content(content: &str, table: &str) -> String {
    format!("{content}\n\n{table}\n")
}
