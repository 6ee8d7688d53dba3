//! Shared output formatting for the insert commands.

use daylog_core::activity::InsertOutcome;
use daylog_core::vault::DocumentRef;
use serde::Serialize;

use super::common::Execution;

/// Formatted execution result for JSON output.
#[derive(Debug, Serialize)]
pub struct ExecutionOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    pub outcome: InsertOutcome,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<&'a str>,
}

impl<'a> ExecutionOutput<'a> {
    pub fn new(document: Option<&DocumentRef>, execution: &'a Execution) -> Self {
        Self {
            document: document.map(ToString::to_string),
            outcome: execution.outcome,
            dry_run: execution.preview.is_some(),
            preview: execution.preview.as_deref(),
        }
    }
}

/// Print an execution result.
///
/// `summary` renders the written counts for the human-readable form.
pub fn print_execution(
    document: Option<&DocumentRef>,
    execution: &Execution,
    json: bool,
    summary: impl FnOnce(usize, usize) -> String,
) {
    if json {
        let output = ExecutionOutput::new(document, execution);
        println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        return;
    }

    match (execution.outcome, document) {
        (InsertOutcome::Written { created, modified }, Some(doc)) => {
            if let Some(preview) = &execution.preview {
                println!("-- would append to {doc} --");
                print!("{preview}");
            } else {
                println!("{} to {doc}", summary(created, modified));
            }
        }
        _ => {
            println!("(no target document; pass --doc or set `document` in the profile)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_for_written_preview() {
        let execution = Execution {
            outcome: InsertOutcome::Written { created: 1, modified: 0 },
            preview: Some("\n\n[[a.md]]\n".to_string()),
        };
        let doc = DocumentRef::from("daily.md");

        let json = serde_json::to_value(ExecutionOutput::new(Some(&doc), &execution)).unwrap();
        assert_eq!(json["document"], "daily.md");
        assert_eq!(json["outcome"]["status"], "written");
        assert_eq!(json["outcome"]["created"], 1);
        assert_eq!(json["dry_run"], true);
        assert_eq!(json["preview"], "\n\n[[a.md]]\n");
    }

    #[test]
    fn test_json_output_for_skipped() {
        let execution = Execution { outcome: InsertOutcome::Skipped, preview: None };

        let json = serde_json::to_value(ExecutionOutput::new(None, &execution)).unwrap();
        assert_eq!(json["outcome"]["status"], "skipped");
        assert_eq!(json["dry_run"], false);
        assert!(json.get("document").is_none());
        assert!(json.get("preview").is_none());
    }
}
