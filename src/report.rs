// ---------------------------------------------------------------------------
// Report assembly — sequential summarization and JSON output
// ---------------------------------------------------------------------------

use crate::summarize::Summarizer;
use crate::types::{FileRecord, FileReport, SummarizedBlock};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

/// Attach a summary to every block of every record, one sequential call per
/// block. Record and block order is preserved; blocks are never added or
/// removed here.
pub async fn summarize_records(
    records: Vec<FileRecord>,
    summarizer: &dyn Summarizer,
) -> Vec<FileReport> {
    let mut reports = Vec::with_capacity(records.len());

    for record in records {
        info!(file = %record.filename, blocks = record.blocks.len(), "Summarizing file");

        let mut blocks = Vec::with_capacity(record.blocks.len());
        for block in record.blocks {
            debug!(kind = %block.kind, name = %block.name, "Summarizing block");
            let summary = summarizer.summarize(block.kind, &block.code).await;
            blocks.push(SummarizedBlock {
                kind: block.kind,
                name: block.name,
                code: block.code,
                summary,
            });
        }

        reports.push(FileReport {
            filename: record.filename,
            filepath: record.filepath.display().to_string(),
            blocks,
        });
    }

    reports
}

/// Write the report as pretty-printed JSON, creating the parent directory if
/// it does not exist.
pub fn write_report(path: &Path, reports: &[FileReport]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let json = serde_json::to_string_pretty(reports).context("failed to serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;

    info!(path = %path.display(), files = reports.len(), "Report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarize::{StaticSummarizer, NO_SUMMARY};
    use crate::types::{BlockKind, CodeBlock};
    use std::path::PathBuf;

    fn record(filename: &str, blocks: Vec<CodeBlock>) -> FileRecord {
        FileRecord {
            filename: filename.to_string(),
            filepath: PathBuf::from("/src").join(filename),
            blocks,
        }
    }

    #[tokio::test]
    async fn summaries_attached_in_order() {
        let records = vec![record(
            "app.py",
            vec![
                CodeBlock {
                    kind: BlockKind::Function,
                    name: "a".to_string(),
                    code: "def a():\n    return 1".to_string(),
                },
                CodeBlock {
                    kind: BlockKind::Class,
                    name: "B".to_string(),
                    code: "class B:\n    pass".to_string(),
                },
            ],
        )];

        let summarizer = StaticSummarizer::with_response("summary text");
        let reports = summarize_records(records, &summarizer).await;

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].blocks.len(), 2);
        assert_eq!(reports[0].blocks[0].name, "a");
        assert_eq!(reports[0].blocks[1].name, "B");
        assert!(reports[0].blocks.iter().all(|b| b.summary == "summary text"));
    }

    #[tokio::test]
    async fn report_json_shape() {
        let records = vec![
            record(
                "one.js",
                vec![CodeBlock {
                    kind: BlockKind::Function,
                    name: "f".to_string(),
                    code: "function f() { return 1; }".to_string(),
                }],
            ),
            record("empty.py", vec![]),
        ];

        let summarizer = StaticSummarizer::new();
        let reports = summarize_records(records, &summarizer).await;
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&reports).unwrap()).unwrap();

        assert_eq!(json[0]["filename"], "one.js");
        assert_eq!(json[0]["blocks"][0]["type"], "function");
        assert_eq!(json[0]["blocks"][0]["name"], "f");
        assert_eq!(json[0]["blocks"][0]["summary"], NO_SUMMARY);
        // Zero-block files still appear, with an empty blocks array.
        assert_eq!(json[1]["filename"], "empty.py");
        assert_eq!(json[1]["blocks"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn write_report_creates_parent_dir() {
        let temp = tempfile::tempdir().unwrap();
        let out = temp.path().join("output").join("summary.json");

        let reports = summarize_records(vec![record("x.py", vec![])], &StaticSummarizer::new()).await;
        write_report(&out, &reports).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(json.is_array());
    }
}
