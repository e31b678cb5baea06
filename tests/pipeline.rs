//! End-to-end pipeline tests: fixture directory → scan → summarize → JSON.
//!
//! Uses a tempfile fixture and the canned summarizer — no network, no
//! subprocess.

use codebrief::report::{summarize_records, write_report};
use codebrief::scan::scan_dir;
use codebrief::summarize::StaticSummarizer;
use std::fs;
use tempfile::tempdir;

fn write_fixture(dir: &std::path::Path) {
    fs::write(
        dir.join("service.py"),
        "import os\n\ndef load(path):\n    with open(path) as f:\n        return f.read()\n\nclass Service:\n    def run(self):\n        return load('data')\n",
    )
    .unwrap();
    fs::write(
        dir.join("util.js"),
        "const VERSION = '1.0';\n\nfunction logMessage(message) {\n    console.log(message);\n}\n",
    )
    .unwrap();
    fs::write(dir.join("README.txt"), "not source\n").unwrap();
    fs::write(dir.join("empty.cpp"), "#include <iostream>\nint x = 1;\n").unwrap();
}

#[tokio::test]
async fn pipeline_produces_expected_report() {
    let temp = tempdir().unwrap();
    write_fixture(temp.path());

    let records = scan_dir(temp.path()).unwrap();
    // The .txt file produces no record; the three source files each do.
    assert_eq!(records.len(), 3);

    let summarizer = StaticSummarizer::with_response("A short summary.");
    let reports = summarize_records(records, &summarizer).await;

    let out = temp.path().join("out").join("summary.json");
    write_report(&out, &reports).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let files = json.as_array().unwrap();
    assert_eq!(files.len(), 3);

    let by_name = |name: &str| {
        files
            .iter()
            .find(|f| f["filename"] == name)
            .unwrap_or_else(|| panic!("missing report entry for {name}"))
    };

    let py = by_name("service.py");
    let py_blocks = py["blocks"].as_array().unwrap();
    assert_eq!(py_blocks.len(), 2);
    assert_eq!(py_blocks[0]["type"], "function");
    assert_eq!(py_blocks[0]["name"], "load");
    assert_eq!(py_blocks[1]["type"], "class");
    assert_eq!(py_blocks[1]["name"], "Service");
    assert!(py_blocks[1]["code"].as_str().unwrap().contains("def run"));
    assert_eq!(py_blocks[0]["summary"], "A short summary.");
    assert!(py["filepath"].as_str().unwrap().ends_with("service.py"));

    let js = by_name("util.js");
    let js_blocks = js["blocks"].as_array().unwrap();
    assert_eq!(js_blocks.len(), 1);
    assert_eq!(js_blocks[0]["name"], "logMessage");

    // A recognized file with no extractable blocks still appears.
    let cpp = by_name("empty.cpp");
    assert_eq!(cpp["blocks"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn dry_run_equivalent_uses_sentinel() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("a.py"), "def f():\n    return 1\n").unwrap();

    let records = scan_dir(temp.path()).unwrap();
    let reports = summarize_records(records, &StaticSummarizer::new()).await;

    assert_eq!(reports[0].blocks[0].summary, "No summary generated.");
}
