use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum file size (in bytes) that will be read into memory.
pub const MAX_FILE_READ: usize = 512 * 1024;

/// Name used for a block whose definition line yields no identifier.
pub const UNNAMED: &str = "Unnamed";

// ---------------------------------------------------------------------------
// Code blocks
// ---------------------------------------------------------------------------

/// Classification of an extracted block. Serialized as `type` in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Function,
    Class,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Function => "function",
            BlockKind::Class => "class",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One top-level function or class definition, captured verbatim.
///
/// `code` runs from the definition line through the last content line, with
/// trailing blank lines stripped and internal formatting preserved. It always
/// contains at least the definition line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub kind: BlockKind,
    pub name: String,
    pub code: String,
}

// ---------------------------------------------------------------------------
// Scan results
// ---------------------------------------------------------------------------

/// All blocks extracted from one scanned file, in file order.
///
/// Top-level only: nested definitions are absorbed into the enclosing block's
/// `code` and never emitted separately.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub filename: String,
    pub filepath: PathBuf,
    pub blocks: Vec<CodeBlock>,
}

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// A code block with its generated summary attached.
#[derive(Debug, Clone, Serialize)]
pub struct SummarizedBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub name: String,
    pub code: String,
    pub summary: String,
}

/// Per-file entry in the final JSON report. Files that yielded no blocks
/// still appear, with an empty `blocks` array.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub filename: String,
    pub filepath: String,
    pub blocks: Vec<SummarizedBlock>,
}

// ---------------------------------------------------------------------------
// Summarizer configuration — loaded from .codebrief.toml or defaults
// ---------------------------------------------------------------------------

/// Runtime configuration for the summarization backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Chat model name sent to the completion endpoint.
    pub model: String,
    /// Base URL of an OpenAI-compatible API.
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            temperature: 0.2,
            max_tokens: 512,
        }
    }
}
