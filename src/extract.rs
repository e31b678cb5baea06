// ---------------------------------------------------------------------------
// Block extraction — heuristic, line-by-line, no grammar
// ---------------------------------------------------------------------------

use crate::types::{BlockKind, CodeBlock, UNNAMED};
use regex::Regex;

// ---------------------------------------------------------------------------
// Syntax family classification
// ---------------------------------------------------------------------------

/// The two block-termination strategies. Dispatched by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// Python-like: a block ends at the next non-blank column-0 line.
    Indent,
    /// C-like: a block ends when the brace depth returns to zero.
    Brace,
}

/// Map a file extension to its syntax family. Unrecognized extensions return
/// `None` and the file is skipped by the scanner.
pub fn classify_extension(ext: &str) -> Option<Syntax> {
    match ext {
        "py" => Some(Syntax::Indent),
        "java" | "cpp" | "js" => Some(Syntax::Brace),
        _ => None,
    }
}

/// Extract all top-level blocks from `content` using the given strategy.
pub fn extract_blocks(content: &str, syntax: Syntax) -> Vec<CodeBlock> {
    match syntax {
        Syntax::Indent => extract_indent(content),
        Syntax::Brace => extract_brace(content),
    }
}

// ---------------------------------------------------------------------------
// Indentation-based extraction (Python-like)
// ---------------------------------------------------------------------------

/// Extract top-level `def`/`class` blocks by indentation.
///
/// A block starts at a column-0 line whose stripped content begins with `def`
/// or `class`. The body consumes every blank or indented line that follows;
/// the next non-blank column-0 line ends the block and is not consumed.
/// Trailing blank lines are trimmed before the block is emitted.
///
/// Known limitations, accepted rather than corrected: decorators above a
/// `def` are not captured with it, and top-level multi-line literals between
/// blocks are absorbed into the preceding block.
pub fn extract_indent(content: &str) -> Vec<CodeBlock> {
    let name_re = Regex::new(r"^(def|class)\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap();

    let lines: Vec<&str> = content.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let stripped = line.trim_start();
        let indent = line.len() - stripped.len();

        let is_start =
            indent == 0 && (keyword_prefix(stripped, "def") || keyword_prefix(stripped, "class"));
        if !is_start {
            i += 1;
            continue;
        }

        let kind = if keyword_prefix(stripped, "class") {
            BlockKind::Class
        } else {
            BlockKind::Function
        };
        let name = name_re
            .captures(stripped)
            .map(|c| c[2].to_string())
            .unwrap_or_else(|| UNNAMED.to_string());

        // Consume blank and indented lines; stop at the next top-level statement.
        let start = i;
        let mut end = i + 1;
        while end < lines.len() {
            let l = lines[end];
            let t = l.trim();
            let ind = l.len() - l.trim_start().len();
            if !t.is_empty() && ind == 0 {
                break;
            }
            end += 1;
        }

        // Trim trailing blank lines, keeping at least the definition line.
        let mut last = end;
        while last > start + 1 && lines[last - 1].trim().is_empty() {
            last -= 1;
        }

        blocks.push(CodeBlock {
            kind,
            name,
            code: lines[start..last].join("\n"),
        });
        i = end;
    }

    blocks
}

/// True when `line` starts with the keyword followed by whitespace
/// (space or tab both count).
fn keyword_prefix(line: &str, keyword: &str) -> bool {
    line.strip_prefix(keyword)
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace)
}

// ---------------------------------------------------------------------------
// Brace-based extraction (C-like: Java, C++, JavaScript)
// ---------------------------------------------------------------------------

/// Words that can precede `(...) {` without starting a definition.
const CONTROL_KEYWORDS: &[&str] =
    &["if", "else", "for", "while", "switch", "catch", "do", "return"];

/// Extract top-level blocks by signature match plus brace-depth tracking.
///
/// A block start is a single-line match: optional access modifier, optional
/// static/final/async, then either the literal keyword `class` plus an
/// identifier, or `function` / an optional type token plus an identifier and
/// a parameter list — with the opening `{` on the same physical line.
/// Multi-line signatures are not matched (hard limitation).
///
/// Braces inside string literals or comments are not tokenized, so depth
/// tracking can desynchronize; the resulting mis-segmentation is emitted
/// as-is, never guessed around.
pub fn extract_brace(content: &str) -> Vec<CodeBlock> {
    let class_re = Regex::new(
        r"^\s*(?:(?:public|private|protected)\s+)?(?:(?:static|final|abstract)\s+)*class\s+([A-Za-z_][A-Za-z0-9_]*)[^{]*\{",
    )
    .unwrap();
    let func_re = Regex::new(
        r"^\s*(?:(?:public|private|protected)\s+)?(?:(?:static|final|async)\s+)*(?:function\s+)?(?:[A-Za-z_][A-Za-z0-9_<>\[\]:.]*\s+)?([A-Za-z_][A-Za-z0-9_]*)\s*\([^)]*\)[^{]*\{",
    )
    .unwrap();

    let lines: Vec<&str> = content.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        let (kind, name) = if let Some(caps) = class_re.captures(line) {
            (BlockKind::Class, capture_name(&caps))
        } else if let Some(caps) = func_re.captures(line) {
            let name = capture_name(&caps);
            if CONTROL_KEYWORDS.contains(&name.as_str()) {
                i += 1;
                continue;
            }
            (BlockKind::Function, name)
        } else {
            // Lines outside any matched block (includes, package declarations,
            // top-level constants) are skipped.
            i += 1;
            continue;
        };

        let mut depth = brace_delta(line);
        if depth <= 0 {
            // Single-line block, emitted with just the start line.
            blocks.push(CodeBlock {
                kind,
                name,
                code: line.to_string(),
            });
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i + 1;
        while end < lines.len() {
            depth += brace_delta(lines[end]);
            end += 1;
            if depth <= 0 {
                break;
            }
        }

        // Braces that never rebalance run the block to EOF; trim any trailing
        // blank lines so the invariant on `code` still holds.
        let mut last = end;
        while last > start + 1 && lines[last - 1].trim().is_empty() {
            last -= 1;
        }

        blocks.push(CodeBlock {
            kind,
            name,
            code: lines[start..last].join("\n"),
        });
        i = end;
    }

    blocks
}

fn capture_name(caps: &regex::Captures<'_>) -> String {
    caps.get(1)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNNAMED.to_string())
}

fn brace_delta(line: &str) -> i32 {
    let mut delta = 0;
    for ch in line.chars() {
        match ch {
            '{' => delta += 1,
            '}' => delta -= 1,
            _ => {}
        }
    }
    delta
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
