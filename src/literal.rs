//! C++ string literal rendering
//!
//! Two strategies, one per run:
//! - `Raw`: `R"delim(content)delim"`, readable, fails if the content contains
//!   the terminator `)delim"`.
//! - `Escaped`: adjacent `"..."` literals, one per source line, with every
//!   quote, backslash and control character escaped. Safe for any text.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BakeError, BakeResult};

/// Default raw-string delimiter
pub const DEFAULT_DELIMITER: &str = "__DELIM__";

/// C++ caps raw-string delimiters at 16 characters
pub const MAX_DELIMITER_LEN: usize = 16;

/// How asset content is written into the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LiteralStrategy {
    /// Raw string literal with a delimiter
    #[default]
    Raw,
    /// Character-escaped string literal
    Escaped,
}

/// Check that `delimiter` is a legal raw-string d-char sequence.
pub fn validate_delimiter(delimiter: &str) -> Result<(), String> {
    if delimiter.len() > MAX_DELIMITER_LEN {
        return Err(format!(
            "delimiter '{}' is longer than {} characters",
            delimiter, MAX_DELIMITER_LEN
        ));
    }
    if let Some(bad) = delimiter
        .chars()
        .find(|c| !c.is_ascii_graphic() || matches!(c, '(' | ')' | '\\' | '"'))
    {
        return Err(format!(
            "delimiter '{}' contains {:?}, which is not allowed in a raw string delimiter",
            delimiter, bad
        ));
    }
    Ok(())
}

/// The sequence that ends a raw literal opened with `delimiter`.
pub fn raw_terminator(delimiter: &str) -> String {
    format!("){}\"", delimiter)
}

/// Wrap `content` in a raw literal. Does not check for collisions.
pub fn render_raw(content: &str, delimiter: &str) -> String {
    format!("R\"{delimiter}({content}){delimiter}\"")
}

/// Escape `s` for use between double quotes in C++ source.
///
/// Backslash, double quote, `\n`, `\t` and `\r` get their short escapes; a `?`
/// following another `?` becomes `\?` so no trigraph can form; any other
/// control character becomes a three-digit octal escape, which never swallows
/// a following digit. Non-ASCII text passes through unchanged.
pub fn escape_cpp(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    let mut prev = None;
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '?' if prev == Some('?') => out.push_str("\\?"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
        prev = Some(c);
    }
    out
}

/// Render `content` as adjacent escaped literals split after each newline.
///
/// Continuation pieces are placed on their own line, prefixed with `indent`.
pub fn render_escaped(content: &str, indent: &str) -> String {
    if content.is_empty() {
        return "\"\"".to_string();
    }

    let pieces: Vec<String> = content
        .split_inclusive('\n')
        .map(|line| format!("\"{}\"", escape_cpp(line)))
        .collect();
    pieces.join(&format!("\n{}", indent))
}

/// Renders asset content under one strategy for a whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralRenderer {
    strategy: LiteralStrategy,
    delimiter: String,
}

impl Default for LiteralRenderer {
    fn default() -> Self {
        Self::new(LiteralStrategy::default(), DEFAULT_DELIMITER)
    }
}

impl LiteralRenderer {
    pub fn new(strategy: LiteralStrategy, delimiter: impl Into<String>) -> Self {
        Self {
            strategy,
            delimiter: delimiter.into(),
        }
    }

    pub fn strategy(&self) -> LiteralStrategy {
        self.strategy
    }

    /// Fail if `content` from `path` cannot round-trip through this renderer.
    pub fn check(&self, content: &str, path: &Path) -> BakeResult<()> {
        if content.contains('\0') {
            return Err(BakeError::UnsupportedContent {
                path: path.to_path_buf(),
                reason: "contains a NUL character, which a `const char *` value cannot hold"
                    .to_string(),
            });
        }

        if self.strategy == LiteralStrategy::Raw {
            if content.contains('\r') {
                return Err(BakeError::UnsupportedContent {
                    path: path.to_path_buf(),
                    reason: "contains a carriage return, which raw string literals do not preserve; use strategy = \"escaped\"".to_string(),
                });
            }
            let terminator = raw_terminator(&self.delimiter);
            if content.contains(&terminator) {
                return Err(BakeError::UnsafeDelimiterCollision {
                    path: path.to_path_buf(),
                    terminator,
                });
            }
        }

        Ok(())
    }

    /// Check and render `content` read from `path`.
    pub fn render(&self, content: &str, path: &Path, indent: &str) -> BakeResult<String> {
        self.check(content, path)?;
        Ok(match self.strategy {
            LiteralStrategy::Raw => render_raw(content, &self.delimiter),
            LiteralStrategy::Escaped => render_escaped(content, indent),
        })
    }
}
