//! C++ header emitter
//!
//! Serializes an `EmbeddingTable` into one header:
//!
//! ```text
//! // This file was generated by stdbake. DO NOT EDIT.
//! // Embedded files: 1
//!
//! #pragma once
//!
//! #include <map>
//! #include <string>
//!
//! inline const std::map<std::string, const char *> baked_stdlib = {
//!     {"std_a_b_txt", R"__DELIM__(hello
//! )__DELIM__"},
//! };
//! ```
//!
//! The table is `inline const`: built once when the program loads and never
//! mutated afterwards. Output depends only on the table and the options, so an
//! unchanged tree always renders byte-identical headers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BakeResult;
use crate::literal::{escape_cpp, LiteralRenderer, LiteralStrategy};
use crate::models::EmbeddingTable;

/// Default name of the generated map
pub const DEFAULT_TABLE_NAME: &str = "baked_stdlib";

/// First line of every generated header
pub const PREAMBLE: &str = "// This file was generated by stdbake. DO NOT EDIT.";

const ENTRY_INDENT: &str = "    ";
const CONTINUATION_INDENT: &str = "     ";

/// One-time inclusion guard style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GuardStyle {
    /// `#pragma once`
    #[default]
    Pragma,
    /// `#ifndef NAME` / `#define NAME` / `#endif`
    Macro,
}

/// Derive an include-guard macro from the output file name.
///
/// `src/include/bake.hpp` becomes `BAKE_HPP`.
pub fn guard_macro_for(output: &Path) -> String {
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());

    let mut guard: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if guard.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        guard.insert(0, '_');
    }
    guard
}

/// Header rendering settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEmitter {
    table_name: String,
    guard: GuardStyle,
    guard_macro: String,
    literals: LiteralRenderer,
}

impl HeaderEmitter {
    pub fn new(
        table_name: impl Into<String>,
        guard: GuardStyle,
        guard_macro: impl Into<String>,
        literals: LiteralRenderer,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            guard,
            guard_macro: guard_macro.into(),
            literals,
        }
    }

    /// Render the full header. Fails if any asset cannot be represented.
    pub fn emit(&self, table: &EmbeddingTable) -> BakeResult<String> {
        let body_size = table.content_bytes() + table.len() * 64;
        let mut code = String::with_capacity(body_size + 512);

        code.push_str(PREAMBLE);
        code.push('\n');
        code.push_str(&format!("// Embedded files: {}\n\n", table.len()));

        match self.guard {
            GuardStyle::Pragma => code.push_str("#pragma once\n\n"),
            GuardStyle::Macro => {
                code.push_str(&format!("#ifndef {}\n", self.guard_macro));
                code.push_str(&format!("#define {}\n\n", self.guard_macro));
            }
        }

        code.push_str("#include <map>\n");
        code.push_str("#include <string>\n\n");

        code.push_str(&format!(
            "inline const std::map<std::string, const char *> {} = {{\n",
            self.table_name
        ));

        for entry in table.entries() {
            let asset = &entry.asset;
            let literal =
                self.literals
                    .render(asset.content(), asset.relative_path(), CONTINUATION_INDENT)?;
            let key = escape_cpp(&entry.key);

            match self.literals.strategy() {
                LiteralStrategy::Raw => {
                    code.push_str(&format!("{ENTRY_INDENT}{{\"{key}\", {literal}}},\n"));
                }
                LiteralStrategy::Escaped => {
                    code.push_str(&format!(
                        "{ENTRY_INDENT}{{\"{key}\",\n{CONTINUATION_INDENT}{literal}}},\n"
                    ));
                }
            }
        }

        code.push_str("};\n");

        if self.guard == GuardStyle::Macro {
            code.push_str(&format!("\n#endif // {}\n", self.guard_macro));
        }

        Ok(code)
    }
}
