//! Test fixtures - reusable input trees.

/// A small standard library: nested directories, quotes, backslashes,
/// blank lines and a file without a trailing newline.
pub const SMALL_STD: &[(&str, &str)] = &[
    ("prelude.earl", "import core.io\n"),
    ("core/io.earl", "fn print(s) {\n    write(1, s)\n}\n"),
    ("core/list.earl", "# \"quoted\" and \\backslash\\\n"),
    ("text/empty.txt", ""),
    ("text/poem.txt", "roses\n\nviolets"),
];

/// Keys `SMALL_STD` derives with the default settings, in table order.
pub const SMALL_STD_KEYS: &[&str] = &[
    "std_core_io_earl",
    "std_core_list_earl",
    "std_prelude_earl",
    "std_text_empty_txt",
    "std_text_poem_txt",
];

/// Two files that derive the same key
pub const COLLIDING_STD: &[(&str, &str)] = &[("a.b", "dot"), ("a_b", "underscore")];

/// A file containing the default raw-string terminator
pub const DELIMITER_TRAP: &str = "before )__DELIM__\" after\n";
