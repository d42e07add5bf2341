//! Scenario: stdbake as a pre-compile build step
//!
//! Journey: a language project keeps its standard library under `src/std`
//! and regenerates `src/include/bake.hpp` before every compile.
//!
//! Success Criteria:
//! - Every file is embedded under its derived key with exact content
//! - Rebuilding an unchanged tree does not touch the header
//! - Adding, editing and removing files is reflected on the next run

use std::time::Duration;

use crate::common::*;

#[test]
fn scenario_build_step_tracks_library_changes() {
    let env = TestEnv::with_std(SMALL_STD);

    // Step 1: first build embeds everything
    let result = env.run(&[]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let entries = decode_header(&env.header()).unwrap();
    let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, SMALL_STD_KEYS);
    for (relative, content) in SMALL_STD {
        let key = format!("std_{}", relative.replace(['/', '.'], "_"));
        let found = entries.iter().find(|(k, _)| *k == key).unwrap();
        assert_eq!(found.1, *content, "content of {relative}");
    }

    // Step 2: unchanged rebuild keeps the file (and its mtime) as is
    let header_path = env.path("src/include/bake.hpp");
    let before = std::fs::metadata(&header_path).unwrap().modified().unwrap();
    std::thread::sleep(Duration::from_millis(20));
    assert!(env.run(&[]).success);
    let after = std::fs::metadata(&header_path).unwrap().modified().unwrap();
    assert_eq!(before, after);

    // Step 3: add, edit and remove files
    env.write("src/std/core/map.earl", "fn map(f, xs) {}\n");
    env.write("src/std/prelude.earl", "import core.io\nimport core.map\n");
    std::fs::remove_file(env.path("src/std/text/poem.txt")).unwrap();
    assert!(env.run(&[]).success);

    let entries = decode_header(&env.header()).unwrap();
    let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "std_core_io_earl",
            "std_core_list_earl",
            "std_core_map_earl",
            "std_prelude_earl",
            "std_text_empty_txt",
        ]
    );
    assert_eq!(entries[3].1, "import core.io\nimport core.map\n");
    assert!(env.header().contains("// Embedded files: 5\n"));
}

#[test]
fn scenario_output_inside_input_tree_is_not_special() {
    // A header written next to the library is picked up by the next walk
    let env = TestEnv::with_std(&[("a.earl", "a\n")]);

    assert!(env.run(&["--output", "src/std/gen.hpp"]).success);
    let result = env.run(&["--output", "src/std/gen.hpp", "--exclude", "*.hpp"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let entries = decode_header(&env.read("src/std/gen.hpp")).unwrap();
    assert_eq!(entries.len(), 1);
}

#[test]
fn scenario_hidden_and_gitignored_files_are_embedded() {
    let env = TestEnv::with_std(&[
        (".gitignore", "*.earl\n"),
        ("core.earl", "core\n"),
    ]);

    let result = env.run(&["list", "--names", "sanitize"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("std__gitignore"), "{}", result.stdout);
    assert!(result.stdout.contains("std_core_earl"), "{}", result.stdout);
}

#[test]
fn scenario_unicode_content_round_trips() {
    let content = "naïve café ☕\n日本語\n";
    let env = TestEnv::with_std(&[("intl.txt", content)]);

    for strategy in ["raw", "escaped"] {
        let result = env.run(&["--strategy", strategy]);
        assert!(result.success, "stderr:\n{}", result.stderr);
        assert_eq!(decode_header(&env.header()).unwrap()[0].1, content);
    }
}
