//! Scenario: CI verifies the committed header
//!
//! Journey: the header is committed alongside the library. CI runs
//! `stdbake check` on every push; a library edit without a regenerated header
//! fails the pipeline with a diff showing what changed.

use crate::common::*;

#[test]
fn scenario_ci_catches_forgotten_regeneration() {
    let env = TestEnv::with_std(SMALL_STD);
    env.write(
        "stdbake.toml",
        "[literal]\nstrategy = \"escaped\"\n\n[header]\nguard = \"macro\"\n",
    );

    // Committed state passes
    assert!(env.run(&["generate"]).success);
    let result = env.run(&["check"]);
    assert!(result.success, "stdout:\n{}", result.stdout);

    // Library edited, header not regenerated
    env.write("src/std/core/io.earl", "fn print(s) {\n    write(2, s)\n}\n");
    let result = env.run(&["check"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("-     \"    write(1, s)\\n\""), "{}", result.stdout);
    assert!(result.stdout.contains("+     \"    write(2, s)\\n\""), "{}", result.stdout);

    // Developer regenerates; CI passes again
    assert!(env.run(&["generate"]).success);
    assert!(env.run(&["check"]).success);
}

#[test]
fn scenario_ci_github_annotation() {
    let env = TestEnv::with_std(COLLIDING_STD);

    let result = env.run_with_env(&["check"], &[("GITHUB_ACTIONS", "true")]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stdout.starts_with("::error file="),
        "stdout:\n{}",
        result.stdout
    );
    assert!(result.stdout.contains("title=stdbake::duplicate key"));
}
