//! Scenario: a broken library never corrupts the committed header
//!
//! Journey: a developer introduces a file that cannot be embedded. The build
//! fails loudly, and the header from the last good build stays in place
//! byte for byte until the problem is fixed.

use crate::common::*;

fn assert_failure_keeps_header(env: &TestEnv, args: &[&str], expected_error: &str) {
    let good = env.header();

    let result = env.run(args);

    assert_eq!(result.exit_code, 1, "stdout:\n{}", result.stdout);
    assert!(
        result.stderr.contains(expected_error),
        "expected {:?} in stderr:\n{}",
        expected_error,
        result.stderr
    );
    assert_eq!(env.header(), good);
    assert_eq!(
        list_all_files(&env.path("src/include")),
        vec!["bake.hpp"],
        "no temporary files may be left behind"
    );
}

#[test]
fn scenario_duplicate_key_keeps_previous_header() {
    let env = TestEnv::with_std(&[("a.b", "dot\n")]);
    assert!(env.run(&[]).success);

    env.write("src/std/a_b", "underscore\n");
    assert_failure_keeps_header(&env, &[], "duplicate key 'std_a_b'");
}

#[test]
fn scenario_delimiter_collision_keeps_previous_header() {
    let env = TestEnv::with_std(SMALL_STD);
    assert!(env.run(&[]).success);

    env.write("src/std/zz_trap.earl", DELIMITER_TRAP);
    assert_failure_keeps_header(&env, &[], "raw string terminator");
}

#[test]
fn scenario_binary_file_keeps_previous_header() {
    let env = TestEnv::with_std(SMALL_STD);
    assert!(env.run(&[]).success);

    std::fs::write(env.path("src/std/logo.png"), [0x89, b'P', b'N', b'G', 0xff]).unwrap();
    assert_failure_keeps_header(&env, &[], "failed to read asset");
}

#[test]
fn scenario_nul_byte_keeps_previous_header() {
    let env = TestEnv::with_std(SMALL_STD);
    assert!(env.run(&["--strategy", "escaped"]).success);

    env.write("src/std/nul.txt", "a\0b");
    assert_failure_keeps_header(&env, &["--strategy", "escaped"], "NUL");
}

#[test]
fn scenario_carriage_return_needs_escaped_strategy() {
    let env = TestEnv::with_std(SMALL_STD);
    assert!(env.run(&[]).success);

    env.write("src/std/windows.txt", "line\r\n");
    assert_failure_keeps_header(&env, &[], "carriage return");

    let result = env.run(&["--strategy", "escaped"]);
    assert!(result.success, "stderr:\n{}", result.stderr);
}

#[test]
fn scenario_deleted_root_keeps_previous_header() {
    let env = TestEnv::with_std(SMALL_STD);
    assert!(env.run(&[]).success);

    std::fs::remove_dir_all(env.path("src/std")).unwrap();
    assert_failure_keeps_header(&env, &[], "input directory not found");
}

#[cfg(unix)]
#[test]
fn scenario_unwritable_output_directory_fails_cleanly() {
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnv::with_std(SMALL_STD);
    assert!(env.run(&[]).success);
    let good = env.header();

    env.write("src/std/new.earl", "new\n");
    let include = env.path("src/include");
    std::fs::set_permissions(&include, std::fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users write through permission bits.
    if tempfile::NamedTempFile::new_in(&include).is_ok() {
        std::fs::set_permissions(&include, std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = env.run(&[]);
    std::fs::set_permissions(&include, std::fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("failed to write"), "{}", result.stderr);
    assert_eq!(env.header(), good);
}

#[cfg(unix)]
#[test]
fn scenario_unreadable_asset_keeps_previous_header() {
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnv::with_std(SMALL_STD);
    assert!(env.run(&[]).success);

    env.write("src/std/core/io.earl", "fn print(s) {\n    write(2, s)\n}\n");
    let asset = env.path("src/std/core/io.earl");
    std::fs::set_permissions(&asset, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users read through permission bits.
    if std::fs::read(&asset).is_ok() {
        std::fs::set_permissions(&asset, std::fs::Permissions::from_mode(0o644)).unwrap();
        return;
    }

    let good = env.header();
    let result = env.run(&[]);
    std::fs::set_permissions(&asset, std::fs::Permissions::from_mode(0o644)).unwrap();

    assert_eq!(result.exit_code, 1, "stdout:\n{}", result.stdout);
    assert!(
        result.stderr.contains("failed to read asset")
            && result.stderr.contains("core/io.earl"),
        "stderr:\n{}",
        result.stderr
    );
    assert_eq!(env.header(), good);
    assert_eq!(list_all_files(&env.path("src/include")), vec!["bake.hpp"]);
}
