//! Property tests for key derivation.

use std::collections::HashSet;
use std::path::Path;

use proptest::prelude::*;

use stdbake::key::{is_identifier, KeyDeriver, KeySet};
use stdbake::NamePolicy;

fn identifier_segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9]{0,7}").unwrap()
}

/// Paths whose segments contain neither the joiner nor a dot
fn plain_relative_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(identifier_segment(), 1..=4).prop_map(|s| s.join("/"))
}

fn policy() -> impl Strategy<Value = NamePolicy> {
    prop_oneof![Just(NamePolicy::Reject), Just(NamePolicy::Sanitize)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Key derivation never panics on arbitrary input.
    #[test]
    fn property_derive_never_panics(
        s in "(?s).{0,128}",
        policy in policy(),
    ) {
        let _ = KeyDeriver::new("std_", "_", policy).derive(Path::new(&s));
        let _ = KeyDeriver::new("", "_", policy).derive(Path::new(&s));
    }

    /// PROPERTY: Every key that derivation accepts is a valid C++ identifier.
    #[test]
    fn property_accepted_keys_are_identifiers(
        s in "[A-Za-z0-9 ._/-]{1,64}",
        policy in policy(),
        prefix in prop_oneof![Just(""), Just("std_"), Just("lib")],
    ) {
        if let Ok(key) = KeyDeriver::new(prefix, "_", policy).derive(Path::new(&s)) {
            prop_assert!(is_identifier(&key), "{:?} -> {:?}", s, key);
        }
    }

    /// PROPERTY: Sanitize accepts every non-empty UTF-8 relative path.
    #[test]
    fn property_sanitize_is_total_for_plain_names(
        segments in proptest::collection::vec("[^/\\x00]{1,12}", 1..=3),
    ) {
        prop_assume!(segments.iter().all(|s| s != "." && s != ".."));
        let path = segments.join("/");

        let key = KeyDeriver::new("std_", "_", NamePolicy::Sanitize)
            .derive(Path::new(&path));

        prop_assert!(key.is_ok(), "{:?} -> {:?}", path, key);
    }

    /// PROPERTY: Derivation is deterministic and, for paths without dots or
    /// joiners, distinct paths get distinct keys.
    #[test]
    fn property_distinct_plain_paths_get_distinct_keys(
        paths in proptest::collection::hash_set(plain_relative_path(), 1..16),
    ) {
        let deriver = KeyDeriver::default();
        let mut keys = KeySet::new();
        let mut seen = HashSet::new();

        for path in &paths {
            let key = deriver.derive(Path::new(path)).unwrap();
            prop_assert_eq!(&key, &deriver.derive(Path::new(path)).unwrap());
            prop_assert!(keys.insert(&key, Path::new(path)).is_ok());
            seen.insert(key);
        }

        prop_assert_eq!(seen.len(), paths.len());
    }

    /// PROPERTY: Replacing a dot with the joiner always collides.
    #[test]
    fn property_dot_and_joiner_collide(
        stem in identifier_segment(),
        ext in identifier_segment(),
    ) {
        let deriver = KeyDeriver::default();
        let dotted = format!("{}.{}", stem, ext);
        let joined = format!("{}_{}", stem, ext);

        let mut keys = KeySet::new();
        keys.insert(&deriver.derive(Path::new(&dotted)).unwrap(), Path::new(&dotted)).unwrap();
        let second = keys.insert(&deriver.derive(Path::new(&joined)).unwrap(), Path::new(&joined));

        prop_assert!(second.is_err());
    }
}
