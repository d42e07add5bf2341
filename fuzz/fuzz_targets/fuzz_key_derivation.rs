#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use stdbake::key::is_identifier;
use stdbake::{KeyDeriver, NamePolicy};

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        for policy in [NamePolicy::Reject, NamePolicy::Sanitize] {
            if let Ok(key) = KeyDeriver::new("std_", "_", policy).derive(Path::new(path)) {
                assert!(is_identifier(&key), "{:?} -> {:?}", path, key);
            }
        }
    }
});
