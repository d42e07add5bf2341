#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and validating any TOML must never panic
        if let Ok(config) = toml::from_str::<stdbake::Config>(content) {
            let _ = config.validate(std::path::Path::new("fuzz.toml"));
        }
    }
});
