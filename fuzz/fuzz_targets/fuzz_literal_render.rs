#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use stdbake::{LiteralRenderer, LiteralStrategy};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Rendering either accepts the content or reports why; never panics
        for strategy in [LiteralStrategy::Raw, LiteralStrategy::Escaped] {
            let renderer = LiteralRenderer::new(strategy, "__DELIM__");
            if let Ok(literal) = renderer.render(content, Path::new("fuzz.txt"), "     ") {
                assert!(!literal.contains('\0'));
                if strategy == LiteralStrategy::Escaped {
                    assert!(!literal.contains("??"));
                }
            }
        }
    }
});
