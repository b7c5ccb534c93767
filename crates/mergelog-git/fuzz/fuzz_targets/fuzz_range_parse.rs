//! Fuzz target for range-expression classification

#![no_main]

use libfuzzer_sys::fuzz_target;

use mergelog_git::{Commit, RangeSpec};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Classification keeps the expression verbatim in both variants
        let spec = RangeSpec::parse(input);
        assert_eq!(spec.to_string(), input);

        // Validation is total over arbitrary candidate hashes
        let _ = Commit::is_valid_sha(input);
    }
});
