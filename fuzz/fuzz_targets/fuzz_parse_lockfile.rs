#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the lock manifest parser and the reduction that follows it.
///
/// Arbitrary bytes go through `parse_bytes`, so non-UTF-8 input exercises
/// the rejection path as well.
fuzz_target!(|data: &[u8]| {
    use podlock_tools::parsers::{LockfileParser, PodfileLockParser};

    if let Ok(manifest) = PodfileLockParser::new().parse_bytes(data) {
        let _ = manifest.reduced_entries();
    }
});
