#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary registry output: either a version set or an error, no panic
    let _ = libforge::application::scan_inspect_records(data);
});
