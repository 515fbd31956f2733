#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Decoding and validating a request must never panic
        if let Ok(request) = libforge::BuildRequest::from_json(content) {
            let _ = request.validate();
            let _ = request.file_name();
            let _ = request.target_dir(&request.version);
        }
    }
});
