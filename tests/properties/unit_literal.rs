//! Property tests for the embedded byte-string literal.

use proptest::prelude::*;

use libforge::domain::services::escape_byte_string;

/// Decode the escapes `std::ascii::escape_default` produces
fn unescape(body: &str) -> Vec<u8> {
    let bytes = body.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }
        match bytes[i + 1] {
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'x' => {
                let hex = std::str::from_utf8(&bytes[i + 2..i + 4]).unwrap();
                out.push(u8::from_str_radix(hex, 16).unwrap());
                i += 2;
            }
            other => out.push(other),
        }
        i += 2;
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the escaped literal body is printable ASCII without bare quotes.
    #[test]
    fn property_escaped_body_is_printable(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let body = escape_byte_string(&data);
        prop_assert!(body.bytes().all(|b| (0x20..0x7f).contains(&b)));

        let mut escaped = false;
        for b in body.bytes() {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else {
                prop_assert_ne!(b, b'"');
            }
        }
    }

    /// PROPERTY: unescaping the body gives back the original bytes.
    #[test]
    fn property_escaped_body_decodes_to_input(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(unescape(&escape_byte_string(&data)), data);
    }
}
