//! Property tests for version sanitization and module identifiers.

use proptest::prelude::*;

use libforge::domain::value_objects::{module_ident, sanitize_ident};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: sanitized versions only contain `[A-Za-z0-9_]`.
    #[test]
    fn property_sanitized_is_identifier_safe(raw in "(?s).{0,64}") {
        let out = sanitize_ident(&raw);
        prop_assert!(out.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }

    /// PROPERTY: sanitization maps each character to exactly one character.
    #[test]
    fn property_sanitize_preserves_char_count(raw in "(?s).{0,64}") {
        prop_assert_eq!(sanitize_ident(&raw).chars().count(), raw.chars().count());
    }

    /// PROPERTY: alphanumeric characters survive in place.
    #[test]
    fn property_sanitize_keeps_alphanumerics(raw in "[A-Za-z0-9.+-]{0,32}") {
        for (a, b) in raw.chars().zip(sanitize_ident(&raw).chars()) {
            if a.is_ascii_alphanumeric() {
                prop_assert_eq!(a, b);
            } else {
                prop_assert_eq!(b, '_');
            }
        }
    }

    /// PROPERTY: the module identifier is `<name>_<sanitized version>`.
    #[test]
    fn property_module_ident_shape(
        name in "[a-z][a-z0-9_]{0,15}",
        version in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}(-[a-z]+\\.[0-9])?"
    ) {
        let ident = module_ident(&name, &version);
        let prefix = format!("{}_", name);
        prop_assert!(ident.starts_with(&prefix));
        prop_assert_eq!(&ident[name.len() + 1..], sanitize_ident(&version));
    }
}

#[test]
fn test_sanitize_beta_version() {
    assert_eq!(sanitize_ident("1.0.0-beta.1"), "1_0_0_beta_1");
}
