//! Property tests for registry output scanning.

use proptest::prelude::*;

use libforge::application::scan_inspect_records;
use libforge::ForgeError;

fn version() -> impl Strategy<Value = String> {
    "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: scanning arbitrary bytes never panics.
    #[test]
    fn property_scan_never_panics(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let _ = scan_inspect_records(&data);
    }

    /// PROPERTY: the version list and latest tag come back unchanged,
    /// whatever non-inspect records precede the inspect record.
    #[test]
    fn property_scan_reads_inspect_record(
        versions in proptest::collection::vec(version(), 0..8),
        latest in version(),
        noise in proptest::collection::vec("[a-zA-Z]{1,10}", 0..4),
    ) {
        let mut output = String::new();
        for kind in &noise {
            output.push_str(&serde_json::json!({ "type": kind, "data": "x" }).to_string());
            output.push('\n');
        }
        let record = serde_json::json!({
            "type": "inspect",
            "data": { "dist-tags": { "latest": latest }, "versions": versions },
        });
        output.push_str(&record.to_string());

        let noise_has_inspect = noise.iter().any(|k| k == "inspect");
        prop_assume!(!noise_has_inspect);

        let set = scan_inspect_records(output.as_bytes()).unwrap();
        prop_assert_eq!(set.versions, versions);
        prop_assert_eq!(set.latest_tag, latest);
        prop_assert_eq!(set.beta_tag, "");
    }

    /// PROPERTY: output without an inspect record is NotFound.
    #[test]
    fn property_no_inspect_is_not_found(kinds in proptest::collection::vec("[a-hj-z]{1,10}", 0..6)) {
        let output: String = kinds
            .iter()
            .map(|k| format!("{}\n", serde_json::json!({ "type": k })))
            .collect();
        prop_assert!(matches!(
            scan_inspect_records(output.as_bytes()),
            Err(ForgeError::NotFound(_))
        ));
    }
}
