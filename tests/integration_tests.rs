//! Integration tests for trusty
//!
//! These tests verify:
//! - Decoding of complete and flagged report payloads
//! - Timestamp re-encoding through a full report
//! - Dependency snapshot diffing from files

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use trusty::domain::{compare_dependencies, diff_dependencies, to_mapping, Dependency, Ecosystem};
use trusty::report::{read_reply, Reply, Status, SUMMARY_KEY_PROVENANCE};

/// Path to a file under tests/fixtures
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

mod report_decoding {
    use super::*;

    #[test]
    fn test_decode_complete_report() {
        let reply = read_reply(&fixture("reply_complete.json")).unwrap();

        assert_eq!(reply.package_name, "requests");
        assert_eq!(reply.status, Status::Complete);
        assert_eq!(reply.score(), Some(8.4));
        assert_eq!(reply.summary.component(SUMMARY_KEY_PROVENANCE), Some(7.2));
        assert!(!reply.is_malicious());

        let provenance = reply.provenance.as_ref().expect("provenance block");
        assert_eq!(provenance.description.historical.overlap, 97.9);
        assert!(!provenance.has_sigstore());

        let typo = reply.typosquatting.as_ref().expect("typosquatting block");
        assert_eq!(typo.description.total_similar_names, 2);
        assert!(typo.updated_at.is_none());

        let data = &reply.package_data;
        assert_eq!(data.owner.login, "psf");
        assert_eq!(data.contributors.len(), 2);
        assert_eq!(data.contributors[1].company.as_deref(), Some("Example"));
        assert!(data.scores.is_empty());
        assert!(data.status_code.is_none());

        assert_eq!(reply.alternatives.packages.len(), 1);
        assert_eq!(
            reply.alternatives.packages[0].package_name_url,
            "https://www.trustypkg.dev/pypi/httpx"
        );
        assert_eq!(reply.similar_package_names.len(), 2);
        assert_eq!(reply.same_origin_packages_count, 1);
    }

    #[test]
    fn test_decode_malicious_report() {
        let reply = read_reply(&fixture("reply_malicious.json")).unwrap();

        assert!(reply.is_malicious());
        assert!(reply.provenance.is_none());
        assert!(reply.activity.is_none());
        assert!(reply.typosquatting.is_some());
        assert!(reply.similar_package_names.is_empty());
        assert_eq!(reply.package_data.owner.login, "");

        let malicious = reply.package_data.malicious.as_ref().unwrap();
        assert_eq!(malicious.source, "ossf-package-analysis");
        assert!(malicious.published.unwrap() < malicious.modified.unwrap());
    }

    #[test]
    fn test_reencode_normalizes_timestamps() {
        let reply = read_reply(&fixture("reply_malicious.json")).unwrap();
        let value = serde_json::to_value(&reply).unwrap();

        assert_eq!(
            value["package_data"]["malicious"]["published"],
            "2024-01-16T23:40:53.000000"
        );
        assert_eq!(
            value["package_data"]["malicious"]["modified"],
            "2024-01-18T03:34:20.000000"
        );
        assert_eq!(value["summary"]["updated_at"], "2024-01-19T00:00:00.000000");
        assert!(value["provenance"].is_null());
    }

    #[test]
    fn test_reencoded_report_decodes_identically() {
        let reply = read_reply(&fixture("reply_complete.json")).unwrap();
        let encoded = serde_json::to_string(&reply).unwrap();
        let decoded = Reply::from_json(&encoded).unwrap();
        assert_eq!(decoded, reply);
    }

    #[test]
    fn test_bad_timestamp_rejects_report() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("reply.json");
        let payload = fs::read_to_string(fixture("reply_complete.json"))
            .unwrap()
            .replace("2023-05-22T15:12:44.000000", "22/05/2023");
        fs::write(&path, payload).unwrap();

        let err = read_reply(&path).unwrap_err();
        assert!(err.to_string().contains("22/05/2023"));
    }
}

mod dependency_diffing {
    use super::*;

    fn write_snapshot(dir: &TempDir, name: &str, deps: &[Dependency]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, serde_json::to_string(deps).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_additions_from_snapshot_files() {
        let temp_dir = create_test_dir();
        let old = write_snapshot(
            &temp_dir,
            "old.json",
            &[Dependency::npm("express", "4.18.2"), Dependency::npm("lodash", "4.17.20")],
        );
        let new = write_snapshot(
            &temp_dir,
            "new.json",
            &[
                Dependency::npm("express", "4.18.2"),
                Dependency::npm("lodash", "4.17.21"),
                Dependency::npm("left-pad", "1.3.0"),
            ],
        );

        let old_map = trusty::snapshot::read_mapping(&old).unwrap();
        let new_map = trusty::snapshot::read_mapping(&new).unwrap();
        let added = diff_dependencies(&old_map, &new_map);

        assert_eq!(added.len(), 1);
        assert_eq!(added["left-pad"], "1.3.0");
    }

    #[test]
    fn test_additions_and_full_changes_disagree_on_bumps() {
        let old = to_mapping(&[Dependency::crates("serde", "1.0.200")]);
        let new = to_mapping(&[Dependency::crates("serde", "2.0.0")]);

        assert!(diff_dependencies(&old, &new).is_empty());

        let changes = compare_dependencies(&old, &new);
        assert_eq!(changes.changed.len(), 1);
        assert_eq!(changes.changed[0].change.label(), "major");
    }

    #[test]
    fn test_mixed_ecosystems_collapse_by_name() {
        let deps = vec![
            Dependency::new("yaml", "2.3.4", Ecosystem::Npm),
            Dependency::new("yaml", "0.2.5", Ecosystem::Crates),
        ];
        let mapping = to_mapping(&deps);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping["yaml"], "0.2.5");
    }
}
