//! Full-pipeline integration tests

use salesviz::{pipeline, report};
use tempfile::TempDir;

const OUTPUT_FILES: [&str; 5] = [
    report::SALES_OVER_TIME_PNG,
    report::MONTHLY_SALES_PNG,
    report::CATEGORY_COMPARISON_PNG,
    report::CATEGORY_SHARE_PNG,
    report::SUMMARY_FILE,
];

#[test]
fn test_run_produces_all_outputs() {
    let temp_dir = TempDir::new().expect("temp dir");

    pipeline::run(temp_dir.path()).expect("pipeline run");

    for file in OUTPUT_FILES {
        let path = temp_dir.path().join(file);
        assert!(path.exists(), "missing output file: {}", file);
        let size = std::fs::metadata(&path).expect("metadata").len();
        assert!(size > 0, "empty output file: {}", file);
    }

    // The charts are real PNGs, not placeholder files.
    for png in &OUTPUT_FILES[..4] {
        let size = std::fs::metadata(temp_dir.path().join(png))
            .expect("metadata")
            .len();
        assert!(size > 1_000, "{} is suspiciously small", png);
    }
}

#[test]
fn test_summary_content_is_fixed_template() {
    let temp_dir = TempDir::new().expect("temp dir");

    pipeline::run(temp_dir.path()).expect("pipeline run");

    let summary = std::fs::read_to_string(temp_dir.path().join(report::SUMMARY_FILE))
        .expect("read summary");
    assert_eq!(summary, report::SUMMARY_TEXT);
}

#[test]
fn test_reruns_are_reproducible() {
    let first_dir = TempDir::new().expect("temp dir");
    let second_dir = TempDir::new().expect("temp dir");

    pipeline::run(first_dir.path()).expect("first run");
    pipeline::run(second_dir.path()).expect("second run");

    // Report content must be byte-identical across runs. Chart pixel
    // identity is backend-dependent and deliberately not asserted.
    let first = std::fs::read(first_dir.path().join(report::SUMMARY_FILE)).expect("read");
    let second = std::fs::read(second_dir.path().join(report::SUMMARY_FILE)).expect("read");
    assert_eq!(first, second);
}

#[test]
fn test_run_overwrites_previous_outputs() {
    let temp_dir = TempDir::new().expect("temp dir");
    for file in OUTPUT_FILES {
        std::fs::write(temp_dir.path().join(file), b"stale").expect("seed file");
    }

    pipeline::run(temp_dir.path()).expect("pipeline run");

    for file in OUTPUT_FILES {
        let size = std::fs::metadata(temp_dir.path().join(file))
            .expect("metadata")
            .len();
        assert_ne!(size, 5, "{} was not overwritten", file);
    }
}

#[test]
fn test_run_fails_on_missing_directory() {
    let temp_dir = TempDir::new().expect("temp dir");
    let missing = temp_dir.path().join("does-not-exist");

    assert!(pipeline::run(&missing).is_err());
}
