//! Invalid selectors and unknown flags stop the run before any output.

use insta_cmd::assert_cmd_snapshot;
use rstest::rstest;

use crate::common::{TestDir, snapshot_settings, stderr, stdout};

#[test]
fn invalid_format() {
    let dir = TestDir::new();
    let mut cmd = dir.command();
    cmd.args(["-f", "cmyk"]);
    snapshot_settings().bind(|| {
        assert_cmd_snapshot!("invalid_format", cmd);
    });
}

#[test]
fn invalid_extension() {
    let dir = TestDir::new();
    let mut cmd = dir.command();
    cmd.args(["-e", "sass"]);
    snapshot_settings().bind(|| {
        assert_cmd_snapshot!("invalid_extension", cmd);
    });
}

#[test]
fn invalid_format_lists_accepted_values() {
    let dir = TestDir::new();
    let output = dir.run(&["-f", "cmyk"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Invalid format: cmyk"), "{err}");
    assert!(err.contains("hex, rgba, oklch"), "{err}");
    assert!(stdout(&output).is_empty());
    assert_eq!(dir.entry_count(), 0);
}

#[test]
fn invalid_extension_lists_accepted_values() {
    let dir = TestDir::new();
    let output = dir.run(&["-e", "sass"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Invalid extension: sass"), "{err}");
    assert!(err.contains("css, scss, less, stylus"), "{err}");
    assert!(err.contains("Did you mean 'scss'?"), "{err}");
    assert_eq!(dir.entry_count(), 0);
}

#[rstest]
#[case::print(&["-f", "cmyk", "--print"])]
#[case::json(&["-f", "cmyk", "--json-out", "colors.json"])]
#[case::silent(&["-f", "cmyk", "--silent"])]
fn invalid_selector_fails_in_every_mode(#[case] args: &[&str]) {
    let dir = TestDir::new();
    let output = dir.run(args);

    assert_eq!(output.status.code(), Some(1));
    // Errors are shown even with --silent
    assert!(stderr(&output).contains("Invalid format: cmyk"));
    assert!(stdout(&output).is_empty());
    assert_eq!(dir.entry_count(), 0);
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let dir = TestDir::new();
    let output = dir.run(&["--colour", "red"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--colour"));
    assert_eq!(dir.entry_count(), 0);
}
