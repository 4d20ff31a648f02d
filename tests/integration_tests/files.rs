//! File mode: one stylesheet per (format, dialect) pair on disk.

use std::fs;

use insta_cmd::assert_cmd_snapshot;
use rstest::rstest;

use crate::common::{BRAND_PALETTE, TestDir, assert_success, snapshot_settings, stderr, stdout};

#[rstest]
fn writes_one_file_per_pair(
    #[values("hex", "rgba", "oklch")] format: &str,
    #[values("css", "scss", "less", "stylus")] ext: &str,
) {
    let dir = TestDir::new();
    let output = dir.run(&["-f", format, "-e", ext, "-o", "out"]);
    assert_success(&output);

    let file_ext = if ext == "stylus" { "styl" } else { ext };
    let relative = format!("out/{ext}/colors-{format}.{file_ext}");
    let content = dir.read(&relative);
    assert!(!content.is_empty(), "{relative} is empty");
    assert!(!content.ends_with('\n'));
    assert!(!content.contains("invalid"));

    // Nothing else is generated
    assert_eq!(fs::read_dir(dir.join("out")).unwrap().count(), 1);
    assert!(stdout(&output).is_empty());
}

#[test]
fn default_run_writes_every_pair_under_dist() {
    let dir = TestDir::new();
    let output = dir.run(&[]);
    assert_success(&output);

    for ext in ["css", "scss", "less", "stylus"] {
        let files = fs::read_dir(dir.join("dist").join(ext)).unwrap().count();
        assert_eq!(files, 3, "expected three files under dist/{ext}");
    }
    let err = stderr(&output);
    assert!(err.contains("Generated dist/css/colors-hex.css"), "{err}");
    assert!(err.contains("Done. Exported 12 stylesheet files"), "{err}");
    assert!(!err.contains("Warning"));
}

#[test]
fn flat_css_hex_contents() {
    let dir = TestDir::new();
    let output = dir.run(&["-f", "hex", "-e", "css", "-o", "out", "--flat"]);
    assert_success(&output);

    let css = dir.read("out/colors-hex.css");
    assert!(
        css.starts_with(":root {\n  --black: #000;\n  --white: #fff;\n  --slate-50: #f8fafc;\n"),
        "{css}"
    );
    assert!(css.contains("\n  --red-500: #ef4444;\n"));
    assert!(css.ends_with(";\n}"));
    // Deprecated aliases are excluded
    assert!(!css.contains("lightBlue"));
    assert!(!css.contains("coolGray"));
    // Keywords have no hex form
    assert!(!css.contains("inherit"));
    // No per-extension subfolder in flat mode
    assert!(!dir.join("out/css").exists());
}

#[test]
fn scss_rgba_contents() {
    let dir = TestDir::new();
    assert_success(&dir.run(&["-f", "rgba", "-e", "scss", "-o", "out"]));

    let scss = dir.read("out/scss/colors-rgba.scss");
    assert!(scss.starts_with("$black: rgba(0, 0, 0, 1);\n"), "{scss}");
    assert!(scss.contains("\n$red-500: rgba(239, 68, 68, 1);\n"));
}

#[test]
fn stylus_oklch_contents() {
    let dir = TestDir::new();
    assert_success(&dir.run(&["-f", "oklch", "-e", "stylus", "-o", "out"]));

    let styl = dir.read("out/stylus/colors-oklch.styl");
    assert!(
        styl.contains("\nwhite = oklch(1.0000 0.0000 0.00);\n"),
        "{styl}"
    );
    assert!(styl.lines().all(|line| line.ends_with(");")));
}

#[test]
fn flat_with_wildcard_warns_first() {
    let dir = TestDir::new();
    let output = dir.run(&["--flat", "-o", "out"]);
    assert_success(&output);

    let err = stderr(&output);
    let first = err.lines().next().unwrap_or_default();
    assert!(first.contains("Warning"), "{err}");
    assert!(first.contains("--flat"), "{err}");
    assert_eq!(fs::read_dir(dir.join("out")).unwrap().count(), 12);
}

#[test]
fn flat_warning_status() {
    let dir = TestDir::new();
    dir.write("brand.toml", BRAND_PALETTE);
    let mut cmd = dir.command();
    cmd.args(["-p", "brand.toml", "--flat", "-o", "out"]);
    snapshot_settings().bind(|| {
        assert_cmd_snapshot!("flat_warning_status", cmd);
    });
    // Keywords never reach a stylesheet
    assert!(!dir.read("out/colors-hex.css").contains("current"));
}

#[test]
fn flat_with_single_pair_does_not_warn() {
    let dir = TestDir::new();
    let output = dir.run(&["--flat", "-f", "hex", "-e", "less", "-o", "out"]);
    assert_success(&output);
    assert!(!stderr(&output).contains("Warning"));
}

#[test]
fn silent_suppresses_status() {
    let dir = TestDir::new();
    let output = dir.run(&["--silent", "--flat", "-o", "out"]);
    assert_success(&output);

    assert!(stderr(&output).is_empty(), "{}", stderr(&output));
    assert!(stdout(&output).is_empty());
    assert!(dir.join("out/colors-hex.css").exists());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = TestDir::new();
    let args = ["-f", "oklch", "-e", "less", "-o", "out"];

    assert_success(&dir.run(&args));
    let first = dir.read("out/less/colors-oklch.less");
    assert_success(&dir.run(&args));
    let second = dir.read("out/less/colors-oklch.less");

    assert_eq!(first, second);
}

#[test]
fn nested_output_directory_is_created() {
    let dir = TestDir::new();
    assert_success(&dir.run(&["-f", "hex", "-e", "css", "-o", "build/theme/colors"]));
    assert!(dir.join("build/theme/colors/css/colors-hex.css").is_file());
}
