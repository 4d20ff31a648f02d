//! Export pipeline and output fan-out.
//!
//! [`run`] flattens and projects the palette, then [`export`] sends the result
//! to exactly one kind of sink:
//!
//! - JSON mode: one document keyed by format, on stdout or in a file
//! - print mode: one labeled block per (format, dialect) unit on stdout
//! - file mode: one stylesheet per unit under the output directory
//!
//! Units are visited formats-outer, dialects-inner, both in declaration order.
//! Existing files at a target path are replaced. A failed write aborts the run
//! and leaves files written so far in place.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use color_print::cformat;
use indexmap::IndexMap;

use crate::convert::{Converter, ProjectedPalette};
use crate::options::{ColorFormat, Dialect, Options, OutputMode};
use crate::output::OutputHandler;
use crate::palette::{EXCLUDED_FAMILIES, Palette};

/// Warning shown when `--flat` is combined with a wildcard selector.
pub const FLAT_OVERWRITE_WARNING: &str =
    "Warning: Using --flat with multiple formats or extensions may result in file overwrites.";

/// Names listed in the note about entries left out of stylesheets.
const LEFT_OUT_SHOWN: usize = 5;

/// One (format, dialect) combination scheduled for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanOutUnit {
    pub format: ColorFormat,
    pub dialect: Dialect,
}

impl FanOutUnit {
    /// `colors-{format}.{extension}`
    pub fn file_name(self) -> String {
        format!("colors-{}.{}", self.format, self.dialect.extension())
    }

    /// `{out_dir}/{dialect}/colors-{format}.{ext}`, or without the dialect
    /// folder when `flat`.
    pub fn target_path(self, out_dir: &Path, flat: bool) -> PathBuf {
        let dir = if flat {
            out_dir.to_path_buf()
        } else {
            out_dir.join(self.dialect.as_str())
        };
        dir.join(self.file_name())
    }

    /// Header printed above the unit in print mode.
    pub fn label(self) -> String {
        format!(
            "=== {} ({}) ===",
            self.dialect.as_str().to_uppercase(),
            self.format.as_str().to_uppercase()
        )
    }
}

/// Every unit selected by `options`, in fan-out order.
pub fn fan_out_units(options: &Options) -> Vec<FanOutUnit> {
    let dialects = options.dialects.expand();
    options
        .formats
        .expand()
        .into_iter()
        .flat_map(|format| {
            dialects
                .iter()
                .map(move |&dialect| FanOutUnit { format, dialect })
        })
        .collect()
}

/// Pretty-printed JSON keyed by format. Invalid entries keep the marker.
pub fn json_document(
    palette: &ProjectedPalette,
    formats: &[ColorFormat],
) -> serde_json::Result<String> {
    let document: IndexMap<&str, IndexMap<&str, &str>> = formats
        .iter()
        .map(|&format| (format.as_str(), palette.with_markers(format)))
        .collect();
    serde_json::to_string_pretty(&document)
}

/// Flatten, project and export `palette` according to `options`.
pub fn run(
    options: &Options,
    palette: &Palette,
    converter: &dyn Converter,
    stdout: &mut dyn Write,
    status: &mut dyn OutputHandler,
) -> anyhow::Result<()> {
    log::debug!(
        "Exporting formats={} extensions={} mode={:?}",
        options.formats,
        options.dialects,
        options.mode
    );
    if options.flat_overwrite_risk() {
        status.warning(FLAT_OVERWRITE_WARNING.to_string())?;
    }

    let entries = palette.flatten(EXCLUDED_FAMILIES);
    let projected = ProjectedPalette::project(&entries, converter);
    log::debug!(
        "Projected {} palette entries ({} invalid)",
        projected.len(),
        projected.invalid_count()
    );

    export(options, &projected, stdout, status)
}

/// Send an already projected palette to the sink selected by `options`.
pub fn export(
    options: &Options,
    palette: &ProjectedPalette,
    stdout: &mut dyn Write,
    status: &mut dyn OutputHandler,
) -> anyhow::Result<()> {
    match &options.mode {
        OutputMode::Json { path } => {
            let json = json_document(palette, &options.formats.expand())
                .context("Failed to serialize colors as JSON")?;
            match path {
                Some(path) => {
                    create_parent_dir(path)?;
                    fs::write(path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    status.success(cformat!("JSON written to <bold>{}</>", path.display()))?;
                }
                None => writeln!(stdout, "{json}")?,
            }
        }
        OutputMode::Print => {
            for unit in fan_out_units(options) {
                log::debug!("Printing {}", unit.label());
                let content = unit.dialect.render(palette, unit.format);
                writeln!(stdout, "\n{}", unit.label())?;
                writeln!(stdout, "{content}")?;
            }
            stdout.flush()?;
        }
        OutputMode::Files => {
            let units = fan_out_units(options);
            for &unit in &units {
                let path = unit.target_path(&options.out_dir, options.flat);
                let content = unit.dialect.render(palette, unit.format);
                create_parent_dir(&path)?;
                fs::write(&path, content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                log::debug!("Wrote {}", path.display());
                status.success(cformat!("Generated <bold>{}</>", path.display()))?;
            }

            let left_out: Vec<&str> = palette.invalid_names().collect();
            if !left_out.is_empty() {
                status.info(left_out_note(&left_out))?;
            }
            status.success(format!(
                "Done. Exported {} stylesheet {}",
                units.len(),
                if units.len() == 1 { "file" } else { "files" }
            ))?;
        }
    }
    Ok(())
}

/// Keyword entries (`inherit`, `currentColor`) have no stylesheet value.
fn left_out_note(names: &[&str]) -> String {
    let noun = if names.len() == 1 { "entry" } else { "entries" };
    let mut listed = names[..names.len().min(LEFT_OUT_SHOWN)].join(", ");
    if names.len() > LEFT_OUT_SHOWN {
        listed.push_str(&format!(", and {} more", names.len() - LEFT_OUT_SHOWN));
    }
    format!(
        "Left out {} palette {noun} without a fixed color: {listed}",
        names.len()
    )
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}
