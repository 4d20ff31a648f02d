use std::path::PathBuf;

use clap::Parser;
use tailwind_colors::RawOptions;

const AFTER_HELP: &str =
    "Files go to <DIR>/<ext>/colors-<format>.<ext>, or <DIR>/colors-<format>.<ext> with --flat.";

/// Tailwind Colors Exporter
///
/// Writes the Tailwind palette as CSS, SCSS, Less or Stylus variables in HEX, RGBA or OKLCH.
#[derive(Parser, Debug)]
#[command(name = "tailwind-colors", version, after_help = AFTER_HELP)]
// A repeated flag replaces the earlier value instead of failing the run
#[command(args_override_self = true)]
pub struct Cli {
    /// Color format to export: hex, rgba, oklch, all
    #[arg(short = 'f', long, value_name = "TYPE", default_value = "all")]
    pub format: String,

    /// Output style: css, scss, less, stylus, all
    #[arg(short = 'e', long, value_name = "TYPE", default_value = "all")]
    pub ext: String,

    /// Output directory
    #[arg(short = 'o', long, value_name = "DIR", default_value = "dist")]
    pub out: PathBuf,

    /// Print to console instead of writing files
    #[arg(long)]
    pub print: bool,

    /// Output as a JSON dump of the selected formats
    #[arg(long)]
    pub json: bool,

    /// Write JSON output to a specific file (e.g., colors.json)
    #[arg(long = "json-out", value_name = "FILE")]
    pub json_out: Option<PathBuf>,

    /// Output to single-level folder instead of per target
    #[arg(long)]
    pub flat: bool,

    /// Disable all logs and console outputs (errors are still shown)
    #[arg(long)]
    pub silent: bool,

    /// Palette file (.json or .toml) to use instead of the built-in one
    #[arg(short = 'p', long, value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_raw_options(self) -> RawOptions {
        RawOptions {
            format: self.format,
            ext: self.ext,
            out: self.out,
            print: self.print,
            json: self.json,
            json_out: self.json_out,
            flat: self.flat,
            silent: self.silent,
            palette: self.palette,
        }
    }
}
