//! Resolved export options.
//!
//! The CLI hands over loosely typed values ([`RawOptions`]); [`Options::resolve`]
//! validates the selectors and folds the mode flags into a single
//! [`OutputMode`]. Once resolved, options are never mutated.

use std::fmt;
use std::path::PathBuf;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Keyword accepted by every selector to mean "the whole set".
pub const ALL: &str = "all";

/// Color notation written for each palette entry.
///
/// Declaration order is the fan-out order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgba,
    Oklch,
}

impl ColorFormat {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Stylesheet variable syntax.
///
/// Declaration order is the fan-out order. `styl` parses as [`Dialect::Stylus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Dialect {
    Css,
    Scss,
    Less,
    #[strum(to_string = "stylus", serialize = "styl")]
    Stylus,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Either one member of an enumerated set or the whole set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Selection<T>
where
    T: IntoEnumIterator + std::str::FromStr + Copy,
{
    /// Parse a selector value. Returns `None` for values outside the set.
    fn parse(value: &str) -> Option<Self> {
        if value == ALL {
            return Some(Self::All);
        }
        value.parse().ok().map(Self::Only)
    }

    /// The selected members, in declaration order.
    pub fn expand(self) -> Vec<T> {
        match self {
            Self::All => T::iter().collect(),
            Self::Only(one) => vec![one],
        }
    }

    pub fn is_all(self) -> bool {
        matches!(self, Self::All)
    }
}

/// Where the run sends its output.
///
/// JSON takes precedence over console printing, which takes precedence over
/// writing files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// One stylesheet file per (format, dialect) unit
    Files,
    /// Labeled stylesheet blocks on stdout, no filesystem access
    Print,
    /// A single JSON document, on stdout or written to `path`
    Json { path: Option<PathBuf> },
}

/// Unvalidated option values as they come off the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOptions {
    pub format: String,
    pub ext: String,
    pub out: PathBuf,
    pub print: bool,
    pub json: bool,
    pub json_out: Option<PathBuf>,
    pub flat: bool,
    pub silent: bool,
    pub palette: Option<PathBuf>,
}

impl Default for RawOptions {
    fn default() -> Self {
        Self {
            format: ALL.to_string(),
            ext: ALL.to_string(),
            out: PathBuf::from("dist"),
            print: false,
            json: false,
            json_out: None,
            flat: false,
            silent: false,
            palette: None,
        }
    }
}

/// Validated options for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub formats: Selection<ColorFormat>,
    pub dialects: Selection<Dialect>,
    pub out_dir: PathBuf,
    pub mode: OutputMode,
    /// Write every dialect into `out_dir` itself instead of per-dialect folders
    pub flat: bool,
    /// Suppress status output (errors are still shown)
    pub silent: bool,
    /// Palette file to load instead of the built-in table
    pub palette: Option<PathBuf>,
}

impl Options {
    /// Validate raw values. The format is checked before the dialect.
    pub fn resolve(raw: RawOptions) -> Result<Self, OptionsError> {
        let Some(formats) = Selection::parse(&raw.format) else {
            return Err(OptionsError::InvalidFormat { value: raw.format });
        };
        let Some(dialects) = Selection::parse(&raw.ext) else {
            return Err(OptionsError::InvalidDialect { value: raw.ext });
        };

        let mode = if raw.json || raw.json_out.is_some() {
            OutputMode::Json { path: raw.json_out }
        } else if raw.print {
            OutputMode::Print
        } else {
            OutputMode::Files
        };

        Ok(Self {
            formats,
            dialects,
            out_dir: raw.out,
            mode,
            flat: raw.flat,
            silent: raw.silent,
            palette: raw.palette,
        })
    }

    /// Whether flat output may make several units write the same file.
    pub fn flat_overwrite_risk(&self) -> bool {
        self.flat && (self.formats.is_all() || self.dialects.is_all())
    }
}

/// Invalid selector values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("Invalid format: {value}")]
    InvalidFormat { value: String },

    #[error("Invalid extension: {value}")]
    InvalidDialect { value: String },
}

impl OptionsError {
    /// The values that would have been accepted, `all` included.
    pub fn accepted(&self) -> Vec<&'static str> {
        let mut values: Vec<&'static str> = match self {
            Self::InvalidFormat { .. } => ColorFormat::iter().map(ColorFormat::as_str).collect(),
            Self::InvalidDialect { .. } => Dialect::iter().map(Dialect::as_str).collect(),
        };
        values.push(ALL);
        values
    }

    /// Line listing the accepted values, e.g. `Accepted formats: hex, rgba, oklch or 'all'`.
    pub fn accepted_line(&self) -> String {
        let kind = match self {
            Self::InvalidFormat { .. } => "formats",
            Self::InvalidDialect { .. } => "extensions",
        };
        let accepted = self.accepted();
        let named = &accepted[..accepted.len() - 1];
        format!("Accepted {kind}: {} or '{ALL}'", named.join(", "))
    }

    /// Closest accepted value when the input looks like a typo.
    pub fn suggestion(&self) -> Option<&'static str> {
        let value = match self {
            Self::InvalidFormat { value } | Self::InvalidDialect { value } => value,
        };
        let value = value.to_ascii_lowercase();
        self.accepted()
            .into_iter()
            .map(|candidate| (candidate, strsim::jaro_winkler(&value, candidate)))
            .filter(|(_, score)| *score > 0.8)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(candidate, _)| candidate)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(one) => one.fmt(f),
        }
    }
}
