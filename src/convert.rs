//! Color projection: palette literals into HEX, RGBA and OKLCH notations.
//!
//! The math lives in the `palette` crate; this module only parses literals,
//! formats the results, and records per-entry failures as
//! [`ProjectedColor::Invalid`] instead of aborting the run.

use std::str::FromStr;

use indexmap::IndexMap;
use palette::{FromColor, Oklch, Srgb};

use crate::options::ColorFormat;
use crate::palette::PaletteEntry;

/// Stand-in written to JSON for entries that failed conversion.
pub const INVALID_MARKER: &str = "/* invalid */";

/// Chroma below this prints as `0.0000`; the hue is reported as 0 then.
const ACHROMATIC_CHROMA: f64 = 0.000_05;

/// The three notations of one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub hex: String,
    pub rgba: String,
    pub oklch: String,
}

impl Projection {
    pub fn get(&self, format: ColorFormat) -> &str {
        match format {
            ColorFormat::Hex => &self.hex,
            ColorFormat::Rgba => &self.rgba,
            ColorFormat::Oklch => &self.oklch,
        }
    }
}

/// Conversion outcome for one palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectedColor {
    Valid(Projection),
    Invalid,
}

impl ProjectedColor {
    /// The representation in `format`, or `None` for invalid entries.
    pub fn get(&self, format: ColorFormat) -> Option<&str> {
        match self {
            Self::Valid(projection) => Some(projection.get(format)),
            Self::Invalid => None,
        }
    }

    /// The representation in `format`, with [`INVALID_MARKER`] for invalid entries.
    pub fn get_or_marker(&self, format: ColorFormat) -> &str {
        self.get(format).unwrap_or(INVALID_MARKER)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("unsupported color literal '{0}'")]
    Unsupported(String),
}

/// Converts a color literal into all notations.
pub trait Converter {
    fn convert(&self, literal: &str) -> Result<Projection, ConversionError>;
}

/// [`Converter`] for sRGB hex literals, backed by the `palette` crate.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`, with or without `#`,
/// in any case. Alpha digits are accepted and ignored.
#[derive(Debug, Clone, Copy)]
pub struct SrgbConverter;

impl Converter for SrgbConverter {
    fn convert(&self, literal: &str) -> Result<Projection, ConversionError> {
        let rgb = parse_hex(literal)
            .ok_or_else(|| ConversionError::Unsupported(literal.to_string()))?;
        let srgb: Srgb<f64> = rgb.into_format();

        Ok(Projection {
            hex: hex_string(rgb),
            rgba: rgba_string(srgb),
            oklch: oklch_string(Oklch::from_color(srgb)),
        })
    }
}

fn parse_hex(literal: &str) -> Option<Srgb<u8>> {
    let digits = literal.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    // from_str_radix would let a '+' through
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let opaque = match digits.len() {
        3 | 6 => digits,
        4 => &digits[..3],
        8 => &digits[..6],
        _ => return None,
    };
    Srgb::from_str(opaque).ok()
}

/// `#rrggbb`, shortened to `#rgb` when every byte repeats its nibble.
fn hex_string(rgb: Srgb<u8>) -> String {
    let (r, g, b) = rgb.into_components();
    if [r, g, b].iter().all(|byte| byte % 17 == 0) {
        format!("#{:x}{:x}{:x}", r / 17, g / 17, b / 17)
    } else {
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

fn rgba_string(srgb: Srgb<f64>) -> String {
    let (r, g, b) = srgb.into_components();
    format!(
        "rgba({}, {}, {}, 1)",
        channel_byte(r),
        channel_byte(g),
        channel_byte(b)
    )
}

fn channel_byte(channel: f64) -> u8 {
    // Clamped so the cast never saturates
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn oklch_string(oklch: Oklch<f64>) -> String {
    let hue = if oklch.chroma < ACHROMATIC_CHROMA {
        0.0
    } else {
        oklch.hue.into_positive_degrees()
    };
    format!("oklch({:.4} {:.4} {:.2})", oklch.l, oklch.chroma, hue)
}

/// Projected colors keyed by qualified name, in palette order.
///
/// A repeated name overwrites the earlier value but keeps its position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectedPalette {
    colors: IndexMap<String, ProjectedColor>,
}

impl ProjectedPalette {
    /// Convert every entry. Failures are kept as [`ProjectedColor::Invalid`].
    pub fn project(entries: &[PaletteEntry], converter: &dyn Converter) -> Self {
        let mut colors = IndexMap::with_capacity(entries.len());
        for entry in entries {
            let color = match converter.convert(&entry.value) {
                Ok(projection) => ProjectedColor::Valid(projection),
                Err(e) => {
                    log::debug!("Marking {} invalid: {e}", entry.name);
                    ProjectedColor::Invalid
                }
            };
            colors.insert(entry.name.clone(), color);
        }
        Self { colors }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProjectedColor)> {
        self.colors.iter().map(|(name, color)| (name.as_str(), color))
    }

    /// Name/value pairs in `format`, invalid entries left out.
    pub fn valid(&self, format: ColorFormat) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter_map(move |(name, color)| color.get(format).map(|value| (name, value)))
    }

    /// Name/value pairs in `format`, invalid entries as [`INVALID_MARKER`].
    pub fn with_markers(&self, format: ColorFormat) -> IndexMap<&str, &str> {
        self.iter()
            .map(|(name, color)| (name, color.get_or_marker(format)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Names of the entries that failed conversion, in palette order.
    pub fn invalid_names(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, color)| matches!(color, ProjectedColor::Invalid))
            .map(|(name, _)| name)
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid_names().count()
    }
}
