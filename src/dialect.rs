//! Stylesheet serializers, one per [`Dialect`].
//!
//! Each serializer writes one variable per valid palette entry, in palette
//! order. Lines are joined with `\n` and there is no trailing newline, so
//! repeated runs produce byte-identical files.

use crate::convert::ProjectedPalette;
use crate::options::{ColorFormat, Dialect};

impl Dialect {
    /// File extension for generated stylesheets.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Stylus => "styl",
            other => other.as_str(),
        }
    }

    /// One variable declaration.
    pub fn declaration(self, name: &str, value: &str) -> String {
        match self {
            Self::Css => format!("  --{name}: {value};"),
            Self::Scss => format!("${name}: {value};"),
            Self::Less => format!("@{name}: {value};"),
            Self::Stylus => format!("{name} = {value};"),
        }
    }

    /// Render `palette` in `format`. Invalid entries are left out.
    pub fn render(self, palette: &ProjectedPalette, format: ColorFormat) -> String {
        let body = palette
            .valid(format)
            .map(|(name, value)| self.declaration(name, value))
            .collect::<Vec<_>>()
            .join("\n");

        match self {
            Self::Css => format!(":root {{\n{body}\n}}"),
            Self::Scss | Self::Less | Self::Stylus => body,
        }
    }
}
