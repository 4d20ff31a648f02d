//! Palette data and flattening.
//!
//! A palette is a tree: top-level keys are families (`red`, `slate`), nested
//! keys are shades (`500`), leaves are color literals. Key order is the order
//! the source declares, and every step here preserves it.
//!
//! The built-in table is the Tailwind CSS v3 palette. A replacement can be
//! loaded from a JSON or TOML file with the same shape.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

/// Tailwind palette, embedded at compile time.
const TAILWIND_JSON: &str = include_str!("palette/tailwind.json");

/// Families dropped before flattening: deprecated aliases of other families.
pub const EXCLUDED_FAMILIES: &[&str] = &[
    "lightBlue",
    "trueGray",
    "coolGray",
    "warmGray",
    "blueGray",
];

/// Separator between key segments of a qualified name.
pub const NAME_SEPARATOR: char = '-';

/// A palette node: a color literal, or a table of further nodes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PaletteNode {
    Color(String),
    Group(IndexMap<String, PaletteNode>),
}

/// One flattened palette color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Key segments joined with [`NAME_SEPARATOR`], family first
    pub name: String,
    /// Color literal as written in the palette
    pub value: String,
}

impl PaletteEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Errors loading a palette.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("failed to read palette {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse palette {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("unsupported palette file {} (expected .json or .toml)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// A palette tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    families: IndexMap<String, PaletteNode>,
}

impl Palette {
    pub fn new(families: IndexMap<String, PaletteNode>) -> Self {
        Self { families }
    }

    /// The built-in Tailwind palette.
    pub fn tailwind() -> Result<Self, PaletteError> {
        Self::from_json_str(TAILWIND_JSON, "<built-in>")
    }

    /// Load a palette file. The format follows the file extension.
    pub fn load(path: &Path) -> Result<Self, PaletteError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PaletteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let source_name = path.display().to_string();

        let palette = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents, &source_name)?,
            Some("toml") => Self::from_toml_str(&contents, &source_name)?,
            _ => {
                return Err(PaletteError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };
        log::debug!(
            "Loaded palette {} with {} families",
            source_name,
            palette.families.len()
        );
        Ok(palette)
    }

    fn from_json_str(contents: &str, source_name: &str) -> Result<Self, PaletteError> {
        serde_json::from_str(contents).map_err(|e| PaletteError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    fn from_toml_str(contents: &str, source_name: &str) -> Result<Self, PaletteError> {
        toml::from_str(contents).map_err(|e| PaletteError::Parse {
            source_name: source_name.to_string(),
            message: e.message().to_string(),
        })
    }

    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    /// Flatten into qualified-name/literal pairs, skipping `excluded` families.
    ///
    /// Order follows the tree. Names are not deduplicated.
    pub fn flatten(&self, excluded: &[&str]) -> Vec<PaletteEntry> {
        let mut entries = Vec::new();
        for (family, node) in &self.families {
            if excluded.contains(&family.as_str()) {
                log::debug!("Skipping excluded family {family}");
                continue;
            }
            collect(family.clone(), node, &mut entries);
        }
        entries
    }
}

fn collect(name: String, node: &PaletteNode, entries: &mut Vec<PaletteEntry>) {
    match node {
        PaletteNode::Color(value) => entries.push(PaletteEntry::new(name, value.clone())),
        PaletteNode::Group(children) => {
            for (key, child) in children {
                collect(format!("{name}{NAME_SEPARATOR}{key}"), child, entries);
            }
        }
    }
}
