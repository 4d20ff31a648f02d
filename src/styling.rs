//! Styling for terminal status output.
//!
//! - anstream for auto-detecting color support
//! - color-print for markup in message templates
//!
//! Generated data (stylesheets, JSON) never passes through here; it is written
//! unstyled to stdout.

mod constants;

pub use constants::*;

/// Auto-detecting eprintln that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::eprintln;
