pub mod convert;
pub mod dialect;
pub mod export;
pub mod options;
pub mod output;
pub mod palette;
pub mod styling;

// Re-export the pipeline entry points for convenience
pub use convert::{Converter, SrgbConverter};
pub use options::{Options, OptionsError, RawOptions};
pub use palette::Palette;
