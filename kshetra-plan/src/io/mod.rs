//! Rendering of planned fields.

pub mod svg;

pub use svg::{SvgColorScheme, SvgConfig, SvgVisualizer};
