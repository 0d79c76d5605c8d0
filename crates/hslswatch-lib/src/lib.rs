//! HslSwatch — inline color swatches for HSL custom properties such as
//! `--background: 0 0% 93%;`.
//!
//! The host editor hands text to [`provider::ColorProvider`] and gets back
//! swatch colors with their spans; when the user edits a swatch, the host
//! hands back the RGB color and receives the replacement text.

pub mod color;
pub mod config;
pub mod error;
pub mod presentation;
pub mod provider;
pub mod scanner;
pub mod span;

pub use color::{Hsl, Rgb, hsl_to_rgb, rgb_to_hsl};
pub use error::HslSwatchError;
pub use presentation::{FormattedPresentation, format_presentation};
pub use provider::{ColorInformation, ColorProvider};
pub use scanner::{ColorMatch, find_matches, scan_document};
pub use span::TextSpan;
