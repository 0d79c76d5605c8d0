//! Host-facing entry points.
//!
//! The editor owns invocation timing: it calls
//! [`ColorProvider::provide_document_colors`] whenever a document should show
//! swatches, and [`ColorProvider::provide_color_presentations`] when the user
//! picks a new color for one of them.

use serde::Serialize;

use crate::color::Rgb;
use crate::config::Config;
use crate::presentation::{FormattedPresentation, format_presentation};
use crate::scanner::{match_at, scan_document};
use crate::span::TextSpan;

/// A swatch to draw: where it sits and what color it shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorInformation {
    pub span: TextSpan,
    pub color: Rgb,
    /// Always opaque; the notation carries no alpha.
    pub alpha: f64,
}

/// Stateless apart from its configuration; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct ColorProvider {
    config: Config,
}

impl ColorProvider {
    pub fn new(config: Config) -> Self {
        ColorProvider { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Find every swatch in `text`. Documents in unconfigured languages get none.
    pub fn provide_document_colors(&self, language_id: &str, text: &str) -> Vec<ColorInformation> {
        if !self.config.handles_language(language_id) {
            log::debug!("language {language_id:?} not configured, no colors provided");
            return Vec::new();
        }
        scan_document(text)
            .into_iter()
            .map(|m| ColorInformation {
                span: m.span,
                color: m.color,
                alpha: 1.0,
            })
            .collect()
    }

    /// Turn an edited swatch color into replacement text for `span`.
    ///
    /// `line_text` is the current text of `span.line`; when given and name
    /// preservation is on, the declaration's own name is kept.
    pub fn provide_color_presentations(
        &self,
        color: Rgb,
        span: TextSpan,
        line_text: Option<&str>,
    ) -> Vec<FormattedPresentation> {
        let hsl = color.to_hsl();
        let original = if self.config.preserve_variable_name {
            line_text.and_then(|line| match_at(line, span))
        } else {
            None
        };
        let name = original
            .as_ref()
            .map_or(self.config.fallback_variable_name.as_str(), |m| {
                m.variable_name.as_str()
            });

        let presentation = format_presentation(hsl, span, Some(name));
        log::debug!(
            "line {}: {}..{} -> {}",
            span.line,
            span.start,
            span.end,
            presentation.replacement_text
        );
        vec![presentation]
    }
}

/// Render provider results as a JSON array for hosts that exchange JSON.
pub fn to_json(colors: &[ColorInformation]) -> crate::error::Result<String> {
    Ok(serde_json::to_string(colors)?)
}
