//! Declaration scanner — finds `--name: H S% L%;` custom properties in text.
//!
//! Every call starts a fresh scan over the line it is given; nothing is
//! carried between calls, so results never depend on what was scanned before.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::color::{Hsl, Rgb, hsl_to_rgb};
use crate::span::TextSpan;

/// `--name`, `:`, hue, saturation `%`, lightness `%`, optional `;`.
static DECLARATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"--([A-Za-z0-9_-]+)\s*:\s*([0-9.]+)\s+([0-9.]+)%\s+([0-9.]+)%\s*;?")
        .expect("valid regex")
});

/// One HSL declaration found on a line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorMatch {
    /// Covers `--` through the trailing `;` when present.
    pub span: TextSpan,
    /// Property name without the leading `--`.
    pub variable_name: String,
    /// Declared components, saturation and lightness as fractions.
    pub hsl: Hsl,
    pub color: Rgb,
}

/// Lazily scan one line, left to right, for non-overlapping declarations.
///
/// Captures whose numbers do not parse (`1.2.3`, a lone `.`) are skipped.
pub fn find_matches(line_index: usize, line: &str) -> impl Iterator<Item = ColorMatch> + '_ {
    DECLARATION_RE
        .captures_iter(line)
        .filter_map(move |caps| to_match(line_index, line, &caps))
}

/// Scan every line of `text` and concatenate the results in document order.
pub fn scan_document(text: &str) -> Vec<ColorMatch> {
    let matches: Vec<ColorMatch> = text
        .lines()
        .enumerate()
        .flat_map(|(i, line)| find_matches(i, line))
        .collect();
    log::debug!("scanned document: {} color declaration(s)", matches.len());
    matches
}

/// Re-scan `line` and return the declaration occupying exactly `span`.
pub fn match_at(line: &str, span: TextSpan) -> Option<ColorMatch> {
    find_matches(span.line, line).find(|m| m.span == span)
}

fn to_match(line_index: usize, line: &str, caps: &Captures<'_>) -> Option<ColorMatch> {
    let whole = caps.get(0)?;
    let name = caps.get(1)?.as_str();

    let (Some(hue), Some(saturation), Some(lightness)) = (
        parse_number(caps, 2),
        parse_number(caps, 3),
        parse_number(caps, 4),
    ) else {
        log::trace!("skipping malformed declaration: {}", whole.as_str());
        return None;
    };

    let hsl = Hsl {
        hue,
        saturation: saturation / 100.0,
        lightness: lightness / 100.0,
    };

    // Regex offsets are bytes; the host addresses UTF-16 code units.
    let start = line[..whole.start()].encode_utf16().count();
    let end = start + whole.as_str().encode_utf16().count();

    let found = ColorMatch {
        span: TextSpan::new(line_index, start, end),
        variable_name: name.to_string(),
        hsl,
        color: hsl_to_rgb(hsl.hue, hsl.saturation, hsl.lightness),
    };
    log::trace!(
        "line {line_index}: --{} at {start}..{end} -> {}",
        found.variable_name,
        found.color.to_hex()
    );
    Some(found)
}

fn parse_number(caps: &Captures<'_>, group: usize) -> Option<f64> {
    caps.get(group)?.as_str().parse().ok()
}
