//! Render an edited color back into `H S% L%` declaration text.

use serde::Serialize;

use crate::color::Hsl;
use crate::span::TextSpan;

/// Variable name written when the original one is unknown.
pub const LEGACY_VARIABLE_NAME: &str = "var-name";

/// Text the host shows for an edited swatch and the edit it applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedPresentation {
    /// `"<h> <s>% <l>%"`.
    pub display_text: String,
    /// Short picker label, `"--var: <h> <s>% <l>%;"`.
    pub label: String,
    /// Full declaration that replaces `target_span`.
    pub replacement_text: String,
    pub target_span: TextSpan,
}

/// Format a component to one decimal place, dropping a trailing `.0`.
///
/// Exact halves round away from zero: `6.25` → `"6.3"`. `93.0` → `"93"`,
/// `93.4` → `"93.4"`. Negative zero is deliberately written `"0"`, not `"-0"`.
pub fn format_component(value: f64) -> String {
    let rounded = format!("{:.1}", round_half_away_tenths(value));
    let text = rounded.strip_suffix(".0").unwrap_or(&rounded);
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Push a value whose exact decimal expansion is a tie at the hundredths
/// place away from zero, so `{:.1}` does not round it to even.
fn round_half_away_tenths(value: f64) -> f64 {
    // Enough digits to show the exact expansion of any tie candidate.
    let exact = format!("{:.80}", value.abs());
    let Some((_, fraction)) = exact.split_once('.') else {
        return value;
    };
    let is_tie = fraction
        .get(1..)
        .and_then(|rest| rest.strip_prefix('5'))
        .is_some_and(|zeros| zeros.bytes().all(|b| b == b'0'));
    if !is_tie {
        return value;
    }
    // value * 10 is exactly k + 0.5 here, so ceil lands on k + 1.
    let up = (value.abs() * 10.0).ceil() / 10.0;
    up.copysign(value)
}

/// `"<h> <s>% <l>%"` with saturation and lightness scaled to percentages.
pub fn display_text(hsl: Hsl) -> String {
    format!(
        "{} {}% {}%",
        format_component(hsl.hue),
        format_component(hsl.saturation * 100.0),
        format_component(hsl.lightness * 100.0)
    )
}

/// Build the presentation for `hsl`, replacing `target_span` verbatim.
///
/// `variable_name` is the property name without `--`; `None` writes
/// [`LEGACY_VARIABLE_NAME`].
pub fn format_presentation(
    hsl: Hsl,
    target_span: TextSpan,
    variable_name: Option<&str>,
) -> FormattedPresentation {
    let display_text = display_text(hsl);
    let name = variable_name.unwrap_or(LEGACY_VARIABLE_NAME);
    FormattedPresentation {
        label: format!("--var: {display_text};"),
        replacement_text: format!("--{name}: {display_text};"),
        display_text,
        target_span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_component ──

    #[test]
    fn whole_numbers_drop_decimal() {
        assert_eq!(format_component(93.0), "93");
        assert_eq!(format_component(0.0), "0");
        assert_eq!(format_component(100.0), "100");
    }

    #[test]
    fn one_decimal_is_kept() {
        assert_eq!(format_component(93.4), "93.4");
        assert_eq!(format_component(47.4), "47.4");
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(format_component(93.44), "93.4");
        assert_eq!(format_component(12.96), "13");
    }

    #[test]
    fn exact_halves_round_up() {
        assert_eq!(format_component(6.25), "6.3");
        assert_eq!(format_component(0.25), "0.3");
        assert_eq!(format_component(50.25), "50.3");
        assert_eq!(format_component(12.75), "12.8");
        assert_eq!(format_component(-6.25), "-6.3");
    }

    #[test]
    fn inexact_halves_follow_stored_value() {
        // both are stored slightly below the half
        assert_eq!(format_component(0.15), "0.1");
        assert_eq!(format_component(0.35), "0.3");
    }

    #[test]
    fn non_finite_passes_through() {
        assert_eq!(format_component(f64::NAN), "NaN");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(format_component(-0.0), "0");
        assert_eq!(format_component(-0.01), "0");
    }

    #[test]
    fn trailing_zero_only_after_point() {
        assert_eq!(format_component(10.0), "10");
        assert_eq!(format_component(10.5), "10.5");
    }

    // ── format_presentation ──

    #[test]
    fn display_text_matches_notation() {
        let hsl = Hsl {
            hue: 93.0,
            saturation: 0.5,
            lightness: 0.934,
        };
        let p = format_presentation(hsl, TextSpan::new(0, 0, 10), None);
        assert_eq!(p.display_text, "93 50% 93.4%");
    }

    #[test]
    fn legacy_name_when_unknown() {
        let hsl = Hsl {
            hue: 0.0,
            saturation: 0.0,
            lightness: 0.93,
        };
        let p = format_presentation(hsl, TextSpan::new(2, 4, 27), None);
        assert_eq!(p.replacement_text, "--var-name: 0 0% 93%;");
        assert_eq!(p.label, "--var: 0 0% 93%;");
        assert_eq!(p.target_span, TextSpan::new(2, 4, 27));
    }

    #[test]
    fn keeps_supplied_name() {
        let hsl = Hsl {
            hue: 222.0,
            saturation: 0.474,
            lightness: 0.112,
        };
        let p = format_presentation(hsl, TextSpan::new(0, 0, 30), Some("primary"));
        assert_eq!(p.replacement_text, "--primary: 222 47.4% 11.2%;");
    }
}
