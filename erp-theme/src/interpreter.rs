//! # Command Interpreter
//!
//! Turns free text from an external agent into a [ThemeUpdate] using ordered
//! keyword tables in two vocabularies (English and German).
//!
//! ## Algorithm
//!
//! The text is lower-cased, then each category is classified in a fixed order:
//! mode, variant, font size, spacing, border radius, visual density. Within a
//! category the table is scanned top to bottom and the first pattern contained
//! in the text wins. Categories are independent, so one sentence can set
//! several of them. Text that matches nothing yields an empty update.
//!
//! ```rust
//! use erp_theme::config::{Spacing, ThemeMode};
//! use erp_theme::interpreter::interpret;
//!
//! assert_eq!(interpret("Dunkelmodus").mode, Some(ThemeMode::Dark));
//! assert_eq!(interpret("kompakt").parameters.spacing, Some(Spacing::Compact));
//! assert!(interpret("xyzzy").is_empty());
//! ```
//!
//! More specific patterns precede the patterns they contain
//! (`"stark abgerundete ecken"` before `"abgerundete ecken"`), otherwise the
//! shorter one would always win.

use crate::config::{
    BorderRadius, FontSize, Spacing, ThemeMode, ThemeParameters, ThemeUpdate, ThemeVariant,
    VisualDensity,
};

/// One row of a keyword table: a lower-case substring and the value it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule<T> {
    /// Lower-case substring searched for in the normalized text.
    pub pattern: &'static str,
    /// Value selected when the pattern matches.
    pub value: T,
}

const fn rule<T>(pattern: &'static str, value: T) -> KeywordRule<T> {
    KeywordRule { pattern, value }
}

/// Display mode keywords.
pub static MODE_KEYWORDS: &[KeywordRule<ThemeMode>] = &[
    rule("dark mode", ThemeMode::Dark),
    rule("dunkelmodus", ThemeMode::Dark),
    rule("light mode", ThemeMode::Light),
    rule("hellmodus", ThemeMode::Light),
    rule("high contrast", ThemeMode::HighContrast),
    rule("hoher kontrast", ThemeMode::HighContrast),
    rule("hohen kontrast", ThemeMode::HighContrast),
];

/// Variant keywords.
pub static VARIANT_KEYWORDS: &[KeywordRule<ThemeVariant>] = &[
    rule("odoo", ThemeVariant::Odoo),
    rule("default", ThemeVariant::Default),
    rule("standard", ThemeVariant::Default),
    rule("modern", ThemeVariant::Modern),
    rule("classic", ThemeVariant::Classic),
    rule("klassisch", ThemeVariant::Classic),
];

/// Font size keywords.
pub static FONT_SIZE_KEYWORDS: &[KeywordRule<FontSize>] = &[
    rule("kleine schrift", FontSize::Small),
    rule("kleinere schrift", FontSize::Small),
    rule("schrift klein", FontSize::Small),
    rule("small font", FontSize::Small),
    rule("smaller font", FontSize::Small),
    rule("große schrift", FontSize::Large),
    rule("größere schrift", FontSize::Large),
    rule("grosse schrift", FontSize::Large),
    rule("schrift groß", FontSize::Large),
    rule("schrift gross", FontSize::Large),
    rule("large font", FontSize::Large),
    rule("larger font", FontSize::Large),
    rule("bigger font", FontSize::Large),
];

/// Spacing keywords.
pub static SPACING_KEYWORDS: &[KeywordRule<Spacing>] = &[
    rule("kompakt", Spacing::Compact),
    rule("compact", Spacing::Compact),
    rule("komfortabel", Spacing::Comfortable),
    rule("comfortable", Spacing::Comfortable),
    rule("normale abstände", Spacing::Normal),
    rule("normal spacing", Spacing::Normal),
];

/// Border radius keywords.
pub static BORDER_RADIUS_KEYWORDS: &[KeywordRule<BorderRadius>] = &[
    rule("stark abgerundete ecken", BorderRadius::Large),
    rule("very rounded", BorderRadius::Large),
    rule("keine abgerundeten ecken", BorderRadius::None),
    rule("keine ecken", BorderRadius::None),
    rule("no rounded corners", BorderRadius::None),
    rule("no corners", BorderRadius::None),
    rule("square corners", BorderRadius::None),
    rule("abgerundete ecken", BorderRadius::Medium),
    rule("rounded corners", BorderRadius::Medium),
];

/// Visual density keywords.
pub static VISUAL_DENSITY_KEYWORDS: &[KeywordRule<VisualDensity>] = &[
    rule("weniger elemente", VisualDensity::Low),
    rule("niedrige dichte", VisualDensity::Low),
    rule("low density", VisualDensity::Low),
    rule("mehr elemente", VisualDensity::High),
    rule("hohe dichte", VisualDensity::High),
    rule("high density", VisualDensity::High),
];

/// Return the value of the first rule whose pattern occurs in `text`.
///
/// `text` must already be lower-cased.
pub fn classify<T: Copy>(text: &str, table: &[KeywordRule<T>]) -> Option<T> {
    table
        .iter()
        .find(|rule| text.contains(rule.pattern))
        .map(|rule| rule.value)
}

/// Interpret free text as a configuration delta.
///
/// Never fails; unrecognised text yields [ThemeUpdate::is_empty].
pub fn interpret(text: &str) -> ThemeUpdate {
    let text = text.to_lowercase();

    let update = ThemeUpdate {
        mode: classify(&text, MODE_KEYWORDS),
        variant: classify(&text, VARIANT_KEYWORDS),
        parameters: ThemeParameters {
            font_size: classify(&text, FONT_SIZE_KEYWORDS),
            spacing: classify(&text, SPACING_KEYWORDS),
            border_radius: classify(&text, BORDER_RADIUS_KEYWORDS),
            visual_density: classify(&text, VISUAL_DENSITY_KEYWORDS),
            ..ThemeParameters::default()
        },
    };

    if update.is_empty() {
        log::debug!("CommandInterpreter: no keyword matched in {:?}", text);
    } else {
        log::debug!("CommandInterpreter: {:?} -> {:?}", text, update);
    }

    update
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_patterns() -> Vec<&'static str> {
        fn patterns<T>(table: &[KeywordRule<T>]) -> impl Iterator<Item = &'static str> + '_ {
            table.iter().map(|rule| rule.pattern)
        }

        patterns(MODE_KEYWORDS)
            .chain(patterns(VARIANT_KEYWORDS))
            .chain(patterns(FONT_SIZE_KEYWORDS))
            .chain(patterns(SPACING_KEYWORDS))
            .chain(patterns(BORDER_RADIUS_KEYWORDS))
            .chain(patterns(VISUAL_DENSITY_KEYWORDS))
            .collect()
    }

    #[test]
    fn test_patterns_are_normalized() {
        for pattern in all_patterns() {
            assert_eq!(pattern, pattern.to_lowercase(), "{pattern} is not lower case");
        }
    }

    #[test]
    fn test_every_rule_is_reachable() {
        // A rule shadowed by an earlier, shorter pattern in the same table could never fire.
        fn check<T: Copy + PartialEq + std::fmt::Debug>(table: &[KeywordRule<T>]) {
            for rule in table {
                assert_eq!(classify(rule.pattern, table), Some(rule.value), "{}", rule.pattern);
            }
        }

        check(MODE_KEYWORDS);
        check(VARIANT_KEYWORDS);
        check(FONT_SIZE_KEYWORDS);
        check(SPACING_KEYWORDS);
        check(BORDER_RADIUS_KEYWORDS);
        check(VISUAL_DENSITY_KEYWORDS);
    }

    #[test]
    fn test_both_vocabularies() {
        assert_eq!(interpret("dark mode"), ThemeUpdate::new().with_mode(ThemeMode::Dark));
        assert_eq!(interpret("Dunkelmodus"), ThemeUpdate::new().with_mode(ThemeMode::Dark));
        assert_eq!(
            interpret("Hoher Kontrast bitte").mode,
            Some(ThemeMode::HighContrast)
        );
        assert_eq!(interpret("switch to light mode").mode, Some(ThemeMode::Light));
        assert_eq!(
            interpret("kompakt"),
            ThemeUpdate::new().with_parameters(ThemeParameters {
                spacing: Some(Spacing::Compact),
                ..ThemeParameters::default()
            })
        );
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(interpret("xyzzy").is_empty());
        assert!(interpret("").is_empty());
    }

    #[test]
    fn test_multiple_categories() {
        let update = interpret("Use dark mode with the classic look, compact and very rounded");
        assert_eq!(update.mode, Some(ThemeMode::Dark));
        assert_eq!(update.variant, Some(ThemeVariant::Classic));
        assert_eq!(update.parameters.spacing, Some(Spacing::Compact));
        assert_eq!(update.parameters.border_radius, Some(BorderRadius::Large));
        assert_eq!(update.parameters.font_size, None);
    }

    #[test]
    fn test_first_match_wins_within_category() {
        // Both mode keywords are present, table order decides.
        assert_eq!(interpret("light mode or dark mode").mode, Some(ThemeMode::Dark));
        assert_eq!(
            interpret("stark abgerundete ecken").parameters.border_radius,
            Some(BorderRadius::Large)
        );
        assert_eq!(
            interpret("abgerundete ecken").parameters.border_radius,
            Some(BorderRadius::Medium)
        );
    }

    #[test]
    fn test_german_sentence() {
        let update = interpret("Aktiviere den Dunkelmodus und mache die Schrift groß");
        assert_eq!(update.mode, Some(ThemeMode::Dark));
        assert_eq!(update.parameters.font_size, Some(FontSize::Large));
        assert_eq!(update.variant, None);
    }

    #[test]
    fn test_interpret_is_stateless() {
        let text = "mehr elemente und standard";
        assert_eq!(interpret(text), interpret(text));
        assert_eq!(interpret(text).parameters.visual_density, Some(VisualDensity::High));
        assert_eq!(interpret(text).variant, Some(ThemeVariant::Default));
    }
}
