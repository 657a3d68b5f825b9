use std::fmt;
use std::str::FromStr;

use crate::errors::BindError;

/// Numeric conventions for one culture: which character separates the
/// fractional part and which characters are accepted as digit-group
/// separators when parsing.
///
/// Note the French table: grouping is written with no-break spaces
/// (U+00A0, or U+202F in newer locale data), never a plain ASCII space.
/// Input formatted with U+0020 therefore fails to parse, which is exactly
/// the mismatch this crate exists to demonstrate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: String,
    decimal_sep: char,
    group_seps: Vec<char>,
}

impl Locale {
    pub fn new(tag: impl Into<String>, decimal_sep: char, group_seps: Vec<char>) -> Self {
        Self {
            tag: tag.into(),
            decimal_sep,
            group_seps,
        }
    }

    /// Locale-invariant conventions: `.` decimal point, `,` grouping.
    pub fn invariant() -> Self {
        Self::new("", '.', vec![','])
    }

    pub fn french() -> Self {
        Self::new("fr-FR", ',', vec!['\u{a0}', '\u{202f}'])
    }

    pub fn english() -> Self {
        Self::new("en-US", '.', vec![','])
    }

    pub fn german() -> Self {
        Self::new("de-DE", ',', vec!['.'])
    }

    /// IETF-style tag; empty for the invariant locale.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_sep
    }

    pub fn is_group_separator(&self, c: char) -> bool {
        self.group_seps.contains(&c)
    }

    /// Human-readable name, as a diagnostic front-end would print it.
    pub fn display_name(&self) -> &'static str {
        match self.tag.as_str() {
            "" => "Invariant",
            "fr-FR" => "French (France)",
            "en-US" => "English (United States)",
            "de-DE" => "German (Germany)",
            _ => "Unknown",
        }
    }

    /// Format a decimal in this locale: shortest representation, the locale's
    /// decimal separator, no grouping.
    pub fn format_decimal(&self, value: f64) -> String {
        let plain = value.to_string();
        if self.decimal_sep == '.' {
            plain
        } else {
            plain.replace('.', &self.decimal_sep.to_string())
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::invariant()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tag.is_empty() {
            write!(f, "invariant")
        } else {
            write!(f, "{}", self.tag)
        }
    }
}

impl FromStr for Locale {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "invariant" => Ok(Locale::invariant()),
            "fr-FR" | "fr" => Ok(Locale::french()),
            "en-US" | "en" => Ok(Locale::english()),
            "de-DE" | "de" => Ok(Locale::german()),
            other => Err(BindError::Binding(format!("unknown locale tag: {other}"))),
        }
    }
}
