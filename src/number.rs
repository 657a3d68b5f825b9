use crate::errors::{BindError, Result};
use crate::locale::Locale;

/// Which syntactic elements the numeric parser accepts. Mirrors the flag-set
/// style of number parsing APIs: a style bit that is off makes the
/// corresponding syntax an error, not a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberStyles {
    pub allow_leading_white: bool,
    pub allow_trailing_white: bool,
    pub allow_leading_sign: bool,
    pub allow_decimal_point: bool,
    pub allow_exponent: bool,
    pub allow_thousands: bool,
}

impl NumberStyles {
    pub const NONE: Self = Self {
        allow_leading_white: false,
        allow_trailing_white: false,
        allow_leading_sign: false,
        allow_decimal_point: false,
        allow_exponent: false,
        allow_thousands: false,
    };

    /// Whitespace and sign only: plain integers.
    pub const INTEGER: Self = Self {
        allow_leading_white: true,
        allow_trailing_white: true,
        allow_leading_sign: true,
        allow_decimal_point: false,
        allow_exponent: false,
        allow_thousands: false,
    };

    /// Whitespace, sign, decimal point, exponent. Grouping stays off; combine
    /// with [`with_thousands`](Self::with_thousands) to accept it.
    pub const FLOAT: Self = Self {
        allow_leading_white: true,
        allow_trailing_white: true,
        allow_leading_sign: true,
        allow_decimal_point: true,
        allow_exponent: true,
        allow_thousands: false,
    };

    pub const fn with_thousands(mut self) -> Self {
        self.allow_thousands = true;
        self
    }
}

/// Parse `text` as a decimal under `locale`'s separator conventions, accepting
/// only what `styles` allows. The whole input must be consumed.
pub fn parse_decimal(text: &str, styles: NumberStyles, locale: &Locale) -> Result<f64> {
    let mut w = Walker::new(text);

    if styles.allow_leading_white {
        w.skip_ws();
    }

    // Digits and separators are collected into an invariant buffer and handed
    // to the stdlib float parser at the end.
    let mut buf = String::new();

    if let Some(c) = w.peek() {
        if c == '-' || c == '+' {
            if !styles.allow_leading_sign {
                return Err(w.unexpected(c));
            }
            if c == '-' {
                buf.push('-');
            }
            w.bump();
        }
    }

    let mut digits = 0usize;
    while let Some(c) = w.peek() {
        if c.is_ascii_digit() {
            buf.push(c);
            digits += 1;
            w.bump();
        } else if locale.is_group_separator(c) {
            if !styles.allow_thousands {
                return Err(w.unexpected(c));
            }
            // A group separator only makes sense between digits.
            if digits == 0 {
                return Err(w.unexpected(c));
            }
            w.bump();
            match w.peek() {
                Some(d) if d.is_ascii_digit() => {}
                _ => {
                    return Err(BindError::Parse(format!(
                        "group separator {c:?} not followed by a digit in {text:?}"
                    )))
                }
            }
        } else {
            break;
        }
    }

    if w.peek() == Some(locale.decimal_separator()) {
        if !styles.allow_decimal_point {
            return Err(w.unexpected(locale.decimal_separator()));
        }
        w.bump();
        buf.push('.');
        while let Some(c) = w.peek() {
            if c.is_ascii_digit() {
                buf.push(c);
                digits += 1;
                w.bump();
            } else {
                break;
            }
        }
    }

    if digits == 0 {
        return Err(BindError::Parse(format!("no digits in {text:?}")));
    }

    if let Some(c @ ('e' | 'E')) = w.peek() {
        if !styles.allow_exponent {
            return Err(w.unexpected(c));
        }
        w.bump();
        buf.push('e');
        if let Some(c) = w.peek() {
            if c == '-' || c == '+' {
                buf.push(c);
                w.bump();
            }
        }
        let mut exp_digits = 0usize;
        while let Some(c) = w.peek() {
            if c.is_ascii_digit() {
                buf.push(c);
                exp_digits += 1;
                w.bump();
            } else {
                break;
            }
        }
        if exp_digits == 0 {
            return Err(BindError::Parse(format!("empty exponent in {text:?}")));
        }
    }

    if styles.allow_trailing_white {
        w.skip_ws();
    }

    if let Some(c) = w.peek() {
        return Err(w.unexpected(c));
    }

    buf.parse::<f64>()
        .map_err(|e| BindError::Parse(format!("{text:?}: {e}")))
}

struct Walker<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Walker<'a> {
    fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.i += c.len_utf8();
        }
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn unexpected(&self, c: char) -> BindError {
        BindError::Parse(format!(
            "unexpected character {c:?} at offset {} in {:?}",
            self.i, self.s
        ))
    }
}
