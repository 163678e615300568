//! Standard (`N2`, `P0`, `X8`, ...) and custom (`#,##0.00`) numeric format strings.

use super::culture::Culture;
use crate::error::{Error, Result};

/// Largest precision accepted by the standard specifiers.
const MAX_PRECISION: usize = 99;

/// A model number, keeping integers exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i128),
    Float(f64),
}

impl Number {
    pub fn from_json(number: &serde_json::Number) -> Option<Self> {
        if let Some(i) = number.as_i64() {
            Some(Number::Integer(i as i128))
        } else if let Some(u) = number.as_u64() {
            Some(Number::Integer(u as i128))
        } else {
            number.as_f64().map(Number::Float)
        }
    }

    fn is_negative(self) -> bool {
        match self {
            Number::Integer(i) => i < 0,
            Number::Float(f) => f < 0.0,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Number::Integer(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    fn multiply(self, factor: i128) -> Self {
        match self {
            Number::Integer(i) => match i.checked_mul(factor) {
                Some(product) => Number::Integer(product),
                None => Number::Float(i as f64 * factor as f64),
            },
            Number::Float(f) => Number::Float(f * factor as f64),
        }
    }

    fn divide_by_thousand(self) -> Self {
        Number::Float(self.as_f64() / 1000.0)
    }
}

/// Sign, integer digits and exactly `decimals` fraction digits of `n`,
/// rounded to `decimals` places.
fn fixed_digits(n: Number, decimals: usize) -> (bool, String, String) {
    match n {
        Number::Integer(i) => (i < 0, i.unsigned_abs().to_string(), "0".repeat(decimals)),
        Number::Float(f) => {
            let text = format!("{:.*}", decimals, f.abs());
            let (int, frac) = match text.split_once('.') {
                Some((int, frac)) => (int.to_string(), frac.to_string()),
                None => (text, String::new()),
            };
            let nonzero = int.bytes().chain(frac.bytes()).any(|b| b != b'0');
            (f < 0.0 && nonzero, int, frac)
        }
    }
}

/// Significant digits (trailing zeros removed) and decimal exponent of `value`.
///
/// Without a precision the shortest digits that round-trip are used.
fn scientific_digits(value: f64, precision: Option<usize>) -> (String, i32) {
    let text = match precision {
        Some(p) => format!("{:.*e}", p.saturating_sub(1), value.abs()),
        None => format!("{:e}", value.abs()),
    };
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let mut digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }
    (digits, exponent.parse().unwrap_or(0))
}

fn group_digits(digits: &str, separator: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

fn join_fraction(int: &str, frac: &str, culture: &Culture) -> String {
    if frac.is_empty() {
        int.to_string()
    } else {
        format!("{int}{}{frac}", culture.decimal_separator)
    }
}

fn with_sign(negative: bool, body: String) -> String {
    if negative {
        format!("-{body}")
    } else {
        body
    }
}

fn exponent_text(exponent: i32, min_digits: usize, upper: bool) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    let e = if upper { 'E' } else { 'e' };
    format!("{e}{sign}{:0width$}", exponent.abs(), width = min_digits)
}

/// General notation: fixed point unless the exponent leaves the given window.
fn general(n: Number, precision: Option<usize>, upper: bool, culture: &Culture) -> String {
    if let (Number::Integer(i), None) = (n, precision) {
        return i.to_string();
    }
    let value = n.as_f64();
    if value == 0.0 {
        return "0".to_string();
    }
    let (digits, exponent) = scientific_digits(value, precision);
    let fixed_limit = precision.map(|p| p as i32).unwrap_or(15);

    let body = if exponent > -5 && exponent < fixed_limit {
        if exponent >= 0 {
            let split = exponent as usize + 1;
            if digits.len() > split {
                join_fraction(&digits[..split], &digits[split..], culture)
            } else {
                format!("{digits}{}", "0".repeat(split - digits.len()))
            }
        } else {
            let zeros = "0".repeat((-exponent - 1) as usize);
            join_fraction("0", &format!("{zeros}{digits}"), culture)
        }
    } else {
        format!(
            "{}{}",
            join_fraction(&digits[..1], &digits[1..], culture),
            exponent_text(exponent, 2, upper)
        )
    };
    with_sign(value < 0.0, body)
}

fn require_integer(n: Number, format: &str) -> Result<i128> {
    match n {
        Number::Integer(i) => Ok(i),
        Number::Float(_) => {
            Err(Error::format(format, "this specifier only applies to integers"))
        }
    }
}

fn standard(
    specifier: char,
    precision: Option<usize>,
    n: Number,
    format: &str,
    culture: &Culture,
) -> Result<String> {
    let text = match specifier {
        'C' | 'c' => {
            let (negative, int, frac) = fixed_digits(n, precision.unwrap_or(2));
            let amount = join_fraction(&group_digits(&int, &culture.group_separator), &frac, culture);
            with_sign(negative, culture.currency.replacen('n', &amount, 1))
        }
        'D' | 'd' => {
            let i = require_integer(n, format)?;
            let width = precision.unwrap_or(0);
            with_sign(i < 0, format!("{:0width$}", i.unsigned_abs()))
        }
        'E' | 'e' => {
            let p = precision.unwrap_or(6);
            let value = n.as_f64();
            let text = format!("{:.*e}", p, value.abs());
            let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
            let mantissa = mantissa.replacen('.', &culture.decimal_separator, 1);
            let exponent = exponent_text(exponent.parse().unwrap_or(0), 3, specifier == 'E');
            with_sign(value < 0.0, format!("{mantissa}{exponent}"))
        }
        'F' | 'f' => {
            let (negative, int, frac) = fixed_digits(n, precision.unwrap_or(2));
            with_sign(negative, join_fraction(&int, &frac, culture))
        }
        'G' | 'g' => general(n, precision.filter(|p| *p > 0), specifier == 'G', culture),
        'R' | 'r' => general(n, None, true, culture),
        'N' | 'n' => {
            let (negative, int, frac) = fixed_digits(n, precision.unwrap_or(2));
            with_sign(
                negative,
                join_fraction(&group_digits(&int, &culture.group_separator), &frac, culture),
            )
        }
        'P' | 'p' => {
            let (negative, int, frac) = fixed_digits(n.multiply(100), precision.unwrap_or(2));
            let amount = join_fraction(&group_digits(&int, &culture.group_separator), &frac, culture);
            with_sign(negative, culture.percent.replacen('n', &amount, 1))
        }
        'X' | 'x' => {
            let i = require_integer(n, format)?;
            let width = precision.unwrap_or(0);
            let bits = if i < 0 { i as i64 as u64 as u128 } else { i as u128 };
            if specifier == 'X' {
                format!("{bits:0width$X}")
            } else {
                format!("{bits:0width$x}")
            }
        }
        other => {
            return Err(Error::format(format, format!("unknown format specifier '{other}'")))
        }
    };
    Ok(text)
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Zero,
    Hash,
    Point,
    Comma,
    Percent,
    PerMille,
    Section,
    /// `E+00`, `e0`, `E-000`: scientific notation with a minimum exponent width.
    Exponent { upper: bool, always_sign: bool, min_digits: usize },
    Literal(String),
}

/// Sign flag, characters consumed and exponent width of an exponent
/// specifier following `E` or `e`, if `rest` starts with one.
fn exponent_specifier(rest: &[char]) -> Option<(bool, usize, usize)> {
    let (always_sign, sign_len) = match rest.first() {
        Some('+') => (true, 1),
        Some('-') => (false, 1),
        _ => (false, 0),
    };
    let zeros = rest[sign_len..].iter().take_while(|c| **c == '0').count();
    (zeros > 0).then_some((always_sign, sign_len + zeros, zeros))
}

fn tokenize(format: &str) -> Vec<Token> {
    let chars: Vec<char> = format.chars().collect();
    let mut tokens = Vec::new();
    let mut idx = 0;
    while idx < chars.len() {
        let ch = chars[idx];
        idx += 1;
        let token = match ch {
            '0' => Token::Zero,
            '#' => Token::Hash,
            '.' => Token::Point,
            ',' => Token::Comma,
            '%' => Token::Percent,
            '‰' => Token::PerMille,
            ';' => Token::Section,
            '\\' => {
                let escaped = chars.get(idx).map(char::to_string).unwrap_or_default();
                idx += 1;
                Token::Literal(escaped)
            }
            '\'' | '"' => {
                let end = chars[idx..].iter().position(|c| *c == ch).map_or(chars.len(), |p| idx + p);
                let quoted = chars[idx..end].iter().collect();
                idx = end + 1;
                Token::Literal(quoted)
            }
            'E' | 'e' => match exponent_specifier(&chars[idx..]) {
                Some((always_sign, consumed, min_digits)) => {
                    idx += consumed;
                    Token::Exponent { upper: ch == 'E', always_sign, min_digits }
                }
                None => Token::Literal(ch.to_string()),
            },
            other => Token::Literal(other.to_string()),
        };
        tokens.push(token);
    }
    tokens
}

/// Digit layout of one custom format section.
struct Layout {
    integer_placeholders: usize,
    min_integer: usize,
    min_fraction: usize,
    max_fraction: usize,
    grouping: bool,
    scale_divisions: usize,
}

fn is_digit(token: &Token) -> bool {
    matches!(token, Token::Zero | Token::Hash)
}

fn layout(tokens: &[Token]) -> Layout {
    let point = tokens.iter().position(|t| *t == Token::Point);
    let (integer, fraction) = tokens.split_at(point.unwrap_or(tokens.len()));

    let integer_digits: Vec<&Token> = integer.iter().filter(|t| is_digit(t)).collect();
    let min_integer = integer_digits
        .iter()
        .position(|t| **t == Token::Zero)
        .map(|first_zero| integer_digits.len() - first_zero)
        .unwrap_or(0);

    let mut grouping = false;
    let mut scale_divisions = 0;
    for (idx, token) in integer.iter().enumerate() {
        if *token != Token::Comma {
            continue;
        }
        let before = integer[..idx].iter().any(is_digit);
        let after = integer[idx + 1..].iter().any(is_digit);
        match (before, after) {
            (true, true) => grouping = true,
            (true, false) => scale_divisions += 1,
            _ => {}
        }
    }

    let fraction_digits: Vec<&Token> = fraction.iter().filter(|t| is_digit(t)).collect();
    let min_fraction =
        fraction_digits.iter().rposition(|t| **t == Token::Zero).map(|i| i + 1).unwrap_or(0);

    Layout {
        integer_placeholders: integer_digits.len(),
        min_integer,
        min_fraction,
        max_fraction: fraction_digits.len(),
        grouping,
        scale_divisions,
    }
}

/// Mantissa and exponent of `n` such that the mantissa, rounded to
/// `decimals` places, has `integer_digits` integer digits.
fn scientific_mantissa(n: Number, integer_digits: usize, decimals: usize) -> (Number, i32) {
    let value = n.as_f64();
    if value == 0.0 {
        return (Number::Float(0.0), 0);
    }
    let mut exponent = value.abs().log10().floor() as i32 - (integer_digits as i32 - 1);
    loop {
        let mantissa = Number::Float(value / 10f64.powi(exponent));
        let (_, int, _) = fixed_digits(mantissa, decimals);
        if int.len() <= integer_digits {
            return (mantissa, exponent);
        }
        exponent += 1;
    }
}

fn custom_section(tokens: &[Token], n: Number, add_minus: bool, culture: &Culture) -> String {
    let layout = layout(tokens);
    let scientific = tokens.iter().any(|t| matches!(t, Token::Exponent { .. }));

    let mut value = n;
    for token in tokens {
        match token {
            Token::Percent => value = value.multiply(100),
            Token::PerMille => value = value.multiply(1000),
            _ => {}
        }
    }
    for _ in 0..layout.scale_divisions {
        value = value.divide_by_thousand();
    }
    let mut exponent = 0;
    if scientific {
        (value, exponent) =
            scientific_mantissa(value, layout.integer_placeholders.max(1), layout.max_fraction);
    }

    let (negative, mut int, mut frac) = fixed_digits(value, layout.max_fraction);
    while frac.len() > layout.min_fraction && frac.ends_with('0') {
        frac.pop();
    }
    if int == "0" {
        int.clear();
    }
    if int.len() < layout.min_integer {
        int = format!("{}{int}", "0".repeat(layout.min_integer - int.len()));
    }

    let grouped = group_digits(&int, &culture.group_separator);
    let int_chars: Vec<char> = int.chars().collect();
    let frac_chars: Vec<char> = frac.chars().collect();

    let mut out = String::new();
    if add_minus && negative {
        out.push('-');
    }

    let mut in_fraction = false;
    let mut integer_seen = 0usize;
    let mut fraction_seen = 0usize;
    for token in tokens {
        match token {
            Token::Zero | Token::Hash if !in_fraction => {
                let k = integer_seen;
                integer_seen += 1;
                if layout.grouping {
                    if k == 0 {
                        out.push_str(&grouped);
                    }
                    continue;
                }
                // right-aligned: the first placeholder takes every surplus leading digit
                let pos = int_chars.len() as isize - (layout.integer_placeholders - k) as isize;
                if k == 0 {
                    if pos >= 0 {
                        out.extend(&int_chars[..=pos as usize]);
                    }
                } else if pos >= 0 {
                    out.push(int_chars[pos as usize]);
                }
            }
            Token::Zero | Token::Hash => {
                if let Some(ch) = frac_chars.get(fraction_seen) {
                    out.push(*ch);
                }
                fraction_seen += 1;
            }
            Token::Point if !in_fraction => {
                in_fraction = true;
                if layout.integer_placeholders == 0 {
                    out.push_str(&int);
                }
                if !frac.is_empty() {
                    out.push_str(&culture.decimal_separator);
                }
            }
            Token::Point | Token::Comma | Token::Section => {}
            Token::Percent => out.push('%'),
            Token::PerMille => out.push('‰'),
            Token::Exponent { upper, always_sign, min_digits } => {
                out.push(if *upper { 'E' } else { 'e' });
                if exponent < 0 {
                    out.push('-');
                } else if *always_sign {
                    out.push('+');
                }
                out.push_str(&format!("{:0width$}", exponent.unsigned_abs(), width = *min_digits));
            }
            Token::Literal(text) => out.push_str(text),
        }
    }
    out
}

fn custom(format: &str, n: Number, culture: &Culture) -> String {
    let tokens = tokenize(format);
    let sections: Vec<&[Token]> = tokens.split(|t| *t == Token::Section).collect();

    let negative_section = sections.get(1).filter(|s| !s.is_empty());
    let zero_section = sections.get(2).filter(|s| !s.is_empty());

    if n.is_negative() {
        if let Some(section) = negative_section {
            let magnitude = match n {
                Number::Integer(i) => Number::Integer(i.abs()),
                Number::Float(f) => Number::Float(f.abs()),
            };
            return custom_section(section, magnitude, false, culture);
        }
    }
    if n.is_zero() {
        if let Some(section) = zero_section {
            return custom_section(section, n, false, culture);
        }
    }
    custom_section(sections[0], n, true, culture)
}

/// Splits a standard format string into its specifier and precision.
///
/// Returns `None` for custom format strings.
fn parse_standard(format: &str) -> Option<(char, &str)> {
    let mut chars = format.chars();
    let specifier = chars.next().filter(char::is_ascii_alphabetic)?;
    let precision = chars.as_str();
    precision.bytes().all(|b| b.is_ascii_digit()).then_some((specifier, precision))
}

/// Formats `n` with a standard or custom numeric format string.
pub fn format_number(n: Number, format: &str, culture: &Culture) -> Result<String> {
    if let Number::Float(f) = n {
        if f.is_nan() {
            return Ok("NaN".to_string());
        }
        if f.is_infinite() {
            return Ok(if f > 0.0 { "∞" } else { "-∞" }.to_string());
        }
    }

    match parse_standard(format) {
        Some((specifier, precision)) => {
            let precision = if precision.is_empty() {
                None
            } else {
                match precision.parse::<usize>() {
                    Ok(p) if p <= MAX_PRECISION => Some(p),
                    _ => return Err(Error::format(format, "precision out of range")),
                }
            };
            standard(specifier, precision, n, format, culture)
        }
        None => Ok(custom(format, n, culture)),
    }
}
