//! Date and time values recognized in model strings, and their format strings.

use super::culture::{Culture, INVARIANT};
use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike};

/// A point in time read from a model string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateValue {
    local: NaiveDateTime,
    offset: Option<FixedOffset>,
}

const NAIVE_PATTERNS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

impl DateValue {
    /// Recognizes RFC 3339 timestamps, offset-less date-times and plain dates.
    pub fn parse(text: &str) -> Option<Self> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(Self { local: dt.naive_local(), offset: Some(*dt.offset()) });
        }
        for pattern in NAIVE_PATTERNS {
            if let Ok(local) = NaiveDateTime::parse_from_str(text, pattern) {
                return Some(Self { local, offset: None });
            }
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|local| Self { local, offset: None })
    }

    fn to_utc(self) -> Self {
        let utc = self
            .offset
            .and_then(|offset| offset.from_local_datetime(&self.local).single())
            .map(|dt| dt.naive_utc())
            .unwrap_or(self.local);
        Self { local: utc, offset: FixedOffset::east_opt(0) }
    }
}

/// Expands a single-character standard format into its custom pattern.
fn standard_pattern(specifier: char, culture: &Culture) -> Option<String> {
    let pattern = match specifier {
        'd' => culture.short_date.to_string(),
        'D' => culture.long_date.to_string(),
        'f' => format!("{} {}", culture.long_date, culture.short_time),
        'F' => format!("{} {}", culture.long_date, culture.long_time),
        'g' => format!("{} {}", culture.short_date, culture.short_time),
        'G' => format!("{} {}", culture.short_date, culture.long_time),
        't' => culture.short_time.to_string(),
        'T' => culture.long_time.to_string(),
        'M' | 'm' => culture.month_day.to_string(),
        'Y' | 'y' => culture.year_month.to_string(),
        's' => "yyyy'-'MM'-'dd'T'HH':'mm':'ss".to_string(),
        'u' => "yyyy'-'MM'-'dd HH':'mm':'ss'Z'".to_string(),
        'O' | 'o' => "yyyy'-'MM'-'dd'T'HH':'mm':'ss'.'fffffffK".to_string(),
        'R' | 'r' => "ddd, dd MMM yyyy HH':'mm':'ss 'GMT'".to_string(),
        _ => return None,
    };
    Some(pattern)
}

fn offset_text(offset: Option<FixedOffset>, width: usize) -> String {
    let seconds = offset.map(|o| o.local_minus_utc()).unwrap_or(0);
    let sign = if seconds < 0 { '-' } else { '+' };
    let hours = seconds.abs() / 3600;
    let minutes = seconds.abs() % 3600 / 60;
    match width {
        1 => format!("{sign}{hours}"),
        2 => format!("{sign}{hours:02}"),
        _ => format!("{sign}{hours:02}:{minutes:02}"),
    }
}

fn fraction(nanos: u32, digits: usize) -> String {
    let text = format!("{nanos:09}");
    text[..digits].to_string()
}

/// Renders `value` with a custom pattern such as `dd.MM.yyyy HH:mm`.
fn custom(value: &DateValue, pattern: &str, format: &str, culture: &Culture) -> Result<String> {
    let dt = value.local;
    let names = culture.names;
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::new();
    let mut idx = 0;

    while idx < chars.len() {
        let ch = chars[idx];
        let run = chars[idx..].iter().take_while(|c| **c == ch).count();
        let mut consumed = run;

        match ch {
            'd' => match run {
                1 => out.push_str(&dt.day().to_string()),
                2 => out.push_str(&format!("{:02}", dt.day())),
                3 => out.push_str(names.abbreviated_days[dt.weekday().num_days_from_sunday() as usize]),
                _ => out.push_str(names.days[dt.weekday().num_days_from_sunday() as usize]),
            },
            'M' => {
                let month = dt.month0() as usize;
                match run {
                    1 => out.push_str(&dt.month().to_string()),
                    2 => out.push_str(&format!("{:02}", dt.month())),
                    3 => out.push_str(names.abbreviated_months[month]),
                    _ => out.push_str(names.months[month]),
                }
            }
            'y' => match run {
                1 => out.push_str(&(dt.year() % 100).to_string()),
                2 => out.push_str(&format!("{:02}", dt.year() % 100)),
                width => out.push_str(&format!("{:0width$}", dt.year())),
            },
            'h' => {
                let (_, hour) = dt.hour12();
                consumed = run.min(2);
                if consumed == 1 {
                    out.push_str(&hour.to_string());
                } else {
                    out.push_str(&format!("{hour:02}"));
                }
            }
            'H' => {
                consumed = run.min(2);
                if consumed == 1 {
                    out.push_str(&dt.hour().to_string());
                } else {
                    out.push_str(&format!("{:02}", dt.hour()));
                }
            }
            'm' => {
                consumed = run.min(2);
                if consumed == 1 {
                    out.push_str(&dt.minute().to_string());
                } else {
                    out.push_str(&format!("{:02}", dt.minute()));
                }
            }
            's' => {
                consumed = run.min(2);
                if consumed == 1 {
                    out.push_str(&dt.second().to_string());
                } else {
                    out.push_str(&format!("{:02}", dt.second()));
                }
            }
            'f' | 'F' => {
                if run > 7 {
                    return Err(Error::format(format, "at most seven fraction digits"));
                }
                let digits = fraction(dt.nanosecond() % 1_000_000_000, run);
                if ch == 'f' {
                    out.push_str(&digits);
                } else {
                    let trimmed = digits.trim_end_matches('0');
                    if trimmed.is_empty() && out.ends_with('.') {
                        out.pop();
                    }
                    out.push_str(trimmed);
                }
            }
            't' => {
                let designator = if dt.hour12().0 { culture.pm } else { culture.am };
                if run == 1 {
                    out.extend(designator.chars().next());
                } else {
                    out.push_str(designator);
                }
            }
            'z' => out.push_str(&offset_text(value.offset, run)),
            'K' => match value.offset {
                Some(offset) if offset.local_minus_utc() == 0 => out.push('Z'),
                Some(offset) => out.push_str(&offset_text(Some(offset), 3)),
                None => {}
            },
            'g' => out.push_str("A.D."),
            ':' => {
                consumed = 1;
                out.push_str(culture.time_separator);
            }
            '/' => {
                consumed = 1;
                out.push_str(culture.date_separator);
            }
            '\'' | '"' => {
                let literal: String = chars[idx + 1..].iter().take_while(|c| **c != ch).collect();
                consumed = literal.chars().count() + 2;
                out.push_str(&literal);
            }
            '\\' => {
                consumed = 2;
                out.extend(chars.get(idx + 1));
            }
            '%' => consumed = 1,
            other => {
                consumed = 1;
                out.push(other);
            }
        }
        idx += consumed;
    }
    Ok(out)
}

/// Formats a date with a standard (single character) or custom format string.
pub fn format_date(value: &DateValue, format: &str, culture: &Culture) -> Result<String> {
    let mut chars = format.chars();
    match (chars.next(), chars.next()) {
        (Some(specifier), None) => {
            let pattern = standard_pattern(specifier, culture).ok_or_else(|| {
                Error::format(format, format!("unknown date format specifier '{specifier}'"))
            })?;
            match specifier {
                'u' => custom(&value.to_utc(), &pattern, format, culture),
                'R' | 'r' => custom(&value.to_utc(), &pattern, format, &INVARIANT),
                's' | 'O' | 'o' => custom(value, &pattern, format, &INVARIANT),
                _ => custom(value, &pattern, format, culture),
            }
        }
        _ => custom(value, format, format, culture),
    }
}
