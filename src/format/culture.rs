//! Culture data used by the number and date formatters.
//!
//! A handful of cultures carry full tables. Any other locale takes its
//! decimal and group separators from the CLDR data compiled into ICU and the
//! remaining patterns from the invariant culture.

use crate::locale::Locale;
use icu_decimal::{input::Decimal, DecimalFormatter};
use log::debug;
use std::borrow::Cow;

/// Month and day names for one language.
#[derive(Debug)]
pub struct CalendarNames {
    pub months: [&'static str; 12],
    pub abbreviated_months: [&'static str; 12],
    /// Sunday first.
    pub days: [&'static str; 7],
    /// Sunday first.
    pub abbreviated_days: [&'static str; 7],
}

/// Separators, patterns and names of a culture.
///
/// `percent` and `currency` patterns hold an `n` where the formatted
/// magnitude goes. Date and time patterns use the custom date tokens.
#[derive(Debug, Clone)]
pub struct Culture {
    pub name: Cow<'static, str>,
    pub decimal_separator: Cow<'static, str>,
    pub group_separator: Cow<'static, str>,
    pub percent: &'static str,
    pub currency: &'static str,
    pub date_separator: &'static str,
    pub time_separator: &'static str,
    pub short_date: &'static str,
    pub long_date: &'static str,
    pub short_time: &'static str,
    pub long_time: &'static str,
    pub month_day: &'static str,
    pub year_month: &'static str,
    pub am: &'static str,
    pub pm: &'static str,
    pub names: &'static CalendarNames,
}

const ENGLISH: CalendarNames = CalendarNames {
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ],
    abbreviated_months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    days: ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
    abbreviated_days: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
};

const GERMAN: CalendarNames = CalendarNames {
    months: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    abbreviated_months: [
        "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
    ],
    days: ["Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag"],
    abbreviated_days: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
};

const FRENCH: CalendarNames = CalendarNames {
    months: [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    abbreviated_months: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
        "nov.", "déc.",
    ],
    days: ["dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi"],
    abbreviated_days: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
};

const SPANISH: CalendarNames = CalendarNames {
    months: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
        "septiembre", "octubre", "noviembre", "diciembre",
    ],
    abbreviated_months: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
    days: ["domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado"],
    abbreviated_days: ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
};

pub const INVARIANT: Culture = Culture {
    name: Cow::Borrowed(""),
    decimal_separator: Cow::Borrowed("."),
    group_separator: Cow::Borrowed(","),
    percent: "n %",
    currency: "¤n",
    date_separator: "/",
    time_separator: ":",
    short_date: "MM/dd/yyyy",
    long_date: "dddd, dd MMMM yyyy",
    short_time: "HH:mm",
    long_time: "HH:mm:ss",
    month_day: "MMMM dd",
    year_month: "yyyy MMMM",
    am: "AM",
    pm: "PM",
    names: &ENGLISH,
};

const EN_US: Culture = Culture {
    name: Cow::Borrowed("en-US"),
    decimal_separator: Cow::Borrowed("."),
    group_separator: Cow::Borrowed(","),
    percent: "n%",
    currency: "$n",
    date_separator: "/",
    time_separator: ":",
    short_date: "M/d/yyyy",
    long_date: "dddd, MMMM d, yyyy",
    short_time: "h:mm tt",
    long_time: "h:mm:ss tt",
    month_day: "MMMM d",
    year_month: "MMMM yyyy",
    am: "AM",
    pm: "PM",
    names: &ENGLISH,
};

const EN_GB: Culture = Culture {
    name: Cow::Borrowed("en-GB"),
    decimal_separator: Cow::Borrowed("."),
    group_separator: Cow::Borrowed(","),
    percent: "n%",
    currency: "£n",
    date_separator: "/",
    time_separator: ":",
    short_date: "dd/MM/yyyy",
    long_date: "dddd, d MMMM yyyy",
    short_time: "HH:mm",
    long_time: "HH:mm:ss",
    month_day: "d MMMM",
    year_month: "MMMM yyyy",
    am: "am",
    pm: "pm",
    names: &ENGLISH,
};

const DE: Culture = Culture {
    name: Cow::Borrowed("de"),
    decimal_separator: Cow::Borrowed(","),
    group_separator: Cow::Borrowed("."),
    percent: "n\u{a0}%",
    currency: "n\u{a0}€",
    date_separator: ".",
    time_separator: ":",
    short_date: "dd.MM.yyyy",
    long_date: "dddd, d. MMMM yyyy",
    short_time: "HH:mm",
    long_time: "HH:mm:ss",
    month_day: "d. MMMM",
    year_month: "MMMM yyyy",
    am: "AM",
    pm: "PM",
    names: &GERMAN,
};

const DE_CH: Culture = Culture {
    name: Cow::Borrowed("de-CH"),
    decimal_separator: Cow::Borrowed("."),
    group_separator: Cow::Borrowed("’"),
    percent: "n%",
    currency: "CHF\u{a0}n",
    date_separator: ".",
    time_separator: ":",
    short_date: "dd.MM.yyyy",
    long_date: "dddd, d. MMMM yyyy",
    short_time: "HH:mm",
    long_time: "HH:mm:ss",
    month_day: "d. MMMM",
    year_month: "MMMM yyyy",
    am: "AM",
    pm: "PM",
    names: &GERMAN,
};

const FR: Culture = Culture {
    name: Cow::Borrowed("fr"),
    decimal_separator: Cow::Borrowed(","),
    group_separator: Cow::Borrowed("\u{202f}"),
    percent: "n\u{a0}%",
    currency: "n\u{a0}€",
    date_separator: "/",
    time_separator: ":",
    short_date: "dd/MM/yyyy",
    long_date: "dddd d MMMM yyyy",
    short_time: "HH:mm",
    long_time: "HH:mm:ss",
    month_day: "d MMMM",
    year_month: "MMMM yyyy",
    am: "AM",
    pm: "PM",
    names: &FRENCH,
};

const ES: Culture = Culture {
    name: Cow::Borrowed("es"),
    decimal_separator: Cow::Borrowed(","),
    group_separator: Cow::Borrowed("."),
    percent: "n\u{a0}%",
    currency: "n\u{a0}€",
    date_separator: "/",
    time_separator: ":",
    short_date: "dd/MM/yyyy",
    long_date: "dddd, d 'de' MMMM 'de' yyyy",
    short_time: "H:mm",
    long_time: "H:mm:ss",
    month_day: "d 'de' MMMM",
    year_month: "MMMM 'de' yyyy",
    am: "a. m.",
    pm: "p. m.",
    names: &SPANISH,
};

fn builtin(tag: &str) -> Option<&'static Culture> {
    match tag {
        "en" | "en-US" => Some(&EN_US),
        "en-GB" => Some(&EN_GB),
        "de" => Some(&DE),
        "de-CH" => Some(&DE_CH),
        "fr" => Some(&FR),
        "es" => Some(&ES),
        _ => None,
    }
}

/// Formatted by ICU, shows both the group and the decimal separator.
const SEPARATOR_SAMPLE: &str = "1234567.8";

fn is_bidi_mark(ch: char) -> bool {
    matches!(ch, '\u{200e}' | '\u{200f}' | '\u{61c}')
}

/// Group and decimal separators of a formatted [`SEPARATOR_SAMPLE`], as
/// `(decimal, group)`.
fn separators_in(formatted: &str) -> Option<(String, String)> {
    let runs: Vec<&str> = formatted
        .split(char::is_numeric)
        .map(|run| run.trim_matches(is_bidi_mark))
        .filter(|run| !run.is_empty())
        .collect();
    match runs.as_slice() {
        [group, .., decimal] => Some((decimal.to_string(), group.to_string())),
        _ => None,
    }
}

/// Decimal and group separators CLDR defines for `locale`.
fn cldr_separators(locale: &Locale) -> Option<(String, String)> {
    let icu_locale: icu_locale_core::Locale = locale.tag().parse().ok()?;
    let formatter = DecimalFormatter::try_new(icu_locale.into(), Default::default()).ok()?;
    let sample: Decimal = SEPARATOR_SAMPLE.parse().ok()?;
    separators_in(&formatter.format_to_string(&sample))
}

/// Finds the culture for `locale`.
///
/// The fallback chain is searched for a built-in table first. Without one,
/// the invariant culture is used with the separators CLDR defines for the
/// locale.
pub fn culture_for(locale: &Locale) -> Cow<'static, Culture> {
    if let Some(culture) = locale.chain().iter().find_map(|candidate| builtin(&candidate.tag())) {
        return Cow::Borrowed(culture);
    }
    if locale.is_invariant() {
        return Cow::Borrowed(&INVARIANT);
    }
    match cldr_separators(locale) {
        Some((decimal, group)) => {
            debug!("Using CLDR separators '{decimal}' and '{group}' for '{locale}'");
            Cow::Owned(Culture {
                name: Cow::Owned(locale.tag()),
                decimal_separator: Cow::Owned(decimal),
                group_separator: Cow::Owned(group),
                ..INVARIANT
            })
        }
        None => Cow::Borrowed(&INVARIANT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn culture(tag: &str) -> Cow<'static, Culture> {
        culture_for(&Locale::parse(tag).unwrap())
    }

    #[test]
    fn exact_match() {
        assert_eq!(culture("de-CH").name, "de-CH");
        assert_eq!(culture("en-GB").name, "en-GB");
    }

    #[test]
    fn falls_back_to_language() {
        assert_eq!(culture("de-DE").name, "de");
        assert_eq!(culture("de-AT").decimal_separator, ",");
        assert_eq!(culture("fr-CA").name, "fr");
    }

    #[test]
    fn invariant_locale_is_invariant() {
        assert_eq!(culture("").name, "");
        assert!(matches!(culture(""), Cow::Borrowed(_)));
    }

    #[test]
    fn other_locales_use_cldr_separators() {
        for tag in ["it-IT", "nl-NL", "pt-BR"] {
            let derived = culture(tag);
            assert_eq!(derived.name, tag);
            assert_eq!(derived.decimal_separator, ",", "{tag}");
            assert_eq!(derived.group_separator, ".", "{tag}");
        }
        let japanese = culture("ja-JP");
        assert_eq!(japanese.decimal_separator, ".");
        assert_eq!(japanese.group_separator, ",");
        assert_eq!(japanese.short_date, INVARIANT.short_date);
    }

    #[test]
    fn separators_are_read_from_formatted_sample() {
        assert_eq!(separators_in("1.234.567,8"), Some((",".into(), ".".into())));
        assert_eq!(separators_in("1\u{202f}234\u{202f}567,8"), Some((",".into(), "\u{202f}".into())));
        assert_eq!(separators_in("\u{200f}1,234,567.8"), Some((".".into(), ",".into())));
        assert_eq!(separators_in("12345678"), None);
    }
}
