//! Mainframe date encodings. Every successful decode renders `YYYY-MM-DD`.

use crate::text::ebcdic_trimmed;
use chrono::NaiveDate;
use recordcodec_core::FieldOutcome;

const ISO_DATE: &str = "%Y-%m-%d";

/// Last two-digit year read as 20xx; later ones are 19xx.
const TWO_DIGIT_YEAR_MAX: i32 = 29;

/// Padded `CYYMMDD` values meaning "no date".
const CYYMMDD_SENTINELS: [&str; 3] = ["0000000", "0999999", "9999999"];

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn iso(date: NaiveDate) -> FieldOutcome {
    FieldOutcome::ok(date.format(ISO_DATE).to_string())
}

/// Build a date from a year and `MM`/`DD` digit pairs.
fn ymd(year: i32, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

/// Century for a two-digit year: `00`..=`29` → 20xx, `30`..=`99` → 19xx.
fn two_digit_year(yy: &str) -> Option<i32> {
    let yy: i32 = yy.parse().ok()?;
    Some(if yy <= TWO_DIGIT_YEAR_MAX { 2000 + yy } else { 1900 + yy })
}

/// `CYYMMDD`, where `C` is a century offset from 1900: `0801231` is
/// 1980-12-31 and `1801231` is 2080-12-31.
///
/// Shorter input is left-padded with zeros. Failures return the input as given.
pub fn cyymmdd(text: &str) -> FieldOutcome {
    if text.len() > 7 || !all_digits(text) {
        return FieldOutcome::soft_fail(text);
    }
    let padded = format!("{text:0>7}");
    if CYYMMDD_SENTINELS.contains(&padded.as_str()) {
        return FieldOutcome::empty();
    }
    let date = padded[..3]
        .parse::<i32>()
        .ok()
        .and_then(|years| ymd(1900 + years, &padded[3..5], &padded[5..]));
    match date {
        Some(date) => iso(date),
        None => FieldOutcome::soft_fail(text),
    }
}

/// `DateString`: `YYMMDD`, `CYYMMDD` or `YYYYMMDD`, chosen by digit count.
pub fn date_text(bytes: &[u8]) -> FieldOutcome {
    let text = ebcdic_trimmed(bytes);
    if text.is_empty() || text.bytes().all(|b| b == b'0') || text.bytes().all(|b| b == b'9') {
        return FieldOutcome::empty();
    }
    if !all_digits(&text) {
        return FieldOutcome::soft_fail(text);
    }
    let parsed = match text.len() {
        6 => two_digit_year(&text[..2]).and_then(|year| ymd(year, &text[2..4], &text[4..])),
        7 => return cyymmdd(&text),
        8 => text[..4]
            .parse()
            .ok()
            .and_then(|year| ymd(year, &text[4..6], &text[6..])),
        _ => None,
    };
    match parsed {
        Some(date) => iso(date),
        None => FieldOutcome::soft_fail(text),
    }
}

/// `DateStringMMDDYY`: exactly six digits read as `MMDDYY`.
pub fn date_text_mmddyy(bytes: &[u8]) -> FieldOutcome {
    let text = ebcdic_trimmed(bytes);
    if text.len() != 6 || !all_digits(&text) {
        return FieldOutcome::soft_fail(text);
    }
    match two_digit_year(&text[4..]).and_then(|year| ymd(year, &text[..2], &text[2..4])) {
        Some(date) => iso(date),
        None => FieldOutcome::soft_fail(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ebcdic_digits(s: &str) -> Vec<u8> {
        s.bytes()
            .map(|b| if b == b' ' { 0x40 } else { 0xF0 + (b - b'0') })
            .collect()
    }

    #[test]
    fn cyymmdd_centuries() {
        assert_eq!(cyymmdd("0130101"), FieldOutcome::ok("1913-01-01"));
        assert_eq!(cyymmdd("1130101"), FieldOutcome::ok("2013-01-01"));
        assert_eq!(cyymmdd("1811231"), FieldOutcome::ok("2081-12-31"));
        assert_eq!(cyymmdd("720809"), FieldOutcome::ok("1972-08-09"));
    }

    #[test]
    fn cyymmdd_sentinels() {
        assert_eq!(cyymmdd(""), FieldOutcome::empty());
        assert_eq!(cyymmdd("0"), FieldOutcome::empty());
        assert_eq!(cyymmdd("999999"), FieldOutcome::empty());
        assert_eq!(cyymmdd("9999999"), FieldOutcome::empty());
    }

    #[test]
    fn cyymmdd_failures_keep_input() {
        assert_eq!(cyymmdd("1130230"), FieldOutcome::soft_fail("1130230"));
        assert_eq!(cyymmdd("11301011"), FieldOutcome::soft_fail("11301011"));
        assert_eq!(cyymmdd("-12"), FieldOutcome::soft_fail("-12"));
    }

    #[test]
    fn date_text_by_length() {
        assert_eq!(date_text(&ebcdic_digits("150123")), FieldOutcome::ok("2015-01-23"));
        assert_eq!(date_text(&ebcdic_digits("1150123")), FieldOutcome::ok("2015-01-23"));
        assert_eq!(date_text(&ebcdic_digits("20150123")), FieldOutcome::ok("2015-01-23"));
        assert_eq!(date_text(&ebcdic_digits("19991231")), FieldOutcome::ok("1999-12-31"));
    }

    #[test]
    fn date_text_sentinels() {
        assert_eq!(date_text(&ebcdic_digits("      ")), FieldOutcome::empty());
        assert_eq!(date_text(&ebcdic_digits("000000")), FieldOutcome::empty());
        assert_eq!(date_text(&ebcdic_digits("99999999")), FieldOutcome::empty());
        assert_eq!(date_text(&[0x00; 8]), FieldOutcome::empty());
    }

    #[test]
    fn date_text_failures() {
        assert_eq!(date_text(&ebcdic_digits("151323")), FieldOutcome::soft_fail("151323"));
        assert_eq!(date_text(&ebcdic_digits("20150230")), FieldOutcome::soft_fail("20150230"));
        assert_eq!(date_text(&ebcdic_digits("12345")), FieldOutcome::soft_fail("12345"));
        assert_eq!(date_text(&ebcdic_digits(" 15 0123")), FieldOutcome::soft_fail("15 0123"));
    }

    #[test]
    fn two_digit_years_pivot_at_29() {
        assert_eq!(date_text(&ebcdic_digits("290101")), FieldOutcome::ok("2029-01-01"));
        assert_eq!(date_text(&ebcdic_digits("300101")), FieldOutcome::ok("1930-01-01"));
        assert_eq!(date_text(&ebcdic_digits("450101")), FieldOutcome::ok("1945-01-01"));
        assert_eq!(date_text_mmddyy(&ebcdic_digits("010145")), FieldOutcome::ok("1945-01-01"));
        assert_eq!(date_text_mmddyy(&ebcdic_digits("123129")), FieldOutcome::ok("2029-12-31"));
        assert_eq!(date_text_mmddyy(&ebcdic_digits("022900")), FieldOutcome::ok("2000-02-29"));
    }

    #[test]
    fn mmddyy() {
        assert_eq!(date_text_mmddyy(&ebcdic_digits("012815")), FieldOutcome::ok("2015-01-28"));
        assert_eq!(date_text_mmddyy(&ebcdic_digits("123199")), FieldOutcome::ok("1999-12-31"));
        assert_eq!(date_text_mmddyy(&ebcdic_digits("131515")), FieldOutcome::soft_fail("131515"));
        assert_eq!(date_text_mmddyy(&ebcdic_digits("01281")), FieldOutcome::soft_fail("01281"));
        assert_eq!(date_text_mmddyy(&ebcdic_digits("      ")), FieldOutcome::soft_fail(""));
    }
}
