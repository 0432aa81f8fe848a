// Spelling out numbers written with digits ("1.234,5" -> "bin iki yüz otuz dört virgül beş").
//
// Works on the digit string directly so that numbers up to 66 digits per
// part are supported without big integer arithmetic.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MorphError, Result};

pub const ZERO_NAME: &str = "sıfır";
pub const COMMA_NAME: &str = "virgül";
pub const MINUS_NAME: &str = "eksi";

const FRACTION_SEPARATOR: char = ',';
const GROUPING_SEPARATOR: char = '.';
const MAX_DIGITS: usize = 66;

static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+(,[0-9])?[0-9]*$").expect("number pattern is valid"));

const ONES: [&str; 10] = ["sıfır", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz"];

const TENS: [&str; 10] = ["", "on", "yirmi", "otuz", "kırk", "elli", "altmış", "yetmiş", "seksen", "doksan"];

const HUNDRED_NAME: &str = "yüz";

const THOUSAND_POWER_NAMES: [&str; 22] = [
    "",
    "bin",
    "milyon",
    "milyar",
    "trilyon",
    "katrilyon",
    "kentilyon",
    "seksilyon",
    "septilyon",
    "oktilyon",
    "nonilyon",
    "desilyon",
    "undesilyon",
    "dodesilyon",
    "tredesilyon",
    "katordesilyon",
    "kendesilyon",
    "seksdesilyon",
    "septendesilyon",
    "oktodesilyon",
    "novemdesilyon",
    "vigintilyon",
];

/// Spells out a number written in Turkish notation: optional sign, `.`
/// as the grouping separator and `,` before the fraction.
///
/// Leading zeros are read out one by one, so "007" is "sıfır sıfır yedi".
pub fn digits_to_words(digits: &str) -> Result<String> {
    let digits: String = digits.chars().filter(|&c| c != GROUPING_SEPARATOR).collect();
    if !NUMBER_REGEX.is_match(&digits) {
        return Err(MorphError::InvalidNumber(digits));
    }

    let (integer, fraction) = match digits.split_once(FRACTION_SEPARATOR) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };
    let (negative, integer) = match integer.as_bytes().first() {
        Some(b'-') => (true, &integer[1..]),
        Some(b'+') => (false, &integer[1..]),
        _ => (false, integer),
    };

    let mut words = with_leading_zeros(integer, &digits)?;
    if negative && integer.bytes().any(|b| b != b'0') {
        words = format!("{MINUS_NAME} {words}");
    }

    match fraction {
        Some(fraction) => {
            let fraction_words = with_leading_zeros(fraction, &digits)?;
            Ok(format!("{words} {COMMA_NAME} {fraction_words}"))
        }
        None => Ok(words),
    }
}

fn with_leading_zeros(part: &str, original: &str) -> Result<String> {
    let significant = part.trim_start_matches('0');
    let significant = if significant.is_empty() { "0" } else { significant };
    if significant.len() > MAX_DIGITS {
        return Err(MorphError::InvalidNumber(original.to_string()));
    }

    let zeros = part.len() - significant.len();
    let mut words: Vec<&str> = vec![ZERO_NAME; zeros];
    natural_to_words(significant, &mut words);
    Ok(words.join(" "))
}

/// `digits` has no leading zeros (or is exactly "0").
fn natural_to_words<'a>(digits: &str, words: &mut Vec<&'a str>) {
    let values: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();
    if values.len() <= 3 {
        let n = values.iter().fold(0, |acc, d| acc * 10 + d);
        below_thousand(n, words);
        return;
    }

    // Groups of three from the right; the first group may be shorter.
    let head = values.len() % 3;
    let mut groups: Vec<u32> = Vec::with_capacity(values.len() / 3 + 1);
    if head > 0 {
        groups.push(values[..head].iter().fold(0, |acc, d| acc * 10 + d));
    }
    for chunk in values[head..].chunks(3) {
        groups.push(chunk.iter().fold(0, |acc, d| acc * 10 + d));
    }

    let top = groups.len() - 1;
    for (index, &group) in groups.iter().enumerate() {
        let power = top - index;
        match (group, power) {
            (0, _) => {}
            (_, 0) => below_thousand(group, words),
            (1, 1) => words.push(THOUSAND_POWER_NAMES[1]),
            _ => {
                below_thousand(group, words);
                words.push(THOUSAND_POWER_NAMES[power]);
            }
        }
    }
}

fn below_thousand<'a>(n: u32, words: &mut Vec<&'a str>) {
    debug_assert!(n < 1000);
    if n < 10 {
        words.push(ONES[n as usize]);
        return;
    }
    let (hundreds, tens, ones) = (n / 100, (n / 10) % 10, n % 10);
    match hundreds {
        0 => {}
        1 => words.push(HUNDRED_NAME),
        _ => {
            words.push(ONES[hundreds as usize]);
            words.push(HUNDRED_NAME);
        }
    }
    if tens > 0 {
        words.push(TENS[tens as usize]);
    }
    if ones > 0 {
        words.push(ONES[ones as usize]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(digits: &str) -> String {
        digits_to_words(digits).unwrap()
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(words("0"), "sıfır");
        assert_eq!(words("5"), "beş");
        assert_eq!(words("10"), "on");
        assert_eq!(words("12"), "on iki");
        assert_eq!(words("200"), "iki yüz");
        assert_eq!(words("101"), "yüz bir");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(words("1000"), "bin");
        assert_eq!(words("1001"), "bin bir");
        assert_eq!(words("1110"), "bin yüz on");
        assert_eq!(words("5601"), "beş bin altı yüz bir");
        assert_eq!(words("999999"), "dokuz yüz doksan dokuz bin dokuz yüz doksan dokuz");
        assert_eq!(words("1000000"), "bir milyon");
        assert_eq!(words("1.000.000"), "bir milyon");
        assert_eq!(words("2001000"), "iki milyon bin");
    }

    #[test]
    fn test_signs() {
        assert_eq!(words("-0"), "sıfır");
        assert_eq!(words("+0"), "sıfır");
        assert_eq!(words("-5"), "eksi beş");
        assert_eq!(words("+1000000"), "bir milyon");
        assert_eq!(words("-1111"), "eksi bin yüz on bir");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(words("0,0"), "sıfır virgül sıfır");
        assert_eq!(words("0,000"), "sıfır virgül sıfır sıfır sıfır");
        assert_eq!(words("0,001"), "sıfır virgül sıfır sıfır bir");
        assert_eq!(words("-10,896"), "eksi on virgül sekiz yüz doksan altı");
        assert_eq!(words("+2567,01000"), "iki bin beş yüz altmış yedi virgül sıfır bin");
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(words("000200"), "sıfır sıfır sıfır iki yüz");
        assert_eq!(words("-000200"), "eksi sıfır sıfır sıfır iki yüz");
    }

    #[test]
    fn test_largest_supported() {
        let nines = "9".repeat(66);
        let spoken = words(&nines);
        assert!(spoken.starts_with("dokuz yüz doksan dokuz vigintilyon"));
        assert!(spoken.ends_with("milyon dokuz yüz doksan dokuz bin dokuz yüz doksan dokuz"));
        assert!(digits_to_words(&"9".repeat(67)).is_err());
    }

    #[test]
    fn test_invalid() {
        assert!(digits_to_words("").is_err());
        assert!(digits_to_words("12a").is_err());
        assert!(digits_to_words("1,2,3").is_err());
        assert!(digits_to_words("--1").is_err());
    }
}
