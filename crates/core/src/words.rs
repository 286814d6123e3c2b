//! English number words using Indian digit grouping.

use crate::value::Value;

const BASE: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] =
    ["", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety"];

/// Place values and their names, smallest first.
const UNITS: [(u64, &str); 4] =
    [(100, "hundred"), (1_000, "thousand"), (100_000, "lakh"), (10_000_000, "crore")];

/// Capitalized Indian-grouped words for a number or numeric text.
///
/// Returns an empty string for nil, non-numeric text, negative or
/// non-finite numbers and any non-numeric variant. Fractions round half up.
/// Empty or whitespace-only text counts as non-numeric and gives `""`, not `"Zero"`.
///
/// ```
/// use utilkit_core::{Value, number_to_indian_words};
///
/// assert_eq!(number_to_indian_words(&Value::from("10348")), "Ten thousand three hundred and forty-eight");
/// assert_eq!(number_to_indian_words(&Value::from("invalidNumber")), "");
/// ```
#[must_use]
pub fn number_to_indian_words(x: &Value) -> String {
    let Some(n) = whole_number(x) else {
        return String::new();
    };
    capitalize_first(&indian_words(n))
}

/// Lowercase Indian-grouped words for `n`.
///
/// A trailing remainder below one hundred is joined with "and" (`"one hundred and one"`).
/// Crore multipliers above 99 are spelled recursively without "and".
#[must_use]
pub fn indian_words(n: u64) -> String {
    spell(n, true)
}

fn spell(n: u64, with_and: bool) -> String {
    if n < 100 {
        return below_hundred(n);
    }

    // Collected smallest place first, reversed before joining.
    let mut parts: Vec<String> = Vec::new();
    let rest = n % 100;
    if rest != 0 {
        let words = below_hundred(rest);
        parts.push(if with_and { format!("and {words}") } else { words });
    }

    for (i, &(scale, name)) in UNITS.iter().enumerate() {
        let mut count = n / scale;
        if let Some(&(next, _)) = UNITS.get(i.saturating_add(1)) {
            count %= next / scale;
        }
        if count == 0 {
            continue;
        }
        parts.push(format!("{} {name}", spell(count, false)));
    }

    parts.reverse();
    parts.join(" ")
}

#[allow(clippy::cast_possible_truncation, reason = "n < 100 so indices stay in bounds")]
fn below_hundred(n: u64) -> String {
    let n = n as usize;
    if n < BASE.len() {
        return BASE[n].to_owned();
    }
    let tens = TENS[n / 10];
    match n % 10 {
        0 => tens.to_owned(),
        unit => format!("{tens}-{}", BASE[unit]),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "range is checked before the cast"
)]
fn whole_number(x: &Value) -> Option<u64> {
    let n = match x {
        Value::Number(n) => *n,
        Value::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        },
        _ => return None,
    };
    if !n.is_finite() || n < 0.0 {
        return None;
    }
    let rounded = (n + 0.5).floor();
    if rounded >= u64::MAX as f64 {
        return None;
    }
    Some(rounded as u64)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(x: impl Into<Value>) -> String {
        number_to_indian_words(&x.into())
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(words(0), "Zero");
        assert_eq!(words(7), "Seven");
        assert_eq!(words(13), "Thirteen");
        assert_eq!(words(20), "Twenty");
        assert_eq!(words(21), "Twenty-one");
        assert_eq!(words(99), "Ninety-nine");
    }

    #[test]
    fn test_hundreds_use_and() {
        assert_eq!(words(100), "One hundred");
        assert_eq!(words(101), "One hundred and one");
        assert_eq!(words(250), "Two hundred and fifty");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(words(1348), "One thousand three hundred and forty-eight");
        assert_eq!(words(10348), "Ten thousand three hundred and forty-eight");
        assert_eq!(words(1005), "One thousand and five");
        assert_eq!(words(21000), "Twenty-one thousand");
    }

    #[test]
    fn test_lakh_and_crore() {
        assert_eq!(words(100_000), "One lakh");
        assert_eq!(words(250_000), "Two lakh fifty thousand");
        assert_eq!(
            words(12_345_678),
            "One crore twenty-three lakh forty-five thousand six hundred and seventy-eight"
        );
        assert_eq!(words(1_500_000_000), "One hundred fifty crore");
    }

    #[test]
    fn test_numeric_text() {
        assert_eq!(words("10348"), "Ten thousand three hundred and forty-eight");
        assert_eq!(words(" 42 "), "Forty-two");
        assert_eq!(words("1e3"), "One thousand");
    }

    #[test]
    fn test_rounds_fractions() {
        assert_eq!(words(20.5), "Twenty-one");
        assert_eq!(words(20.4), "Twenty");
    }

    #[test]
    fn test_invalid_inputs_are_empty() {
        assert_eq!(words("invalidNumber"), "");
        assert_eq!(words(""), "");
        assert_eq!(words("   "), "");
        assert_eq!(words("1,000"), "");
        assert_eq!(words("inf"), "");
        assert_eq!(words(-5), "");
        assert_eq!(words(f64::NAN), "");
        assert_eq!(words(Value::Nil), "");
        assert_eq!(words(true), "");
    }

    #[test]
    fn test_indian_words_is_lowercase() {
        assert_eq!(indian_words(101), "one hundred and one");
    }
}
