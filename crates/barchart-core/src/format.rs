// File: crates/barchart-core/src/format.rs
// Summary: SI-prefix number formatting for axis tick labels.

const PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "\u{b5}", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Digits needed to print any finite `f64` exactly in scientific notation.
const EXACT_DIGITS: usize = 767;

/// Significant digits and exponent of `x` rounded to `precision` digits,
/// e.g. `(1439323000, 3)` gives `("144", 9)`.
/// Exact ties round away from zero, so `(1125, 3)` gives `("113", 3)`.
/// A precision of zero keeps the shortest round-trip representation.
fn decimal_parts(x: f64, precision: usize) -> (String, i32) {
    if precision == 0 {
        return split_exponential(&format!("{x:e}"));
    }
    let (exact, mut exponent) = split_exponential(&format!("{:.*e}", EXACT_DIGITS, x));
    let mut digits: Vec<u8> = exact.bytes().take(precision).collect();
    digits.resize(precision, b'0');
    if exact.as_bytes().get(precision).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            // 9.99 rolled over to 10.0
            digits.insert(0, b'1');
            digits.truncate(precision);
            exponent += 1;
        }
    }
    (String::from_utf8_lossy(&digits).into_owned(), exponent)
}

/// Mantissa digits (sign and point dropped) and exponent of `{:e}` output.
fn split_exponential(s: &str) -> (String, i32) {
    let (mantissa, exp) = s.split_once('e').unwrap_or((s, "0"));
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    (digits, exp.parse().unwrap_or(0))
}

/// Format `value` with an SI prefix and `precision` significant digits.
///
/// Trailing zeros are kept, so `format_si(1.5e9, 3)` is `"1.50G"` and
/// `format_si(0.0, 3)` is `"0.00"`.
pub fn format_si(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return "NaN".to_string();
    }
    let precision = precision.clamp(1, 21);
    let sign = if value < 0.0 { "-" } else { "" };
    let x = value.abs();

    let (coefficient, exponent) = decimal_parts(x, precision);
    let prefix_exponent = (exponent.div_euclid(3)).clamp(-8, 8) * 3;
    let i = exponent - prefix_exponent + 1;
    let n = coefficient.len() as i32;

    let body = if i == n {
        coefficient
    } else if i > n {
        format!("{coefficient}{}", "0".repeat((i - n) as usize))
    } else if i > 0 {
        let (head, tail) = coefficient.split_at(i as usize);
        format!("{head}.{tail}")
    } else {
        // value is below the smallest prefix
        let (digits, _) = decimal_parts(x, (precision as i32 + i - 1).max(0) as usize);
        format!("0.{}{digits}", "0".repeat((-i) as usize))
    };

    let prefix = PREFIXES[(8 + prefix_exponent / 3) as usize];
    format!("{sign}{body}{prefix}")
}

/// Tick label for population figures: three significant digits with the
/// giga prefix written as `B` (billions).
pub fn population_tick(value: f64) -> String {
    format_si(value, 3).replace('G', "B")
}

/// Tick label formatter used by the value axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TickFormat {
    /// SI prefix with the given number of significant digits.
    Si(usize),
    /// SI prefix, three digits, `G` rewritten to `B`.
    #[default]
    Population,
}

impl TickFormat {
    pub fn apply(&self, value: f64) -> String {
        match self {
            TickFormat::Si(p) => format_si(value, *p),
            TickFormat::Population => population_tick(value),
        }
    }
}
