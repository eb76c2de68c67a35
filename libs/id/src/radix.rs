//! Base-36 digit conversion.
//!
//! Two flavours live here: exact integer conversion used by the strict codec,
//! and floating-point conversion that reproduces how browsers stringify and
//! parse numbers, used by the legacy layer.

/// Digits in ascending value order, uppercase.
pub const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const RADIX: u128 = 36;

/// Largest double below which every integer is exactly representable.
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RadixError {
    /// Empty input or a character outside the uppercase alphabet.
    Invalid,
    /// The value does not fit in 128 bits.
    Overflow,
}

/// Returns the value of an uppercase base-36 digit.
fn digit_value(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some(u32::from(byte - b'0')),
        b'A'..=b'Z' => Some(u32::from(byte - b'A') + 10),
        _ => None,
    }
}

/// Returns the value of a digit in `radix`, accepting either letter case.
fn digit_value_any_case(ch: char, radix: u32) -> Option<u32> {
    ch.to_digit(radix)
}

/// Returns true if `byte` is in `[0-9A-Z]`.
pub(crate) fn is_digit(byte: u8) -> bool {
    digit_value(byte).is_some()
}

/// Formats `value` in base 36 with uppercase letters.
pub(crate) fn encode_u128(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(25);
    while value > 0 {
        digits.push(ALPHABET[(value % RADIX) as usize]);
        value /= RADIX;
    }
    digits.reverse();

    // Every byte comes from ALPHABET.
    digits.into_iter().map(char::from).collect()
}

/// Parses a strict uppercase base-36 string.
pub(crate) fn decode_u128(digits: &str) -> Result<u128, RadixError> {
    if digits.is_empty() {
        return Err(RadixError::Invalid);
    }

    digits.bytes().try_fold(0u128, |acc, byte| {
        let digit = digit_value(byte).ok_or(RadixError::Invalid)?;
        acc.checked_mul(RADIX)
            .and_then(|acc| acc.checked_add(u128::from(digit)))
            .ok_or(RadixError::Overflow)
    })
}

/// Left-pads `text` with `'0'` up to `width` characters. Never truncates.
pub(crate) fn pad_start(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let mut padded = "0".repeat(width - len);
    padded.push_str(text);
    padded
}

/// Formats an integral double in base 36 the way a browser's
/// `Number.prototype.toString(36)` does, then uppercases it.
///
/// Non-finite values format as `NAN`, `INFINITY` and `-INFINITY`.
pub(crate) fn format_f64(value: f64) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INFINITY" } else { "-INFINITY" }.to_string();
    }

    let mut integer = value.abs().trunc();
    let mut digits = Vec::new();

    // Digits below the double's precision are emitted as zeros.
    while integer / 36.0 >= MAX_EXACT {
        integer /= 36.0;
        digits.push(b'0');
    }
    loop {
        let remainder = integer % 36.0;
        digits.push(ALPHABET[remainder as usize]);
        integer = (integer - remainder) / 36.0;
        if integer <= 0.0 {
            break;
        }
    }
    if value < 0.0 && value.trunc() != 0.0 {
        digits.push(b'-');
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

/// Browser `parseInt(text, radix)` for radix 10 or 36.
///
/// Leading whitespace and one sign are skipped, then digits are consumed up
/// to the first character that is not valid in `radix`. No digits yields NaN.
pub(crate) fn parse_int(text: &str, radix: u32) -> f64 {
    let trimmed = text.trim_start_matches(is_js_whitespace);
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .char_indices()
        .find(|(_, ch)| digit_value_any_case(*ch, radix).is_none())
        .map_or(rest.len(), |(idx, _)| idx);
    let digits = &rest[..end];
    if digits.is_empty() {
        return f64::NAN;
    }

    let magnitude = if radix == 10 {
        // Decimal goes through the correctly-rounded float parser.
        digits.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        accumulate(digits, radix)
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// ECMAScript `WhiteSpace` and `LineTerminator`. Unlike
/// [`char::is_whitespace`] this includes U+FEFF and excludes U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Exact accumulation while the value fits in 128 bits, floating point after.
fn accumulate(digits: &str, radix: u32) -> f64 {
    let mut exact: u128 = 0;
    let mut chars = digits.chars();

    for ch in chars.by_ref() {
        let digit = digit_value_any_case(ch, radix).unwrap_or(0);
        match exact
            .checked_mul(u128::from(radix))
            .and_then(|acc| acc.checked_add(u128::from(digit)))
        {
            Some(next) => exact = next,
            None => {
                let mut approx = exact as f64 * f64::from(radix) + f64::from(digit);
                for ch in chars.by_ref() {
                    let digit = digit_value_any_case(ch, radix).unwrap_or(0);
                    approx = approx * f64::from(radix) + f64::from(digit);
                }
                return approx;
            }
        }
    }

    exact as f64
}

/// Browser `parseInt(number)`: the number is stringified first, so values
/// printed in exponent form keep only their leading digit.
pub(crate) fn parse_int_number(value: f64) -> f64 {
    if !value.is_finite() {
        return f64::NAN;
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        let leading = format!("{magnitude:e}")
            .bytes()
            .next()
            .and_then(|byte| digit_value(byte))
            .map_or(f64::NAN, f64::from);
        return if value < 0.0 { -leading } else { leading };
    }

    value.trunc()
}
