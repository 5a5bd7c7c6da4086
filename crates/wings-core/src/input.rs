//! # Form Input Parsing
//!
//! Turns the text typed into a form into the numbers sent to the service.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form draft (this module)                                     │
//! │  └── Read the leading number out of the text, nothing more             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Inventory service                                            │
//! │  └── Required fields, ranges, stock arithmetic                         │
//! │                                                                         │
//! │  Text that holds no number becomes `None` (sent as null) and the       │
//! │  service's rejection is what the user sees.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parsing is prefix-based: `"12 boxes"` reads as 12, `"3.5kg"` as 3.5.

/// Reads a leading base-10 integer, ignoring leading whitespace.
///
/// ## Example
/// ```rust
/// use wings_core::input::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("12"), Some(12));
/// assert_eq!(parse_int_prefix("  -3 units"), Some(-3));
/// assert_eq!(parse_int_prefix("4.9"), Some(4));
/// assert_eq!(parse_int_prefix("abc"), None);
/// assert_eq!(parse_int_prefix(""), None);
/// ```
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign_len, digits) = split_sign(text);
    let digit_count = digits.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }
    text[..sign_len + digit_count].parse().ok()
}

/// Reads a leading decimal number, ignoring leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction (`.5` and `5.`
/// both count), and an optional exponent.
///
/// ## Example
/// ```rust
/// use wings_core::input::parse_decimal_prefix;
///
/// assert_eq!(parse_decimal_prefix("12.50"), Some(12.5));
/// assert_eq!(parse_decimal_prefix(".5"), Some(0.5));
/// assert_eq!(parse_decimal_prefix("1e2x"), Some(100.0));
/// assert_eq!(parse_decimal_prefix("M12"), None);
/// ```
pub fn parse_decimal_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let (mut end, _) = split_sign(text);

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn split_sign(text: &str) -> (usize, &str) {
    match text.as_bytes().first() {
        Some(b'+') | Some(b'-') => (1, &text[1..]),
        _ => (0, text),
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
