use crate::config::NumberLocale;

/// Marker appended to text cut by [`slice_string`]
pub const ELLIPSIS: &str = "...";

/// Decimal places used when the caller does not pick any
pub const DEFAULT_DECIMAL_PLACES: usize = 1;

/// Cut a string to at most `max_length` characters, adding an ellipsis if anything was cut
pub fn slice_string(text: &str, max_length: usize) -> String {
    match text.char_indices().nth(max_length) {
        Some((end, _)) => format!("{}{}", &text[..end], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Title case a word: underscores become spaces and every
/// whitespace-delimited token starts with an uppercase letter.
///
/// Only ASCII lowercase letters at the start of a token are changed;
/// the rest of each token is left as given.
pub fn capital_case(word: &str) -> String {
    let mut at_token_start = true;
    word.chars()
        .map(|c| {
            let c = if c == '_' { ' ' } else { c };
            let out = if at_token_start { c.to_ascii_uppercase() } else { c };
            at_token_start = c.is_whitespace();
            out
        })
        .collect()
}

/// Format a number with thousands separators and a fixed number of decimals,
/// using the default (`en-US`) locale.
pub fn format_number(number: f64, decimal_places: usize) -> String {
    format_number_with(number, decimal_places, &NumberLocale::default())
}

/// Format a number with the separators of `locale`.
///
/// With zero decimal places the number is truncated toward zero. With any
/// other count it is rounded half away from zero. The output always carries
/// exactly `decimal_places` fraction digits.
pub fn format_number_with(number: f64, decimal_places: usize, locale: &NumberLocale) -> String {
    if number.is_nan() {
        return "NaN".to_string();
    }
    if number.is_infinite() {
        return if number > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let value = if decimal_places == 0 {
        number.trunc()
    } else {
        number
    };

    let fixed = fixed_digits(value.abs(), decimal_places);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut result = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    // Zero never carries a sign, even when it came from a small negative number
    if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        result.push('-');
    }
    result.push_str(&group_digits(int_part, &locale.grouping_separator));
    if let Some(frac_part) = frac_part {
        result.push_str(&locale.decimal_separator);
        result.push_str(frac_part);
    }
    result
}

/// Extra digits inspected to tell an exact tie from a value merely close to one
const TIE_GUARD_DIGITS: usize = 30;

/// Render `value` (non-negative) with `decimal_places` digits, rounding the
/// exact stored value. Exact ties round up (away from zero).
fn fixed_digits(value: f64, decimal_places: usize) -> String {
    let rounded = format!("{:.*}", decimal_places, value);
    if decimal_places == 0 {
        return rounded;
    }

    let extended = format!("{:.*}", decimal_places + TIE_GUARD_DIGITS, value);
    let (kept, tail) = extended.split_at(extended.len() - TIE_GUARD_DIGITS);
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if is_tie {
        increment_last_digit(kept)
    } else {
        rounded
    }
}

/// Add one unit in the last place of a decimal string, carrying as needed
fn increment_last_digit(digits: &str) -> String {
    let mut chars: Vec<char> = digits.chars().collect();
    let mut carry = true;
    for c in chars.iter_mut().rev() {
        if !carry {
            break;
        }
        match *c {
            '.' => {}
            '9' => *c = '0',
            d => {
                *c = (d as u8 + 1) as char;
                carry = false;
            }
        }
    }
    let mut result: String = chars.into_iter().collect();
    if carry {
        result.insert(0, '1');
    }
    result
}

/// Insert `separator` between every group of three digits, counted from the right
fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + (len / 3) * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(ch);
    }
    result
}
