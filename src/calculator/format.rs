//! Number rendering for the display.
//!
//! Results are shown the way a JVM prints a double: the shortest digits that
//! round-trip, plain notation with at least one fractional digit between
//! `1e-3` and `1e7`, and `d.dddE<exp>` notation outside that range.

/// Magnitudes in this range are rendered without an exponent.
const PLAIN_RANGE: std::ops::Range<f64> = 1e-3..1e7;

/// Render a value as display text.
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    if value == 0.0 {
        let text = if value.is_sign_negative() { "-0.0" } else { "0.0" };
        return text.to_string();
    }

    let magnitude = value.abs();

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e6".
    let scientific = format!("{:e}", magnitude);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if PLAIN_RANGE.contains(&magnitude) {
        plain_notation(&digits, exponent)
    } else {
        exponent_notation(&digits, exponent)
    };

    if value.is_sign_negative() {
        format!("-{}", body)
    } else {
        body
    }
}

/// `digits` is `d1 d2 ...` with value `d1.d2... * 10^exponent`.
fn plain_notation(digits: &str, exponent: i32) -> String {
    if exponent >= 0 {
        let int_len = exponent as usize + 1;
        if digits.len() <= int_len {
            format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
        } else {
            let (int_part, frac_part) = digits.split_at(int_len);
            format!("{}.{}", int_part, frac_part)
        }
    } else {
        let leading_zeros = (-exponent - 1) as usize;
        format!("0.{}{}", "0".repeat(leading_zeros), digits)
    }
}

fn exponent_notation(digits: &str, exponent: i32) -> String {
    let (head, tail) = digits.split_at(1);
    let tail = if tail.is_empty() { "0" } else { tail };
    format!("{}.{}E{}", head, tail, exponent)
}
