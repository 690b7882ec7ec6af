//! Text and number forms of untyped request values
//!
//! Both request fields are read loosely: a label is looked up by its text
//! form, and an intensity compares by the number its text form spells.

use serde_json::Value;

/// Text form used for labels and for numeric comparison
///
/// Arrays join their elements with `,` (null elements become empty), objects
/// read as `[object Object]`, integral numbers drop the fraction.
pub(crate) fn text_form(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(v) => number_text(v),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => text_form(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Shortest round-trip decimal, switching to exponent form outside 1e-6..1e21
fn number_text(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let magnitude = v.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let exp = format!("{:e}", v);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        format!("{}", v)
    }
}

/// Parse text as a number
///
/// Surrounding whitespace is ignored and blank text is zero. Accepts signed
/// decimal and exponent forms, `Infinity`, and unsigned `0x`/`0o`/`0b`
/// integers. Anything else (including `inf` and `nan`) is `None`.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return Some(0.0);
    }

    if let Some(value) = parse_radix(trimmed) {
        return value;
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else if is_decimal_literal(unsigned) {
        unsigned.parse::<f64>().ok()?
    } else {
        return None;
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// `Some(parsed)` when the text carries a radix prefix, `None` otherwise
fn parse_radix(text: &str) -> Option<Option<f64>> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(None);
    }
    Some(digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    }))
}

fn is_decimal_literal(text: &str) -> bool {
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => (&text[..i], Some(&text[i + 1..])),
        None => (text, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (mantissa, None),
    };

    if !all_digits(int_part) || !frac_part.map_or(true, all_digits) {
        return false;
    }
    if int_part.is_empty() && frac_part.map_or(true, str::is_empty) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(exp);
            !digits.is_empty() && all_digits(digits)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_form_of_composites() {
        assert_eq!(text_form(&json!({"a": 1})), "[object Object]");
        assert_eq!(text_form(&json!(["a", "b"])), "a,b");
        assert_eq!(text_form(&json!(["fear"])), "fear");
        assert_eq!(text_form(&json!([1, null, [2, 3]])), "1,,2,3");
        assert_eq!(text_form(&json!([])), "");
    }

    #[test]
    fn test_text_form_of_numbers() {
        assert_eq!(text_form(&json!(2.0)), "2");
        assert_eq!(text_form(&json!(-0.0)), "0");
        assert_eq!(text_form(&json!(7.5)), "7.5");
        assert_eq!(text_form(&json!(42)), "42");
        assert_eq!(text_form(&json!(1e21)), "1e+21");
        assert_eq!(text_form(&json!(1.5e-7)), "1.5e-7");
        assert_eq!(text_form(&json!(true)), "true");
        assert_eq!(text_form(&Value::Null), "null");
    }

    #[test]
    fn test_parse_decimal_forms() {
        assert_eq!(parse_number("2"), Some(2.0));
        assert_eq!(parse_number(" 9.5\n"), Some(9.5));
        assert_eq!(parse_number("-4"), Some(-4.0));
        assert_eq!(parse_number("+3"), Some(3.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("1e1"), Some(10.0));
        assert_eq!(parse_number("2E-1"), Some(0.2));
        assert_eq!(parse_number("   "), Some(0.0));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_parse_radix_forms() {
        assert_eq!(parse_number("0x2"), Some(2.0));
        assert_eq!(parse_number("0XfF"), Some(255.0));
        assert_eq!(parse_number("0b1"), Some(1.0));
        assert_eq!(parse_number("0o7"), Some(7.0));
        assert_eq!(parse_number("0x"), None);
        assert_eq!(parse_number("0b2"), None);
        assert_eq!(parse_number("-0x2"), None);
        assert_eq!(parse_number("0x+2"), None);
    }

    #[test]
    fn test_parse_rejects_other_text() {
        for text in ["inf", "-inf", "nan", "NaN", "infinity", "abc", "1e", ".", "1.2.3", "- 1", "12px"] {
            assert_eq!(parse_number(text), None, "{:?}", text);
        }
    }
}
