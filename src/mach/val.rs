//! Conversions between operand strings and numbers.

/// Significant decimal digits kept in an arithmetic result.
pub const PRECISION: usize = 12;

/// Parses the longest leading numeral of `s`.
/// A numeral too large for `f64` reads as infinity.
pub fn parse(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut end = s.len();
    while end > 0 {
        if s.is_char_boundary(end) {
            if let Ok(n) = s[..end].parse::<f64>() {
                if s[..end].bytes().all(|b| b.is_ascii_digit() || b"+-.eE".contains(&b)) {
                    return Some(n);
                }
            }
        }
        end -= 1;
    }
    None
}

/// Rounds to `PRECISION` significant digits.
pub fn round(n: f64) -> f64 {
    if !n.is_finite() || n == 0.0 {
        return n;
    }
    format!("{:.*e}", PRECISION - 1, n).parse().unwrap_or(n)
}

/// Shortest decimal string that reads back as `n`.
/// Plain notation for magnitudes in `1e-7..1e21`, exponent notation outside.
pub fn format(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n < 0.0 {
        return format!("-{}", format(-n));
    }
    let exp_form = format!("{:e}", n);
    let (mantissa, exp) = match exp_form.split_once('e') {
        Some(parts) => parts,
        None => return exp_form.clone(),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exp: i32 = exp.parse().unwrap_or(0);
    let k = digits.len() as i32;
    let point = exp + 1;
    let mut s = String::new();
    if k <= point && point <= 21 {
        s.push_str(&digits);
        s.extend(std::iter::repeat('0').take((point - k) as usize));
    } else if 0 < point && point <= 21 {
        s.push_str(&digits[..point as usize]);
        s.push('.');
        s.push_str(&digits[point as usize..]);
    } else if -6 < point && point <= 0 {
        s.push_str("0.");
        s.extend(std::iter::repeat('0').take(-point as usize));
        s.push_str(&digits);
    } else {
        s.push_str(&digits[..1]);
        if k > 1 {
            s.push('.');
            s.push_str(&digits[1..]);
        }
        s.push('e');
        s.push(if exp < 0 { '-' } else { '+' });
        s.push_str(&exp.abs().to_string());
    }
    s
}
