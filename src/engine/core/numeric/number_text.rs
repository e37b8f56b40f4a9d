//! Parsing and printing of numeric cell text.
//!
//! Typed and delta encodings are only chosen when the decoder's printed form
//! of the number is byte-identical to the input text.

/// Integral floats below this magnitude print without a fractional part.
const INTEGRAL_PRINT_LIMIT: f64 = 1e16;

/// Parses a finite number. Empty text, `nan` and infinities are not numeric.
pub fn parse_numeric(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Text with a decimal point or exponent takes the float path.
pub fn has_float_syntax(s: &str) -> bool {
    s.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
}

/// Returns the integer when `s` is exactly its decimal rendering.
pub fn canonical_int(s: &str) -> Option<i64> {
    if has_float_syntax(s) {
        return None;
    }
    let v = s.parse::<i64>().ok()?;
    let mut buf = itoa::Buffer::new();
    (buf.format(v) == s).then_some(v)
}

/// Returns the float when `s` has float syntax and prints back unchanged.
pub fn canonical_float(s: &str) -> Option<f64> {
    if !has_float_syntax(s) {
        return None;
    }
    let v = parse_numeric(s)?;
    (format_float(v) == s).then_some(v)
}

pub fn format_int(v: i64) -> String {
    itoa::Buffer::new().format(v).to_string()
}

/// Prints integral values as plain integers and everything else in the
/// shortest form that parses back to the same `f64`.
pub fn format_float(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < INTEGRAL_PRINT_LIMIT {
        return format_int(v as i64);
    }
    ryu::Buffer::new().format(v).to_string()
}
