//! # Code Emission Helpers
//!
//! Formatting of numbers, vectors and call lists in the generated program.
//! Every formatter is a pure function of its input so the output text is
//! byte-stable.

use config::constants::approx_zero;

/// Format a number as a JavaScript literal.
///
/// Integral values print without a fractional part; values within epsilon of
/// zero (including `-0`) print as `0`.
///
/// ```rust
/// use scad_transpiler::emit::number;
///
/// assert_eq!(number(10.0), "10");
/// assert_eq!(number(-0.0), "0");
/// assert_eq!(number(2.5), "2.5");
/// ```
pub fn number(value: f64) -> String {
    if approx_zero(value) {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    format!("{value}")
}

/// Format a boolean literal.
pub fn boolean(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Format a numeric array literal: `[1, 2, 3]`.
pub fn vector(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| number(*v)).collect();
    format!("[{}]", items.join(", "))
}

/// Format a JavaScript string literal with double quotes.
pub fn string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Indent every line of `code` by two spaces.
pub fn indent(code: &str) -> String {
    code.lines()
        .map(|line| if line.is_empty() { String::new() } else { format!("  {line}") })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a multi-line array of expressions:
///
/// ```text
/// [
///   a,
///   b
/// ]
/// ```
pub fn list(items: &[String]) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    let body: Vec<String> = items.iter().map(|item| indent(item)).collect();
    format!("[\n{}\n]", body.join(",\n"))
}
