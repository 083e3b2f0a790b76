//! Reading a target resistance from user text.
//!
//! Accepted forms, tried in order:
//! - a plain number: `1000`, `4.7e3`
//! - a multiplier suffix: `220R`, `4.7k`, `1M`, `2.2G`
//! - a multiplier in place of the decimal mark: `2R2`, `4k7`, `1M5`
//! - with the `expr_input` feature, an arithmetic expression: `2*470`, `1e3/3`
//!
//! Spaces before the multiplier are allowed. A trailing `ohm`, `ohms` or `Ω` is ignored. Lower-case `m` is refused, it could mean milli or
//! mega.

use crate::error::{Error, Result};

fn multiplier(letter: char) -> Option<f64> {
    match letter {
        'R' | 'r' => Some(1.0),
        'k' | 'K' => Some(1e3),
        'M' => Some(1e6),
        'G' => Some(1e9),
        _ => None,
    }
}

fn strip_unit(s: &str) -> &str {
    let s = s.trim_end_matches(|c: char| c == 'Ω' || c == '\u{2126}');
    for unit in ["ohms", "ohm"] {
        if let Some(split) = s.len().checked_sub(unit.len()) {
            if s.is_char_boundary(split) && s[split..].eq_ignore_ascii_case(unit) {
                return s[..split].trim_end();
            }
        }
    }
    s.trim_end()
}

/// `4.7k`, `4k7`, `2R2` and friends.
fn parse_notation(s: &str) -> Option<f64> {
    let (pos, letter) = s.char_indices().find(|(_, c)| c.is_alphabetic())?;
    let scale = multiplier(letter)?;
    let head = s[..pos].trim_end();
    let tail = &s[pos + letter.len_utf8()..];
    if head.is_empty() {
        return None;
    }
    if tail.is_empty() {
        return head.parse::<f64>().ok().map(|v| v * scale);
    }
    let digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if !digits(head) || !digits(tail) {
        return None;
    }
    format!("{}.{}", head, tail)
        .parse::<f64>()
        .ok()
        .map(|v| v * scale)
}

#[cfg(feature = "expr_input")]
fn parse_expression(s: &str) -> Option<f64> {
    meval::eval_str(s).ok()
}

#[cfg(not(feature = "expr_input"))]
fn parse_expression(_s: &str) -> Option<f64> {
    None
}

/// Parses `input` into ohms. The returned value is not range-checked, the selector does that.
pub fn parse_target(input: &str) -> Result<f64> {
    let s = strip_unit(input.trim());
    if s.is_empty() {
        return Err(Error::TargetParse(input.trim().to_string()));
    }
    s.parse::<f64>()
        .ok()
        .or_else(|| parse_notation(s))
        .or_else(|| parse_expression(s))
        .ok_or_else(|| Error::TargetParse(input.trim().to_string()))
}
