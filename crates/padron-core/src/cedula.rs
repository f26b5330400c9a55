//! Cédula normalization.
//!
//! Users type identity numbers in many shapes: with or without the zeros
//! that pad each group, with dashes or spaces between groups, or with an
//! extra leading zero. The backend only knows the 9-digit `PMMMMNNNN` form,
//! so everything is rewritten into that form before a lookup. Input that
//! does not match a known shape is passed through (trimmed) and left for the
//! backend to reject.

use std::fmt;

/// Length of a canonical identity.
pub const CANONICAL_LEN: usize = 9;

/// Width every group after the first is padded to in segmented input.
const GROUP_WIDTH: usize = 4;

/// The shape a raw input was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CedulaForm {
    /// Nothing left after trimming.
    Empty,
    /// Only ASCII digits, `len` of them.
    Digits { len: usize },
    /// Groups separated by spaces and/or dashes.
    Segmented { parts: usize },
}

impl CedulaForm {
    /// Whether normalization rewrites input of this form.
    pub fn is_rewritten(&self) -> bool {
        match *self {
            CedulaForm::Empty => false,
            CedulaForm::Digits { len } => matches!(len, 7 | 8 | 10),
            CedulaForm::Segmented { parts } => matches!(parts, 2 | 3),
        }
    }
}

impl fmt::Display for CedulaForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CedulaForm::Empty => write!(f, "empty"),
            CedulaForm::Digits { len } => write!(f, "{} digits", len),
            CedulaForm::Segmented { parts } => write!(f, "{} segments", parts),
        }
    }
}

/// Classify a raw input without rewriting it.
pub fn classify(raw: &str) -> CedulaForm {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        CedulaForm::Empty
    } else if is_all_digits(trimmed) {
        CedulaForm::Digits { len: trimmed.len() }
    } else {
        CedulaForm::Segmented {
            parts: split_segments(trimmed).len(),
        }
    }
}

/// Rewrite a raw input into the canonical identity.
///
/// # Example
///
/// ```rust
/// use padron_core::cedula::normalize;
///
/// assert_eq!(normalize(" 1-2345-6789 "), "123456789");
/// assert_eq!(normalize("12345678"), "102345678");
/// assert_eq!(normalize("1-2-3-4"), "1-2-3-4");
/// assert_eq!(normalize("abc"), "abc");
/// ```
pub fn normalize(raw: &str) -> String {
    normalize_with_form(raw).0
}

/// Rewrite a raw input and report the form it was recognized as.
pub fn normalize_with_form(raw: &str) -> (String, CedulaForm) {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return (String::new(), CedulaForm::Empty);
    }

    if is_all_digits(trimmed) {
        let form = CedulaForm::Digits { len: trimmed.len() };
        return (normalize_digits(trimmed), form);
    }

    let parts = split_segments(trimmed);
    let form = CedulaForm::Segmented { parts: parts.len() };
    (normalize_segments(trimmed, &parts), form)
}

/// Whether a value is already a canonical identity.
pub fn is_canonical(value: &str) -> bool {
    value.len() == CANONICAL_LEN && is_all_digits(value)
}

fn is_all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn is_separator(c: char) -> bool {
    c == '-' || c == ' '
}

fn split_segments(s: &str) -> Vec<&str> {
    s.split(is_separator).filter(|part| !part.is_empty()).collect()
}

// Callers guarantee ASCII digits, so byte slicing is on char boundaries.
fn normalize_digits(digits: &str) -> String {
    match digits.len() {
        // PMMMNNN
        7 => format!("{}0{}0{}", &digits[..1], &digits[1..4], &digits[4..]),
        // PMMMNNNN
        8 => format!("{}0{}", &digits[..1], &digits[1..]),
        // 0PMMMMNNNN
        10 => digits[1..].to_string(),
        _ => digits.to_string(),
    }
}

fn normalize_segments(trimmed: &str, parts: &[&str]) -> String {
    if !matches!(parts.len(), 2 | 3) {
        return trimmed.to_string();
    }

    let mut out = String::with_capacity(CANONICAL_LEN);
    out.push_str(parts[0].trim_start_matches('0'));
    for part in &parts[1..] {
        let width = part.chars().count();
        for _ in width..GROUP_WIDTH {
            out.push('0');
        }
        out.push_str(part);
    }
    out
}
