//! Boundary-layer input parsing.
//!
//! Form handlers collect raw text. This module converts it to numbers once,
//! at the boundary, so the resolver only ever sees finite floats: blank
//! fields are omitted from the assignment (never passed as zero) and
//! malformed text fails with a field-specific error before `resolve` runs.
//!
//! Values accept engineering SI suffixes, so "4.7k" and "100n" work the way
//! component values are usually written.

use crate::error::{ResolveError, Result};
use crate::resolver::Assignment;

/// Parse a raw field value with optional SI unit suffix.
///
/// Accepts plain decimals, scientific notation and a trailing suffix from
/// `p n u µ m k K M G`. Returns `None` for blank or malformed text.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (num_str, multiplier) = match text.chars().last() {
        Some(last) => {
            let mult = match last {
                'p' => 1e-12,
                'n' => 1e-9,
                'u' | 'µ' => 1e-6,
                'm' => 1e-3,
                'k' | 'K' => 1e3,
                'M' => 1e6,
                'G' => 1e9,
                _ => 1.0,
            };
            if mult != 1.0 {
                (&text[..text.len() - last.len_utf8()], mult)
            } else {
                (text, 1.0)
            }
        }
        None => (text, 1.0),
    };

    num_str.parse::<f64>().ok().map(|v| v * multiplier)
}

/// Build an assignment from raw `(field, text)` pairs.
///
/// Blank and whitespace-only fields are skipped; anything else must parse,
/// otherwise the first offending field is reported.
pub fn assignment_from_fields<'a, I>(fields: I) -> Result<Assignment>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut assignment = Assignment::new();
    for (field, text) in fields {
        if text.trim().is_empty() {
            continue;
        }
        match parse_value(text) {
            Some(value) => assignment = assignment.with(field, value),
            None => return Err(ResolveError::invalid_number(field, text.trim())),
        }
    }
    Ok(assignment)
}
