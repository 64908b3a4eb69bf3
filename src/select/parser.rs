//! Selection expression parser.
//!
//! Grammar, case- and whitespace-insensitive:
//!
//! ```text
//! selection := "all" | part ("," part)*
//! part      := ""            (skipped)
//!            | n             (1-based)
//!            | a "-" b       (1-based, inclusive, a <= b)
//! ```

use std::collections::BTreeSet;
use std::fmt::Display;
use std::num::IntErrorKind;

use crate::domain::{RulesError, RulesResult};

/// Parse `input` against a list of `item_count` items.
///
/// Returns 0-based indices, ascending and without duplicates. Every failure is
/// a [`RulesError::InvalidSelection`] whose message is fit to show the
/// operator.
pub fn parse_selection(input: &str, item_count: usize) -> RulesResult<Vec<usize>> {
    if item_count == 0 {
        return Err(invalid("No rules available for selection".to_string()));
    }

    let input = input.trim().to_lowercase();
    if input == "all" {
        return Ok((0..item_count).collect());
    }

    let mut indices = BTreeSet::new();
    for part in input.split(',').map(str::trim) {
        if part.is_empty() {
            continue;
        }

        if let Some((start, end)) = part.split_once('-') {
            let (start_tok, end_tok) = (start.trim(), end.trim());
            let (start, end) = match (parse_literal(start_tok), parse_literal(end_tok)) {
                (Err(Literal::Malformed), _) | (_, Err(Literal::Malformed)) => {
                    return Err(invalid(format!("Invalid range format: '{part}'")));
                }
                (start, end) => (
                    in_bounds(start, start_tok, item_count)?,
                    in_bounds(end, end_tok, item_count)?,
                ),
            };
            if start > end {
                return Err(invalid(format!(
                    "Invalid range '{part}': start must be <= end"
                )));
            }
            indices.extend(start - 1..end);
        } else {
            let parsed = parse_literal(part);
            if let Err(Literal::Malformed) = parsed {
                return Err(invalid(format!("Invalid number: '{part}'")));
            }
            indices.insert(in_bounds(parsed, part, item_count)? - 1);
        }
    }

    if indices.is_empty() {
        return Err(invalid("No valid rule numbers found in input".to_string()));
    }

    Ok(indices.into_iter().collect())
}

/// Why a token failed to parse as a rule number.
enum Literal {
    Malformed,
    TooLarge,
}

fn parse_literal(token: &str) -> Result<usize, Literal> {
    token.parse::<usize>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => Literal::TooLarge,
        _ => Literal::Malformed,
    })
}

/// Require a 1-based rule number within `1..=item_count`. Digit strings too
/// large for `usize` are out of range as well.
fn in_bounds(parsed: Result<usize, Literal>, token: &str, item_count: usize) -> RulesResult<usize> {
    match parsed {
        Ok(num) if (1..=item_count).contains(&num) => Ok(num),
        Ok(num) => Err(out_of_range(num, item_count)),
        Err(_) => Err(out_of_range(token, item_count)),
    }
}

fn out_of_range(num: impl Display, item_count: usize) -> RulesError {
    invalid(format!("Rule number {num} is out of range (valid: 1-{item_count})"))
}

fn invalid(message: String) -> RulesError {
    RulesError::InvalidSelection(message)
}
