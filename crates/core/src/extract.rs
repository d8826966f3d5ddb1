//! Field recovery from rendered product-card text.
//!
//! The first generation of this storefront was a static page whose cards
//! carried their data only as display text (`Price: $20000`). The catalog
//! is still seeded from that card text, so this module preserves the
//! original recovery rules exactly:
//!
//! - the price line is the first description line containing the literal
//!   label `Price:`;
//! - within it, the price is the first `$` followed by a contiguous digit
//!   run. The run stops at ANY non-digit - including grouping separators,
//!   so `$20,000` yields 20. That truncation is part of the contract; a
//!   card that wants to be read back must render its price ungrouped.
//! - a card with no readable price degrades to [`Price::ZERO`] rather
//!   than failing.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::Price;

/// Literal label marking the price line of a card.
pub const PRICE_LABEL: &str = "Price:";

fn price_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$(\d+)").unwrap_or_else(|e| unreachable!("static regex: {e}")))
}

/// Extract the first `$<digits>` run from a piece of text.
///
/// Returns `None` when no currency symbol is directly followed by a digit.
#[must_use]
pub fn price_after_symbol(text: &str) -> Option<Price> {
    let captures = price_re().captures(text)?;
    let digits = captures.get(1)?.as_str();
    digits.parse::<i64>().ok().map(Price::new)
}

/// Scan description lines for the price.
///
/// The first line containing [`PRICE_LABEL`] wins; lines after it are not
/// consulted even if they would match. No matching line, or a matching
/// line without a readable amount, degrades to [`Price::ZERO`].
#[must_use]
pub fn price_from_lines<'a, I>(lines: I) -> Price
where
    I: IntoIterator<Item = &'a str>,
{
    for line in lines {
        if line.contains(PRICE_LABEL) {
            return price_after_symbol(line).unwrap_or(Price::ZERO);
        }
    }
    Price::ZERO
}

/// Read the value of the first line carrying the given label.
///
/// `labeled_field(lines, "Color:")` over `["Size: M", "Color: Blue"]`
/// yields `Some("Blue")`. Missing label yields `None`.
#[must_use]
pub fn labeled_field<'a, I>(lines: I, label: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .find_map(|line| line.split_once(label).map(|(_, value)| value.trim()))
}
