// ABOUTME: Price string parsing for displayed tier prices.
// ABOUTME: Pulls the first numeric run out of the text, skipping currency symbols and mis-encoded prefixes.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::error::{Result, ScrapeError};

static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d[\d,]*(?:\.\d+)?|\.\d+)").expect("valid amount regex"));

/// Parses a displayed price such as `£10.99` into a number rounded to two
/// decimal places.
///
/// The first run of digits (with grouping commas and an optional decimal
/// part) is taken as the amount, so a pound sign that went through a
/// UTF-8/Latin-1 round trip (`Â£10.99`) and trailing qualifiers (`£9.99*`)
/// both parse.
///
/// Only empty input is an error. Text without any amount, or an amount too
/// large to represent, yields `NaN` so the rest of the page still extracts.
pub fn parse_price(s: &str) -> Result<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ScrapeError::invalid_input(
            s,
            "ParsePrice",
            Some(anyhow::anyhow!("no string passed")),
        ));
    }

    let Some(amount) = AMOUNT_RE.captures(trimmed).and_then(|caps| caps.get(1)) else {
        warn!(price = %trimmed, "no amount found in price");
        return Ok(f64::NAN);
    };

    let value = amount
        .as_str()
        .replace(',', "")
        .parse::<f64>()
        .map(round_to_cents)
        .unwrap_or(f64::NAN);

    if !value.is_finite() {
        warn!(price = %trimmed, "price amount is not a finite number");
        return Ok(f64::NAN);
    }

    Ok(value)
}

fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    }
}
