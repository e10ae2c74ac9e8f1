//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are exact [`Decimal`]s. Display follows Russian number formatting
//! (no-break space between thousands, comma before at most three fraction
//! digits) and ends with the ruble sign.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Thousands separator used by the ru locale.
const GROUP_SEPARATOR: char = '\u{a0}';

/// Fraction digits kept when displaying an amount.
const DISPLAY_FRACTION_DIGITS: u32 = 3;

/// Symbol appended to every displayed price.
pub const RUBLE_SIGN: &str = "₽";

/// A price in rubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    /// Amount in rubles, not kopecks.
    pub amount: Decimal,
}

impl Price {
    /// Create a price in rubles.
    #[must_use]
    pub const fn rubles(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Format for display (e.g., "1 020 ₽").
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }

    /// Format as a per-unit price (e.g., "150 ₽/кг").
    #[must_use]
    pub fn per_unit(&self, unit: &str) -> String {
        format!("{self}/{unit}")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {RUBLE_SIGN}", format_amount(self.amount))
    }
}

/// Format an amount with grouped thousands and a comma decimal separator.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(DISPLAY_FRACTION_DIGITS).normalize();
    let digits = rounded.abs().to_string();
    let (integer, fraction) = digits
        .split_once('.')
        .map_or((digits.as_str(), None), |(i, f)| (i, Some(f)));

    let mut out = String::with_capacity(digits.len() + integer.len() / 3 + 2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push(',');
        out.push_str(fraction);
    }
    out
}
