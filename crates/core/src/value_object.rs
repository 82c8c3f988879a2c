//! Value objects: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. A product line item is assembled from these once its raw
/// text has been validated, so holding a `Quantity` or `Price` means the input
/// was accepted.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Number of units in stock (non-negative).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub fn new(units: u64) -> Self {
        Self(units)
    }

    pub fn units(&self) -> u64 {
        self.0
    }

    /// Parse raw form text.
    ///
    /// Surrounding whitespace is ignored; anything else that is not a whole
    /// non-negative number is rejected.
    pub fn parse(input: &str) -> ValidationResult<Self> {
        input
            .trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ValidationError::invalid_quantity(input))
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Quantity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Unit price (non-negative decimal amount, no currency attached).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Number of decimal places shown when a price is rendered as currency.
    pub const DISPLAY_SCALE: u32 = 2;

    /// Build a price from an already-valid amount.
    ///
    /// Returns `None` for negative amounts and for amounts too large to be
    /// shown with [`Price::DISPLAY_SCALE`] decimals.
    pub fn new(amount: Decimal) -> Option<Self> {
        if amount.is_sign_negative() {
            return None;
        }
        Self::display_amount(amount)?;
        Some(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Parse raw form text as a plain decimal (`20`, `20.5`, `20.50`, `+3`).
    ///
    /// Signs other than `+`, exponents, digit separators and anything else
    /// outside `[+]digits[.digits]` are rejected.
    pub fn parse(input: &str) -> ValidationResult<Self> {
        let text = input.trim();
        if !is_plain_decimal(text) {
            return Err(ValidationError::invalid_price(input));
        }
        let amount = Decimal::from_str(text.trim_start_matches('+'))
            .map_err(|_| ValidationError::invalid_price(input))?;
        Self::new(amount).ok_or_else(|| ValidationError::invalid_price(input))
    }

    /// Render as `"{prefix} {amount}"` with exactly two decimals.
    ///
    /// Midpoints round away from zero (`1.005` becomes `1.01`).
    pub fn format_currency(&self, prefix: &str) -> String {
        match Self::display_amount(self.0) {
            Some(amount) => format!("{prefix} {amount}"),
            // Unreachable through `new`/`parse`; only a deserialized value can get here.
            None => format!("{prefix} {}", self.0),
        }
    }

    /// `amount` rounded to exactly two decimals, if the mantissa has room for them.
    fn display_amount(amount: Decimal) -> Option<Decimal> {
        let mut rounded = amount
            .round_dp_with_strategy(Self::DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::DISPLAY_SCALE);
        (rounded.scale() == Self::DISPLAY_SCALE).then_some(rounded)
    }
}

/// `[+]digits[.digits]` with at least one digit overall.
fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix('+').unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && all_digits(fraction) && !(whole.is_empty() && fraction.is_empty())
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Price {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
