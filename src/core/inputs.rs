//! User-controlled inputs
//!
//! The four scalars the explorer is driven by. Values enter through
//! [`Inputs::new`] or the engine setters, both of which reject non-finite or
//! out-of-range numbers instead of clamping them.

use serde::{Deserialize, Serialize};

use super::{ExplorerError, ExplorerResult, OptionType};

/// Lowest spot/strike price accepted
pub const MIN_PRICE: f64 = 0.0;
/// Highest spot/strike price accepted
pub const MAX_PRICE: f64 = 200.0;
/// Time to maturity as a fraction of total life remaining
pub const MIN_MATURITY: f64 = 0.0;
pub const MAX_MATURITY: f64 = 1.0;

/// Current input snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Exercise price (X)
    pub strike: f64,
    /// Fraction of the option's life remaining, in [0, 1]
    pub time_to_maturity: f64,
    pub option_type: OptionType,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            time_to_maturity: 0.5,
            option_type: OptionType::Call,
        }
    }
}

impl Inputs {
    /// Create a validated input set
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        option_type: OptionType,
    ) -> ExplorerResult<Self> {
        let inputs = Self {
            spot,
            strike,
            time_to_maturity,
            option_type,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Check every field against its bounds
    pub fn validate(&self) -> ExplorerResult<()> {
        check_price("spot", self.spot)?;
        check_price("strike", self.strike)?;
        check_maturity(self.time_to_maturity)?;
        Ok(())
    }
}

pub(crate) fn check_price(name: &str, value: f64) -> ExplorerResult<()> {
    check_range(name, value, MIN_PRICE, MAX_PRICE)
}

pub(crate) fn check_maturity(value: f64) -> ExplorerResult<()> {
    check_range("time to maturity", value, MIN_MATURITY, MAX_MATURITY)
}

fn check_range(name: &str, value: f64, lo: f64, hi: f64) -> ExplorerResult<()> {
    if !value.is_finite() {
        return Err(ExplorerError::invalid_input(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    if value < lo || value > hi {
        return Err(ExplorerError::invalid_input(format!(
            "{} {} outside [{}, {}]",
            name, value, lo, hi
        )));
    }
    Ok(())
}
