//! Text readout
//!
//! Formats the derived quantities the way the explorer's info box shows them,
//! including the payoff formula with the current numbers substituted in.

use serde::Serialize;

use crate::core::{Inputs, OptionType};

use super::DerivedQuantities;

/// Formatted text for one input snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readout {
    pub moneyness: String,
    pub intrinsic_value: String,
    pub time_value: String,
    pub total_value: String,
    pub formula: String,
}

impl Readout {
    pub fn new(inputs: &Inputs, derived: &DerivedQuantities) -> Self {
        Self {
            moneyness: derived.moneyness.label().to_string(),
            intrinsic_value: format!("{:.2}", derived.intrinsic_value),
            time_value: format!("{:.2}", derived.time_value),
            total_value: format!("{:.2}", derived.total_value),
            formula: payoff_formula(inputs, derived.intrinsic_value),
        }
    }

    /// Readout as labelled lines, in display order
    pub fn lines(&self) -> Vec<String> {
        vec![
            self.moneyness.clone(),
            format!("Intrinsic Value: {}", self.intrinsic_value),
            self.formula.clone(),
            format!("Time Value: {}", self.time_value),
            format!("Total Option Value: {}", self.total_value),
            format!("Moneyness: {}", self.moneyness),
        ]
    }
}

/// `Payoff = max(0, S - X) = max(0, 130 - 100) = 30.00`
pub fn payoff_formula(inputs: &Inputs, intrinsic_value: f64) -> String {
    let (symbolic, numeric) = match inputs.option_type {
        OptionType::Call => (
            "S - X",
            format!("{} - {}", inputs.spot, inputs.strike),
        ),
        OptionType::Put => (
            "X - S",
            format!("{} - {}", inputs.strike, inputs.spot),
        ),
    };
    format!(
        "Payoff = max(0, {}) = max(0, {}) = {:.2}",
        symbolic, numeric, intrinsic_value
    )
}
