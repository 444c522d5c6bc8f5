//! Intrinsic value, time value and their total
//!
//! The time value here is a triangular shape used for display, peaking at
//! half-life. It is not a pricing model.

use serde::Serialize;

use crate::core::{Inputs, Moneyness, OptionType};

use super::classify;

/// Time value at half-life, where the triangle peaks
pub const PEAK_TIME_VALUE: f64 = 10.0;

/// Scale applied to the distance from the nearest life boundary
const TIME_VALUE_SCALE: f64 = 20.0;

/// Immediate exercise payoff, floored at zero
pub fn intrinsic_value(spot: f64, strike: f64, option_type: OptionType) -> f64 {
    option_type.intrinsic(spot, strike)
}

/// Triangular time value: 0 at T=0 and T=1, 10 at T=0.5
///
/// `max(0, (0.5 - |0.5 - T|) * 20)`. Values of `T` outside [0, 1] give 0.
pub fn time_value(time_to_maturity: f64) -> f64 {
    ((0.5 - (0.5 - time_to_maturity).abs()) * TIME_VALUE_SCALE).max(0.0)
}

pub fn total_value(intrinsic_value: f64, time_value: f64) -> f64 {
    intrinsic_value + time_value
}

/// Everything derived from one input snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedQuantities {
    pub intrinsic_value: f64,
    pub time_value: f64,
    pub total_value: f64,
    pub moneyness: Moneyness,
}

impl DerivedQuantities {
    pub fn from_inputs(inputs: &Inputs) -> Self {
        let intrinsic = intrinsic_value(inputs.spot, inputs.strike, inputs.option_type);
        let time = time_value(inputs.time_to_maturity);
        Self {
            intrinsic_value: intrinsic,
            time_value: time,
            total_value: total_value(intrinsic, time),
            moneyness: classify(inputs.spot, inputs.strike, inputs.option_type),
        }
    }
}
