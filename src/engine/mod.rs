//! Moneyness engine
//!
//! Derives intrinsic value, time value, moneyness, accent color and the
//! payoff curve from the four user inputs.
//!
//! All derivations are pure and recomputed from the current [`Inputs`] on
//! every read. [`MoneynessEngine`] owns the inputs and is the only place
//! they are changed.

mod classifier;
mod color;
mod payoff;
mod readout;
mod snapshot;
mod valuation;

pub use classifier::*;
pub use color::*;
pub use payoff::*;
pub use readout::*;
pub use snapshot::*;
pub use valuation::*;

use chrono::Utc;
use tracing::{debug, warn};

use crate::core::{
    inputs::{check_maturity, check_price},
    ExplorerResult, Inputs, Moneyness, OptionType,
};

/// Holds the current inputs and derives all outputs from them
#[derive(Debug, Clone, Default)]
pub struct MoneynessEngine {
    inputs: Inputs,
}

impl MoneynessEngine {
    /// Engine at the default inputs (S=100, X=100, T=0.5, Call)
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine at the given inputs, validated first
    pub fn with_inputs(inputs: Inputs) -> ExplorerResult<Self> {
        inputs.validate()?;
        Ok(Self { inputs })
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// Replace all four inputs at once. Nothing changes if any is invalid.
    pub fn set_inputs(&mut self, inputs: Inputs) -> ExplorerResult<()> {
        if let Err(e) = inputs.validate() {
            warn!(error = %e, "rejected inputs");
            return Err(e);
        }
        self.inputs = inputs;
        debug!(?inputs, "inputs replaced");
        Ok(())
    }

    pub fn set_spot(&mut self, spot: f64) -> ExplorerResult<()> {
        if let Err(e) = check_price("spot", spot) {
            warn!(error = %e, "rejected spot");
            return Err(e);
        }
        self.inputs.spot = spot;
        debug!(spot, "spot updated");
        Ok(())
    }

    pub fn set_strike(&mut self, strike: f64) -> ExplorerResult<()> {
        if let Err(e) = check_price("strike", strike) {
            warn!(error = %e, "rejected strike");
            return Err(e);
        }
        self.inputs.strike = strike;
        debug!(strike, "strike updated");
        Ok(())
    }

    pub fn set_time_to_maturity(&mut self, time_to_maturity: f64) -> ExplorerResult<()> {
        if let Err(e) = check_maturity(time_to_maturity) {
            warn!(error = %e, "rejected time to maturity");
            return Err(e);
        }
        self.inputs.time_to_maturity = time_to_maturity;
        debug!(time_to_maturity, "time to maturity updated");
        Ok(())
    }

    pub fn set_option_type(&mut self, option_type: OptionType) {
        self.inputs.option_type = option_type;
        debug!(%option_type, "option type updated");
    }

    pub fn intrinsic_value(&self) -> f64 {
        intrinsic_value(self.inputs.spot, self.inputs.strike, self.inputs.option_type)
    }

    pub fn time_value(&self) -> f64 {
        time_value(self.inputs.time_to_maturity)
    }

    pub fn total_value(&self) -> f64 {
        total_value(self.intrinsic_value(), self.time_value())
    }

    pub fn moneyness(&self) -> Moneyness {
        classify(self.inputs.spot, self.inputs.strike, self.inputs.option_type)
    }

    pub fn derived(&self) -> DerivedQuantities {
        DerivedQuantities::from_inputs(&self.inputs)
    }

    pub fn payoff_series(&self) -> PayoffSeries {
        payoff_series(self.inputs.strike, self.inputs.option_type)
    }

    /// The highlighted point: spot and the payoff at spot
    pub fn marker(&self) -> PayoffPoint {
        PayoffPoint::new(self.inputs.spot, self.intrinsic_value())
    }

    /// The marker if spot lies inside the charted window
    pub fn visible_marker(&self) -> Option<PayoffPoint> {
        self.payoff_series().point_at(self.inputs.spot)
    }

    pub fn color(&self) -> DisplayColor {
        color_for(self.moneyness())
    }

    pub fn readout(&self) -> Readout {
        Readout::new(&self.inputs, &self.derived())
    }

    pub fn snapshot(&self) -> Snapshot {
        let derived = self.derived();
        Snapshot {
            inputs: self.inputs,
            derived,
            readout: Readout::new(&self.inputs, &derived),
            color: color_for(derived.moneyness),
            marker: self.marker(),
            payoff: self.payoff_series(),
            timestamp: Utc::now(),
        }
    }
}
