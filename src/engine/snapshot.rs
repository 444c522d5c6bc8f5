//! Serializable view of the explorer state

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::{ExplorerResult, Inputs};

use super::{DerivedQuantities, DisplayColor, PayoffPoint, PayoffSeries, Readout};

/// Inputs and everything derived from them at one instant
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub inputs: Inputs,
    pub derived: DerivedQuantities,
    pub readout: Readout,
    pub color: DisplayColor,
    /// Highlighted (spot, payoff at spot) point
    pub marker: PayoffPoint,
    pub payoff: PayoffSeries,
    pub timestamp: DateTime<Utc>,
}

impl Snapshot {
    pub fn to_json_pretty(&self) -> ExplorerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
