//! # Moneyness Explorer
//!
//! Explore how an option's intrinsic value, time value and moneyness change
//! as spot, strike, time to maturity and option type are varied.
//!
//! ## Overview
//!
//! The explorer holds four inputs and derives from them:
//! - **Intrinsic value**: `max(0, S - X)` for calls, `max(0, X - S)` for puts
//! - **Time value**: a triangular shape peaking at 10 at half-life
//! - **Moneyness**: OTM / ATM / ITM / Deep ITM (more than 20 in the money)
//! - **Payoff curve**: exercise payoff at every unit price in `[X - 50, X + 50]`,
//!   clamped at zero
//!
//! ## Usage
//!
//! ```rust
//! use moneyness_explorer::prelude::*;
//!
//! let mut engine = MoneynessEngine::new();
//! engine.set_spot(130.0).unwrap();
//!
//! assert_eq!(engine.moneyness(), Moneyness::DeepItm);
//! assert_eq!(engine.total_value(), 40.0);
//! assert_eq!(engine.payoff_series().len(), 101);
//! ```
//!
//! ## What This Does NOT Do
//!
//! - Price options (no Black-Scholes, trees or Greeks)
//! - Fetch market data or persist anything

pub mod config;
pub mod core;
pub mod engine;
pub mod logging;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::config::{ExplorerConfig, GuiConfig};

    pub use crate::core::{
        ExplorerError, ExplorerResult, Inputs, Moneyness, OptionType, MAX_MATURITY, MAX_PRICE,
        MIN_MATURITY, MIN_PRICE,
    };

    pub use crate::engine::{
        classify, color_for, intrinsic_value, payoff_series, payoff_window, time_value,
        total_value, DerivedQuantities, DisplayColor, MoneynessEngine, PayoffPoint,
        PayoffSeries, Readout, Snapshot,
    };

    pub use crate::logging::init_tracing;
}

pub use crate::core::{ExplorerError, ExplorerResult};
pub use crate::engine::MoneynessEngine;
