//! Core data types for the moneyness explorer
//!
//! Defines fundamental types:
//! - OptionType: call/put with its exercise payoff
//! - Moneyness: OTM / ATM / ITM / Deep ITM classification
//! - Inputs: the four user-controlled scalars and their bounds
//! - ExplorerError: crate-wide error type

pub mod error;
pub mod inputs;
pub mod option;

pub use error::*;
pub use inputs::*;
pub use option::*;
