//! Option type and moneyness definitions
//!
//! Vanilla call/put with its exercise payoff, and the four-way moneyness
//! classification shown by the explorer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ExplorerError, ExplorerResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Exercise payoff at the given underlying price, floored at zero
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Distance by which the option is in the money (negative when out)
    pub fn signed_distance(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => spot - strike,
            OptionType::Put => strike - spot,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OptionType {
    type Err = ExplorerError;

    fn from_str(s: &str) -> ExplorerResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(ExplorerError::invalid_input(format!(
                "unknown option type '{}', expected 'call' or 'put'",
                other
            ))),
        }
    }
}

/// Moneyness classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Moneyness {
    /// Out of the money: exercising now pays nothing
    #[serde(rename = "OTM")]
    Otm,
    /// At the money: spot equals strike
    #[serde(rename = "ATM")]
    Atm,
    /// In the money by no more than the deep threshold
    #[serde(rename = "ITM")]
    Itm,
    /// In the money by more than the deep threshold
    #[serde(rename = "Deep ITM")]
    DeepItm,
}

impl Moneyness {
    /// Full label for the readout
    pub fn label(&self) -> &'static str {
        match self {
            Moneyness::Otm => "Out of the Money (OTM)",
            Moneyness::Atm => "At the Money (ATM)",
            Moneyness::Itm => "In the Money (ITM)",
            Moneyness::DeepItm => "Deep In the Money (Deep ITM)",
        }
    }

    /// Short label
    pub fn short_label(&self) -> &'static str {
        match self {
            Moneyness::Otm => "OTM",
            Moneyness::Atm => "ATM",
            Moneyness::Itm => "ITM",
            Moneyness::DeepItm => "Deep ITM",
        }
    }

    /// Would exercising now pay out?
    pub fn is_in_the_money(&self) -> bool {
        matches!(self, Moneyness::Itm | Moneyness::DeepItm)
    }
}

impl fmt::Display for Moneyness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type() {
        assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);

        assert_eq!(OptionType::Call.signed_distance(90.0, 100.0), -10.0);
        assert_eq!(OptionType::Put.signed_distance(90.0, 100.0), 10.0);
    }

    #[test]
    fn test_parse_option_type() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" PUT ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("p".parse::<OptionType>().unwrap(), OptionType::Put);

        let err = "straddle".parse::<OptionType>().unwrap_err();
        assert!(matches!(err, ExplorerError::InvalidInput(_)));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&OptionType::Put).unwrap(), "\"put\"");
        assert_eq!(
            serde_json::to_string(&Moneyness::DeepItm).unwrap(),
            "\"Deep ITM\""
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Moneyness::DeepItm.label(), "Deep In the Money (Deep ITM)");
        assert_eq!(Moneyness::Atm.to_string(), "At the Money (ATM)");
        assert_eq!(Moneyness::DeepItm.short_label(), "Deep ITM");
        assert_eq!(Moneyness::Otm.short_label(), "OTM");
        assert!(Moneyness::Itm.is_in_the_money());
        assert!(!Moneyness::Atm.is_in_the_money());
    }
}
