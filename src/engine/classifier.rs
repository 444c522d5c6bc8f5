//! Moneyness classifier

use crate::core::{Moneyness, OptionType};

/// In-the-money distance above which an option counts as deep in the money
pub const DEEP_ITM_THRESHOLD: f64 = 20.0;

/// Classify spot against strike. First matching rule wins:
/// out of the money, then exact equality (ATM), then distance <= 20 (ITM),
/// otherwise Deep ITM.
pub fn classify(spot: f64, strike: f64, option_type: OptionType) -> Moneyness {
    let distance = option_type.signed_distance(spot, strike);

    if distance < 0.0 {
        Moneyness::Otm
    } else if spot == strike {
        Moneyness::Atm
    } else if distance <= DEEP_ITM_THRESHOLD {
        Moneyness::Itm
    } else {
        Moneyness::DeepItm
    }
}
