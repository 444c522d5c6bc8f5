//! Property tests for the pure derivations.

use moneyness_explorer::prelude::*;
use proptest::prelude::*;

fn price() -> impl Strategy<Value = f64> {
    0.0..=MAX_PRICE
}

fn whole_price() -> impl Strategy<Value = u32> {
    0u32..=200
}

fn maturity() -> impl Strategy<Value = f64> {
    0.0..=MAX_MATURITY
}

fn option_type() -> impl Strategy<Value = OptionType> {
    prop_oneof![Just(OptionType::Call), Just(OptionType::Put)]
}

#[test]
fn time_value_on_slider_grid() {
    assert_eq!(time_value(0.0), 0.0);
    assert_eq!(time_value(0.5), 10.0);
    assert_eq!(time_value(1.0), 0.0);

    // The maturity slider moves in steps of 0.01; compare what the readout shows
    for k in 0..=100u32 {
        let t = k as f64 / 100.0;
        let mirrored = (100 - k) as f64 / 100.0;
        let expected = (50 - (50 - k as i32).abs()) as f64 / 5.0;

        let shown = format!("{:.2}", time_value(t));
        assert_eq!(shown, format!("{:.2}", time_value(mirrored)), "T = {t}");
        assert_eq!(shown, format!("{:.2}", expected), "T = {t}");
    }
}

proptest! {
    #[test]
    fn intrinsic_matches_exercise_payoff(spot in price(), strike in price()) {
        prop_assert_eq!(intrinsic_value(spot, strike, OptionType::Call), (spot - strike).max(0.0));
        prop_assert_eq!(intrinsic_value(spot, strike, OptionType::Put), (strike - spot).max(0.0));
        prop_assert_eq!(
            intrinsic_value(spot, strike, OptionType::Put),
            intrinsic_value(strike, spot, OptionType::Call)
        );
    }

    #[test]
    fn time_value_is_symmetric_and_bounded(t in maturity()) {
        let tv = time_value(t);
        prop_assert!(tv >= 0.0);
        prop_assert!(tv <= 10.0);
        prop_assert!((tv - time_value(1.0 - t)).abs() < 1e-9);
    }

    #[test]
    fn total_is_intrinsic_plus_time(
        spot in price(),
        strike in price(),
        t in maturity(),
        kind in option_type(),
    ) {
        let inputs = Inputs::new(spot, strike, t, kind).unwrap();
        let derived = DerivedQuantities::from_inputs(&inputs);
        prop_assert_eq!(derived.total_value, derived.intrinsic_value + derived.time_value);
        prop_assert!(derived.total_value >= derived.intrinsic_value);
        prop_assert!(derived.intrinsic_value >= 0.0);
    }

    #[test]
    fn equal_spot_and_strike_is_atm(strike in price(), kind in option_type()) {
        prop_assert_eq!(classify(strike, strike, kind), Moneyness::Atm);
    }

    #[test]
    fn moneyness_ignores_maturity(
        spot in price(),
        strike in price(),
        t1 in maturity(),
        t2 in maturity(),
        kind in option_type(),
    ) {
        let mut engine = MoneynessEngine::with_inputs(Inputs::new(spot, strike, t1, kind).unwrap()).unwrap();
        let before = (engine.moneyness(), engine.color());
        engine.set_time_to_maturity(t2).unwrap();
        prop_assert_eq!(before, (engine.moneyness(), engine.color()));
    }

    #[test]
    fn in_the_money_classes_have_positive_intrinsic(
        spot in price(),
        strike in price(),
        kind in option_type(),
    ) {
        let moneyness = classify(spot, strike, kind);
        let intrinsic = intrinsic_value(spot, strike, kind);
        prop_assert_eq!(moneyness.is_in_the_money(), intrinsic > 0.0);
        if moneyness == Moneyness::DeepItm {
            prop_assert!(intrinsic > 20.0);
        }
    }

    #[test]
    fn payoff_series_shape(strike in whole_price(), kind in option_type()) {
        let strike = strike as f64;
        let series = payoff_series(strike, kind);

        let low = (strike - 50.0).max(0.0);
        let high = strike + 50.0;
        prop_assert_eq!(series.len(), (high - low) as usize + 1);
        prop_assert_eq!(series.low(), low);
        prop_assert_eq!(series.points().first().map(|p| p.price), Some(low));
        prop_assert_eq!(series.points().last().map(|p| p.price), Some(high));

        for pair in series.points().windows(2) {
            prop_assert_eq!(pair[1].price - pair[0].price, 1.0);
        }
        for point in series.iter() {
            prop_assert!(point.payoff >= 0.0);
            prop_assert_eq!(point.payoff, intrinsic_value(point.price, strike, kind));
        }
    }

    #[test]
    fn marker_sits_on_curve_inside_window(
        spot in whole_price(),
        strike in whole_price(),
        kind in option_type(),
    ) {
        let inputs = Inputs::new(spot as f64, strike as f64, 0.5, kind).unwrap();
        let engine = MoneynessEngine::with_inputs(inputs).unwrap();
        let series = engine.payoff_series();
        let marker = engine.marker();

        prop_assert_eq!(series.contains_price(marker.price), (spot as i64 - strike as i64).abs() <= 50);
        if series.contains_price(marker.price) {
            let on_curve = series.iter().find(|p| p.price == marker.price);
            prop_assert_eq!(on_curve.copied(), Some(marker));
        }
    }
}
