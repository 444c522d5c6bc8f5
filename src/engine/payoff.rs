//! Payoff curve sampling
//!
//! Tabulates the exercise payoff over a window of prices centred on the
//! strike, one point per unit price step. The window's lower bound is
//! clamped at zero.

use serde::Serialize;

use crate::core::OptionType;

/// Distance from the strike to either edge of the window
pub const PAYOFF_HALF_WIDTH: f64 = 50.0;

/// Padding added above the highest payoff on the chart's y axis
pub const Y_AXIS_HEADROOM: f64 = 10.0;

/// A single (price, payoff) sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayoffPoint {
    pub price: f64,
    pub payoff: f64,
}

impl PayoffPoint {
    pub fn new(price: f64, payoff: f64) -> Self {
        Self { price, payoff }
    }

    /// As an `[x, y]` pair for plotting
    pub fn xy(&self) -> [f64; 2] {
        [self.price, self.payoff]
    }
}

/// Payoff samples ordered by price, unit step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoffSeries {
    strike: f64,
    option_type: OptionType,
    low: f64,
    high: f64,
    points: Vec<PayoffPoint>,
}

/// `[max(0, strike - 50), strike + 50]`
pub fn payoff_window(strike: f64) -> (f64, f64) {
    (
        (strike - PAYOFF_HALF_WIDTH).max(0.0),
        strike + PAYOFF_HALF_WIDTH,
    )
}

/// Sample the payoff at every unit step from the window's low edge up to its
/// high edge inclusive. Depends only on strike and option type.
pub fn payoff_series(strike: f64, option_type: OptionType) -> PayoffSeries {
    let (low, high) = payoff_window(strike);

    let span = high - low;
    let count = if span >= 0.0 { span.floor() as usize + 1 } else { 0 };

    let points = (0..count)
        .map(|i| {
            let price = low + i as f64;
            PayoffPoint::new(price, option_type.intrinsic(price, strike))
        })
        .collect();

    PayoffSeries {
        strike,
        option_type,
        low,
        high,
        points,
    }
}

impl PayoffSeries {
    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Lower edge of the window (never negative)
    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn points(&self) -> &[PayoffPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PayoffPoint> {
        self.points.iter()
    }

    /// Is the price inside the sampled window?
    pub fn contains_price(&self, price: f64) -> bool {
        price >= self.low && price <= self.high
    }

    /// Payoff at an arbitrary price, same formula as the samples
    pub fn payoff_at(&self, price: f64) -> f64 {
        self.option_type.intrinsic(price, self.strike)
    }

    pub fn max_payoff(&self) -> f64 {
        self.points.iter().map(|p| p.payoff).fold(0.0, f64::max)
    }

    /// Upper bound for the chart's y axis
    pub fn y_axis_max(&self) -> f64 {
        self.max_payoff() + Y_AXIS_HEADROOM
    }

    /// Fixed chart window as `([x_min, y_min], [x_max, y_max])`:
    /// the sampled price range by `[0, max payoff + 10]`
    pub fn chart_bounds(&self) -> ([f64; 2], [f64; 2]) {
        ([self.low, 0.0], [self.high, self.y_axis_max()])
    }

    /// The point on the curve at `price`, or `None` outside the window
    pub fn point_at(&self, price: f64) -> Option<PayoffPoint> {
        if self.contains_price(price) {
            Some(PayoffPoint::new(price, self.payoff_at(price)))
        } else {
            None
        }
    }

    /// All samples as `[x, y]` pairs
    pub fn xy(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(PayoffPoint::xy).collect()
    }

    /// Every `step`-th sample, always including the last one
    pub fn sampled(&self, step: usize) -> Vec<PayoffPoint> {
        let step = step.max(1);
        let mut out: Vec<PayoffPoint> = self.points.iter().step_by(step).copied().collect();
        if let Some(last) = self.points.last() {
            if out.last() != Some(last) {
                out.push(*last);
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a PayoffSeries {
    type Item = &'a PayoffPoint;
    type IntoIter = std::slice::Iter<'a, PayoffPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window() {
        let series = payoff_series(100.0, OptionType::Call);
        assert_eq!(series.low(), 50.0);
        assert_eq!(series.high(), 150.0);
        assert_eq!(series.len(), 101);
        assert_eq!(series.points()[0], PayoffPoint::new(50.0, 0.0));
        assert_eq!(series.points()[100], PayoffPoint::new(150.0, 50.0));
        assert_eq!(series.max_payoff(), 50.0);
        assert_eq!(series.y_axis_max(), 60.0);
    }

    #[test]
    fn test_low_edge_clamped() {
        let series = payoff_series(10.0, OptionType::Put);
        assert_eq!(series.low(), 0.0);
        assert_eq!(series.high(), 60.0);
        assert_eq!(series.len(), 61);
        assert_eq!(series.points()[0], PayoffPoint::new(0.0, 10.0));
        assert_eq!(series.max_payoff(), 10.0);
    }

    #[test]
    fn test_zero_strike() {
        let series = payoff_series(0.0, OptionType::Call);
        assert_eq!(series.len(), 51);
        assert_eq!(series.points()[50].payoff, 50.0);
    }

    #[test]
    fn test_fractional_strike_stays_inside_window() {
        let series = payoff_series(100.5, OptionType::Call);
        assert_eq!(series.low(), 50.5);
        assert_eq!(series.len(), 101);
        assert_eq!(series.points().last().unwrap().price, 150.5);

        let clamped = payoff_series(20.5, OptionType::Call);
        assert_eq!(clamped.low(), 0.0);
        // 0..=70, the next step 71 would pass 70.5
        assert_eq!(clamped.len(), 71);
        assert!(clamped.points().iter().all(|p| p.price <= clamped.high()));
    }

    #[test]
    fn test_contains_price() {
        let series = payoff_series(100.0, OptionType::Call);
        assert!(series.contains_price(50.0));
        assert!(series.contains_price(150.0));
        assert!(!series.contains_price(151.0));
        assert!(!series.contains_price(49.0));
    }

    #[test]
    fn test_chart_bounds_fixed_to_window() {
        let series = payoff_series(10.0, OptionType::Call);
        assert_eq!(series.chart_bounds(), ([0.0, 0.0], [60.0, 60.0]));

        let put = payoff_series(100.0, OptionType::Put);
        assert_eq!(put.chart_bounds(), ([50.0, 0.0], [150.0, 60.0]));
    }

    #[test]
    fn test_point_at() {
        let series = payoff_series(10.0, OptionType::Call);
        assert_eq!(series.strike(), 10.0);
        assert_eq!(series.option_type(), OptionType::Call);
        assert_eq!(series.payoff_at(100.0), 90.0);

        assert_eq!(series.point_at(35.0), Some(PayoffPoint::new(35.0, 25.0)));
        assert_eq!(series.point_at(100.0), None);
    }

    #[test]
    fn test_sampled_keeps_last() {
        let series = payoff_series(10.0, OptionType::Call);
        let sampled = series.sampled(25);
        let prices: Vec<f64> = sampled.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![0.0, 25.0, 50.0, 60.0]);

        let every_ten = payoff_series(100.0, OptionType::Put).sampled(10);
        assert_eq!(every_ten.len(), 11);
    }
}
