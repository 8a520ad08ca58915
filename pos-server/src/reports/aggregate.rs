//! Revenue / order-count rollups
//!
//! Sums run in `Decimal` and are converted back to `f64` rounded to cents.

use rust_decimal::prelude::*;
use shared::models::{Order, ReportPeriod, SalesReport, ServiceCategory};

use super::window::ReportWindow;

const DECIMAL_PLACES: u32 = 2;

#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert back to f64 for serialization, rounded to 2 decimal places (half-up)
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

#[derive(Default)]
struct Tally {
    revenue: Decimal,
    orders: i64,
}

/// Roll up the orders that fall inside `window`; anything outside is ignored
pub fn summarize(period: ReportPeriod, window: &ReportWindow, orders: &[Order]) -> SalesReport {
    let mut bike = Tally::default();
    let mut car = Tally::default();

    for order in orders.iter().filter(|o| window.contains(o.timestamp)) {
        let slot = match order.category {
            ServiceCategory::Bike => &mut bike,
            ServiceCategory::Car => &mut car,
        };
        slot.revenue += to_decimal(order.amount);
        slot.orders += 1;
    }

    SalesReport {
        period,
        label: window.label.clone(),
        start: window.start,
        end: window.end,
        total_revenue: to_f64(bike.revenue + car.revenue),
        total_orders: bike.orders + car.orders,
        bike_revenue: to_f64(bike.revenue),
        bike_orders: bike.orders,
        car_revenue: to_f64(car.revenue),
        car_orders: car.orders,
    }
}
