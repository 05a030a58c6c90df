// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{CalendarDate, StayDates};

/// Flat cleaning fee charged once per booking.
pub const CLEANING_FEE: u64 = 45;

/// Service fee as a percentage of the nightly subtotal.
pub const SERVICE_FEE_PERCENT: u64 = 14;

/// Service fee as a fraction, for display.
pub const SERVICE_FEE_RATE: f64 = 0.14;

/// Number of billed nights between check-in and check-out.
///
/// Zero when either side is absent or check-out is not after check-in. The
/// check-out day itself is not billed.
pub fn nights(check_in: Option<CalendarDate>, check_out: Option<CalendarDate>) -> u32 {
    match (check_in, check_out) {
        (Some(a), Some(b)) if a < b => u32::try_from(a.days_until(&b)).unwrap_or(u32::MAX),
        _ => 0,
    }
}

/// Price breakdown of a stay, derived from the dates and a nightly rate.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PriceQuote {
    pub nights: u32,
    pub nightly_rate: u32,
    pub cleaning_fee: u64,
    pub service_fee_rate: f64,
    pub subtotal: u64,
    pub service_fee: u64,
    pub total: u64,
}

impl PriceQuote {
    /// Computes the quote for the given dates.
    pub fn new(nightly_rate: u32, dates: StayDates) -> Self {
        let nights = nights(dates.check_in, dates.check_out);
        let subtotal = u64::from(nightly_rate) * u64::from(nights);
        let service_fee = service_fee(subtotal);
        Self {
            nights,
            nightly_rate,
            cleaning_fee: CLEANING_FEE,
            service_fee_rate: SERVICE_FEE_RATE,
            subtotal,
            service_fee,
            total: subtotal + CLEANING_FEE + service_fee,
        }
    }

    /// Whether the dates yield at least one night.
    ///
    /// Zero nights is not an error, the consumer should ask for dates instead of
    /// showing a price.
    pub fn is_priced(&self) -> bool {
        self.nights > 0
    }
}

/// `round(subtotal * 0.14)`, halves round up.
fn service_fee(subtotal: u64) -> u64 {
    (subtotal * SERVICE_FEE_PERCENT + 50) / 100
}
