// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::{CalendarDate, ReservationError, StayDates};

/// A validated reservation intent. Nothing is stored or charged.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Confirmation {
    pub property_title: String,
    pub check_in: CalendarDate,
    pub check_out: CalendarDate,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation initiated for {}\nDates: {} to {}",
            self.property_title, self.check_in, self.check_out
        )
    }
}

/// Validates the stay dates before a reservation is submitted.
///
/// Rules are checked in order and the first failure is returned. The past-date rule
/// is also enforced by the calendar, it is checked here again so the guard holds for
/// any input.
pub fn submit(
    property_title: &str,
    dates: StayDates,
    today: CalendarDate,
) -> Result<Confirmation, ReservationError> {
    let check_in = dates.check_in.ok_or(ReservationError::MissingCheckIn)?;
    let check_out = dates.check_out.ok_or(ReservationError::MissingCheckOut)?;

    if check_in < today {
        return Err(ReservationError::DatesInPast);
    }

    if check_out <= check_in {
        return Err(ReservationError::InvalidOrder);
    }

    tracing::debug!(%check_in, %check_out, property_title, "reservation validated");
    Ok(Confirmation {
        property_title: property_title.to_owned(),
        check_in,
        check_out,
    })
}
