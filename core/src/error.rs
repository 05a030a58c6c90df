// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

/// Validation errors raised by date selection and reservation submission.
///
/// These are shown to the user as-is and cleared by the next valid interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationError {
    /// A calendar click targeted a day before today.
    #[error("Cannot select dates in the past.")]
    PastDateClicked,

    /// Submitted without a check-in date.
    #[error("Please select a check-in date.")]
    MissingCheckIn,

    /// Submitted without a check-out date.
    #[error("Please select a check-out date.")]
    MissingCheckOut,

    /// Submitted with a check-in date before today.
    #[error("Dates cannot be in the past.")]
    DatesInPast,

    /// Check-out is not strictly after check-in.
    #[error("Check-out date must be after check-in date.")]
    InvalidOrder,
}
