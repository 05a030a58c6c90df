// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use unicode_width::UnicodeWidthStr;
use voyageur_core::PriceQuote;

use crate::arg::OutputFormat;

/// Shown instead of a price while the dates yield no night.
pub const SELECT_DATES_HINT: &str = "Select dates to see total";

#[derive(Debug)]
pub struct QuoteFormatter {
    currency: String,
    format: OutputFormat,
}

impl QuoteFormatter {
    pub fn new(currency: &str) -> Self {
        Self {
            currency: currency.to_string(),
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, quote: &'a PriceQuote) -> Display<'a> {
        Display {
            quote,
            formatter: self,
        }
    }

    pub fn money(&self, amount: impl fmt::Display) -> String {
        format!("{}{}", self.currency, amount)
    }

    /// Label and amount rows of the price breakdown, the total comes last.
    ///
    /// Empty when the quote has no night.
    pub fn breakdown(&self, quote: &PriceQuote) -> Vec<(String, String)> {
        if !quote.is_priced() {
            return Vec::new();
        }

        vec![
            (
                format!("{} x {} nights", self.money(quote.nightly_rate), quote.nights),
                self.money(quote.subtotal),
            ),
            ("Cleaning fee".to_string(), self.money(quote.cleaning_fee)),
            ("Service fee".to_string(), self.money(quote.service_fee)),
            ("Total before taxes".to_string(), self.money(quote.total)),
        ]
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    quote: &'a PriceQuote,
    formatter: &'a QuoteFormatter,
}

#[derive(serde::Serialize)]
struct QuoteJson<'a> {
    currency: &'a str,
    #[serde(flatten)]
    quote: &'a PriceQuote,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&QuoteJson {
                    currency: &self.formatter.currency,
                    quote: self.quote,
                })
                .map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            OutputFormat::Table => {
                let rows = self.formatter.breakdown(self.quote);
                if rows.is_empty() {
                    return write!(f, "{SELECT_DATES_HINT}");
                }

                let label_width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
                let amount_width = rows.iter().map(|(_, a)| a.width()).max().unwrap_or(0);
                for (i, (label, amount)) in rows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    let gap = label_width - label.width() + 2 + amount_width - amount.width();
                    write!(f, "{label}{}{amount}", " ".repeat(gap))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyageur_core::StayDates;

    fn quote(check_in: &str, check_out: &str) -> PriceQuote {
        PriceQuote::new(
            350,
            StayDates::new(check_in.parse().ok(), check_out.parse().ok()),
        )
    }

    #[test]
    fn test_breakdown_rows() {
        let formatter = QuoteFormatter::new("€");
        let rows = formatter.breakdown(&quote("2024-06-20", "2024-06-25"));
        assert_eq!(
            rows,
            vec![
                ("€350 x 5 nights".to_string(), "€1750".to_string()),
                ("Cleaning fee".to_string(), "€45".to_string()),
                ("Service fee".to_string(), "€245".to_string()),
                ("Total before taxes".to_string(), "€2040".to_string()),
            ]
        );
    }

    #[test]
    fn test_table_is_aligned() {
        let formatter = QuoteFormatter::new("$");
        let quote = quote("2024-06-20", "2024-06-25");
        let text = formatter.format(&quote).to_string();
        assert_eq!(
            text,
            "\
$350 x 5 nights     $1750
Cleaning fee          $45
Service fee          $245
Total before taxes  $2040"
        );
    }

    #[test]
    fn test_unpriced_asks_for_dates() {
        let formatter = QuoteFormatter::new("€");
        let quote = quote("2024-06-20", "");
        assert!(formatter.breakdown(&quote).is_empty());
        assert_eq!(formatter.format(&quote).to_string(), SELECT_DATES_HINT);
    }

    #[test]
    fn test_json_carries_currency() {
        let formatter = QuoteFormatter::new("€").with_output_format(OutputFormat::Json);
        let quote = quote("2024-06-20", "2024-06-25");
        let value: serde_json::Value =
            serde_json::from_str(&formatter.format(&quote).to_string()).unwrap();
        assert_eq!(value["currency"], "€");
        assert_eq!(value["nights"], 5);
        assert_eq!(value["total"], 2040);
        assert_eq!(value["service_fee_rate"], 0.14);
    }
}
