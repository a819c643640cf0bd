//! GST constants and the gross-up tax breakdown.
//!
//! Ride fares are quoted GST-inclusive. The 5% GST on passenger transport is
//! split evenly into a central (CGST) and a state (SGST/UTGST) component.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Combined GST rate in percent.
pub const GST_RATE: Decimal = dec!(5);

/// Central GST rate in percent.
pub const CGST_RATE: Decimal = dec!(2.5);

/// State / Union-territory GST rate in percent.
pub const SGST_RATE: Decimal = dec!(2.5);

/// Divisor that strips the inclusive GST from a gross total.
pub const GROSS_UP_DIVISOR: Decimal = dec!(1.05);

/// HSN/SAC code for passenger transport services.
pub const HSN_CODE: &str = "996412";

/// Tax split of a GST-inclusive total.
///
/// Values keep full decimal precision; rounding to paise happens only when
/// formatting for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Gross amount paid, tax included.
    pub total: Decimal,
    /// Amount exclusive of tax: `total / 1.05`.
    pub net: Decimal,
    /// Central GST: 2.5% of `net`.
    pub cgst: Decimal,
    /// State GST: 2.5% of `net`. Always equal to `cgst`.
    pub sgst: Decimal,
}

impl TaxBreakdown {
    /// Derive net amount and GST components from a gross total.
    ///
    /// Every step shrinks the magnitude, so any `Decimal` total is accepted.
    pub fn from_total(total: Decimal) -> Self {
        let net = total / GROSS_UP_DIVISOR;
        let cgst = net * (CGST_RATE / dec!(100));
        let sgst = net * (SGST_RATE / dec!(100));
        Self {
            total,
            net,
            cgst,
            sgst,
        }
    }

    /// Combined GST (`cgst + sgst`).
    pub fn gst_total(&self) -> Decimal {
        self.cgst + self.sgst
    }
}
