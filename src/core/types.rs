use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tax::TaxBreakdown;

/// Details for one ride invoice, before derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceInput {
    /// Rider billed for the trip.
    pub customer_name: String,
    /// Pickup address printed on the invoice.
    pub pickup_address: String,
    /// Date of the ride.
    pub date: NaiveDate,
    /// Driver who carried out the ride.
    pub driver_name: String,
    /// GST-inclusive fare.
    pub price: Decimal,
}

/// A fully derived invoice. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub customer_name: String,
    pub pickup_address: String,
    pub date: NaiveDate,
    /// `date` rendered as `DD Mon YYYY`.
    pub formatted_date: String,
    pub driver_name: String,
    /// Synthetic invoice number, e.g. `FFCDCBIA24482913`. Not checked for
    /// uniqueness.
    pub invoice_number: String,
    /// Fare with its GST split.
    pub tax: TaxBreakdown,
}

impl InvoiceRecord {
    /// GST-inclusive fare.
    pub fn total_amount(&self) -> Decimal {
        self.tax.total
    }

    /// Fare exclusive of GST.
    pub fn net_amount(&self) -> Decimal {
        self.tax.net
    }

    /// Central GST component.
    pub fn cgst(&self) -> Decimal {
        self.tax.cgst
    }

    /// State GST component.
    pub fn sgst(&self) -> Decimal {
        self.tax.sgst
    }
}

/// Which days of a range may carry an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionPolicy {
    /// Skip Saturdays and Sundays.
    pub exclude_weekends: bool,
    /// Individual days to skip.
    pub excluded_dates: BTreeSet<NaiveDate>,
}

impl Default for ExclusionPolicy {
    /// Weekends excluded, no extra dates.
    fn default() -> Self {
        Self {
            exclude_weekends: true,
            excluded_dates: BTreeSet::new(),
        }
    }
}

impl ExclusionPolicy {
    /// A policy that excludes nothing.
    pub fn none() -> Self {
        Self {
            exclude_weekends: false,
            excluded_dates: BTreeSet::new(),
        }
    }

    pub fn exclude_weekends(mut self, exclude: bool) -> Self {
        self.exclude_weekends = exclude;
        self
    }

    /// Add a day to the exclusion set. Adding the same day twice is a no-op.
    pub fn exclude(mut self, date: NaiveDate) -> Self {
        self.excluded_dates.insert(date);
        self
    }

    /// Remove a previously excluded day.
    pub fn include(mut self, date: NaiveDate) -> Self {
        self.excluded_dates.remove(&date);
        self
    }

    pub fn is_eligible(&self, date: NaiveDate) -> bool {
        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        !(self.exclude_weekends && weekend) && !self.excluded_dates.contains(&date)
    }
}

/// Inclusive calendar range. `start > end` is allowed and yields no days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Every calendar day from `start` to `end`, inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Inclusive fare band for generated invoices.
///
/// Bounds given in the wrong order are swapped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPriceBand")]
pub struct PriceBand {
    min: Decimal,
    max: Decimal,
}

/// Bounds as found in serialized input, possibly inverted.
#[derive(Deserialize)]
struct RawPriceBand {
    min: Decimal,
    max: Decimal,
}

impl From<RawPriceBand> for PriceBand {
    fn from(raw: RawPriceBand) -> Self {
        Self::new(raw.min, raw.max)
    }
}

impl PriceBand {
    /// Band between `a` and `b`, whichever is smaller becoming the minimum.
    pub fn new(a: Decimal, b: Decimal) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Lower bound.
    pub fn min(&self) -> Decimal {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> Decimal {
        self.max
    }
}

/// Everything needed for one bulk run. Consumed by
/// [`generate_bulk`](super::generate_bulk).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkRequest {
    pub date_range: DateRange,
    pub exclusion: ExclusionPolicy,
    pub requested_count: usize,
    pub price_band: PriceBand,
    pub customer_name: String,
    pub pickup_address: String,
}

/// Fewer eligible dates than invoices requested. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub requested: usize,
    pub produced: usize,
}

impl std::fmt::Display for Shortfall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Only {n} invoices generated as there are only {n} eligible dates in the selected range.",
            n = self.produced
        )
    }
}

/// Result of a bulk run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOutcome {
    /// Invoices in sampled (shuffled) order.
    pub invoices: Vec<InvoiceRecord>,
    pub shortfall: Option<Shortfall>,
}
