use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::dates::{expand, format_invoice_date};
use super::error::InvoiceError;
use super::numbering::InvoiceNumberGenerator;
use super::sampling::sample;
use super::tax::TaxBreakdown;
use super::types::*;
use crate::names::{NameSource, RandomNameProvider};

impl PriceBand {
    /// Draw a fare uniformly from the band, rounded to two decimals
    /// (half away from zero).
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Decimal {
        let unit = Decimal::from_f64(rng.random::<f64>()).unwrap_or(Decimal::ZERO);
        let price = self.min() + (self.max() - self.min()) * unit;
        price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Derive a record from input without validating the price.
fn build_record<R: Rng + ?Sized>(
    input: InvoiceInput,
    numbers: &InvoiceNumberGenerator,
    rng: &mut R,
) -> InvoiceRecord {
    InvoiceRecord {
        formatted_date: format_invoice_date(input.date),
        invoice_number: numbers.generate(rng),
        tax: TaxBreakdown::from_total(input.price),
        customer_name: input.customer_name,
        pickup_address: input.pickup_address,
        date: input.date,
        driver_name: input.driver_name,
    }
}

/// Synthesize a single invoice.
///
/// # Errors
///
/// Returns [`InvoiceError::InvalidPrice`] if the price is zero or negative.
pub fn synthesize<R: Rng + ?Sized>(
    input: InvoiceInput,
    rng: &mut R,
) -> Result<InvoiceRecord, InvoiceError> {
    if input.price <= Decimal::ZERO {
        return Err(InvoiceError::InvalidPrice(format!(
            "price must be positive, got {}",
            input.price
        )));
    }
    Ok(build_record(input, &InvoiceNumberGenerator::default(), rng))
}

/// Synthesize one invoice per date, sharing customer and pickup address.
///
/// Each invoice gets its own driver name (one fetch per invoice, in order)
/// and its own fare from `band`. Prices are not validated: the band is the
/// caller's responsibility.
///
/// # Errors
///
/// Any name fetch failure aborts the whole batch with
/// [`InvoiceError::NameSource`]; no partial list is returned.
pub async fn synthesize_all<S, R>(
    customer_name: &str,
    pickup_address: &str,
    dates: &[NaiveDate],
    band: PriceBand,
    names: &RandomNameProvider<S>,
    rng: &mut R,
) -> Result<Vec<InvoiceRecord>, InvoiceError>
where
    S: NameSource,
    R: Rng + ?Sized,
{
    let numbers = InvoiceNumberGenerator::default();
    let mut invoices = Vec::with_capacity(dates.len());
    for &date in dates {
        let driver_name = names.random_name(rng).await?;
        let input = InvoiceInput {
            customer_name: customer_name.to_owned(),
            pickup_address: pickup_address.to_owned(),
            date,
            driver_name,
            price: band.draw(rng),
        };
        invoices.push(build_record(input, &numbers, rng));
    }
    Ok(invoices)
}

/// Run a full bulk request: expand the range, sample dates, synthesize.
///
/// # Errors
///
/// - [`InvoiceError::NoEligibleDates`] if the policy leaves no date.
/// - [`InvoiceError::NameSource`] if a driver name cannot be fetched.
pub async fn generate_bulk<S, R>(
    request: BulkRequest,
    names: &RandomNameProvider<S>,
    rng: &mut R,
) -> Result<BulkOutcome, InvoiceError>
where
    S: NameSource,
    R: Rng + ?Sized,
{
    let eligible = expand(request.date_range, &request.exclusion);
    let picked = sample(&eligible, request.requested_count, rng)?;
    if let Some(shortfall) = &picked.shortfall {
        tracing::warn!(
            requested = shortfall.requested,
            produced = shortfall.produced,
            "{shortfall}"
        );
    }

    let invoices = synthesize_all(
        &request.customer_name,
        &request.pickup_address,
        &picked.dates,
        request.price_band,
        names,
        rng,
    )
    .await?;

    tracing::info!(count = invoices.len(), "generated bulk invoices");
    Ok(BulkOutcome {
        invoices,
        shortfall: picked.shortfall,
    })
}
