use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::dates::parse_iso_date;
use super::error::{InvoiceError, ValidationError};
use super::types::*;

/// Largest batch the bulk form offers.
pub const MAX_BULK_COUNT: usize = 100;

/// Raw single-invoice form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceForm {
    pub customer_name: String,
    pub pickup_address: String,
    /// `YYYY-MM-DD`.
    pub invoice_date: String,
    pub driver_name: String,
    /// Decimal string, e.g. "43.40".
    pub price: String,
}

impl InvoiceForm {
    /// Parse the form into an [`InvoiceInput`].
    ///
    /// # Errors
    ///
    /// - [`InvoiceError::Validation`] if a required text field is blank.
    /// - [`InvoiceError::InvalidDate`] if the date is not `YYYY-MM-DD`.
    /// - [`InvoiceError::InvalidPrice`] if the price is non-numeric or not positive.
    pub fn parse(&self) -> Result<InvoiceInput, InvoiceError> {
        let mut errors = Vec::new();
        require("customer_name", &self.customer_name, &mut errors);
        require("pickup_address", &self.pickup_address, &mut errors);
        require("driver_name", &self.driver_name, &mut errors);
        if !errors.is_empty() {
            return Err(InvoiceError::Validation(join(&errors)));
        }

        Ok(InvoiceInput {
            customer_name: self.customer_name.trim().to_owned(),
            pickup_address: self.pickup_address.trim().to_owned(),
            date: parse_iso_date(&self.invoice_date)?,
            driver_name: self.driver_name.trim().to_owned(),
            price: parse_price(&self.price)?,
        })
    }
}

/// Parse a fare typed by the user. Must be a positive decimal.
pub fn parse_price(value: &str) -> Result<Decimal, InvoiceError> {
    let value = value.trim();
    let price: Decimal = value
        .parse()
        .map_err(|_| InvoiceError::InvalidPrice(format!("'{value}' is not a number")))?;
    if price <= Decimal::ZERO {
        return Err(InvoiceError::InvalidPrice(format!(
            "price must be positive, got {price}"
        )));
    }
    Ok(price)
}

/// Check a single invoice input. Returns all problems found.
pub fn validate_input(input: &InvoiceInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    require("customer_name", &input.customer_name, &mut errors);
    require("pickup_address", &input.pickup_address, &mut errors);
    require("driver_name", &input.driver_name, &mut errors);
    if input.price <= Decimal::ZERO {
        errors.push(ValidationError::new("price", "price must be positive"));
    }
    errors
}

/// Check a bulk request. Returns all problems found.
///
/// Generation does not depend on this: an inverted range simply yields no
/// eligible dates and an out-of-range count is capped by the sampler.
pub fn validate_request(request: &BulkRequest) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    require("customer_name", &request.customer_name, &mut errors);
    require("pickup_address", &request.pickup_address, &mut errors);

    if !(1..=MAX_BULK_COUNT).contains(&request.requested_count) {
        errors.push(ValidationError::new(
            "requested_count",
            format!("count must be between 1 and {MAX_BULK_COUNT}"),
        ));
    }

    if request.date_range.start > request.date_range.end {
        errors.push(ValidationError::new(
            "date_range",
            "start date is after end date",
        ));
    }

    if request.price_band.min() <= Decimal::ZERO {
        errors.push(ValidationError::new(
            "price_band",
            "prices must be positive",
        ));
    }

    errors
}

fn require(field: &str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, "must not be empty"));
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
