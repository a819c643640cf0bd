use thiserror::Error;

use crate::names::NameError;

/// Errors that can occur while generating invoices.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// The price is non-numeric, zero, or negative.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Date-range expansion left no date to invoice.
    #[error("no eligible dates available for invoice generation")]
    NoEligibleDates,

    /// A date string was not `YYYY-MM-DD`.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// One or more form fields failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The driver-name list could not be fetched. Aborts the whole batch.
    #[error("driver name unavailable: {0}")]
    NameSource(#[from] NameError),
}

/// A single validation error with field name and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the invalid field (e.g. "customer_name").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Create a validation error for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
