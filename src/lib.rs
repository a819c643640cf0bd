//! # ride-invoice
//!
//! Ride tax-invoice synthesis: GST breakdown (CGST/SGST), synthetic invoice
//! numbers, and bulk generation of invoices over a date range.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Every random decision (date shuffle, price, invoice number, driver name)
//! takes an injected [`rand::Rng`], so a seeded generator makes runs
//! reproducible.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use ride_invoice::core::*;
//! use rust_decimal_macros::dec;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let input = InvoiceInput {
//!     customer_name: "Shashi Kiran".into(),
//!     pickup_address: "Shivaji Nagar, Bengaluru".into(),
//!     date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
//!     driver_name: "NARENDRAN NARENDRAN".into(),
//!     price: dec!(105.00),
//! };
//!
//! let record = synthesize(input, &mut rng).unwrap();
//! assert_eq!(record.tax.net, dec!(100));
//! assert_eq!(record.tax.cgst, record.tax.sgst);
//! assert_eq!(record.formatted_date, "05 Mar 2024");
//! assert_eq!(format_currency(record.tax.total), "₹105.00");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Tax breakdown, date expansion, sampling, synthesis, name provider |
//! | `http` | Fetch the driver-name list over HTTP(S) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod names;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
