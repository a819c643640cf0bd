//! Random driver names drawn from a line-delimited list.
//!
//! The list is fetched through a [`NameSource`] on every draw, one fetch per
//! invoice, so edits to the list take effect mid-batch.
//!
//! # Example
//!
//! ```ignore
//! use ride_invoice::names::*;
//!
//! let provider = RandomNameProvider::new(FileNames::new("karnataka_driver_names.txt"));
//! let name = provider.random_name(&mut rand::rng()).await?;
//! ```

#[cfg(feature = "http")]
mod http;
mod source;

#[cfg(feature = "http")]
pub use http::HttpNames;
pub use source::{FileNames, NameError, NameSource, RandomNameProvider, StaticNames, parse_names};
