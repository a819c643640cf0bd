//! Core invoice types, tax derivation, and bulk generation.
//!
//! The bulk pipeline runs date expansion ([`expand`]) → sampling
//! ([`sample`]) → synthesis ([`synthesize_all`]); [`generate_bulk`] wires
//! the three together.

mod builder;
mod dates;
mod display;
mod error;
mod numbering;
mod sampling;
mod state;
mod synthesis;
pub mod tax;
mod types;
mod validation;

pub use builder::*;
pub use dates::*;
pub use display::*;
pub use error::*;
pub use numbering::*;
pub use sampling::*;
pub use state::*;
pub use synthesis::*;
pub use tax::TaxBreakdown;
pub use types::*;
pub use validation::*;
