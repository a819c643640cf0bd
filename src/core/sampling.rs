use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;

use super::error::InvoiceError;
use super::types::Shortfall;

/// Dates picked for a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Distinct dates in shuffled order.
    pub dates: Vec<NaiveDate>,
    /// Set when fewer dates were eligible than requested.
    pub shortfall: Option<Shortfall>,
}

/// Pick `requested` distinct dates from `eligible` without replacement.
///
/// Shuffles a copy of `eligible` with Fisher–Yates and keeps the first
/// `min(requested, eligible.len())` entries.
///
/// # Errors
///
/// Returns [`InvoiceError::NoEligibleDates`] when `eligible` is empty.
pub fn sample<R: Rng + ?Sized>(
    eligible: &[NaiveDate],
    requested: usize,
    rng: &mut R,
) -> Result<Sample, InvoiceError> {
    if eligible.is_empty() {
        return Err(InvoiceError::NoEligibleDates);
    }

    let produced = requested.min(eligible.len());
    let shortfall = (requested > eligible.len()).then_some(Shortfall {
        requested,
        produced,
    });

    let mut dates = eligible.to_vec();
    dates.shuffle(rng);
    dates.truncate(produced);

    tracing::debug!(requested, produced, "sampled invoice dates");
    Ok(Sample { dates, shortfall })
}
