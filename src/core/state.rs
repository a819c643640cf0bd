use rand::Rng;

use super::error::InvoiceError;
use super::synthesis::{generate_bulk, synthesize};
use super::types::{BulkOutcome, BulkRequest, InvoiceInput, InvoiceRecord, Shortfall};
use crate::names::{NameSource, RandomNameProvider};

/// The invoices currently on screen.
///
/// Each generation replaces the previous result wholesale. A failed
/// generation leaves the workspace as it was.
#[derive(Debug, Clone, Default)]
pub struct InvoiceWorkspace {
    current: Option<InvoiceRecord>,
    batch: Option<Vec<InvoiceRecord>>,
}

impl InvoiceWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single invoice being previewed.
    pub fn current(&self) -> Option<&InvoiceRecord> {
        self.current.as_ref()
    }

    /// The last bulk batch, if the last generation was a bulk one.
    pub fn batch(&self) -> Option<&[InvoiceRecord]> {
        self.batch.as_deref()
    }

    /// Generate one invoice; clears any bulk batch.
    pub fn generate_single<R: Rng + ?Sized>(
        &mut self,
        input: InvoiceInput,
        rng: &mut R,
    ) -> Result<&InvoiceRecord, InvoiceError> {
        let record = synthesize(input, rng)?;
        self.batch = None;
        let record = self.current.insert(record);
        Ok(&*record)
    }

    /// Generate a batch; the first invoice becomes the current one.
    ///
    /// Returns the shortfall, if any, for the caller to show.
    pub async fn generate_bulk<S, R>(
        &mut self,
        request: BulkRequest,
        names: &RandomNameProvider<S>,
        rng: &mut R,
    ) -> Result<Option<Shortfall>, InvoiceError>
    where
        S: NameSource,
        R: Rng + ?Sized,
    {
        let BulkOutcome {
            invoices,
            shortfall,
        } = generate_bulk(request, names, rng).await?;
        self.current = invoices.first().cloned();
        self.batch = Some(invoices);
        Ok(shortfall)
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.batch = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal_macros::dec;

    use crate::core::BulkRequestBuilder;
    use crate::names::{FileNames, StaticNames};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input() -> InvoiceInput {
        InvoiceInput {
            customer_name: "Shashi Kiran".into(),
            pickup_address: "Shivaji Nagar".into(),
            date: date(2024, 3, 5),
            driver_name: "RAVI".into(),
            price: dec!(43.40),
        }
    }

    fn request() -> BulkRequest {
        BulkRequestBuilder::new(date(2024, 3, 1), date(2024, 3, 31))
            .customer("Shashi Kiran", "Shivaji Nagar")
            .count(4)
            .build()
    }

    #[tokio::test]
    async fn bulk_replaces_single() {
        let mut rng = StdRng::seed_from_u64(1);
        let names = RandomNameProvider::new(StaticNames::from_names(["ASHA"]));
        let mut ws = InvoiceWorkspace::new();
        ws.generate_single(input(), &mut rng).unwrap();

        let shortfall = ws.generate_bulk(request(), &names, &mut rng).await.unwrap();
        assert!(shortfall.is_none());
        let batch = ws.batch().unwrap();
        assert_eq!(batch.len(), 4);
        assert_eq!(ws.current(), batch.first());
    }

    #[tokio::test]
    async fn single_clears_batch() {
        let mut rng = StdRng::seed_from_u64(1);
        let names = RandomNameProvider::new(StaticNames::from_names(["ASHA"]));
        let mut ws = InvoiceWorkspace::new();
        ws.generate_bulk(request(), &names, &mut rng).await.unwrap();

        let number = ws.generate_single(input(), &mut rng).unwrap().invoice_number.clone();
        assert!(ws.batch().is_none());
        assert_eq!(ws.current().unwrap().invoice_number, number);
    }

    #[tokio::test]
    async fn failure_keeps_previous_state() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut ws = InvoiceWorkspace::new();
        ws.generate_single(input(), &mut rng).unwrap();
        let before = ws.current().cloned();

        let broken = RandomNameProvider::new(FileNames::new("/nonexistent/names.txt"));
        let err = ws.generate_bulk(request(), &broken, &mut rng).await.unwrap_err();
        assert!(matches!(err, InvoiceError::NameSource(_)));
        assert_eq!(ws.current().cloned(), before);
        assert!(ws.batch().is_none());

        let mut bad = input();
        bad.price = dec!(0);
        assert!(ws.generate_single(bad, &mut rng).is_err());
        assert_eq!(ws.current().cloned(), before);
    }
}
