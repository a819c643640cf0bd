use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::*;

/// Builder for bulk generation requests.
///
/// Defaults follow the bulk form: fares between 100 and 200, ten invoices,
/// weekends excluded.
///
/// ```
/// use ride_invoice::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let request = BulkRequestBuilder::new(
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
/// )
/// .customer("Shashi Kiran", "Shivaji Nagar, Bengaluru")
/// .count(5)
/// .price_band(dec!(250), dec!(120))
/// .exclude_date(NaiveDate::from_ymd_opt(2024, 3, 8).unwrap())
/// .build();
///
/// assert_eq!(request.price_band.min(), dec!(120));
/// assert!(request.exclusion.exclude_weekends);
/// ```
pub struct BulkRequestBuilder {
    start: NaiveDate,
    end: NaiveDate,
    exclusion: ExclusionPolicy,
    requested_count: usize,
    min_price: Decimal,
    max_price: Decimal,
    customer_name: String,
    pickup_address: String,
}

impl BulkRequestBuilder {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            exclusion: ExclusionPolicy::default(),
            requested_count: 10,
            min_price: dec!(100),
            max_price: dec!(200),
            customer_name: String::new(),
            pickup_address: String::new(),
        }
    }

    pub fn customer(mut self, name: impl Into<String>, pickup_address: impl Into<String>) -> Self {
        self.customer_name = name.into();
        self.pickup_address = pickup_address.into();
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.requested_count = count;
        self
    }

    /// Fare bounds, in either order.
    pub fn price_band(mut self, a: Decimal, b: Decimal) -> Self {
        self.min_price = a;
        self.max_price = b;
        self
    }

    pub fn exclude_weekends(mut self, exclude: bool) -> Self {
        self.exclusion = self.exclusion.exclude_weekends(exclude);
        self
    }

    pub fn exclude_date(mut self, date: NaiveDate) -> Self {
        self.exclusion = self.exclusion.exclude(date);
        self
    }

    /// Replace the whole exclusion policy.
    pub fn exclusion(mut self, policy: ExclusionPolicy) -> Self {
        self.exclusion = policy;
        self
    }

    pub fn build(self) -> BulkRequest {
        BulkRequest {
            date_range: DateRange::new(self.start, self.end),
            exclusion: self.exclusion,
            requested_count: self.requested_count,
            price_band: PriceBand::new(self.min_price, self.max_price),
            customer_name: self.customer_name,
            pickup_address: self.pickup_address,
        }
    }
}
