use std::collections::HashSet;
use std::io::Write;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ride_invoice::core::*;
use ride_invoice::names::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn drivers() -> RandomNameProvider<StaticNames> {
    RandomNameProvider::new(StaticNames::new(
        "NARENDRAN NARENDRAN\nRAVI KUMAR\n\nMANJUNATH S\nASHA RAO\n",
    ))
}

fn march_request(count: usize) -> BulkRequest {
    BulkRequestBuilder::new(date(2024, 3, 1), date(2024, 3, 31))
        .customer("Shashi Kiran", "Shivaji Nagar, Bengaluru")
        .count(count)
        .price_band(dec!(100), dec!(200))
        .build()
}

#[tokio::test]
async fn generates_requested_count() {
    let mut rng = StdRng::seed_from_u64(7);
    let outcome = generate_bulk(march_request(10), &drivers(), &mut rng)
        .await
        .unwrap();

    assert_eq!(outcome.invoices.len(), 10);
    assert!(outcome.shortfall.is_none());

    let dates: HashSet<_> = outcome.invoices.iter().map(|i| i.date).collect();
    assert_eq!(dates.len(), 10, "dates must be distinct");

    let known = ["NARENDRAN NARENDRAN", "RAVI KUMAR", "MANJUNATH S", "ASHA RAO"];
    for inv in &outcome.invoices {
        assert_eq!(inv.customer_name, "Shashi Kiran");
        assert!(known.contains(&inv.driver_name.as_str()));
        assert!(inv.total_amount() >= dec!(100) && inv.total_amount() <= dec!(200));
        assert_eq!(inv.cgst(), inv.sgst());
        assert!(is_valid_invoice_number(&inv.invoice_number));
        assert_eq!(inv.formatted_date, format_invoice_date(inv.date));
    }
}

#[tokio::test]
async fn shortfall_reports_actual_count() {
    let request = BulkRequestBuilder::new(date(2024, 3, 4), date(2024, 3, 6))
        .customer("Shashi Kiran", "Shivaji Nagar")
        .count(10)
        .build();
    let mut rng = StdRng::seed_from_u64(7);
    let outcome = generate_bulk(request, &drivers(), &mut rng).await.unwrap();

    assert_eq!(outcome.invoices.len(), 3);
    let shortfall = outcome.shortfall.unwrap();
    assert_eq!(shortfall.requested, 10);
    assert!(shortfall.to_string().contains('3'));
}

#[tokio::test]
async fn weekend_only_range_fails() {
    let request = BulkRequestBuilder::new(date(2024, 3, 2), date(2024, 3, 3))
        .customer("Shashi Kiran", "Shivaji Nagar")
        .build();
    let mut rng = StdRng::seed_from_u64(7);
    let err = generate_bulk(request, &drivers(), &mut rng)
        .await
        .unwrap_err();
    assert!(matches!(err, InvoiceError::NoEligibleDates));
}

#[tokio::test]
async fn seeded_runs_are_reproducible() {
    let a = generate_bulk(march_request(5), &drivers(), &mut StdRng::seed_from_u64(99))
        .await
        .unwrap();
    let b = generate_bulk(march_request(5), &drivers(), &mut StdRng::seed_from_u64(99))
        .await
        .unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn reversed_price_band_is_reordered() {
    let request = BulkRequestBuilder::new(date(2024, 3, 1), date(2024, 3, 31))
        .customer("Shashi Kiran", "Shivaji Nagar")
        .price_band(dec!(300), dec!(250))
        .count(20)
        .build();
    let mut rng = StdRng::seed_from_u64(3);
    let outcome = generate_bulk(request, &drivers(), &mut rng).await.unwrap();
    assert!(
        outcome
            .invoices
            .iter()
            .all(|i| i.total_amount() >= dec!(250) && i.total_amount() <= dec!(300))
    );
}

#[tokio::test]
async fn name_failure_aborts_batch() {
    let broken = RandomNameProvider::new(FileNames::new("/nonexistent/karnataka_driver_names.txt"));
    let mut rng = StdRng::seed_from_u64(7);
    let err = generate_bulk(march_request(3), &broken, &mut rng)
        .await
        .unwrap_err();
    assert!(matches!(err, InvoiceError::NameSource(NameError::Io { .. })));
}

#[tokio::test]
async fn names_read_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "PRAKASH M").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  SURESH B  ").unwrap();

    let provider = RandomNameProvider::new(FileNames::new(file.path()));
    let mut rng = StdRng::seed_from_u64(7);
    let outcome = generate_bulk(march_request(6), &provider, &mut rng)
        .await
        .unwrap();
    assert!(
        outcome
            .invoices
            .iter()
            .all(|i| i.driver_name == "PRAKASH M" || i.driver_name == "SURESH B")
    );
}

#[tokio::test]
async fn empty_name_list_yields_blank_driver() {
    let provider = RandomNameProvider::new(StaticNames::new(""));
    let mut rng = StdRng::seed_from_u64(7);
    let outcome = generate_bulk(march_request(2), &provider, &mut rng)
        .await
        .unwrap();
    assert!(outcome.invoices.iter().all(|i| i.driver_name.is_empty()));
}

#[test]
fn invoice_summary_snapshot() {
    let record = InvoiceRecord {
        customer_name: "Shashi Kiran".into(),
        pickup_address: "Shivaji Nagar, Bengaluru, Karnataka 560001, India".into(),
        date: date(2024, 3, 5),
        formatted_date: "05 Mar 2024".into(),
        driver_name: "NARENDRAN NARENDRAN".into(),
        invoice_number: "FFCDCBIA24123456".into(),
        tax: TaxBreakdown::from_total(dec!(105.00)),
    };
    insta::assert_snapshot!(record.to_string(), @r"
    Tax Invoice
    Customer name: Shashi Kiran
    Pick up address: Shivaji Nagar, Bengaluru, Karnataka 560001, India
    Driver name: NARENDRAN NARENDRAN
    Invoice number: FFCDCBIA24123456
    Invoice date: 05 Mar 2024
    HSN Code: 996412
    Net amount: ₹100.00
    CGST 2.5%: ₹2.50
    SGST/UTGST 2.5%: ₹2.50
    Total: ₹105.00
    ");
}
