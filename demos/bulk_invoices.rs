use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ride_invoice::core::*;
use ride_invoice::names::{RandomNameProvider, StaticNames};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // A week of rides in March 2024, skipping the weekend and a holiday
    let request = BulkRequestBuilder::new(
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
    )
    .customer(
        "Shashi Kiran",
        "Shivaji Nagar, Bengaluru, Karnataka 560001, India",
    )
    .exclude_date(NaiveDate::from_ymd_opt(2024, 3, 8).unwrap())
    .price_band(dec!(120), dec!(260))
    .count(6)
    .build();

    let problems = validate_request(&request);
    for problem in &problems {
        eprintln!("  ✗ {problem}");
    }

    let names = RandomNameProvider::new(StaticNames::from_names([
        "NARENDRAN NARENDRAN",
        "RAVI KUMAR",
        "MANJUNATH S",
        "ASHA RAO",
    ]));

    // Fixed seed so repeated runs print the same invoices
    let mut rng = StdRng::seed_from_u64(2024);
    let mut workspace = InvoiceWorkspace::new();

    match workspace.generate_bulk(request, &names, &mut rng).await {
        Ok(shortfall) => {
            if let Some(shortfall) = shortfall {
                println!("{shortfall}\n");
            }
            for invoice in workspace.batch().unwrap_or_default() {
                println!("{invoice}\n");
            }
        }
        Err(e) => eprintln!("Bulk generation failed: {e}"),
    }
}
