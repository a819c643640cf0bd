use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use super::tax::{CGST_RATE, HSN_CODE, SGST_RATE};
use super::types::InvoiceRecord;

/// Format an amount in rupees with two decimals, e.g. `₹105.00`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("₹{rounded:.2}")
}

/// Plain-text invoice summary.
impl fmt::Display for InvoiceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tax Invoice")?;
        writeln!(f, "Customer name: {}", self.customer_name)?;
        writeln!(f, "Pick up address: {}", self.pickup_address)?;
        writeln!(f, "Driver name: {}", self.driver_name)?;
        writeln!(f, "Invoice number: {}", self.invoice_number)?;
        writeln!(f, "Invoice date: {}", self.formatted_date)?;
        writeln!(f, "HSN Code: {HSN_CODE}")?;
        writeln!(f, "Net amount: {}", format_currency(self.tax.net))?;
        writeln!(f, "CGST {CGST_RATE}%: {}", format_currency(self.tax.cgst))?;
        writeln!(
            f,
            "SGST/UTGST {SGST_RATE}%: {}",
            format_currency(self.tax.sgst)
        )?;
        write!(f, "Total: {}", format_currency(self.tax.total))
    }
}
