use rand::Rng;

/// Prefix of every generated invoice number.
pub const DEFAULT_INVOICE_PREFIX: &str = "FFCDCBIA24";

const SUFFIX_MIN: u32 = 100_000;
const SUFFIX_MAX: u32 = 999_999;

/// Random invoice number generator.
///
/// Generates numbers in the format `{prefix}{6 digits}`, e.g.
/// "FFCDCBIA24482913". The suffix is drawn uniformly from
/// 100000..=999999, so it never needs zero-padding.
///
/// Numbers are not tracked: two invoices may receive the same number.
#[derive(Debug, Clone)]
pub struct InvoiceNumberGenerator {
    prefix: String,
}

impl Default for InvoiceNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceNumberGenerator {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_INVOICE_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Generate a number.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let suffix = rng.random_range(SUFFIX_MIN..=SUFFIX_MAX);
        format!("{}{suffix}", self.prefix)
    }
}

/// Whether `number` is a default-prefix invoice number with a six-digit
/// suffix in range.
pub fn is_valid_invoice_number(number: &str) -> bool {
    let Some(suffix) = number.strip_prefix(DEFAULT_INVOICE_PREFIX) else {
        return false;
    };
    suffix.len() == 6
        && suffix.bytes().all(|b| b.is_ascii_digit())
        && !suffix.starts_with('0')
}
