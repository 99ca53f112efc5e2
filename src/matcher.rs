use crate::normalize::{normalize_address, normalize_city, normalize_suite};
use crate::types::{CanonicalOffice, ScrapedOffice};
use tracing::debug;

/// Decide whether an upstream office and a freshly scraped one are the same
/// physical office.
///
/// Deliberately not a field-for-field equality: generated fields like the id
/// don't participate, and address/city/suite compare in normalized form so
/// "Street" matches "St." and "Suite 100" matches "100".
pub fn office_equals(office: &CanonicalOffice, scraped: &ScrapedOffice) -> bool {
    let same_address = normalize_address(&office.address) == normalize_address(&scraped.address)
        && normalize_city(&office.city) == normalize_city(&scraped.city)
        && normalize_suite(&office.suite) == normalize_suite(&scraped.suite);

    if !same_address {
        debug!(
            "compared address: {} {}",
            normalize_address(&office.address),
            normalize_address(&scraped.address)
        );
        debug!(
            "compared city: {} {}",
            normalize_city(&office.city),
            normalize_city(&scraped.city)
        );
        debug!(
            "compared suite: {} {}",
            normalize_suite(&office.suite),
            normalize_suite(&scraped.suite)
        );
    }

    same_address
}
