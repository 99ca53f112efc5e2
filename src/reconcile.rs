use crate::format::{format_phone, format_state, format_suite};
use crate::keys::next_office_key;
use crate::matcher::office_equals;
use crate::types::{CanonicalOffice, LegislatorIds, LegislatorOffices, ScrapeResult, ScrapedOffice};
use std::collections::HashSet;
use tracing::info;

/// Offices in the capital are maintained once for the whole chamber rather
/// than per member, so scraped Washington offices are dropped. The exception
/// list names member offices in the capital that are tracked anyway.
#[derive(Debug, Clone)]
pub struct CapitalFilter {
    exceptions: Vec<CapitalException>,
}

/// One member office inside the capital that should not be dropped
#[derive(Debug, Clone)]
pub struct CapitalException {
    pub bioguide: String,
    pub address_prefix: String,
}

impl Default for CapitalFilter {
    fn default() -> Self {
        // EHN keeps a district office on Pennsylvania Avenue
        Self {
            exceptions: vec![CapitalException {
                bioguide: "N000147".to_string(),
                address_prefix: "1300 Pennsylvania".to_string(),
            }],
        }
    }
}

impl CapitalFilter {
    pub fn new(exceptions: Vec<CapitalException>) -> Self {
        Self { exceptions }
    }

    /// True when a scraped office should be skipped as a capital office
    pub fn skips(&self, bioguide: &str, office: &ScrapedOffice) -> bool {
        let in_capital = office.city.to_lowercase() == "washington"
            || office.state.replace('.', "").to_lowercase() == "dc";
        if !in_capital {
            return false;
        }

        !self.exceptions.iter().any(|exception| {
            exception.bioguide == bioguide && office.address.starts_with(&exception.address_prefix)
        })
    }
}

/// Counts from one member's reconcile pass
#[derive(Debug, Default, Clone, Copy)]
pub struct ReconcileOutcome {
    pub added: usize,
    pub removed: usize,
}

/// Counts from a full dataset merge
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeStats {
    pub new_offices: usize,
    pub removed_offices: usize,
    pub new_legislators: usize,
}

/// Reconcile one member's canonical offices against a fresh scrape, in
/// place.
///
/// Offices that no longer appear upstream are dropped, scraped offices with
/// no canonical match are appended with a freshly generated id, and anything
/// that fuzzy-matches is kept exactly as it was. Each canonical office
/// consumes at most one scraped office, so a double extraction shows up in
/// the stats instead of disappearing.
pub fn reconcile_offices(
    bioguide: &str,
    offices: &mut Vec<CanonicalOffice>,
    scraped: &[ScrapedOffice],
    filter: &CapitalFilter,
) -> ReconcileOutcome {
    let mut consumed = vec![false; scraped.len()];
    let mut keep = vec![true; offices.len()];

    // both lists are visited back to front, the order the dataset has always
    // been matched in; a tie between duplicate scraped entries goes to the
    // later one
    for i in (0..offices.len()).rev() {
        let matched = (0..scraped.len())
            .rev()
            .find(|&j| !consumed[j] && office_equals(&offices[i], &scraped[j]));

        match matched {
            Some(j) => consumed[j] = true,
            None => {
                info!("removing office in {}", offices[i].city);
                keep[i] = false;
            }
        }
    }

    let removed = keep.iter().filter(|&&k| !k).count();
    let mut kept: Vec<CanonicalOffice> = offices
        .drain(..)
        .zip(keep)
        .filter_map(|(office, keep)| keep.then_some(office))
        .collect();

    let mut added = 0;
    for (j, office) in scraped.iter().enumerate() {
        if consumed[j] || filter.skips(bioguide, office) {
            continue;
        }
        info!("adding office in {}", office.city);
        let office = canonical_from_scraped(office, bioguide, &kept);
        kept.push(office);
        added += 1;
    }

    *offices = kept;
    ReconcileOutcome { added, removed }
}

/// Build the canonical record for a newly scraped office. `existing` must
/// already contain everything added so far so that same-city duplicates get
/// numbered ids.
pub fn canonical_from_scraped(
    scraped: &ScrapedOffice,
    bioguide: &str,
    existing: &[CanonicalOffice],
) -> CanonicalOffice {
    CanonicalOffice {
        id: next_office_key(bioguide, &scraped.city, existing),
        address: scraped.address.clone(),
        suite: format_suite(&scraped.suite),
        building: scraped.building.clone(),
        city: scraped.city.clone(),
        state: format_state(&scraped.state),
        zip: scraped.zip.clone(),
        phone: format_phone(&scraped.phone),
        fax: format_phone(&scraped.fax),
        ..Default::default()
    }
}

/// Merge a full scrape run into the canonical dataset, in place.
///
/// Members present in both sides are reconciled office by office. Scrape
/// results for members the dataset doesn't know yet synthesize a new entry,
/// but only when at least one office survives the capital filter.
pub fn apply_scrape(
    legislators: &mut Vec<LegislatorOffices>,
    results: &[ScrapeResult],
    filter: &CapitalFilter,
) -> MergeStats {
    let mut stats = MergeStats::default();
    let mut processed: HashSet<&str> = HashSet::new();

    for legislator in legislators.iter_mut() {
        for result in results {
            if legislator.id.bioguide != result.bioguide {
                continue;
            }
            processed.insert(result.bioguide.as_str());
            info!("{} {}:", result.url, result.bioguide);

            let outcome = reconcile_offices(
                &result.bioguide,
                &mut legislator.offices,
                &result.offices,
                filter,
            );
            stats.new_offices += outcome.added;
            stats.removed_offices += outcome.removed;
        }
    }

    for result in results {
        if processed.contains(result.bioguide.as_str()) {
            continue;
        }

        let mut offices: Vec<CanonicalOffice> = Vec::new();
        for office in &result.offices {
            if filter.skips(&result.bioguide, office) {
                continue;
            }
            let office = canonical_from_scraped(office, &result.bioguide, &offices);
            offices.push(office);
        }
        if offices.is_empty() {
            continue;
        }

        info!("adding new legislator: {}", result.bioguide);
        stats.new_offices += offices.len();
        stats.new_legislators += 1;
        legislators.push(LegislatorOffices {
            id: LegislatorIds {
                bioguide: result.bioguide.clone(),
                ..Default::default()
            },
            offices,
        });
    }

    stats
}
