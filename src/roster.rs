use crate::config::ROSTER_URL;
use crate::error::Result;
use crate::types::{Legislator, ScrapeResult};
use chrono::{NaiveDate, Utc};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

/// Fetch the current-legislator roster
pub async fn fetch_roster(client: &reqwest::Client) -> Result<Vec<Legislator>> {
    let body = client
        .get(ROSTER_URL)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(serde_yaml::from_str(&body)?)
}

/// Map bioguide ids to official website urls for every sitting member.
///
/// Download or parse problems log and yield an empty map, so a roster outage
/// ends the scrape pass without taking the process down.
pub async fn current_member_urls(client: &reqwest::Client) -> BTreeMap<String, String> {
    let legislators = match fetch_roster(client).await {
        Ok(legislators) => legislators,
        Err(e) => {
            warn!("error fetching roster: {}", e);
            return BTreeMap::new();
        }
    };

    let today = Utc::now().date_naive();
    let mut urls = BTreeMap::new();

    for legislator in legislators {
        let Some(term) = legislator.terms.last() else {
            continue;
        };
        let end = match NaiveDate::parse_from_str(&term.end, "%Y-%m-%d") {
            Ok(end) => end,
            Err(e) => {
                warn!("error parsing term end date: {}", e);
                continue;
            }
        };
        if end < today {
            debug!("double checking currency... end date is before now");
            continue;
        }
        if (term.kind == "rep" || term.kind == "sen") && !term.url.is_empty() {
            urls.insert(legislator.id.bioguide.clone(), term.url.clone());
        }
    }

    urls
}

/// Coverage of the scraped dataset against the sitting roster
#[derive(Debug, Default)]
pub struct Coverage {
    /// Sitting members with no scraped entry
    pub missing: Vec<String>,
    /// Scraped entries for people no longer on the roster
    pub stale: Vec<String>,
}

impl Coverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.stale.is_empty()
    }
}

/// Compare a scraped office list against the roster of sitting members
pub fn check_coverage(roster: &BTreeMap<String, String>, results: &[ScrapeResult]) -> Coverage {
    let scraped: HashSet<&str> = results.iter().map(|r| r.bioguide.as_str()).collect();

    let missing = roster
        .keys()
        .filter(|bioguide| !scraped.contains(bioguide.as_str()))
        .cloned()
        .collect();
    let stale = results
        .iter()
        .filter(|r| !roster.contains_key(&r.bioguide))
        .map(|r| r.bioguide.clone())
        .collect();

    Coverage { missing, stale }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_for(bioguide: &str) -> ScrapeResult {
        ScrapeResult {
            bioguide: bioguide.to_string(),
            url: format!("https://example.com/{}", bioguide),
            offices: Vec::new(),
        }
    }

    #[test]
    fn test_check_coverage_complete() {
        let mut roster = BTreeMap::new();
        roster.insert("A000001".to_string(), "https://example.com/a".to_string());

        let coverage = check_coverage(&roster, &[result_for("A000001")]);
        assert!(coverage.is_complete());
    }

    #[test]
    fn test_check_coverage_reports_both_directions() {
        let mut roster = BTreeMap::new();
        roster.insert("A000001".to_string(), "https://example.com/a".to_string());
        roster.insert("B000002".to_string(), "https://example.com/b".to_string());

        let coverage = check_coverage(&roster, &[result_for("B000002"), result_for("Z000099")]);
        assert_eq!(coverage.missing, vec!["A000001"]);
        assert_eq!(coverage.stale, vec!["Z000099"]);
        assert!(!coverage.is_complete());
    }
}
