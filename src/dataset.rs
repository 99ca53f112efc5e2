use crate::error::Result;
use crate::types::{LegislatorOffices, ScrapeResult};
use std::fs;
use std::path::Path;

/// Load a scraped office list from disk
pub fn load_scrape_results(path: &Path) -> Result<Vec<ScrapeResult>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Write the scraped office list, sorted by bioguide for consistent diffs
pub fn save_scrape_results(path: &Path, results: &mut Vec<ScrapeResult>) -> Result<()> {
    results.sort_by(|a, b| a.bioguide.to_lowercase().cmp(&b.bioguide.to_lowercase()));
    let data = serde_json::to_string_pretty(results)?;
    fs::write(path, data)?;
    Ok(())
}

/// Fetch the canonical district-office dataset
pub async fn fetch_district_offices(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<LegislatorOffices>> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(serde_yaml::from_str(&body)?)
}

/// Load the district-office dataset from a local file
pub fn load_district_offices(path: &Path) -> Result<Vec<LegislatorOffices>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&data)?)
}

/// Write the district-office dataset.
///
/// The upstream repo keeps zips and numeric ids single-quoted, so every
/// double quote in the emitted YAML is replaced before writing.
pub fn save_district_offices(path: &Path, legislators: &[LegislatorOffices]) -> Result<()> {
    let yaml = serde_yaml::to_string(legislators)?;
    let yaml = yaml.replace('"', "'");
    fs::write(path, yaml)?;
    Ok(())
}

/// Sort legislators by bioguide, case-insensitive
pub fn sort_by_bioguide(legislators: &mut [LegislatorOffices]) {
    legislators.sort_by(|a, b| {
        a.id.bioguide
            .to_lowercase()
            .cmp(&b.id.bioguide.to_lowercase())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LegislatorIds;

    fn entry(bioguide: &str) -> LegislatorOffices {
        LegislatorOffices {
            id: LegislatorIds {
                bioguide: bioguide.to_string(),
                ..Default::default()
            },
            offices: Vec::new(),
        }
    }

    #[test]
    fn test_sort_by_bioguide_is_case_insensitive() {
        let mut legislators = vec![entry("c000003"), entry("A000001"), entry("B000002")];
        sort_by_bioguide(&mut legislators);
        let order: Vec<&str> = legislators.iter().map(|l| l.id.bioguide.as_str()).collect();
        assert_eq!(order, vec!["A000001", "B000002", "c000003"]);
    }
}
