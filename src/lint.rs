use crate::config::Config;
use crate::dataset;
use crate::error::Result;
use crate::roster;
use tracing::info;

/// Re-sort the merged dataset by bioguide and backfill missing
/// cross-reference ids from the current-legislator roster
pub async fn lint_dataset(config: &Config) -> Result<()> {
    let mut legislators = dataset::load_district_offices(&config.updated_path)?;

    let client = reqwest::Client::new();
    let roster = roster::fetch_roster(&client).await?;

    dataset::sort_by_bioguide(&mut legislators);

    // set any ids that are missing
    for legislator in legislators.iter_mut() {
        for entry in &roster {
            if legislator.id.bioguide == entry.id.bioguide {
                legislator.id.govtrack = entry.id.govtrack;
                legislator.id.thomas = entry.id.thomas.clone();
            }
        }
    }

    dataset::save_district_offices(&config.updated_path, &legislators)?;
    info!("done linting");

    Ok(())
}
