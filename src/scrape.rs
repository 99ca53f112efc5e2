use crate::config::Config;
use crate::dataset;
use crate::error::{Error, Result};
use crate::extract::AddressExtractor;
use crate::roster;
use crate::types::{ScrapeResult, ScrapedOffice};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;
use tracing::{info, warn};

/// Fetch a page, insisting on a well-formed url and a successful response
pub async fn get_page_source(client: &reqwest::Client, url: &str) -> Result<String> {
    let url = reqwest::Url::parse(url)
        .map_err(|e| Error::Scrape(format!("invalid url {}: {}", url, e)))?;

    let res = client.get(url.clone()).send().await?;
    if !res.status().is_success() {
        return Err(Error::Scrape(format!(
            "status code {} for url {}",
            res.status().as_u16(),
            url
        )));
    }

    Ok(res.text().await?)
}

/// Render page html down to the plain text the extraction prompt reads
fn page_text(html: &str) -> Result<String> {
    Ok(html2text::from_read(html.as_bytes(), 120))
}

/// Find all offices listed on a member's website.
///
/// If the page yields nothing, ask the model for a more likely locations url
/// and try that once before giving up with an empty list.
pub async fn find_addresses(
    client: &reqwest::Client,
    extractor: &AddressExtractor,
    url: &str,
) -> Result<Vec<ScrapedOffice>> {
    info!("finding for {}", url);

    let html = get_page_source(client, url).await?;
    let offices = extractor.extract_offices(&page_text(&html)?).await?;
    if !offices.is_empty() {
        return Ok(offices);
    }

    info!("couldn't get office locations at {}", url);
    // see if we can get a better url
    let locations_url = extractor.locations_url(&html).await?;

    info!("trying alternative for {}, {}", url, locations_url);
    let html = get_page_source(client, locations_url.trim()).await?;
    extractor.extract_offices(&page_text(&html)?).await
}

/// Scrape every sitting member's website.
///
/// Pages are fetched a bounded number at a time, started at least one
/// dispatch interval apart, in an attempt to not make rate limiting gods
/// angry. A failed fetch is logged and that member is left out of this
/// run's results.
pub async fn scrape_all(config: &Config) -> Result<Vec<ScrapeResult>> {
    let client = reqwest::Client::new();
    let extractor = AddressExtractor::new(client.clone(), &config.api_key, &config.model);

    let urls = roster::current_member_urls(&client).await;
    info!("got {} urls to scrape", urls.len());

    let semaphore = Arc::new(Semaphore::new(config.parallel));
    let results = Arc::new(Mutex::new(Vec::new()));
    let mut dispatch = tokio::time::interval(config.dispatch_interval);
    let mut handles = Vec::new();

    for (bioguide, url) in urls {
        dispatch.tick().await;
        let permit = semaphore
            .clone()
            .acquire_owned()
            .await
            .expect("semaphore closed");

        let client = client.clone();
        let extractor = extractor.clone();
        let results = results.clone();
        handles.push(tokio::spawn(async move {
            let _permit = permit;
            match find_addresses(&client, &extractor, &url).await {
                Ok(offices) => {
                    results.lock().unwrap().push(ScrapeResult {
                        bioguide,
                        url,
                        offices,
                    });
                }
                Err(e) => warn!("error processing {}: {}", url, e),
            }
        }));
    }

    for joined in futures::future::join_all(handles).await {
        if let Err(e) = joined {
            warn!("scrape task failed: {}", e);
        }
    }

    let results = std::mem::take(&mut *results.lock().unwrap());
    Ok(results)
}

/// Re-scrape a single url and patch its entry in the scraped office list
pub async fn scrape_one(config: &Config, url: &str) -> Result<()> {
    let client = reqwest::Client::new();
    let extractor = AddressExtractor::new(client.clone(), &config.api_key, &config.model);

    let offices = find_addresses(&client, &extractor, url).await?;

    let mut results = dataset::load_scrape_results(&config.offices_path)?;
    let Some(entry) = results.iter_mut().find(|r| r.url == url) else {
        return Err(Error::Scrape(
            "couldn't find that url to update in the office list".to_string(),
        ));
    };
    entry.offices = offices;

    dataset::save_scrape_results(&config.offices_path, &mut results)
}
