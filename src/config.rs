use crate::error::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Roster of everyone currently serving
pub const ROSTER_URL: &str =
    "https://raw.githubusercontent.com/unitedstates/congress-legislators/main/legislators-current.yaml";

/// The canonical district-office dataset being maintained
pub const DISTRICT_OFFICES_URL: &str =
    "https://raw.githubusercontent.com/unitedstates/congress-legislators/main/legislators-district-offices.yaml";

/// Default scraped office list location
pub const OFFICES_FILE: &str = "offices.json";

/// Default location for the merged dataset
pub const UPDATED_OFFICES_FILE: &str = "updated_legislators-district-offices.yaml";

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_PARALLEL: usize = 5;

/// Runtime configuration, from the environment with flag overrides applied
/// in main
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the extraction model
    pub api_key: String,
    /// Chat model used for extraction
    pub model: String,
    /// Scraped office list path
    pub offices_path: PathBuf,
    /// Merged dataset path
    pub updated_path: PathBuf,
    /// Max in-flight page fetches
    pub parallel: usize,
    /// Minimum spacing between request dispatches
    pub dispatch_interval: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        let parallel = std::env::var("OFFICEBOT_JOBS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PARALLEL);

        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            offices_path: PathBuf::from(OFFICES_FILE),
            updated_path: PathBuf::from(UPDATED_OFFICES_FILE),
            parallel,
            dispatch_interval: Duration::from_secs(1),
        }
    }

    /// Commands that talk to the extraction model need a key
    pub fn require_api_key(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::Config(
                "no OpenAI API key found, set OPENAI_API_KEY".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.parallel == 0 {
            return Err(Error::Config("parallel must be at least 1".to_string()));
        }
        if self.dispatch_interval.is_zero() {
            return Err(Error::Config(
                "dispatch interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
