//! Scrape legislator websites for district office addresses and reconcile
//! them into the congress-legislators dataset.
//!
//! The scraping side renders member websites to text and extracts candidate
//! offices with an LLM prompt; the reconcile side fuzzy-matches them against
//! the canonical YAML and merges additions and removals while keeping office
//! ids stable across runs.

pub mod config;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod format;
pub mod keys;
pub mod lint;
pub mod matcher;
pub mod normalize;
pub mod reconcile;
pub mod roster;
pub mod scrape;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use matcher::office_equals;
pub use reconcile::{apply_scrape, reconcile_offices, CapitalFilter, MergeStats};
pub use types::{CanonicalOffice, LegislatorOffices, ScrapeResult, ScrapedOffice};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::reconcile::{CapitalFilter, MergeStats};
    pub use crate::types::{CanonicalOffice, LegislatorOffices, ScrapeResult, ScrapedOffice};
}
