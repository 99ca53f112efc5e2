use serde::{Deserialize, Serialize};

/// One office extracted from a member's website for the current run.
/// Absent fields come back as empty strings, matching what the extraction
/// prompt returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapedOffice {
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub suite: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub building: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub fax: String,
}

/// Everything scraped from one member's website in one pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub bioguide: String,
    pub url: String,
    #[serde(default)]
    pub offices: Vec<ScrapedOffice>,
}

/// A district office as it appears in the upstream dataset. Field order
/// matters: it is the order the YAML is written in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalOffice {
    pub id: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub suite: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub building: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fax: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hours: String,
}

/// Cross-reference ids for one legislator. The roster file carries more ids
/// than these; the rest are ignored on parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegislatorIds {
    pub bioguide: String,
    #[serde(default)]
    pub govtrack: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub thomas: String,
}

/// One legislator's entry in the district-offices dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegislatorOffices {
    pub id: LegislatorIds,
    #[serde(default)]
    pub offices: Vec<CanonicalOffice>,
}

/// A legislator as listed in the current-members roster
#[derive(Debug, Clone, Deserialize)]
pub struct Legislator {
    pub id: LegislatorIds,
    #[serde(default)]
    pub terms: Vec<Term>,
}

/// One term of service; the last one decides whether a member is sitting
#[derive(Debug, Clone, Deserialize)]
pub struct Term {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub url: String,
}
