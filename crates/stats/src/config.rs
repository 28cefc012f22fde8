use std::collections::HashSet;

use serde::Deserialize;

use crate::error::StatsError;
use crate::taxonomy::MAIN_TRACKS;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Lookup tables the engine classifies and bins with.
///
/// Every section defaults to the built-in tables, so an override file only
/// needs the sections it changes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub sector: SectorConfig,
    #[serde(default)]
    pub buckets: BucketConfig,
    #[serde(default)]
    pub taxonomy: TrackConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

// ---------------------------------------------------------------------------
// Sector keywords
// ---------------------------------------------------------------------------

const ACADEMIA_KEYWORDS: &[&str] = &[
    "university", "univ", "college", "institute", "school", "faculty",
    "professor", "lecturer", "academic", "research center", "lab",
    "department", "dept", "academy", "polytechnic", "eth", "mit",
    "stanford", "berkeley", "harvard", "oxford", "cambridge", "caltech",
    "carnegie mellon", "georgia tech", "tu munich", "epfl", "inria",
    "max planck", "dfki", "rwth",
];

const INDUSTRY_KEYWORDS: &[&str] = &[
    "google", "meta", "facebook", "microsoft", "apple", "amazon", "aws",
    "nvidia", "intel", "ibm", "oracle", "salesforce", "adobe", "openai",
    "deepmind", "anthropic", "netflix", "uber", "lyft", "airbnb", "twitter",
    "linkedin", "snap", "bytedance", "tiktok", "alibaba", "tencent", "baidu",
    "samsung", "huawei", "qualcomm", "cisco", "vmware", "sap", "siemens",
    "bosch", "valeo", "inc.", "corp", "ltd", "llc", "gmbh", "co.",
];

#[derive(Debug, Clone, Deserialize)]
pub struct SectorConfig {
    #[serde(default = "default_academia_keywords")]
    pub academia_keywords: Vec<String>,
    #[serde(default = "default_industry_keywords")]
    pub industry_keywords: Vec<String>,
}

impl Default for SectorConfig {
    fn default() -> Self {
        Self {
            academia_keywords: default_academia_keywords(),
            industry_keywords: default_industry_keywords(),
        }
    }
}

fn default_academia_keywords() -> Vec<String> {
    ACADEMIA_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

fn default_industry_keywords() -> Vec<String> {
    INDUSTRY_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

/// Closed interval `[min, max]`; `max = None` is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BucketSpec {
    pub label: String,
    pub min: u64,
    #[serde(default)]
    pub max: Option<u64>,
}

impl BucketSpec {
    pub fn new(label: &str, min: u64, max: Option<u64>) -> Self {
        Self { label: label.to_string(), min, max }
    }

    pub fn contains(&self, value: u64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BucketConfig {
    #[serde(default = "default_hindex_buckets")]
    pub hindex: Vec<BucketSpec>,
    #[serde(default = "default_citation_buckets")]
    pub citations: Vec<BucketSpec>,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            hindex: default_hindex_buckets(),
            citations: default_citation_buckets(),
        }
    }
}

fn default_hindex_buckets() -> Vec<BucketSpec> {
    vec![
        BucketSpec::new("0-10", 0, Some(10)),
        BucketSpec::new("11-20", 11, Some(20)),
        BucketSpec::new("21-30", 21, Some(30)),
        BucketSpec::new("31-40", 31, Some(40)),
        BucketSpec::new("41-50", 41, Some(50)),
        BucketSpec::new("51-60", 51, Some(60)),
        BucketSpec::new("61-70", 61, Some(70)),
        BucketSpec::new("71-80", 71, Some(80)),
        BucketSpec::new("81-90", 81, Some(90)),
        BucketSpec::new("91+", 91, None),
    ]
}

fn default_citation_buckets() -> Vec<BucketSpec> {
    vec![
        BucketSpec::new("0-1K", 0, Some(1_000)),
        BucketSpec::new("1K-5K", 1_001, Some(5_000)),
        BucketSpec::new("5K-10K", 5_001, Some(10_000)),
        BucketSpec::new("10K-20K", 10_001, Some(20_000)),
        BucketSpec::new("20K-50K", 20_001, Some(50_000)),
        BucketSpec::new("50K-100K", 50_001, Some(100_000)),
        BucketSpec::new("100K+", 100_001, None),
    ]
}

// ---------------------------------------------------------------------------
// Tracks + Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct TrackConfig {
    /// Ordered track list. Ties in the research-area view keep this order.
    #[serde(default = "default_tracks")]
    pub tracks: Vec<String>,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self { tracks: default_tracks() }
    }
}

fn default_tracks() -> Vec<String> {
    MAIN_TRACKS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top_limit: default_top_limit() }
    }
}

fn default_top_limit() -> usize {
    10
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl EngineConfig {
    pub fn from_toml(input: &str) -> Result<Self, StatsError> {
        let config: EngineConfig =
            toml::from_str(input).map_err(|e| StatsError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), StatsError> {
        validate_keywords("academia_keywords", &self.sector.academia_keywords)?;
        validate_keywords("industry_keywords", &self.sector.industry_keywords)?;
        validate_buckets("hindex", &self.buckets.hindex)?;
        validate_buckets("citations", &self.buckets.citations)?;

        if self.taxonomy.tracks.is_empty() {
            return Err(StatsError::ConfigValidation("track list is empty".into()));
        }
        let mut seen = HashSet::new();
        for track in &self.taxonomy.tracks {
            if !seen.insert(track.as_str()) {
                return Err(StatsError::ConfigValidation(format!(
                    "duplicate track '{track}'"
                )));
            }
        }

        Ok(())
    }
}

fn validate_keywords(name: &str, keywords: &[String]) -> Result<(), StatsError> {
    if keywords.is_empty() {
        return Err(StatsError::ConfigValidation(format!("{name} is empty")));
    }
    if keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(StatsError::ConfigValidation(format!(
            "{name} contains a blank keyword"
        )));
    }
    Ok(())
}

/// Buckets must tile `[0, +inf)`: start at 0, no gaps or overlaps, only the
/// last one unbounded.
fn validate_buckets(name: &str, buckets: &[BucketSpec]) -> Result<(), StatsError> {
    let Some(first) = buckets.first() else {
        return Err(StatsError::ConfigValidation(format!("{name} buckets are empty")));
    };
    if first.min != 0 {
        return Err(StatsError::ConfigValidation(format!(
            "{name} buckets must start at 0, first bucket '{}' starts at {}",
            first.label, first.min
        )));
    }

    let last_index = buckets.len() - 1;
    for (i, bucket) in buckets.iter().enumerate() {
        match bucket.max {
            None if i != last_index => {
                return Err(StatsError::ConfigValidation(format!(
                    "{name} bucket '{}' is unbounded but not last",
                    bucket.label
                )));
            }
            Some(_) if i == last_index => {
                return Err(StatsError::ConfigValidation(format!(
                    "{name} last bucket '{}' must be unbounded",
                    bucket.label
                )));
            }
            Some(max) if max < bucket.min => {
                return Err(StatsError::ConfigValidation(format!(
                    "{name} bucket '{}' has max {max} below min {}",
                    bucket.label, bucket.min
                )));
            }
            _ => {}
        }

        if let Some(next) = buckets.get(i + 1) {
            // Non-last buckets are bounded (checked above).
            let expected = bucket.max.and_then(|m| m.checked_add(1));
            if expected != Some(next.min) {
                return Err(StatsError::ConfigValidation(format!(
                    "{name} bucket '{}' must start right after '{}'",
                    next.label, bucket.label
                )));
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
