use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StatsError;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Resolved geolocation of a profile. Only the country is aggregated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub country: Option<String>,
}

/// A single researcher profile as supplied by the record source.
///
/// Absent or `null` strings read as empty, absent metrics stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearcherRecord {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub affiliation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(default)]
    pub hindex: Option<u64>,
    #[serde(default)]
    pub citedby: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub standardized_interests: Vec<String>,
}

impl ResearcherRecord {
    pub fn hindex_or_zero(&self) -> u64 {
        self.hindex.unwrap_or(0)
    }

    pub fn citedby_or_zero(&self) -> u64 {
        self.citedby.unwrap_or(0)
    }

    /// Resolved country, `None` when enrichment did not produce one.
    pub fn country(&self) -> Option<&str> {
        self.location
            .as_ref()
            .and_then(|l| l.country.as_deref())
            .filter(|c| !c.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a JSON array of researcher profiles.
pub fn parse_records(input: &str) -> Result<Vec<ResearcherRecord>, StatsError> {
    serde_json::from_str(input).map_err(|e| StatsError::RecordParse(e.to_string()))
}

/// Numeric field used for bucketing and ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    HIndex,
    Citations,
}

impl Metric {
    /// Metric value of a record; missing reads as 0.
    pub fn value(&self, record: &ResearcherRecord) -> u64 {
        match self {
            Self::HIndex => record.hindex_or_zero(),
            Self::Citations => record.citedby_or_zero(),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HIndex => write!(f, "hindex"),
            Self::Citations => write!(f, "citations"),
        }
    }
}

// ---------------------------------------------------------------------------
// Classification labels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Academia,
    Industry,
    Other,
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Academia => write!(f, "academia"),
            Self::Industry => write!(f, "industry"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Canonical position label produced by the position normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionTitle {
    FullProfessor,
    AssociateProfessor,
    AssistantProfessor,
    Professor,
    Lecturer,
    Postdoctoral,
    PhdStudent,
    ResearchScientist,
    Engineer,
    DirectorLead,
    Manager,
    Fellow,
    Scientist,
    Other,
}

impl PositionTitle {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullProfessor => "Full Professor",
            Self::AssociateProfessor => "Associate Professor",
            Self::AssistantProfessor => "Assistant Professor",
            Self::Professor => "Professor",
            Self::Lecturer => "Lecturer",
            Self::Postdoctoral => "Postdoctoral",
            Self::PhdStudent => "PhD Student",
            Self::ResearchScientist => "Research Scientist",
            Self::Engineer => "Engineer",
            Self::DirectorLead => "Director/Lead",
            Self::Manager => "Manager",
            Self::Fellow => "Fellow",
            Self::Scientist => "Scientist",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for PositionTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_researchers: usize,
    /// Mean h-index over all records, rounded to one decimal.
    #[serde(rename = "avgHIndex")]
    pub avg_hindex: f64,
    pub total_citations: u64,
    #[serde(rename = "highestHIndex")]
    pub highest_hindex: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryStats {
    pub country: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchAreaStats {
    pub area: String,
    pub count: usize,
}

/// One histogram bar. `max == None` is the unbounded top bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionBucket {
    pub label: String,
    pub count: usize,
    pub min: u64,
    pub max: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectorStats {
    pub academia: usize,
    pub industry: usize,
    pub other: usize,
}

impl SectorStats {
    pub fn record(&mut self, sector: Sector) {
        match sector {
            Sector::Academia => self.academia += 1,
            Sector::Industry => self.industry += 1,
            Sector::Other => self.other += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.academia + self.industry + self.other
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionStats {
    pub position: String,
    pub count: usize,
}

/// Display projection of a ranked record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopResearcher {
    pub name: String,
    pub affiliation: String,
    pub hindex: u64,
    pub citedby: u64,
    pub photo: String,
}

impl From<&ResearcherRecord> for TopResearcher {
    fn from(record: &ResearcherRecord) -> Self {
        Self {
            name: record.name.clone(),
            affiliation: record.affiliation.clone(),
            hindex: record.hindex_or_zero(),
            citedby: record.citedby_or_zero(),
            photo: record.photo.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Pre-loaded engine input.
#[derive(Debug, Clone, Default)]
pub struct StatsInput {
    pub records: Vec<ResearcherRecord>,
    pub taxonomy: crate::taxonomy::Taxonomy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsMeta {
    pub engine_version: String,
    pub top_limit: usize,
}

/// Every statistical view over one record snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub meta: StatsMeta,
    pub summary: SummaryStats,
    pub countries: Vec<CountryStats>,
    pub research_areas: Vec<ResearchAreaStats>,
    #[serde(rename = "hindexDistribution")]
    pub hindex_distribution: Vec<DistributionBucket>,
    pub citations_distribution: Vec<DistributionBucket>,
    pub sectors: SectorStats,
    pub positions: Vec<PositionStats>,
    #[serde(rename = "topByHIndex")]
    pub top_by_hindex: Vec<TopResearcher>,
    pub top_by_citations: Vec<TopResearcher>,
}
