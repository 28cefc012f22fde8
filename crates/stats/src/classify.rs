use crate::config::SectorConfig;
use crate::model::{PositionStats, PositionTitle, ResearcherRecord, Sector, SectorStats};

// ---------------------------------------------------------------------------
// Sector
// ---------------------------------------------------------------------------

/// Keyword classifier over the lowercased `affiliation + " " + position` text.
///
/// Academia is tested first and wins outright; industry only applies when no
/// academia keyword matched.
#[derive(Debug, Clone)]
pub struct SectorClassifier {
    academia: Vec<String>,
    industry: Vec<String>,
}

impl SectorClassifier {
    pub fn new(config: &SectorConfig) -> Self {
        Self {
            academia: config.academia_keywords.iter().map(|k| k.to_lowercase()).collect(),
            industry: config.industry_keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    pub fn classify(&self, record: &ResearcherRecord) -> Sector {
        let combined = format!(
            "{} {}",
            record.affiliation.to_lowercase(),
            record.position.to_lowercase()
        );

        if self.academia.iter().any(|kw| combined.contains(kw.as_str())) {
            Sector::Academia
        } else if self.industry.iter().any(|kw| combined.contains(kw.as_str())) {
            Sector::Industry
        } else {
            Sector::Other
        }
    }

    /// Counts always sum to `records.len()`.
    pub fn breakdown(&self, records: &[ResearcherRecord]) -> SectorStats {
        let mut stats = SectorStats::default();
        for record in records {
            stats.record(self.classify(record));
        }
        stats
    }
}

impl Default for SectorClassifier {
    fn default() -> Self {
        Self::new(&SectorConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

enum Needle {
    /// Every substring must be present.
    All(&'static [&'static str]),
    /// At least one substring must be present.
    Any(&'static [&'static str]),
}

impl Needle {
    fn matches(&self, text: &str) -> bool {
        match self {
            Self::All(terms) => terms.iter().all(|t| text.contains(t)),
            Self::Any(terms) => terms.iter().any(|t| text.contains(t)),
        }
    }
}

/// Evaluated top to bottom, first match wins. Ranked professor titles must
/// precede the bare "professor" rule.
const POSITION_RULES: &[(Needle, PositionTitle)] = &[
    (Needle::All(&["full", "professor"]), PositionTitle::FullProfessor),
    (Needle::All(&["associate", "professor"]), PositionTitle::AssociateProfessor),
    (Needle::All(&["assistant", "professor"]), PositionTitle::AssistantProfessor),
    (Needle::Any(&["professor"]), PositionTitle::Professor),
    (Needle::Any(&["lecturer", "teaching"]), PositionTitle::Lecturer),
    (Needle::Any(&["postdoc", "post-doc"]), PositionTitle::Postdoctoral),
    (Needle::Any(&["phd", "doctoral", "graduate"]), PositionTitle::PhdStudent),
    (Needle::Any(&["research scientist", "researcher"]), PositionTitle::ResearchScientist),
    (Needle::Any(&["engineer", "developer"]), PositionTitle::Engineer),
    (Needle::Any(&["director", "head", "lead"]), PositionTitle::DirectorLead),
    (Needle::Any(&["manager"]), PositionTitle::Manager),
    (Needle::Any(&["fellow"]), PositionTitle::Fellow),
    (Needle::Any(&["scientist"]), PositionTitle::Scientist),
];

/// Map a free-text position to its canonical title.
pub fn normalize_position(position: &str) -> PositionTitle {
    let lower = position.to_lowercase();
    POSITION_RULES
        .iter()
        .find(|(needle, _)| needle.matches(&lower))
        .map(|(_, title)| *title)
        .unwrap_or(PositionTitle::Other)
}

/// Count normalized titles, most common first.
///
/// Records with an empty position are left out. Ties keep the order in which
/// each title was first seen.
pub fn position_distribution(records: &[ResearcherRecord]) -> Vec<PositionStats> {
    let mut positions: Vec<PositionStats> = Vec::new();

    for record in records.iter().filter(|r| !r.position.is_empty()) {
        let label = normalize_position(&record.position).label();
        match positions.iter_mut().find(|p| p.position == label) {
            Some(entry) => entry.count += 1,
            None => positions.push(PositionStats { position: label.to_string(), count: 1 }),
        }
    }

    positions.sort_by(|a, b| b.count.cmp(&a.count));
    positions
}
