use crate::aggregate::{country_distribution, summarize};
use crate::bucket::distribute;
use crate::classify::{position_distribution, SectorClassifier};
use crate::config::EngineConfig;
use crate::error::StatsError;
use crate::model::{
    CountryStats, DistributionBucket, Metric, PositionStats, ResearchAreaStats, ResearcherRecord,
    SectorStats, StatsInput, StatsMeta, StatsReport, SummaryStats, TopResearcher,
};
use crate::rank::top_by;
use crate::taxonomy::{count_research_areas, Taxonomy};

/// Stateless facade over every statistical view.
///
/// Holds only the lookup tables built from [`EngineConfig`]; each method is a
/// pure function of its arguments.
#[derive(Debug, Clone)]
pub struct StatsEngine {
    config: EngineConfig,
    sectors: SectorClassifier,
}

impl StatsEngine {
    pub fn new(config: EngineConfig) -> Result<Self, StatsError> {
        config.validate()?;
        let sectors = SectorClassifier::new(&config.sector);
        Ok(Self { config, sectors })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn summary(&self, records: &[ResearcherRecord]) -> SummaryStats {
        summarize(records)
    }

    pub fn country_distribution(&self, records: &[ResearcherRecord]) -> Vec<CountryStats> {
        country_distribution(records)
    }

    pub fn research_area_distribution(
        &self,
        records: &[ResearcherRecord],
        taxonomy: &Taxonomy,
    ) -> Vec<ResearchAreaStats> {
        count_research_areas(records, taxonomy, &self.config.taxonomy.tracks)
    }

    pub fn hindex_distribution(&self, records: &[ResearcherRecord]) -> Vec<DistributionBucket> {
        distribute(records, Metric::HIndex, &self.config.buckets.hindex)
    }

    pub fn citations_distribution(&self, records: &[ResearcherRecord]) -> Vec<DistributionBucket> {
        distribute(records, Metric::Citations, &self.config.buckets.citations)
    }

    pub fn sector_breakdown(&self, records: &[ResearcherRecord]) -> SectorStats {
        self.sectors.breakdown(records)
    }

    pub fn position_distribution(&self, records: &[ResearcherRecord]) -> Vec<PositionStats> {
        position_distribution(records)
    }

    pub fn top_by_hindex(&self, records: &[ResearcherRecord], limit: usize) -> Vec<TopResearcher> {
        top_by(records, Metric::HIndex, limit)
    }

    pub fn top_by_citations(&self, records: &[ResearcherRecord], limit: usize) -> Vec<TopResearcher> {
        top_by(records, Metric::Citations, limit)
    }

    /// Every view over one snapshot, top lists capped at the configured limit.
    pub fn report(&self, records: &[ResearcherRecord], taxonomy: &Taxonomy) -> StatsReport {
        let limit = self.config.report.top_limit;
        log::debug!(
            "computing statistics for {} records ({} taxonomy tracks, top {limit})",
            records.len(),
            taxonomy.tracks().count()
        );

        let report = StatsReport {
            meta: StatsMeta {
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                top_limit: limit,
            },
            summary: self.summary(records),
            countries: self.country_distribution(records),
            research_areas: self.research_area_distribution(records, taxonomy),
            hindex_distribution: self.hindex_distribution(records),
            citations_distribution: self.citations_distribution(records),
            sectors: self.sector_breakdown(records),
            positions: self.position_distribution(records),
            top_by_hindex: self.top_by_hindex(records, limit),
            top_by_citations: self.top_by_citations(records, limit),
        };

        log::debug!(
            "statistics: {} countries, {} research areas, {} positions",
            report.countries.len(),
            report.research_areas.len(),
            report.positions.len()
        );
        report
    }
}

impl Default for StatsEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        let sectors = SectorClassifier::new(&config.sector);
        Self { config, sectors }
    }
}

/// Compute the full report for `input` under `config`.
pub fn run(config: &EngineConfig, input: &StatsInput) -> Result<StatsReport, StatsError> {
    let engine = StatsEngine::new(config.clone())?;
    Ok(engine.report(&input.records, &input.taxonomy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BucketSpec;
    use crate::model::Location;

    fn researcher(
        name: &str,
        affiliation: &str,
        position: &str,
        hindex: Option<u64>,
        country: Option<&str>,
        interests: &[&str],
    ) -> ResearcherRecord {
        ResearcherRecord {
            name: name.into(),
            affiliation: affiliation.into(),
            position: position.into(),
            hindex,
            citedby: hindex.map(|h| h * 100),
            photo: String::new(),
            location: country.map(|c| Location { country: Some(c.into()) }),
            standardized_interests: interests.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn sample() -> (Vec<ResearcherRecord>, Taxonomy) {
        let records = vec![
            researcher("a", "Cairo University", "Professor", Some(40), Some("Egypt"), &["NLP"]),
            researcher("b", "Google", "Research Scientist", Some(60), Some("USA"), &["Object Detection"]),
            researcher("c", "", "", None, None, &[]),
        ];
        let mut taxonomy = Taxonomy::new();
        taxonomy.insert("Natural Language Processing", ["NLP"]);
        taxonomy.insert("Computer Vision", ["Object Detection"]);
        (records, taxonomy)
    }

    #[test]
    fn report_covers_every_view() {
        let (records, taxonomy) = sample();
        let report = StatsEngine::default().report(&records, &taxonomy);

        assert_eq!(report.summary.total_researchers, 3);
        assert_eq!(report.summary.highest_hindex, 60);
        assert_eq!(report.countries.len(), 2);
        assert_eq!(report.research_areas.len(), 2);
        assert_eq!(report.hindex_distribution.len(), 10);
        assert_eq!(report.citations_distribution.len(), 7);
        assert_eq!(report.sectors, SectorStats { academia: 1, industry: 1, other: 1 });
        assert_eq!(report.positions.len(), 2);
        assert_eq!(report.top_by_hindex[0].name, "b");
        assert_eq!(report.top_by_citations.len(), 3);
        assert_eq!(report.meta.top_limit, 10);
    }

    #[test]
    fn report_is_deterministic() {
        let (records, taxonomy) = sample();
        let engine = StatsEngine::default();
        assert_eq!(engine.report(&records, &taxonomy), engine.report(&records, &taxonomy));
    }

    #[test]
    fn configured_limit_caps_top_lists() {
        let (records, taxonomy) = sample();
        let mut config = EngineConfig::default();
        config.report.top_limit = 1;
        let input = StatsInput { records, taxonomy };
        let report = run(&config, &input).unwrap();
        assert_eq!(report.top_by_hindex.len(), 1);
        assert_eq!(report.top_by_citations.len(), 1);
    }

    #[test]
    fn invalid_config_rejected() {
        let mut config = EngineConfig::default();
        config.buckets.hindex = vec![BucketSpec::new("bounded", 0, Some(5))];
        let err = StatsEngine::new(config).unwrap_err();
        assert!(matches!(err, StatsError::ConfigValidation(_)));
    }

    #[test]
    fn engine_keeps_validated_config() {
        let mut config = EngineConfig::default();
        config.report.top_limit = 4;
        let engine = StatsEngine::new(config).unwrap();
        assert_eq!(engine.config().report.top_limit, 4);
        assert_eq!(engine.config().taxonomy.tracks.len(), 16);
    }

    #[test]
    fn empty_taxonomy_yields_no_areas() {
        let (records, _) = sample();
        let areas = StatsEngine::default().research_area_distribution(&records, &Taxonomy::new());
        assert!(areas.is_empty());
    }
}
