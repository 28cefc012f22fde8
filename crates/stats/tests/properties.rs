// Property-based tests for the aggregation invariants.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use proptest::prelude::*;
use scholar_stats::model::Location;
use scholar_stats::{ResearcherRecord, StatsEngine, Taxonomy};

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

const INTERESTS: &[&str] = &["NLP", "Object Detection", "Databases", "Deep Learning", "Knitting"];

fn taxonomy() -> Taxonomy {
    let mut t = Taxonomy::new();
    t.insert("Natural Language Processing", ["NLP"]);
    t.insert("Computer Vision", ["Object Detection"]);
    t.insert("Data Management", ["Databases"]);
    t.insert("Artificial Intelligence", ["Deep Learning", "NLP"]);
    t
}

/// Affiliation/position text: keywords from both sector lists, noise, empty.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        2 => Just(String::new()),
        1 => Just("Cairo University".to_string()),
        1 => Just("Google DeepMind".to_string()),
        1 => Just("Professor at Meta".to_string()),
        1 => Just("Senior Research Engineer".to_string()),
        2 => r"[A-Za-z ]{0,20}",
    ]
}

fn arb_record() -> impl Strategy<Value = ResearcherRecord> {
    (
        arb_text(),
        arb_text(),
        proptest::option::of(0u64..200),
        proptest::option::of(0u64..500_000),
        proptest::option::of(prop_oneof![
            Just("Egypt".to_string()),
            Just("USA".to_string()),
            Just("Germany".to_string()),
            Just(String::new()),
        ]),
        proptest::collection::vec(proptest::sample::select(INTERESTS), 0..4),
    )
        .prop_map(|(affiliation, position, hindex, citedby, country, interests)| ResearcherRecord {
            name: "r".into(),
            affiliation,
            position,
            hindex,
            citedby,
            photo: String::new(),
            location: country.map(|c| Location { country: Some(c) }),
            standardized_interests: interests.into_iter().map(String::from).collect(),
        })
}

fn arb_records() -> impl Strategy<Value = Vec<ResearcherRecord>> {
    proptest::collection::vec(arb_record(), 0..40)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn sectors_partition_records(records in arb_records()) {
        let stats = StatsEngine::default().sector_breakdown(&records);
        prop_assert_eq!(stats.academia + stats.industry + stats.other, records.len());
    }

    #[test]
    fn buckets_partition_records(records in arb_records()) {
        let engine = StatsEngine::default();
        let hindex: usize = engine.hindex_distribution(&records).iter().map(|b| b.count).sum();
        let citations: usize = engine.citations_distribution(&records).iter().map(|b| b.count).sum();
        prop_assert_eq!(hindex, records.len());
        prop_assert_eq!(citations, records.len());
    }

    #[test]
    fn summary_counts_every_record(records in arb_records()) {
        let summary = StatsEngine::default().summary(&records);
        prop_assert_eq!(summary.total_researchers, records.len());
        let max = records.iter().map(|r| r.hindex.unwrap_or(0)).max().unwrap_or(0);
        prop_assert_eq!(summary.highest_hindex, max);
        prop_assert!(summary.avg_hindex <= max as f64);
    }

    #[test]
    fn countries_non_increasing(records in arb_records()) {
        let countries = StatsEngine::default().country_distribution(&records);
        prop_assert!(countries.windows(2).all(|w| w[0].count >= w[1].count));
        let resolved = records.iter().filter(|r| r.country().is_some()).count();
        prop_assert_eq!(countries.iter().map(|c| c.count).sum::<usize>(), resolved);
    }

    #[test]
    fn area_counts_bounded_by_records(records in arb_records()) {
        let areas = StatsEngine::default().research_area_distribution(&records, &taxonomy());
        prop_assert!(areas.iter().all(|a| a.count > 0 && a.count <= records.len()));
        prop_assert!(areas.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn top_list_sorted_and_capped(records in arb_records(), limit in 0usize..15) {
        let top = StatsEngine::default().top_by_citations(&records, limit);
        prop_assert_eq!(top.len(), limit.min(records.len()));
        prop_assert!(top.windows(2).all(|w| w[0].citedby >= w[1].citedby));
    }

    #[test]
    fn report_is_pure(records in arb_records()) {
        let engine = StatsEngine::default();
        let taxonomy = taxonomy();
        prop_assert_eq!(engine.report(&records, &taxonomy), engine.report(&records, &taxonomy));
    }
}
