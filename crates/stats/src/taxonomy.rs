//! Research-track taxonomy and the per-track researcher counter.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde_json::Value;

use crate::error::StatsError;
use crate::model::{ResearchAreaStats, ResearcherRecord};

/// The 16 top-level research tracks, in declared order.
pub const MAIN_TRACKS: [&str; 16] = [
    "Artificial Intelligence",
    "Natural Language Processing",
    "Computer Vision",
    "Multimodal AI",
    "Robotics & Autonomous Systems",
    "Data Science & Analytics",
    "Data Management",
    "Computer Systems & Architecture",
    "Computer Networks & Communications",
    "Software Engineering",
    "Programming Languages",
    "Theory of Computation",
    "Security & Cryptography",
    "Human-Computer Interaction",
    "Graphics & Visualization",
    "Applied Computing",
];

/// Track name -> interest labels that count toward it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    categories: BTreeMap<String, BTreeSet<String>>,
}

impl Taxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add interest labels to a track, creating the track if needed.
    pub fn insert<I, S>(&mut self, track: &str, interests: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories
            .entry(track.to_string())
            .or_default()
            .extend(interests.into_iter().map(Into::into));
    }

    /// Parse a `{"categories": {"<track>": ["<interest>", ...]}}` document.
    ///
    /// Only invalid JSON is an error. Malformed entries are skipped so the
    /// affected tracks simply count zero.
    pub fn from_json(input: &str) -> Result<Self, StatsError> {
        let value: Value =
            serde_json::from_str(input).map_err(|e| StatsError::TaxonomyParse(e.to_string()))?;
        Ok(Self::from_value(&value))
    }

    /// Like [`Taxonomy::from_json`], but invalid JSON yields an empty taxonomy.
    pub fn from_json_or_empty(input: &str) -> Self {
        Self::from_json(input).unwrap_or_else(|e| {
            log::warn!("{e}; research areas will be empty");
            Self::default()
        })
    }

    pub fn from_value(value: &Value) -> Self {
        let mut taxonomy = Self::default();

        let Some(categories) = value.get("categories").and_then(Value::as_object) else {
            log::warn!("taxonomy has no 'categories' object");
            return taxonomy;
        };

        for (track, interests) in categories {
            let Some(items) = interests.as_array() else {
                log::warn!("taxonomy track '{track}' is not a list, skipped");
                continue;
            };
            let labels = items.iter().filter_map(|item| {
                let label = item.as_str();
                if label.is_none() {
                    log::warn!("taxonomy track '{track}': non-string interest {item} skipped");
                }
                label
            });
            taxonomy.insert(track, labels);
        }

        taxonomy
    }

    pub fn tracks(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn interests(&self, track: &str) -> Option<&BTreeSet<String>> {
        self.categories.get(track)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Count distinct records per track, in `tracks` order.
///
/// A record counts at most once per track no matter how many of its interests
/// map there, but may count toward several tracks. Zero-count tracks are
/// dropped; ties keep `tracks` order. Interests that match no track are ignored.
pub fn count_research_areas(
    records: &[ResearcherRecord],
    taxonomy: &Taxonomy,
    tracks: &[String],
) -> Vec<ResearchAreaStats> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let mut counted: HashSet<&str> = HashSet::new();
        for interest in &record.standardized_interests {
            for (track, keywords) in &taxonomy.categories {
                if keywords.contains(interest) && counted.insert(track.as_str()) {
                    *counts.entry(track.as_str()).or_insert(0) += 1;
                }
            }
        }
    }

    for track in taxonomy.tracks() {
        if !tracks.iter().any(|t| t == track) {
            log::debug!("taxonomy track '{track}' is not a configured track, ignored");
        }
    }

    let mut areas: Vec<ResearchAreaStats> = tracks
        .iter()
        .map(|track| ResearchAreaStats {
            area: track.clone(),
            count: counts.get(track.as_str()).copied().unwrap_or(0),
        })
        .filter(|a| a.count > 0)
        .collect();

    // Stable: equal counts keep track-list order.
    areas.sort_by(|a, b| b.count.cmp(&a.count));
    areas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks() -> Vec<String> {
        MAIN_TRACKS.iter().map(|s| s.to_string()).collect()
    }

    fn researcher(interests: &[&str]) -> ResearcherRecord {
        ResearcherRecord {
            name: "r".into(),
            standardized_interests: interests.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn taxonomy() -> Taxonomy {
        let mut t = Taxonomy::new();
        t.insert("Natural Language Processing", ["NLP", "Machine Translation"]);
        t.insert("Computer Vision", ["Image Segmentation", "Object Detection"]);
        t.insert("Artificial Intelligence", ["Machine Learning", "Deep Learning"]);
        t
    }

    #[test]
    fn single_match_counts_once() {
        let records = vec![researcher(&["NLP"])];
        let areas = count_research_areas(&records, &taxonomy(), &tracks());
        assert_eq!(
            areas,
            vec![ResearchAreaStats { area: "Natural Language Processing".into(), count: 1 }]
        );
    }

    #[test]
    fn dedup_within_record() {
        let records = vec![researcher(&["NLP", "Machine Translation", "NLP"])];
        let areas = count_research_areas(&records, &taxonomy(), &tracks());
        assert_eq!(areas.len(), 1);
        assert_eq!(areas[0].count, 1);
    }

    #[test]
    fn record_counts_toward_several_tracks() {
        let records = vec![researcher(&["NLP", "Object Detection"])];
        let areas = count_research_areas(&records, &taxonomy(), &tracks());
        assert_eq!(areas.len(), 2);
        assert!(areas.iter().all(|a| a.count == 1));
    }

    #[test]
    fn ties_keep_track_order_and_sorted_desc() {
        let records = vec![
            researcher(&["Object Detection"]),
            researcher(&["NLP"]),
            researcher(&["Deep Learning"]),
            researcher(&["Image Segmentation"]),
        ];
        let areas = count_research_areas(&records, &taxonomy(), &tracks());
        let names: Vec<_> = areas.iter().map(|a| a.area.as_str()).collect();
        assert_eq!(
            names,
            vec!["Computer Vision", "Artificial Intelligence", "Natural Language Processing"]
        );
        assert_eq!(areas[0].count, 2);
    }

    #[test]
    fn unknown_interest_and_unlisted_track_ignored() {
        let mut t = taxonomy();
        t.insert("Quantum Basket Weaving", ["Qubits"]);
        let records = vec![researcher(&["Qubits", "Gardening"])];
        let areas = count_research_areas(&records, &t, &tracks());
        assert!(areas.is_empty());
    }

    #[test]
    fn interest_match_is_exact() {
        let records = vec![researcher(&["nlp"])];
        assert!(count_research_areas(&records, &taxonomy(), &tracks()).is_empty());
    }

    #[test]
    fn parse_categories_document() {
        let json = r#"{"categories": {
            "Computer Vision": ["Object Detection", "Image Segmentation"],
            "Data Management": ["Databases"]
        }}"#;
        let t = Taxonomy::from_json(json).unwrap();
        assert_eq!(t.tracks().count(), 2);
        assert!(t.interests("Data Management").unwrap().contains("Databases"));
    }

    #[test]
    fn malformed_entries_degrade_to_zero() {
        let json = r#"{"categories": {
            "Computer Vision": "Object Detection",
            "Data Management": ["Databases", 42]
        }}"#;
        let t = Taxonomy::from_json(json).unwrap();
        assert!(t.interests("Computer Vision").is_none());
        assert_eq!(t.interests("Data Management").unwrap().len(), 1);

        let records = vec![researcher(&["Object Detection", "Databases"])];
        let areas = count_research_areas(&records, &t, &tracks());
        assert_eq!(
            areas,
            vec![ResearchAreaStats { area: "Data Management".into(), count: 1 }]
        );
    }

    #[test]
    fn missing_categories_is_empty() {
        let t = Taxonomy::from_json(r#"{"tracks": []}"#).unwrap();
        assert!(t.is_empty());
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(Taxonomy::from_json("{"), Err(StatsError::TaxonomyParse(_))));
        assert!(Taxonomy::from_json_or_empty("{").is_empty());
    }
}
