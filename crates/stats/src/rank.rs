use std::cmp::Reverse;

use crate::model::{Metric, ResearcherRecord, TopResearcher};

/// The `limit` highest records by `metric`, highest first.
///
/// Equal values keep input order. Fewer than `limit` records returns them all.
pub fn top_by(records: &[ResearcherRecord], metric: Metric, limit: usize) -> Vec<TopResearcher> {
    if limit == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<&ResearcherRecord> = records.iter().collect();
    ranked.sort_by_key(|r| Reverse(metric.value(r)));
    ranked.into_iter().take(limit).map(TopResearcher::from).collect()
}
