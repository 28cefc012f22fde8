use std::collections::HashMap;

use crate::model::{CountryStats, ResearcherRecord, SummaryStats};

/// Totals over every record. Missing metrics count as 0 but still count
/// toward the record total. The citation total saturates at `u64::MAX`.
pub fn summarize(records: &[ResearcherRecord]) -> SummaryStats {
    let total = records.len();
    let total_citations = records
        .iter()
        .map(ResearcherRecord::citedby_or_zero)
        .fold(0u64, u64::saturating_add);
    let hindex_sum: u128 = records.iter().map(|r| u128::from(r.hindex_or_zero())).sum();
    let highest_hindex = records
        .iter()
        .map(ResearcherRecord::hindex_or_zero)
        .max()
        .unwrap_or(0);

    let avg_hindex = if total > 0 {
        hindex_sum as f64 / total as f64
    } else {
        0.0
    };

    SummaryStats {
        total_researchers: total,
        avg_hindex: round_one_decimal(avg_hindex),
        total_citations,
        highest_hindex,
    }
}

/// Half-up rounding to one decimal (inputs are non-negative).
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Researchers per resolved country, most first. Ties keep first-seen order;
/// records without a country are skipped.
pub fn country_distribution(records: &[ResearcherRecord]) -> Vec<CountryStats> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut countries: Vec<CountryStats> = Vec::new();

    for country in records.iter().filter_map(ResearcherRecord::country) {
        match index.get(country) {
            Some(&i) => countries[i].count += 1,
            None => {
                index.insert(country, countries.len());
                countries.push(CountryStats { country: country.to_string(), count: 1 });
            }
        }
    }

    countries.sort_by(|a, b| b.count.cmp(&a.count));
    countries
}
