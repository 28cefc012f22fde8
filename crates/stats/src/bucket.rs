use crate::config::BucketSpec;
use crate::model::{DistributionBucket, Metric, ResearcherRecord};

/// Histogram of `metric` over `buckets`, in declared order.
///
/// Every record lands in the first bucket containing its value (missing reads
/// as 0). Empty buckets are kept so the distribution stays evenly spaced.
pub fn distribute(
    records: &[ResearcherRecord],
    metric: Metric,
    buckets: &[BucketSpec],
) -> Vec<DistributionBucket> {
    let mut counts = vec![0usize; buckets.len()];

    for record in records {
        let value = metric.value(record);
        match buckets.iter().position(|b| b.contains(value)) {
            Some(i) => counts[i] += 1,
            None => log::warn!("{metric} value {value} of '{}' fits no bucket", record.name),
        }
    }

    buckets
        .iter()
        .zip(counts)
        .map(|(spec, count)| DistributionBucket {
            label: spec.label.clone(),
            count,
            min: spec.min,
            max: spec.max,
        })
        .collect()
}
