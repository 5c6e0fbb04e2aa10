//! Aggregate statistics over joined records.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use poi_map_analytics_models::AnalysisReport;
use poi_map_poi_models::MergedRecord;

/// Running totals for one type.
#[derive(Debug, Default, Clone, Copy)]
struct TypeTotals {
    count: u64,
    rating_sum: f64,
}

/// Partitions `records` into complete and incomplete ones and aggregates
/// the complete ones by type.
///
/// The most reviewed record is chosen by a total order (most reviews, then
/// smallest id), so the result does not depend on the order of `records`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze(records: &[MergedRecord]) -> AnalysisReport {
    let mut totals: BTreeMap<&str, TypeTotals> = BTreeMap::new();
    let mut most_reviewed: Option<&MergedRecord> = None;
    let mut incomplete = Vec::new();

    for record in records {
        let Some((_, metadata)) = record.complete() else {
            incomplete.push(record.clone());
            continue;
        };

        let entry = totals.entry(metadata.category.as_str()).or_default();
        entry.count += 1;
        entry.rating_sum += metadata.rating;

        if most_reviewed.is_none_or(|best| outranks(record, best)) {
            most_reviewed = Some(record);
        }
    }

    let type_count = totals
        .iter()
        .map(|(&category, t)| (category.to_owned(), t.count))
        .collect();
    let avg_rating = totals
        .iter()
        .map(|(&category, t)| (category.to_owned(), t.rating_sum / t.count as f64))
        .collect();

    log::info!(
        "Analyzed {} records: {} complete across {} types, {} incomplete",
        records.len(),
        records.len() - incomplete.len(),
        totals.len(),
        incomplete.len()
    );

    AnalysisReport {
        type_count,
        avg_rating,
        most_reviewed: most_reviewed.cloned(),
        incomplete,
    }
}

/// Whether `candidate` beats `best` for the most-reviewed slot.
fn outranks(candidate: &MergedRecord, best: &MergedRecord) -> bool {
    let reviews = |r: &MergedRecord| r.metadata.as_ref().map_or(i64::MIN, |m| m.reviews);

    match reviews(candidate).cmp(&reviews(best)) {
        Ordering::Greater => true,
        Ordering::Equal => candidate.id < best.id,
        Ordering::Less => false,
    }
}

#[cfg(test)]
mod tests {
    use poi_map_poi_models::{Location, Metadata};

    use super::*;

    fn complete(id: &str, category: &str, rating: f64, reviews: i64) -> MergedRecord {
        MergedRecord::new(
            id,
            Some(Location::new(id, 0.0, 0.0)),
            Some(Metadata::new(id, category, rating, reviews)),
        )
    }

    #[test]
    fn averages_ratings_per_type() {
        let records = [
            complete("a", "park", 4.0, 1),
            complete("b", "park", 5.0, 2),
            complete("c", "park", 3.0, 3),
            complete("d", "cafe", 2.5, 4),
        ];

        let report = analyze(&records);
        assert_eq!(report.type_count["park"], 3);
        assert_eq!(report.type_count["cafe"], 1);
        assert!((report.avg_rating["park"] - 4.0).abs() < f64::EPSILON);
        assert!((report.avg_rating["cafe"] - 2.5).abs() < f64::EPSILON);
        assert!(report.incomplete.is_empty());
    }

    #[test]
    fn does_not_round_averages() {
        let records = [
            complete("a", "zoo", 1.0, 0),
            complete("b", "zoo", 1.0, 0),
            complete("c", "zoo", 2.0, 0),
        ];

        let report = analyze(&records);
        assert!((report.avg_rating["zoo"] - 4.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ties_on_reviews_go_to_smallest_id() {
        let records = [
            complete("m", "park", 4.0, 10),
            complete("z", "park", 4.0, 25),
            complete("k", "cafe", 4.0, 25),
        ];

        let report = analyze(&records);
        assert_eq!(report.most_reviewed.unwrap().id, "k");

        let mut reversed = records.to_vec();
        reversed.reverse();
        assert_eq!(analyze(&reversed).most_reviewed.unwrap().id, "k");
    }

    #[test]
    fn incomplete_records_are_excluded() {
        let records = [
            complete("a", "park", 4.0, 10),
            MergedRecord::new("b", None, Some(Metadata::new("b", "park", 1.0, 500))),
            MergedRecord::new("c", Some(Location::new("c", 1.0, 1.0)), None),
        ];

        let report = analyze(&records);
        assert_eq!(report.type_count["park"], 1);
        assert!((report.avg_rating["park"] - 4.0).abs() < f64::EPSILON);
        assert_eq!(report.most_reviewed.unwrap().id, "a");

        let incomplete: Vec<_> = report.incomplete.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(incomplete, vec!["b", "c"]);
    }

    #[test]
    fn no_complete_records_means_no_most_reviewed() {
        let records = [MergedRecord::new("a", Some(Location::new("a", 0.0, 0.0)), None)];

        let report = analyze(&records);
        assert!(report.most_reviewed.is_none());
        assert!(report.type_count.is_empty());
        assert!(report.avg_rating.is_empty());
        assert_eq!(report.incomplete.len(), 1);
    }

    #[test]
    fn negative_review_counts_still_pick_a_record() {
        let records = [complete("a", "park", 4.0, -5), complete("b", "park", 4.0, -2)];

        assert_eq!(analyze(&records).most_reviewed.unwrap().id, "b");
    }

    #[test]
    fn empty_input_yields_empty_report() {
        assert_eq!(analyze(&[]), AnalysisReport::default());
    }
}
