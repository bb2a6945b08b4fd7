// Feature ordering
// Newest rollouts first, keyed on each feature's earliest known stage date.

use chrono::NaiveDateTime;
use std::cmp::Ordering;

use crate::models::Feature;
use crate::utils::parse_stage_date;

/// Earliest valid stage date across every IDE and stage of a feature.
///
/// IDEs outside the display order count too. `None` means no valid date at all
/// and sorts after everything.
pub fn earliest_date(feature: &Feature) -> Option<NaiveDateTime> {
    feature
        .ides
        .values()
        .flat_map(|stages| stages.present())
        .filter_map(|(_, entry)| parse_stage_date(&entry.date))
        .min()
}

/// Descending by earliest date, missing dates last
fn compare_keys(a: &Option<NaiveDateTime>, b: &Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Return the features ordered by earliest date, most recent first.
///
/// Stable: ties (including features without any date) keep input order.
pub fn sort_features(features: &[Feature]) -> Vec<Feature> {
    let mut keyed: Vec<(Option<NaiveDateTime>, &Feature)> = features
        .iter()
        .map(|feature| (earliest_date(feature), feature))
        .collect();

    for (key, feature) in &keyed {
        log::debug!("sort key for '{}': {:?}", feature.name, key);
    }

    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b));
    keyed.into_iter().map(|(_, feature)| feature.clone()).collect()
}
