//! Care hints for the plant detail view.

use jiff::Timestamp;

use super::CareAction;
use crate::models::{Category, Plant};

const SECONDS_PER_DAY: i64 = 86_400;

/// Human-readable hints about overdue care for one plant.
///
/// Thresholds come from the plant's category when it has one, otherwise from
/// the default intervals. Activities with unreadable timestamps are ignored.
pub fn recommendations(plant: &Plant, category: Option<&Category>, now: Timestamp) -> Vec<String> {
    let mut hints = Vec::new();

    for action in CareAction::ALL {
        let last = plant
            .activities_of(action.activity_kind())
            .find_map(|activity| activity.occurred_at());
        let threshold = i64::from(action.interval_days(category));

        match (action, last) {
            (CareAction::Water, Some(last)) => {
                let days = whole_days_between(last, now);
                if days >= threshold {
                    hints.push(format!(
                        "It's been {days} days since watering. Time to water!"
                    ));
                }
            }
            (CareAction::Water, None) => {
                hints.push("No watering recorded yet. Give this plant some water!".to_string());
            }
            (CareAction::Feed, Some(last)) => {
                let days = whole_days_between(last, now);
                if days >= threshold {
                    hints.push(format!(
                        "It's been {days} days since feeding. Consider adding nutrients."
                    ));
                }
            }
            (CareAction::Feed, None) => {
                hints.push("No feeding recorded yet.".to_string());
            }
        }
    }

    hints
}

fn whole_days_between(earlier: Timestamp, later: Timestamp) -> i64 {
    (later.as_second() - earlier.as_second()).div_euclid(SECONDS_PER_DAY)
}
