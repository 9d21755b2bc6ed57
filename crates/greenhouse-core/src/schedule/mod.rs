//! Care schedule projection.
//!
//! The projector turns the current [`Snapshot`] into a forward-looking list
//! of watering and feeding tasks. It is a pure function of its inputs: it
//! performs no I/O, never fails, and produces identical output for identical
//! inputs.
//!
//! # Algorithm
//!
//! For every plant, and for each of [`CareAction::Water`] then
//! [`CareAction::Feed`]:
//!
//! 1. Resolve the plant's category; a missing or deleted category falls back
//!    to the default intervals (water every 3 days, feed every 7).
//! 2. Scan the newest-first activity list from the head for the most recent
//!    activity of the matching kind. Activities with unreadable timestamps
//!    are skipped.
//! 3. The due date is that activity's calendar date plus the interval, using
//!    calendar arithmetic. Without a prior activity the task is due today.
//! 4. Tasks due after `today + horizon` are dropped; overdue tasks are kept.
//! 5. The assignee is the explicit override for the task key when one is set,
//!    otherwise a caretaker chosen by [`round_robin_hash`].
//!
//! The result is sorted by due date; ties keep plant order, water before
//! feed.
//!
//! # Examples
//!
//! ```rust
//! use greenhouse_core::{
//!     models::Snapshot,
//!     schedule::{project, ScheduleOptions},
//! };
//! use jiff::{civil::date, tz::TimeZone};
//!
//! let snapshot: Snapshot = serde_json::from_str(
//!     r#"{"plants": [{"id": 1, "name": "Basil", "activities": []}]}"#,
//! )
//! .unwrap();
//! let today = date(2024, 1, 10).to_zoned(TimeZone::UTC).unwrap();
//!
//! let tasks = project(&snapshot, &ScheduleOptions::new(today));
//! assert_eq!(tasks.len(), 2);
//! assert_eq!(tasks[0].key, "1:water:2024-01-10");
//! assert_eq!(tasks[0].caretaker, "Unassigned");
//! ```

use jiff::{civil, Span, Zoned};
use serde::{Deserialize, Serialize};

use crate::models::{Plant, Snapshot};

pub mod hash;
pub mod key;
pub mod recommend;


pub use hash::{pick_round_robin, round_robin_hash, round_robin_index};
pub use key::{CareAction, TaskKey};
pub use recommend::recommendations;

/// Number of days ahead the schedule looks by default.
pub const DEFAULT_HORIZON_DAYS: u32 = 14;

/// Caretaker label when nobody could be assigned.
pub const UNASSIGNED: &str = "Unassigned";

/// Caretaker label when an explicit assignment names a deleted profile.
pub const UNKNOWN_CARETAKER: &str = "Unknown";

/// Reference point and window for a projection.
#[derive(Debug, Clone)]
pub struct ScheduleOptions {
    /// "Now"; its time zone decides which calendar day activities fall on.
    pub today: Zoned,
    /// Days past today within which tasks are surfaced.
    pub horizon_days: u32,
}

impl ScheduleOptions {
    /// Options anchored at `today` with the default horizon.
    pub fn new(today: Zoned) -> Self {
        Self {
            today,
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }

    /// Options anchored at the current time in the system time zone.
    pub fn now() -> Self {
        Self::new(Zoned::now())
    }

    /// Replaces the horizon.
    pub fn with_horizon(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }
}

/// One projected unit of care work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DueTask {
    /// Task key, also used for assignment overrides
    pub key: String,
    /// Plant the task belongs to
    pub plant_id: u64,
    /// Plant display name
    pub plant: String,
    /// "Water" or "Feed"
    pub action: String,
    /// Icon tag for the action
    pub icon: String,
    /// Calendar day the task is due
    pub date: civil::Date,
    /// Profile the task resolved to, if it still exists
    pub profile_id: Option<u64>,
    /// Caretaker display name
    pub caretaker: String,
}

/// Projects the due care tasks for every plant in `snapshot`.
pub fn project(snapshot: &Snapshot, options: &ScheduleOptions) -> Vec<DueTask> {
    let today = options.today.date();
    let horizon = add_days(today, options.horizon_days);

    let mut tasks: Vec<DueTask> = snapshot
        .plants
        .iter()
        .flat_map(|plant| {
            CareAction::ALL
                .into_iter()
                .map(move |action| (plant, action, next_due(snapshot, plant, action, options)))
        })
        .filter(|(_, _, due)| *due <= horizon)
        .map(|(plant, action, due)| build_task(snapshot, plant, action, due))
        .collect();

    // sort_by_key is stable, which keeps plant order and water-before-feed on ties
    tasks.sort_by_key(|task| task.date);
    tasks
}

/// Next due date for one plant and action.
pub fn next_due(
    snapshot: &Snapshot,
    plant: &Plant,
    action: CareAction,
    options: &ScheduleOptions,
) -> civil::Date {
    let tz = options.today.time_zone();
    let last = plant
        .activities_of(action.activity_kind())
        .find_map(|activity| activity.date_in(tz));

    match last {
        Some(last) => {
            let category = plant.category_id.and_then(|id| snapshot.category(id));
            add_days(last, action.interval_days(category))
        }
        None => options.today.date(),
    }
}

fn build_task(snapshot: &Snapshot, plant: &Plant, action: CareAction, due: civil::Date) -> DueTask {
    let key = TaskKey::new(plant.id, action, due).to_string();

    let explicit = snapshot.task_assignments.get(&key).copied().flatten();
    let assigned = explicit.or_else(|| pick_round_robin(&key, &snapshot.profiles).map(|p| p.id));
    let profile = assigned.and_then(|id| snapshot.profile(id));

    let caretaker = match (profile, assigned) {
        (Some(profile), _) => profile.name.clone(),
        (None, Some(_)) => UNKNOWN_CARETAKER.to_string(),
        (None, None) => UNASSIGNED.to_string(),
    };

    DueTask {
        key,
        plant_id: plant.id,
        plant: plant.name.clone(),
        action: action.label().to_string(),
        icon: action.icon().to_string(),
        date: due,
        profile_id: profile.map(|p| p.id),
        caretaker,
    }
}

/// Adds whole calendar days, saturating at the largest representable date.
pub(crate) fn add_days(date: civil::Date, days: u32) -> civil::Date {
    Span::new()
        .try_days(i64::from(days))
        .ok()
        .and_then(|span| date.checked_add(span).ok())
        .unwrap_or(civil::Date::MAX)
}
