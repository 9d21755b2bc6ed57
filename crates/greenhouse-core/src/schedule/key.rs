//! Task keys: `<plantId>:<water|feed>:<YYYY-MM-DD>`.

use std::{fmt, str::FromStr};

use jiff::civil;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::{ActivityKind, Category, DEFAULT_FEEDING_DAYS, DEFAULT_WATERING_DAYS},
};

/// The recurring care actions the schedule projects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CareAction {
    Water,
    Feed,
}

impl CareAction {
    /// All projected actions, in the order tasks are emitted per plant.
    pub const ALL: [CareAction; 2] = [CareAction::Water, CareAction::Feed];

    /// Form used inside task keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            CareAction::Water => "water",
            CareAction::Feed => "feed",
        }
    }

    /// Label shown in the schedule.
    pub fn label(&self) -> &'static str {
        match self {
            CareAction::Water => "Water",
            CareAction::Feed => "Feed",
        }
    }

    /// Icon tag shown in the schedule.
    pub fn icon(&self) -> &'static str {
        self.activity_kind().icon()
    }

    /// The activity that resets this action's clock.
    pub fn activity_kind(&self) -> ActivityKind {
        match self {
            CareAction::Water => ActivityKind::Water,
            CareAction::Feed => ActivityKind::Feed,
        }
    }

    /// Interval in days, from the category when there is one.
    pub fn interval_days(&self, category: Option<&Category>) -> u32 {
        match (self, category) {
            (CareAction::Water, Some(category)) => category.watering_interval(),
            (CareAction::Feed, Some(category)) => category.feeding_interval(),
            (CareAction::Water, None) => DEFAULT_WATERING_DAYS,
            (CareAction::Feed, None) => DEFAULT_FEEDING_DAYS,
        }
    }
}

impl fmt::Display for CareAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CareAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "water" => Ok(CareAction::Water),
            "feed" => Ok(CareAction::Feed),
            _ => Err(format!("Invalid care action: {s}")),
        }
    }
}

/// Identifies one unit of care work: a plant, an action and a due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskKey {
    pub plant_id: u64,
    pub action: CareAction,
    pub due: civil::Date,
}

impl TaskKey {
    pub fn new(plant_id: u64, action: CareAction, due: civil::Date) -> Self {
        Self {
            plant_id,
            action,
            due,
        }
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{:04}-{:02}-{:02}",
            self.plant_id,
            self.action,
            self.due.year(),
            self.due.month(),
            self.due.day()
        )
    }
}

impl FromStr for TaskKey {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| {
            TrackerError::invalid_input("task_key").with_reason(format!(
                "'{s}' {reason}; expected <plantId>:<water|feed>:<YYYY-MM-DD>"
            ))
        };

        let mut parts = s.splitn(3, ':');
        let (Some(plant), Some(action), Some(due)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid("has too few parts"));
        };

        let plant_id = plant
            .parse::<u64>()
            .map_err(|_| invalid("has a non-numeric plant id"))?;
        let action = action
            .parse::<CareAction>()
            .map_err(|_| invalid("has an unknown action"))?;
        if due.len() != 10 {
            return Err(invalid("has a malformed date"));
        }
        let due = due
            .parse::<civil::Date>()
            .map_err(|_| invalid("has a malformed date"))?;

        Ok(TaskKey::new(plant_id, action, due))
    }
}
