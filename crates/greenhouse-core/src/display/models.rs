//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns. Output is markdown for rich terminal display.

use std::fmt;

use super::datetime::{ActivityTime, LocalDateTime};
use crate::{
    models::{Activity, ActivityKind, Category, GrowthStage, Plant, Profile},
    schedule::DueTask,
};

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        if let Some(strain) = &self.strain {
            writeln!(f, "- Strain: {strain}")?;
        }
        writeln!(f, "- Stage: {}", self.stage.label())?;
        if let Some(category_id) = self.category_id {
            writeln!(f, "- Category: {category_id}")?;
        }
        if let Some(created_at) = &self.created_at {
            writeln!(f, "- Created: {}", LocalDateTime(created_at))?;
        }

        if self.activities.is_empty() {
            writeln!(f, "\nNo activities recorded.")?;
        } else {
            writeln!(f, "\n## Activities")?;
            writeln!(f)?;
            for activity in &self.activities {
                write!(f, "{activity}")?;
            }
        }

        Ok(())
    }
}

impl Plant {
    /// One-paragraph summary used in plant lists.
    fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "## {}. {}", self.id, self.name)?;
        if let Some(strain) = &self.strain {
            write!(f, " ({strain})")?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "- Stage: {}", self.stage.label())?;

        for kind in [ActivityKind::Water, ActivityKind::Feed] {
            if let Some(last) = self.last_activity(kind) {
                writeln!(f, "- Last {kind}: {}", ActivityTime(last))?;
            }
        }
        writeln!(f)
    }
}

/// Compact plant rendering for lists.
pub struct PlantSummary<'a>(pub &'a Plant);

impl fmt::Display for PlantSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_summary(f)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}: **{}**", ActivityTime(self), self.kind)?;
        if let Some(caretaker) = &self.caretaker {
            write!(f, " by {caretaker}")?;
        }
        if let Some(note) = &self.note {
            write!(f, ": {note}")?;
        }
        match self.images.len() {
            0 => {}
            1 => write!(f, " (1 photo)")?,
            n => write!(f, " ({n} photos)")?,
        }
        writeln!(f)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {}. {} `{}`", self.id, self.name, self.color)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {}. {}: water every {} days, feed every {} days `{}`",
            self.id,
            self.name,
            self.watering_interval(),
            self.feeding_interval(),
            self.color
        )
    }
}

impl fmt::Display for DueTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** {} ({}) `{}`",
            self.action, self.plant, self.caretaker, self.key
        )
    }
}
