//! Enumerations for plant growth stages and activity kinds.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plant growth stages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    /// Freshly sprouted plant
    #[default]
    Seedling,

    /// Leaf and stem growth
    Vegetative,

    /// Producing flowers
    Flowering,

    /// Ready to harvest
    Harvest,
}

impl FromStr for GrowthStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "seedling" => Ok(GrowthStage::Seedling),
            "vegetative" => Ok(GrowthStage::Vegetative),
            "flowering" => Ok(GrowthStage::Flowering),
            "harvest" => Ok(GrowthStage::Harvest),
            _ => Err(format!("Invalid growth stage: {s}")),
        }
    }
}

impl GrowthStage {
    /// Convert to the string stored in the data file.
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::Seedling => "seedling",
            GrowthStage::Vegetative => "vegetative",
            GrowthStage::Flowering => "flowering",
            GrowthStage::Harvest => "harvest",
        }
    }

    /// Human-readable label used in terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            GrowthStage::Seedling => "Seedling",
            GrowthStage::Vegetative => "Vegetative",
            GrowthStage::Flowering => "Flowering",
            GrowthStage::Harvest => "Ready to Harvest",
        }
    }
}

/// Type-safe enumeration of care activity kinds.
///
/// Types this crate does not know (or a missing `type`) load as
/// [`ActivityKind::Other`] so one odd record never fails the whole document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// Plant was watered
    Water,

    /// Nutrients were added
    Feed,

    /// Plant was pruned
    Prune,

    /// Free-form observation
    Note,

    /// Unrecognized activity type from imported data
    #[default]
    #[serde(other)]
    Other,
}

impl FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "water" => Ok(ActivityKind::Water),
            "feed" => Ok(ActivityKind::Feed),
            "prune" => Ok(ActivityKind::Prune),
            "note" => Ok(ActivityKind::Note),
            _ => Err(format!("Invalid activity type: {s}")),
        }
    }
}

impl ActivityKind {
    /// Convert to the string stored in the data file.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Water => "water",
            ActivityKind::Feed => "feed",
            ActivityKind::Prune => "prune",
            ActivityKind::Note => "note",
            ActivityKind::Other => "other",
        }
    }

    /// Font Awesome icon class the UI shows for this activity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use greenhouse_core::models::ActivityKind;
    ///
    /// assert_eq!(ActivityKind::Water.icon(), "fa-droplet");
    /// assert_eq!(ActivityKind::Note.icon(), "fa-note-sticky");
    /// ```
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Water => "fa-droplet",
            ActivityKind::Feed => "fa-bottle-water",
            ActivityKind::Prune => "fa-scissors",
            ActivityKind::Note => "fa-note-sticky",
            ActivityKind::Other => "fa-circle-question",
        }
    }
}
