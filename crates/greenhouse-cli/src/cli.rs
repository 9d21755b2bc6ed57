//! Command-line interface definitions and handlers
//!
//! This module defines the subcommands using clap's derive API and the
//! [`Cli`] handler that executes them against a [`Tracker`].
//!
//! ## Parameter Wrapper Pattern
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! Core parameter types stay free of clap attributes; each argument struct
//! here converts into its core counterpart with an explicit `From` impl, so
//! help text and aliases can change without touching the core crate.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use greenhouse_core::{
    display::{CreateResult, DeleteResult, OperationStatus},
    models::{ActivityKind, GrowthStage, IntervalInput},
    params::*,
    Tracker,
};
use log::debug;

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Add a new plant
#[derive(Args)]
pub struct AddPlantArgs {
    /// Display name of the plant
    pub name: String,
    /// Strain or variety
    #[arg(short, long)]
    pub strain: Option<String>,
    /// Growth stage: seedling, vegetative, flowering or harvest
    #[arg(long)]
    pub stage: Option<GrowthStage>,
    /// Category providing the care schedule
    #[arg(short, long = "category")]
    pub category_id: Option<u64>,
}

impl From<AddPlantArgs> for CreatePlant {
    fn from(val: AddPlantArgs) -> Self {
        CreatePlant {
            name: val.name,
            strain: val.strain,
            stage: val.stage,
            category_id: val.category_id,
        }
    }
}

/// Identify a plant or category by ID
#[derive(Args)]
pub struct IdArgs {
    /// Unique identifier (for plants, the value encoded in the barcode)
    pub id: u64,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Record a care activity
#[derive(Args)]
pub struct LogActivityArgs {
    /// ID of the plant the activity belongs to
    pub plant_id: u64,
    /// What was done: water, feed, prune or note
    pub kind: ActivityKind,
    /// Free-text note
    #[arg(short, long)]
    pub note: Option<String>,
    /// Name of the caretaker doing the work
    #[arg(short, long, env = "GREENHOUSE_CARETAKER")]
    pub caretaker: Option<String>,
    /// URL of an uploaded photo (repeatable)
    #[arg(long = "image")]
    pub images: Vec<String>,
}

impl LogActivityArgs {
    fn into_params(self) -> (Id, LogActivity) {
        (
            Id { id: self.plant_id },
            LogActivity {
                kind: self.kind,
                note: self.note,
                caretaker: self.caretaker,
                images: self.images,
            },
        )
    }
}

/// Plant operations
#[derive(Subcommand)]
pub enum PlantCommands {
    /// Add a new plant
    #[command(alias = "a")]
    Add(AddPlantArgs),
    /// List all plants
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a plant with its care history and hints
    #[command(alias = "s")]
    Show(IdArgs),
    /// Delete a plant and its history
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
    /// Record a care activity
    Log(LogActivityArgs),
}

/// Add a caretaker profile
#[derive(Args)]
pub struct AddProfileArgs {
    /// Display name
    pub name: String,
    /// Display color; the next palette color is used when omitted
    #[arg(long)]
    pub color: Option<String>,
}

impl From<AddProfileArgs> for CreateProfile {
    fn from(val: AddProfileArgs) -> Self {
        CreateProfile {
            name: val.name,
            color: val.color,
        }
    }
}

/// Caretaker profile operations
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Add a caretaker profile
    #[command(alias = "a")]
    Add(AddProfileArgs),
    /// List caretaker profiles
    #[command(aliases = ["l", "ls"])]
    List,
}

/// Add a care category
#[derive(Args)]
pub struct AddCategoryArgs {
    /// Display name ("Unnamed" when omitted)
    pub name: Option<String>,
    /// Days between waterings
    #[arg(short, long = "water")]
    pub watering_days: Option<u32>,
    /// Days between feedings
    #[arg(short, long = "feed")]
    pub feeding_days: Option<u32>,
    /// Display color
    #[arg(long)]
    pub color: Option<String>,
}

impl From<AddCategoryArgs> for CategoryInput {
    fn from(val: AddCategoryArgs) -> Self {
        CategoryInput {
            id: None,
            name: val.name,
            watering_days: val.watering_days.map(interval),
            feeding_days: val.feeding_days.map(interval),
            color: val.color,
        }
    }
}

/// Change a care category
#[derive(Args)]
pub struct UpdateCategoryArgs {
    /// ID of the category to change
    pub id: u64,
    /// New display name
    #[arg(long)]
    pub name: Option<String>,
    /// Days between waterings
    #[arg(short, long = "water")]
    pub watering_days: Option<u32>,
    /// Days between feedings
    #[arg(short, long = "feed")]
    pub feeding_days: Option<u32>,
    /// Display color
    #[arg(long)]
    pub color: Option<String>,
}

impl UpdateCategoryArgs {
    fn into_params(self) -> (Id, UpdateCategory) {
        (
            Id { id: self.id },
            UpdateCategory {
                name: self.name,
                watering_days: self.watering_days.map(interval),
                feeding_days: self.feeding_days.map(interval),
                color: self.color,
            },
        )
    }
}

fn interval(days: u32) -> IntervalInput {
    IntervalInput::Number(f64::from(days))
}

/// Care category operations
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a care category
    #[command(alias = "a")]
    Add(AddCategoryArgs),
    /// List care categories
    #[command(aliases = ["l", "ls"])]
    List,
    /// Change a care category
    #[command(alias = "u")]
    Update(UpdateCategoryArgs),
    /// Delete a care category; its plants fall back to default intervals
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
}

/// Show upcoming care tasks
#[derive(Args)]
pub struct ScheduleArgs {
    /// Days ahead to include
    #[arg(long, default_value_t = greenhouse_core::schedule::DEFAULT_HORIZON_DAYS)]
    pub horizon: u32,
}

impl From<ScheduleArgs> for ScheduleQuery {
    fn from(val: ScheduleArgs) -> Self {
        ScheduleQuery {
            horizon: Some(val.horizon),
        }
    }
}

/// Assign a task to a caretaker
#[derive(Args)]
pub struct AssignArgs {
    /// Task key, e.g. 1700000000000:water:2024-01-04
    pub key: String,
    /// Profile to assign; omit to return the task to automatic rotation
    #[arg(short, long = "profile")]
    pub profile_id: Option<u64>,
}

impl From<AssignArgs> for AssignTask {
    fn from(val: AssignArgs) -> Self {
        AssignTask {
            key: val.key,
            profile_id: val.profile_id,
        }
    }
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Executes parsed commands and renders their output.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_plant_command(&self, command: PlantCommands) -> Result<()> {
        match command {
            PlantCommands::Add(args) => {
                let plant = self
                    .tracker
                    .create_plant(&args.into())
                    .await
                    .context("Failed to create plant")?;
                self.renderer.render(&CreateResult::new(plant).to_string())
            }
            PlantCommands::List => {
                let plants = self
                    .tracker
                    .list_plants_display()
                    .await
                    .context("Failed to list plants")?;
                self.renderer.render(&plants.to_string())
            }
            PlantCommands::Show(args) => self.show_plant(&args.into()).await,
            PlantCommands::Delete(args) => {
                let id: Id = args.into();
                match self
                    .tracker
                    .delete_plant(&id)
                    .await
                    .context("Failed to delete plant")?
                {
                    Some(plant) => self.renderer.render(&DeleteResult::new(plant).to_string()),
                    None => bail!("Plant with ID {} not found", id.id),
                }
            }
            PlantCommands::Log(args) => {
                let (plant, params) = args.into_params();
                let activity = self
                    .tracker
                    .log_activity(&plant, &params)
                    .await
                    .with_context(|| format!("Failed to log activity for plant {}", plant.id))?;
                self.renderer.render(&CreateResult::new(activity).to_string())
            }
        }
    }

    async fn show_plant(&self, id: &Id) -> Result<()> {
        let Some(plant) = self
            .tracker
            .get_plant(id)
            .await
            .context("Failed to load plant")?
        else {
            bail!("Plant with ID {} not found", id.id);
        };

        let hints = self
            .tracker
            .recommendations(id)
            .await
            .context("Failed to compute recommendations")?;

        let mut output = plant.to_string();
        if !hints.is_empty() {
            output.push_str("\n## Recommendations\n\n");
            output.extend(hints.iter().map(|hint| format!("- {hint}\n")));
        }
        self.renderer.render(&output)
    }

    pub async fn handle_profile_command(&self, command: ProfileCommands) -> Result<()> {
        match command {
            ProfileCommands::Add(args) => {
                let profile = self
                    .tracker
                    .create_profile(&args.into())
                    .await
                    .context("Failed to create profile")?;
                self.renderer.render(&CreateResult::new(profile).to_string())
            }
            ProfileCommands::List => {
                let profiles = self
                    .tracker
                    .list_profiles_display()
                    .await
                    .context("Failed to list profiles")?;
                self.renderer.render(&profiles.to_string())
            }
        }
    }

    pub async fn handle_category_command(&self, command: CategoryCommands) -> Result<()> {
        match command {
            CategoryCommands::Add(args) => {
                let category = self
                    .tracker
                    .create_category(&args.into())
                    .await
                    .context("Failed to create category")?;
                self.renderer.render(&CreateResult::new(category).to_string())
            }
            CategoryCommands::List => {
                let categories = self
                    .tracker
                    .list_categories_display()
                    .await
                    .context("Failed to list categories")?;
                self.renderer.render(&categories.to_string())
            }
            CategoryCommands::Update(args) => {
                let (id, params) = args.into_params();
                let result = self
                    .tracker
                    .update_category_with_changes(&id, &params)
                    .await
                    .context("Failed to update category")?;
                self.renderer.render(&result.to_string())
            }
            CategoryCommands::Delete(args) => {
                let id: Id = args.into();
                match self
                    .tracker
                    .delete_category(&id)
                    .await
                    .context("Failed to delete category")?
                {
                    Some(category) => {
                        self.renderer.render(&DeleteResult::new(category).to_string())
                    }
                    None => bail!("Category with ID {} not found", id.id),
                }
            }
        }
    }

    pub async fn show_schedule(&self, args: ScheduleArgs) -> Result<()> {
        let schedule = self
            .tracker
            .schedule_display(&args.into())
            .await
            .context("Failed to project schedule")?;
        debug!("Projected {} tasks", schedule.len());
        self.renderer.render(&schedule.to_string())
    }

    pub async fn assign(&self, args: AssignArgs) -> Result<()> {
        let params: AssignTask = args.into();
        self.tracker
            .assign_task(&params)
            .await
            .context("Failed to assign task")?;

        let message = match params.profile_id {
            Some(profile_id) => format!("Task {} assigned to profile {profile_id}", params.key),
            None => format!("Task {} returned to automatic rotation", params.key),
        };
        self.renderer.render(&OperationStatus::success(message).to_string())
    }
}
