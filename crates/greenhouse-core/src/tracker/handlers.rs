//! Tracker operations that return formatted wrapper types.
//!
//! These are what the CLI renders; the HTTP API uses the plain operations in
//! [`plant_ops`](super::plant_ops) and [`care_ops`](super::care_ops).

use super::Tracker;
use crate::{
    display::{Categories, Plants, Profiles, Schedule, UpdateResult},
    error::{Result, TrackerError},
    models::{Category, Plant},
    params::{Id, ScheduleQuery, UpdateCategory},
};

impl Tracker {
    /// Handle listing all plants as summaries.
    pub async fn list_plants_display(&self) -> Result<Plants> {
        Ok(Plants(self.list_plants().await?))
    }

    /// Handle showing the projected schedule.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use greenhouse_core::{params::ScheduleQuery, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let schedule = tracker
    ///     .schedule_display(&ScheduleQuery { horizon: Some(7) })
    ///     .await?;
    /// println!("{schedule}");
    /// # Result::<(), greenhouse_core::TrackerError>::Ok(())
    /// # };
    /// ```
    pub async fn schedule_display(&self, params: &ScheduleQuery) -> Result<Schedule> {
        Ok(Schedule(self.schedule(params).await?))
    }

    /// Handle listing caretaker profiles.
    pub async fn list_profiles_display(&self) -> Result<Profiles> {
        Ok(Profiles(self.list_profiles().await?))
    }

    /// Handle listing categories.
    pub async fn list_categories_display(&self) -> Result<Categories> {
        Ok(Categories(self.list_categories().await?))
    }

    /// Handle deleting a plant.
    ///
    /// Uses a get-before-delete pattern so the deleted plant can be shown
    /// for confirmation. Returns `None` if the plant did not exist.
    pub async fn delete_plant(&self, params: &Id) -> Result<Option<Plant>> {
        let plant = self.get_plant(params).await?;
        if plant.is_some() {
            self.delete_plant_by_id(params).await?;
        }
        Ok(plant)
    }

    /// Handle deleting a category, returning it for confirmation.
    pub async fn delete_category(&self, params: &Id) -> Result<Option<Category>> {
        let category = self
            .list_categories()
            .await?
            .into_iter()
            .find(|c| c.id == params.id);
        if category.is_some() {
            self.delete_category_by_id(params).await?;
        }
        Ok(category)
    }

    /// Handle a category update, describing what changed.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` when no field is given and
    /// `TrackerError::CategoryNotFound` when the category does not exist.
    pub async fn update_category_with_changes(
        &self,
        id: &Id,
        params: &UpdateCategory,
    ) -> Result<UpdateResult<Category>> {
        if params.is_empty() {
            return Err(TrackerError::invalid_input("category")
                .with_reason("at least one field must be provided"));
        }

        let category = self.update_category(id, params).await?;

        let mut changes = Vec::new();
        if params.name.is_some() {
            changes.push(format!("Renamed to '{}'", category.name));
        }
        if params.watering_days.is_some() {
            changes.push(format!("Watering every {} days", category.watering_days));
        }
        if params.feeding_days.is_some() {
            changes.push(format!("Feeding every {} days", category.feeding_days));
        }
        if params.color.is_some() {
            changes.push(format!("Color set to {}", category.color));
        }

        Ok(UpdateResult::with_changes(category, changes))
    }
}
