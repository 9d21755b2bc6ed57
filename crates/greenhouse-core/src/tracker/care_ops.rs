//! Profile, category, assignment and schedule operations for the Tracker.

use super::Tracker;
use crate::{
    error::Result,
    models::{Category, Profile, Snapshot, SnapshotPatch, TaskAssignments},
    params::{AssignTask, CategoryInput, CreateProfile, Id, ScheduleQuery, UpdateCategory},
    schedule::{DueTask, ScheduleOptions, DEFAULT_HORIZON_DAYS},
};

impl Tracker {
    /// Returns the whole stored document.
    pub async fn snapshot(&self) -> Result<Snapshot> {
        self.with_store(|store| store.load()).await
    }

    /// Shallow-merges top-level keys into the stored document.
    pub async fn merge_snapshot(&self, patch: SnapshotPatch) -> Result<Snapshot> {
        self.with_store(move |store| store.merge(patch)).await
    }

    /// Lists all caretaker profiles.
    pub async fn list_profiles(&self) -> Result<Vec<Profile>> {
        self.with_store(|store| store.list_profiles()).await
    }

    /// Creates a caretaker profile.
    pub async fn create_profile(&self, params: &CreateProfile) -> Result<Profile> {
        let params = params.clone();
        self.with_store(move |store| store.create_profile(params)).await
    }

    /// Lists all categories.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.with_store(|store| store.list_categories()).await
    }

    /// Creates a category with defaults for omitted fields.
    pub async fn create_category(&self, params: &CategoryInput) -> Result<Category> {
        let params = params.clone();
        self.with_store(move |store| store.create_category(params)).await
    }

    /// Partially updates a category.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::CategoryNotFound` if the category does not exist.
    pub async fn update_category(&self, id: &Id, params: &UpdateCategory) -> Result<Category> {
        let id = id.id;
        let params = params.clone();
        self.with_store(move |store| store.update_category(id, params)).await
    }

    /// Deletes a category, returning whether anything was removed.
    pub async fn delete_category_by_id(&self, params: &Id) -> Result<bool> {
        let id = params.id;
        self.with_store(move |store| store.delete_category(id)).await
    }

    /// Replaces the whole category list.
    pub async fn replace_categories(&self, params: Vec<CategoryInput>) -> Result<Vec<Category>> {
        self.with_store(move |store| store.replace_categories(params)).await
    }

    /// Returns the explicit task-assignment overrides.
    pub async fn task_assignments(&self) -> Result<TaskAssignments> {
        self.with_store(|store| store.task_assignments()).await
    }

    /// Shallow-merges overrides and returns the full map.
    pub async fn merge_task_assignments(
        &self,
        changes: TaskAssignments,
    ) -> Result<TaskAssignments> {
        self.with_store(move |store| store.merge_task_assignments(changes))
            .await
    }

    /// Sets or clears the override for a single task.
    pub async fn assign_task(&self, params: &AssignTask) -> Result<TaskAssignments> {
        let params = params.clone();
        self.with_store(move |store| store.assign_task(params)).await
    }

    /// Projects the schedule from now in the system time zone.
    pub async fn schedule(&self, params: &ScheduleQuery) -> Result<Vec<DueTask>> {
        let options = ScheduleOptions::now()
            .with_horizon(params.horizon.unwrap_or(DEFAULT_HORIZON_DAYS));
        self.schedule_at(options).await
    }

    /// Projects the schedule for an explicit reference point.
    pub async fn schedule_at(&self, options: ScheduleOptions) -> Result<Vec<DueTask>> {
        self.with_store(move |store| store.schedule(&options)).await
    }
}
