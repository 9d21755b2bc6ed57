//! Task-assignment overrides and schedule projection over stored data.

use log::debug;

use crate::{
    error::Result,
    models::TaskAssignments,
    params::AssignTask,
    schedule::{project, DueTask, ScheduleOptions, TaskKey},
};

impl super::Store {
    /// Returns the whole override map.
    pub fn task_assignments(&self) -> Result<TaskAssignments> {
        Ok(self.load()?.task_assignments)
    }

    /// Shallow-merges `changes` into the override map and returns the result.
    ///
    /// A `null` value is stored as-is and means "back to automatic
    /// assignment". Keys are not validated, so overrides for tasks that no
    /// longer exist simply linger.
    pub fn merge_task_assignments(&self, changes: TaskAssignments) -> Result<TaskAssignments> {
        self.update(|snapshot| {
            debug!("Merging {} task assignments", changes.len());
            snapshot.task_assignments.extend(changes);
            Ok(snapshot.task_assignments.clone())
        })
    }

    /// Sets or clears a single override after checking the key's format.
    pub fn assign_task(&self, params: AssignTask) -> Result<TaskAssignments> {
        let key: TaskKey = params.key.parse()?;
        let mut changes = TaskAssignments::new();
        changes.insert(key.to_string(), params.profile_id);
        self.merge_task_assignments(changes)
    }

    /// Projects the schedule from the stored data.
    pub fn schedule(&self, options: &ScheduleOptions) -> Result<Vec<DueTask>> {
        Ok(project(&self.load()?, options))
    }
}
