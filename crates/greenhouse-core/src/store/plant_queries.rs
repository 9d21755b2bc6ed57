//! Plant CRUD operations and activity logging.

use jiff::Timestamp;
use log::info;

use crate::{
    error::{Result, TrackerError},
    models::{Activity, Plant},
    params::{CreatePlant, LogActivity},
};

impl super::Store {
    /// Lists all plants in creation order.
    pub fn list_plants(&self) -> Result<Vec<Plant>> {
        Ok(self.load()?.plants)
    }

    /// Retrieves a plant by its ID.
    pub fn get_plant(&self, id: u64) -> Result<Option<Plant>> {
        Ok(self.load()?.plants.into_iter().find(|p| p.id == id))
    }

    /// Creates a plant with an empty care history.
    ///
    /// The category is not checked against existing categories: plants may
    /// outlive their category, and the schedule copes with dangling IDs.
    pub fn create_plant(&self, params: CreatePlant) -> Result<Plant> {
        params.validate()?;

        let plant = self.update(|snapshot| {
            let plant = Plant {
                id: super::next_id(snapshot.plants.iter().map(|p| p.id)),
                name: params.name.trim().to_string(),
                strain: params
                    .strain
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty()),
                stage: params.stage.unwrap_or_default(),
                category_id: params.category_id,
                activities: Vec::new(),
                created_at: Some(Timestamp::now()),
            };
            snapshot.plants.push(plant.clone());
            Ok(plant)
        })?;

        info!("Created plant {} ({})", plant.id, plant.name);
        Ok(plant)
    }

    /// Deletes a plant and its activity log.
    ///
    /// Returns `false` when no plant had the given ID; that is not an error.
    pub fn delete_plant(&self, id: u64) -> Result<bool> {
        let removed = self.update(|snapshot| {
            let before = snapshot.plants.len();
            snapshot.plants.retain(|p| p.id != id);
            Ok(snapshot.plants.len() != before)
        })?;

        if removed {
            info!("Deleted plant {id}");
        }
        Ok(removed)
    }

    /// Records an activity at the head of the plant's log and returns it.
    pub fn log_activity(&self, plant_id: u64, params: LogActivity) -> Result<Activity> {
        let activity = self.update(|snapshot| {
            let plant = snapshot
                .plants
                .iter_mut()
                .find(|p| p.id == plant_id)
                .ok_or(TrackerError::PlantNotFound { id: plant_id })?;

            let activity = Activity {
                id: super::next_id(plant.activities.iter().map(|a| a.id)),
                kind: params.kind,
                note: params.note.filter(|n| !n.trim().is_empty()),
                timestamp: Timestamp::now().to_string(),
                caretaker: params.caretaker.filter(|c| !c.trim().is_empty()),
                images: params.images,
            };
            plant.activities.insert(0, activity.clone());
            Ok(activity)
        })?;

        info!("Logged {} for plant {plant_id}", activity.kind.as_str());
        Ok(activity)
    }
}
