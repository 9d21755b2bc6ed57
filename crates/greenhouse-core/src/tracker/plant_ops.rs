//! Plant and activity operations for the Tracker.

use jiff::Timestamp;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{Activity, Plant},
    params::{CreatePlant, Id, LogActivity},
    schedule::recommendations,
};

impl Tracker {
    /// Lists all plants in creation order.
    pub async fn list_plants(&self) -> Result<Vec<Plant>> {
        self.with_store(|store| store.list_plants()).await
    }

    /// Retrieves a plant by its ID. This is also the lookup behind scanned
    /// barcodes, which encode the plant ID.
    pub async fn get_plant(&self, params: &Id) -> Result<Option<Plant>> {
        let id = params.id;
        self.with_store(move |store| store.get_plant(id)).await
    }

    /// Creates a new plant.
    pub async fn create_plant(&self, params: &CreatePlant) -> Result<Plant> {
        let params = params.clone();
        self.with_store(move |store| store.create_plant(params)).await
    }

    /// Deletes a plant by ID, returning whether anything was removed.
    pub async fn delete_plant_by_id(&self, params: &Id) -> Result<bool> {
        let id = params.id;
        self.with_store(move |store| store.delete_plant(id)).await
    }

    /// Records a care activity against a plant.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlantNotFound` if the plant does not exist.
    pub async fn log_activity(&self, plant: &Id, params: &LogActivity) -> Result<Activity> {
        let plant_id = plant.id;
        let params = params.clone();
        self.with_store(move |store| store.log_activity(plant_id, params)).await
    }

    /// Care hints for one plant, judged against its category intervals.
    pub async fn recommendations(&self, params: &Id) -> Result<Vec<String>> {
        let id = params.id;
        self.with_store(move |store| {
            let snapshot = store.load()?;
            let plant = snapshot.plant(id).ok_or(TrackerError::PlantNotFound { id })?;
            let category = plant.category_id.and_then(|c| snapshot.category(c));
            Ok(recommendations(plant, category, Timestamp::now()))
        })
        .await
    }
}
