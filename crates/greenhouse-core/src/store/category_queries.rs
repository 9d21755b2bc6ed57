//! Category CRUD operations.
//!
//! Interval inputs are coerced on the way in: numbers and numeric strings
//! are accepted, anything non-positive or unparseable becomes the default.

use jiff::Timestamp;
use log::info;

use crate::{
    error::{Result, TrackerError},
    models::{
        coerce_interval, Category, DEFAULT_CATEGORY_COLOR, DEFAULT_CATEGORY_NAME,
        DEFAULT_FEEDING_DAYS, DEFAULT_WATERING_DAYS,
    },
    params::{CategoryInput, UpdateCategory},
};

impl super::Store {
    /// Lists all categories.
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.load()?.categories)
    }

    /// Creates a category, filling in defaults for anything omitted.
    pub fn create_category(&self, input: CategoryInput) -> Result<Category> {
        let category = self.update(|snapshot| {
            let id = super::next_id(snapshot.categories.iter().map(|c| c.id));
            let category = build_category(id, input, Timestamp::now());
            snapshot.categories.push(category.clone());
            Ok(category)
        })?;

        info!("Created category {} ({})", category.id, category.name);
        Ok(category)
    }

    /// Applies a partial update to one category.
    pub fn update_category(&self, id: u64, changes: UpdateCategory) -> Result<Category> {
        self.update(|snapshot| {
            let category = snapshot
                .categories
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or(TrackerError::CategoryNotFound { id })?;

            if let Some(name) = changes.name.filter(|n| !n.trim().is_empty()) {
                category.name = name.trim().to_string();
            }
            if let Some(days) = changes.watering_days.as_ref() {
                category.watering_days = coerce_interval(Some(days), DEFAULT_WATERING_DAYS);
            }
            if let Some(days) = changes.feeding_days.as_ref() {
                category.feeding_days = coerce_interval(Some(days), DEFAULT_FEEDING_DAYS);
            }
            if let Some(color) = changes.color.filter(|c| !c.trim().is_empty()) {
                category.color = color;
            }
            Ok(category.clone())
        })
    }

    /// Removes a category. Plants referring to it keep the dangling ID and
    /// fall back to default intervals. Returns `false` if nothing matched.
    pub fn delete_category(&self, id: u64) -> Result<bool> {
        let removed = self.update(|snapshot| {
            let before = snapshot.categories.len();
            snapshot.categories.retain(|c| c.id != id);
            Ok(snapshot.categories.len() != before)
        })?;

        if removed {
            info!("Deleted category {id}");
        }
        Ok(removed)
    }

    /// Replaces the whole category list. Entries without an ID are given a
    /// fresh one; creation times of surviving categories are kept.
    pub fn replace_categories(&self, inputs: Vec<CategoryInput>) -> Result<Vec<Category>> {
        let categories = self.update(|snapshot| {
            let now = Timestamp::now();
            let mut taken: Vec<u64> = inputs.iter().filter_map(|c| c.id).collect();
            taken.extend(snapshot.categories.iter().map(|c| c.id));

            let mut categories = Vec::with_capacity(inputs.len());
            for input in inputs {
                let id = match input.id {
                    Some(id) => id,
                    None => {
                        let id = super::next_id(taken.iter().copied());
                        taken.push(id);
                        id
                    }
                };
                let created_at = snapshot
                    .category(id)
                    .and_then(|c| c.created_at)
                    .unwrap_or(now);
                categories.push(build_category(id, input, created_at));
            }

            snapshot.categories = categories.clone();
            Ok(categories)
        })?;

        info!("Replaced categories ({} total)", categories.len());
        Ok(categories)
    }
}

fn build_category(id: u64, input: CategoryInput, created_at: Timestamp) -> Category {
    Category {
        id,
        name: input
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY_NAME.to_string()),
        watering_days: coerce_interval(input.watering_days.as_ref(), DEFAULT_WATERING_DAYS),
        feeding_days: coerce_interval(input.feeding_days.as_ref(), DEFAULT_FEEDING_DAYS),
        color: input
            .color
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
        created_at: Some(created_at),
    }
}
