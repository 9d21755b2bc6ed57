//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use super::models::PlantSummary;
use crate::{
    models::{Category, Plant, Profile},
    schedule::DueTask,
};

/// Implements the slice-like accessors shared by every collection wrapper.
macro_rules! collection_wrapper {
    ($wrapper:ident, $item:ty) => {
        impl $wrapper {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Get the number of items in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Get a reference to the item at the given index.
            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            /// Get an iterator over the items.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $wrapper {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $wrapper {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $wrapper {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

/// Newtype wrapper for displaying a list of plants as short summaries.
///
/// # Examples
///
/// ```rust
/// use greenhouse_core::{display::Plants, models::Plant};
///
/// let plant: Plant = serde_json::from_str(r#"{"id": 1, "name": "Basil"}"#).unwrap();
/// let output = Plants(vec![plant]).to_string();
/// assert!(output.contains("## 1. Basil"));
/// ```
pub struct Plants(pub Vec<Plant>);

collection_wrapper!(Plants, Plant);

impl fmt::Display for Plants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plants found.");
        }
        for plant in &self.0 {
            write!(f, "{}", PlantSummary(plant))?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a projected schedule, grouped by due date.
///
/// The tasks are expected in schedule order (sorted by date), which is what
/// the projector produces.
pub struct Schedule(pub Vec<DueTask>);

collection_wrapper!(Schedule, DueTask);

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Nothing due.");
        }

        let mut current = None;
        for task in &self.0 {
            if current != Some(task.date) {
                if current.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "## {}", task.date.strftime("%Y-%m-%d (%a)"))?;
                writeln!(f)?;
                current = Some(task.date);
            }
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying caretaker profiles.
pub struct Profiles(pub Vec<Profile>);

collection_wrapper!(Profiles, Profile);

impl fmt::Display for Profiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No profiles found.");
        }
        self.0.iter().try_for_each(|profile| write!(f, "{profile}"))
    }
}

/// Newtype wrapper for displaying categories.
pub struct Categories(pub Vec<Category>);

collection_wrapper!(Categories, Category);

impl fmt::Display for Categories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No categories found.");
        }
        self.0.iter().try_for_each(|category| write!(f, "{category}"))
    }
}
