//! Tests for the store module.

use std::fs;

use jiff::{civil::date, tz::TimeZone, Timestamp};
use serde_json::json;
use tempfile::TempDir;

use super::*;
use crate::{
    error::TrackerError,
    models::{ActivityKind, GrowthStage, IntervalInput, SnapshotPatch, TaskAssignments},
    params::{AssignTask, CategoryInput, CreatePlant, CreateProfile, LogActivity, UpdateCategory},
    schedule::ScheduleOptions,
};

fn create_test_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = Store::open(temp_dir.path().join("data.json")).expect("Failed to open store");
    (temp_dir, store)
}

fn plant_params(name: &str) -> CreatePlant {
    CreatePlant {
        name: name.to_string(),
        ..Default::default()
    }
}

fn water() -> LogActivity {
    LogActivity {
        kind: ActivityKind::Water,
        note: None,
        caretaker: Some("Alice".to_string()),
        images: vec![],
    }
}

#[test]
fn test_next_id_is_time_based() {
    let before = Timestamp::now().as_millisecond() as u64;
    assert!(next_id(std::iter::empty()) >= before);
}

#[test]
fn test_next_id_stays_unique() {
    let far_future = u64::MAX - 10;
    assert_eq!(next_id([far_future, 3]), far_future + 1);
}

#[test]
fn test_open_creates_initial_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("data.json");
    let store = Store::open(&path).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        raw,
        json!({"plants": [], "profiles": [], "categories": [], "taskAssignments": {}})
    );
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn test_open_keeps_existing_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");
    fs::write(&path, r#"{"plants": [{"id": 7, "name": "Mint"}]}"#).unwrap();

    let store = Store::open(&path).unwrap();
    let plants = store.list_plants().unwrap();
    assert_eq!(plants.len(), 1);
    assert_eq!(plants[0].name, "Mint");
}

#[test]
fn test_load_rejects_corrupt_file() {
    let (_temp_dir, store) = create_test_store();
    fs::write(store.path(), "{not json").unwrap();

    assert!(matches!(
        store.load(),
        Err(TrackerError::Serialization { .. })
    ));
}

#[test]
fn test_save_leaves_no_temp_file() {
    let (temp_dir, store) = create_test_store();
    store.create_plant(plant_params("Basil")).unwrap();

    let names: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["data.json".to_string()]);
}

#[test]
fn test_concurrent_writers_keep_every_plant() {
    const WRITERS: usize = 8;
    const ROUNDS: usize = 20;

    let (temp_dir, store) = create_test_store();

    for round in 0..ROUNDS {
        let handles: Vec<_> = (0..WRITERS)
            .map(|writer| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store.create_plant(plant_params(&format!("Plant {round}-{writer}")))
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }
        assert_eq!(store.load().unwrap().plants.len(), (round + 1) * WRITERS);
    }

    let mut ids: Vec<_> = store.list_plants().unwrap().iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), WRITERS * ROUNDS);
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
}

#[test]
fn test_merge_is_shallow() {
    let (_temp_dir, store) = create_test_store();
    store.create_plant(plant_params("Basil")).unwrap();
    store
        .create_profile(CreateProfile {
            name: "Alice".to_string(),
            color: None,
        })
        .unwrap();

    let patch: SnapshotPatch = serde_json::from_value(json!({
        "profiles": [],
        "theme": "dark"
    }))
    .unwrap();
    let merged = store.merge(patch).unwrap();

    assert_eq!(merged.plants.len(), 1);
    assert!(merged.profiles.is_empty());
    assert_eq!(merged.extra.get("theme"), Some(&json!("dark")));

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded, merged);
}

#[test]
fn test_create_plant_defaults() {
    let (_temp_dir, store) = create_test_store();
    let plant = store
        .create_plant(CreatePlant {
            name: "  Tomato ".to_string(),
            strain: Some(" ".to_string()),
            stage: None,
            category_id: Some(99),
        })
        .unwrap();

    assert_eq!(plant.name, "Tomato");
    assert_eq!(plant.strain, None);
    assert_eq!(plant.stage, GrowthStage::Seedling);
    assert_eq!(plant.category_id, Some(99));
    assert!(plant.activities.is_empty());
    assert!(plant.created_at.is_some());

    assert_eq!(store.get_plant(plant.id).unwrap(), Some(plant));
}

#[test]
fn test_create_plant_rejects_empty_name() {
    let (_temp_dir, store) = create_test_store();
    let err = store.create_plant(plant_params("   ")).unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { .. }));
    assert!(store.list_plants().unwrap().is_empty());
}

#[test]
fn test_plant_ids_are_unique_and_ordered() {
    let (_temp_dir, store) = create_test_store();
    let ids: Vec<u64> = (0..5)
        .map(|i| store.create_plant(plant_params(&format!("P{i}"))).unwrap().id)
        .collect();

    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    let listed: Vec<u64> = store.list_plants().unwrap().iter().map(|p| p.id).collect();
    assert_eq!(listed, ids);
}

#[test]
fn test_delete_plant() {
    let (_temp_dir, store) = create_test_store();
    let plant = store.create_plant(plant_params("Basil")).unwrap();

    assert!(store.delete_plant(plant.id).unwrap());
    assert!(store.get_plant(plant.id).unwrap().is_none());
    assert!(!store.delete_plant(plant.id).unwrap());
}

#[test]
fn test_log_activity_prepends() {
    let (_temp_dir, store) = create_test_store();
    let plant = store.create_plant(plant_params("Basil")).unwrap();

    let first = store.log_activity(plant.id, water()).unwrap();
    let second = store
        .log_activity(
            plant.id,
            LogActivity {
                kind: ActivityKind::Feed,
                note: Some("half strength".to_string()),
                caretaker: None,
                images: vec!["/uploads/1-2.jpg".to_string()],
            },
        )
        .unwrap();

    let stored = store.get_plant(plant.id).unwrap().unwrap();
    assert_eq!(stored.activities.len(), 2);
    assert_eq!(stored.activities[0], second);
    assert_eq!(stored.activities[1], first);
    assert!(second.id > first.id);
    assert!(first.occurred_at().is_some());
    assert_eq!(first.caretaker.as_deref(), Some("Alice"));
    assert_eq!(second.images, vec!["/uploads/1-2.jpg".to_string()]);
}

#[test]
fn test_log_activity_unknown_plant() {
    let (_temp_dir, store) = create_test_store();
    let err = store.log_activity(42, water()).unwrap_err();
    assert!(matches!(err, TrackerError::PlantNotFound { id: 42 }));
}

#[test]
fn test_create_profile_cycles_palette() {
    let (_temp_dir, store) = create_test_store();
    let first = store
        .create_profile(CreateProfile {
            name: "Alice".to_string(),
            color: None,
        })
        .unwrap();
    let second = store
        .create_profile(CreateProfile {
            name: "Bob".to_string(),
            color: Some("#123456".to_string()),
        })
        .unwrap();
    let third = store
        .create_profile(CreateProfile {
            name: "Cara".to_string(),
            color: None,
        })
        .unwrap();

    assert_eq!(first.color, crate::models::PROFILE_COLORS[0]);
    assert_eq!(second.color, "#123456");
    assert_eq!(third.color, crate::models::PROFILE_COLORS[2]);
    assert_eq!(store.list_profiles().unwrap().len(), 3);
}

#[test]
fn test_create_category_defaults_and_coercion() {
    let (_temp_dir, store) = create_test_store();
    let blank = store.create_category(CategoryInput::default()).unwrap();
    assert_eq!(blank.name, "Unnamed");
    assert_eq!(blank.watering_days, 3);
    assert_eq!(blank.feeding_days, 7);
    assert_eq!(blank.color, "#5a8a5e");
    assert!(blank.created_at.is_some());

    let herbs = store
        .create_category(CategoryInput {
            name: Some("Herbs".to_string()),
            watering_days: Some(IntervalInput::Text("5".to_string())),
            feeding_days: Some(IntervalInput::Number(0.0)),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(herbs.watering_days, 5);
    assert_eq!(herbs.feeding_days, 7);
}

#[test]
fn test_update_category() {
    let (_temp_dir, store) = create_test_store();
    let category = store.create_category(CategoryInput::default()).unwrap();

    let updated = store
        .update_category(
            category.id,
            UpdateCategory {
                name: Some("Succulents".to_string()),
                watering_days: Some(IntervalInput::Number(10.0)),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "Succulents");
    assert_eq!(updated.watering_days, 10);
    assert_eq!(updated.feeding_days, 7);
    assert_eq!(store.list_categories().unwrap(), vec![updated]);

    let err = store
        .update_category(category.id + 1, UpdateCategory::default())
        .unwrap_err();
    assert!(matches!(err, TrackerError::CategoryNotFound { .. }));
}

#[test]
fn test_delete_category_orphans_plants() {
    let (_temp_dir, store) = create_test_store();
    let category = store.create_category(CategoryInput::default()).unwrap();
    let plant = store
        .create_plant(CreatePlant {
            name: "Aloe".to_string(),
            category_id: Some(category.id),
            ..Default::default()
        })
        .unwrap();

    assert!(store.delete_category(category.id).unwrap());
    assert!(!store.delete_category(category.id).unwrap());

    let stored = store.get_plant(plant.id).unwrap().unwrap();
    assert_eq!(stored.category_id, Some(category.id));
}

#[test]
fn test_replace_categories_assigns_missing_ids() {
    let (_temp_dir, store) = create_test_store();
    let existing = store.create_category(CategoryInput::default()).unwrap();

    let replaced = store
        .replace_categories(vec![
            CategoryInput {
                id: Some(existing.id),
                name: Some("Kept".to_string()),
                ..Default::default()
            },
            CategoryInput {
                name: Some("New".to_string()),
                feeding_days: Some(IntervalInput::Text("abc".to_string())),
                ..Default::default()
            },
            CategoryInput {
                name: Some("Newer".to_string()),
                ..Default::default()
            },
        ])
        .unwrap();

    assert_eq!(replaced.len(), 3);
    assert_eq!(replaced[0].id, existing.id);
    assert_eq!(replaced[0].created_at, existing.created_at);
    assert_eq!(replaced[1].feeding_days, 7);
    assert_ne!(replaced[1].id, replaced[2].id);
    assert_ne!(replaced[1].id, existing.id);
    assert_eq!(store.list_categories().unwrap(), replaced);
}

#[test]
fn test_merge_task_assignments() {
    let (_temp_dir, store) = create_test_store();

    let mut first = TaskAssignments::new();
    first.insert("1:water:2024-01-04".to_string(), Some(101));
    first.insert("1:feed:2024-01-08".to_string(), Some(102));
    store.merge_task_assignments(first).unwrap();

    let mut second = TaskAssignments::new();
    second.insert("1:feed:2024-01-08".to_string(), None);
    let merged = store.merge_task_assignments(second).unwrap();

    assert_eq!(merged.len(), 2);
    assert_eq!(merged["1:water:2024-01-04"], Some(101));
    assert_eq!(merged["1:feed:2024-01-08"], None);
    assert_eq!(store.task_assignments().unwrap(), merged);
}

#[test]
fn test_assign_task_validates_key() {
    let (_temp_dir, store) = create_test_store();

    let assigned = store
        .assign_task(AssignTask {
            key: "1:water:2024-01-04".to_string(),
            profile_id: Some(5),
        })
        .unwrap();
    assert_eq!(assigned["1:water:2024-01-04"], Some(5));

    let err = store
        .assign_task(AssignTask {
            key: "1:prune:2024-01-04".to_string(),
            profile_id: Some(5),
        })
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { .. }));
}

#[test]
fn test_schedule_reads_stored_data() {
    let (_temp_dir, store) = create_test_store();
    let patch: SnapshotPatch = serde_json::from_value(json!({
        "plants": [{
            "id": 1700000000000u64,
            "name": "Basil",
            "categoryId": null,
            "activities": [
                {"id": 2, "type": "feed", "timestamp": "2024-01-01T08:00:00Z"},
                {"id": 1, "type": "water", "timestamp": "2024-01-01T08:00:00Z"}
            ]
        }],
        "profiles": [
            {"id": 100, "name": "A"},
            {"id": 101, "name": "B"},
            {"id": 102, "name": "C"}
        ]
    }))
    .unwrap();
    store.merge(patch).unwrap();

    let today = date(2024, 1, 5).to_zoned(TimeZone::UTC).unwrap();
    let tasks = store.schedule(&ScheduleOptions::new(today)).unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].key, "1700000000000:water:2024-01-04");
    assert_eq!(tasks[0].caretaker, "B");
    assert_eq!(tasks[1].key, "1700000000000:feed:2024-01-08");
}
