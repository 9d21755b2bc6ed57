use greenhouse_core::{Tracker, TrackerBuilder};
use tempfile::TempDir;

/// Helper function to create a test tracker
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = TrackerBuilder::new()
        .with_data_path(Some(temp_dir.path().join("data.json")))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}
