use waypoint_core::{Waypoint, WaypointBuilder};
use tempfile::TempDir;

/// Helper function to create a waypoint backed by a fresh database file
pub async fn create_test_waypoint() -> (TempDir, Waypoint) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let waypoint = WaypointBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create waypoint");
    (temp_dir, waypoint)
}
