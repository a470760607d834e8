mod common;

use common::create_test_waypoint;
use uuid::Uuid;
use waypoint_core::{
    control::{
        CreateGoalRequest, CreatePlanRequest, CreatePlannerRequest, CreateTaskRequest,
        CreateVersionRequest, UpdatePlanRequest, UpdateTaskRequest,
    },
    Status, VersionNumber, WaypointBuilder,
};

#[tokio::test]
async fn test_planner_to_version_workflow() {
    let (_temp_dir, waypoint) = create_test_waypoint().await;

    let planner = waypoint
        .planners
        .create_planner(CreatePlannerRequest {
            title: "Marathon training".to_string(),
            owner: "alice".to_string(),
        })
        .expect("Failed to create planner");

    let goal = waypoint
        .goals
        .create_goal(CreateGoalRequest {
            objective: "Finish under four hours".to_string(),
            status: Some("In Progress".to_string()),
            deadline: "2022-10-09".to_string(),
            planner_id: planner.id,
        })
        .expect("Failed to create goal");

    let plan = waypoint
        .plans
        .create_plan(CreatePlanRequest {
            name: "Long run".to_string(),
            description: "Sunday long run".to_string(),
            date: "2022-06-05".to_string(),
            time: "06:45".to_string(),
            status: None,
            goal_id: goal.id,
            tasks: vec![CreateTaskRequest {
                title: "Pack gels".to_string(),
                ..Default::default()
            }],
        })
        .expect("Failed to create plan");

    let goals = waypoint
        .goals
        .get_goals_by_planner_id(planner.id)
        .expect("Failed to look up goals")
        .goals;
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].status, Status::InProgress);

    let version = waypoint
        .versions
        .create_version(CreateVersionRequest {
            goal_id: goal.id,
            plan_id: Some(plan.id),
            task_id: None,
            version: "0.1.0".to_string(),
            created_by: "alice".to_string(),
            previous_version: None,
        })
        .expect("Failed to create version");

    waypoint
        .plans
        .update_plan(
            plan.id,
            UpdatePlanRequest {
                status: Some("Completed".to_string()),
                ..Default::default()
            },
        )
        .expect("Failed to update plan");

    let stored = waypoint
        .versions
        .get_version(version.id)
        .expect("Failed to get version");
    assert_eq!(stored.version, VersionNumber::new(0, 1, 0));
    assert_eq!(stored.plan_id, Some(plan.id));
    assert_eq!(stored.snapshot.plans[0].status, Status::NotStarted);
    assert_eq!(
        waypoint.plans.get_plan(plan.id).unwrap().status,
        Status::Completed
    );
}

#[tokio::test]
async fn test_task_lifecycle_on_disk() {
    let (_temp_dir, waypoint) = create_test_waypoint().await;

    let created = waypoint
        .tasks
        .create_task(CreateTaskRequest {
            title: "Buy shoes".to_string(),
            description: "Size 44".to_string(),
            owner: "bob".to_string(),
        })
        .expect("Failed to create task");

    waypoint.tasks.start_task(created.id).unwrap();
    waypoint
        .tasks
        .update_task(
            created.id,
            UpdateTaskRequest {
                owner: Some("carol".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let task = waypoint.tasks.get_task(created.id).unwrap();
    assert!(task.started);
    assert!(!task.completed);
    assert_eq!(task.owner, "carol");
    assert_eq!(task.description, "Size 44");

    waypoint.tasks.delete_task(created.id).unwrap();
    assert!(waypoint
        .tasks
        .delete_task(created.id)
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn test_update_of_missing_task_does_not_insert() {
    let (_temp_dir, waypoint) = create_test_waypoint().await;
    let id = Uuid::new_v4();

    let err = waypoint
        .tasks
        .update_task(
            id,
            UpdateTaskRequest {
                title: Some("Phantom".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(waypoint.tasks.list_tasks().unwrap().tasks.is_empty());
}

#[tokio::test]
async fn test_builder_creates_missing_directories() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("deeper").join("w.db");

    let waypoint = WaypointBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to build waypoint");

    assert!(db_path.exists());
    assert!(waypoint.planners.list_planners().unwrap().planners.is_empty());
}
