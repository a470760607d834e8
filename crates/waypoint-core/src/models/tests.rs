#[cfg(test)]
mod model_tests {
    use jiff::{
        civil::{date, time},
        Timestamp,
    };
    use uuid::Uuid;

    use crate::{
        display::Listing,
        models::{Goal, Plan, Planner, Snapshot, Status, Task, Version, VersionNumber},
    };

    fn create_test_task(started: bool, completed: bool) -> Task {
        Task {
            id: Uuid::from_u128(1),
            title: "Buy running shoes".to_string(),
            description: "Something with proper cushioning".to_string(),
            owner: "u1".to_string(),
            started,
            completed,
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            updated_at: Timestamp::from_second(1641081600).unwrap(), // 2022-01-02 00:00:00 UTC
        }
    }

    fn create_test_goal() -> Goal {
        Goal {
            id: Uuid::from_u128(2),
            objective: "Run a marathon".to_string(),
            status: Status::InProgress,
            deadline: date(2022, 12, 31),
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1641081600).unwrap(),
            planner_id: Uuid::from_u128(3),
        }
    }

    fn create_test_plan(tasks: Vec<Task>) -> Plan {
        Plan {
            id: Uuid::from_u128(4),
            name: "Long run".to_string(),
            description: "Slow pace, 30km".to_string(),
            date: date(2022, 6, 1),
            time: time(7, 30, 0, 0),
            status: Status::NotStarted,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1641081600).unwrap(),
            goal_id: Uuid::from_u128(2),
            tasks,
        }
    }

    #[test]
    fn test_status_parse_variants() {
        assert_eq!("Not Started".parse::<Status>().unwrap(), Status::NotStarted);
        assert_eq!("not_started".parse::<Status>().unwrap(), Status::NotStarted);
        assert_eq!("In Progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("inprogress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("COMPLETED".parse::<Status>().unwrap(), Status::Completed);
        assert_eq!("fail".parse::<Status>().unwrap(), Status::Fail);
        assert_eq!(
            "done".parse::<Status>().unwrap(),
            Status::Other("done".to_string())
        );
        assert_eq!("".parse::<Status>().unwrap(), Status::Other(String::new()));
    }

    #[test]
    fn test_status_as_str_round_trips() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
        assert_eq!(Status::from("Blocked").as_str(), "Blocked");
    }

    #[test]
    fn test_status_serializes_with_spaces() {
        let json = serde_json::to_string(&Status::NotStarted).unwrap();
        assert_eq!(json, "\"Not Started\"");
        let parsed: Status = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(parsed, Status::InProgress);
    }

    #[test]
    fn test_unknown_status_serializes_verbatim() {
        let parsed: Status = serde_json::from_str("\"On Hold\"").unwrap();
        assert_eq!(parsed, Status::Other("On Hold".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"On Hold\"");
        assert_eq!(parsed.to_string(), "On Hold");
    }

    #[test]
    fn test_status_default_is_not_started() {
        assert_eq!(Status::default(), Status::NotStarted);
    }

    #[test]
    fn test_version_number_parse() {
        assert_eq!(
            "1.2.3".parse::<VersionNumber>().unwrap(),
            VersionNumber::new(1, 2, 3)
        );
        assert_eq!(
            "v0.10.0".parse::<VersionNumber>().unwrap(),
            VersionNumber::new(0, 10, 0)
        );
        assert!("1.2".parse::<VersionNumber>().is_err());
        assert!("1.2.3.4".parse::<VersionNumber>().is_err());
        assert!("1.x.3".parse::<VersionNumber>().is_err());
        assert!("vvv1.2.3".parse::<VersionNumber>().is_err());
        assert!("v".parse::<VersionNumber>().is_err());
        assert_eq!(VersionNumber::new(2, 0, 1).to_string(), "2.0.1");
    }

    #[test]
    fn test_version_number_ordering() {
        assert!(VersionNumber::new(1, 2, 3) < VersionNumber::new(1, 3, 0));
        assert!(VersionNumber::new(2, 0, 0) > VersionNumber::new(1, 99, 99));
    }

    #[test]
    fn test_plan_json_field_names() {
        let plan = create_test_plan(vec![create_test_task(false, false)]);
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["name"], "Long run");
        assert_eq!(json["date"], "2022-06-01");
        assert_eq!(json["time"], "07:30:00");
        assert_eq!(json["status"], "Not Started");
        assert_eq!(json["goal_id"], Uuid::from_u128(2).to_string());
        assert_eq!(json["tasks"].as_array().unwrap().len(), 1);

        let back: Plan = serde_json::from_value(json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn test_task_progress_label() {
        assert_eq!(create_test_task(false, false).progress_label(), "○ Open");
        assert_eq!(create_test_task(true, false).progress_label(), "➤ Started");
        assert_eq!(create_test_task(false, true).progress_label(), "✓ Completed");
        assert_eq!(create_test_task(true, true).progress_label(), "✓ Completed");
    }

    #[test]
    fn test_task_display() {
        let output = create_test_task(true, false).to_string();
        assert!(output.starts_with("### Buy running shoes (➤ Started)"));
        assert!(output.contains("- Owner: u1"));
        assert!(output.contains("Something with proper cushioning"));
    }

    #[test]
    fn test_plan_display_with_and_without_tasks() {
        let empty = create_test_plan(vec![]).to_string();
        assert!(empty.starts_with("# Long run"));
        assert!(empty.contains("- Scheduled: 2022-06-01 07:30"));
        assert!(empty.contains("No tasks in this plan."));

        let with_tasks = create_test_plan(vec![create_test_task(false, true)]).to_string();
        assert!(with_tasks.contains("## Tasks"));
        assert!(with_tasks.contains("### Buy running shoes (✓ Completed)"));
    }

    #[test]
    fn test_goal_display() {
        let output = create_test_goal().to_string();
        assert!(output.starts_with("# Run a marathon"));
        assert!(output.contains("- Status: ➤ In Progress"));
        assert!(output.contains("- Deadline: 2022-12-31"));
    }

    #[test]
    fn test_planner_display() {
        let planner = Planner {
            id: Uuid::from_u128(3),
            title: "Fitness".to_string(),
            owner: "u1".to_string(),
        };
        let output = planner.to_string();
        assert!(output.starts_with("# Fitness"));
        assert!(output.contains("- Owner: u1"));
    }

    #[test]
    fn test_version_display_lists_snapshot() {
        let version = Version {
            id: Uuid::from_u128(5),
            goal_id: Uuid::from_u128(2),
            plan_id: None,
            task_id: None,
            version: VersionNumber::new(1, 0, 0),
            created_at: Timestamp::from_second(1641081600).unwrap(),
            created_by: "u1".to_string(),
            previous_version: None,
            snapshot: Snapshot {
                goal: create_test_goal(),
                plans: vec![create_test_plan(vec![create_test_task(false, false)])],
            },
        };
        let output = version.to_string();
        assert!(output.starts_with("# Version 1.0.0"));
        assert!(output.contains("- Created by: u1"));
        assert!(output.contains("- Run a marathon (➤ In Progress)"));
        assert!(output.contains("  - Long run (○ Not Started, 1 tasks)"));
        assert!(!output.contains("- Previous:"));
    }

    #[test]
    fn test_listing_empty_and_populated() {
        let none: Vec<Planner> = Vec::new();
        assert_eq!(
            Listing::new("planners", &none).to_string(),
            "No planners found.\n"
        );

        let planners = vec![
            Planner {
                id: Uuid::from_u128(1),
                title: "One".to_string(),
                owner: "u1".to_string(),
            },
            Planner {
                id: Uuid::from_u128(2),
                title: "Two".to_string(),
                owner: "u2".to_string(),
            },
        ];
        let output = Listing::new("planners", &planners).to_string();
        assert!(output.contains("# One"));
        assert!(output.contains("# Two"));
        assert!(output.contains("\n\n# Two"));
    }
}
