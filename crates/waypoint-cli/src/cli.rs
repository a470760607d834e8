//! Subcommand definitions and their handlers.
//!
//! Each `*Args` struct carries clap attributes and converts into the core
//! request type with `From`, so the core crate stays free of clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Request → Controller
//! ```

use std::fmt::Display;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use uuid::Uuid;
use waypoint_core::{
    control::{
        CreateGoalRequest, CreatePlanRequest, CreatePlannerRequest, CreateTaskRequest,
        CreateVersionRequest,
    },
    Created, Deleted, Goal, Listing, Plan, Planner, Task, Updated, Version, Waypoint,
};

use crate::renderer::TerminalRenderer;

/// A record identifier
#[derive(Args)]
pub struct IdArgs {
    /// ID of the record
    pub id: Uuid,
}

/// An exact value to match
#[derive(Args)]
pub struct MatchArgs {
    /// Value to match exactly (case-sensitive)
    pub value: String,
}

// ============================================================================
// Planners
// ============================================================================

/// Create a new planner
#[derive(Args)]
pub struct CreatePlannerArgs {
    /// Title of the planner
    pub title: String,
    /// User who owns the planner
    #[arg(short, long)]
    pub owner: String,
}

impl From<CreatePlannerArgs> for CreatePlannerRequest {
    fn from(val: CreatePlannerArgs) -> Self {
        CreatePlannerRequest {
            title: val.title,
            owner: val.owner,
        }
    }
}

#[derive(Subcommand)]
pub enum PlannerCommands {
    /// Create a new planner
    #[command(alias = "c")]
    Create(CreatePlannerArgs),
    /// List all planners
    #[command(alias = "ls")]
    List,
    /// Show a planner
    Show(IdArgs),
    /// Delete a planner (its goals are kept)
    #[command(alias = "rm")]
    Delete(IdArgs),
    /// Find planners with the given title
    FindTitle(MatchArgs),
    /// Find planners owned by the given user
    FindOwner(MatchArgs),
}

// ============================================================================
// Goals
// ============================================================================

/// Create a new goal
#[derive(Args)]
pub struct CreateGoalArgs {
    /// What the goal sets out to achieve
    pub objective: String,
    /// Deadline as YYYY-MM-DD
    #[arg(short, long)]
    pub deadline: String,
    /// ID of the planner the goal belongs to
    #[arg(short, long)]
    pub planner_id: Uuid,
    /// Initial status, usually "Not Started", "In Progress", "Completed" or "Fail"
    #[arg(short, long)]
    pub status: Option<String>,
}

impl From<CreateGoalArgs> for CreateGoalRequest {
    fn from(val: CreateGoalArgs) -> Self {
        CreateGoalRequest {
            objective: val.objective,
            status: val.status,
            deadline: val.deadline,
            planner_id: val.planner_id,
        }
    }
}

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a new goal
    #[command(alias = "c")]
    Create(CreateGoalArgs),
    /// List all goals
    #[command(alias = "ls")]
    List,
    /// Show a goal
    Show(IdArgs),
    /// Delete a goal (its plans are kept)
    #[command(alias = "rm")]
    Delete(IdArgs),
    /// Find goals with the given objective
    FindObjective(MatchArgs),
    /// Find goals belonging to a planner
    FindPlanner(IdArgs),
}

// ============================================================================
// Plans
// ============================================================================

/// Create a new plan
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Short name of the plan
    pub name: String,
    /// ID of the goal the plan works toward
    #[arg(short, long)]
    pub goal_id: Uuid,
    /// Scheduled day as YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    /// Scheduled time as HH:MM
    #[arg(long)]
    pub time: String,
    /// Detailed description of the plan
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Initial status, usually "Not Started", "In Progress", "Completed" or "Fail"
    #[arg(short, long)]
    pub status: Option<String>,
    /// Title of a task to embed in the plan (repeatable)
    #[arg(long = "task")]
    pub tasks: Vec<String>,
}

impl From<CreatePlanArgs> for CreatePlanRequest {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlanRequest {
            name: val.name,
            description: val.description,
            date: val.date,
            time: val.time,
            status: val.status,
            goal_id: val.goal_id,
            tasks: val
                .tasks
                .into_iter()
                .map(|title| CreateTaskRequest {
                    title,
                    ..Default::default()
                })
                .collect(),
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List all plans
    #[command(alias = "ls")]
    List,
    /// Show a plan with its tasks
    Show(IdArgs),
    /// Delete a plan
    #[command(alias = "rm")]
    Delete(IdArgs),
    /// Find plans with the given name
    FindName(MatchArgs),
    /// Find plans belonging to a goal
    FindGoal(IdArgs),
}

// ============================================================================
// Tasks
// ============================================================================

/// Create a new standalone task
#[derive(Args)]
pub struct CreateTaskArgs {
    /// Brief title of the task
    pub title: String,
    /// Free-form description
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// User the task belongs to
    #[arg(short, long, default_value = "")]
    pub owner: String,
}

impl From<CreateTaskArgs> for CreateTaskRequest {
    fn from(val: CreateTaskArgs) -> Self {
        CreateTaskRequest {
            title: val.title,
            description: val.description,
            owner: val.owner,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Create a new task
    #[command(alias = "c")]
    Create(CreateTaskArgs),
    /// List all tasks
    #[command(alias = "ls")]
    List,
    /// Show a task
    Show(IdArgs),
    /// Mark a task as started
    Start(IdArgs),
    /// Mark a task as completed
    #[command(alias = "done")]
    Complete(IdArgs),
    /// Delete a task
    #[command(alias = "rm")]
    Delete(IdArgs),
    /// Find tasks owned by the given user
    FindOwner(MatchArgs),
}

// ============================================================================
// Versions
// ============================================================================

/// Snapshot a goal and its plans
#[derive(Args)]
pub struct CreateVersionArgs {
    /// ID of the goal to snapshot
    pub goal_id: Uuid,
    /// Version number as major.minor.patch
    #[arg(short, long)]
    pub version: String,
    /// User recording the version
    #[arg(short = 'b', long)]
    pub created_by: String,
    /// Plan the version is recorded against
    #[arg(long)]
    pub plan_id: Option<Uuid>,
    /// Task the version is recorded against
    #[arg(long)]
    pub task_id: Option<Uuid>,
    /// ID of the version this one supersedes
    #[arg(long)]
    pub previous_version: Option<Uuid>,
}

impl From<CreateVersionArgs> for CreateVersionRequest {
    fn from(val: CreateVersionArgs) -> Self {
        CreateVersionRequest {
            goal_id: val.goal_id,
            plan_id: val.plan_id,
            task_id: val.task_id,
            version: val.version,
            created_by: val.created_by,
            previous_version: val.previous_version,
        }
    }
}

#[derive(Subcommand)]
pub enum VersionCommands {
    /// Snapshot a goal
    #[command(alias = "c")]
    Create(CreateVersionArgs),
    /// List all versions
    #[command(alias = "ls")]
    List,
    /// Show a version with its snapshot
    Show(IdArgs),
    /// Delete a version
    #[command(alias = "rm")]
    Delete(IdArgs),
    /// Find versions of a goal
    FindGoal(IdArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs one subcommand against the controllers and renders the outcome.
pub struct Cli {
    waypoint: Waypoint,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(waypoint: Waypoint, renderer: TerminalRenderer) -> Self {
        Self { waypoint, renderer }
    }

    fn show(&self, item: &impl Display) -> Result<()> {
        self.renderer.render(&item.to_string())
    }

    fn list<T: Display>(&self, plural: &'static str, items: &[T]) -> Result<()> {
        self.show(&Listing::new(plural, items))
    }

    pub fn handle_planner_command(&self, command: PlannerCommands) -> Result<()> {
        let planners = &self.waypoint.planners;
        match command {
            PlannerCommands::Create(args) => {
                let created = planners
                    .create_planner(args.into())
                    .context("Failed to create planner")?;
                self.show(&Created {
                    kind: Planner::KIND,
                    id: created.id,
                })
            }
            PlannerCommands::List => {
                let list = planners.list_planners().context("Failed to list planners")?;
                self.list("planners", &list.planners)
            }
            PlannerCommands::Show(IdArgs { id }) => {
                let planner = planners
                    .get_planner(id)
                    .with_context(|| format!("Failed to get planner {id}"))?;
                self.show(&planner)
            }
            PlannerCommands::Delete(IdArgs { id }) => {
                planners
                    .delete_planner(id)
                    .with_context(|| format!("Failed to delete planner {id}"))?;
                self.show(&Deleted {
                    kind: Planner::KIND,
                    id,
                })
            }
            PlannerCommands::FindTitle(MatchArgs { value }) => {
                let list = planners
                    .get_planners_by_title(&value)
                    .context("Failed to search planners")?;
                self.list("planners", &list.planners)
            }
            PlannerCommands::FindOwner(MatchArgs { value }) => {
                let list = planners
                    .get_planners_by_owner(&value)
                    .context("Failed to search planners")?;
                self.list("planners", &list.planners)
            }
        }
    }

    pub fn handle_goal_command(&self, command: GoalCommands) -> Result<()> {
        let goals = &self.waypoint.goals;
        match command {
            GoalCommands::Create(args) => {
                let created = goals
                    .create_goal(args.into())
                    .context("Failed to create goal")?;
                self.show(&Created {
                    kind: Goal::KIND,
                    id: created.id,
                })
            }
            GoalCommands::List => {
                let list = goals.list_goals().context("Failed to list goals")?;
                self.list("goals", &list.goals)
            }
            GoalCommands::Show(IdArgs { id }) => {
                let goal = goals
                    .get_goal(id)
                    .with_context(|| format!("Failed to get goal {id}"))?;
                self.show(&goal)
            }
            GoalCommands::Delete(IdArgs { id }) => {
                goals
                    .delete_goal(id)
                    .with_context(|| format!("Failed to delete goal {id}"))?;
                self.show(&Deleted {
                    kind: Goal::KIND,
                    id,
                })
            }
            GoalCommands::FindObjective(MatchArgs { value }) => {
                let list = goals
                    .get_goals_by_objective(&value)
                    .context("Failed to search goals")?;
                self.list("goals", &list.goals)
            }
            GoalCommands::FindPlanner(IdArgs { id }) => {
                let list = goals
                    .get_goals_by_planner_id(id)
                    .context("Failed to search goals")?;
                self.list("goals", &list.goals)
            }
        }
    }

    pub fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        let plans = &self.waypoint.plans;
        match command {
            PlanCommands::Create(args) => {
                let created = plans
                    .create_plan(args.into())
                    .context("Failed to create plan")?;
                self.show(&Created {
                    kind: Plan::KIND,
                    id: created.id,
                })
            }
            PlanCommands::List => {
                let list = plans.list_plans().context("Failed to list plans")?;
                self.list("plans", &list.plans)
            }
            PlanCommands::Show(IdArgs { id }) => {
                let plan = plans
                    .get_plan(id)
                    .with_context(|| format!("Failed to get plan {id}"))?;
                self.show(&plan)
            }
            PlanCommands::Delete(IdArgs { id }) => {
                plans
                    .delete_plan(id)
                    .with_context(|| format!("Failed to delete plan {id}"))?;
                self.show(&Deleted {
                    kind: Plan::KIND,
                    id,
                })
            }
            PlanCommands::FindName(MatchArgs { value }) => {
                let list = plans
                    .get_plans_by_name(&value)
                    .context("Failed to search plans")?;
                self.list("plans", &list.plans)
            }
            PlanCommands::FindGoal(IdArgs { id }) => {
                let list = plans
                    .get_plans_by_goal_id(id)
                    .context("Failed to search plans")?;
                self.list("plans", &list.plans)
            }
        }
    }

    pub fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        let tasks = &self.waypoint.tasks;
        match command {
            TaskCommands::Create(args) => {
                let created = tasks
                    .create_task(args.into())
                    .context("Failed to create task")?;
                self.show(&Created {
                    kind: Task::KIND,
                    id: created.id,
                })
            }
            TaskCommands::List => {
                let list = tasks.list_tasks().context("Failed to list tasks")?;
                self.list("tasks", &list.tasks)
            }
            TaskCommands::Show(IdArgs { id }) => {
                let task = tasks
                    .get_task(id)
                    .with_context(|| format!("Failed to get task {id}"))?;
                self.show(&task)
            }
            TaskCommands::Start(IdArgs { id }) => {
                tasks
                    .start_task(id)
                    .with_context(|| format!("Failed to start task {id}"))?;
                self.show(&Updated {
                    kind: Task::KIND,
                    id,
                })
            }
            TaskCommands::Complete(IdArgs { id }) => {
                tasks
                    .complete_task(id)
                    .with_context(|| format!("Failed to complete task {id}"))?;
                self.show(&Updated {
                    kind: Task::KIND,
                    id,
                })
            }
            TaskCommands::Delete(IdArgs { id }) => {
                tasks
                    .delete_task(id)
                    .with_context(|| format!("Failed to delete task {id}"))?;
                self.show(&Deleted {
                    kind: Task::KIND,
                    id,
                })
            }
            TaskCommands::FindOwner(MatchArgs { value }) => {
                let list = tasks
                    .get_tasks_by_owner(&value)
                    .context("Failed to search tasks")?;
                self.list("tasks", &list.tasks)
            }
        }
    }

    pub fn handle_version_command(&self, command: VersionCommands) -> Result<()> {
        let versions = &self.waypoint.versions;
        match command {
            VersionCommands::Create(args) => {
                let created = versions
                    .create_version(args.into())
                    .context("Failed to create version")?;
                self.show(&Created {
                    kind: Version::KIND,
                    id: created.id,
                })
            }
            VersionCommands::List => {
                let list = versions.list_versions().context("Failed to list versions")?;
                self.list("versions", &list.versions)
            }
            VersionCommands::Show(IdArgs { id }) => {
                let version = versions
                    .get_version(id)
                    .with_context(|| format!("Failed to get version {id}"))?;
                self.show(&version)
            }
            VersionCommands::Delete(IdArgs { id }) => {
                versions
                    .delete_version(id)
                    .with_context(|| format!("Failed to delete version {id}"))?;
                self.show(&Deleted {
                    kind: Version::KIND,
                    id,
                })
            }
            VersionCommands::FindGoal(IdArgs { id }) => {
                let list = versions
                    .get_versions_by_goal_id(id)
                    .context("Failed to search versions")?;
                self.list("versions", &list.versions)
            }
        }
    }
}
