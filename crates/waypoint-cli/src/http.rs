//! REST transport.
//!
//! Every handler decodes its path and body, runs the synchronous controller
//! call on the blocking thread pool, and answers with JSON. Malformed input
//! is a 400; every other failure, including a missing record, is a 500.
//! Error bodies are `{"error": "<message>"}`.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use tokio::task;
use uuid::Uuid;
use waypoint_core::{
    control::{
        CreateGoalRequest, CreatePlanRequest, CreatePlannerRequest, CreateTaskRequest,
        CreateVersionRequest, GoalList, PlanList, PlannerList, TaskList, UpdateGoalRequest,
        UpdatePlanRequest, UpdatePlannerRequest, UpdateTaskRequest, UpdateVersionRequest,
        VersionList,
    },
    CreatedId, Goal, Plan, Planner, Task, Version, Waypoint, WaypointError,
};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl From<WaypointError> for AppError {
    fn from(err: WaypointError) -> Self {
        if err.is_client_error() {
            Self::bad_request(err.to_string())
        } else {
            Self::internal(err.to_string())
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!("Request failed: {}", self.message);
        } else {
            warn!("Rejected request: {}", self.message);
        }
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

type ApiResult<T> = std::result::Result<T, AppError>;

fn parse_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| AppError::bad_request(format!("Invalid ID '{raw}': {e}")))
}

fn decode<T: DeserializeOwned>(
    payload: std::result::Result<Json<T>, JsonRejection>,
) -> ApiResult<T> {
    let Json(request) = payload?;
    Ok(request)
}

/// Runs a controller call on the blocking pool.
async fn blocking<T, F>(call: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> waypoint_core::Result<T> + Send + 'static,
{
    task::spawn_blocking(call)
        .await
        .map_err(|e| AppError::internal(format!("Task join error: {e}")))?
        .map_err(AppError::from)
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(waypoint: Waypoint) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/tasks/by-owner/{owner}", get(tasks_by_owner))
        .route("/goals", get(list_goals).post(create_goal))
        .route(
            "/goals/{id}",
            get(get_goal).put(update_goal).delete(delete_goal),
        )
        .route("/goals/by-objective/{objective}", get(goals_by_objective))
        .route("/goals/by-planner/{planner_id}", get(goals_by_planner))
        .route("/plans", get(list_plans).post(create_plan))
        .route(
            "/plans/{id}",
            get(get_plan).put(update_plan).delete(delete_plan),
        )
        .route("/plans/by-name/{name}", get(plans_by_name))
        .route("/plans/by-goal/{goal_id}", get(plans_by_goal))
        .route("/planners", get(list_planners).post(create_planner))
        .route(
            "/planners/{id}",
            get(get_planner).put(update_planner).delete(delete_planner),
        )
        .route("/planners/by-title/{title}", get(planners_by_title))
        .route("/planners/by-owner/{owner}", get(planners_by_owner))
        .route("/versions", get(list_versions).post(create_version))
        .route(
            "/versions/{id}",
            get(get_version).put(update_version).delete(delete_version),
        )
        .route("/versions/by-goal/{goal_id}", get(versions_by_goal))
        .with_state(waypoint)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Serves the REST API on `address` (`host:port`) until Ctrl+C.
pub async fn run_serve(waypoint: Waypoint, address: &str) -> Result<()> {
    let addr: SocketAddr = address
        .parse()
        .with_context(|| format!("Invalid listen address {address}"))?;
    let app = build_router(waypoint);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Waypoint listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;
    info!("Waypoint shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install Ctrl+C handler: {e}");
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

async fn create_task(
    State(waypoint): State<Waypoint>,
    payload: std::result::Result<Json<CreateTaskRequest>, JsonRejection>,
) -> ApiResult<Json<CreatedId>> {
    let request = decode(payload)?;
    let created = blocking(move || waypoint.tasks.create_task(request)).await?;
    Ok(Json(created))
}

async fn list_tasks(State(waypoint): State<Waypoint>) -> ApiResult<Json<TaskList>> {
    Ok(Json(blocking(move || waypoint.tasks.list_tasks()).await?))
}

async fn get_task(
    State(waypoint): State<Waypoint>,
    Path(id): Path<String>,
) -> ApiResult<Json<Task>> {
    let id = parse_id(&id)?;
    Ok(Json(blocking(move || waypoint.tasks.get_task(id)).await?))
}

async fn update_task(
    State(waypoint): State<Waypoint>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    let request = decode(payload)?;
    blocking(move || waypoint.tasks.update_task(id, request)).await?;
    Ok(StatusCode::OK)
}

async fn delete_task(
    State(waypoint): State<Waypoint>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    blocking(move || waypoint.tasks.delete_task(id)).await?;
    Ok(StatusCode::OK)
}

async fn tasks_by_owner(
    State(waypoint): State<Waypoint>,
    Path(owner): Path<String>,
) -> ApiResult<Json<TaskList>> {
    Ok(Json(
        blocking(move || waypoint.tasks.get_tasks_by_owner(&owner)).await?,
    ))
}

// ---------------------------------------------------------------------------
// Goals
// ---------------------------------------------------------------------------

async fn create_goal(
    State(waypoint): State<Waypoint>,
    payload: std::result::Result<Json<CreateGoalRequest>, JsonRejection>,
) -> ApiResult<Json<CreatedId>> {
    let request = decode(payload)?;
    let created = blocking(move || waypoint.goals.create_goal(request)).await?;
    Ok(Json(created))
}

async fn list_goals(State(waypoint): State<Waypoint>) -> ApiResult<Json<GoalList>> {
    Ok(Json(blocking(move || waypoint.goals.list_goals()).await?))
}

async fn get_goal(
    State(waypoint): State<Waypoint>,
    Path(id): Path<String>,
) -> ApiResult<Json<Goal>> {
    let id = parse_id(&id)?;
    Ok(Json(blocking(move || waypoint.goals.get_goal(id)).await?))
}

async fn update_goal(
    State(waypoint): State<Waypoint>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateGoalRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    let request = decode(payload)?;
    blocking(move || waypoint.goals.update_goal(id, request)).await?;
    Ok(StatusCode::OK)
}

async fn delete_goal(
    State(waypoint): State<Waypoint>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    blocking(move || waypoint.goals.delete_goal(id)).await?;
    Ok(StatusCode::OK)
}

async fn goals_by_objective(
    State(waypoint): State<Waypoint>,
    Path(objective): Path<String>,
) -> ApiResult<Json<GoalList>> {
    Ok(Json(
        blocking(move || waypoint.goals.get_goals_by_objective(&objective)).await?,
    ))
}

async fn goals_by_planner(
    State(waypoint): State<Waypoint>,
    Path(planner_id): Path<String>,
) -> ApiResult<Json<GoalList>> {
    let planner_id = parse_id(&planner_id)?;
    Ok(Json(
        blocking(move || waypoint.goals.get_goals_by_planner_id(planner_id)).await?,
    ))
}

// ---------------------------------------------------------------------------
// Plans
// ---------------------------------------------------------------------------

async fn create_plan(
    State(waypoint): State<Waypoint>,
    payload: std::result::Result<Json<CreatePlanRequest>, JsonRejection>,
) -> ApiResult<Json<CreatedId>> {
    let request = decode(payload)?;
    let created = blocking(move || waypoint.plans.create_plan(request)).await?;
    Ok(Json(created))
}

async fn list_plans(State(waypoint): State<Waypoint>) -> ApiResult<Json<PlanList>> {
    Ok(Json(blocking(move || waypoint.plans.list_plans()).await?))
}

async fn get_plan(
    State(waypoint): State<Waypoint>,
    Path(id): Path<String>,
) -> ApiResult<Json<Plan>> {
    let id = parse_id(&id)?;
    Ok(Json(blocking(move || waypoint.plans.get_plan(id)).await?))
}

async fn update_plan(
    State(waypoint): State<Waypoint>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdatePlanRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    let request = decode(payload)?;
    blocking(move || waypoint.plans.update_plan(id, request)).await?;
    Ok(StatusCode::OK)
}

async fn delete_plan(
    State(waypoint): State<Waypoint>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    blocking(move || waypoint.plans.delete_plan(id)).await?;
    Ok(StatusCode::OK)
}

async fn plans_by_name(
    State(waypoint): State<Waypoint>,
    Path(name): Path<String>,
) -> ApiResult<Json<PlanList>> {
    Ok(Json(
        blocking(move || waypoint.plans.get_plans_by_name(&name)).await?,
    ))
}

async fn plans_by_goal(
    State(waypoint): State<Waypoint>,
    Path(goal_id): Path<String>,
) -> ApiResult<Json<PlanList>> {
    let goal_id = parse_id(&goal_id)?;
    Ok(Json(
        blocking(move || waypoint.plans.get_plans_by_goal_id(goal_id)).await?,
    ))
}

// ---------------------------------------------------------------------------
// Planners
// ---------------------------------------------------------------------------

async fn create_planner(
    State(waypoint): State<Waypoint>,
    payload: std::result::Result<Json<CreatePlannerRequest>, JsonRejection>,
) -> ApiResult<Json<CreatedId>> {
    let request = decode(payload)?;
    let created = blocking(move || waypoint.planners.create_planner(request)).await?;
    Ok(Json(created))
}

async fn list_planners(State(waypoint): State<Waypoint>) -> ApiResult<Json<PlannerList>> {
    Ok(Json(
        blocking(move || waypoint.planners.list_planners()).await?,
    ))
}

async fn get_planner(
    State(waypoint): State<Waypoint>,
    Path(id): Path<String>,
) -> ApiResult<Json<Planner>> {
    let id = parse_id(&id)?;
    Ok(Json(
        blocking(move || waypoint.planners.get_planner(id)).await?,
    ))
}

async fn update_planner(
    State(waypoint): State<Waypoint>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdatePlannerRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    let request = decode(payload)?;
    blocking(move || waypoint.planners.update_planner(id, request)).await?;
    Ok(StatusCode::OK)
}

async fn delete_planner(
    State(waypoint): State<Waypoint>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    blocking(move || waypoint.planners.delete_planner(id)).await?;
    Ok(StatusCode::OK)
}

async fn planners_by_title(
    State(waypoint): State<Waypoint>,
    Path(title): Path<String>,
) -> ApiResult<Json<PlannerList>> {
    Ok(Json(
        blocking(move || waypoint.planners.get_planners_by_title(&title)).await?,
    ))
}

async fn planners_by_owner(
    State(waypoint): State<Waypoint>,
    Path(owner): Path<String>,
) -> ApiResult<Json<PlannerList>> {
    Ok(Json(
        blocking(move || waypoint.planners.get_planners_by_owner(&owner)).await?,
    ))
}

// ---------------------------------------------------------------------------
// Versions
// ---------------------------------------------------------------------------

async fn create_version(
    State(waypoint): State<Waypoint>,
    payload: std::result::Result<Json<CreateVersionRequest>, JsonRejection>,
) -> ApiResult<Json<CreatedId>> {
    let request = decode(payload)?;
    let created = blocking(move || waypoint.versions.create_version(request)).await?;
    Ok(Json(created))
}

async fn list_versions(State(waypoint): State<Waypoint>) -> ApiResult<Json<VersionList>> {
    Ok(Json(
        blocking(move || waypoint.versions.list_versions()).await?,
    ))
}

async fn get_version(
    State(waypoint): State<Waypoint>,
    Path(id): Path<String>,
) -> ApiResult<Json<Version>> {
    let id = parse_id(&id)?;
    Ok(Json(
        blocking(move || waypoint.versions.get_version(id)).await?,
    ))
}

async fn update_version(
    State(waypoint): State<Waypoint>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateVersionRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    let request = decode(payload)?;
    blocking(move || waypoint.versions.update_version(id, request)).await?;
    Ok(StatusCode::OK)
}

async fn delete_version(
    State(waypoint): State<Waypoint>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    blocking(move || waypoint.versions.delete_version(id)).await?;
    Ok(StatusCode::OK)
}

async fn versions_by_goal(
    State(waypoint): State<Waypoint>,
    Path(goal_id): Path<String>,
) -> ApiResult<Json<VersionList>> {
    let goal_id = parse_id(&goal_id)?;
    Ok(Json(
        blocking(move || waypoint.versions.get_versions_by_goal_id(goal_id)).await?,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use waypoint_core::{MemoryStore, Waypoint};

    // -----------------------------------------------------------------------
    // HTTP helpers
    // -----------------------------------------------------------------------

    fn app() -> axum::Router {
        super::build_router(Waypoint::from_store(Arc::new(MemoryStore::new())))
    }

    async fn send(
        app: &axum::Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1_048_576)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create(app: &axum::Router, uri: &str, body: Value) -> String {
        let resp = send(app, Method::POST, uri, Some(body)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        body_json(resp).await["id"]
            .as_str()
            .expect("create should return an id")
            .to_string()
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn test_task_crud_over_http() {
        let app = app();
        let id = create(
            &app,
            "/tasks",
            json!({"title": "Write docs", "description": "API guide", "owner": "alice"}),
        )
        .await;

        let resp = send(&app, Method::GET, &format!("/tasks/{id}"), None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let task = body_json(resp).await;
        assert_eq!(task["title"], "Write docs");
        assert_eq!(task["started"], false);

        let resp = send(
            &app,
            Method::PUT,
            &format!("/tasks/{id}"),
            Some(json!({"completed": true})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = send(&app, Method::GET, "/tasks/by-owner/alice", None).await;
        let list = body_json(resp).await;
        assert_eq!(list["tasks"][0]["completed"], true);

        let resp = send(&app, Method::DELETE, &format!("/tasks/{id}"), None).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = send(&app, Method::GET, "/tasks", None).await;
        assert_eq!(body_json(resp).await, json!({"tasks": []}));
    }

    #[tokio::test]
    async fn test_missing_record_is_server_error() {
        let app = app();
        let resp = send(
            &app,
            Method::DELETE,
            "/tasks/6f1c2a57-3a4b-4c1e-9d2f-0a1b2c3d4e5f",
            None,
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn test_malformed_id_is_bad_request() {
        let app = app();
        let resp = send(&app, Method::GET, "/goals/not-a-uuid", None).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(resp).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = app();
        let resp = send(&app, Method::POST, "/planners", Some(json!({"title": 5}))).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(resp).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_invalid_date_is_bad_request() {
        let app = app();
        let resp = send(
            &app,
            Method::POST,
            "/goals",
            Some(json!({
                "objective": "Ship 1.0",
                "deadline": "invalid-date",
                "planner_id": "6f1c2a57-3a4b-4c1e-9d2f-0a1b2c3d4e5f"
            })),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("deadline"));
    }

    #[tokio::test]
    async fn test_planner_goal_plan_version_flow() {
        let app = app();
        let planner_id = create(
            &app,
            "/planners",
            json!({"title": "Release", "owner": "bob"}),
        )
        .await;
        let goal_id = create(
            &app,
            "/goals",
            json!({
                "objective": "Ship 1.0",
                "status": "In Progress",
                "deadline": "2022-12-31",
                "planner_id": planner_id
            }),
        )
        .await;
        create(
            &app,
            "/plans",
            json!({
                "name": "Code freeze",
                "description": "No new features",
                "date": "2022-12-01",
                "time": "09:00",
                "goal_id": goal_id,
                "tasks": [{"title": "Tag release", "owner": "bob"}]
            }),
        )
        .await;
        let version_id = create(
            &app,
            "/versions",
            json!({"goal_id": goal_id, "version": "1.0.0", "created_by": "bob"}),
        )
        .await;

        let resp = send(&app, Method::GET, &format!("/goals/by-planner/{planner_id}"), None).await;
        let goals = body_json(resp).await;
        assert_eq!(goals["goals"].as_array().unwrap().len(), 1);
        assert_eq!(goals["goals"][0]["deadline"], "2022-12-31");

        let resp = send(&app, Method::GET, &format!("/plans/by-goal/{goal_id}"), None).await;
        let plans = body_json(resp).await;
        assert_eq!(plans["plans"][0]["time"], "09:00:00");
        assert_eq!(plans["plans"][0]["status"], "Not Started");
        assert_eq!(plans["plans"][0]["tasks"][0]["title"], "Tag release");

        let resp = send(&app, Method::GET, &format!("/versions/{version_id}"), None).await;
        let version = body_json(resp).await;
        assert_eq!(
            version["version"],
            json!({"major": 1, "minor": 0, "patch": 0})
        );
        assert_eq!(version["snapshot"]["goal"]["objective"], "Ship 1.0");
        assert_eq!(version["snapshot"]["plans"][0]["name"], "Code freeze");

        let resp = send(&app, Method::GET, "/planners/by-owner/bob", None).await;
        assert_eq!(body_json(resp).await["planners"][0]["title"], "Release");
    }

    #[tokio::test]
    async fn test_update_of_missing_plan_creates_nothing() {
        let app = app();
        let resp = send(
            &app,
            Method::PUT,
            "/plans/6f1c2a57-3a4b-4c1e-9d2f-0a1b2c3d4e5f",
            Some(json!({"name": "Ghost"})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = send(&app, Method::GET, "/plans", None).await;
        assert_eq!(body_json(resp).await, json!({"plans": []}));
    }

    #[tokio::test]
    async fn test_free_form_goal_status_round_trips() {
        let app = app();
        let id = create(
            &app,
            "/goals",
            json!({
                "objective": "Fix the roof",
                "status": "Blocked",
                "deadline": "2022-12-31",
                "planner_id": "6f1c2a57-3a4b-4c1e-9d2f-0a1b2c3d4e5f"
            }),
        )
        .await;

        let resp = send(&app, Method::GET, &format!("/goals/{id}"), None).await;
        assert_eq!(body_json(resp).await["status"], "Blocked");

        let resp = send(
            &app,
            Method::PUT,
            &format!("/goals/{id}"),
            Some(json!({"status": "Waiting on weather"})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = send(&app, Method::GET, &format!("/goals/{id}"), None).await;
        assert_eq!(body_json(resp).await["status"], "Waiting on weather");
    }

    #[tokio::test]
    async fn test_run_serve_rejects_bad_address() {
        let waypoint = Waypoint::from_store(Arc::new(MemoryStore::new()));
        let err = super::run_serve(waypoint, "127.0.0.1:http")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid listen address"));
    }
}
