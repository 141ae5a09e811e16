use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::BoardResult;
use crate::models::{
    CreateSection, CreateTask, MoveTask, ReconcileReport, Section, SectionWithTasks, Task,
    UpdateTask,
};
use crate::repository::BoardStore;
use crate::service::BoardService;

/// OpenAPI documentation for the Board API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_sections,
        create_section,
        get_section,
        delete_section,
        list_tasks,
        create_task,
        get_task,
        update_task,
        delete_task,
        move_task,
        reconcile,
    ),
    components(
        schemas(
            Section,
            SectionWithTasks,
            Task,
            CreateSection,
            CreateTask,
            UpdateTask,
            MoveTask,
            ReconcileReport
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Sections", description = "Board section endpoints"),
        (name = "Tasks", description = "Task endpoints"),
        (name = "Board", description = "Whole-board maintenance endpoints")
    )
)]
pub struct ApiDoc;

/// Create the board router with all HTTP endpoints
pub fn router<S: BoardStore + 'static>(service: BoardService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/sections", get(list_sections).post(create_section))
        .route(
            "/sections/{id}",
            get(get_section).delete(delete_section),
        )
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/tasks/{id}/move", post(move_task))
        .route("/board/reconcile", post(reconcile))
        .with_state(shared_service)
}

/// List all sections with their tasks resolved
#[utoipa::path(
    get,
    path = "/sections",
    tag = "Sections",
    responses(
        (status = 200, description = "All sections in creation order", body = Vec<SectionWithTasks>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_sections<S: BoardStore>(
    State(service): State<Arc<BoardService<S>>>,
) -> BoardResult<Json<Vec<SectionWithTasks>>> {
    let board = service.list_board().await?;
    Ok(Json(board))
}

/// Create a new section
#[utoipa::path(
    post,
    path = "/sections",
    tag = "Sections",
    request_body = CreateSection,
    responses(
        (status = 201, description = "Section created successfully", body = Section),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_section<S: BoardStore>(
    State(service): State<Arc<BoardService<S>>>,
    ValidatedJson(input): ValidatedJson<CreateSection>,
) -> BoardResult<impl IntoResponse> {
    let section = service.create_section(input).await?;
    Ok((StatusCode::CREATED, Json(section)))
}

/// Get a section with its tasks resolved
#[utoipa::path(
    get,
    path = "/sections/{id}",
    tag = "Sections",
    params(
        ("id" = Uuid, Path, description = "Section ID")
    ),
    responses(
        (status = 200, description = "Section found", body = SectionWithTasks),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_section<S: BoardStore>(
    State(service): State<Arc<BoardService<S>>>,
    UuidPath(id): UuidPath,
) -> BoardResult<Json<SectionWithTasks>> {
    let section = service.get_section(id).await?;
    Ok(Json(section))
}

/// Delete an empty section
#[utoipa::path(
    delete,
    path = "/sections/{id}",
    tag = "Sections",
    params(
        ("id" = Uuid, Path, description = "Section ID")
    ),
    responses(
        (status = 204, description = "Section deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_section<S: BoardStore>(
    State(service): State<Arc<BoardService<S>>>,
    UuidPath(id): UuidPath,
) -> BoardResult<impl IntoResponse> {
    service.delete_section(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List all tasks
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "Tasks",
    responses(
        (status = 200, description = "All tasks", body = Vec<Task>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_tasks<S: BoardStore>(
    State(service): State<Arc<BoardService<S>>>,
) -> BoardResult<Json<Vec<Task>>> {
    let tasks = service.list_tasks().await?;
    Ok(Json(tasks))
}

/// Create a new task in a section
#[utoipa::path(
    post,
    path = "/tasks",
    tag = "Tasks",
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created successfully", body = Task),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_task<S: BoardStore>(
    State(service): State<Arc<BoardService<S>>>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> BoardResult<impl IntoResponse> {
    let task = service.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_task<S: BoardStore>(
    State(service): State<Arc<BoardService<S>>>,
    UuidPath(id): UuidPath,
) -> BoardResult<Json<Task>> {
    let task = service.get_task(id).await?;
    Ok(Json(task))
}

/// Update a task's fields (ownership changes go through move)
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated successfully", body = Task),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_task<S: BoardStore>(
    State(service): State<Arc<BoardService<S>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> BoardResult<Json<Task>> {
    let task = service.update_task(id, input).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_task<S: BoardStore>(
    State(service): State<Arc<BoardService<S>>>,
    UuidPath(id): UuidPath,
) -> BoardResult<impl IntoResponse> {
    service.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Move a task to another section
#[utoipa::path(
    post,
    path = "/tasks/{id}/move",
    tag = "Tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    request_body = MoveTask,
    responses(
        (status = 200, description = "Task moved successfully", body = Task),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn move_task<S: BoardStore>(
    State(service): State<Arc<BoardService<S>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<MoveTask>,
) -> BoardResult<Json<Task>> {
    let task = service.move_task(id, input).await?;
    Ok(Json(task))
}

/// Run a consistency pass over the whole board
#[utoipa::path(
    post,
    path = "/board/reconcile",
    tag = "Board",
    responses(
        (status = 200, description = "Reconcile pass finished", body = ReconcileReport),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn reconcile<S: BoardStore>(
    State(service): State<Arc<BoardService<S>>>,
) -> BoardResult<Json<ReconcileReport>> {
    let report = service.reconcile().await?;
    Ok(Json(report))
}
