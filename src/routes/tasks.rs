use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{Pagination, TaskInput, TaskPatch, TaskQuery},
    tasks::TaskService,
};
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

/// Retrieves a page of tasks owned by the authenticated user, oldest first.
///
/// ## Query Parameters:
/// - `limit` (optional, default 5, capped at 100): maximum number of tasks returned.
/// - `offset` (optional, default 0): number of tasks to skip.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Task` objects.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
#[get("")]
pub async fn list_tasks(
    tasks: web::Data<TaskService>,
    query_params: web::Query<TaskQuery>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let page = Pagination::from(query_params.into_inner());
    let list = tasks.list(user.id, page).await?;
    Ok(HttpResponse::Ok().json(list))
}

/// Creates a new task for the authenticated user.
///
/// ## Request Body:
/// - `title`: between 4 and 24 characters.
///
/// ## Responses:
/// - `201 Created`: Returns the newly created `Task` object as JSON.
/// - `400 Bad Request`: If the body is malformed or the title fails validation.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
#[post("")]
pub async fn create_task(
    tasks: web::Data<TaskService>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = tasks.create(user.id, task_data.into_inner().title).await?;
    Ok(HttpResponse::Created().json(task))
}

/// Retrieves a specific task by its ID.
///
/// ## Responses:
/// - `200 OK`: Returns the `Task` object as JSON.
/// - `400 Bad Request`: If `id` is not a UUID.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `403 Forbidden`: If the task belongs to another user.
/// - `404 Not Found`: If the task does not exist.
#[get("/{id}")]
pub async fn get_task(
    tasks: web::Data<TaskService>,
    task_id: web::Path<Uuid>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = tasks.get(user.id, task_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Partially updates a task. Only `title` and `completed` present in the body are changed.
///
/// ## Responses:
/// - `200 OK`: Returns the updated `Task` object as JSON.
/// - `400 Bad Request`: If the body is malformed or `title` is empty.
/// - `401 Unauthorized`, `403 Forbidden`, `404 Not Found`: as for `GET /todos/{id}`.
#[patch("/{id}")]
pub async fn update_task(
    tasks: web::Data<TaskService>,
    task_id: web::Path<Uuid>,
    task_data: web::Json<TaskPatch>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = tasks
        .update(user.id, task_id.into_inner(), &task_data)
        .await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task and returns it as it was before deletion.
///
/// ## Responses:
/// - `200 OK`: Returns the deleted `Task` object as JSON.
/// - `401 Unauthorized`, `403 Forbidden`, `404 Not Found`: as for `GET /todos/{id}`.
#[delete("/{id}")]
pub async fn delete_task(
    tasks: web::Data<TaskService>,
    task_id: web::Path<Uuid>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = tasks.delete(user.id, task_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(task))
}
