//! CRUD handlers for blog posts.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
///
/// Returns every post as a bare JSON array.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id} not found")))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Field-presence validation only; anything deeper is out of scope.
    let mut problems = Vec::new();
    if req.title.trim().is_empty() {
        problems.push("title must not be empty".to_string());
    }
    if req.content.trim().is_empty() {
        problems.push("content must not be empty".to_string());
    }
    if req.author.first_name.trim().is_empty() {
        problems.push("author.firstName must not be empty".to_string());
    }
    if req.author.last_name.trim().is_empty() {
        problems.push("author.lastName must not be empty".to_string());
    }
    if !problems.is_empty() {
        return Err(AppError::Validation(problems));
    }

    let post = state.posts.insert(req.into()).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// PUT /posts/{id}
///
/// Partial-replace semantics: only the fields sent are overwritten, and the
/// nested author group merges field-by-field. Responds 204 with no body.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let mut problems = Vec::new();
    if matches!(&req.title, Some(title) if title.trim().is_empty()) {
        problems.push("title must not be empty".to_string());
    }
    if matches!(&req.content, Some(content) if content.trim().is_empty()) {
        problems.push("content must not be empty".to_string());
    }
    if let Some(author) = &req.author {
        if matches!(&author.first_name, Some(name) if name.trim().is_empty()) {
            problems.push("author.firstName must not be empty".to_string());
        }
        if matches!(&author.last_name, Some(name) if name.trim().is_empty()) {
            problems.push("author.lastName must not be empty".to_string());
        }
    }
    if !problems.is_empty() {
        return Err(AppError::Validation(problems));
    }

    match state.posts.update_by_id(id, req.into()).await? {
        Some(_) => Ok(HttpResponse::NoContent().finish()),
        None => Err(AppError::NotFound(format!("post {id} not found"))),
    }
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if state.posts.delete_by_id(id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound(format!("post {id} not found")))
    }
}
