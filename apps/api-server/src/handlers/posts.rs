//! Post handlers - one per CRUD operation.

use actix_web::{HttpResponse, web};

use inkpost_core::domain::{NewPost, Post, PostChanges};
use inkpost_shared::MessageResponse;
use inkpost_shared::dto::{
    CreatePostRequest, PostDto, PostEnvelope, PostListResponse, UpdatePostRequest,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_dto(post: Post) -> PostDto {
    PostDto {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        author: post.author,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// An explicit `null` clears the field, so the required-field check rejects it.
fn patch_value(field: Option<Option<String>>) -> Option<String> {
    field.map(Option::unwrap_or_default)
}

/// GET /api/v1/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let posts = posts.into_iter().map(to_dto).collect();

    Ok(HttpResponse::Ok().json(PostListResponse::new(posts)))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(&path).await?;

    Ok(HttpResponse::Ok().json(PostEnvelope { post: to_dto(post) }))
}

/// POST /api/v1/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .posts
        .create(NewPost {
            title: req.title,
            content: req.content,
            author: req.author,
        })
        .await?;

    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(PostEnvelope { post: to_dto(post) }))
}

/// PATCH /api/v1/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .posts
        .update(
            &path,
            PostChanges {
                title: patch_value(req.title),
                content: patch_value(req.content),
                author: patch_value(req.author),
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(PostEnvelope { post: to_dto(post) }))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete(&path).await?;

    tracing::info!(post_id = %path, "Post deleted");

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}
