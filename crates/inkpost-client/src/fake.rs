//! In-process `PostApi` used by the client tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use inkpost_shared::dto::{CreatePostRequest, PostDto, UpdatePostRequest};

use crate::api::{ApiError, PostApi};

#[derive(Default)]
pub struct FakeApi {
    posts: Mutex<Vec<PostDto>>,
    next_id: AtomicU32,
    offline: AtomicBool,
}

fn not_found(id: &str) -> ApiError {
    ApiError::Status {
        status: 404,
        msg: Some(format!("No post with id: {id}")),
    }
}

fn missing(field: &str, value: &Option<String>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => None,
        _ => Some(format!("Please provide {field}")),
    }
}

impl FakeApi {
    fn tick(&self) -> (String, chrono::DateTime<Utc>) {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        (format!("post-{n}"), base + Duration::minutes(i64::from(n)))
    }

    fn online(&self) -> Result<(), ApiError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(ApiError::Transport("connection refused".into()))
        } else {
            Ok(())
        }
    }

    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn seed(&self, title: &str, content: &str) -> PostDto {
        let (id, at) = self.tick();
        let post = PostDto {
            id,
            title: title.to_string(),
            content: content.to_string(),
            author: "Seeder".to_string(),
            created_at: at,
            updated_at: at,
        };
        self.posts.lock().unwrap().insert(0, post.clone());
        post
    }

    pub fn contains(&self, id: &str) -> bool {
        self.posts.lock().unwrap().iter().any(|p| p.id == id)
    }
}

#[async_trait]
impl PostApi for FakeApi {
    async fn list_posts(&self) -> Result<Vec<PostDto>, ApiError> {
        self.online()?;
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn get_post(&self, id: &str) -> Result<PostDto, ApiError> {
        self.online()?;
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create_post(&self, req: &CreatePostRequest) -> Result<PostDto, ApiError> {
        self.online()?;
        let errors: Vec<String> = [
            missing("title", &req.title),
            missing("content", &req.content),
            missing("author", &req.author),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !errors.is_empty() {
            return Err(ApiError::Status {
                status: 400,
                msg: Some(errors.join(", ")),
            });
        }

        let (id, at) = self.tick();
        let post = PostDto {
            id,
            title: req.title.clone().unwrap_or_default(),
            content: req.content.clone().unwrap_or_default(),
            author: req.author.clone().unwrap_or_default(),
            created_at: at,
            updated_at: at,
        };
        self.posts.lock().unwrap().insert(0, post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: &str, req: &UpdatePostRequest) -> Result<PostDto, ApiError> {
        self.online()?;
        let (_, at) = self.tick();
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(id))?;

        if let Some(title) = &req.title {
            post.title = title.clone().unwrap_or_default();
        }
        if let Some(content) = &req.content {
            post.content = content.clone().unwrap_or_default();
        }
        if let Some(author) = &req.author {
            post.author = author.clone().unwrap_or_default();
        }
        post.updated_at = at;
        Ok(post.clone())
    }

    async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        self.online()?;
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
