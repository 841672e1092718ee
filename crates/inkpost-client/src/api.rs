//! HTTP access to the posts API.

use async_trait::async_trait;
use inkpost_shared::ErrorResponse;
use inkpost_shared::dto::{
    CreatePostRequest, PostDto, PostEnvelope, PostListResponse, UpdatePostRequest,
};

use crate::config::ClientConfig;

/// Shown when the server gives no usable `msg`.
pub const FALLBACK_ERROR: &str = "Something went wrong";

/// Failure of a single API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {}", msg.as_deref().unwrap_or("no message"))]
    Status { status: u16, msg: Option<String> },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for the state store's `error` field.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { msg: Some(msg), .. } => msg.clone(),
            _ => FALLBACK_ERROR.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// The five post operations, as seen by the client.
#[async_trait]
pub trait PostApi: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<PostDto>, ApiError>;

    async fn get_post(&self, id: &str) -> Result<PostDto, ApiError>;

    async fn create_post(&self, req: &CreatePostRequest) -> Result<PostDto, ApiError>;

    async fn update_post(&self, id: &str, req: &UpdatePostRequest) -> Result<PostDto, ApiError>;

    async fn delete_post(&self, id: &str) -> Result<(), ApiError>;
}

/// `PostApi` over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpPostApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPostApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, &config.api_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn post_url(&self, id: &str) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }
}

/// Turn a non-success response into `ApiError::Status`, keeping the server's `msg`.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let msg = resp.json::<ErrorResponse>().await.ok().map(|body| body.msg);
    tracing::debug!(status = status.as_u16(), msg = ?msg, "API call failed");

    Err(ApiError::Status {
        status: status.as_u16(),
        msg,
    })
}

#[async_trait]
impl PostApi for HttpPostApi {
    async fn list_posts(&self) -> Result<Vec<PostDto>, ApiError> {
        let resp = self.client.get(self.posts_url()).send().await?;
        let body: PostListResponse = check(resp).await?.json().await?;
        Ok(body.posts)
    }

    async fn get_post(&self, id: &str) -> Result<PostDto, ApiError> {
        let resp = self.client.get(self.post_url(id)).send().await?;
        let body: PostEnvelope = check(resp).await?.json().await?;
        Ok(body.post)
    }

    async fn create_post(&self, req: &CreatePostRequest) -> Result<PostDto, ApiError> {
        let resp = self.client.post(self.posts_url()).json(req).send().await?;
        let body: PostEnvelope = check(resp).await?.json().await?;
        Ok(body.post)
    }

    async fn update_post(&self, id: &str, req: &UpdatePostRequest) -> Result<PostDto, ApiError> {
        let resp = self.client.patch(self.post_url(id)).json(req).send().await?;
        let body: PostEnvelope = check(resp).await?.json().await?;
        Ok(body.post)
    }

    async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        let resp = self.client.delete(self.post_url(id)).send().await?;
        check(resp).await?;
        Ok(())
    }
}
