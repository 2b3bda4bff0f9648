//! Typed client for the Video Jungle API.
//!
//! This module wraps the remote REST surface the adapter consumes: video
//! files (list, get, create-from-URL, search) and projects (get, create,
//! render an edit). The remote service owns all state; the client performs
//! no retries and keeps no cache.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;
use vj_mcp_common::config::Config;
use vj_mcp_common::error::Error;

use crate::edit::EditEnvelope;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Upload method for videos fetched by the remote service from a URL.
pub const UPLOAD_METHOD_URL: &str = "url";

/// A video file owned by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoFile {
    /// Remote identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// User provided description
    #[serde(default)]
    pub description: String,
}

/// A project grouping edits on the remote service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Remote identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Project description
    #[serde(default)]
    pub description: String,
}

/// Name and view URL of a matched video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSummary {
    /// Display name
    pub name: String,
    /// URL to view the video
    #[serde(default)]
    pub url: String,
}

/// One hit from a video search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSearchResult {
    /// The matched video
    pub video: VideoSummary,
    /// Identifier of the matched video file
    pub video_id: String,
    /// Scene change timestamps detected by the remote service
    #[serde(default)]
    pub scene_changes: Vec<Value>,
    /// Generated manuscript/script for the video
    #[serde(default)]
    pub script: String,
}

/// A rendered edit returned by the remote render call.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderedEdit {
    /// Identifier of the rendered edit
    pub id: String,
}

#[derive(Debug, Serialize)]
struct CreateVideoFileRequest<'a> {
    name: &'a str,
    filename: &'a str,
    upload_method: &'a str,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateProjectRequest<'a> {
    name: &'a str,
    description: &'a str,
}

/// Client for the Video Jungle API.
#[derive(Debug, Clone)]
pub struct VideoJungleClient {
    http: reqwest::Client,
    config: Config,
}

impl VideoJungleClient {
    /// Create a new client for the configured API base.
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// List every video file on the remote service.
    pub async fn list_video_files(&self) -> Result<Vec<VideoFile>, Error> {
        self.get_json("video-file").await
    }

    /// Fetch a single video file by id.
    pub async fn get_video_file(&self, id: &str) -> Result<VideoFile, Error> {
        self.get_json(&format!("video-file/{id}")).await
    }

    /// Create a video file the remote service downloads from a URL.
    pub async fn create_video_file(
        &self,
        name: &str,
        filename: &str,
        upload_method: &str,
    ) -> Result<VideoFile, Error> {
        let request = CreateVideoFileRequest {
            name,
            filename,
            upload_method,
        };
        self.post_json("video-file", &request).await
    }

    /// Search video files by free-text query.
    pub async fn search_video_files(&self, query: &str) -> Result<Vec<VideoSearchResult>, Error> {
        let request = SearchRequest { query };
        self.post_json("video-file/search", &request).await
    }

    /// Fetch a project by id.
    pub async fn get_project(&self, id: &str) -> Result<Project, Error> {
        self.get_json(&format!("projects/{id}")).await
    }

    /// Create a new project.
    pub async fn create_project(&self, name: &str, description: &str) -> Result<Project, Error> {
        let request = CreateProjectRequest { name, description };
        self.post_json("projects", &request).await
    }

    /// Submit an edit envelope for rendering within a project.
    pub async fn render_edit(
        &self,
        project_id: &str,
        edit: &EditEnvelope,
    ) -> Result<RenderedEdit, Error> {
        self.post_json(&format!("projects/{project_id}/render-edit"), edit)
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let endpoint = self.config.endpoint(path);
        debug!(endpoint = %endpoint, "GET");

        let response = self
            .http
            .get(&endpoint)
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(|e| Error::api(&endpoint, 0, format!("Request failed: {}", e)))?;

        Self::decode(&endpoint, response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let endpoint = self.config.endpoint(path);
        debug!(endpoint = %endpoint, "POST");

        let response = self
            .http
            .post(&endpoint)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::api(&endpoint, 0, format!("Request failed: {}", e)))?;

        Self::decode(&endpoint, response).await
    }

    async fn decode<T: DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T, Error> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::api(endpoint, status.as_u16(), body));
        }

        response.json().await.map_err(|e| {
            Error::api(
                endpoint,
                status.as_u16(),
                format!("Failed to parse response: {}", e),
            )
        })
    }
}
