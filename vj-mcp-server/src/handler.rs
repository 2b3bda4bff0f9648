//! Tool dispatch for the Video Jungle MCP server.
//!
//! `EditorHandler` owns the API client and implements the four tools:
//! argument validation, cut reshaping, project resolution, and response
//! formatting. Remote state only ever changes through the client; the
//! handler itself is stateless across calls.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, info, instrument};
use vj_mcp_common::config::Config;
use vj_mcp_common::error::Error;

use crate::client::{Project, UPLOAD_METHOD_URL, VideoJungleClient, VideoSearchResult};
use crate::edit::{ClipCut, DEFAULT_RESOLUTION, EditEnvelope, RenderCut, SourceCut};
use crate::resources;

/// Description given to projects this server creates on the fly.
pub const GENERATED_PROJECT_DESCRIPTION: &str = "Claude generated project";

/// Arguments for the `add-video` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddVideoParams {
    /// Display name for the uploaded video.
    pub name: String,
    /// URL the remote service downloads the video from.
    pub url: String,
}

/// Arguments for the `search-videos` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchVideosParams {
    /// Free-text search query.
    pub query: String,
}

/// Arguments for the `generate-edit-from-videos` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GenerateEditParams {
    /// Ordered cuts making up the edit.
    pub edit: Vec<SourceCut>,
    /// Project to render into; created when it does not exist.
    pub project_id: String,
    /// Output resolution, e.g. "1080x1920".
    #[serde(default)]
    pub resolution: Option<String>,
}

/// Arguments for the `generate-edit-from-single-video` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SingleVideoEditParams {
    /// Ordered cuts making up the edit, all from the same video.
    pub edit: Vec<ClipCut>,
    /// Project to render into; created when it does not exist.
    pub project_id: String,
    /// Video file every cut comes from.
    pub video_id: String,
    /// Output resolution, e.g. "1080x1920".
    #[serde(default)]
    pub resolution: Option<String>,
}

/// Outcome of an edit generation, carrying everything the response text
/// needs.
#[derive(Debug)]
pub struct EditOutcome {
    /// The resolved (or newly created) project
    pub project: Project,
    /// Identifier of the rendered edit
    pub edit_id: String,
    /// The reshaped cuts that were submitted
    pub cuts: Vec<RenderCut>,
    /// Whether the project was created by this call
    pub created_project: bool,
}

impl EditOutcome {
    /// Render the user-facing confirmation, mentioning project creation when
    /// it happened. Both wordings carry the edit id and the reshaped cuts.
    pub fn into_message(self) -> String {
        let raw = serde_json::to_string(&self.cuts).unwrap_or_else(|_| "[]".to_string());
        if self.created_project {
            format!(
                "Created new project {} and created edit {} with raw edit info: {}",
                self.project.name, self.edit_id, raw
            )
        } else {
            format!(
                "Generated edit in existing project {} with id: {} and raw edit info: {}",
                self.project.name, self.edit_id, raw
            )
        }
    }
}

/// Tool dispatcher for the Video Jungle MCP server.
#[derive(Debug, Clone)]
pub struct EditorHandler {
    client: VideoJungleClient,
}

impl EditorHandler {
    /// Create a new handler talking to the configured API.
    pub fn new(config: Config) -> Self {
        Self {
            client: VideoJungleClient::new(config),
        }
    }

    /// The underlying API client.
    pub fn client(&self) -> &VideoJungleClient {
        &self.client
    }

    /// Upload a video from a URL.
    ///
    /// # Errors
    /// Returns `MissingField` when `name` or `url` is empty, or the remote
    /// failure otherwise.
    #[instrument(level = "info", name = "add_video", skip_all, fields(name = %params.name))]
    pub async fn add_video(&self, params: AddVideoParams) -> Result<String, Error> {
        if params.name.trim().is_empty() {
            return Err(Error::missing_field("name"));
        }
        if params.url.trim().is_empty() {
            return Err(Error::missing_field("url"));
        }

        self.client
            .create_video_file(&params.name, &params.url, UPLOAD_METHOD_URL)
            .await?;

        info!(name = %params.name, "Video added");
        Ok(format!(
            "Added video '{}' with url: {}",
            params.name, params.url
        ))
    }

    /// Search videos and format one line group per hit, in remote order.
    #[instrument(level = "info", name = "search_videos", skip_all, fields(query = %params.query))]
    pub async fn search_videos(&self, params: SearchVideosParams) -> Result<String, Error> {
        if params.query.trim().is_empty() {
            return Err(Error::missing_field("query"));
        }

        let hits = self.client.search_video_files(&params.query).await?;
        info!(hits = hits.len(), "Search completed");
        Ok(format_search_results(&hits))
    }

    /// Generate an edit that cuts across multiple videos.
    #[instrument(level = "info", name = "generate_edit_from_videos", skip_all, fields(project_id = %params.project_id))]
    pub async fn generate_edit_from_videos(
        &self,
        params: GenerateEditParams,
    ) -> Result<EditOutcome, Error> {
        if params.edit.is_empty() {
            return Err(Error::missing_field("edit"));
        }
        if params.project_id.trim().is_empty() {
            return Err(Error::missing_field("project_id"));
        }

        let resolution = resolve_resolution(params.resolution);
        let cuts: Vec<RenderCut> = params.edit.iter().map(RenderCut::from_source).collect();
        self.render(&params.project_id, resolution, cuts).await
    }

    /// Generate an edit whose cuts all come from one video.
    #[instrument(level = "info", name = "generate_edit_from_single_video", skip_all, fields(project_id = %params.project_id, video_id = %params.video_id))]
    pub async fn generate_edit_from_single_video(
        &self,
        params: SingleVideoEditParams,
    ) -> Result<EditOutcome, Error> {
        if params.edit.is_empty() {
            return Err(Error::missing_field("edit"));
        }
        if params.project_id.trim().is_empty() {
            return Err(Error::missing_field("project_id"));
        }
        if params.video_id.trim().is_empty() {
            return Err(Error::missing_field("video_id"));
        }

        let resolution = resolve_resolution(params.resolution);
        let cuts: Vec<RenderCut> = params
            .edit
            .iter()
            .map(|cut| RenderCut::from_clip(cut, &params.video_id))
            .collect();
        self.render(&params.project_id, resolution, cuts).await
    }

    async fn render(
        &self,
        project_id: &str,
        resolution: String,
        cuts: Vec<RenderCut>,
    ) -> Result<EditOutcome, Error> {
        let envelope = EditEnvelope::new(resolution, cuts);
        let (project, created_project) = self.resolve_project(project_id).await?;

        debug!(project = %project.id, cuts = envelope.video_series_sequential.len(), "Submitting edit for rendering");
        let rendered = self.client.render_edit(&project.id, &envelope).await?;

        info!(edit_id = %rendered.id, created_project, "Edit rendered");
        Ok(EditOutcome {
            project,
            edit_id: rendered.id,
            cuts: envelope.video_series_sequential,
            created_project,
        })
    }

    /// Resolve a project id, creating the project when the lookup fails.
    ///
    /// Any lookup failure counts as "does not exist". Two concurrent callers
    /// with the same new id can both miss and both create; the remote service
    /// offers no idempotency key, so the race is left as-is.
    async fn resolve_project(&self, project_id: &str) -> Result<(Project, bool), Error> {
        match self.client.get_project(project_id).await {
            Ok(project) => Ok((project, false)),
            Err(err) => {
                info!(project_id = %project_id, error = %err, "Project lookup failed, creating it");
                let project = self
                    .client
                    .create_project(project_id, GENERATED_PROJECT_DESCRIPTION)
                    .await?;
                Ok((project, true))
            }
        }
    }
}

fn resolve_resolution(resolution: Option<String>) -> String {
    resolution
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_RESOLUTION.to_string())
}

/// One line group per hit, in the order the remote returned them.
fn format_search_results(hits: &[VideoSearchResult]) -> String {
    let mut out = String::from("Videos:");
    for hit in hits {
        let scenes =
            serde_json::to_string(&hit.scene_changes).unwrap_or_else(|_| "[]".to_string());
        out.push_str(&format!(
            "\n- {} at {}\n  - URL to view video: {}\n  - Scene changes in video: {}\n  - Video manuscript: {}",
            hit.video.name,
            resources::video_uri(&hit.video_id),
            hit.video.url,
            scenes,
            hit.script
        ));
    }
    out
}
