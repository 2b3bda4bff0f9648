//! MCP Server implementation for the Video Jungle adapter.
//!
//! This module provides the MCP server handler that exposes:
//! - Tools: `add-video`, `search-videos`, `generate-edit-from-videos`,
//!   `generate-edit-from-single-video`
//! - Resources: every remote video file, under `vj://video-file/{id}`
//! - Prompts: `summarize-notes`

use crate::handler::{
    AddVideoParams, EditorHandler, GenerateEditParams, SearchVideosParams, SingleVideoEditParams,
};
use crate::prompts::{self, NoteStore};
use crate::resources;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        ListResourcesResult, ListToolsResult, Prompt, PromptArgument, PromptMessage,
        PromptMessageRole, ReadResourceResult, ResourceContents, ServerCapabilities, ServerInfo,
        Tool,
    },
};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, info, warn};
use vj_mcp_common::config::Config;
use vj_mcp_common::error::Error;

/// MCP server for the Video Jungle API.
#[derive(Clone)]
pub struct VideoJungleServer {
    /// Tool dispatcher and API client
    handler: Arc<EditorHandler>,
    /// Read-only notes backing the summarize-notes prompt
    notes: Arc<NoteStore>,
}

impl VideoJungleServer {
    /// Create a new server with an empty note store.
    pub fn new(config: Config) -> Self {
        Self::with_notes(config, NoteStore::default())
    }

    /// Create a new server with an explicit note store.
    pub fn with_notes(config: Config, notes: NoteStore) -> Self {
        Self {
            handler: Arc::new(EditorHandler::new(config)),
            notes: Arc::new(notes),
        }
    }

    /// The tool dispatcher backing this server.
    pub fn handler(&self) -> &EditorHandler {
        &self.handler
    }
}

/// Deserialize tool-call arguments into a typed parameter record.
///
/// An absent or empty argument object is `MissingArguments`; anything the
/// declared schema rejects surfaces as `MissingField` before any remote
/// call is made.
fn parse_params<T: DeserializeOwned>(
    arguments: Option<serde_json::Map<String, serde_json::Value>>,
) -> Result<T, Error> {
    let args = match arguments {
        Some(args) if !args.is_empty() => args,
        _ => return Err(Error::MissingArguments),
    };

    serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| Error::MissingField(e.to_string()))
}

/// Map adapter errors onto MCP error responses.
fn to_mcp_error(err: Error) -> McpError {
    match &err {
        Error::NotFound(_) => McpError::resource_not_found(err.to_string(), None),
        _ if err.is_caller_fault() => McpError::invalid_params(err.to_string(), None),
        _ => McpError::internal_error(err.to_string(), None),
    }
}

/// Generate the JSON schema for a tool parameter record.
fn input_schema<T: schemars::JsonSchema>() -> Arc<serde_json::Map<String, serde_json::Value>> {
    let schema = schemars::schema_for!(T);
    let schema_value = serde_json::to_value(&schema).unwrap_or_default();
    match schema_value {
        serde_json::Value::Object(map) => Arc::new(map),
        _ => Arc::new(serde_json::Map::new()),
    }
}

/// The static tool catalog.
fn tool_catalog() -> Vec<Tool> {
    vec![
        Tool {
            name: Cow::Borrowed("add-video"),
            description: Some(Cow::Borrowed(
                "Upload a video from a URL. The remote service downloads and \
                 analyzes it; the new video then appears in the resource list.",
            )),
            input_schema: input_schema::<AddVideoParams>(),
            annotations: None,
            icons: None,
            meta: None,
            output_schema: None,
            title: None,
        },
        Tool {
            name: Cow::Borrowed("search-videos"),
            description: Some(Cow::Borrowed(
                "Search videos by free-text query. Returns one entry per match \
                 with its resource URI, view URL, scene changes, and manuscript.",
            )),
            input_schema: input_schema::<SearchVideosParams>(),
            annotations: None,
            icons: None,
            meta: None,
            output_schema: None,
            title: None,
        },
        Tool {
            name: Cow::Borrowed("generate-edit-from-videos"),
            description: Some(Cow::Borrowed(
                "Generate a rendered edit from cuts across multiple videos. \
                 The project is created when it does not exist yet.",
            )),
            input_schema: input_schema::<GenerateEditParams>(),
            annotations: None,
            icons: None,
            meta: None,
            output_schema: None,
            title: None,
        },
        Tool {
            name: Cow::Borrowed("generate-edit-from-single-video"),
            description: Some(Cow::Borrowed(
                "Generate a rendered edit whose cuts all come from one video. \
                 The project is created when it does not exist yet.",
            )),
            input_schema: input_schema::<SingleVideoEditParams>(),
            annotations: None,
            icons: None,
            meta: None,
            output_schema: None,
            title: None,
        },
    ]
}

/// The static prompt catalog.
fn prompt_catalog() -> Vec<Prompt> {
    vec![Prompt {
        name: prompts::SUMMARIZE_NOTES.to_string(),
        title: None,
        description: Some(prompts::SUMMARIZE_NOTES_DESCRIPTION.to_string()),
        arguments: Some(vec![PromptArgument {
            name: "style".to_string(),
            title: None,
            description: Some(prompts::STYLE_ARGUMENT_DESCRIPTION.to_string()),
            required: Some(false),
        }]),
        icons: None,
        meta: None,
    }]
}

impl ServerHandler for VideoJungleServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Video editing server backed by the Video Jungle API. \
                 Use add-video to upload from a URL, search-videos to find \
                 footage, and the generate-edit tools to render cuts into a \
                 project. Videos are browsable as vj://video-file/{id} \
                 resources."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _params: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move {
            Ok(ListToolsResult {
                tools: tool_catalog(),
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn call_tool(
        &self,
        params: rmcp::model::CallToolRequestParam,
        context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            debug!(tool = %params.name, "Tool call");
            match params.name.as_ref() {
                "add-video" => {
                    let tool_params: AddVideoParams =
                        parse_params(params.arguments).map_err(to_mcp_error)?;
                    let message = self
                        .handler
                        .add_video(tool_params)
                        .await
                        .map_err(to_mcp_error)?;

                    // The resource list grew; let the client refresh it.
                    if let Err(error) = context.peer.notify_resource_list_changed().await {
                        warn!(error = %error, "Failed to notify resource list change");
                    }

                    Ok(CallToolResult::success(vec![Content::text(message)]))
                }
                "search-videos" => {
                    let tool_params: SearchVideosParams =
                        parse_params(params.arguments).map_err(to_mcp_error)?;
                    let message = self
                        .handler
                        .search_videos(tool_params)
                        .await
                        .map_err(to_mcp_error)?;
                    Ok(CallToolResult::success(vec![Content::text(message)]))
                }
                "generate-edit-from-videos" => {
                    let tool_params: GenerateEditParams =
                        parse_params(params.arguments).map_err(to_mcp_error)?;
                    let outcome = self
                        .handler
                        .generate_edit_from_videos(tool_params)
                        .await
                        .map_err(to_mcp_error)?;
                    Ok(CallToolResult::success(vec![Content::text(
                        outcome.into_message(),
                    )]))
                }
                "generate-edit-from-single-video" => {
                    let tool_params: SingleVideoEditParams =
                        parse_params(params.arguments).map_err(to_mcp_error)?;
                    let outcome = self
                        .handler
                        .generate_edit_from_single_video(tool_params)
                        .await
                        .map_err(to_mcp_error)?;
                    Ok(CallToolResult::success(vec![Content::text(
                        outcome.into_message(),
                    )]))
                }
                other => Err(to_mcp_error(Error::unknown_tool(other))),
            }
        }
    }

    fn list_resources(
        &self,
        _params: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        async move {
            debug!("Listing video file resources");

            let videos = self
                .handler
                .client()
                .list_video_files()
                .await
                .map_err(to_mcp_error)?;

            info!(count = videos.len(), "Video files listed");

            let resources = videos
                .iter()
                .map(|video| rmcp::model::Resource {
                    raw: rmcp::model::RawResource {
                        uri: resources::video_uri(&video.id),
                        name: resources::resource_name(video),
                        title: None,
                        description: Some(resources::resource_description(video)),
                        mime_type: Some(resources::VIDEO_MIME_TYPE.to_string()),
                        size: None,
                        icons: None,
                        meta: None,
                    },
                    annotations: None,
                })
                .collect();

            Ok(ListResourcesResult {
                resources,
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn read_resource(
        &self,
        params: rmcp::model::ReadResourceRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ReadResourceResult, McpError>> + Send + '_ {
        async move {
            let uri = params.uri;
            debug!(uri = %uri, "Reading resource");

            let id = resources::parse_video_uri(&uri).map_err(to_mcp_error)?;
            let video = self
                .handler
                .client()
                .get_video_file(&id)
                .await
                .map_err(to_mcp_error)?;

            let content = serde_json::to_string(&video)
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;

            Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(content, uri)],
            })
        }
    }

    fn list_prompts(
        &self,
        _params: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListPromptsResult, McpError>> + Send + '_ {
        async move {
            Ok(ListPromptsResult {
                prompts: prompt_catalog(),
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn get_prompt(
        &self,
        params: GetPromptRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<GetPromptResult, McpError>> + Send + '_ {
        async move {
            let style = params
                .arguments
                .as_ref()
                .and_then(|args| args.get("style"))
                .and_then(|value| value.as_str());

            let rendered =
                prompts::render_prompt(&params.name, style, &self.notes).map_err(to_mcp_error)?;

            Ok(GetPromptResult {
                description: Some(rendered.description),
                messages: vec![PromptMessage::new_text(
                    PromptMessageRole::User,
                    rendered.text,
                )],
            })
        }
    }
}
