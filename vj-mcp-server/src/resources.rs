//! Resource catalog helpers for the Video Jungle MCP server.
//!
//! Every remote video file is addressable as `vj://video-file/{id}`. This
//! module owns the URI scheme: building canonical URIs and parsing ids back
//! out of them.

use vj_mcp_common::error::Error;

use crate::client::VideoFile;

/// Registered URI scheme.
pub const URI_SCHEME: &str = "vj";

/// Fixed path prefix for video file resources.
pub const VIDEO_FILE_PREFIX: &str = "video-file/";

/// MIME type advertised for video file resources.
pub const VIDEO_MIME_TYPE: &str = "video/mp4";

/// Build the canonical resource URI for a video file id.
pub fn video_uri(id: &str) -> String {
    format!("{URI_SCHEME}://{VIDEO_FILE_PREFIX}{id}")
}

/// Extract the video file id from a resource URI.
///
/// The `video-file/` prefix is matched exactly. A character-set trim would
/// also eat leading id characters that happen to fall inside the prefix set
/// (an id like `file-1` would come back as `1`), so ids survive here intact.
///
/// # Errors
/// - `UnsupportedScheme` when the scheme is not `vj`
/// - `NotFound` when no id can be extracted from the path
pub fn parse_video_uri(uri: &str) -> Result<String, Error> {
    let (scheme, rest) = uri
        .split_once("://")
        .ok_or_else(|| Error::unsupported_scheme(uri))?;

    if scheme != URI_SCHEME {
        return Err(Error::unsupported_scheme(scheme));
    }

    let id = rest.strip_prefix(VIDEO_FILE_PREFIX).unwrap_or_default();
    if id.is_empty() {
        return Err(Error::not_found(format!("video for URI {uri}")));
    }

    Ok(id.to_string())
}

/// Display name for a listed video resource.
pub fn resource_name(video: &VideoFile) -> String {
    format!("Video Jungle Video: {}", video.name)
}

/// Description for a listed video resource.
pub fn resource_description(video: &VideoFile) -> String {
    format!("User provided description: {}", video.description)
}
