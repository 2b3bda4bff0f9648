//! Typed cut transforms and the fixed render envelope.
//!
//! The envelope shape is a wire contract with the Video Jungle render
//! endpoint: key names and the fixed header values must be reproduced
//! exactly. Cut start/end times pass through verbatim; the remote accepts
//! both numeric seconds and timecode strings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope format version accepted by the render endpoint.
pub const EDIT_VERSION: &str = "1.0";

/// Container format of the rendered output.
pub const OUTPUT_FORMAT: &str = "mp4";

/// Default output resolution (portrait 1080p).
pub const DEFAULT_RESOLUTION: &str = "1080x1920";

/// Output frame rate.
pub const OUTPUT_FPS: f64 = 30.0;

/// Filename the remote service gives the rendered file.
pub const OUTPUT_FILENAME: &str = "output_video.mp4";

/// Audio level applied to every cut.
pub const DEFAULT_AUDIO_LEVEL: &str = "0.5";

/// Type tag the render endpoint expects on every cut.
pub const CUT_TYPE_VIDEOFILE: &str = "videofile";

/// One cut of a multi-video edit, as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SourceCut {
    /// Video file the cut comes from.
    pub video_id: String,
    /// Start of the cut within the source video (seconds or timecode).
    pub video_start_time: Value,
    /// End of the cut within the source video (seconds or timecode).
    pub video_end_time: Value,
}

/// One cut of a single-video edit; the source video id is supplied once for
/// the whole edit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ClipCut {
    /// Start of the cut (seconds or timecode).
    pub start_time: Value,
    /// End of the cut (seconds or timecode).
    pub end_time: Value,
}

/// Audio level annotation carried by every reshaped cut. Its window mirrors
/// the cut's own bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioLevel {
    /// Gain as a decimal string
    pub audio_level: String,
    /// Window start, equal to the cut's start time
    pub start_time: Value,
    /// Window end, equal to the cut's end time
    pub end_time: Value,
}

/// A cut reshaped into the form the render endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderCut {
    /// Source video file id
    pub video_id: String,
    /// Start within the source video
    pub video_start_time: Value,
    /// End within the source video
    pub video_end_time: Value,
    /// Always `"videofile"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Singleton audio level annotation derived from the cut bounds
    pub audio_levels: Vec<AudioLevel>,
}

impl RenderCut {
    /// Reshape a multi-video cut: all caller fields are preserved, the type
    /// tag is added, and the audio window is derived from the cut's own
    /// start/end.
    pub fn from_source(cut: &SourceCut) -> Self {
        Self {
            video_id: cut.video_id.clone(),
            video_start_time: cut.video_start_time.clone(),
            video_end_time: cut.video_end_time.clone(),
            kind: CUT_TYPE_VIDEOFILE.to_string(),
            audio_levels: vec![AudioLevel {
                audio_level: DEFAULT_AUDIO_LEVEL.to_string(),
                start_time: cut.video_start_time.clone(),
                end_time: cut.video_end_time.clone(),
            }],
        }
    }

    /// Reshape a single-video cut: inject the shared video id and rename the
    /// bare `start_time`/`end_time` into the source-video form. The audio
    /// window is keyed off the renamed times.
    pub fn from_clip(cut: &ClipCut, video_id: &str) -> Self {
        Self {
            video_id: video_id.to_string(),
            video_start_time: cut.start_time.clone(),
            video_end_time: cut.end_time.clone(),
            kind: CUT_TYPE_VIDEOFILE.to_string(),
            audio_levels: vec![AudioLevel {
                audio_level: DEFAULT_AUDIO_LEVEL.to_string(),
                start_time: cut.start_time.clone(),
                end_time: cut.end_time.clone(),
            }],
        }
    }
}

/// The fixed-shape payload sent to the render endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditEnvelope {
    /// Always "1.0"
    pub video_edit_version: String,
    /// Always "mp4"
    pub video_output_format: String,
    /// Output resolution, e.g. "1080x1920"
    pub video_output_resolution: String,
    /// Always 30.0
    pub video_output_fps: f64,
    /// Always "output_video.mp4"
    pub video_output_filename: String,
    /// Always empty
    pub audio_overlay: Vec<Value>,
    /// Reshaped cuts, in caller order
    pub video_series_sequential: Vec<RenderCut>,
}

impl EditEnvelope {
    /// Wrap reshaped cuts in the fixed envelope header.
    pub fn new(resolution: impl Into<String>, cuts: Vec<RenderCut>) -> Self {
        Self {
            video_edit_version: EDIT_VERSION.to_string(),
            video_output_format: OUTPUT_FORMAT.to_string(),
            video_output_resolution: resolution.into(),
            video_output_fps: OUTPUT_FPS,
            video_output_filename: OUTPUT_FILENAME.to_string(),
            audio_overlay: Vec::new(),
            video_series_sequential: cuts,
        }
    }
}
