//! Prompt catalog for the Video Jungle MCP server.
//!
//! A single static prompt, `summarize-notes`, rendered from a read-only
//! note store handed to the server at startup.

use vj_mcp_common::error::Error;

/// Name of the note summary prompt.
pub const SUMMARIZE_NOTES: &str = "summarize-notes";

/// Catalog description of the note summary prompt.
pub const SUMMARIZE_NOTES_DESCRIPTION: &str = "Creates a summary of all notes";

/// Description of the optional `style` argument.
pub const STYLE_ARGUMENT_DESCRIPTION: &str = "Style of the summary (brief/detailed)";

/// A named note available to the prompt renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Note title
    pub name: String,
    /// Note body
    pub content: String,
}

impl Note {
    /// Create a note from any string-likes.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Ordered, read-only collection of notes fixed at startup.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Create a store over the given notes, preserving their order.
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Iterate notes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// Whether the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// A rendered prompt: catalog description plus the user-role message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    /// Result description
    pub description: String,
    /// Text of the single user-role message
    pub text: String,
}

/// Render a prompt by name.
///
/// `style == "detailed"` asks for extensive details; any other value (or
/// none) yields the brief form.
///
/// # Errors
/// Returns `UnknownPrompt` for any name other than `summarize-notes`.
pub fn render_prompt(
    name: &str,
    style: Option<&str>,
    notes: &NoteStore,
) -> Result<RenderedPrompt, Error> {
    if name != SUMMARIZE_NOTES {
        return Err(Error::unknown_prompt(name));
    }

    let detail = if style == Some("detailed") {
        " Give extensive details."
    } else {
        ""
    };

    let body = notes
        .iter()
        .map(|note| format!("- {}: {}", note.name, note.content))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(RenderedPrompt {
        description: "Summarize the current notes".to_string(),
        text: format!("Here are the current notes to summarize:{detail}\n\n{body}"),
    })
}
