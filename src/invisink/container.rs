//! # Container Protocol
//!
//! How a session payload lives inside a note field.
//!
//! ```text
//! current:  "#exercises:" ++ codec(json payload)     (renders as "#exercises:")
//! legacy:   ["#exercises:"] ++ "12=5|34=2.5"         (visible to the user)
//! ```
//!
//! Reads try the formats in order and settle on a [`NoteContent`] variant:
//!
//! 1. Marker present and the remainder decodes: [`NoteContent::Current`].
//! 2. Otherwise the remainder (or the whole note) parses as legacy entries:
//!    [`NoteContent::Legacy`].
//! 3. Otherwise: [`NoteContent::Empty`].
//!
//! A current-format note whose hidden part was damaged drops to step 2 and
//! usually ends up `Empty`. That path logs a warning so it can be told apart
//! from notes that simply never carried a payload.
//!
//! Writes always produce the current format and return an error instead of
//! a partial note when encoding fails.

use crate::codec::Codec;
use crate::error::{CodecError, InvisinkError, Result};
use crate::model::{ExerciseDurations, SessionPayload};
use log::{debug, warn};

/// Visible prefix that tags a note as carrying a payload.
pub const MARKER: &str = "#exercises:";

#[derive(Debug, Clone, PartialEq)]
pub enum NoteContent {
    Current(SessionPayload),
    Legacy(ExerciseDurations),
    Empty,
}

impl NoteContent {
    pub fn format_name(&self) -> &'static str {
        match self {
            NoteContent::Current(_) => "current",
            NoteContent::Legacy(_) => "legacy",
            NoteContent::Empty => "empty",
        }
    }

    pub fn exercises(&self) -> Option<&ExerciseDurations> {
        match self {
            NoteContent::Current(payload) => Some(&payload.exercises),
            NoteContent::Legacy(durations) => Some(durations),
            NoteContent::Empty => None,
        }
    }

    /// Legacy notes become a payload without details; empty notes become the
    /// default payload.
    pub fn into_payload(self) -> SessionPayload {
        match self {
            NoteContent::Current(payload) => payload,
            NoteContent::Legacy(durations) => SessionPayload::new(durations),
            NoteContent::Empty => SessionPayload::default(),
        }
    }
}

/// Whether the note starts with [`MARKER`].
pub fn has_marker(note: &str) -> bool {
    note.starts_with(MARKER)
}

pub fn read_note(note: &str, codec: &Codec) -> NoteContent {
    let remainder = match note.strip_prefix(MARKER) {
        Some(rest) => {
            match decode_current(rest, codec) {
                Ok(payload) => return NoteContent::Current(payload),
                Err(e) => warn!(
                    "event=note_decode_fallback module=container symbols={} error=\"{}\"",
                    rest.chars().count(),
                    e
                ),
            }
            rest
        }
        None => note,
    };

    let durations = ExerciseDurations::parse(remainder);
    if durations.is_empty() {
        NoteContent::Empty
    } else {
        debug!(
            "event=note_read module=container format=legacy entries={}",
            durations.len()
        );
        NoteContent::Legacy(durations)
    }
}

fn decode_current(hidden: &str, codec: &Codec) -> Result<SessionPayload> {
    let text = codec.try_decode(hidden)?;
    SessionPayload::from_text(&text)
}

pub fn write_note(payload: &SessionPayload, codec: &Codec) -> Result<String> {
    let text = payload.to_text()?;
    let hidden = codec.try_encode(&text).map_err(|e| {
        warn!("event=note_write_failed module=container error=\"{}\"", e);
        InvisinkError::Codec(e)
    })?;
    debug!(
        "event=note_written module=container plain_bytes={} symbols={}",
        text.len(),
        hidden.chars().count()
    );
    Ok(format!("{}{}", MARKER, hidden))
}

/// The codec error behind a failed current-format read, if there is one.
pub fn diagnose(note: &str, codec: &Codec) -> Option<CodecError> {
    let rest = note.strip_prefix(MARKER)?;
    codec.try_decode(rest).err()
}
