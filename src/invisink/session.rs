use crate::codec::Codec;
use crate::container::{read_note, write_note, NoteContent};
use crate::error::Result;
use crate::model::{ExerciseDurations, SessionPayload};
use serde::{Deserialize, Serialize};

/// A training session as the host sees it: a title and a free-text note
/// field. Structured data rides along invisibly inside `notes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub title: String,
    notes: Option<String>,
}

impl Session {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn content(&self, codec: &Codec) -> NoteContent {
        match &self.notes {
            Some(notes) => read_note(notes, codec),
            None => NoteContent::Empty,
        }
    }

    pub fn payload(&self, codec: &Codec) -> SessionPayload {
        self.content(codec).into_payload()
    }

    pub fn exercise_durations(&self, codec: &Codec) -> ExerciseDurations {
        self.payload(codec).exercises
    }

    /// Replace the hidden payload. On error the existing note is left as it
    /// was.
    pub fn set_payload(&mut self, payload: &SessionPayload, codec: &Codec) -> Result<()> {
        let note = write_note(payload, codec)?;
        self.notes = Some(note);
        Ok(())
    }

    /// Update the durations, keeping whatever detail log is already stored.
    pub fn set_exercise_durations(
        &mut self,
        exercises: ExerciseDurations,
        codec: &Codec,
    ) -> Result<()> {
        let mut payload = self.payload(codec);
        payload.exercises = exercises;
        self.set_payload(&payload, codec)
    }

    pub fn clear_payload(&mut self) {
        self.notes = None;
    }
}
