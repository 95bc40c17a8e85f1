use crate::codec::Codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::container::{diagnose, has_marker, read_note, NoteContent};
use crate::error::Result;

pub fn run(codec: &Codec, note: &str) -> Result<CmdResult> {
    let content = read_note(note, codec);
    let mut result = CmdResult::default();

    match &content {
        NoteContent::Current(payload) => {
            result.add_message(CmdMessage::success(format!(
                "Hidden payload: {} exercise(s)",
                payload.exercises.len()
            )));
        }
        NoteContent::Legacy(durations) => {
            if let Some(err) = diagnose(note, codec) {
                result.add_message(CmdMessage::warning(format!(
                    "Hidden payload is damaged ({}); read visible entries instead",
                    err
                )));
            }
            result.add_message(CmdMessage::info(format!(
                "Legacy note: {} exercise(s)",
                durations.len()
            )));
        }
        NoteContent::Empty => {
            if has_marker(note) {
                result.add_message(CmdMessage::warning(
                    "Note is marked but its payload could not be read",
                ));
            } else {
                result.add_message(CmdMessage::info("Note carries no payload"));
            }
        }
    }

    Ok(result.with_content(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::container::{write_note, MARKER};
    use crate::model::SessionPayload;

    #[test]
    fn test_unwrap_current() {
        let codec = Codec::default();
        let payload = SessionPayload::new([(3, 9.0)].into_iter().collect());
        let note = write_note(&payload, &codec).unwrap();

        let result = run(&codec, &note).unwrap();
        assert_eq!(result.payload(), Some(payload));
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn test_unwrap_legacy() {
        let result = run(&Codec::default(), "#exercises:1=2").unwrap();
        assert_eq!(result.content.as_ref().unwrap().format_name(), "legacy");
        assert_eq!(result.payload().unwrap().exercises.get(1), Some(2.0));
    }

    #[test]
    fn test_unwrap_damaged_marker_warns() {
        let note = format!("{}\u{200B}", MARKER);
        let result = run(&Codec::default(), &note).unwrap();
        assert!(matches!(result.content, Some(NoteContent::Empty)));
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.payload(), None);
    }

    #[test]
    fn test_unwrap_plain_note() {
        let result = run(&Codec::default(), "just words").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }
}
