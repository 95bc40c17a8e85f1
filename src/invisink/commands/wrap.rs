use crate::codec::Codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::container::write_note;
use crate::error::{InvisinkError, Result};
use crate::legacy::parse_entry;
use crate::model::{DetailLog, ExerciseDurations, SessionPayload};

/// Build a current-format note from `id=duration` arguments and an optional
/// JSON detail log.
///
/// Unlike note reads, arguments are parsed strictly: a typo here would
/// otherwise vanish silently from the written note.
pub fn run<I: AsRef<str>>(
    codec: &Codec,
    entries: &[I],
    details_json: Option<&str>,
) -> Result<CmdResult> {
    let mut exercises = ExerciseDurations::new();
    for entry in entries {
        let entry = entry.as_ref();
        let (id, duration) = parse_entry(entry).ok_or_else(|| {
            InvisinkError::Api(format!(
                "Invalid entry '{}': expected <exercise-id>=<duration>",
                entry
            ))
        })?;
        if !duration.is_finite() {
            return Err(InvisinkError::Api(format!(
                "Invalid entry '{}': duration must be a finite number",
                entry
            )));
        }
        exercises.insert(id, duration);
    }

    let mut payload = SessionPayload::new(exercises);
    if let Some(json) = details_json {
        let details: DetailLog = serde_json::from_str(json)?;
        payload = payload.with_details(details);
    }

    let note = write_note(&payload, codec)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Wrapped {} exercise(s){}",
        payload.exercises.len(),
        if payload.details.is_some() {
            " with detail log"
        } else {
            ""
        }
    )));
    Ok(result.with_output(note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{read_note, NoteContent, MARKER};

    #[test]
    fn test_wrap_entries() {
        let codec = Codec::default();
        let result = run(&codec, &["12=5.0", "34=2.5"], None).unwrap();
        let note = result.output.unwrap();
        assert!(note.starts_with(MARKER));

        let expected: ExerciseDurations = [(12, 5.0), (34, 2.5)].into_iter().collect();
        assert_eq!(
            read_note(&note, &codec),
            NoteContent::Current(SessionPayload::new(expected))
        );
    }

    #[test]
    fn test_wrap_with_details() {
        let codec = Codec::default();
        let details = r#"{"entries":[{"exercise_id":4,"sets":[{"reps":10,"weight":20.0}]}]}"#;
        let note = run(&codec, &["4=15"], Some(details))
            .unwrap()
            .output
            .unwrap();

        let payload = read_note(&note, &codec).into_payload();
        let log = payload.details.unwrap();
        assert_eq!(log.entries[0].exercise_id, 4);
        assert_eq!(log.entries[0].sets[0].reps, Some(10));
    }

    #[test]
    fn test_wrap_rejects_malformed_entry() {
        let err = run(&Codec::default(), &["12=5", "oops"], None).unwrap_err();
        assert!(matches!(err, InvisinkError::Api(_)));
    }

    #[test]
    fn test_wrap_rejects_non_finite_duration() {
        let err = run(&Codec::default(), &["1=inf"], None).unwrap_err();
        assert!(matches!(err, InvisinkError::Api(_)));
    }

    #[test]
    fn test_wrap_rejects_bad_details() {
        let err = run(&Codec::default(), &["1=1"], Some("{not json")).unwrap_err();
        assert!(matches!(err, InvisinkError::Serialization(_)));
    }

    #[test]
    fn test_wrap_nothing_is_valid() {
        let codec = Codec::default();
        let none: [&str; 0] = [];
        let note = run(&codec, &none, None).unwrap().output.unwrap();
        assert_eq!(
            read_note(&note, &codec),
            NoteContent::Current(SessionPayload::default())
        );
    }
}
