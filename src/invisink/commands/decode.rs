use crate::codec::Codec;
use crate::commands::CmdResult;
use crate::container::MARKER;
use crate::error::Result;

/// Decode invisible text. A leading marker is tolerated so a whole note can
/// be pasted in.
pub fn run(codec: &Codec, hidden: &str) -> Result<CmdResult> {
    let hidden = hidden.strip_prefix(MARKER).unwrap_or(hidden);
    let plaintext = codec.try_decode(hidden)?;
    Ok(CmdResult::default().with_output(plaintext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CodecError, InvisinkError};

    #[test]
    fn test_decode_round_trip() {
        let codec = Codec::default();
        let hidden = codec.encode("1=2|3=4").unwrap();
        let result = run(&codec, &hidden).unwrap();
        assert_eq!(result.output.as_deref(), Some("1=2|3=4"));
    }

    #[test]
    fn test_decode_accepts_marker() {
        let codec = Codec::default();
        let note = format!("{}{}", MARKER, codec.encode("abc").unwrap());
        assert_eq!(run(&codec, &note).unwrap().output.as_deref(), Some("abc"));
    }

    #[test]
    fn test_decode_visible_text_fails() {
        let err = run(&Codec::default(), "plain words").unwrap_err();
        assert!(matches!(
            err,
            InvisinkError::Codec(CodecError::InvalidScalarSequence(_))
        ));
    }
}
