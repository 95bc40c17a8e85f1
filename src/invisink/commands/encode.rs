use crate::codec::Codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(codec: &Codec, plaintext: &str) -> Result<CmdResult> {
    let hidden = codec.try_encode(plaintext)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Encoded {} bytes into {} invisible characters",
        plaintext.len(),
        hidden.chars().count()
    )));
    Ok(result.with_output(hidden))
}
