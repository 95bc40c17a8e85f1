use crate::alphabet::is_symbol;
use crate::commands::{CmdMessage, CmdResult};
use crate::container::{has_marker, MARKER};
use crate::error::Result;
use unicode_width::UnicodeWidthStr;

/// What a note is made of, without decoding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectReport {
    pub has_marker: bool,
    pub total_chars: usize,
    pub total_bytes: usize,
    /// Characters from the codec alphabet
    pub hidden_symbols: usize,
    /// Format characters that are not part of the alphabet
    pub foreign_invisible: usize,
    pub visible_chars: usize,
    /// Terminal columns the note occupies when rendered
    pub display_width: usize,
}

impl InspectReport {
    pub fn from_note(note: &str) -> Self {
        let mut hidden_symbols = 0;
        let mut foreign_invisible = 0;
        let mut visible_chars = 0;
        for c in note.chars() {
            if is_symbol(c) {
                hidden_symbols += 1;
            } else if is_format_char(c) {
                foreign_invisible += 1;
            } else {
                visible_chars += 1;
            }
        }

        Self {
            has_marker: has_marker(note),
            total_chars: note.chars().count(),
            total_bytes: note.len(),
            hidden_symbols,
            foreign_invisible,
            visible_chars,
            display_width: note.width(),
        }
    }

    /// Bytes the hidden symbols spell out, if they pair up.
    pub fn hidden_bytes(&self) -> Option<usize> {
        (self.hidden_symbols % 2 == 0).then_some(self.hidden_symbols / 2)
    }
}

/// Zero-width and bidi formatting characters outside the alphabet.
fn is_format_char(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{206F}'
            | '\u{FEFF}'
    )
}

pub fn run(note: &str) -> Result<CmdResult> {
    let report = InspectReport::from_note(note);
    let mut result = CmdResult::default();

    if !report.has_marker {
        result.add_message(CmdMessage::info(format!(
            "No '{}' marker; note is read as legacy or free text",
            MARKER
        )));
    }
    if report.hidden_bytes().is_none() {
        result.add_message(CmdMessage::warning(
            "Odd number of hidden symbols; payload cannot decode",
        ));
    }
    if report.foreign_invisible > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} invisible character(s) outside the codec alphabet",
            report.foreign_invisible
        )));
    }

    Ok(result.with_report(report))
}
