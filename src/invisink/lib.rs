//! # Invisink Architecture
//!
//! Invisink hides structured data inside a plain-text note field using
//! characters that render as nothing. A host application that can only store
//! a visible string (a calendar event's notes, say) keeps showing the user
//! the same text while a full training-session payload rides along in it.
//!
//! It is obfuscation, not encryption: anyone who knows the alphabet can read
//! the payload. Pipelines that normalize Unicode, fold case or trim
//! whitespace may destroy it; reads then fall back safely instead of
//! returning wrong data.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Argument parsing, stdin/stdout, colors, exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) + Commands (commands/*.rs)                    │
//! │  - Return CmdResult values, never print                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Container (container.rs, session.rs, model.rs, legacy.rs)  │
//! │  - "#exercises:" marker, current vs legacy note formats     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Codec (codec.rs → stream.rs, nibble.rs → alphabet.rs)      │
//! │  - DEFLATE, then two invisible symbols per byte             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything below the CLI is synchronous, allocation-bounded and free of
//! shared mutable state; a [`codec::Codec`] is `Copy` and can be used from
//! any thread.
//!
//! ## Quick Example
//!
//! ```
//! use invisink::codec::Codec;
//! use invisink::container::{read_note, write_note, NoteContent};
//! use invisink::model::SessionPayload;
//!
//! let codec = Codec::default();
//! let payload = SessionPayload::new([(12, 5.0), (34, 2.5)].into_iter().collect());
//!
//! let note = write_note(&payload, &codec).unwrap();
//! assert!(note.starts_with("#exercises:"));
//! assert_eq!(read_note(&note, &codec), NoteContent::Current(payload));
//! ```
//!
//! ## Module Overview
//!
//! - [`alphabet`]: the sixteen invisible symbols
//! - [`nibble`]: bytes to symbol pairs and back
//! - [`stream`]: chunked zlib-framed DEFLATE through a fixed buffer
//! - [`codec`]: `encode`/`decode` facade
//! - [`container`]: marker, note formats, legacy fallback
//! - [`legacy`]: the `id=duration|...` grammar
//! - [`model`]: payload types
//! - [`session`]: a note-bearing record using the container
//! - [`api`] and [`commands`]: operations for UIs
//! - [`config`], [`logging`], [`error`]

pub mod alphabet;
pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod container;
pub mod error;
pub mod legacy;
pub mod logging;
pub mod model;
pub mod nibble;
pub mod session;
pub mod stream;

pub use codec::{decode, encode, Codec};
pub use container::{read_note, write_note, NoteContent, MARKER};
pub use error::{CodecError, InvisinkError, Result, SymbolError};
