//! # Codec Facade
//!
//! Composes the three lower layers into the two operations callers need:
//!
//! ```text
//! encode:  text ─UTF-8─▶ bytes ─deflate─▶ compressed ─pack─▶ invisible text
//! decode:  invisible text ─unpack─▶ compressed ─inflate─▶ bytes ─UTF-8─▶ text
//! ```
//!
//! `encode`/`decode` answer only "did it work"; `try_encode`/`try_decode`
//! keep the [`CodecError`] so the failing stage stays visible.

use crate::config::InvisinkConfig;
use crate::error::CodecError;
use crate::nibble::{pack_bytes, unpack_symbols};
use crate::stream::StreamCompressor;
use log::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    compressor: StreamCompressor,
}

impl Codec {
    pub fn new(compressor: StreamCompressor) -> Self {
        Self { compressor }
    }

    pub fn from_config(config: &InvisinkConfig) -> Self {
        Self::new(StreamCompressor::new(
            config.compression_level,
            config.buffer_size,
        ))
    }

    pub fn compressor(&self) -> &StreamCompressor {
        &self.compressor
    }

    pub fn try_encode(&self, plaintext: &str) -> Result<String, CodecError> {
        let compressed = self.compressor.compress(plaintext.as_bytes())?;
        Ok(pack_bytes(&compressed))
    }

    pub fn try_decode(&self, hidden: &str) -> Result<String, CodecError> {
        let compressed = unpack_symbols(hidden)?;
        let bytes = self.compressor.decompress(&compressed)?;
        Ok(String::from_utf8(bytes)?)
    }

    pub fn encode(&self, plaintext: &str) -> Option<String> {
        self.try_encode(plaintext)
            .map_err(|e| warn!("event=encode_failed module=codec error=\"{}\"", e))
            .ok()
    }

    /// Decode failures are expected on notes that were never encoded, so they
    /// log at debug level only.
    pub fn decode(&self, hidden: &str) -> Option<String> {
        self.try_decode(hidden)
            .map_err(|e| debug!("event=decode_failed module=codec error=\"{}\"", e))
            .ok()
    }
}

/// Encode with default settings.
pub fn encode(plaintext: &str) -> Option<String> {
    Codec::default().encode(plaintext)
}

/// Decode with default settings.
pub fn decode(hidden: &str) -> Option<String> {
    Codec::default().decode(hidden)
}
