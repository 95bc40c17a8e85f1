//! # Stream Compressor
//!
//! DEFLATE in zlib framing (RFC 1950) driven through the low-level `flate2`
//! engines rather than a one-shot helper, so the amount of memory held per
//! call is bounded by one fixed-size buffer no matter how large the payload
//! is. The zlib header check and Adler-32 trailer make a corrupted stream fail
//! to decompress instead of inflating to different bytes.
//!
//! Every call goes through the same lifecycle:
//!
//! ```text
//! open      engine state + fixed buffer        (StreamInitFailed)
//!   │
//! pump      feed pending source, drain buffer  (StreamProcessingFailed)
//!   │       finalize once source is consumed,
//!   │       keep going until StreamEnd
//!   │
//! close     verify engine accounting, release  (StreamTeardownFailed)
//! ```
//!
//! A single engine call only fills one buffer's worth of output. Returning
//! after the first call truncates anything larger than the buffer, so `pump`
//! keeps iterating until the engine itself reports the end of the stream.

use crate::error::CodecError;
use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};
use log::{debug, trace};
use std::fmt;

pub const DEFAULT_BUFFER_SIZE: usize = 4096;
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;
const MAX_COMPRESSION_LEVEL: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamOperation {
    Compress,
    Decompress,
}

impl fmt::Display for StreamOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamOperation::Compress => write!(f, "compress"),
            StreamOperation::Decompress => write!(f, "decompress"),
        }
    }
}

/// Common surface of the two `flate2` engines.
trait DeflateEngine {
    fn step(&mut self, input: &[u8], output: &mut [u8], finish: bool) -> Result<Status, String>;
    fn total_in(&self) -> u64;
    fn total_out(&self) -> u64;
}

impl DeflateEngine for Compress {
    fn step(&mut self, input: &[u8], output: &mut [u8], finish: bool) -> Result<Status, String> {
        let flush = if finish {
            FlushCompress::Finish
        } else {
            FlushCompress::None
        };
        self.compress(input, output, flush)
            .map_err(|e| e.to_string())
    }

    fn total_in(&self) -> u64 {
        Compress::total_in(self)
    }

    fn total_out(&self) -> u64 {
        Compress::total_out(self)
    }
}

impl DeflateEngine for Decompress {
    fn step(&mut self, input: &[u8], output: &mut [u8], finish: bool) -> Result<Status, String> {
        let flush = if finish {
            FlushDecompress::Finish
        } else {
            FlushDecompress::None
        };
        self.decompress(input, output, flush)
            .map_err(|e| e.to_string())
    }

    fn total_in(&self) -> u64 {
        Decompress::total_in(self)
    }

    fn total_out(&self) -> u64 {
        Decompress::total_out(self)
    }
}

/// One engine plus the buffer it drains into. Lives for a single call.
struct StreamSession<E> {
    operation: StreamOperation,
    engine: E,
    buffer: Vec<u8>,
}

impl<E: DeflateEngine> StreamSession<E> {
    fn open(operation: StreamOperation, engine: E, buffer_size: usize) -> Result<Self, CodecError> {
        if buffer_size == 0 {
            return Err(CodecError::StreamInitFailed {
                operation,
                reason: "intermediate buffer size must be non-zero".to_string(),
            });
        }
        Ok(Self {
            operation,
            engine,
            buffer: vec![0; buffer_size],
        })
    }

    fn pump(&mut self, source: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut output = Vec::new();
        let mut finishing = false;

        loop {
            let consumed = self.engine.total_in() as usize;
            let pending = source.get(consumed..).unwrap_or_default();
            if !finishing && pending.is_empty() {
                finishing = true;
                trace!(
                    "event=stream_finalize module=stream op={} consumed={}",
                    self.operation,
                    consumed
                );
            }

            let in_before = self.engine.total_in();
            let out_before = self.engine.total_out();
            let status = self
                .engine
                .step(pending, &mut self.buffer, finishing)
                .map_err(|reason| self.processing_failure(reason))?;

            let produced = (self.engine.total_out() - out_before) as usize;
            output.extend_from_slice(&self.buffer[..produced]);

            if status == Status::StreamEnd {
                return Ok(output);
            }
            if produced == 0 && self.engine.total_in() == in_before {
                return Err(self.processing_failure(format!(
                    "no progress before end of stream ({:?} after {} input bytes)",
                    status, in_before
                )));
            }
        }
    }

    /// Release the engine and buffer. `produced` is `Some` only when `pump`
    /// succeeded, in which case the engine's totals must agree with it.
    fn close(self, source_len: usize, produced: Option<usize>) -> Result<(), CodecError> {
        let Self {
            operation,
            engine,
            buffer,
        } = self;
        drop(buffer);

        let outcome = match produced {
            Some(_) if engine.total_in() != source_len as u64 => {
                Err(CodecError::StreamTeardownFailed {
                    operation,
                    reason: format!(
                        "{} of {} input bytes left unconsumed",
                        source_len as u64 - engine.total_in().min(source_len as u64),
                        source_len
                    ),
                })
            }
            Some(len) if engine.total_out() != len as u64 => {
                Err(CodecError::StreamTeardownFailed {
                    operation,
                    reason: format!(
                        "engine reports {} output bytes, collected {}",
                        engine.total_out(),
                        len
                    ),
                })
            }
            _ => Ok(()),
        };
        drop(engine);
        outcome
    }

    fn processing_failure(&self, reason: impl Into<String>) -> CodecError {
        CodecError::StreamProcessingFailed {
            operation: self.operation,
            reason: reason.into(),
        }
    }
}

fn run<E: DeflateEngine>(
    operation: StreamOperation,
    engine: E,
    buffer_size: usize,
    source: &[u8],
) -> Result<Vec<u8>, CodecError> {
    let mut session = StreamSession::open(operation, engine, buffer_size)?;
    let outcome = session.pump(source);
    let teardown = session.close(source.len(), outcome.as_ref().ok().map(Vec::len));

    let output = outcome?;
    teardown?;
    debug!(
        "event=stream_done module=stream op={} in={} out={}",
        operation,
        source.len(),
        output.len()
    );
    Ok(output)
}

/// Chunked zlib-framed DEFLATE compressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamCompressor {
    level: u32,
    buffer_size: usize,
}

impl Default for StreamCompressor {
    fn default() -> Self {
        Self {
            level: DEFAULT_COMPRESSION_LEVEL,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl StreamCompressor {
    /// Settings are checked when a stream is opened, not here.
    pub fn new(level: u32, buffer_size: usize) -> Self {
        Self { level, buffer_size }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        if self.level > MAX_COMPRESSION_LEVEL {
            return Err(CodecError::StreamInitFailed {
                operation: StreamOperation::Compress,
                reason: format!(
                    "compression level {} is outside 0..={}",
                    self.level, MAX_COMPRESSION_LEVEL
                ),
            });
        }
        let engine = Compress::new(Compression::new(self.level), true);
        run(StreamOperation::Compress, engine, self.buffer_size, input)
    }

    pub fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        let engine = Decompress::new(true);
        run(StreamOperation::Decompress, engine, self.buffer_size, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Printable but poorly compressible text.
    fn noisy_text(len: usize) -> Vec<u8> {
        let mut state: u32 = 0x9E37_79B9;
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                b' ' + (state % 95) as u8
            })
            .collect()
    }

    #[test]
    fn test_round_trip_small() {
        let c = StreamCompressor::default();
        let packed = c.compress(b"12=5|34=2.5").unwrap();
        assert_eq!(c.decompress(&packed).unwrap(), b"12=5|34=2.5");
    }

    #[test]
    fn test_round_trip_empty() {
        let c = StreamCompressor::default();
        let packed = c.compress(b"").unwrap();
        assert!(!packed.is_empty());
        assert_eq!(c.decompress(&packed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_output_spanning_many_buffers_is_not_truncated() {
        let c = StreamCompressor::new(6, 64);
        let input = noisy_text(32 * 1024);
        let packed = c.compress(&input).unwrap();
        assert!(packed.len() > 64 * 100);
        assert_eq!(c.decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_default_buffer_drains_several_times() {
        let c = StreamCompressor::default();
        let input = noisy_text(64 * 1024);
        let packed = c.compress(&input).unwrap();
        assert!(packed.len() > 4 * DEFAULT_BUFFER_SIZE);
        assert_eq!(c.decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_highly_compressible_input_expands_across_buffers() {
        let c = StreamCompressor::new(9, 32);
        let input = vec![b'a'; 100_000];
        let packed = c.compress(&input).unwrap();
        assert!(packed.len() < input.len() / 10);
        assert_eq!(c.decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_zero_buffer_fails_init() {
        let c = StreamCompressor::new(6, 0);
        assert!(matches!(
            c.compress(b"x"),
            Err(CodecError::StreamInitFailed {
                operation: StreamOperation::Compress,
                ..
            })
        ));
        assert!(matches!(
            c.decompress(b"x"),
            Err(CodecError::StreamInitFailed {
                operation: StreamOperation::Decompress,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_level_fails_init() {
        let c = StreamCompressor::new(12, DEFAULT_BUFFER_SIZE);
        assert!(matches!(
            c.compress(b"x"),
            Err(CodecError::StreamInitFailed { .. })
        ));
    }

    #[test]
    fn test_garbage_fails_processing() {
        let c = StreamCompressor::default();
        // "no" is not a valid zlib header
        let err = c.decompress(b"not deflate at all").unwrap_err();
        assert!(matches!(
            err,
            CodecError::StreamProcessingFailed {
                operation: StreamOperation::Decompress,
                ..
            }
        ));
    }

    #[test]
    fn test_truncated_stream_fails_processing() {
        let c = StreamCompressor::default();
        let packed = c.compress(&noisy_text(2048)).unwrap();
        let err = c.decompress(&packed[..packed.len() / 2]).unwrap_err();
        assert!(matches!(err, CodecError::StreamProcessingFailed { .. }));
    }

    #[test]
    fn test_empty_input_is_not_a_stream() {
        let c = StreamCompressor::default();
        assert!(c.decompress(b"").is_err());
    }

    #[test]
    fn test_trailing_bytes_fail_teardown() {
        let c = StreamCompressor::default();
        let mut packed = c.compress(b"session").unwrap();
        packed.extend_from_slice(b"extra");
        let err = c.decompress(&packed).unwrap_err();
        assert!(matches!(
            err,
            CodecError::StreamTeardownFailed {
                operation: StreamOperation::Decompress,
                ..
            }
        ));
    }

    #[test]
    fn test_stream_carries_zlib_header() {
        let packed = StreamCompressor::default().compress(b"session").unwrap();
        assert_eq!(packed[0] & 0x0F, 8);
        assert_eq!((u16::from(packed[0]) << 8 | u16::from(packed[1])) % 31, 0);
    }

    #[test]
    fn test_checksum_mismatch_fails_processing() {
        let c = StreamCompressor::default();
        let mut packed = c.compress(b"12=5|34=2.5").unwrap();
        let last = packed.len() - 1;
        packed[last] ^= 0x01;
        assert!(matches!(
            c.decompress(&packed),
            Err(CodecError::StreamProcessingFailed { .. })
        ));
    }

    #[test]
    fn test_raw_deflate_without_header_is_rejected() {
        let c = StreamCompressor::default();
        let packed = c.compress(b"12=5|34=2.5").unwrap();
        assert!(c.decompress(&packed[2..]).is_err());
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(StreamOperation::Compress.to_string(), "compress");
        assert_eq!(StreamOperation::Decompress.to_string(), "decompress");
    }
}
