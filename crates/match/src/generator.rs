//! The delta matcher (component C5): scans input against a basis signature
//! index and emits a [`DeltaScript`].

use std::io::Read;
use std::num::NonZeroUsize;

use checksums::RollingChecksum;
use logging::debug_log;

use crate::config::MatcherConfig;
use crate::error::MatchError;
use crate::hash_index::DeltaSignatureIndex;
use crate::token::{DeltaScript, DeltaToken};

const DEFAULT_READ_BUFFER_LEN: usize = 64 * 1024;

/// Builder for a single [`generate_delta`] run.
///
/// Mirrors the read-buffer-length knob upstream rsync exposes on its I/O
/// layer; the buffer length only affects how input bytes are pulled off the
/// `Read`, never the matching result, which operates over the complete byte
/// stream regardless of how it was chunked in.
#[derive(Clone, Copy, Debug)]
pub struct DeltaGenerator {
    buffer_len: NonZeroUsize,
    config: MatcherConfig,
}

impl DeltaGenerator {
    /// A generator using the default read buffer length and matcher config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the read buffer length used to pull bytes off the input
    /// stream. Does not affect the resulting [`DeltaScript`].
    #[must_use]
    pub fn with_buffer_len(mut self, buffer_len: usize) -> Self {
        if let Some(len) = NonZeroUsize::new(buffer_len) {
            self.buffer_len = len;
        }
        self
    }

    /// Overrides the matcher config (literal chunk size, resource limits).
    #[must_use]
    pub fn with_config(mut self, config: MatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Scans `input` against `index`, producing a [`DeltaScript`] that
    /// reconstructs it from the basis file `index` was built from.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Io`] if reading `input` fails, or
    /// [`MatchError::ResourceLimit`] if the configured literal-byte cap is
    /// exceeded.
    pub fn generate(&self, mut input: impl Read, index: &DeltaSignatureIndex) -> Result<DeltaScript, MatchError> {
        let mut data = Vec::new();
        let mut buf = vec![0u8; self.buffer_len.get()];
        loop {
            let read = input.read(&mut buf)?;
            if read == 0 {
                break;
            }
            data.extend_from_slice(&buf[..read]);
        }
        scan(&data, index, &self.config)
    }
}

impl Default for DeltaGenerator {
    fn default() -> Self {
        Self {
            buffer_len: NonZeroUsize::new(DEFAULT_READ_BUFFER_LEN).expect("default buffer length is non-zero"),
            config: MatcherConfig::default(),
        }
    }
}

/// Scans `input` against `index` using default generator settings.
///
/// # Errors
///
/// See [`DeltaGenerator::generate`].
pub fn generate_delta(input: impl Read, index: &DeltaSignatureIndex) -> Result<DeltaScript, MatchError> {
    DeltaGenerator::new().generate(input, index)
}

fn scan(data: &[u8], index: &DeltaSignatureIndex, config: &MatcherConfig) -> Result<DeltaScript, MatchError> {
    let block_length = index.block_length();
    let mut tokens = Vec::new();
    let mut total_bytes = 0u64;
    let mut literal_bytes = 0u64;
    let mut literal_run: Vec<u8> = Vec::new();
    let chunk_limit = config.literal_chunk_size().get();

    let flush_literal = |run: &mut Vec<u8>, tokens: &mut Vec<DeltaToken>| {
        if !run.is_empty() {
            tokens.push(DeltaToken::Literal(std::mem::take(run)));
        }
    };

    if block_length == 0 {
        literal_run.extend_from_slice(data);
        total_bytes += data.len() as u64;
        literal_bytes += data.len() as u64;
        check_limit(config, literal_bytes)?;
        flush_literal(&mut literal_run, &mut tokens);
        return Ok(DeltaScript::new(tokens, total_bytes, literal_bytes));
    }

    if data.len() < block_length {
        // Basis shorter than one full block: the whole input is itself a
        // short window, matched against the index's lone short-length entry.
        if !data.is_empty() {
            let weak = checksums::RollingDigest::from_bytes(data).value();
            if let Some((block_index, len)) = index.match_window(weak, data, None)? {
                debug_log!(Deltasum, 2, "matched short block {block_index} covering whole input, len {len}");
                tokens.push(DeltaToken::Copy { index: block_index, len });
                total_bytes += len as u64;
                return Ok(DeltaScript::new(tokens, total_bytes, literal_bytes));
            }
        }
        literal_run.extend_from_slice(data);
        total_bytes += data.len() as u64;
        literal_bytes += data.len() as u64;
        check_limit(config, literal_bytes)?;
        flush_literal(&mut literal_run, &mut tokens);
        return Ok(DeltaScript::new(tokens, total_bytes, literal_bytes));
    }

    let mut pos = 0usize;
    let mut want_i: Option<u64> = None;
    let mut checksum = RollingChecksum::from_digest(checksums::RollingDigest::from_bytes(&data[..block_length]));

    loop {
        let window_end = pos + block_length;
        if window_end > data.len() {
            break;
        }
        let window = &data[pos..window_end];
        let weak = checksum.value();

        debug_log!(Hash, 3, "probe weak={weak:#010x} pos={pos}");

        match index.match_window(weak, window, want_i)? {
            Some((block_index, len)) => {
                debug_log!(Deltasum, 2, "matched block {block_index} at pos {pos} len {len}");

                flush_literal(&mut literal_run, &mut tokens);
                tokens.push(DeltaToken::Copy { index: block_index, len });
                total_bytes += len as u64;
                pos += len;
                want_i = Some(block_index + 1);

                if pos + block_length <= data.len() {
                    checksum.reset();
                    checksum.update(&data[pos..pos + block_length]);
                }
            }
            None => {
                want_i = None;
                literal_run.push(data[pos]);
                literal_bytes += 1;
                total_bytes += 1;
                if literal_run.len() >= chunk_limit {
                    check_limit(config, literal_bytes)?;
                    flush_literal(&mut literal_run, &mut tokens);
                }
                pos += 1;
                if pos + block_length <= data.len() {
                    checksum
                        .roll(data[pos - 1], data[pos + block_length - 1])
                        .expect("window length unchanged by roll");
                } else if pos < data.len() {
                    checksum.reset();
                    let remaining_len = (data.len() - pos).min(block_length);
                    checksum.update(&data[pos..pos + remaining_len]);
                }
            }
        }
    }

    if pos < data.len() {
        let tail = &data[pos..];
        let weak = checksums::RollingDigest::from_bytes(tail).value();

        debug_log!(Hash, 3, "probe short tail weak={weak:#010x} pos={pos} len={}", tail.len());

        match index.match_window(weak, tail, want_i)? {
            Some((block_index, len)) => {
                debug_log!(Deltasum, 2, "matched short tail block {block_index} at pos {pos} len {len}");
                flush_literal(&mut literal_run, &mut tokens);
                tokens.push(DeltaToken::Copy { index: block_index, len });
                total_bytes += len as u64;
            }
            None => {
                literal_run.extend_from_slice(tail);
                literal_bytes += tail.len() as u64;
                total_bytes += tail.len() as u64;
                check_limit(config, literal_bytes)?;
            }
        }
    }
    flush_literal(&mut literal_run, &mut tokens);

    Ok(DeltaScript::new(tokens, total_bytes, literal_bytes))
}

fn check_limit(config: &MatcherConfig, literal_bytes: u64) -> Result<(), MatchError> {
    if let Some(max) = config.max_literal_bytes() {
        if literal_bytes > max {
            return Err(MatchError::ResourceLimit(format!(
                "literal bytes {literal_bytes} exceed configured limit {max}"
            )));
        }
    }
    Ok(())
}
