//! WebVTT transcript parser.
//!
//! Parses the WebVTT subset produced by transcription tools:
//!
//! ```text
//! WEBVTT
//!
//! 1
//! 00:00:01.000 --> 00:00:02.500
//! Hello there.
//!
//! 2
//! 00:00:03.000 --> 00:00:04.000
//! How are you?
//! ```
//!
//! The parser is line-oriented rather than block-oriented. It keeps a
//! "current timestamp" slot: a timing line fills the slot, and every
//! following accepted text line becomes one cue bound to that slot.
//! The slot is not cleared after a text line, so consecutive payload
//! lines each become their own cue sharing the timing.
//!
//! Discarded without producing cues: the leading `WEBVTT` header,
//! digit-only cue index lines, blank lines, and any text line that
//! either has no active timestamp or does not start with an alphabetic
//! character (artifacts and metadata).

use crate::transcript::error::TranscriptError;
use crate::transcript::timestamp::{parse_timestamp, split_range};
use crate::transcript::types::Cue;

/// Parse WebVTT content into cues.
///
/// # Arguments
/// * `content` - The raw file content as a string.
///
/// # Returns
/// * `Ok(Vec<Cue>)` - Cues in file order. May be empty; emptiness is
///   the caller's concern.
/// * `Err(TranscriptError)` - If any timestamp token fails the grammar.
pub fn parse_vtt(content: &str) -> Result<Vec<Cue>, TranscriptError> {
    // Normalize line endings
    let content = content.replace("\r\n", "\n").replace('\r', "\n");

    let mut timings: Vec<(u64, u64)> = Vec::new();
    let mut texts: Vec<String> = Vec::new();

    let mut current: Option<(u64, u64)> = None;
    let mut header_allowed = true;

    for (idx, raw) in content.lines().enumerate() {
        let line_num = idx + 1;
        let line = raw.trim();

        // Blank lines separate blocks and carry nothing.
        if line.is_empty() {
            continue;
        }

        // The format header may only appear before any other content.
        if header_allowed {
            header_allowed = false;
            if line.trim_start_matches('\u{feff}') == "WEBVTT" {
                continue;
            }
        }

        // Any line containing the separator is a timing line; a
        // malformed one is an error, never cue text.
        if line.contains("-->") {
            let (start_tok, end_tok) = split_range(line)
                .ok_or_else(|| TranscriptError::invalid_timestamp(line_num, line))?;
            let onset = parse_timestamp(start_tok)
                .ok_or_else(|| TranscriptError::invalid_timestamp(line_num, start_tok))?;
            let offset = parse_timestamp(end_tok)
                .ok_or_else(|| TranscriptError::invalid_timestamp(line_num, end_tok))?;
            current = Some((onset, offset));
            continue;
        }

        // Standalone cue index
        if is_cue_index(line) {
            continue;
        }

        // Candidate text line: needs an active timestamp and must start
        // with an alphabetic character.
        if let Some(timing) = current {
            if starts_alphabetic(line) {
                timings.push(timing);
                texts.push(line.to_string());
            }
        }
    }

    align(timings, texts)
}

/// Zip parallel timing and text sequences into cues, in file order.
///
/// The sequences are built in lockstep by `parse_vtt`, so a length
/// mismatch can only come from a parser bug; it is still validated
/// before zipping rather than silently truncated.
fn align(timings: Vec<(u64, u64)>, texts: Vec<String>) -> Result<Vec<Cue>, TranscriptError> {
    if timings.len() != texts.len() {
        return Err(TranscriptError::misaligned(timings.len(), texts.len()));
    }
    Ok(timings
        .into_iter()
        .zip(texts)
        .map(|((onset, offset), text)| Cue::new(onset, offset, text))
        .collect())
}

/// A line consisting solely of ASCII digits is a cue index.
fn is_cue_index(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

/// Accepted cue text must start with an alphabetic character.
fn starts_alphabetic(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_alphabetic())
}
