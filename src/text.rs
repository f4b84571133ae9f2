// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Text/binary classification of captured payload bytes.

/// Number of leading bytes examined when classifying a payload.
const SAMPLE_LIMIT: usize = 200;

/// Minimum printable ratio (exclusive) for a payload to count as text.
const TEXT_RATIO: f64 = 0.8;

/// Return true when the payload should be embedded as text rather than
/// base64.
///
/// Examines at most the first [`SAMPLE_LIMIT`] bytes and counts printable
/// ASCII (`0x20..=0x7E`) plus `\n`, `\r`, `\t`. Text iff the printable
/// ratio exceeds [`TEXT_RATIO`]. An empty payload is text. This is pure
/// byte arithmetic, never a decode attempt, and cannot fail.
pub fn is_mostly_text(data: &[u8]) -> bool {
    let sample = &data[..data.len().min(SAMPLE_LIMIT)];
    if sample.is_empty() {
        return true;
    }
    let printable = sample
        .iter()
        .filter(|&&b| matches!(b, 0x20..=0x7e | b'\n' | b'\r' | b'\t'))
        .count();
    printable as f64 / sample.len() as f64 > TEXT_RATIO
}
