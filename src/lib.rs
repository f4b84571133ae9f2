// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Export of captured HTTP request/response pairs to portable artifacts.
//!
//! This library converts a finite, already-assembled list of pairs into a
//! HAR 1.2 JSON document or a CSV table. Capture, storage, and UI concerns
//! belong to the host application; this crate is a pure transformation
//! invoked with the pairs, a column selection, and an output sink.

pub mod columns;
pub mod export;
pub mod har;
pub mod pair;
pub mod tabular;
pub mod test_helpers;
pub mod text;
