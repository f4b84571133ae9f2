// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Shared test utilities to reduce duplication across test modules.

use crate::pair::{CapturedMessage, HttpPair};

/// Create a fully captured pair with small text bodies on both sides.
pub fn make_test_pair() -> HttpPair {
    let mut pair = HttpPair::new(
        "GET".to_string(),
        "example.com".to_string(),
        "http://example.com/index.html".to_string(),
    );
    pair.timestamp = "2024-01-01 00:00:00".to_string();
    pair.created_at_millis = 1_704_067_200_000; // 2024-01-01T00:00:00Z
    pair.status_code = "200".to_string();
    pair.request_length = 5;
    pair.response_length = 5;
    pair.process_info = "curl (pid 4242)".to_string();
    pair.complete = true;
    pair.request = Some(CapturedMessage::with_payload("hello"));
    pair.response = Some(CapturedMessage::with_payload("world"));
    pair
}

/// Create a pair still waiting for its response: a request length was
/// recorded but no body was retained, status is empty, and `complete` is
/// false.
pub fn make_incomplete_pair() -> HttpPair {
    let mut pair = HttpPair::new(
        "POST".to_string(),
        "example.com".to_string(),
        "http://example.com/submit".to_string(),
    );
    pair.timestamp = "2024-01-01 00:00:01".to_string();
    pair.created_at_millis = 1_704_067_201_000;
    pair.request_length = 12;
    pair.request = Some(CapturedMessage::default());
    pair
}

/// Render pairs with the tabular encoder and return the UTF-8 output.
pub fn render_csv(pairs: &[HttpPair], columns: &[String]) -> anyhow::Result<String> {
    let mut out = Vec::new();
    crate::tabular::write_csv(&mut out, pairs, columns)?;
    Ok(String::from_utf8(out)?)
}
