// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Captured HTTP pair snapshot consumed by the export encoders.

use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body bytes captured for one side of an exchange.
///
/// `payload` may be `None` even when the owning pair reports a nonzero
/// length, when body capture was skipped upstream.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CapturedMessage {
    /// Captured body bytes. Skipped during serialization; the capture side
    /// persists bodies separately when configured to do so.
    #[serde(skip)]
    pub payload: Option<Bytes>,
}

impl CapturedMessage {
    /// Message with a retained payload.
    pub fn with_payload(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: Some(payload.into()),
        }
    }
}

/// One matched HTTP request/response capture.
///
/// Pairs are owned and mutated by the capture side; the export encoders
/// treat them as immutable snapshots for the duration of one export call
/// and never reorder or deduplicate them.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HttpPair {
    pub id: String,

    /// Display-formatted capture time, as shown in the host table.
    pub timestamp: String,

    /// Epoch milliseconds; the authoritative time for HAR `startedDateTime`.
    pub created_at_millis: i64,

    pub method: String,
    pub host: String,

    /// Full URL including scheme, host, path, and query.
    pub url: String,

    /// Response status as received; may be empty or non-numeric while the
    /// response is outstanding.
    pub status_code: String,

    pub request_length: u64,
    pub response_length: u64,

    /// Free-text annotation, e.g. the owning process.
    pub process_info: String,

    /// True once both request and response are fully captured.
    pub complete: bool,

    pub request: Option<CapturedMessage>,
    pub response: Option<CapturedMessage>,
}

impl HttpPair {
    /// Create a minimal pair skeleton for tests or construction sites.
    pub fn new(method: String, host: String, url: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            created_at_millis: now.timestamp_millis(),
            method,
            host,
            url,
            status_code: String::new(),
            request_length: 0,
            response_length: 0,
            process_info: String::new(),
            complete: false,
            request: None,
            response: None,
        }
    }

    /// Request payload bytes, when both the request and its body were captured.
    pub fn request_payload(&self) -> Option<&Bytes> {
        self.request.as_ref().and_then(|m| m.payload.as_ref())
    }

    /// Response payload bytes, when both the response and its body were captured.
    pub fn response_payload(&self) -> Option<&Bytes> {
        self.response.as_ref().and_then(|m| m.payload.as_ref())
    }
}
