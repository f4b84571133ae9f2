// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! HAR 1.2 document model and encoder.
//!
//! Only the fields the capture side reliably knows are populated: the
//! request carries a single synthesized `Host` header, header sizes are
//! `-1` (unknown, per HAR convention), and timings are zero.

use crate::pair::HttpPair;
use crate::text::is_mostly_text;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const HAR_VERSION: &str = "1.2";

const HTTP_VERSION: &str = "HTTP/1.1";
const OCTET_STREAM: &str = "application/octet-stream";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Har {
    pub log: Log,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Log {
    pub version: String,
    pub creator: Creator,
    pub entries: Vec<Entry>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Creator {
    pub name: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub started_date_time: String,
    pub time: u64,
    pub request: Request,
    pub response: Response,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub method: String,
    pub url: String,
    pub http_version: String,
    pub headers: Vec<Header>,
    pub headers_size: i64,
    pub body_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_data: Option<PostData>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Header {
    pub name: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub mime_type: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status: i64,
    pub status_text: String,
    pub http_version: String,
    pub headers: Vec<Header>,
    pub headers_size: i64,
    pub body_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub size: u64,
    pub mime_type: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

/// Serialize `pairs` as a pretty-printed HAR 1.2 document.
///
/// `columns` is accepted for signature symmetry with the tabular encoder
/// and ignored; HAR entries always carry the full fixed field set.
pub fn write_har<W: Write>(sink: W, pairs: &[HttpPair], _columns: &[String]) -> anyhow::Result<()> {
    let doc = build_document(pairs);
    serde_json::to_writer_pretty(sink, &doc)?;
    Ok(())
}

/// Build the in-memory HAR document for `pairs`, one entry per pair in
/// input order.
pub fn build_document(pairs: &[HttpPair]) -> Har {
    Har {
        log: Log {
            version: HAR_VERSION.to_string(),
            creator: Creator {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            entries: pairs.iter().map(build_entry).collect(),
        },
    }
}

fn build_entry(pair: &HttpPair) -> Entry {
    Entry {
        started_date_time: started_date_time(pair.created_at_millis),
        // No timing instrumentation is captured upstream.
        time: 0,
        request: Request {
            method: pair.method.clone(),
            url: pair.url.clone(),
            http_version: HTTP_VERSION.to_string(),
            // Host is the only header reliably available from capture metadata.
            headers: vec![Header {
                name: "Host".to_string(),
                value: pair.host.clone(),
            }],
            headers_size: -1,
            body_size: pair.request_length,
            post_data: pair.request_payload().map(build_post_data),
        },
        response: Response {
            // Any numeric status passes through as-is; only true parse
            // failures fall back to 0.
            status: pair.status_code.parse().unwrap_or(0),
            status_text: String::new(),
            http_version: HTTP_VERSION.to_string(),
            headers: Vec::new(),
            headers_size: -1,
            body_size: pair.response_length,
            content: pair.response_payload().map(build_content),
        },
    }
}

fn started_date_time(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn build_post_data(payload: &Bytes) -> PostData {
    if is_mostly_text(payload) {
        PostData {
            mime_type: "text/plain".to_string(),
            text: String::from_utf8_lossy(payload).into_owned(),
            encoding: None,
        }
    } else {
        PostData {
            mime_type: OCTET_STREAM.to_string(),
            text: STANDARD.encode(payload),
            encoding: Some("base64".to_string()),
        }
    }
}

fn build_content(payload: &Bytes) -> Content {
    let (text, encoding) = if is_mostly_text(payload) {
        (String::from_utf8_lossy(payload).into_owned(), None)
    } else {
        (STANDARD.encode(payload), Some("base64".to_string()))
    };
    Content {
        size: payload.len() as u64,
        // Fixed regardless of actual content; known imprecision kept for
        // compatibility with existing consumers of this exporter.
        mime_type: OCTET_STREAM.to_string(),
        text,
        encoding,
    }
}
