// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Column-name-to-value projection for tabular export.
//!
//! The host UI lets the user pick an arbitrary subset of columns, so the
//! projector must tolerate any name it does not recognize: unknown names
//! project to the empty string, never an error.

use crate::pair::HttpPair;
use bytes::Bytes;

/// Glyph rendered in the `Complete` column once both sides are captured.
pub const COMPLETE_MARK: &str = "\u{2713}";

/// Rendered in the `Complete` column while a pair is still in flight.
pub const INCOMPLETE_MARK: &str = "...";

/// All recognized column names, in display order. Hosts building a
/// column-selection UI present exactly this list.
pub const ALL_COLUMNS: &[&str] = &[
    "#",
    "Time",
    "Method",
    "Host",
    "URL",
    "Status",
    "Req Len",
    "Resp Len",
    "Process",
    "Complete",
    "Request Body",
    "Response Body",
];

/// A recognized export column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Time,
    Method,
    Host,
    Url,
    Status,
    RequestLength,
    ResponseLength,
    Process,
    Complete,
    RequestBody,
    ResponseBody,
}

impl Column {
    /// Resolve a column name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "#" => Some(Self::Id),
            "Time" => Some(Self::Time),
            "Method" => Some(Self::Method),
            "Host" => Some(Self::Host),
            "URL" => Some(Self::Url),
            "Status" => Some(Self::Status),
            "Req Len" => Some(Self::RequestLength),
            "Resp Len" => Some(Self::ResponseLength),
            "Process" => Some(Self::Process),
            "Complete" => Some(Self::Complete),
            "Request Body" => Some(Self::RequestBody),
            "Response Body" => Some(Self::ResponseBody),
            _ => None,
        }
    }

    /// Project this column's display value for one pair.
    pub fn project(self, pair: &HttpPair) -> String {
        match self {
            Self::Id => pair.id.clone(),
            Self::Time => pair.timestamp.clone(),
            Self::Method => pair.method.clone(),
            Self::Host => pair.host.clone(),
            Self::Url => pair.url.clone(),
            Self::Status => pair.status_code.clone(),
            Self::RequestLength => pair.request_length.to_string(),
            Self::ResponseLength => pair.response_length.to_string(),
            Self::Process => pair.process_info.clone(),
            Self::Complete => if pair.complete {
                COMPLETE_MARK
            } else {
                INCOMPLETE_MARK
            }
            .to_string(),
            Self::RequestBody => decode_payload(pair.request_payload()),
            Self::ResponseBody => decode_payload(pair.response_payload()),
        }
    }
}

/// Project a named column for one pair; unrecognized names yield `""`.
pub fn project(pair: &HttpPair, column: &str) -> String {
    Column::from_name(column).map_or_else(String::new, |c| c.project(pair))
}

fn decode_payload(payload: Option<&Bytes>) -> String {
    payload.map_or_else(String::new, |b| String::from_utf8_lossy(b).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{make_incomplete_pair, make_test_pair};
    use rstest::rstest;

    #[rstest]
    #[case("Method", "GET")]
    #[case("Host", "example.com")]
    #[case("URL", "http://example.com/index.html")]
    #[case("Status", "200")]
    #[case("Time", "2024-01-01 00:00:00")]
    #[case("Process", "curl (pid 4242)")]
    #[case("Complete", COMPLETE_MARK)]
    #[case("Request Body", "hello")]
    #[case("Response Body", "world")]
    fn projects_known_columns(#[case] column: &str, #[case] expected: &str) {
        let pair = make_test_pair();
        assert_eq!(project(&pair, column), expected);
    }

    #[rstest]
    #[case("Unknown")]
    #[case("method")] // case-sensitive: lowercase is not recognized
    #[case("")]
    fn unrecognized_names_project_to_empty(#[case] column: &str) {
        let pair = make_test_pair();
        assert_eq!(project(&pair, column), "");
        assert!(Column::from_name(column).is_none());
    }

    #[test]
    fn id_column_projects_the_pair_id() {
        let pair = make_test_pair();
        assert_eq!(project(&pair, "#"), pair.id);
    }

    #[test]
    fn length_columns_round_trip_as_integers() {
        let mut pair = make_test_pair();
        pair.request_length = 1234;
        pair.response_length = 0;
        assert_eq!(project(&pair, "Req Len").parse::<u64>().unwrap(), 1234);
        assert_eq!(project(&pair, "Resp Len").parse::<u64>().unwrap(), 0);
    }

    #[test]
    fn incomplete_pair_projects_safely() {
        let pair = make_incomplete_pair();
        assert_eq!(project(&pair, "Complete"), INCOMPLETE_MARK);
        assert_eq!(project(&pair, "Status"), "");
        assert_eq!(project(&pair, "Response Body"), "");
    }

    #[test]
    fn body_columns_decode_lossily() {
        let mut pair = make_test_pair();
        pair.request = Some(crate::pair::CapturedMessage::with_payload(vec![
            b'h', b'i', 0xff,
        ]));
        assert_eq!(project(&pair, "Request Body"), "hi\u{fffd}");
    }

    #[test]
    fn every_listed_column_is_recognized() {
        for name in ALL_COLUMNS {
            assert!(Column::from_name(name).is_some(), "unmapped column {name}");
        }
    }
}
