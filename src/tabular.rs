// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Tabular (CSV) export of captured pairs.

use crate::columns::project;
use crate::pair::HttpPair;
use std::io::Write;

/// Write a CSV document: a header row containing `columns` verbatim in the
/// caller's order, then one row per pair with cells from the column
/// projector.
///
/// Every field is quoted and embedded quotes are doubled; records end with
/// `\n`. Output is UTF-8 and rows follow the input pair order.
pub fn write_csv<W: Write>(
    mut sink: W,
    pairs: &[HttpPair],
    columns: &[String],
) -> anyhow::Result<()> {
    // The csv writer serializes a zero-field record as one quoted empty
    // field; a deselected-everything column list must emit bare newlines,
    // one per record, header included.
    if columns.is_empty() {
        for _ in 0..=pairs.len() {
            sink.write_all(b"\n")?;
        }
        sink.flush()?;
        return Ok(());
    }

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(sink);

    writer.write_record(columns)?;
    for pair in pairs {
        writer.write_record(columns.iter().map(|name| project(pair, name)))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{COMPLETE_MARK, INCOMPLETE_MARK};
    use crate::test_helpers::{make_incomplete_pair, make_test_pair, render_csv};

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn header_row_matches_requested_columns() -> anyhow::Result<()> {
        let out = render_csv(&[], &cols(&["Method", "URL", "Status"]))?;
        assert_eq!(out, "\"Method\",\"URL\",\"Status\"\n");
        Ok(())
    }

    #[test]
    fn one_row_per_pair_in_input_order() -> anyhow::Result<()> {
        let mut a = make_test_pair();
        a.method = "GET".to_string();
        let mut b = make_test_pair();
        b.method = "POST".to_string();
        let out = render_csv(&[a, b], &cols(&["Method"]))?;
        assert_eq!(out, "\"Method\"\n\"GET\"\n\"POST\"\n");
        Ok(())
    }

    #[test]
    fn embedded_quotes_are_doubled() -> anyhow::Result<()> {
        let mut pair = make_test_pair();
        pair.process_info = "say \"hi\"".to_string();
        let out = render_csv(&[pair], &cols(&["Process"]))?;
        assert_eq!(out, "\"Process\"\n\"say \"\"hi\"\"\"\n");
        Ok(())
    }

    #[test]
    fn unknown_column_yields_empty_cells_but_keeps_header() -> anyhow::Result<()> {
        let out = render_csv(
            &[make_test_pair(), make_test_pair()],
            &cols(&["Unknown", "Status"]),
        )?;
        assert_eq!(out, "\"Unknown\",\"Status\"\n\"\",\"200\"\n\"\",\"200\"\n");
        Ok(())
    }

    #[test]
    fn complete_column_renders_marks() -> anyhow::Result<()> {
        let out = render_csv(
            &[make_test_pair(), make_incomplete_pair()],
            &cols(&["Complete"]),
        )?;
        let expected = format!("\"Complete\"\n\"{COMPLETE_MARK}\"\n\"{INCOMPLETE_MARK}\"\n");
        assert_eq!(out, expected);
        Ok(())
    }

    #[test]
    fn missing_request_body_is_an_empty_cell() -> anyhow::Result<()> {
        let out = render_csv(&[make_incomplete_pair()], &cols(&["Request Body"]))?;
        assert_eq!(out, "\"Request Body\"\n\"\"\n");
        Ok(())
    }

    #[test]
    fn empty_column_list_produces_blank_lines() -> anyhow::Result<()> {
        // Degenerate but legal: the host may deselect every column. Each
        // record is a bare newline, never a quoted empty field.
        let out = render_csv(&[make_test_pair()], &[])?;
        assert_eq!(out, "\n\n");

        let out = render_csv(&[make_test_pair(), make_incomplete_pair()], &[])?;
        assert_eq!(out, "\n\n\n");

        let out = render_csv(&[], &[])?;
        assert_eq!(out, "\n");
        Ok(())
    }

    #[test]
    fn length_columns_render_decimal_strings() -> anyhow::Result<()> {
        let mut pair = make_test_pair();
        pair.request_length = 42;
        pair.response_length = 65536;
        let out = render_csv(&[pair], &cols(&["Req Len", "Resp Len"]))?;
        assert_eq!(out, "\"Req Len\",\"Resp Len\"\n\"42\",\"65536\"\n");
        Ok(())
    }
}
