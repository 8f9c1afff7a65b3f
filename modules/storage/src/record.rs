// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Field access helpers shared by the CSV parsers.

use crate::error::RecordError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::str::FromStr;

pub(crate) fn reader(content: &str, has_headers: bool) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes())
}

pub(crate) fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |pos| pos.line())
}

pub(crate) fn line_of_error(error: &csv::Error) -> u64 {
    error.position().map_or(0, |pos| pos.line())
}

/// Returns the non-empty field at `index`.
pub(crate) fn field<'a>(
    record: &'a StringRecord,
    index: usize,
    name: &'static str,
) -> Result<&'a str, RecordError> {
    match record.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(RecordError::MissingField(name)),
    }
}

pub(crate) fn number<T: FromStr>(
    record: &StringRecord,
    index: usize,
    name: &'static str,
) -> Result<T, RecordError> {
    let value = field(record, index, name)?;
    value.parse().map_err(|_| RecordError::InvalidNumber {
        field: name,
        value: value.to_string(),
    })
}

/// Like [`number`], but an absent or empty field is `None`.
pub(crate) fn optional_number<T: FromStr>(
    record: &StringRecord,
    index: usize,
    name: &'static str,
) -> Result<Option<T>, RecordError> {
    match record.get(index) {
        Some(value) if !value.is_empty() => number(record, index, name).map(Some),
        _ => Ok(None),
    }
}
