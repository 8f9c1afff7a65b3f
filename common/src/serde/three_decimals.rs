// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Serializes a floating-point value with exactly three decimal places.
//!
//! Consumers of the score output expect the digits of a `%.3f` rendering,
//! including trailing zeros (`100.000`). The value is formatted from its exact
//! binary representation and written into the JSON document as a raw number.
//! This only has an effect with the `serde_json` serializer.

use serde::{self, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

/// Formats `value` like `%.3f`.
pub fn format(value: f64) -> String {
    format!("{value:.3}")
}

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let raw = RawValue::from_string(format(*value)).map_err(serde::ser::Error::custom)?;
    raw.serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer)
}
