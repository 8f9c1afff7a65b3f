// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Parser for bonus zone CSV files.
//!
//! The file has no header. Every record is
//! `kind,amount,latitude,longitude,radius_km` with `kind` being `P` for a
//! points bonus or `M` for a multiplier bonus.

use crate::{
    LoadReport,
    error::RecordError,
    record::{field, line_of, line_of_error, number, reader},
};
use common::{
    bonus::{BonusKind, BonusZone},
    position::Point,
};
use csv::StringRecord;

fn parse_zone(record: &StringRecord) -> Result<BonusZone, RecordError> {
    let kind: BonusKind = field(record, 0, "kind")?.parse()?;
    let amount = number::<f64>(record, 1, "amount")?;
    let latitude = number::<f64>(record, 2, "latitude")?;
    let longitude = number::<f64>(record, 3, "longitude")?;
    let radius_km = number::<f64>(record, 4, "radius")?;
    let center = Point::checked(latitude, longitude)?;
    Ok(BonusZone::new(kind, amount, center, radius_km)?)
}

/// Parses the content of a bonus zone file.
///
/// Unknown kind codes, invalid numbers, out-of-range centers and non-positive
/// radii reject the record. Empty lines are ignored.
pub fn parse_bonus_csv(content: &str) -> LoadReport<BonusZone> {
    let mut report = LoadReport::default();
    for result in reader(content, false).records() {
        match result {
            Ok(record) => match parse_zone(&record) {
                Ok(zone) => report.items.push(zone),
                Err(reason) => report.reject(line_of(&record), reason, "bonus zone"),
            },
            Err(e) => report.reject(line_of_error(&e), RecordError::Csv(e.to_string()), "bonus zone"),
        }
    }
    report
}
