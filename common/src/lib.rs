// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Common Modul for the cross-country scorer
//!
//! Provides the common data types that are used across every crate: track points,
//! bonus zones, the score result and the flight summary.

pub mod bonus;
pub mod flight;
pub mod position;
pub mod score;
pub mod serde;
pub mod test_helper;

#[cfg(test)]
mod tests;
