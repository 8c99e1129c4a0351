// SPDX-License-Identifier: MPL-2.0
//! Facility records and the read-only directory they are looked up in.
//!
//! The directory is loaded once at startup (see [`catalog`]) and never
//! mutated afterwards. Lookups are by facility code or by country.

pub mod catalog;

use crate::camera::GeoPoint;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Operational status of a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Healthy,
    #[serde(rename = "At-Risk")]
    AtRisk,
    Critical,
}

impl Status {
    /// All statuses in legend order.
    pub const ALL: [Status; 3] = [Status::Healthy, Status::AtRisk, Status::Critical];

    /// Returns the i18n message key for this status.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Status::Healthy => "status-healthy",
            Status::AtRisk => "status-at-risk",
            Status::Critical => "status-critical",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Healthy => write!(f, "Healthy"),
            Status::AtRisk => write!(f, "At-Risk"),
            Status::Critical => write!(f, "Critical"),
        }
    }
}

/// A point of interest plotted on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    /// Unique identifier, also shown as the office label.
    pub code: String,
    pub country: String,
    pub coordinates: GeoPoint,
    pub status: Status,
    /// Customer operating the facility.
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
}

/// Ordered, immutable collection of facility records.
#[derive(Debug, Clone, Default)]
pub struct FacilityDirectory {
    records: Vec<FacilityRecord>,
    index: HashMap<String, usize>,
}

impl FacilityDirectory {
    /// Builds a directory, keeping the given order.
    ///
    /// Fails with [`Error::DuplicateFacility`] if two records share a code.
    pub fn new(records: Vec<FacilityRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.code.clone(), position).is_some() {
                return Err(Error::DuplicateFacility(record.code.clone()));
            }
        }
        Ok(Self { records, index })
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&FacilityRecord> {
        self.index.get(code).map(|&position| &self.records[position])
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Records located in `country`, compared case-insensitively.
    pub fn by_country<'a>(&'a self, country: &'a str) -> impl Iterator<Item = &'a FacilityRecord> {
        self.records
            .iter()
            .filter(move |record| record.country.eq_ignore_ascii_case(country))
    }

    /// Records in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, FacilityRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a FacilityDirectory {
    type Item = &'a FacilityRecord;
    type IntoIter = std::slice::Iter<'a, FacilityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn record(code: &str, country: &str, lon: f64, lat: f64) -> FacilityRecord {
        FacilityRecord {
            code: code.to_string(),
            country: country.to_string(),
            coordinates: GeoPoint::new(lon, lat),
            status: Status::Healthy,
            company: format!("{code} Corp"),
            description: String::new(),
        }
    }

    /// Small directory with two facilities in Japan.
    pub fn directory() -> FacilityDirectory {
        FacilityDirectory::new(vec![
            record("SG", "Singapore", 103.8, 1.35),
            record("TK01", "Japan", 139.69, 35.69),
            record("OS01", "Japan", 135.5, 34.69),
            record("BK", "Thailand", 100.5, 13.75),
        ])
        .expect("fixture codes are unique")
    }
}
