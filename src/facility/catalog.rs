// SPDX-License-Identifier: MPL-2.0
//! Loading of the facility catalog.
//!
//! The default catalog ships inside the binary (`assets/catalog/facilities.toml`).
//! A replacement file can be given on the command line or in the config.

use super::{FacilityDirectory, FacilityRecord};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

const EMBEDDED_CATALOG: &str = "facilities.toml";

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "facility")]
    facilities: Vec<FacilityRecord>,
}

/// Parses catalog TOML: a list of `[[facility]]` tables.
pub fn parse(content: &str) -> Result<FacilityDirectory> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))?;

    if let Some(bad) = file.facilities.iter().find(|r| !r.coordinates.is_finite()) {
        return Err(Error::Catalog(format!(
            "facility {} has non-finite coordinates",
            bad.code
        )));
    }

    FacilityDirectory::new(file.facilities)
}

/// Loads the catalog compiled into the binary.
pub fn load_embedded() -> Result<FacilityDirectory> {
    let file = Asset::get(EMBEDDED_CATALOG)
        .ok_or_else(|| Error::Catalog(format!("missing embedded {EMBEDDED_CATALOG}")))?;
    parse(&String::from_utf8_lossy(file.data.as_ref()))
}

/// Loads a catalog file from disk.
pub fn load_from_path(path: &Path) -> Result<FacilityDirectory> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::GeoPoint;
    use crate::facility::Status;
    use tempfile::tempdir;

    #[test]
    fn embedded_catalog_loads() {
        let dir = load_embedded().expect("embedded catalog must parse");
        assert!(!dir.is_empty());
        let sg = dir.get("SG").expect("SG is part of the default catalog");
        assert_eq!(sg.country, "Singapore");
        assert_eq!(sg.coordinates, GeoPoint::new(103.8, 1.35));
    }

    #[test]
    fn parse_reads_all_fields() {
        let dir = parse(
            r#"
            [[facility]]
            code = "TK01"
            country = "Japan"
            coordinates = [139.69, 35.69]
            status = "Critical"
            company = "Nippon Foods"
            description = "Cold storage"
            "#,
        )
        .unwrap();
        let record = dir.get("TK01").unwrap();
        assert_eq!(record.status, Status::Critical);
        assert_eq!(record.company, "Nippon Foods");
        assert_eq!(record.description, "Cold storage");
    }

    #[test]
    fn parse_rejects_unknown_status() {
        let err = parse(
            r#"
            [[facility]]
            code = "X"
            country = "Nowhere"
            coordinates = [0.0, 0.0]
            status = "Sleeping"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn parse_rejects_non_finite_coordinates() {
        let err = parse(
            r#"
            [[facility]]
            code = "X"
            country = "Nowhere"
            coordinates = [nan, 0.0]
            status = "Healthy"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Catalog(message) if message.contains('X')));
    }

    #[test]
    fn load_from_path_reads_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("facilities.toml");
        fs::write(
            &path,
            "[[facility]]\ncode = \"BK\"\ncountry = \"Thailand\"\ncoordinates = [100.5, 13.75]\nstatus = \"Healthy\"\n",
        )
        .unwrap();

        let dir = load_from_path(&path).unwrap();
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
