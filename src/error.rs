// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(String),
    /// A facility code that is not part of the loaded directory.
    UnknownFacility(String),
    /// Two records in a catalog share the same code.
    DuplicateFacility(String),
    /// A camera target with a non-finite coordinate or a non-positive zoom.
    InvalidTarget(String),
}

impl Error {
    /// Returns the i18n message key used when surfacing this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Catalog(_) | Error::DuplicateFacility(_) => "error-catalog",
            Error::UnknownFacility(_) => "error-unknown-facility",
            Error::InvalidTarget(_) => "error-invalid-target",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::UnknownFacility(code) => write!(f, "Unknown facility: {}", code),
            Error::DuplicateFacility(code) => write!(f, "Duplicate facility code: {}", code),
            Error::InvalidTarget(e) => write!(f, "Invalid camera target: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn unknown_facility_names_the_code() {
        let err = Error::UnknownFacility("XX99".into());
        assert!(format!("{}", err).contains("XX99"));
        assert_eq!(err.i18n_key(), "error-unknown-facility");
    }

    #[test]
    fn duplicate_facility_shares_catalog_key() {
        assert_eq!(
            Error::DuplicateFacility("SG".into()).i18n_key(),
            Error::Catalog("bad".into()).i18n_key()
        );
    }
}
