//! Robot serial number types.
//!
//! A robot is identified by its serial number, which is always the model
//! code and the version joined by a hyphen, e.g. `AB-12`. The parts are
//! validated independently; the serial itself is constructed from already
//! validated parts and never supplied by a caller on its own.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static MODEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{2}$").expect("Invalid regex"));

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{1,2}$").expect("Invalid regex"));

static SERIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{2}-[A-Za-z0-9]{1,2}$").expect("Invalid regex"));

/// Errors that can occur when parsing a [`Model`], [`Version`] or [`Serial`].
///
/// The messages are stable and are returned verbatim in HTTP error bodies.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SerialError {
    /// The model code is not two letters or digits.
    #[error("Model must be a two-character sequence of letters or digits.")]
    ModelFormat,
    /// The version is not one or two letters or digits.
    #[error("Version must be a one or two-character sequence of letters or digits.")]
    VersionFormat,
    /// The serial is not `model-version`.
    #[error(
        "Serial must be in the format 'model-version', where 'model' is 2 letters or digits and 'version' is 1 or 2 letters or digits."
    )]
    SerialFormat,
}

/// A robot model code: exactly two letters or digits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Model(String);

impl Model {
    /// Parse a `Model` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`SerialError::ModelFormat`] if the input is not exactly two
    /// letters or digits.
    pub fn parse(s: &str) -> Result<Self, SerialError> {
        if MODEL_RE.is_match(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(SerialError::ModelFormat)
        }
    }

    /// Returns the model code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Model` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A robot version: one or two letters or digits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    /// Parse a `Version` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`SerialError::VersionFormat`] if the input is not one or two
    /// letters or digits.
    pub fn parse(s: &str) -> Result<Self, SerialError> {
        if VERSION_RE.is_match(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(SerialError::VersionFormat)
        }
    }

    /// Returns the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Version` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A robot serial number: `model-version`, at most 5 characters.
///
/// ## Examples
///
/// ```
/// use r4c_core::{Model, Serial, Version};
///
/// let model = Model::parse("AB").unwrap();
/// let version = Version::parse("01").unwrap();
/// assert_eq!(Serial::from_parts(&model, &version).as_str(), "AB-01");
///
/// assert!(Serial::parse("AB-01").is_ok());
/// assert!(Serial::parse("AB01").is_err());   // missing hyphen
/// assert!(Serial::parse("ABC-1").is_err());  // model too long
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Serial(String);

impl Serial {
    /// Parse a `Serial` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`SerialError::SerialFormat`] if the input is not
    /// `model-version` with a two-character model and a one or two-character
    /// version.
    pub fn parse(s: &str) -> Result<Self, SerialError> {
        if SERIAL_RE.is_match(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(SerialError::SerialFormat)
        }
    }

    /// Build a `Serial` from validated parts.
    ///
    /// The result is always `model + "-" + version`, which satisfies the
    /// serial pattern by construction.
    #[must_use]
    pub fn from_parts(model: &Model, version: &Version) -> Self {
        Self(format!("{}-{}", model.as_str(), version.as_str()))
    }

    /// Returns the serial as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Serial` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Serial {
    type Err = SerialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Serial {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_models() {
        assert!(Model::parse("AB").is_ok());
        assert!(Model::parse("a1").is_ok());
        assert!(Model::parse("00").is_ok());
    }

    #[test]
    fn test_parse_invalid_models() {
        assert_eq!(Model::parse(""), Err(SerialError::ModelFormat));
        assert_eq!(Model::parse("A"), Err(SerialError::ModelFormat));
        assert_eq!(Model::parse("ABC"), Err(SerialError::ModelFormat));
        assert_eq!(Model::parse("A-"), Err(SerialError::ModelFormat));
        assert_eq!(Model::parse("Ж1"), Err(SerialError::ModelFormat));
    }

    #[test]
    fn test_parse_valid_versions() {
        assert!(Version::parse("1").is_ok());
        assert!(Version::parse("01").is_ok());
        assert!(Version::parse("xy").is_ok());
    }

    #[test]
    fn test_parse_invalid_versions() {
        assert_eq!(Version::parse(""), Err(SerialError::VersionFormat));
        assert_eq!(Version::parse("123"), Err(SerialError::VersionFormat));
        assert_eq!(Version::parse("1!"), Err(SerialError::VersionFormat));
    }

    #[test]
    fn test_parse_valid_serials() {
        assert!(Serial::parse("AB-01").is_ok());
        assert!(Serial::parse("AB-1").is_ok());
        assert!(Serial::parse("a1-b2").is_ok());
    }

    #[test]
    fn test_parse_invalid_serials() {
        assert_eq!(Serial::parse(""), Err(SerialError::SerialFormat));
        assert_eq!(Serial::parse("AB01"), Err(SerialError::SerialFormat));
        assert_eq!(Serial::parse("ABC-1"), Err(SerialError::SerialFormat));
        assert_eq!(Serial::parse("AB-123"), Err(SerialError::SerialFormat));
        assert_eq!(Serial::parse("AB-"), Err(SerialError::SerialFormat));
        assert_eq!(Serial::parse("-01"), Err(SerialError::SerialFormat));
        assert_eq!(Serial::parse("invalid-serial"), Err(SerialError::SerialFormat));
    }

    #[test]
    fn test_from_parts_matches_pattern() {
        let model = Model::parse("R2").unwrap();
        let version = Version::parse("D2").unwrap();
        let serial = Serial::from_parts(&model, &version);
        assert_eq!(serial.as_str(), "R2-D2");
        assert!(Serial::parse(serial.as_str()).is_ok());
    }

    #[test]
    fn test_from_parts_max_length() {
        // Longest possible serial: 2 + 1 + 2 characters.
        let model = Model::parse("AB").unwrap();
        let version = Version::parse("12").unwrap();
        assert_eq!(Serial::from_parts(&model, &version).as_str().len(), 5);
    }

    #[test]
    fn test_error_messages_are_stable() {
        assert_eq!(
            SerialError::ModelFormat.to_string(),
            "Model must be a two-character sequence of letters or digits."
        );
        assert_eq!(
            SerialError::VersionFormat.to_string(),
            "Version must be a one or two-character sequence of letters or digits."
        );
        assert!(SerialError::SerialFormat.to_string().starts_with("Serial must be"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let serial = Serial::parse("AB-01").unwrap();
        let json = serde_json::to_string(&serial).unwrap();
        assert_eq!(json, "\"AB-01\"");

        let parsed: Serial = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, serial);
    }
}
