//! Robot domain models.

use chrono::{DateTime, Utc};

use r4c_core::{Model, RobotId, Serial, Version};

/// A robot unit in stock.
///
/// Serials are not unique across robots: each record is one physical unit,
/// and several units of the same model/version may be in stock at once.
/// Records are immutable after creation and never deleted.
#[derive(Debug, Clone)]
pub struct Robot {
    pub id: RobotId,
    pub serial: Serial,
    pub model: Model,
    pub version: Version,
    pub created: DateTime<Utc>,
}

/// A validated robot record ready for insertion.
///
/// Constructing one requires parsed [`Model`] and [`Version`] values, so
/// every field has passed its format rule before the store sees it.
#[derive(Debug, Clone)]
pub struct NewRobot {
    pub serial: Serial,
    pub model: Model,
    pub version: Version,
    pub created: DateTime<Utc>,
}

impl NewRobot {
    /// Build a record from validated parts. The serial is derived as
    /// `model + "-" + version`, never supplied independently.
    #[must_use]
    pub fn new(model: Model, version: Version, created: DateTime<Utc>) -> Self {
        let serial = Serial::from_parts(&model, &version);
        Self {
            serial,
            model,
            version,
            created,
        }
    }
}

/// One row of the inventory aggregate: robots counted per (model, version).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotCount {
    pub model: String,
    pub version: String,
    pub count: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_robot_derives_serial() {
        let model = Model::parse("AB").unwrap();
        let version = Version::parse("01").unwrap();
        let new = NewRobot::new(model, version, Utc::now());
        assert_eq!(new.serial.as_str(), "AB-01");
    }
}
