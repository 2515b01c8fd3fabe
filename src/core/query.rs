//! Pure filtering of a sensor snapshot.
//!
//! Unrecognized filter values match nothing, so a stale view degrades to an
//! empty list instead of an error.

use crate::prelude::*;

/// Display filter criteria. The three predicates are combined with AND.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    /// Case-insensitive substring over the name, location and ID.
    /// An empty query matches everything.
    pub query: String,

    pub status: StatusFilter,

    pub type_: TypeFilter,
}

/// Returns the sensors matching all active predicates, preserving the
/// snapshot order.
pub fn filter(sensors: &[Sensor], criteria: &Criteria) -> Vec<Sensor> {
    sensors
        .iter()
        .filter(|sensor| {
            (criteria.query.is_empty() || sensor.matches_query(&criteria.query))
                && criteria.status.matches(sensor)
                && criteria.type_.matches(sensor)
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(Status),
    Unrecognized,
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

impl From<&str> for StatusFilter {
    fn from(value: &str) -> Self {
        match value {
            "all" => Self::All,
            "online" => Self::Only(Status::Online),
            "offline" => Self::Only(Status::Offline),
            "warning" => Self::Only(Status::Warning),
            "maintenance" => Self::Only(Status::Maintenance),
            _ => Self::Unrecognized,
        }
    }
}

impl StatusFilter {
    fn matches(&self, sensor: &Sensor) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => sensor.status == *status,
            Self::Unrecognized => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    Only(SensorType),
    Unrecognized,
}

impl Default for TypeFilter {
    fn default() -> Self {
        Self::All
    }
}

impl From<&str> for TypeFilter {
    fn from(value: &str) -> Self {
        match value {
            "all" => Self::All,
            "flow" => Self::Only(SensorType::Flow),
            "quality" => Self::Only(SensorType::Quality),
            "level" => Self::Only(SensorType::Level),
            "pressure" => Self::Only(SensorType::Pressure),
            _ => Self::Unrecognized,
        }
    }
}

impl TypeFilter {
    fn matches(&self, sensor: &Sensor) -> bool {
        match self {
            Self::All => true,
            Self::Only(type_) => sensor.type_() == *type_,
            Self::Unrecognized => false,
        }
    }
}
